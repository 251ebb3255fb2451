//! Rules for a pawnless race to the last rank.
//!
//! Each side has a king, a rook, two bishops and two knights, lined up on
//! the first two ranks. There are no pawns, queens, castling, en passant or
//! promotion. The race ends when a piece reaches the eighth rank. Moves that
//! leave the moving king attacked, or that attack the enemy king, are
//! illegal.
//!
//! # Examples
//!
//! Play moves:
//!
//! ```
//! use kingrace::{Color, Game, GameState, Role, Square};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("a2", "a3"));
//!
//! let a3: Square = "a3".parse()?;
//! assert_eq!(game.board().piece_at(a3), Some(Role::Rook.of(Color::White)));
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(game.game_state(), GameState::Unfinished);
//! # Ok::<_, kingrace::ParseSquareError>(())
//! ```
//!
//! Find out why a move was rejected:
//!
//! ```
//! use kingrace::{Game, MoveError};
//!
//! let mut game = Game::new();
//! assert_eq!(game.play("b1", "d3"), Err(MoveError::IllegalGeometry));
//! assert_eq!(game.play("h2", "h3"), Err(MoveError::WrongTurn));
//! ```
//!
//! # Feature flags
//!
//! * `std`: Enables `std` support of dependencies. Enabled by default.
//! * `cli`: Builds the `kingrace` terminal binary and pulls in
//!   `tracing-subscriber` for it. Enabled by default. Library users can turn
//!   it off with `default-features = false, features = ["std"]`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Color`], [`Role`], [`Square`] and [`GameState`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! Rejected and played moves are reported as `tracing` events at `debug`
//! level, finished games at `info` level. The library never installs a
//! subscriber.

#![doc(html_root_url = "https://docs.rs/kingrace/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod game;
mod registry;
mod role;
mod square;
mod types;

pub mod attacks;
pub mod board;
pub mod check;

pub use board::{Board, Undo};
pub use check::MovedKind;
pub use color::{ByColor, Color, ParseColorError};
pub use game::{Game, GameState, MoveError, ParseGameStateError, SetupError};
pub use registry::{PieceRegistry, Status};
pub use role::Role;
pub use square::{ParseSquareError, Square};
pub use types::{Move, MoveList, Piece, Slot};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
