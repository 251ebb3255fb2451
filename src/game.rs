// This file is part of the kingrace library.
// Copyright (C) 2026 The kingrace developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

use tracing::{debug, info};

use crate::{
    attacks,
    board::{Board, Undo},
    check::{self, MovedKind},
    color::Color,
    registry::PieceRegistry,
    role::Role,
    square::{ParseSquareError, Square},
    types::{Move, MoveList, Piece},
};

/// Progress of a game.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum GameState {
    #[default]
    Unfinished,
    WhiteWon,
    BlackWon,
    Tie,
}

impl GameState {
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameState::Unfinished)
    }

    /// The winning side, if the game was decided.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
            GameState::Unfinished | GameState::Tie => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::Unfinished => "UNFINISHED",
            GameState::WhiteWon => "WHITE_WON",
            GameState::BlackWon => "BLACK_WON",
            GameState::Tie => "TIE",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a [`GameState`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseGameStateError;

impl fmt::Display for ParseGameStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid game state")
    }
}

impl Error for ParseGameStateError {}

impl FromStr for GameState {
    type Err = ParseGameStateError;

    fn from_str(s: &str) -> Result<GameState, ParseGameStateError> {
        Ok(match s {
            "UNFINISHED" => GameState::Unfinished,
            "WHITE_WON" => GameState::WhiteWon,
            "BLACK_WON" => GameState::BlackWon,
            "TIE" => GameState::Tie,
            _ => return Err(ParseGameStateError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GameState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GameState {
    fn deserialize<D>(deserializer: D) -> Result<GameState, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Reason for rejecting a move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MoveError {
    /// The game has already ended.
    GameOver,
    /// A square name is malformed or off the board.
    InvalidSquare(ParseSquareError),
    /// There is no piece on the source square.
    EmptySquare,
    /// The piece on the source square belongs to the side not to move.
    WrongTurn,
    /// The target square holds a piece of the moving side.
    OwnPiece,
    /// The target square holds a king.
    KingCapture,
    /// The piece does not move that way, or its path is blocked.
    IllegalGeometry,
    /// The move would leave a king attacked.
    Check,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveError::GameOver => "game is over",
            MoveError::InvalidSquare(_) => "invalid square",
            MoveError::EmptySquare => "no piece on source square",
            MoveError::WrongTurn => "piece belongs to the other side",
            MoveError::OwnPiece => "target square holds an own piece",
            MoveError::KingCapture => "kings cannot be captured",
            MoveError::IllegalGeometry => "piece cannot move like that",
            MoveError::Check => "king would be in check",
        })
    }
}

impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseSquareError> for MoveError {
    fn from(err: ParseSquareError) -> MoveError {
        MoveError::InvalidSquare(err)
    }
}

/// Reason for rejecting a custom setup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SetupError {
    /// A side has no king.
    NoKing { color: Color },
    /// A side has more than one king.
    TooManyKings { color: Color },
    /// The same named piece stands on two squares.
    DuplicatePiece { piece: Piece },
    /// The piece is not part of a side's starting set, such as a second
    /// rook or a secondary king.
    UnknownPiece { piece: Piece },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoKing { color } => write!(f, "{color} has no king"),
            SetupError::TooManyKings { color } => write!(f, "{color} has more than one king"),
            SetupError::DuplicatePiece { piece } => write!(f, "duplicate {piece}"),
            SetupError::UnknownPiece { piece } => write!(f, "{piece} is not a starting piece"),
        }
    }
}

impl Error for SetupError {}

/// A game in progress: board, side to move and outcome bookkeeping.
///
/// A `Game` has a single owner. Moves take `&mut self`, so sharing a game
/// between threads needs outside synchronization such as a `Mutex`.
///
/// # Examples
///
/// ```
/// use kingrace::{Game, GameState};
///
/// let mut game = Game::new();
/// assert_eq!(game.game_state(), GameState::Unfinished);
///
/// assert!(game.make_move("a2", "a3")); // white rook
/// assert!(!game.make_move("a3", "a4")); // black to move
/// assert!(game.make_move("h2", "h3")); // black rook
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    registry: PieceRegistry,
    turn: Color,
    state: GameState,
    win_progress: u32,
}

impl Game {
    /// A new game from the starting position, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            registry: PieceRegistry::new(),
            turn: Color::White,
            state: GameState::Unfinished,
            win_progress: 0,
        }
    }

    /// Starts an unfinished game from an arbitrary board.
    ///
    /// # Errors
    ///
    /// Every piece must belong to its side's starting set, each side needs
    /// exactly one king, and no named piece may appear twice.
    pub fn from_board(board: Board, turn: Color) -> Result<Game, SetupError> {
        if let Some((_, piece)) = board
            .pieces()
            .find(|&(_, piece)| !Piece::complement(piece.color).any(|p| p == piece))
        {
            return Err(SetupError::UnknownPiece { piece });
        }

        for color in Color::ALL {
            let kings = board
                .pieces()
                .filter(|&(_, piece)| piece.color == color && piece.role == Role::King)
                .count();
            match kings {
                0 => return Err(SetupError::NoKing { color }),
                1 => (),
                _ => return Err(SetupError::TooManyKings { color }),
            }
        }

        for (sq, piece) in board.pieces() {
            if board.pieces().any(|(other_sq, other)| other == piece && other_sq != sq) {
                return Err(SetupError::DuplicatePiece { piece });
            }
        }

        Ok(Game {
            registry: PieceRegistry::from_board(&board),
            board,
            turn,
            state: GameState::Unfinished,
            win_progress: 0,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// How often the white king has been seen on the last rank after a move.
    #[inline]
    pub fn win_progress(&self) -> u32 {
        self.win_progress
    }

    /// Attempts a move given as two square names like `"a2"` and `"a3"`.
    ///
    /// Returns `false` and leaves the game untouched if the move is
    /// rejected for any reason. See [`Game::play()`] for the reason.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.play(from, to).is_ok()
    }

    /// Attempts a move given as two square names.
    ///
    /// # Errors
    ///
    /// Reports the first check that failed, in this order: the game is
    /// still running, both squares parse, the source holds a piece of the
    /// side to move, the target holds neither an own piece nor a king, the
    /// piece moves that way, and no king ends up attacked.
    pub fn play(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let result = self.parse_and_play(from, to);
        if let Err(ref err) = result {
            debug!(from, to, turn = %self.turn, %err, "move rejected");
        }
        result
    }

    fn parse_and_play(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver);
        }
        let m = Move {
            from: from.parse()?,
            to: to.parse()?,
        };
        self.play_move(m)
    }

    /// Attempts a move between two already parsed squares.
    ///
    /// # Errors
    ///
    /// See [`Game::play()`].
    pub fn play_move(&mut self, m: Move) -> Result<(), MoveError> {
        let piece = self.validate(m)?;
        let undo = try_apply(&mut self.board, m, piece)?;
        self.commit(m, piece, undo);
        Ok(())
    }

    /// Tests if [`Game::play_move()`] would accept the move.
    pub fn is_legal(&self, m: Move) -> bool {
        self.validate(m)
            .and_then(|piece| {
                let mut scratch = self.board.clone();
                try_apply(&mut scratch, m, piece).map(drop)
            })
            .is_ok()
    }

    /// Every move the side to move may play.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let mut scratch = self.board.clone();

        for (from, piece) in self.board.pieces() {
            if piece.color != self.turn {
                continue;
            }
            for to in Square::all() {
                let m = Move { from, to };
                if self.validate(m).is_err() {
                    continue;
                }
                if let Ok(undo) = try_apply(&mut scratch, m, piece) {
                    scratch.undo(undo);
                    moves.push(m);
                }
            }
        }

        moves
    }

    /// Checks everything that does not require trying the move on the
    /// board, returning the moving piece.
    fn validate(&self, m: Move) -> Result<Piece, MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver);
        }

        let piece = self.board.piece_at(m.from).ok_or(MoveError::EmptySquare)?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn);
        }

        match self.board.piece_at(m.to) {
            Some(target) if target.color == self.turn => return Err(MoveError::OwnPiece),
            Some(target) if target.role == Role::King => return Err(MoveError::KingCapture),
            _ => (),
        }

        if !attacks::is_valid_move(piece.role, m.from, m.to, &self.board) {
            return Err(MoveError::IllegalGeometry);
        }

        Ok(piece)
    }

    fn commit(&mut self, m: Move, piece: Piece, undo: Undo) {
        let mover = self.turn;
        if let Some(captured) = undo.captured() {
            self.registry.capture(captured);
        }
        debug!(%mover, %piece, %m, captured = ?undo.captured(), "move played");

        let white_rank = self.board.king_of(Color::White).map(Square::rank);
        let black_rank = self.board.king_of(Color::Black).map(Square::rank);

        self.update_state(m.to, mover, white_rank, black_rank);

        if white_rank == Some(Square::LAST_RANK) {
            self.win_progress += 1;
            if self.win_progress > 1 {
                self.update_state(m.to, mover, white_rank, black_rank);
            }
        }

        self.turn = !mover;
    }

    /// Decides the game from the square a piece just reached and where the
    /// kings stand.
    ///
    /// Black reaching the last rank ties if the white king is already
    /// there, and wins otherwise. White reaching the last rank wins unless
    /// the black king stands one rank short of it and may still draw level.
    /// In that case White wins once the white king has been seen on the
    /// last rank after two moves.
    fn update_state(
        &mut self,
        to: Square,
        mover: Color,
        white_rank: Option<u8>,
        black_rank: Option<u8>,
    ) {
        let reached_goal = to.is_last_rank();

        let state = if reached_goal
            && white_rank == Some(Square::LAST_RANK)
            && mover == Color::Black
        {
            GameState::Tie
        } else if reached_goal
            && black_rank != Some(Square::LAST_RANK - 1)
            && mover == Color::White
        {
            GameState::WhiteWon
        } else if reached_goal && mover == Color::Black {
            GameState::BlackWon
        } else if self.win_progress == 2 {
            GameState::WhiteWon
        } else {
            return;
        };

        if state != self.state {
            info!(%state, %mover, "game finished");
        }
        self.state = state;
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

/// Plays the move on the board unless it leaves the examined king attacked,
/// in which case the board is restored.
fn try_apply(board: &mut Board, m: Move, piece: Piece) -> Result<Undo, MoveError> {
    let undo = board.apply(m.from, m.to);
    if check::is_check(board, MovedKind::of(piece)) {
        board.undo(undo);
        return Err(MoveError::Check);
    }
    Ok(undo)
}
