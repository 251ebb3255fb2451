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

//! Movement geometry of each piece type.
//!
//! All predicates are pure functions of the squares involved. Only
//! [`path_clear()`] and [`is_valid_move()`] look at the board.
//!
//! # Examples
//!
//! ```
//! use kingrace::{attacks, Board, Role, Square};
//!
//! let board = Board::new();
//! let b1: Square = "b1".parse()?;
//! let d3: Square = "d3".parse()?;
//!
//! // The bishop on b1 is hemmed in by the knight on c2 ...
//! assert!(attacks::bishop_move(b1, d3));
//! assert!(!attacks::is_valid_move(Role::Bishop, b1, d3, &board));
//!
//! // ... but knights jump.
//! let c1: Square = "c1".parse()?;
//! assert!(attacks::is_valid_move(Role::Knight, c1, d3, &board));
//! # Ok::<_, kingrace::ParseSquareError>(())
//! ```

use crate::{board::Board, role::Role, square::Square};

/// One step in any direction.
#[inline]
pub fn king_move(from: Square, to: Square) -> bool {
    from != to && from.distance(to) <= 1
}

/// Along a file or a rank.
#[inline]
pub fn rook_move(from: Square, to: Square) -> bool {
    (from.file() == to.file()) != (from.rank() == to.rank())
}

/// Along a diagonal.
#[inline]
pub fn bishop_move(from: Square, to: Square) -> bool {
    from != to && from.file_distance(to) == from.rank_distance(to)
}

#[inline]
pub fn knight_move(from: Square, to: Square) -> bool {
    matches!(
        (from.file_distance(to), from.rank_distance(to)),
        (1, 2) | (2, 1)
    )
}

/// Squares strictly between `from` and `to`, walking in unit steps.
///
/// Only meaningful for squares on a common file, rank or diagonal.
/// Otherwise the walk stops when it leaves the board.
pub fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let df = i32::from(to.file()) - i32::from(from.file());
    let dr = i32::from(to.rank()) - i32::from(from.rank());
    let step = (df.signum(), dr.signum());

    let mut current = from;
    std::iter::from_fn(move || {
        let next = current.offset(step.0, step.1)?;
        if next == to || step == (0, 0) {
            return None;
        }
        current = next;
        Some(next)
    })
}

/// Tests that no piece stands between `from` and `to`.
///
/// Applies to sliding moves only. Kings and knights never need a clear path.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    between(from, to).all(|sq| !board.is_occupied(sq))
}

/// Tests if a piece of the given role could move from `from` to `to`,
/// ignoring what stands on `to` and whether the move exposes a king.
pub fn is_valid_move(role: Role, from: Square, to: Square, board: &Board) -> bool {
    let geometry = match role {
        Role::King => king_move(from, to),
        Role::Rook => rook_move(from, to),
        Role::Bishop => bishop_move(from, to),
        Role::Knight => knight_move(from, to),
    };
    geometry && (!role.is_slider() || path_clear(board, from, to))
}
