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

//! Piece positions on a board.
//!
//! # Examples
//!
//! ```
//! use kingrace::{Board, Color, Role, Square};
//!
//! let board = Board::new();
//!
//! let a2: Square = "a2".parse()?;
//! assert_eq!(board.piece_at(a2), Some(Role::Rook.of(Color::White)));
//! assert_eq!(board.king_of(Color::Black), Some("h1".parse::<Square>()?));
//! # Ok::<_, kingrace::ParseSquareError>(())
//! ```

use std::fmt::{self, Write as _};

use crate::{color::Color, role::Role, square::Square, types::Piece};

/// [`Piece`] positions on an 8x8 board.
///
/// Every occupied square holds exactly one piece and, outside of
/// [`Board::apply()`]/[`Board::undo()`] pairs, no piece stands on two squares.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The starting position. Both sides line up on the first two ranks,
    /// White on the queen side and Black on the king side.
    ///
    /// ```text
    /// 2 R B N . . n b r
    /// 1 K B N . . n b k
    ///   a b c d e f g h
    /// ```
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            // Files counted from the own corner: a-file for White, h-file
            // for Black.
            let file = |n: u8| color.fold(n, 7 - n);
            let king = Role::King.of(color);
            let rook = Role::Rook.of(color);
            let bishop = Role::Bishop.of(color);
            let knight = Role::Knight.of(color);

            board.set_piece_at(Square::new(file(0), 0), king);
            board.set_piece_at(Square::new(file(0), 1), rook);
            board.set_piece_at(Square::new(file(1), 1), bishop);
            board.set_piece_at(Square::new(file(1), 0), bishop.secondary());
            board.set_piece_at(Square::new(file(2), 1), knight);
            board.set_piece_at(Square::new(file(2), 0), knight.secondary());
        }
        board
    }

    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[usize::from(sq)]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Puts a piece on a square, returning the previous occupant.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[usize::from(sq)].replace(piece)
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[usize::from(sq)].take()
    }

    /// Finds the first square, from `a1` to `h8`, whose piece matches the
    /// predicate.
    pub fn find<F>(&self, mut predicate: F) -> Option<Square>
    where
        F: FnMut(Piece) -> bool,
    {
        self.pieces()
            .find(|&(_, piece)| predicate(piece))
            .map(|(sq, _)| sq)
    }

    /// The square of the king of the given side.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.find(|piece| piece.color == color && piece.role == Role::King)
    }

    /// Iterates over the occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Moves whatever stands on `from` to `to`, remembering what it takes to
    /// restore both squares.
    pub fn apply(&mut self, from: Square, to: Square) -> Undo {
        let moved = self.remove_piece_at(from);
        let displaced = match moved {
            Some(piece) => self.set_piece_at(to, piece),
            None => self.remove_piece_at(to),
        };
        Undo {
            from,
            to,
            moved,
            displaced,
        }
    }

    /// Restores the squares touched by [`Board::apply()`].
    pub fn undo(&mut self, undo: Undo) {
        self.squares[usize::from(undo.from)] = undo.moved;
        self.squares[usize::from(undo.to)] = undo.displaced;
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                f.write_char(
                    self.piece_at(Square::new(file, rank))
                        .map_or('.', Piece::char),
                )?;
                f.write_char(if file < 7 { ' ' } else { '\n' })?;
            }
        }
        f.write_str("  a b c d e f g h\n")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Token returned by [`Board::apply()`].
///
/// Handing it back to [`Board::undo()`] restores the board exactly.
#[derive(Clone, Eq, PartialEq, Debug)]
#[must_use]
pub struct Undo {
    from: Square,
    to: Square,
    moved: Option<Piece>,
    displaced: Option<Piece>,
}

impl Undo {
    /// The piece that moved.
    pub fn moved(&self) -> Option<Piece> {
        self.moved
    }

    /// The piece that stood on the target square, if any.
    pub fn captured(&self) -> Option<Piece> {
        self.displaced
    }
}
