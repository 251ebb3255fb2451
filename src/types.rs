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

use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;

use crate::{
    color::Color,
    role::Role,
    square::{ParseSquareError, Square},
};

/// Distinguishes the two bishops and the two knights of a side.
///
/// Both instances of a role move identically. Kings and rooks only ever use
/// [`Slot::Primary`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Primary, Slot::Secondary];
}

/// A named piece: [`Color`], [`Role`] and [`Slot`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub slot: Slot,
}

impl Piece {
    /// The same piece as the second instance of its role.
    #[inline]
    pub const fn secondary(self) -> Piece {
        Piece {
            slot: Slot::Secondary,
            ..self
        }
    }

    /// Uppercase letter for White, lowercase for Black.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    /// Every piece one side starts the game with.
    pub fn complement(color: Color) -> impl Iterator<Item = Piece> {
        Role::ALL.into_iter().flat_map(move |role| {
            Slot::ALL
                .into_iter()
                .take(role.count())
                .map(move |slot| Piece { color, role, slot })
        })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)?;
        if self.slot == Slot::Secondary {
            f.write_str(" (secondary)")?;
        }
        Ok(())
    }
}

/// A move from one square to another.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl Move {
    /// Parses a move in the form `a2a3`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] unless the input is exactly two valid
    /// square names.
    pub fn from_ascii(s: &[u8]) -> Result<Move, ParseSquareError> {
        if s.len() != 4 {
            return Err(ParseSquareError);
        }
        Ok(Move {
            from: Square::from_ascii(&s[..2])?,
            to: Square::from_ascii(&s[2..])?,
        })
    }
}

impl FromStr for Move {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Move, ParseSquareError> {
        Move::from_ascii(s.as_bytes())
    }
}

/// A stack-allocated container for the moves of one side.
///
/// No position has more than 64 legal moves: rook 14, bishops 13 each,
/// knights 8 each, king 8.
pub type MoveList = ArrayVec<Move, 64>;
