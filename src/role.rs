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

use std::fmt;

use crate::{
    color::Color,
    types::{Piece, Slot},
};

/// Piece types: `King`, `Rook`, `Bishop`, `Knight`.
///
/// There are no pawns and no queens in this variant.
///
/// # Examples
///
/// ```
/// use kingrace::Role;
///
/// assert!(Role::Rook.is_slider());
/// assert!(!Role::Knight.is_slider());
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    King = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
}

impl Role {
    /// Gets the piece type from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingrace::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('n'), Some(Role::Knight));
    ///
    /// assert_eq!(Role::from_char('Q'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'K' | 'k' => Some(Role::King),
            'R' | 'r' => Some(Role::Rook),
            'B' | 'b' => Some(Role::Bishop),
            'N' | 'n' => Some(Role::Knight),
            _ => None,
        }
    }

    /// Gets the primary [`Piece`] of this role for the given color.
    ///
    /// # Examples
    ///
    /// ```
    /// use kingrace::{Color, Role};
    ///
    /// assert_eq!(Role::King.of(Color::Black), Color::Black.king());
    /// ```
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece {
            color,
            role: self,
            slot: Slot::Primary,
        }
    }

    /// Gets the lowercase English letter for the piece type.
    pub const fn char(self) -> char {
        match self {
            Role::King => 'k',
            Role::Rook => 'r',
            Role::Bishop => 'b',
            Role::Knight => 'n',
        }
    }

    /// Gets the uppercase English letter for the piece type.
    pub const fn upper_char(self) -> char {
        match self {
            Role::King => 'K',
            Role::Rook => 'R',
            Role::Bishop => 'B',
            Role::Knight => 'N',
        }
    }

    /// Rooks and bishops need an unobstructed path.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Role::Rook | Role::Bishop)
    }

    /// Number of pieces of this role each side starts with.
    pub const fn count(self) -> usize {
        match self {
            Role::King | Role::Rook => 1,
            Role::Bishop | Role::Knight => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::King => "king",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
        }
    }

    /// `King`, `Rook`, `Bishop` and `Knight`, in this order.
    pub const ALL: [Role; 4] = [Role::King, Role::Rook, Role::Bishop, Role::Knight];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Role::ALL
            .into_iter()
            .find(|role| role.name() == name)
            .ok_or_else(|| serde::de::Error::custom("invalid role"))
    }
}
