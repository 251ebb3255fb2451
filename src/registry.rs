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

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::{ByColor, Color},
    role::Role,
    types::Piece,
};

/// Whether a piece is still in play.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Status {
    Alive,
    Captured,
}

/// Bookkeeping of which pieces are alive and which have been captured.
///
/// The registry is informational. Move legality is decided from the
/// [`Board`] alone.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PieceRegistry {
    entries: ByColor<ArrayVec<(Piece, Status), 6>>,
}

impl PieceRegistry {
    /// A registry with the full complement of both sides alive.
    pub fn new() -> PieceRegistry {
        PieceRegistry {
            entries: ByColor::new_with(|color| {
                Piece::complement(color)
                    .map(|piece| (piece, Status::Alive))
                    .collect()
            }),
        }
    }

    /// A registry matching the pieces present on a board. Pieces of the
    /// standard complement that are missing are recorded as captured.
    pub fn from_board(board: &Board) -> PieceRegistry {
        let mut registry = PieceRegistry::new();
        for color in Color::ALL {
            for (piece, status) in registry.entries.get_mut(color) {
                if board.find(|p| p == *piece).is_none() {
                    *status = Status::Captured;
                }
            }
        }
        registry
    }

    pub fn status(&self, piece: Piece) -> Option<Status> {
        self.entries
            .get(piece.color)
            .iter()
            .find(|(p, _)| *p == piece)
            .map(|&(_, status)| status)
    }

    pub fn is_alive(&self, piece: Piece) -> bool {
        self.status(piece) == Some(Status::Alive)
    }

    /// Records a capture. Kings are never marked as captured, and a piece
    /// that is already captured stays so.
    pub fn capture(&mut self, piece: Piece) {
        if piece.role == Role::King {
            return;
        }
        if let Some((_, status)) = self
            .entries
            .get_mut(piece.color)
            .iter_mut()
            .find(|(p, _)| *p == piece)
        {
            *status = Status::Captured;
        }
    }

    pub fn alive(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.with_status(color, Status::Alive)
    }

    pub fn captured(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.with_status(color, Status::Captured)
    }

    fn with_status(&self, color: Color, wanted: Status) -> impl Iterator<Item = Piece> + '_ {
        self.entries
            .get(color)
            .iter()
            .filter(move |&&(_, status)| status == wanted)
            .map(|&(piece, _)| piece)
    }
}

impl Default for PieceRegistry {
    fn default() -> PieceRegistry {
        PieceRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_new_registry() {
        let registry = PieceRegistry::new();
        for color in Color::ALL {
            assert_eq!(registry.alive(color).count(), 6);
            assert_eq!(registry.captured(color).count(), 0);
        }
    }

    #[test]
    fn test_capture() {
        let mut registry = PieceRegistry::new();
        let knight = Role::Knight.of(Color::Black).secondary();

        registry.capture(knight);
        assert!(!registry.is_alive(knight));
        assert!(registry.is_alive(Role::Knight.of(Color::Black)));
        assert_eq!(registry.captured(Color::Black).collect::<Vec<_>>(), [knight]);

        // Captured stays captured.
        registry.capture(knight);
        assert_eq!(registry.status(knight), Some(Status::Captured));
        assert_eq!(registry.alive(Color::Black).count(), 5);
    }

    #[test]
    fn test_kings_are_never_captured() {
        let mut registry = PieceRegistry::new();
        registry.capture(Color::White.king());
        assert!(registry.is_alive(Color::White.king()));
    }

    #[test]
    fn test_from_board() {
        let mut board = Board::new();
        board.remove_piece_at(Square::new(0, 1)); // white rook
        let registry = PieceRegistry::from_board(&board);
        assert!(!registry.is_alive(Role::Rook.of(Color::White)));
        assert_eq!(registry.alive(Color::White).count(), 5);
        assert_eq!(registry.alive(Color::Black).count(), 6);
    }
}
