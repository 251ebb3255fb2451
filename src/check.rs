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

//! Check detection after a tentative move.
//!
//! Which king is examined depends on what kind of piece just moved. After a
//! king move, the mover's own king must not stand attacked. After any other
//! move, the opponent's king must not stand attacked: in this variant a move
//! that gives check is as illegal as one that walks into check.

use tracing::trace;

use crate::{attacks, board::Board, color::Color, role::Role, square::Square, types::Piece};

/// What just moved, and for which side.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MovedKind {
    /// A king of the given color moved.
    King(Color),
    /// A rook, bishop or knight of the given color moved.
    Other(Color),
}

impl MovedKind {
    pub fn of(piece: Piece) -> MovedKind {
        match piece.role {
            Role::King => MovedKind::King(piece.color),
            _ => MovedKind::Other(piece.color),
        }
    }

    /// The side whose king is examined.
    pub fn defender(self) -> Color {
        match self {
            MovedKind::King(color) => color,
            MovedKind::Other(color) => !color,
        }
    }
}

/// Finds the first piece, scanning from `a1` to `h8`, that attacks the king
/// of `defender`.
pub fn attacker(board: &Board, defender: Color) -> Option<Square> {
    let king = board.king_of(defender)?;
    board
        .pieces()
        .filter(|&(_, piece)| piece.color != defender)
        .find(|&(sq, piece)| attacks::is_valid_move(piece.role, sq, king, board))
        .map(|(sq, _)| sq)
}

/// Tests whether the king selected by `moved` is attacked.
///
/// A missing king counts as attacked.
pub fn is_check(board: &Board, moved: MovedKind) -> bool {
    let defender = moved.defender();
    if board.king_of(defender).is_none() {
        trace!(%defender, "no king to defend");
        return true;
    }
    match attacker(board, defender) {
        Some(sq) => {
            trace!(%defender, attacker = %sq, "king attacked");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    #[test]
    fn test_defender() {
        assert_eq!(MovedKind::King(Color::White).defender(), Color::White);
        assert_eq!(MovedKind::Other(Color::White).defender(), Color::Black);
        assert_eq!(MovedKind::Other(Color::Black).defender(), Color::White);
        assert_eq!(
            MovedKind::of(Role::Knight.of(Color::Black).secondary()),
            MovedKind::Other(Color::Black)
        );
        assert_eq!(MovedKind::of(Color::White.king()), MovedKind::King(Color::White));
    }

    #[test]
    fn test_starting_position_is_quiet() {
        let board = Board::new();
        for color in Color::ALL {
            assert!(!is_check(&board, MovedKind::King(color)));
            assert!(!is_check(&board, MovedKind::Other(color)));
        }
    }

    #[test]
    fn test_rook_gives_check() {
        let mut board = Board::empty();
        board.set_piece_at(sq("a1"), Color::White.king());
        board.set_piece_at(sq("h8"), Color::Black.king());
        board.set_piece_at(sq("d8"), Role::Rook.of(Color::White));

        // After a white rook move the black king is examined.
        assert!(is_check(&board, MovedKind::Other(Color::White)));
        assert_eq!(attacker(&board, Color::Black), Some(sq("d8")));
        // After a white king move only the white king matters.
        assert!(!is_check(&board, MovedKind::King(Color::White)));

        // A piece in between shields the king.
        board.set_piece_at(sq("f8"), Role::Knight.of(Color::Black));
        assert!(!is_check(&board, MovedKind::Other(Color::White)));
    }

    #[test]
    fn test_own_pieces_do_not_attack() {
        let mut board = Board::empty();
        board.set_piece_at(sq("e4"), Color::White.king());
        board.set_piece_at(sq("h8"), Color::Black.king());
        board.set_piece_at(sq("e1"), Role::Rook.of(Color::White));
        board.set_piece_at(sq("f6"), Role::Knight.of(Color::White));
        assert!(!is_check(&board, MovedKind::King(Color::White)));

        board.set_piece_at(sq("f6"), Role::Knight.of(Color::Black));
        assert!(is_check(&board, MovedKind::King(Color::White)));
    }

    #[test]
    fn test_adjacent_kings() {
        let mut board = Board::empty();
        board.set_piece_at(sq("d4"), Color::White.king());
        board.set_piece_at(sq("e5"), Color::Black.king());
        assert!(is_check(&board, MovedKind::King(Color::White)));
        assert!(is_check(&board, MovedKind::King(Color::Black)));
    }

    #[test]
    fn test_missing_king_counts_as_check() {
        let mut board = Board::empty();
        board.set_piece_at(sq("a1"), Color::White.king());
        assert!(is_check(&board, MovedKind::Other(Color::White)));
        assert!(!is_check(&board, MovedKind::King(Color::White)));
    }
}
