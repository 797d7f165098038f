//! King move and castling generation.

use crate::attacks::is_square_attacked;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::{KING_OFFSETS, PieceKind};
use crate::position::Position;
use crate::square::Square;

use super::MoveList;
use super::push_steps;

/// Generate pseudo-legal king steps plus any castling moves.
///
/// Castling is checked fully here: the king may not start in, pass through,
/// or land on an attacked square.
pub(super) fn gen_king(position: &Position, king_sq: Square, us: Color, list: &mut MoveList) {
    push_steps(position.board(), king_sq, us, &KING_OFFSETS, list);

    for side in CastleSide::ALL {
        if can_castle(position, king_sq, us, side) {
            let to = Square::at(king_sq.row(), side.king_to_col());
            list.push(Move::new_castle(king_sq, to));
        }
    }
}

fn can_castle(position: &Position, king_sq: Square, us: Color, side: CastleSide) -> bool {
    let board = position.board();
    let row = us.back_row();

    if !position.castling().has(us, side) || king_sq != Square::at(row, 4) {
        return false;
    }
    if !board
        .piece_at(side.rook_corner(us))
        .is_some_and(|piece| piece.is(PieceKind::Rook, us))
    {
        return false;
    }

    // Every square between king and rook must be empty.
    let rook_col = side.rook_from_col();
    let (lo, hi) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
    if (lo..hi).any(|col| board.is_occupied(Square::at(row, col))) {
        return false;
    }

    // The king's start, path and landing square must all be safe.
    let target_col = side.king_to_col();
    let (lo, hi) = (target_col.min(4), target_col.max(4));
    (lo..=hi).all(|col| !is_square_attacked(board, Square::at(row, col), us))
}
