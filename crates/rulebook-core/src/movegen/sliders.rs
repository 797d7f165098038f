//! Sliding piece move generation (bishops, rooks, queens).

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal moves for a slider of `kind` on `from`.
///
/// Each ray runs until the board edge or the first occupied square, which is
/// included when it holds an enemy piece.
pub(super) fn gen_slider(board: &Board, from: Square, us: Color, kind: PieceKind, list: &mut MoveList) {
    let Some(directions) = kind.slides() else {
        return;
    };

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.color_at(to) {
                None => list.push(Move::new(from, to)),
                Some(color) => {
                    if color != us {
                        list.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
