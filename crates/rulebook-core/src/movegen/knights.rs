//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::KNIGHT_OFFSETS;
use crate::square::Square;

use super::MoveList;
use super::push_steps;

/// Generate pseudo-legal knight moves. Knights jump, so nothing blocks them.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    push_steps(board, from, us, &KNIGHT_OFFSETS, list);
}
