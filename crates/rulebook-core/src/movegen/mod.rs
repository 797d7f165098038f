//! Move generation: pseudo-legal geometry per piece, then a king-safety filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A8, Square::A8); 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Find the move going from `from` to `to`, if any.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|mv| mv.connects(from, to))
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Push a move to each of `offsets` from `from` that is on the board and not
/// held by a friendly piece.
fn push_steps(board: &Board, from: Square, us: Color, offsets: &[(i8, i8)], list: &mut MoveList) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col)
            && board.color_at(to) != Some(us)
        {
            list.push(Move::new(from, to));
        }
    }
}

/// Generate the pseudo-legal moves of the piece on `sq`.
///
/// Moves may leave the mover's own king attacked. An empty square yields an
/// empty list.
pub fn pseudo_legal_moves(position: &Position, sq: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = position.board().piece_at(sq) else {
        return list;
    };
    let us = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(position, sq, us, &mut list),
        PieceKind::Knight => gen_knight(position.board(), sq, us, &mut list),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => gen_slider(position.board(), sq, us, piece.kind(), &mut list),
        PieceKind::King => gen_king(position, sq, us, &mut list),
    }

    list
}

/// Return `true` if playing `mv` keeps the mover's king out of attack.
///
/// The whole move is simulated on a scratch copy, en passant removal and
/// castling rook included.
fn keeps_king_safe(position: &Position, mv: Move, us: Color) -> bool {
    let scratch = position.make_move(mv);
    let board = scratch.board();
    !is_square_attacked(board, board.king_square(us), us)
}

/// Push the legal moves of the piece on `sq` (which belongs to `us`).
fn push_legal_from(position: &Position, sq: Square, us: Color, list: &mut MoveList) {
    for &mv in &pseudo_legal_moves(position, sq) {
        if keeps_king_safe(position, mv, us) {
            list.push(mv);
        }
    }
}

/// Generate every legal move for `color`.
///
/// # Panics
///
/// Panics if `color` has no king on the board.
pub fn legal_moves(position: &Position, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (sq, _) in position.board().pieces(color) {
        push_legal_from(position, sq, color, &mut list);
    }
    list
}

/// Generate the legal moves of the piece on `sq`, empty if the square is empty.
pub fn legal_moves_from(position: &Position, sq: Square) -> MoveList {
    let mut list = MoveList::new();
    if let Some(color) = position.board().color_at(sq) {
        push_legal_from(position, sq, color, &mut list);
    }
    list
}
