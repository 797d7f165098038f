//! Game position: placement, side to move, castling rights, en passant target.

use crate::attacks::is_square_attacked;
use crate::board::{Board, PrettyBoard};
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete rules state of a game in progress.
///
/// Move counters are not tracked: nothing in these rules depends on them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
        }
    }

    /// Assemble a position from its parts. Used by FEN parsing, which
    /// validates them first.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Position {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square a pawn skipped on the previous move, if it advanced two rows.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_square_attacked(&self.board, self.board.king_square(color), color)
    }

    /// Commit a move's side effects to this position.
    ///
    /// The move is trusted to be legal. Effects are applied in a fixed order:
    /// en passant capture, en passant target, castling rook, castling rights,
    /// then the piece itself. The side to move is left unchanged so a pending
    /// promotion can be resolved first; the square of a pawn that reached the
    /// far row is returned in that case.
    pub fn apply_move(&mut self, mv: Move) -> Option<Square> {
        let from = mv.from();
        let to = mv.to();
        let piece = self.board.piece_at(from)?;
        let us = piece.color();
        let is_pawn = piece.kind() == PieceKind::Pawn;

        if mv.is_en_passant()
            && let Some(captured) = to.offset(-us.forward(), 0)
        {
            self.board.clear(captured);
        }

        self.en_passant = if is_pawn && from.row().abs_diff(to.row()) == 2 {
            Square::new((from.row() + to.row()) / 2, from.col())
        } else {
            None
        };

        if mv.is_castle() {
            let side = CastleSide::from_king_target(to.col());
            let rook_to = Square::at(from.row(), side.rook_to_col());
            self.board.relocate(side.rook_corner(us), rook_to);
        }

        if piece.kind() == PieceKind::King {
            self.castling = self.castling.remove_color(us);
        }
        // Leaving a corner or capturing on one ends that corner's castle.
        self.castling = self
            .castling
            .remove(CastleRights::for_corner(from))
            .remove(CastleRights::for_corner(to));

        self.board.relocate(from, to);

        (is_pawn && to.row() == us.promotion_row()).then_some(to)
    }

    /// Copy-make: return the position after `mv`, leaving `self` untouched.
    ///
    /// Like [`Position::apply_move`] the side to move is not flipped and a
    /// promoting pawn stays a pawn.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Replace the pawn on `sq` with the chosen piece of the same color.
    ///
    /// Does nothing if `sq` does not hold a pawn.
    pub fn promote(&mut self, sq: Square, choice: PromotionPiece) {
        if let Some(pawn) = self.board.piece_at(sq)
            && pawn.kind() == PieceKind::Pawn
        {
            self.board.set(sq, Piece::new(choice.to_piece_kind(), pawn.color()));
        }
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Return a pretty-printable grid of the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        self.board.pretty()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}
