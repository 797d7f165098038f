//! Pawn move generation.

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal pawn moves.
///
/// A move onto the far row is a single entry; the promotion piece is chosen
/// after the move is played.
pub(super) fn gen_pawn(position: &Position, from: Square, us: Color, list: &mut MoveList) {
    let board = position.board();
    let forward = us.forward();

    // Pushes
    if let Some(one) = from.offset(forward, 0)
        && !board.is_occupied(one)
    {
        list.push(Move::new(from, one));

        if from.row() == us.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && !board.is_occupied(two)
        {
            list.push(Move::new(from, two));
        }
    }

    // Captures
    for d_col in [-1, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match board.color_at(to) {
            Some(color) if color != us => list.push(Move::new(from, to)),
            Some(_) => {}
            None => {
                if is_en_passant_target(position, to, us) {
                    list.push(Move::new_en_passant(from, to));
                }
            }
        }
    }
}

/// Return `true` if `us` may capture en passant onto the empty square `to`.
///
/// The target only counts on the row the opponent's pawn skipped, with that
/// pawn still standing just past it.
fn is_en_passant_target(position: &Position, to: Square, us: Color) -> bool {
    let them = us.flip();
    position.en_passant() == Some(to)
        && to.row() == them.skipped_row()
        && to
            .offset(-us.forward(), 0)
            .and_then(|sq| position.board().piece_at(sq))
            .is_some_and(|piece| piece.is(PieceKind::Pawn, them))
}

#[cfg(test)]
mod tests {
    use super::super::pseudo_legal_moves;
    use crate::chess_move::Move;
    use crate::position::Position;
    use crate::square::Square;

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_pawn_single_and_double() {
        let pos = Position::starting_position();
        let moves = pseudo_legal_moves(&pos, Square::E2);
        assert_eq!(moves.len(), 2);
        assert!(moves.find(Square::E2, Square::E3).is_some());
        assert!(moves.find(Square::E2, Square::E4).is_some());

        let moves = pseudo_legal_moves(&pos, Square::D7);
        assert!(moves.find(Square::D7, Square::D6).is_some());
        assert!(moves.find(Square::D7, Square::D5).is_some());
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let pos = position("4k3/8/8/8/8/4n3/4P3/4K3 w - -");
        assert!(pseudo_legal_moves(&pos, Square::E2).is_empty());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let pos = position("4k3/8/8/8/4n3/8/4P3/4K3 w - -");
        let moves = pseudo_legal_moves(&pos, Square::E2);
        assert_eq!(moves.len(), 1);
        assert!(moves.find(Square::E2, Square::E3).is_some());
    }

    #[test]
    fn no_double_step_off_starting_row() {
        let pos = position("4k3/8/8/8/8/4P3/8/4K3 w - -");
        assert_eq!(pseudo_legal_moves(&pos, Square::E3).len(), 1);
    }

    #[test]
    fn captures_only_enemy_diagonals() {
        // Black knight on d3, white knight on f3.
        let pos = position("4k3/8/8/8/8/3n1N2/4P3/4K3 w - -");
        let moves = pseudo_legal_moves(&pos, Square::E2);
        assert!(moves.find(Square::E2, Square::D3).is_some());
        assert!(moves.find(Square::E2, Square::F3).is_none());
    }

    #[test]
    fn en_passant_generated() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6");
        let moves = pseudo_legal_moves(&pos, Square::E5);
        assert!(moves.iter().any(|&mv| mv == Move::new_en_passant(Square::E5, Square::D6)));
    }

    #[test]
    fn no_en_passant_without_target() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - -");
        let moves = pseudo_legal_moves(&pos, Square::E5);
        assert_eq!(moves.len(), 1);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn black_en_passant_generated() {
        let pos = position("4k3/8/8/8/3Pp3/8/8/4K3 b - d3");
        let moves = pseudo_legal_moves(&pos, Square::E4);
        assert!(moves.iter().any(|&mv| mv == Move::new_en_passant(Square::E4, Square::D3)));
    }

    #[test]
    fn target_of_own_double_step_is_not_capturable() {
        // White just played e2e4; the white pawn on d2 cannot "capture" on e3.
        let mut pos = position("4k3/8/8/8/8/8/3PP3/4K3 w - -");
        pos.apply_move(Move::new(Square::E2, Square::E4));
        assert_eq!(pos.en_passant(), Some(Square::E3));
        assert!(pseudo_legal_moves(&pos, Square::D2).iter().all(|mv| !mv.is_en_passant()));
    }
}
