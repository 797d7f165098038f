//! Square attack detection on an arbitrary board snapshot.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PieceKind, ROOK_DIRECTIONS};
use crate::square::Square;

/// Return `true` if any piece of the opponent of `defender` attacks `sq`.
///
/// Works backwards from the target: casts each piece's capture pattern from
/// `sq` and looks for an enemy piece of that kind at the other end. Pawns
/// attack their two forward diagonals whether or not the square is occupied
/// and never attack straight ahead. Castling is not an attack.
pub fn is_square_attacked(board: &Board, sq: Square, defender: Color) -> bool {
    let attacker = defender.flip();

    // A pawn attacking `sq` stands one step behind it, from its own point of view.
    let pawn = Piece::new(PieceKind::Pawn, attacker);
    let behind = -attacker.forward();
    if [-1, 1]
        .into_iter()
        .any(|d_col| matches!(sq.offset(behind, d_col), Some(from) if board.piece_at(from) == Some(pawn)))
    {
        return true;
    }

    if leaper_attacks(board, sq, &KNIGHT_OFFSETS, Piece::new(PieceKind::Knight, attacker)) {
        return true;
    }

    if leaper_attacks(board, sq, &KING_OFFSETS, Piece::new(PieceKind::King, attacker)) {
        return true;
    }

    if ray_attacks(board, sq, &ROOK_DIRECTIONS, attacker, PieceKind::Rook) {
        return true;
    }

    ray_attacks(board, sq, &BISHOP_DIRECTIONS, attacker, PieceKind::Bishop)
}

/// Return `true` if `piece` stands on any of the `offsets` from `sq`.
fn leaper_attacks(board: &Board, sq: Square, offsets: &[(i8, i8)], piece: Piece) -> bool {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col))
        .any(|from| board.piece_at(from) == Some(piece))
}

/// Return `true` if the first piece along any ray from `sq` is an enemy
/// `slider` or queen.
fn ray_attacks(board: &Board, sq: Square, directions: &[(i8, i8)], attacker: Color, slider: PieceKind) -> bool {
    directions.iter().any(|&(d_row, d_col)| {
        let mut current = sq;
        while let Some(next) = current.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(next) {
                return piece.color() == attacker
                    && (piece.kind() == slider || piece.kind() == PieceKind::Queen);
            }
            current = next;
        }
        false
    })
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::board::Board;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        *fen.parse::<Position>().unwrap().board()
    }

    #[test]
    fn starting_position() {
        let board = Board::starting_position();
        // f3 is covered by the g1 knight and the e2/g2 pawns.
        assert!(is_square_attacked(&board, Square::F3, Color::Black));
        // f6 is covered by the g8 knight.
        assert!(is_square_attacked(&board, Square::F6, Color::White));
        // Nobody reaches the fourth or fifth rank.
        assert!(!is_square_attacked(&board, Square::E4, Color::Black));
        assert!(!is_square_attacked(&board, Square::E4, Color::White));
        assert!(!is_square_attacked(&board, Square::D5, Color::White));
    }

    #[test]
    fn pawn_attacks_empty_diagonals_not_forward() {
        let board = board("4k3/8/8/8/4p3/8/8/4K3 w - -");
        // Black pawn on e4 attacks d3 and f3, not e3.
        assert!(is_square_attacked(&board, Square::D3, Color::White));
        assert!(is_square_attacked(&board, Square::F3, Color::White));
        assert!(!is_square_attacked(&board, Square::E3, Color::White));
        // It does not attack backwards.
        assert!(!is_square_attacked(&board, Square::D5, Color::White));
    }

    #[test]
    fn white_pawn_attacks_upward() {
        let board = board("4k3/8/8/8/4P3/8/8/4K3 w - -");
        assert!(is_square_attacked(&board, Square::D5, Color::Black));
        assert!(is_square_attacked(&board, Square::F5, Color::Black));
        assert!(!is_square_attacked(&board, Square::D3, Color::Black));
    }

    #[test]
    fn slider_ray_stops_at_first_piece() {
        // Black rook e8, white pawn e4, white king e1.
        let board = board("k3r3/8/8/8/4P3/8/8/4K3 w - -");
        assert!(is_square_attacked(&board, Square::E5, Color::White));
        assert!(is_square_attacked(&board, Square::E4, Color::White));
        assert!(!is_square_attacked(&board, Square::E3, Color::White));
        assert!(!is_square_attacked(&board, Square::E1, Color::White));
    }

    #[test]
    fn queen_attacks_both_ways() {
        let board = board("4k3/8/8/3q4/8/8/8/K7 w - -");
        assert!(is_square_attacked(&board, Square::D1, Color::White));
        assert!(is_square_attacked(&board, Square::A2, Color::White));
        assert!(is_square_attacked(&board, Square::H5, Color::White));
        assert!(!is_square_attacked(&board, Square::E3, Color::White));
    }

    #[test]
    fn king_attacks_neighbours() {
        let board = board("8/8/8/8/8/8/5k2/K7 w - -");
        assert!(is_square_attacked(&board, Square::E1, Color::White));
        assert!(is_square_attacked(&board, Square::G3, Color::White));
        assert!(!is_square_attacked(&board, Square::D1, Color::White));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let board = Board::starting_position();
        assert!(!is_square_attacked(&board, Square::F3, Color::White));
    }
}
