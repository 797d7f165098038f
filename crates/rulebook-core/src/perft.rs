//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::{Move, PromotionPiece};
use crate::movegen::legal_moves;
use crate::position::Position;

/// Visit every child of `position`, handing each a promotion choice when the
/// move puts a pawn on the far row.
///
/// A promoting move yields four children, one per piece.
fn for_each_child(position: &Position, mut visit: impl FnMut(Move, Option<PromotionPiece>, &Position)) {
    for &mv in &legal_moves(position, position.side_to_move()) {
        let mut child = *position;
        match child.apply_move(mv) {
            Some(sq) => {
                for choice in PromotionPiece::ALL {
                    let mut promoted = child;
                    promoted.promote(sq, choice);
                    promoted.pass_turn();
                    visit(mv, Some(choice), &promoted);
                }
            }
            None => {
                child.pass_turn();
                visit(mv, None, &child);
            }
        }
    }
}

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for_each_child(position, |_, _, child| {
        nodes += perft(child, depth - 1);
    });
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted alphabetically. Promotions are
/// labelled with the piece letter, as in `e7e8q`. Depth 0 has no moves to
/// break down and yields an empty list.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let mut results = Vec::new();
    if depth == 0 {
        return results;
    }
    for_each_child(position, |mv, choice, child| {
        let label = match choice {
            Some(choice) => format!("{mv}{}", choice.to_piece_kind().fen_char()),
            None => mv.to_string(),
        };
        let count = perft(child, depth - 1);
        results.push((label, count));
    });
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
