use rulebook_core::{
    Color, Game, GameStatus, MoveOutcome, Piece, Position, PromotionPiece, Square, classify, is_square_attacked,
    legal_moves, perft,
};

fn position(fen: &str) -> Position {
    fen.parse().unwrap()
}

#[test]
fn every_legal_move_keeps_king_safe() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq -",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "4k3/8/8/KPp4r/8/8/8/8 w - c6",
    ];
    for fen in fens {
        let pos = position(fen);
        let us = pos.side_to_move();
        for &mv in &legal_moves(&pos, us) {
            let after = pos.make_move(mv);
            let king = after.board().king_square(us);
            assert!(!is_square_attacked(after.board(), king, us), "{mv} exposes the king in {fen}");
        }
    }
}

#[test]
fn applied_move_leaves_source_empty() {
    let pos = Position::starting_position();
    for &mv in &legal_moves(&pos, Color::White) {
        let after = pos.make_move(mv);
        assert!(after.board().piece_at(mv.from()).is_none(), "{mv}");
        assert_eq!(after.board().piece_at(mv.to()), pos.board().piece_at(mv.from()), "{mv}");
    }
}

#[test]
fn rook_on_file_pins_king_off_file() {
    let pos = position("4k3/8/8/4r3/8/8/8/4K3 w - -");
    let moves = legal_moves(&pos, Color::White);
    let mut targets: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
    targets.sort();
    assert_eq!(targets, vec![Square::D2, Square::F2, Square::D1, Square::F1]);
}

#[test]
fn scholars_mate_through_game() {
    let mut game = Game::new();
    let moves = [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::F1, Square::C4),
        (Square::B8, Square::C6),
        (Square::D1, Square::H5),
        (Square::G8, Square::F6),
        (Square::H5, Square::F7),
    ];
    let mut outcome = MoveOutcome::Rejected;
    for (from, to) in moves {
        outcome = game.attempt_move(from, to).unwrap();
    }
    assert_eq!(outcome, MoveOutcome::Applied(GameStatus::Checkmate { winner: Color::White }));
    assert_eq!(classify(game.position()), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn black_promotion_through_game() {
    let mut game = Game::from_position(position("4k3/8/8/8/8/8/p7/4K3 b - -"));
    assert_eq!(
        game.attempt_move(Square::A2, Square::A1).unwrap(),
        MoveOutcome::PromotionPending(Square::A1)
    );
    let status = game.resolve_promotion(Square::A1, PromotionPiece::Rook).unwrap();
    assert_eq!(status, GameStatus::Check);
    assert_eq!(game.position().board().piece_at(Square::A1), Some(Piece::BLACK_ROOK));
}

#[test]
fn fen_roundtrip_after_play() {
    let mut game = Game::new();
    game.attempt_move(Square::E2, Square::E4).unwrap();
    assert_eq!(
        game.position().to_string(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
    );
}

#[test]
fn perft_start_position_shallow() {
    let pos = Position::starting_position();
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
}
