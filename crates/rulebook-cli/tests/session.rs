use std::io::Cursor;

use rulebook_cli::{Command, Flow, Session, SessionConfig, parse_command};
use rulebook_core::{Color, GameStatus, Piece, Square};

fn quiet_session() -> Session {
    Session::new().with_config(SessionConfig {
        show_board: false,
        highlight: false,
    })
}

#[test]
fn scripted_game_to_checkmate() {
    let script = "\
move e2e4
move e7e5
move f1c4
move b8c6
move d1h5
move g8f6
move h5f7
status
";
    let mut session = quiet_session();
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("checkmate, white wins"));
    assert_eq!(session.game().status(), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn en_passant_over_the_wire() {
    let script = "move e2e4\nmove a7a6\nmove e4e5\nmove d7d5\nmove e5d6\n";
    let mut session = quiet_session();
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();

    let board = session.game().position().board();
    assert_eq!(board.piece_at(Square::D6), Some(Piece::WHITE_PAWN));
    assert_eq!(board.piece_at(Square::D5), None);
}

#[test]
fn new_resets_after_fen() {
    let mut session = quiet_session();
    let mut out = Vec::new();
    session
        .run(Cursor::new("fen 4k3/8/8/8/8/8/8/4K3 b - -\nnew\n"), &mut out)
        .unwrap();
    assert_eq!(session.game().side_to_move(), Color::White);
    assert_eq!(session.game().legal_moves().len(), 20);
}

#[test]
fn execute_single_command() {
    let mut session = quiet_session();
    let mut out = Vec::new();
    let cmd = parse_command("move d2d4").unwrap();
    assert_eq!(session.execute(cmd, &mut out).unwrap(), Flow::Continue);
    assert_eq!(session.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
}

#[test]
fn show_prints_board_and_turn() {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run(Cursor::new("show\n"), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("a  b  c  d  e  f  g  h"));
    assert!(output.contains("white to move: ongoing"));
}
