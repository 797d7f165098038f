//! FEN setup strings for [`Position`].
//!
//! Only the first four fields carry state here. The halfmove clock and
//! fullmove number may follow; they are checked to be numbers and dropped.

use std::fmt;
use std::str::FromStr;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        // The target must sit on the row the opponent's pawn just skipped.
        let en_passant = match fields[3] {
            "-" => None,
            text => Some(
                Square::from_algebraic(text)
                    .filter(|sq| sq.row() == side_to_move.flip().skipped_row())
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?,
            ),
        };

        for (field, text) in ["halfmove clock", "fullmove number"].into_iter().zip(&fields[4..]) {
            text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
                field,
                found: text.to_string(),
            })?;
        }

        board.validate()?;

        // Otherwise the side to move could capture the king.
        let waiting = side_to_move.flip();
        if is_square_attacked(&board, board.king_square(waiting), waiting) {
            return Err(FenError::OpponentInCheck {
                color: waiting.name(),
            });
        }

        Ok(Position::from_parts(board, side_to_move, castling, en_passant))
    }
}

/// Parse the piece placement field. FEN ranks run from rank 8 down, which
/// matches row order.
fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount {
            found: ranks.len(),
        });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar {
                    character: c,
                })?;
                let sq = Square::new(rank_index as u8, col as u8).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: col + 1,
                })?;
                board.set(sq, piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }

    Ok(board)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                match self.board().piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }

        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {side} {}", self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::error::{BoardError, FenError};
    use crate::position::Position;

    fn roundtrip(fen: &str) {
        let position: Position = fen.parse().unwrap();
        let output = format!("{position}");
        assert_eq!(output, fen, "FEN roundtrip failed");
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    }

    #[test]
    fn roundtrip_black_to_move() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen: Position = STARTING_FEN.parse().unwrap();
        assert_eq!(Position::starting_position(), from_fen);
    }

    #[test]
    fn move_counters_are_accepted_and_dropped() {
        let with_counters: Position = format!("{STARTING_FEN} 0 1").parse().unwrap();
        assert_eq!(with_counters, Position::starting_position());
        assert_eq!(format!("{with_counters}"), STARTING_FEN);
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<Position>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq -".parse::<Position>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_bad_rank_length() {
        let short = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -".parse::<Position>();
        assert!(matches!(short, Err(FenError::BadRankLength { rank_index: 1, length: 7 })));
        let long = "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -".parse::<Position>();
        assert!(matches!(long, Err(FenError::BadRankLength { rank_index: 1, .. })));
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq -".parse::<Position>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq -".parse::<Position>();
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_en_passant_on_wrong_row() {
        let off_board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9".parse::<Position>();
        assert!(matches!(off_board, Err(FenError::InvalidEnPassant { .. })));
        // White to move can only capture onto rank 6.
        let wrong_rank = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3".parse::<Position>();
        assert!(matches!(wrong_rank, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = format!("{STARTING_FEN} abc 1").parse::<Position>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn error_waiting_side_in_check() {
        // White to move with the rook already giving check on the e-file.
        let result = "4k3/8/8/8/8/8/8/4R1K1 w - -".parse::<Position>();
        assert_eq!(result, Err(FenError::OpponentInCheck { color: "black" }));
        // The same board with Black to move is an ordinary check.
        let pos: Position = "4k3/8/8/8/8/8/8/4R1K1 b - -".parse().unwrap();
        assert!(pos.is_in_check(crate::color::Color::Black));
    }

    #[test]
    fn error_missing_king() {
        let result = "8/8/8/8/8/8/8/4K3 w - -".parse::<Position>();
        assert_eq!(
            result,
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: "black",
                    count: 0
                }
            })
        );
    }
}
