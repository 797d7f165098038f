//! Error types for position setup, board validation, and game control.

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string has fewer than 4 or more than 6 fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square on rank 3 or 6.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A trailing move counter is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The side that just moved has left its king attacked.
    #[error("{color} is in check but it is not {color}'s move")]
    OpponentInCheck {
        /// The side not to move.
        color: &'static str,
    },

    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Calls that do not fit the current state of a [`Game`](crate::game::Game).
///
/// An illegal move is not an error; see [`MoveOutcome::Rejected`](crate::game::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move was attempted while a promotion choice is outstanding.
    #[error("promotion on {square} must be resolved first")]
    PromotionPending {
        /// The square holding the pawn awaiting promotion.
        square: Square,
    },
    /// A promotion was resolved while none is pending.
    #[error("no promotion is pending")]
    NoPromotionPending,
    /// A promotion was resolved for a square other than the pending one.
    #[error("promotion is pending on {expected}, not {found}")]
    WrongPromotionSquare {
        /// The square actually awaiting promotion.
        expected: Square,
        /// The square passed in.
        found: Square,
    },
    /// The game has ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, GameError};
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 to 6 FEN fields, found 2");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::PawnsOnBackRank;
        assert_eq!(format!("{err}"), "pawns found on back rank");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert!(std::error::Error::source(&fen_err).is_some());
    }

    #[test]
    fn game_error_display() {
        let err = GameError::WrongPromotionSquare {
            expected: Square::E8,
            found: Square::D8,
        };
        assert_eq!(format!("{err}"), "promotion is pending on e8, not d8");
    }
}
