//! Core chess rules: board representation, move generation, and turn flow.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use attacks::is_square_attacked;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, GameError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameStatus, MoveOutcome, Phase, classify};
pub use movegen::{MoveList, legal_moves, legal_moves_from, pseudo_legal_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
