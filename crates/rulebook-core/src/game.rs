//! Turn controller: selection, move attempts, promotion and game end.

use std::fmt;

use tracing::{debug, info};

use crate::chess_move::PromotionPiece;
use crate::color::Color;
use crate::error::GameError;
use crate::movegen::{self, MoveList};
use crate::position::Position;
use crate::square::Square;

/// Classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a legal reply.
    Check,
    Checkmate {
        winner: Color,
    },
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Where the controller is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingDestination { from: Square },
    /// A pawn reached the far row and the mover must pick its new piece.
    AwaitingPromotion { square: Square },
    Finished(GameStatus),
}

/// Result of [`Game::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is not legal; nothing changed.
    Rejected,
    /// The move was played and the turn passed.
    Applied(GameStatus),
    /// The move was played but the turn waits on [`Game::resolve_promotion`].
    PromotionPending(Square),
}

/// Classify `position` for its side to move.
pub fn classify(position: &Position) -> GameStatus {
    let us = position.side_to_move();
    let in_check = position.is_in_check(us);
    let has_moves = !movegen::legal_moves(position, us).is_empty();

    match (has_moves, in_check) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Ongoing,
        (false, true) => GameStatus::Checkmate { winner: us.flip() },
        (false, false) => GameStatus::Stalemate,
    }
}

/// A single game from setup to checkmate or stalemate.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    phase: Phase,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard starting position.
    pub fn new() -> Game {
        Game::from_position(Position::starting_position())
    }

    /// Start a game from an arbitrary position, classifying it first.
    pub fn from_position(position: Position) -> Game {
        let status = classify(&position);
        let phase = if status.is_over() {
            Phase::Finished(status)
        } else {
            Phase::AwaitingSelection
        };
        Game {
            position,
            phase,
            status,
        }
    }

    /// Throw the current game away and set up the starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// The selected square, if the controller is waiting for a destination.
    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::AwaitingDestination { from } => Some(from),
            _ => None,
        }
    }

    /// The square of a pawn waiting for its promotion choice.
    pub fn pending_promotion(&self) -> Option<Square> {
        match self.phase {
            Phase::AwaitingPromotion { square } => Some(square),
            _ => None,
        }
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        movegen::legal_moves(&self.position, self.side_to_move())
    }

    /// Legal moves of the piece on `sq`, empty unless it belongs to the side to move.
    pub fn legal_moves_from(&self, sq: Square) -> MoveList {
        if self.position.board().color_at(sq) == Some(self.side_to_move()) {
            movegen::legal_moves_from(&self.position, sq)
        } else {
            MoveList::new()
        }
    }

    /// Select the piece on `sq` and return its legal moves.
    ///
    /// Selecting an empty square or an enemy piece clears the selection and
    /// returns an empty list.
    pub fn select(&mut self, sq: Square) -> Result<MoveList, GameError> {
        self.ensure_accepting_moves()?;

        if self.position.board().color_at(sq) == Some(self.side_to_move()) {
            self.phase = Phase::AwaitingDestination { from: sq };
            debug!(square = %sq, "piece selected");
            Ok(movegen::legal_moves_from(&self.position, sq))
        } else {
            self.phase = Phase::AwaitingSelection;
            Ok(MoveList::new())
        }
    }

    /// Drop the current selection, if any.
    pub fn deselect(&mut self) {
        if let Phase::AwaitingDestination { .. } = self.phase {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// Play the move from `from` to `to` if it is legal.
    ///
    /// Works with or without a prior [`Game::select`]; the selection is
    /// cleared either way.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        self.ensure_accepting_moves()?;
        self.phase = Phase::AwaitingSelection;

        let Some(mv) = self.legal_moves_from(from).find(from, to) else {
            debug!(%from, %to, "move rejected");
            return Ok(MoveOutcome::Rejected);
        };

        let mover = self.side_to_move();
        debug!(%mv, color = %mover, "move applied");

        if let Some(square) = self.position.apply_move(mv) {
            self.phase = Phase::AwaitingPromotion { square };
            debug!(%square, "awaiting promotion choice");
            return Ok(MoveOutcome::PromotionPending(square));
        }

        Ok(MoveOutcome::Applied(self.finish_turn()))
    }

    /// Turn the pawn on `square` into `choice` and finish the suspended turn.
    pub fn resolve_promotion(&mut self, square: Square, choice: PromotionPiece) -> Result<GameStatus, GameError> {
        let expected = match self.phase {
            Phase::AwaitingPromotion { square } => square,
            Phase::Finished(_) => return Err(GameError::GameOver),
            Phase::AwaitingSelection | Phase::AwaitingDestination { .. } => {
                return Err(GameError::NoPromotionPending);
            }
        };
        if square != expected {
            return Err(GameError::WrongPromotionSquare {
                expected,
                found: square,
            });
        }

        self.position.promote(square, choice);
        debug!(%square, piece = %choice.to_piece_kind(), "promotion resolved");
        Ok(self.finish_turn())
    }

    fn ensure_accepting_moves(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Finished(_) => Err(GameError::GameOver),
            Phase::AwaitingPromotion { square } => Err(GameError::PromotionPending { square }),
            Phase::AwaitingSelection | Phase::AwaitingDestination { .. } => Ok(()),
        }
    }

    /// Hand the move to the opponent and classify the result.
    fn finish_turn(&mut self) -> GameStatus {
        self.position.pass_turn();
        self.status = classify(&self.position);

        if self.status.is_over() {
            self.phase = Phase::Finished(self.status);
            info!(status = %self.status, "game over");
        } else {
            self.phase = Phase::AwaitingSelection;
        }
        self.status
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
