//! Line-oriented game session: reads commands, drives a [`Game`], prints results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rulebook_core::{Game, GameError, MoveList, MoveOutcome, Phase, Position, Square, divide, perft};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every move.
    pub show_board: bool,
    /// Mark the selected piece's legal destinations on the board.
    pub highlight: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            highlight: true,
        }
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game plus the settings for presenting it.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new() -> Self {
        Self::from_position(Position::starting_position())
    }

    /// Create a session starting from `position`.
    pub fn from_position(position: Position) -> Self {
        Self {
            game: Game::from_position(position),
            config: SessionConfig::default(),
        }
    }

    /// Replace the session settings.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Bad commands are reported on `out` and the loop carries on; only I/O
    /// failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, out)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    out.flush()?;
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }

        info!("rulebook shutting down");
        Ok(())
    }

    /// Execute a single command, writing its response to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::New => {
                self.game.reset();
                writeln!(out, "ok")?;
                self.echo_board(out)?;
            }
            Command::Fen(position) => {
                self.game = Game::from_position(position);
                writeln!(out, "ok")?;
                self.echo_board(out)?;
            }
            Command::Show => {
                self.write_board(out)?;
                self.write_status(out)?;
            }
            Command::Status => self.write_status(out)?,
            Command::Moves(square) => {
                let moves = match square {
                    Some(sq) => self.game.legal_moves_from(sq),
                    None => self.game.legal_moves(),
                };
                writeln!(out, "moves: {}", format_moves(&moves))?;
            }
            Command::Select(sq) => {
                let moves = self.game.select(sq)?;
                match self.game.selected() {
                    Some(from) => writeln!(out, "selected {from}: {}", format_moves(&moves))?,
                    None => writeln!(out, "nothing to select on {sq}")?,
                }
                if self.config.highlight {
                    self.echo_board(out)?;
                }
            }
            Command::Move { from, to } => self.handle_move(from, to, out)?,
            Command::Promote(choice) => {
                let square = self
                    .game
                    .pending_promotion()
                    .ok_or(GameError::NoPromotionPending)?;
                self.game.resolve_promotion(square, choice)?;
                writeln!(out, "promoted on {square}")?;
                self.write_status(out)?;
                self.echo_board(out)?;
            }
            Command::Perft(depth) => {
                let results = divide(self.game.position(), depth);
                let total: u64 = match depth {
                    0 => perft(self.game.position(), 0),
                    _ => results.iter().map(|(_, count)| count).sum(),
                };
                for (label, count) in &results {
                    writeln!(out, "{label}: {count}")?;
                }
                writeln!(out, "nodes: {total}")?;
                debug!(depth, nodes = total, "perft finished");
            }
            Command::Set(option) => {
                match option {
                    SessionOption::Board(on) => self.config.show_board = on,
                    SessionOption::Highlight(on) => self.config.highlight = on,
                }
                debug!(?option, "setting changed");
                writeln!(out, "ok")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, out: &mut W) -> Result<(), CliError> {
        match self.game.attempt_move(from, to)? {
            MoveOutcome::Rejected => writeln!(out, "illegal move: {from}{to}")?,
            MoveOutcome::PromotionPending(square) => {
                writeln!(out, "promotion pending on {square}: choose q, r, b or n")?;
                self.echo_board(out)?;
            }
            MoveOutcome::Applied(_) => {
                writeln!(out, "ok")?;
                self.write_status(out)?;
                self.echo_board(out)?;
            }
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        match self.game.phase() {
            Phase::Finished(status) => writeln!(out, "{status}")?,
            Phase::AwaitingPromotion { square } => writeln!(out, "promotion pending on {square}")?,
            Phase::AwaitingSelection | Phase::AwaitingDestination { .. } => {
                writeln!(out, "{} to move: {}", self.game.side_to_move(), self.game.status())?
            }
        }
        Ok(())
    }

    /// Print the board only when `board` is switched on.
    fn echo_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.config.show_board {
            self.write_board(out)?;
        }
        Ok(())
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let board = self.game.position().board();
        let marks: Vec<Square> = match self.game.selected() {
            Some(from) if self.config.highlight => std::iter::once(from)
                .chain(self.game.legal_moves_from(from).iter().map(|mv| mv.to()))
                .collect(),
            _ => Vec::new(),
        };
        writeln!(out, "{}", board.pretty_marked(&marks))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Space-separated move list, or `none`.
fn format_moves(moves: &MoveList) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
