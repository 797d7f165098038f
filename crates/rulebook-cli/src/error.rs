//! Driver errors.

use rulebook_core::{FenError, GameError};

/// Errors that can occur while reading or executing driver commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognised command word.
        command: String,
    },

    /// A required argument is absent.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command that was given.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The offending text.
        value: String,
    },

    /// A promotion piece letter could not be parsed.
    #[error("invalid promotion piece: {value} (expected q, r, b or n)")]
    InvalidPromotion {
        /// The offending text.
        value: String,
    },

    /// The `perft` depth is not a number.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The offending text.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` was given a value the option does not accept.
    #[error("invalid value for {name}: {value} (expected on or off)")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The `fen` command carried an invalid position.
    #[error("invalid FEN: {source}")]
    Fen {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },

    /// The game refused the call in its current state.
    #[error("{source}")]
    Game {
        /// The underlying state error.
        #[from]
        source: GameError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    /// Return `true` for errors that end the session rather than a single command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io { .. })
    }
}
