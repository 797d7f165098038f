//! Text driver for the rulebook chess rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::CliError;
pub use session::{Flow, Session, SessionConfig};
