//! Driver command parsing.

use rulebook_core::{Position, PromotionPiece, Square};

use crate::error::CliError;

/// A session setting changed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every move.
    Board(bool),
    /// Mark legal destinations when showing the board with a piece selected.
    Highlight(bool),
}

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `new` -- start over from the initial position.
    New,
    /// `fen <fen>` -- start over from the given position.
    Fen(Position),
    /// `show` -- print the board.
    Show,
    /// `status` -- print whose turn it is and the game status.
    Status,
    /// `moves [square]` -- list legal moves, optionally for one piece.
    Moves(Option<Square>),
    /// `select <square>` -- pick up a piece.
    Select(Square),
    /// `move <from> <to>` or `move <from><to>` -- attempt a move.
    Move { from: Square, to: Square },
    /// `promote <q|r|b|n>` -- resolve a pending promotion.
    Promote(PromotionPiece),
    /// `perft <depth>` -- count leaf nodes per root move.
    Perft(usize),
    /// `set <option> <value>` -- change a session setting.
    Set(SessionOption),
    /// `quit` -- leave the session.
    Quit,
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(CliError::UnknownCommand {
            command: String::new(),
        });
    };

    match name {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "quit" | "exit" => Ok(Command::Quit),
        "fen" => parse_fen(args),
        "moves" => match args.first() {
            Some(text) => Ok(Command::Moves(Some(parse_square(text)?))),
            None => Ok(Command::Moves(None)),
        },
        "select" => {
            let text = args.first().ok_or(CliError::MissingArgument {
                command: "select",
                argument: "square",
            })?;
            Ok(Command::Select(parse_square(text)?))
        }
        "move" => parse_move(args),
        "promote" => {
            let text = args.first().ok_or(CliError::MissingArgument {
                command: "promote",
                argument: "piece",
            })?;
            Ok(Command::Promote(parse_promotion(text)?))
        }
        "perft" => {
            let text = args.first().ok_or(CliError::MissingArgument {
                command: "perft",
                argument: "depth",
            })?;
            let depth = text.parse().map_err(|_| CliError::InvalidDepth {
                value: text.to_string(),
            })?;
            Ok(Command::Perft(depth))
        }
        "set" => parse_set(args),
        other => Err(CliError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

fn parse_fen(args: &[&str]) -> Result<Command, CliError> {
    if args.is_empty() {
        return Err(CliError::MissingArgument {
            command: "fen",
            argument: "position",
        });
    }
    let position: Position = args.join(" ").parse()?;
    Ok(Command::Fen(position))
}

/// Accepts `e2 e4` and `e2e4`.
fn parse_move(args: &[&str]) -> Result<Command, CliError> {
    let missing = CliError::MissingArgument {
        command: "move",
        argument: "squares",
    };
    let (from, to) = match args {
        [joined] if joined.len() == 4 && joined.is_char_boundary(2) => joined.split_at(2),
        [from, to, ..] => (*from, *to),
        [single] => {
            return Err(CliError::InvalidSquare {
                value: single.to_string(),
            });
        }
        [] => return Err(missing),
    };
    Ok(Command::Move {
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

fn parse_set(args: &[&str]) -> Result<Command, CliError> {
    let [name, value, ..] = args else {
        return Err(CliError::MissingArgument {
            command: "set",
            argument: "option and value",
        });
    };

    let enabled = match *value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(CliError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };

    match *name {
        "board" => Ok(Command::Set(SessionOption::Board(enabled))),
        "highlight" => Ok(Command::Set(SessionOption::Highlight(enabled))),
        _ => Err(CliError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_square(text: &str) -> Result<Square, CliError> {
    Square::from_algebraic(text).ok_or_else(|| CliError::InvalidSquare {
        value: text.to_string(),
    })
}

fn parse_promotion(text: &str) -> Result<PromotionPiece, CliError> {
    let mut chars = text.chars();
    let piece = match (chars.next(), chars.next()) {
        (Some(c), None) => PromotionPiece::from_char(c),
        _ => None,
    };
    piece.ok_or_else(|| CliError::InvalidPromotion {
        value: text.to_string(),
    })
}
