use std::io;

use anyhow::{Context, Result};
use tracing::info;

use rulebook_cli::Session;
use rulebook_core::{Position, STARTING_FEN};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    // An optional FEN on the command line sets up the opening position.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let fen = if args.is_empty() {
        STARTING_FEN.to_string()
    } else {
        args.join(" ")
    };
    let position: Position = fen.parse().with_context(|| format!("invalid starting FEN: {fen}"))?;

    info!(%fen, "rulebook starting");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::from_position(position).run(stdin.lock(), &mut stdout)?;
    Ok(())
}
