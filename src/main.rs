use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pseudo_scrabble::config::AppConfig;
use pseudo_scrabble::scrabble::{BoardState, WordList};
use pseudo_scrabble::shell::{interrupt_notice, Shell, PROMPT};

const SIGINT: i32 = 2;

/// Interact with a pseudo-Scrabble board via a REPL
#[derive(Parser, Debug)]
#[command(name = "pseudo-scrabble")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config file; defaults are used if it doesn't exist
    #[arg(long, default_value = "pseudo-scrabble.json")]
    config: PathBuf,

    /// Number of rows in the board (default 19)
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of columns in the board (default 19)
    #[arg(short, long)]
    cols: Option<usize>,

    /// Word list with one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.rows,
        cli.cols,
        cli.dictionary,
    )?;
    info!(
        rows = config.rows,
        cols = config.cols,
        dictionary = %config.dictionary.display(),
        "starting game"
    );

    let words = WordList::from_file(&config.dictionary)?;
    let board = BoardState::new(config.rows, config.cols, words)?;
    let mut shell = Shell::new(board);

    // Keep the session alive on ctrl-C; the terminal drops the half-typed line
    ctrlc::set_handler(|| {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\n{}\n{}", interrupt_notice(SIGINT), PROMPT);
        let _ = out.flush();
    })?;

    shell.run(io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}
