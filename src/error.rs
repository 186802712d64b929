use std::path::PathBuf;

use crate::scrabble::util::Direction;

/// A board needs at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("can't play on a {rows}x{cols} board; rows and columns must be positive")]
pub struct DimensionError {
    pub rows: usize,
    pub cols: usize,
}

/// Errors from placing a single letter on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell at row {row} and column {col} is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("\"{0}\" is not a letter")]
    InvalidLetter(char),

    #[error("board cell at row {row} and column {col} already has a letter")]
    CellOccupied { row: usize, col: usize },
}

/// Reasons a submitted move is rejected. These are ordinary outcomes of checking a
/// move and leave the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no letters have been placed since the last move")]
    NoMoves,

    #[error("letters have not been placed in a line")]
    NotALine,

    #[error(
        "letters placed on the same {} do not make up a contiguous {} line of letters on the board",
        .0.line_name(),
        .0
    )]
    BrokenLine(Direction),

    #[error("no letters since the previous successful move are connected to an existing word")]
    NotConnected,

    #[error("{}", describe_not_words(.0))]
    NotAWord(Vec<String>),
}

fn describe_not_words(words: &[String]) -> String {
    let quoted = words
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(", ");
    if words.len() > 1 {
        format!("{} are not valid words", quoted)
    } else {
        format!("{} is not a valid word", quoted)
    }
}

/// Errors that can occur while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build word set: {0}")]
    Build(#[from] fst::Error),

    #[error("word list {0} contains no usable words")]
    Empty(PathBuf),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from parsing a line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid use of \"place\"; no {0} specified with \"place\"")]
    MissingOperand(&'static str),

    #[error("invalid use of \"place\"; \"{0}\" is not a letter")]
    NotALetter(String),

    #[error("invalid use of \"place\"; \"{0}\" is not an integer")]
    NotAnInteger(String),

    #[error("invalid use of \"place\"; {axis} must be between 1 and {max}, got {value}")]
    OutOfRange {
        axis: &'static str,
        value: i64,
        max: usize,
    },

    #[error("{0}: command not found")]
    Unknown(String),
}
