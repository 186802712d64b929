//! Move validation for a Scrabble-like word grid.
//!
//! [`BoardState`](scrabble::BoardState) owns one game's grid. Letters are staged with
//! `set_cell`, judged with `check_moves` and then committed or reverted.

pub mod config;
pub mod error;
pub mod scrabble;
pub mod shell;
