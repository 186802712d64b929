pub mod board;
pub mod dictionary;
pub mod state;
pub mod util;
mod validator;

/// Board size used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 19;

pub use self::board::{Cell, Grid};
pub use self::dictionary::{Dictionary, WordList};
pub use self::state::{BoardState, Move};
pub use self::validator::Accepted;
