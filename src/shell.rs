//! Line-oriented commands for playing on a [`BoardState`] from a terminal.
//!
//! Rows and columns are one-indexed here and converted before they reach the board.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument};

use crate::error::CommandError;
use crate::scrabble::util::normalize_letter;
use crate::scrabble::{BoardState, Dictionary};

pub const PROMPT: &str = ">>> ";

pub const WELCOME: &str = "Welcome to Pseudo-Scrabble.\nType \"help\" for instructions.";

pub const GOODBYE: &str = "Goodbye";

pub const HELP: &str = "
Play Pseudo-Scrabble by repeatedly making moves. To make a move, place any
number of letters on the blank spaces of this board, then submit the move. If
the move is valid, then the move will be saved to the board and a move counter
will increment. If the move is not valid, then the move is not saved and the
player has the option to revert the board to the previous successful move.

To place a letter on the board, run the \"place\" command specifying a single
letter, and a valid row number and column number indicating the location of
placement. Rows and columns are one-indexed (e.g. the first row is row 1,
and row 0 does not exist).

A valid move meets the following criteria:
- Letters must be played in a straight line, up-down or left-right.
- The first word can be played anywhere on the board.
- All subsequent words must share at least one edge with an existing word.
- Word direction can be left-to-right or top-to-bottom.
- All sets of adjacent letters formed by the move must be valid words.

Description of commands
\"help\":   Print these instructions for use.
\"quit\":   Exit Pseudo-Scrabble.
\"clear\":  Clear the board.
\"place [L] [R] [C]\": Place a [L]etter at the specified [R]ow and [C]olumn.
\"submit\": Evaluate letters placed on the board.
\"revert\": Revert the board state to the most recent successful move.
\"print\":  Print the current board state and the number of moves made so far.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Clear,
    /// Zero-indexed placement
    Place { letter: char, row: usize, col: usize },
    Submit,
    Revert,
    Print,
}

/// A parsed line along with any operands the command doesn't take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub command: Command,
    pub ignored: Vec<String>,
}

/// Printed when the terminal sends an interrupt; the session carries on
pub fn interrupt_notice(signal: i32) -> String {
    format!(
        "Keyboard interrupt (signal {}) caught; type \"quit\" to exit this prompt",
        signal
    )
}

/// Parses one line of input. Blank lines parse to None
pub fn parse(line: &str, rows: usize, cols: usize) -> Result<Option<Parsed>, CommandError> {
    let mut tokens = line.split_whitespace();
    let operation = match tokens.next() {
        Some(op) => op,
        None => return Ok(None),
    };

    let command = match operation {
        "help" => Command::Help,
        "quit" => Command::Quit,
        "clear" => Command::Clear,
        "submit" => Command::Submit,
        "revert" => Command::Revert,
        "print" => Command::Print,
        "place" => {
            let letter = parse_letter(tokens.next())?;
            let row = parse_index(tokens.next(), "row", rows)?;
            let col = parse_index(tokens.next(), "column", cols)?;
            Command::Place { letter, row, col }
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    let ignored = tokens.map(str::to_string).collect();
    Ok(Some(Parsed { command, ignored }))
}

fn parse_letter(token: Option<&str>) -> Result<char, CommandError> {
    let token = token.ok_or(CommandError::MissingOperand("letter, row, and column"))?;
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            normalize_letter(c).ok_or_else(|| CommandError::NotALetter(token.to_string()))
        }
        _ => Err(CommandError::NotALetter(token.to_string())),
    }
}

/// Converts a one-indexed operand into a zero-indexed coordinate
fn parse_index(token: Option<&str>, axis: &'static str, max: usize) -> Result<usize, CommandError> {
    let token = token.ok_or(CommandError::MissingOperand(axis))?;
    let value: i64 = token
        .parse()
        .map_err(|_| CommandError::NotAnInteger(token.to_string()))?;
    match usize::try_from(value) {
        Ok(v) if (1..=max).contains(&v) => Ok(v - 1),
        _ => Err(CommandError::OutOfRange { axis, value, max }),
    }
}

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Quit,
}

pub struct Shell<D> {
    board: BoardState<D>,
    /// Successful submissions since the last clear
    moves: usize,
}

impl<D: Dictionary> Shell<D> {
    pub fn new(board: BoardState<D>) -> Self {
        Self { board, moves: 0 }
    }

    pub fn board(&self) -> &BoardState<D> {
        &self.board
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let parsed = match parse(line, self.board.rows(), self.board.cols()) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return Reply::Message(String::new()),
            Err(e) => return Reply::Message(e.to_string()),
        };

        let mut text = String::new();
        if !parsed.ignored.is_empty() {
            text.push_str(&format!("Ignoring \"{}\"...\n", parsed.ignored.join(" ")));
        }
        match self.execute(parsed.command) {
            Reply::Message(msg) => {
                text.push_str(&msg);
                Reply::Message(text)
            }
            Reply::Quit => Reply::Quit,
        }
    }

    /// Reads commands until `quit` or the end of input, writing every reply to `out`
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", WELCOME)?;
        let mut line = String::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }
            match self.handle_line(&line) {
                Reply::Message(msg) if msg.is_empty() => continue,
                Reply::Message(msg) => writeln!(out, "{}\n", msg)?,
                Reply::Quit => break,
            }
        }
        writeln!(out, "\n{}\n", GOODBYE)?;
        out.flush()
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "executing");
        let msg = match command {
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
            Command::Clear => {
                self.board.clear();
                self.moves = 0;
                "Board has been cleared".to_string()
            }
            Command::Place { letter, row, col } => match self.board.set_cell(row, col, letter) {
                Ok(()) => "Letter has been placed on the board".to_string(),
                Err(e) => format!("Bad placement: {}", e),
            },
            Command::Submit => match self.board.submit() {
                Ok(_) => {
                    self.moves += 1;
                    let noun = if self.moves == 1 { "move" } else { "moves" };
                    format!("Move successful; {} {} made so far", self.moves, noun)
                }
                Err(rejection) => format!("Move failed; {}", rejection),
            },
            Command::Revert => {
                self.board.revert();
                "Board has been reverted to the previous move".to_string()
            }
            Command::Print => format!("Moves made: {}\n\n{}", self.moves, self.board.grid()),
        };
        Reply::Message(msg)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Cursor;

    use super::*;
    use crate::scrabble::Cell;

    fn shell() -> Shell<HashSet<String>> {
        let words = ["HI", "HIS", "IS"].iter().map(|w| w.to_string()).collect();
        Shell::new(BoardState::new(4, 5, words).unwrap())
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(m) => m,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    fn run(shell: &mut Shell<HashSet<String>>, input: &str) -> String {
        let mut out = Vec::new();
        shell.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_place_is_one_indexed() {
        let parsed = parse("place h 1 5", 4, 5).unwrap().unwrap();
        assert_eq!(parsed.command, Command::Place { letter: 'H', row: 0, col: 4 });
        assert!(parsed.ignored.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("   ", 4, 5), Ok(None));
        assert_eq!(parse("dance", 4, 5), Err(CommandError::Unknown("dance".into())));
        assert!(matches!(parse("place", 4, 5), Err(CommandError::MissingOperand(_))));
        assert_eq!(parse("place HI 1 1", 4, 5), Err(CommandError::NotALetter("HI".into())));
        assert_eq!(parse("place 3 1 1", 4, 5), Err(CommandError::NotALetter("3".into())));
        assert_eq!(parse("place A x 1", 4, 5), Err(CommandError::NotAnInteger("x".into())));
        assert_eq!(
            parse("place A 0 1", 4, 5),
            Err(CommandError::OutOfRange { axis: "row", value: 0, max: 4 })
        );
        assert_eq!(
            parse("place A 1 6", 4, 5),
            Err(CommandError::OutOfRange { axis: "column", value: 6, max: 5 })
        );
        assert_eq!(parse("place A 2", 4, 5), Err(CommandError::MissingOperand("column")));
    }

    #[test]
    fn test_extra_operands_ignored() {
        let parsed = parse("print the board", 4, 5).unwrap().unwrap();
        assert_eq!(parsed.command, Command::Print);
        assert_eq!(parsed.ignored, vec!["the".to_string(), "board".to_string()]);

        let mut shell = shell();
        let out = message(shell.handle_line("revert now please"));
        assert!(out.starts_with("Ignoring \"now please\"...\n"));
    }

    #[test]
    fn test_session() {
        let mut shell = shell();
        assert_eq!(
            message(shell.handle_line("place h 2 2")),
            "Letter has been placed on the board"
        );
        shell.handle_line("place I 2 3");
        assert_eq!(message(shell.handle_line("submit")), "Move successful; 1 move made so far");

        shell.handle_line("place s 2 4");
        assert_eq!(message(shell.handle_line("submit")), "Move successful; 2 moves made so far");
        assert_eq!(shell.board().get_cell(1, 3), Cell::Letter('S'));

        assert_eq!(
            message(shell.handle_line("place Q 2 2")),
            "Bad placement: board cell at row 1 and column 1 already has a letter"
        );

        shell.handle_line("place q 4 5");
        assert_eq!(
            message(shell.handle_line("submit")),
            "Move failed; no letters since the previous successful move are connected to an \
             existing word"
        );
        shell.handle_line("revert");
        assert_eq!(shell.board().get_cell(3, 4), Cell::Empty);

        let printed = message(shell.handle_line("print"));
        assert!(printed.starts_with("Moves made: 2\n\n"));
        assert!(printed.contains("| |H|I|S| |"));

        assert_eq!(message(shell.handle_line("clear")), "Board has been cleared");
        assert_eq!(shell.moves(), 0);
        assert_eq!(
            message(shell.handle_line("submit")),
            "Move failed; no letters have been placed since the last move"
        );
        assert_eq!(shell.handle_line("quit"), Reply::Quit);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut shell = shell();
        let out = run(&mut shell, "place h 1 1\nplace i 1 2\nsubmit\n");
        assert!(out.starts_with(WELCOME));
        assert!(out.contains("Move successful; 1 move made so far"));
        assert!(out.ends_with("\nGoodbye\n\n"));
        assert_eq!(out.matches(PROMPT).count(), 4);
        assert_eq!(shell.moves(), 1);
    }

    #[test]
    fn test_run_skips_blank_lines() {
        let mut shell = shell();
        let out = run(&mut shell, "place h 2 2\n\n   \nplace i 2 3\nsubmit\n");
        assert!(out.contains("Move successful; 1 move made so far"));
        assert_eq!(out.matches(PROMPT).count(), 6);
        assert!(out.ends_with("\nGoodbye\n\n"));
    }

    #[test]
    fn test_run_quit_ignores_remaining_input() {
        let mut shell = shell();
        let out = run(&mut shell, "quit\nplace h 1 1\n");
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert!(out.ends_with("\nGoodbye\n\n"));
        assert_eq!(shell.board().get_cell(0, 0), Cell::Empty);

    }

    #[test]
    fn test_run_reads_last_line_without_newline() {
        let mut shell = shell();
        let out = run(&mut shell, "place h 1 1");
        assert!(out.contains("Letter has been placed on the board"));
        assert_eq!(shell.board().get_cell(0, 0), Cell::Letter('H'));
    }

    #[test]
    fn test_interrupt_notice() {
        assert_eq!(
            interrupt_notice(2),
            "Keyboard interrupt (signal 2) caught; type \"quit\" to exit this prompt"
        );
    }
}
