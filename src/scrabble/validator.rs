//! Decides whether the letters staged since the last commit make up a legal move.
//!
//! The checks run in a fixed order and the first one that reaches a verdict wins:
//!
//! 1. nothing staged
//! 2. a single letter as the first word, which only has to be a word itself
//! 3. staged letters that do not share a row or a column
//! 4. a line with a gap that no earlier letter fills
//! 5. several letters as the first word, judged by the one word they spell
//! 6. a later move that touches no committed letter
//! 7. every word the move forms, each of which must be in the dictionary

use std::collections::BTreeSet;

use tracing::trace;

use super::board::Grid;
use super::dictionary::Dictionary;
use super::state::Move;
use super::util::{Direction, Position};
use crate::error::Rejection;

/// A move that passed every check, with the words it was judged on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub words: Vec<String>,
}

/// How the staged letters are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    /// One letter, which lies on both a row and a column
    Single,
    /// Two or more letters sharing a row or column
    Along(Direction),
}

pub(crate) struct MoveValidator<'a, D> {
    pub grid: &'a Grid,
    pub staged: &'a [Move],
    pub committed: &'a BTreeSet<Move>,
    pub first_word: bool,
    pub dictionary: &'a D,
}

impl<'a, D: Dictionary> MoveValidator<'a, D> {
    pub fn check(&self) -> Result<Accepted, Rejection> {
        let first = match self.staged.first() {
            Some(m) => *m,
            None => return Err(Rejection::NoMoves),
        };

        if self.first_word && self.staged.len() == 1 {
            return self.judge(vec![first.letter.to_string()]);
        }

        let line = self.line()?;
        if let Line::Along(dir) = line {
            self.check_contiguous(dir)?;

            if self.first_word {
                let word = self.word_at(first.pos, dir);
                return self.judge(vec![word]);
            }
        }

        if !self.staged.iter().any(|m| self.touches_committed(m.pos)) {
            return Err(Rejection::NotConnected);
        }

        let words = self.collect_words(line, first.pos);
        self.judge(words.into_iter().collect())
    }

    /// Works out whether every staged letter shares a row or a column
    fn line(&self) -> Result<Line, Rejection> {
        if self.staged.len() == 1 {
            return Ok(Line::Single);
        }
        let first = self.staged[0].pos;
        let same_row = self.staged.iter().all(|m| m.row() == first.row);
        let same_col = self.staged.iter().all(|m| m.col() == first.col);

        match (same_row, same_col) {
            (true, _) => Ok(Line::Along(Direction::Across)),
            (false, true) => Ok(Line::Along(Direction::Down)),
            (false, false) => Err(Rejection::NotALine),
        }
    }

    /// Every cell between two staged letters on the line must already hold a letter
    fn check_contiguous(&self, dir: Direction) -> Result<(), Rejection> {
        let mut offsets = self.staged.iter().map(|m| m.pos[dir]).collect::<Vec<_>>();
        offsets.sort_unstable();

        let mut probe = self.staged[0].pos;
        for pair in offsets.windows(2) {
            for offset in (pair[0] + 1)..pair[1] {
                probe[dir] = offset;
                if !self.grid.is_letter(probe) {
                    trace!(?probe, "gap in staged line");
                    return Err(Rejection::BrokenLine(dir));
                }
            }
        }
        Ok(())
    }

    fn is_committed(&self, pos: Position) -> bool {
        self.committed.contains(&pos)
    }

    /// Whether a committed letter sits next to `pos` along `dir`
    fn committed_neighbor(&self, pos: Position, dir: Direction) -> bool {
        pos.neighbors(dir).any(|n| self.is_committed(n))
    }

    fn touches_committed(&self, pos: Position) -> bool {
        pos.adjacent().into_iter().any(|n| self.is_committed(n))
    }

    fn word_at(&self, pos: Position, dir: Direction) -> String {
        // Staged positions always hold a letter, so the run is never missing
        self.grid.word_at(pos, dir).unwrap_or_default()
    }

    /// All distinct words formed by this move. A word is only formed across a
    /// committed neighbour, plus the staged line itself when more than one letter was placed
    fn collect_words(&self, line: Line, first: Position) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        for m in self.staged {
            for &dir in Direction::iter() {
                if self.committed_neighbor(m.pos, dir) {
                    words.insert(self.word_at(m.pos, dir));
                }
            }
        }
        if let Line::Along(dir) = line {
            words.insert(self.word_at(first, dir));
        }
        words
    }

    /// Looks every word up, reporting all of the invalid ones
    fn judge(&self, words: Vec<String>) -> Result<Accepted, Rejection> {
        let invalid = words
            .iter()
            .filter(|w| !self.dictionary.is_valid(w))
            .cloned()
            .collect::<Vec<_>>();
        if invalid.is_empty() {
            Ok(Accepted { words })
        } else {
            Err(Rejection::NotAWord(invalid))
        }
    }
}
