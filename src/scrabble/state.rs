use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::{debug, instrument, warn};

use super::board::{Cell, Grid};
use super::dictionary::Dictionary;
use super::util::{normalize_letter, Position};
use super::validator::{Accepted, MoveValidator};
use crate::error::{DimensionError, PlacementError, Rejection};

/// A single letter placed on the board. Moves compare by position only
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub pos: Position,
    pub letter: char,
}

impl Move {
    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Move {}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

// Lets the committed set be queried by position
impl Borrow<Position> for Move {
    fn borrow(&self) -> &Position {
        &self.pos
    }
}

/// One game's board: the grid, the letters staged since the last commit and
/// everything committed before that
pub struct BoardState<D> {
    grid: Grid,
    /// Moves made since the last commit, in placement order
    staged: Vec<Move>,
    /// Moves folded in by earlier successful submissions
    committed: BTreeSet<Move>,
    /// True until the first successful commit
    first_word: bool,
    dictionary: D,
}

impl<D: Dictionary> BoardState<D> {
    pub fn new(rows: usize, cols: usize, dictionary: D) -> Result<Self, DimensionError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            staged: Vec::new(),
            committed: BTreeSet::new(),
            first_word: true,
            dictionary,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn staged(&self) -> &[Move] {
        &self.staged
    }

    pub fn committed(&self) -> &BTreeSet<Move> {
        &self.committed
    }

    pub fn is_first_word(&self) -> bool {
        self.first_word
    }

    /// Never fails; coordinates off the board are empty
    pub fn get_cell(&self, row: usize, col: usize) -> Cell {
        self.grid.get(Position::new(row, col))
    }

    /// Stages a letter on an empty cell. Lowercase letters are accepted and stored uppercase
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, row: usize, col: usize, letter: char) -> Result<(), PlacementError> {
        let pos = Position::new(row, col);
        if !self.grid.contains(pos) {
            return Err(PlacementError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let letter = normalize_letter(letter).ok_or(PlacementError::InvalidLetter(letter))?;
        if self.grid.is_letter(pos) {
            return Err(PlacementError::CellOccupied { row, col });
        }

        self.grid.set(pos, Cell::Letter(letter));
        self.staged.push(Move { pos, letter });
        debug!(staged = self.staged.len(), "letter staged");
        Ok(())
    }

    /// Checks the staged letters against the placement and dictionary rules.
    /// Nothing on the board changes, whatever the verdict
    #[instrument(skip(self))]
    pub fn check_moves(&self) -> Result<Accepted, Rejection> {
        let verdict = MoveValidator {
            grid: &self.grid,
            staged: &self.staged,
            committed: &self.committed,
            first_word: self.first_word,
            dictionary: &self.dictionary,
        }
        .check();

        match &verdict {
            Ok(accepted) => debug!(words = ?accepted.words, "move accepted"),
            Err(rejection) => debug!(%rejection, "move rejected"),
        }
        verdict
    }

    /// Folds the stage into the committed record. Callers are expected to have
    /// checked the stage first; an empty stage is ignored
    #[instrument(skip(self))]
    pub fn commit(&mut self) {
        if self.staged.is_empty() {
            warn!("commit called with nothing staged");
            return;
        }
        self.committed.extend(self.staged.drain(..));
        self.first_word = false;
    }

    /// Erases every staged letter from the grid
    #[instrument(skip(self))]
    pub fn revert(&mut self) {
        for m in self.staged.drain(..) {
            self.grid.set(m.pos, Cell::Empty);
        }
    }

    /// Resets the board to its freshly constructed state
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.grid.reset();
        self.staged.clear();
        self.committed.clear();
        self.first_word = true;
    }

    /// Checks the stage and commits it if the move is accepted
    pub fn submit(&mut self) -> Result<Accepted, Rejection> {
        let accepted = self.check_moves()?;
        self.commit();
        Ok(accepted)
    }
}
