use std::fmt;

use ndarray::Array2;

use super::util::{Direction, Position};
use crate::error::DimensionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(l) => Some(*l),
            Cell::Empty => None,
        }
    }
}

/// Fixed-size board of letters. The grid itself knows nothing about which letters
/// are staged or committed; it only records what is on each cell
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        if rows == 0 || cols == 0 {
            return Err(DimensionError { rows, cols });
        }
        Ok(Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Off-board positions read as empty so scans can run past the edges
    pub fn get(&self, pos: Position) -> Cell {
        self.cells
            .get((pos.row, pos.col))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Checks if the cell at the given position holds a letter
    pub fn is_letter(&self, pos: Position) -> bool {
        matches!(self.get(pos), Cell::Letter(_))
    }

    /// Writes a cell. Returns false if the position is off the board
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.cells.get_mut((pos.row, pos.col)) {
            Some(c) => {
                *c = cell;
                true
            }
            None => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cells.map_inplace(|c| *c = Cell::Empty);
    }

    /// First position of the run through `pos` along `dir`. Assumes `pos` holds a letter
    fn run_start(&self, pos: Position, dir: Direction) -> Position {
        pos.iter_prev(dir)
            .take_while(|p| self.is_letter(*p))
            .last()
            .unwrap_or(pos)
    }

    /// Extracts the maximal run of letters through `pos` along `dir`.
    /// Returns None if `pos` is empty; a lone letter yields a one letter word
    pub fn word_at(&self, pos: Position, dir: Direction) -> Option<String> {
        if !self.is_letter(pos) {
            return None;
        }
        let start = self.run_start(pos, dir);
        let word = std::iter::once(start)
            .chain(start.iter_next(dir))
            .map_while(|p| self.get(p).letter())
            .collect();
        Some(word)
    }

    fn write_border(f: &mut fmt::Formatter, cols: usize) -> fmt::Result {
        writeln!(f, "+{}+", "-".repeat(2 * cols - 1))
    }

    fn write_separator(f: &mut fmt::Formatter, cols: usize) -> fmt::Result {
        writeln!(f, "+{}+", vec!["-"; cols].join("+"))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cols = self.cols();
        Self::write_border(f, cols)?;
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                Self::write_separator(f, cols)?;
            }
            let line = row
                .iter()
                .map(|c| c.letter().unwrap_or(' ').to_string())
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "|{}|", line)?;
        }
        Self::write_border(f, cols)
    }
}
