use std::fmt;
use std::iter;
use std::slice::Iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 2] = [Direction::Across, Direction::Down];
        DIRS.iter()
    }

    /// Name of the line a run in this direction lies on
    pub fn line_name(&self) -> &'static str {
        match self {
            Self::Across => "row",
            Self::Down => "column",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Across => write!(f, "horizontal"),
            Self::Down => write!(f, "vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the next position in the given direction. Positions are unbounded
    /// above, so the grid decides whether the result is on the board
    pub fn next(&self, dir: Direction) -> Option<Position> {
        let mut p = *self;
        p[dir] = p[dir].checked_add(1)?;
        Some(p)
    }

    /// Returns the previous position in the given direction
    pub fn prev(&self, dir: Direction) -> Option<Position> {
        let mut p = *self;
        p[dir] = p[dir].checked_sub(1)?;
        Some(p)
    }

    /// Walks forward from (but not including) this position
    pub fn iter_next(self, dir: Direction) -> impl Iterator<Item = Position> {
        iter::successors(self.next(dir), move |p| p.next(dir))
    }

    /// Walks backward from (but not including) this position
    pub fn iter_prev(self, dir: Direction) -> impl Iterator<Item = Position> {
        iter::successors(self.prev(dir), move |p| p.prev(dir))
    }

    /// The two positions that share an edge with this one along `dir`
    pub fn neighbors(&self, dir: Direction) -> impl Iterator<Item = Position> {
        self.prev(dir).into_iter().chain(self.next(dir))
    }

    /// Returns all the adjacent positions to this position
    pub fn adjacent(&self) -> Vec<Position> {
        Direction::iter().flat_map(|&d| self.neighbors(d)).collect()
    }
}

impl std::ops::Index<Direction> for Position {
    type Output = usize;

    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::Across => &self.col,
            Direction::Down => &self.row,
        }
    }
}

impl std::ops::IndexMut<Direction> for Position {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::Across => &mut self.col,
            Direction::Down => &mut self.row,
        }
    }
}

/// Normalizes a letter to uppercase, returning None for anything outside A-Z
pub fn normalize_letter(letter: char) -> Option<char> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indexing() {
        let mut p = Position::new(2, 5);
        assert_eq!(p[Direction::Across], 5);
        assert_eq!(p[Direction::Down], 2);
        p[Direction::Down] += 1;
        assert_eq!(p, Position::new(3, 5));
    }

    #[test]
    fn test_prev_stops_at_edge() {
        let p = Position::new(0, 1);
        assert_eq!(p.prev(Direction::Down), None);
        assert_eq!(p.prev(Direction::Across), Some(Position::new(0, 0)));
        assert_eq!(p.iter_prev(Direction::Across).collect::<Vec<_>>(), vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_adjacent_at_corner() {
        let adj = Position::new(0, 0).adjacent();
        assert_eq!(adj, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('q'), Some('Q'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter('é'), None);
    }
}
