use serde::Serialize;

/// A cell on the board as a `(row, col)` pair, 0-indexed from the top-left.
/// Rows increase downward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Position {
    /// The row of the cell.
    pub row: usize,
    /// The column of the cell.
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The Manhattan distance to another position.
    pub fn manhattan(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the position lies within a `size` x `size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The orthogonal neighbors of the position that lie within a `size` x `size` board.
    pub fn neighbors(&self, size: usize) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);

        if self.row > 0 {
            neighbors.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            neighbors.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            neighbors.push(Position::new(self.row, self.col + 1));
        }

        neighbors
    }
}
