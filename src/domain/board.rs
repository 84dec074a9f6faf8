use crate::domain::models::{Cell, Marker, Position, SIDE};

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Plain 3x3 grid. Carries no locking of its own; the only mutable instance
/// in a running match lives inside `SharedGame`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Occupies an empty in-bounds cell. Returns false, leaving the board
    /// untouched, for anything else.
    pub(crate) fn place(&mut self, pos: Position, marker: Marker) -> bool {
        if !self.is_empty_at(pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = Cell::Occupied(marker);
        true
    }

    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }

    pub fn has_line(&self, marker: Marker) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(r, c)| self.cells[r][c] == Cell::Occupied(marker))
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }
}
