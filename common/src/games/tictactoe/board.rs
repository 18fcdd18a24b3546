use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// Fixed 3x3 grid, indexed `cells[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

pub fn is_in_bounds(position: Position) -> bool {
    position.row < BOARD_SIZE && position.col < BOARD_SIZE
}

/// Empty cells in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, position: Position) -> bool {
    board.get(position) == Some(Mark::Empty)
}
