use std::ops::Deref;

use crate::{InvalidDimension, Line};

/// The largest supported board side.
pub const MAX_SIZE: usize = 9;

/// One of the two entities that place marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mover {
    Human,
    Computer,
}

impl Mover {
    pub fn opponent(self) -> Self {
        match self {
            Mover::Human => Mover::Computer,
            Mover::Computer => Mover::Human,
        }
    }
}

/// The content of a single cell.
///
/// An empty cell remembers its own position, which is also what gets
/// displayed before anyone plays there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty(usize),
    Mark(Mover),
}

impl CellState {
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty(_))
    }

    /// The mover whose mark is in this cell, if any.
    pub fn mover(self) -> Option<Mover> {
        match self {
            CellState::Empty(_) => None,
            CellState::Mark(mover) => Some(mover),
        }
    }
}

/// A single placement of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub position: usize,
    pub mover: Mover,
}

/// A square grid of cells, stored row by row.
//
// Invariant: `cells.len() == size * size`, and every cell that is still empty
// holds its own index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an empty board of side `size`.
    ///
    /// Fails if `size` is not in `1..=MAX_SIZE`.
    pub fn new(size: usize) -> Result<Self, InvalidDimension> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(InvalidDimension { size });
        }
        Ok(Self {
            size,
            cells: (0..size * size).map(CellState::Empty).collect(),
        })
    }

    /// The side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// N², the number of positions on the board.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Panics if `position` is not on the board.
    pub fn cell_at(&self, position: usize) -> CellState {
        self.cells[position]
    }

    /// Puts the mover's mark into an empty cell.
    ///
    /// Panics if the cell is already marked. Callers are expected to check
    /// the move with [`is_legal()`](crate::is_legal) first.
    pub fn place(&mut self, position: usize, mover: Mover) {
        let cell = &mut self.cells[position];
        assert!(
            cell.is_empty(),
            "place() called on occupied position {}",
            position
        );
        *cell = CellState::Mark(mover);
    }

    /// A copy of this board with the move applied. The board itself is left untouched.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut board = self.clone();
        board.place(mv.position, mv.mover);
        board
    }

    /// The position at row `(N-1)/2`, column `(N-1)/2`.
    ///
    /// For even N this is the upper left one of the four central cells.
    pub fn center(&self) -> usize {
        let mid = (self.size - 1) / 2;
        mid * self.size + mid
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// The cells along `line`, in order.
    pub fn line(&self, line: Line) -> impl Iterator<Item = CellState> + '_ {
        line.positions(self.size).map(|position| self.cells[position])
    }

    pub fn row(&self, i: usize) -> impl Iterator<Item = CellState> + '_ {
        assert!(i < self.size);
        self.line(Line::Row(i))
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = CellState> + '_ {
        assert!(j < self.size);
        self.line(Line::Column(j))
    }

    /// From the top left to the bottom right corner.
    pub fn main_diagonal(&self) -> impl Iterator<Item = CellState> + '_ {
        self.line(Line::MainDiagonal)
    }

    /// From the top right to the bottom left corner.
    pub fn anti_diagonal(&self) -> impl Iterator<Item = CellState> + '_ {
        self.line(Line::AntiDiagonal)
    }
}

impl Deref for Board {
    type Target = [CellState];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}
