use crate::{Board, CellState, Mover};

/// A row, a column or one of the two full diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// All 2N+2 lines of a board with side `size`: rows, then columns, then
    /// the main and the anti diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// The positions on this line for a board with side `size`.
    pub fn positions(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |k| match self {
            Line::Row(i) => i * size + k,
            Line::Column(j) => k * size + j,
            Line::MainDiagonal => k * size + k,
            Line::AntiDiagonal => k * size + (size - 1 - k),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineResult {
    NoWin,
    Won(Mover),
}

/// The classification of a board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mover),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(Mover::Human) => write!(f, "won by the human"),
            Outcome::Win(Mover::Computer) => write!(f, "won by the computer"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// A line is won only if every cell holds a mark of the same mover.
///
/// Empty cells never count as equal to each other, so a line of empty cells
/// is not a win.
pub fn scan_line<I: IntoIterator<Item = CellState>>(cells: I) -> LineResult {
    let mut cells = cells.into_iter();
    let Some(mover) = cells.next().and_then(CellState::mover) else {
        return LineResult::NoWin;
    };
    if cells.all(|cell| cell.mover() == Some(mover)) {
        LineResult::Won(mover)
    } else {
        LineResult::NoWin
    }
}

/// Checks all rows, all columns and both diagonals, in that order, and
/// reports the first completed line. Without one, the game goes on as long as
/// there is an empty cell.
pub fn evaluate(board: &Board) -> Outcome {
    for line in Line::all(board.size()) {
        if let LineResult::Won(mover) = scan_line(board.line(line)) {
            return Outcome::Win(mover);
        }
    }
    if board.has_empty_cell() {
        Outcome::InProgress
    } else {
        Outcome::Tie
    }
}
