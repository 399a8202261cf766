use crate::{Board, CellState, Mover};

const CELL_WIDTH: usize = 6;

/// Draws the board as a grid of 6-character cells.
///
/// Empty cells show their position, so a player knows what to type.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    let spacer = vec![" ".repeat(CELL_WIDTH); size].join("|");
    let divider = "-".repeat((CELL_WIDTH + 1) * size);

    let mut result = String::new();
    for i in 0..size {
        let cells: Vec<String> = board
            .row(i)
            .map(|cell| match cell {
                CellState::Empty(position) => format!("  {:02}  ", position),
                CellState::Mark(Mover::Human) => String::from("   X  "),
                CellState::Mark(Mover::Computer) => String::from("   O  "),
            })
            .collect();
        result += &spacer;
        result += "\n";
        result += &cells.join("|");
        result += "\n";
        result += &spacer;
        result += "\n";
        if i != size - 1 {
            result += &divider;
            result += "\n";
        }
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
