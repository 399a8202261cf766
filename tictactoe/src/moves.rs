use crate::Board;

/// All empty positions, in ascending order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(position, _)| position)
        .collect()
}

/// Whether `position` is on the board and still empty.
pub fn is_legal(board: &Board, position: usize) -> bool {
    board.get(position).is_some_and(|cell| cell.is_empty())
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{arbitrary::MoveScript, Mover};

    quickcheck! {
        fn each_move_removes_exactly_one_legal_move(script: MoveScript) -> bool {
            let mut board = Board::new(script.size).unwrap();
            let mut mover = Mover::Human;
            let mut previous = legal_moves(&board);
            for &choice in &script.choices {
                if previous.is_empty() {
                    break;
                }
                let position = previous[choice % previous.len()];
                if !is_legal(&board, position) {
                    return false;
                }
                board.place(position, mover);
                let current = legal_moves(&board);
                if current.len() + 1 != previous.len() || current.contains(&position) {
                    return false;
                }
                mover = mover.opponent();
                previous = current;
            }
            // Every marked cell was marked exactly once
            let marked = board.iter().filter(|cell| !cell.is_empty()).count();
            marked + previous.len() == board.cell_count()
        }
    }

    #[test]
    fn fresh_board_is_all_legal() {
        let board = Board::new(3).unwrap();
        assert_eq!(legal_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn occupied_and_out_of_range_are_illegal() {
        let mut board = Board::new(3).unwrap();
        board.place(2, Mover::Human);
        assert!(!is_legal(&board, 2));
        assert!(!is_legal(&board, 9));
        assert!(!is_legal(&board, usize::MAX));
        assert!(is_legal(&board, 8));
        assert_eq!(legal_moves(&board), vec![0, 1, 3, 4, 5, 6, 7, 8]);
    }
}
