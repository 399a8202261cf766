use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{evaluate, legal_moves, Board, Move, Mover, NoMovesAvailable, Outcome};

/// Picks the computer's next move.
///
/// In order of priority:
/// 1. the center cell, if it's empty,
/// 2. the first position (ascending) where the computer would win right away,
/// 3. the first position where the human would win on their next move,
/// 4. a random empty position.
///
/// The lookahead only ever plays on copies of the board.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, NoMovesAvailable> {
    let candidates = legal_moves(board);
    if candidates.is_empty() {
        return Err(NoMovesAvailable);
    }

    let center = board.center();
    if board.cell_at(center).is_empty() {
        debug!(position = center, "Taking the center");
        return Ok(center);
    }

    if let Some(position) = first_winning_move(board, &candidates, Mover::Computer) {
        debug!(position, "Taking the win");
        return Ok(position);
    }

    if let Some(position) = first_winning_move(board, &candidates, Mover::Human) {
        debug!(position, "Blocking the opponent");
        return Ok(position);
    }

    // Can't fail, candidates is not empty
    let position = *candidates.choose(rng).ok_or(NoMovesAvailable)?;
    debug!(position, "Playing a random spot");
    Ok(position)
}

/// The first of `candidates` that completes a line for `mover`.
fn first_winning_move(board: &Board, candidates: &[usize], mover: Mover) -> Option<usize> {
    candidates.iter().copied().find(|&position| {
        let trial = board.with_move(Move { position, mover });
        evaluate(&trial) == Outcome::Win(mover)
    })
}
