use rand::Rng;
use tracing::{debug, trace};

use crate::{
    choose_move, evaluate, is_legal, Board, IllegalMove, InvalidDimension, Move, Mover, Outcome,
    OutOfTurn,
};

/// Whose turn it is, or how the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    HumanTurn,
    ComputerTurn,
    Finished(Outcome),
}

/// Everything a display needs to show the current game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub state: TurnState,
    pub board: Board,
    pub outcome: Outcome,
}

/// One game, from an empty board to its outcome.
///
/// The human always moves first. Once the session is finished it stays
/// finished; to play again, start a new session.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    state: TurnState,
}

impl GameSession {
    /// Starts a game on an empty board of side `size`.
    pub fn begin(size: usize) -> Result<Self, InvalidDimension> {
        let board = Board::new(size)?;
        debug!(size, "New session");
        Ok(Self {
            board,
            state: TurnState::HumanTurn,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            board: self.board.clone(),
            outcome: self.outcome(),
        }
    }

    /// Plays the human's mark at `position`.
    ///
    /// On error, the session is left unchanged.
    pub fn submit_human_move(&mut self, position: usize) -> Result<TurnState, IllegalMove> {
        if self.state != TurnState::HumanTurn {
            return Err(OutOfTurn { state: self.state }.into());
        }
        if position >= self.board.cell_count() {
            return Err(IllegalMove::OutOfRange {
                position,
                cell_count: self.board.cell_count(),
            });
        }
        if !is_legal(&self.board, position) {
            return Err(IllegalMove::Occupied { position });
        }
        self.apply(Move {
            position,
            mover: Mover::Human,
        });
        Ok(self.state)
    }

    /// Lets the bot pick and play the computer's move.
    ///
    /// Returns the move that was played.
    pub fn advance_computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Move, OutOfTurn> {
        if self.state != TurnState::ComputerTurn {
            return Err(OutOfTurn { state: self.state });
        }
        // The game would be over if there was no empty cell left
        let position = choose_move(&self.board, rng)
            .expect("No move available for the computer despite the game being in progress");
        let mv = Move {
            position,
            mover: Mover::Computer,
        };
        self.apply(mv);
        Ok(mv)
    }

    fn apply(&mut self, mv: Move) {
        self.board.place(mv.position, mv.mover);
        let outcome = self.outcome();
        self.state = if outcome.is_terminal() {
            TurnState::Finished(outcome)
        } else {
            match mv.mover {
                Mover::Human => TurnState::ComputerTurn,
                Mover::Computer => TurnState::HumanTurn,
            }
        };
        trace!(position = mv.position, mover = ?mv.mover, state = ?self.state, "Move applied");
    }
}
