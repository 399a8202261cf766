use crate::{TurnState, MAX_SIZE};

/// The error type for [`Board::new()`](crate::Board::new), i.e. for a board side outside of `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDimension {
    pub size: usize,
}

impl std::error::Error for InvalidDimension {}

impl std::fmt::Display for InvalidDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid dimensions. Must be between 1 and {}, got {}",
            MAX_SIZE, self.size
        )
    }
}

/// A move or turn was requested while the session was in a different state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfTurn {
    pub state: TurnState,
}

impl std::error::Error for OutOfTurn {}

impl std::fmt::Display for OutOfTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state {
            TurnState::HumanTurn => write!(f, "It is the human's turn"),
            TurnState::ComputerTurn => write!(f, "It is the computer's turn"),
            TurnState::Finished(outcome) => write!(f, "The game is already over ({})", outcome),
        }
    }
}

/// The error type for submitting a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfRange { position: usize, cell_count: usize },
    Occupied { position: usize },
    OutOfTurn(OutOfTurn),
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::OutOfTurn(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfRange {
                position,
                cell_count,
            } => write!(
                f,
                "Spot '{}' does not exist, the board has {} spots",
                position, cell_count
            ),
            IllegalMove::Occupied { position } => write!(f, "Spot '{}' is taken.", position),
            IllegalMove::OutOfTurn(_) => write!(f, "Tried to move out of turn"),
        }
    }
}

impl From<OutOfTurn> for IllegalMove {
    fn from(err: OutOfTurn) -> Self {
        IllegalMove::OutOfTurn(err)
    }
}

/// The bot was asked for a move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMovesAvailable;

impl std::error::Error for NoMovesAvailable {}

impl std::fmt::Display for NoMovesAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No empty spot is left on the board")
    }
}
