#[derive(Debug, Clone, Copy, PartialEq)]
/// Why a line typed by the player is not a command.
pub enum ParseError {
    /// A number followed by other characters.
    InvalidInput,
    TooLarge,
    NotAnInteger,
    NoSuchSpot(f64),
    /// Neither a number nor one of the known words.
    InvalidString,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidInput => write!(f, "Invalid input."),
            ParseError::TooLarge => write!(f, "Input is too large."),
            ParseError::NotAnInteger => write!(f, "Only integers are allowed."),
            ParseError::NoSuchSpot(value) => write!(f, "Spot '{:.0}' does not exist.", value),
            ParseError::InvalidString => write!(f, "Invalid string input."),
        }
    }
}
