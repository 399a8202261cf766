use crate::ParseError;

/// What the player asked for at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Exit,
    Restart,
}

/// The answer to "Would you like to play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    PlayAgain,
    StopPlaying,
}

/// Parses one line typed at the move prompt.
///
/// A number must be the only thing on the line. Spaces inside the words
/// "exit" and "restart" are ignored.
pub fn parse_command(text: &str, cell_count: usize) -> Result<Command, ParseError> {
    let line = text.trim();
    let (head, rest) = line.split_at(line.find(char::is_whitespace).unwrap_or(line.len()));

    if let Ok(value) = head.parse::<f64>() {
        if !rest.trim().is_empty() {
            return Err(ParseError::InvalidInput);
        }
        return parse_position(value, cell_count).map(Command::Play);
    }
    if starts_with_number(head) {
        return Err(ParseError::InvalidInput);
    }
    let word: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    match word.as_str() {
        "exit" => Ok(Command::Exit),
        "restart" => Ok(Command::Restart),
        _ => Err(ParseError::InvalidString),
    }
}

/// `None` if the answer was neither "y" nor "n".
pub fn parse_replay_answer(text: &str) -> Option<Replay> {
    match text.split_whitespace().next() {
        Some("y") => Some(Replay::PlayAgain),
        Some("n") => Some(Replay::StopPlaying),
        _ => None,
    }
}

fn parse_position(value: f64, cell_count: usize) -> Result<usize, ParseError> {
    let max = cell_count as f64;
    if value.is_nan() || value.abs() > max {
        Err(ParseError::TooLarge)
    } else if (value.round() - value).abs() > 1e-5 {
        Err(ParseError::NotAnInteger)
    } else if value < 0.0 || value > max - 1.0 {
        Err(ParseError::NoSuchSpot(value))
    } else {
        Ok(value.trunc() as usize)
    }
}

fn starts_with_number(token: &str) -> bool {
    token
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(parse_command("0\n", 9), Ok(Command::Play(0)));
        assert_eq!(parse_command("  8 ", 9), Ok(Command::Play(8)));
        assert_eq!(parse_command("4.0", 9), Ok(Command::Play(4)));
        assert_eq!(parse_command("80", 81), Ok(Command::Play(80)));
        // Almost-integers are truncated
        assert_eq!(parse_command("0.9999999", 9), Ok(Command::Play(0)));
        assert_eq!(parse_command("3.000001", 9), Ok(Command::Play(3)));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_command("exit\n", 9), Ok(Command::Exit));
        assert_eq!(parse_command("restart", 9), Ok(Command::Restart));
        assert_eq!(parse_command("Exit", 9), Err(ParseError::InvalidString));
        assert_eq!(parse_command(" re start \n", 9), Ok(Command::Restart));
    }

    #[test]
    fn rejected_numbers() {
        assert_eq!(parse_command("10", 9), Err(ParseError::TooLarge));
        assert_eq!(parse_command("-10", 9), Err(ParseError::TooLarge));
        assert_eq!(parse_command("1e9", 9), Err(ParseError::TooLarge));
        assert_eq!(parse_command("2.5", 9), Err(ParseError::NotAnInteger));
        assert_eq!(parse_command("9", 9), Err(ParseError::NoSuchSpot(9.0)));
        assert_eq!(parse_command("-1", 9), Err(ParseError::NoSuchSpot(-1.0)));
    }

    #[test]
    fn rejected_words() {
        assert_eq!(parse_command("1a", 9), Err(ParseError::InvalidInput));
        assert_eq!(parse_command("-3x", 9), Err(ParseError::InvalidInput));
        // Nothing may follow a number, not even after a space
        assert_eq!(parse_command("1 2", 81), Err(ParseError::InvalidInput));
        assert_eq!(parse_command("1\t2", 81), Err(ParseError::InvalidInput));
        assert_eq!(parse_command("4 exit", 9), Err(ParseError::InvalidInput));
        assert_eq!(parse_command("abc", 9), Err(ParseError::InvalidString));
        assert_eq!(parse_command("", 9), Err(ParseError::InvalidString));
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseError::NoSuchSpot(-1.0).to_string(), "Spot '-1' does not exist.");
        assert_eq!(ParseError::TooLarge.to_string(), "Input is too large.");
    }

    #[test]
    fn replay_answers() {
        assert_eq!(parse_replay_answer("y\n"), Some(Replay::PlayAgain));
        assert_eq!(parse_replay_answer("n"), Some(Replay::StopPlaying));
        assert_eq!(parse_replay_answer("yes"), None);
        assert_eq!(parse_replay_answer(""), None);
    }
}
