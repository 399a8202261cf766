use std::fmt::Display;
use std::io::{BufRead, Write};

use tictactoe::{visualize_board, Board, Mover, Outcome};
use tracing::{debug, trace};

use crate::input::{parse_command, parse_replay_answer, Command, Replay};

/// Line-based interaction with the human player.
///
/// End of input counts as a request to quit.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn show_board(&mut self, board: &Board) -> anyhow::Result<()> {
        write!(self.output, "{}", visualize_board(board))?;
        self.output.flush()?;
        Ok(())
    }

    pub fn show_outcome(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        match outcome {
            Outcome::Win(Mover::Computer) => self.show_message("You lose:("),
            Outcome::Win(Mover::Human) => self.show_message("You win!"),
            Outcome::Tie => self.show_message("It's a tie!"),
            Outcome::InProgress => Ok(()),
        }
    }

    pub fn show_message(&mut self, message: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts until the player types a position on the board, "restart" or "exit".
    ///
    /// Whether the position is still free is up to the caller.
    pub fn read_command(&mut self, cell_count: usize) -> anyhow::Result<Command> {
        loop {
            self.show_message("Enter a number that exists on the board, or <restart>, or <exit>:")?;
            if !self.read_line()? {
                return Ok(Command::Exit);
            }
            match parse_command(&self.buf, cell_count) {
                Ok(command) => return Ok(command),
                Err(err) => {
                    debug!(input = self.buf.trim_end(), %err, "Rejected input");
                    self.show_message(err)?;
                }
            }
        }
    }

    pub fn ask_replay(&mut self) -> anyhow::Result<Replay> {
        self.show_message("Would you like to play again? (y/n)")?;
        loop {
            if !self.read_line()? {
                return Ok(Replay::StopPlaying);
            }
            match parse_replay_answer(&self.buf) {
                Some(answer) => return Ok(answer),
                None => self.show_message("Type either 'y' or 'n' to continue.")?,
            }
        }
    }

    // Returns false on end of input.
    fn read_line(&mut self) -> anyhow::Result<bool> {
        self.buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        trace!(line = self.buf.trim_end(), "Read line");
        Ok(num_bytes_read > 0)
    }
}
