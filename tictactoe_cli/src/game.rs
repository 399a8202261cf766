use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tictactoe::{GameSession, Outcome, TurnState};
use tracing::{debug, info};

use crate::input::{Command, Replay};
use crate::terminal::Terminal;

/// How a single session was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    Restart,
    Finished(Outcome),
}

/// Plays one session until it is finished or the player asks to restart or exit.
///
/// Returns an error only on I/O failure, not when the player types something
/// invalid.
pub fn play_session<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    session: &mut GameSession,
    rng: &mut StdRng,
) -> anyhow::Result<SessionEnd> {
    loop {
        match session.state() {
            TurnState::HumanTurn => {
                terminal.show_board(session.board())?;
                match terminal.read_command(session.board().cell_count())? {
                    Command::Exit => return Ok(SessionEnd::Exit),
                    Command::Restart => return Ok(SessionEnd::Restart),
                    Command::Play(position) => {
                        if let Err(err) = session.submit_human_move(position) {
                            debug!(position, %err, "Illegal move");
                            terminal.show_message(err)?;
                        }
                    }
                }
            }
            TurnState::ComputerTurn => {
                let mv = session.advance_computer_turn(rng)?;
                debug!(position = mv.position, "Computer played");
            }
            TurnState::Finished(outcome) => {
                terminal.show_board(session.board())?;
                terminal.show_outcome(outcome)?;
                return Ok(SessionEnd::Finished(outcome));
            }
        }
    }
}

/// Keeps starting new sessions until the player is done.
pub fn run<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    size: usize,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut game_idx = 0;
    loop {
        let mut session = GameSession::begin(size)?;
        match play_session(terminal, &mut session, rng)? {
            SessionEnd::Exit => {
                info!(game_idx, "Exit requested");
                break;
            }
            SessionEnd::Restart => {
                info!(game_idx, "Restart requested");
            }
            SessionEnd::Finished(outcome) => {
                info!(game_idx, %outcome, "Game over");
                if terminal.ask_replay()? == Replay::StopPlaying {
                    break;
                }
            }
        }
        game_idx += 1;
    }
    Ok(())
}
