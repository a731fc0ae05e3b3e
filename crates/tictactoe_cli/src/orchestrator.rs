//! Game loop between the seated players, the session and the terminal.

use crate::input::InputEvent;
use crate::players::{ComputerPlayer, HumanPlayer, Player, SharedInput};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tictactoe_core::{Mode, MoveError, Player as Mark, Position, Session};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};

/// Asks whoever holds the next seat for an action and applies it.
pub struct Orchestrator<W: Write> {
    session: Session,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    input: SharedInput,
    delay: Duration,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator, seating players for the session's mode.
    ///
    /// Human seats read from `input`; the computer waits `delay` per move.
    pub fn new(
        session: Session,
        delay: Duration,
        input: mpsc::UnboundedReceiver<InputEvent>,
        out: W,
    ) -> Self {
        let input: SharedInput = Arc::new(Mutex::new(input));
        let mode = session.mode();
        Self {
            player_x: seat(mode, Mark::X, &input, delay),
            player_o: seat(mode, Mark::O, &input, delay),
            session,
            input,
            delay,
            out,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until a player quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            mode = ?self.session.mode(),
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game loop"
        );
        self.render()?;

        loop {
            let mark = self.seat_to_ask();
            let game = self.session.game().clone();
            let player = self.player_mut(mark);
            let event = player.get_move(&game).await?;
            let name = player.name().to_string();

            match event {
                InputEvent::Quit => {
                    info!(player = %name, "Player quit");
                    return Ok(());
                }
                InputEvent::Reset => {
                    self.session.reset();
                    self.render()?;
                }
                InputEvent::SwitchMode => {
                    let mode = next_mode(self.session.mode());
                    self.session.set_mode(mode);
                    self.reseat();
                    writeln!(self.out, "{}", mode_label(mode))?;
                    self.render()?;
                }
                InputEvent::Cell(index) => match self.session.submit(index) {
                    Ok(_) => {
                        if let Some(pos) = Position::from_index(index) {
                            writeln!(self.out, "{} plays {}", name, pos)?;
                        }
                        self.render()?;
                    }
                    Err(e) => {
                        warn!(error = %e, index, player = %name, "Move rejected");
                        writeln!(self.out, "{}", describe(&e))?;
                    }
                },
                InputEvent::Unrecognized(line) => {
                    writeln!(
                        self.out,
                        "Type 1-9 to play, r to reset, m to switch mode, q to quit (got {:?})",
                        line
                    )?;
                }
            }
        }
    }

    /// The next mover while the game runs; a human seat once it is over.
    fn seat_to_ask(&self) -> Mark {
        let game = self.session.game();
        if game.is_active() {
            return game.to_move();
        }
        match self.session.mode().computer() {
            Some(computer) => computer.opponent(),
            None => game.to_move(),
        }
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Box<dyn Player> {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }

    fn reseat(&mut self) {
        let mode = self.session.mode();
        self.player_x = seat(mode, Mark::X, &self.input, self.delay);
        self.player_o = seat(mode, Mark::O, &self.input, self.delay);
        debug!(x = self.player_x.name(), o = self.player_o.name(), "Players seated");
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}\n", self.session.game().board().display())?;
        writeln!(self.out, "{}", self.session.message())?;
        if !self.session.game().is_active() {
            writeln!(self.out, "Press r to play again or q to quit")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn seat(mode: Mode, mark: Mark, input: &SharedInput, delay: Duration) -> Box<dyn Player> {
    if mode.computer() == Some(mark) {
        Box::new(ComputerPlayer::new(format!("Computer ({})", mark), delay))
    } else {
        Box::new(HumanPlayer::new(format!("Player {}", mark), input.clone()))
    }
}

/// Two players, then the computer as O, then the computer as X.
fn next_mode(mode: Mode) -> Mode {
    match mode {
        Mode::TwoPlayer => Mode::VersusComputer { computer: Mark::O },
        Mode::VersusComputer { computer: Mark::O } => Mode::VersusComputer { computer: Mark::X },
        Mode::VersusComputer { computer: Mark::X } => Mode::TwoPlayer,
    }
}

fn mode_label(mode: Mode) -> String {
    match mode {
        Mode::TwoPlayer => "Two players".to_string(),
        Mode::VersusComputer { computer } => {
            format!("Playing against the computer ({})", computer)
        }
    }
}

/// Rejection text in the 1-9 numbering shown on the board.
fn describe(err: &MoveError) -> String {
    match err {
        MoveError::InvalidIndex(index) => {
            format!("There is no cell {} (type 1-9)", index + 1)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::GameStatus;

    async fn run_script(mode: Mode, events: &[InputEvent]) -> (Session, String) {
        let (tx, rx) = mpsc::unbounded_channel();
        for event in events {
            tx.send(event.clone()).unwrap();
        }
        drop(tx);

        let mut orchestrator =
            Orchestrator::new(Session::new(mode), Duration::ZERO, rx, Vec::new());
        orchestrator.run().await.expect("game loop");
        let session = orchestrator.session().clone();
        let output = String::from_utf8(orchestrator.into_output()).unwrap();
        (session, output)
    }

    #[tokio::test]
    async fn test_two_player_win() {
        let events = [0, 3, 1, 4, 2].map(InputEvent::Cell);
        let (session, output) = run_script(Mode::TwoPlayer, &events).await;

        assert_eq!(session.game().status(), &GameStatus::Won(Mark::X));
        assert!(output.contains("Player O plays Middle-left"));
        assert!(output.contains("O's turn"));
        assert!(output.contains("X wins!"));
        assert!(output.contains("Press r to play again"));
    }

    #[tokio::test]
    async fn test_rejections_are_reported() {
        let events = [
            InputEvent::Cell(4),
            InputEvent::Cell(4),
            InputEvent::Cell(9),
            InputEvent::Unrecognized("hello".into()),
        ];
        let (session, output) = run_script(Mode::TwoPlayer, &events).await;

        assert_eq!(session.game().to_move(), Mark::O);
        assert!(output.contains("Square Center is already occupied"));
        assert!(output.contains("There is no cell 10 (type 1-9)"));
        assert!(!output.contains("0-8"));
        assert!(output.contains("got \"hello\""));
    }

    #[tokio::test]
    async fn test_computer_answers() {
        let (session, output) =
            run_script(Mode::default(), &[InputEvent::Cell(4)]).await;

        assert_eq!(session.game().board().notation(), "O...X....");
        assert!(output.contains("Player X plays Center"));
        assert!(output.contains("Computer (O) plays Top-left"));
        assert!(output.contains("X's turn"));
    }

    #[tokio::test]
    async fn test_computer_opens_as_x() {
        let (session, output) =
            run_script(Mode::VersusComputer { computer: Mark::X }, &[]).await;

        assert_eq!(session.game().board().notation(), "X........");
        assert!(output.contains("Computer (X) plays Top-left"));
    }

    #[tokio::test]
    async fn test_human_seat_restarts_after_computer_wins() {
        // The human takes the first free square every time and loses in the left column.
        let events = [
            InputEvent::Cell(1),
            InputEvent::Cell(2),
            InputEvent::Cell(5),
            InputEvent::Reset,
        ];
        let (session, output) =
            run_script(Mode::VersusComputer { computer: Mark::X }, &events).await;

        assert!(output.contains("Computer (X) plays Bottom-left"));
        assert!(output.contains("X wins!"));
        assert_eq!(session.game().board().notation(), "X........");
    }

    #[tokio::test]
    async fn test_reset_and_quit() {
        let events = [
            InputEvent::Cell(0),
            InputEvent::Reset,
            InputEvent::Quit,
            InputEvent::Cell(1),
        ];
        let (session, _) = run_script(Mode::TwoPlayer, &events).await;

        assert_eq!(session.game().board().notation(), ".........");
    }

    #[tokio::test]
    async fn test_switch_mode_restarts_with_computer() {
        let events = [InputEvent::Cell(4), InputEvent::SwitchMode];
        let (session, output) = run_script(Mode::TwoPlayer, &events).await;

        assert_eq!(session.mode(), Mode::VersusComputer { computer: Mark::O });
        assert_eq!(session.game().board().notation(), ".........");
        assert!(output.contains("Playing against the computer (O)"));
    }

    #[tokio::test]
    async fn test_switch_mode_twice_seats_computer_as_x() {
        let events = [InputEvent::SwitchMode, InputEvent::SwitchMode];
        let (session, output) = run_script(Mode::TwoPlayer, &events).await;

        assert_eq!(session.mode(), Mode::VersusComputer { computer: Mark::X });
        assert_eq!(session.game().board().notation(), "X........");
        assert!(output.contains("Computer (X) plays Top-left"));
    }

    #[test]
    fn test_mode_cycle_returns_to_start() {
        let start = Mode::TwoPlayer;
        assert_eq!(next_mode(next_mode(next_mode(start))), start);
    }
}
