use std::io::{self, Write};
use std::time::Duration;

use log::info;

use crate::config::Config;
use crate::finder::MissingNumberFinder;
use crate::game::Game;
use crate::input::InputHandler;
use crate::output::OutputHandler;
use crate::prompt::{Reply, confirm};
use crate::{Scanner, Writer};

pub const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// What happened over a whole session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub rounds: usize,
    /// Rounds that ended with a computed result rather than an abort.
    pub solved: usize,
}

/// Plays rounds until the player answers `n` to the play-again prompt (or
/// input ends). `sleep` paces the closing animation.
pub fn run<F, W>(
    finder: &F,
    config: &Config,
    scanner: &mut Scanner,
    out: &mut Writer<W>,
    sleep: impl FnMut(Duration),
) -> io::Result<Session>
where
    F: MissingNumberFinder,
    W: Write,
{
    let input = InputHandler;
    let output = OutputHandler;
    let mut session = Session::default();

    loop {
        let game = Game::new(finder, &input, &output);
        session.rounds += 1;
        info!("starting round {}", session.rounds);
        if game.run(scanner, out)?.is_some() {
            session.solved += 1;
        }

        match confirm(PLAY_AGAIN_PROMPT, scanner, out)? {
            Reply::Yes => continue,
            Reply::No => {
                info!("player finished after {} rounds", session.rounds);
                output.farewell(config.closing.as_ref(), out, sleep)?;
                return Ok(session);
            }
            Reply::Closed => {
                info!("input closed after {} rounds", session.rounds);
                return Ok(session);
            }
        }
    }
}
