//! Session host loop.
//!
//! A [`Driver`] is everything outside the simulation: it shows frames, paces
//! ticks and delivers input. [`run_session`] owns the per-tick protocol:
//! present, wait for the tick, fold input, step.

use anyhow::Result;

use crate::core::{GameSnapshot, GameState};
use crate::types::{Direction, EndReason, InputEvent};

/// Display/input/timing collaborator hosting a game.
pub trait Driver {
    /// Show the current state.
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Block until the next tick is due, appending input received meanwhile.
    fn wait_tick(&mut self, events: &mut Vec<InputEvent>) -> Result<()>;
}

/// How a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The driver delivered a quit signal
    Quit,
    /// The game reached a terminal step
    Over(EndReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub score: u32,
    pub steps: u32,
    pub end: SessionEnd,
}

/// Input of one tick reduced to what the game consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Latest steer event; earlier ones in the same tick are dropped
    pub heading: Option<Direction>,
    pub quit: bool,
}

impl TickInput {
    pub fn fold(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for event in events {
            match *event {
                InputEvent::Steer(d) => input.heading = Some(d),
                InputEvent::Quit => input.quit = true,
            }
        }
        input
    }
}

/// Run a game until it ends or the driver asks to quit.
pub fn run_session<D: Driver>(game: &mut GameState, driver: &mut D) -> Result<SessionReport> {
    let mut snap = GameSnapshot::default();
    let mut events = Vec::with_capacity(16);

    loop {
        game.snapshot_into(&mut snap);
        driver.present(&snap)?;

        events.clear();
        driver.wait_tick(&mut events)?;
        let input = TickInput::fold(&events);

        if input.quit {
            log::info!("session quit score={} steps={}", game.score(), game.steps());
            return Ok(SessionReport {
                score: game.score(),
                steps: game.steps(),
                end: SessionEnd::Quit,
            });
        }

        if let Some(heading) = input.heading {
            game.set_heading(heading);
        }

        let result = game.step();
        if let Some(reason) = result.end {
            game.snapshot_into(&mut snap);
            driver.present(&snap)?;
            return Ok(SessionReport {
                score: result.score,
                steps: game.steps(),
                end: SessionEnd::Over(reason),
            });
        }
    }
}
