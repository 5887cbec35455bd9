use clap::Subcommand;
use countdown_core::error::Result;
use countdown_core::storage::{load_pomodoro, save_pomodoro, StorageBackend};
use countdown_core::{Clock, Event, Pomodoro, SystemClock};

use crate::common;

#[derive(Subcommand)]
pub enum PomodoroAction {
    /// Start a fresh session
    Start,
    /// Stop and return to idle
    Reset,
    /// Print the session frame as JSON
    Status,
}

pub fn run(action: PomodoroAction, backend: Option<StorageBackend>) -> Result<()> {
    let (config, mut store) = common::open(backend)?;
    let now = SystemClock.now();
    let mut pomodoro = Pomodoro::from_state(load_pomodoro(&store), config.pomodoro.duration());

    // A session that ran out while nobody was watching completes first.
    // Stdout carries exactly one JSON document, so this goes to the log.
    if let Some(Event::PomodoroCompleted { duration_secs, .. }) = pomodoro.tick(now) {
        tracing::info!(duration_secs, "stale pomodoro session completed");
    }

    match action {
        PomodoroAction::Start => {
            common::print_json(&pomodoro.start(now))?;
        }
        PomodoroAction::Reset => {
            common::print_json(&pomodoro.reset(now))?;
        }
        PomodoroAction::Status => {
            common::print_json(&pomodoro.snapshot(now, config.display.arc_convention))?;
        }
    }

    save_pomodoro(&mut store, &pomodoro.state())?;
    Ok(())
}
