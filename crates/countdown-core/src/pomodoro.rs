//! Fixed-length focus session, the browser-popup flavor of the timer.
//!
//! Only the start instant is persisted; remaining time is always recomputed
//! from the clock, so a session survives the host being closed and reopened.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::events::Event;
use crate::render::{compute_arc, ArcConvention, ArcSpec};
use crate::time::{Progress, Timestamp};

pub const DEFAULT_DURATION: Duration = Duration::from_secs(25 * 60);

/// Persisted session state, `{"startTime": <epoch ms> | null, "isRunning": bool}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PomodoroState {
    #[serde(rename = "startTime", default, with = "epoch_millis")]
    pub start_time: Option<Timestamp>,
    #[serde(rename = "isRunning")]
    pub is_running: bool,
}

mod epoch_millis {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error> {
        value.map(Timestamp::as_millis).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.map(Timestamp::from_millis))
    }
}

/// Frame data for the single big gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroSnapshot {
    pub is_running: bool,
    pub remaining_secs: u64,
    /// `MM:SS`
    pub text: String,
    pub progress: Progress,
    pub arc: ArcSpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    state: PomodoroState,
    duration_secs: u64,
}

impl Pomodoro {
    pub fn new(duration: Duration) -> Self {
        Self::from_state(PomodoroState::default(), duration)
    }

    /// Resume from persisted state. A running session whose start time is
    /// missing is treated as idle.
    pub fn from_state(state: PomodoroState, duration: Duration) -> Self {
        let state = if state.is_running && state.start_time.is_none() {
            PomodoroState::default()
        } else {
            state
        };
        Self {
            state,
            duration_secs: duration.as_secs(),
        }
    }

    pub fn state(&self) -> PomodoroState {
        self.state
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn is_running(&self, now: Timestamp) -> bool {
        self.state.is_running && self.remaining_secs(now) > 0
    }

    /// Whole seconds left; the full duration while idle.
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        match (self.state.is_running, self.state.start_time) {
            (true, Some(start)) => {
                let elapsed = u64::try_from(now.millis_since(start) / 1_000).unwrap_or(0);
                self.duration_secs.saturating_sub(elapsed)
            }
            _ => self.duration_secs,
        }
    }

    /// 1 for a fresh or idle session, 0 when time is up.
    pub fn progress(&self, now: Timestamp) -> Progress {
        if self.duration_secs == 0 {
            return Progress::EMPTY;
        }
        Progress::new(self.remaining_secs(now) as f64 / self.duration_secs as f64)
    }

    pub fn start(&mut self, now: Timestamp) -> Event {
        self.state = PomodoroState {
            start_time: Some(now),
            is_running: true,
        };
        Event::PomodoroStarted {
            duration_secs: self.duration_secs,
            at: now,
        }
    }

    pub fn reset(&mut self, now: Timestamp) -> Event {
        self.state = PomodoroState::default();
        Event::PomodoroReset { at: now }
    }

    /// Call periodically. Returns `Some(Event::PomodoroCompleted)` once,
    /// when the session runs out, and returns the session to idle.
    pub fn tick(&mut self, now: Timestamp) -> Option<Event> {
        if self.state.is_running && self.remaining_secs(now) == 0 {
            self.state = PomodoroState::default();
            return Some(Event::PomodoroCompleted {
                duration_secs: self.duration_secs,
                at: now,
            });
        }
        None
    }

    pub fn snapshot(&self, now: Timestamp, convention: ArcConvention) -> PomodoroSnapshot {
        let remaining_secs = self.remaining_secs(now);
        let progress = self.progress(now);
        PomodoroSnapshot {
            is_running: self.is_running(now),
            remaining_secs,
            text: format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60),
            progress,
            arc: compute_arc(progress, convention),
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
