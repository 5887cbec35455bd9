use serde::{Deserialize, Serialize};

use crate::countdown::CountdownSnapshot;
use crate::time::Timestamp;

/// Every state change the host reports produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TargetSet {
        event_name: String,
        target: Timestamp,
        at: Timestamp,
    },
    TargetCleared {
        at: Timestamp,
    },
    /// One rendered frame of a running countdown.
    Tick(CountdownSnapshot),
    CountdownFinished {
        event_name: String,
        target: Timestamp,
        at: Timestamp,
    },
    PomodoroStarted {
        duration_secs: u64,
        at: Timestamp,
    },
    PomodoroReset {
        at: Timestamp,
    },
    PomodoroCompleted {
        duration_secs: u64,
        at: Timestamp,
    },
}
