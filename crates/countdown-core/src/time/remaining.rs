use serde::{Deserialize, Serialize};

use super::{Timestamp, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Calendar-agnostic breakdown of the time left until a target.
///
/// `hours`, `minutes` and `seconds` are remainders within their containing
/// unit; `days` is the whole-day count. When `total_ms == 0` every field is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemainingTime {
    pub total_ms: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub fn from_total_ms(total_ms: u64) -> Self {
        if total_ms == 0 {
            return Self::default();
        }
        Self {
            total_ms,
            days: total_ms / MS_PER_DAY,
            hours: (total_ms / MS_PER_HOUR) % 24,
            minutes: (total_ms / MS_PER_MINUTE) % 60,
            seconds: (total_ms / MS_PER_SECOND) % 60,
        }
    }

    /// The target has been reached or passed.
    pub fn is_finished(&self) -> bool {
        self.total_ms == 0
    }
}

/// `max(0, target - now)` split into days, hours, minutes and seconds.
pub fn compute_remaining(now: Timestamp, target: Timestamp) -> RemainingTime {
    let total_ms = u64::try_from(target.millis_since(now)).unwrap_or(0);
    RemainingTime::from_total_ms(total_ms)
}
