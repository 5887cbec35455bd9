use serde::{Deserialize, Serialize};

use super::{DisplayUnit, Timestamp, MS_PER_MINUTE};

/// Remaining portion of the current sub-unit interval.
///
/// Always within `[0, 1]`: 1 means the interval just started, 0 means it has
/// elapsed. NaN collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    pub const EMPTY: Progress = Progress(0.0);
    pub const FULL: Progress = Progress(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::EMPTY;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }

    pub fn is_full(self) -> bool {
        self.0 >= 1.0
    }
}

/// How the gauge moves while the countdown is in its last minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondsProgress {
    /// Second hand of the wall clock: `1 - secondOfMinute(now) / 60`,
    /// independent of the target.
    #[default]
    WallClock,
    /// Fraction of the final minute still left on the countdown.
    Countdown,
}

/// Progress of the unit currently counting down.
///
/// Days, Hours and Minutes use `((target - now) mod unit) / unit`. Seconds
/// follow `seconds_mode`. Returns 0 once `target <= now`.
pub fn compute_sub_unit_progress(
    now: Timestamp,
    target: Timestamp,
    unit: DisplayUnit,
    seconds_mode: SecondsProgress,
) -> Progress {
    let Ok(remaining_ms) = u64::try_from(target.millis_since(now)) else {
        return Progress::EMPTY;
    };
    if remaining_ms == 0 {
        return Progress::EMPTY;
    }

    match unit {
        DisplayUnit::Days | DisplayUnit::Hours | DisplayUnit::Minutes => {
            let length = unit.length_ms();
            Progress::new((remaining_ms % length) as f64 / length as f64)
        }
        DisplayUnit::Seconds => match seconds_mode {
            SecondsProgress::WallClock => {
                Progress::new(1.0 - f64::from(now.second_of_minute()) / 60.0)
            }
            SecondsProgress::Countdown => {
                Progress::new(remaining_ms.min(MS_PER_MINUTE) as f64 / MS_PER_MINUTE as f64)
            }
        },
    }
}
