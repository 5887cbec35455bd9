use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{RemainingTime, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

/// Coarsest unit worth showing for the time left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DisplayUnit {
    /// Length of one unit in milliseconds.
    pub fn length_ms(self) -> u64 {
        match self {
            DisplayUnit::Days => MS_PER_DAY,
            DisplayUnit::Hours => MS_PER_HOUR,
            DisplayUnit::Minutes => MS_PER_MINUTE,
            DisplayUnit::Seconds => 1_000,
        }
    }

    /// Singular when `count == 1`.
    pub fn label(self, count: u64) -> &'static str {
        let (one, many) = match self {
            DisplayUnit::Days => ("Day", "Days"),
            DisplayUnit::Hours => ("Hour", "Hours"),
            DisplayUnit::Minutes => ("Minute", "Minutes"),
            DisplayUnit::Seconds => ("Second", "Seconds"),
        };
        if count == 1 {
            one
        } else {
            many
        }
    }

    /// Default host refresh cadence: fast enough for a smooth second gauge,
    /// once a second for everything coarser.
    pub fn refresh_interval(self) -> Duration {
        match self {
            DisplayUnit::Seconds => Duration::from_millis(100),
            _ => Duration::from_millis(1_000),
        }
    }
}

/// What the countdown view shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub unit: DisplayUnit,
    /// Whole units remaining.
    pub total_units: u64,
    /// Remainder in the next finer unit, used as a sub-label.
    pub current_unit: u64,
    /// Number of indicator gauges to draw.
    pub max_units: u64,
    pub label: String,
}

impl DisplayInfo {
    fn new(unit: DisplayUnit, total_units: u64, current_unit: u64, max_units: u64) -> Self {
        Self {
            unit,
            total_units,
            current_unit,
            max_units,
            label: unit.label(total_units).to_string(),
        }
    }
}

/// Pick the display unit for `remaining`.
///
/// Thresholds are strict: exactly 24h, 1h or 1min left falls through to the
/// next finer unit.
pub fn select_display_unit(remaining: &RemainingTime) -> DisplayInfo {
    let total = remaining.total_ms;

    if total > MS_PER_DAY {
        let days = total / MS_PER_DAY;
        return DisplayInfo::new(DisplayUnit::Days, days, remaining.hours, days);
    }
    if total > MS_PER_HOUR {
        let hours = total / MS_PER_HOUR;
        return DisplayInfo::new(DisplayUnit::Hours, hours, remaining.minutes, hours);
    }
    if total > MS_PER_MINUTE {
        let minutes = total / MS_PER_MINUTE;
        return DisplayInfo::new(DisplayUnit::Minutes, minutes, remaining.seconds, minutes);
    }
    DisplayInfo::new(DisplayUnit::Seconds, remaining.seconds, 0, 60)
}
