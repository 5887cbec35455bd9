//! Countdown time model.
//!
//! Everything here is a pure function of `(now, target)`: the remaining-time
//! breakdown, the display unit chosen for it, and the progress of the unit
//! currently counting down. Nothing in this module holds state between ticks.

mod clock;
mod format;
mod progress;
mod remaining;
mod timestamp;
mod unit;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_progress_tooltip, format_time_display};
pub use progress::{compute_sub_unit_progress, Progress, SecondsProgress};
pub use remaining::{compute_remaining, RemainingTime};
pub use timestamp::{parse_target, Timestamp};
pub use unit::{select_display_unit, DisplayInfo, DisplayUnit};

pub(crate) const MS_PER_SECOND: u64 = 1_000;
pub(crate) const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
