//! # Countdown Core Library
//!
//! Time model and gauge geometry for a countdown-to-date timer. The host
//! (the `countdown` CLI, or any other front end) owns the clock, the target
//! and the refresh loop; this crate turns `(now, target)` into what to draw.
//!
//! ## Architecture
//!
//! - **Time model**: remaining-time breakdown, display unit selection and
//!   progress of the live unit, all pure functions
//! - **Renderer**: arc angles for a depleting clockwise gauge and the lazy
//!   row of indicator gauges
//! - **Storage**: one [`KeyValueStore`] capability with file, SQLite, memory
//!   and URL-query backends, plus TOML configuration
//! - **Ticker**: caller-owned, cancellable periodic refresh
//!
//! ## Key Components
//!
//! - [`Countdown`]: target plus display settings, produces [`CountdownSnapshot`]
//! - [`Pomodoro`]: fixed-length focus session
//! - [`Ticker`]: periodic snapshot task
//! - [`Config`]: application configuration management

pub mod countdown;
pub mod error;
pub mod events;
pub mod pomodoro;
pub mod render;
pub mod storage;
pub mod ticker;
pub mod time;

pub use countdown::{Countdown, CountdownData, CountdownSnapshot, DisplaySettings};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use pomodoro::{Pomodoro, PomodoroSnapshot, PomodoroState};
pub use render::{compute_arc, indicator_set, ArcConvention, ArcSpec, Indicator, Indicators};
pub use storage::{Config, KeyValueStore};
pub use ticker::Ticker;
pub use time::{
    compute_remaining, compute_sub_unit_progress, parse_target, select_display_unit, Clock,
    DisplayInfo, DisplayUnit, ManualClock, Progress, RemainingTime, SecondsProgress, SystemClock,
    Timestamp,
};
