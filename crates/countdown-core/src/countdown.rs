//! A named countdown and the per-tick snapshot the host renders.
//!
//! ## Usage
//!
//! ```ignore
//! let data = CountdownData::new("Launch", target, clock.now())?;
//! let countdown = Countdown::new(data, DisplaySettings::default());
//! // On every host tick:
//! let snap = countdown.snapshot(clock.now());
//! for gauge in snap.indicators() { /* paint */ }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::render::{compute_arc, indicator_set, ArcConvention, ArcSpec, Indicators};
use crate::time::{
    compute_remaining, compute_sub_unit_progress, format_progress_tooltip, format_time_display,
    select_display_unit, DisplayInfo, Progress, RemainingTime, SecondsProgress, Timestamp,
};

/// Event label and target instant, the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownData {
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(rename = "targetDate")]
    pub target: Timestamp,
}

impl CountdownData {
    /// Validate user input: a non-blank name and a target strictly after `now`.
    pub fn new(
        event_name: &str,
        target: Timestamp,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let event_name = event_name.trim();
        if event_name.is_empty() {
            return Err(ValidationError::EmptyEventName);
        }
        if target <= now {
            return Err(ValidationError::TargetNotInFuture {
                target: target.to_iso_string(),
                now: now.to_iso_string(),
            });
        }
        Ok(Self {
            event_name: event_name.to_string(),
            target,
        })
    }
}

/// Rendering choices that are configuration, not behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub arc_convention: ArcConvention,
    #[serde(default)]
    pub seconds_progress: SecondsProgress,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub event_name: String,
    pub target: Timestamp,
    pub now: Timestamp,
    pub remaining: RemainingTime,
    pub display: DisplayInfo,
    /// Progress of the live (first) gauge.
    pub progress: Progress,
    pub arc: ArcSpec,
    /// Main counter text, see [`format_time_display`].
    pub text: String,
    pub tooltip: String,
    pub finished: bool,
}

impl CountdownSnapshot {
    /// Gauges to draw, recomputed from this snapshot on every call.
    pub fn indicators(&self) -> Indicators {
        indicator_set(self.display.max_units, self.progress)
    }
}

/// An active countdown. Holds no per-tick state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    data: CountdownData,
    settings: DisplaySettings,
}

impl Countdown {
    pub fn new(data: CountdownData, settings: DisplaySettings) -> Self {
        Self { data, settings }
    }

    pub fn data(&self) -> &CountdownData {
        &self.data
    }

    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    pub fn snapshot(&self, now: Timestamp) -> CountdownSnapshot {
        let target = self.data.target;
        let remaining = compute_remaining(now, target);
        let display = select_display_unit(&remaining);
        let progress =
            compute_sub_unit_progress(now, target, display.unit, self.settings.seconds_progress);
        let arc = compute_arc(progress, self.settings.arc_convention);

        CountdownSnapshot {
            event_name: self.data.event_name.clone(),
            target,
            now,
            text: format_time_display(display.total_units, display.current_unit, display.unit),
            tooltip: format_progress_tooltip(progress, display.unit),
            finished: remaining.is_finished(),
            remaining,
            display,
            progress,
            arc,
        }
    }
}
