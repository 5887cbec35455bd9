use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::time::Progress;

/// 12 o'clock on a canvas whose y axis points down.
pub const TOP: f64 = -FRAC_PI_2;

// Absorbs rounding in `(TOP + 2π) - TOP`.
const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Which edge of the wedge moves as time elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArcConvention {
    /// The drawn wedge is the remaining fraction, rotated so it always ends
    /// at 12 o'clock: `start = TOP + (1-p)·2π`, `end = start + p·2π`.
    ShrinkingPie,
    /// End edge pinned at `TOP + 2π`, start edge sweeping clockwise:
    /// `start = TOP + (1-p)·2π`.
    #[default]
    EmptyingClockwise,
    /// Start edge pinned at 12 o'clock, wedge grows clockwise with progress:
    /// `end = TOP + p·2π`.
    FillingClockwise,
}

/// Arc to fill as a pie wedge, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

impl ArcSpec {
    /// Swept angle, `0..=2π`.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Nothing to draw; the host should skip this gauge's wedge.
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= TAU - FULL_CIRCLE_EPSILON
    }
}

/// Wedge geometry for `progress` under `convention`.
///
/// Progress 0 yields a zero-length arc, progress 1 the complete disk, for
/// every convention.
pub fn compute_arc(progress: Progress, convention: ArcConvention) -> ArcSpec {
    let p = progress.value();
    let (start_angle, end_angle) = match convention {
        ArcConvention::ShrinkingPie => {
            let swept = (1.0 - p) * TAU;
            let start = TOP + swept;
            (start, start + p * TAU)
        }
        ArcConvention::EmptyingClockwise => (TOP + (1.0 - p) * TAU, TOP + TAU),
        ArcConvention::FillingClockwise => (TOP, TOP + p * TAU),
    };
    ArcSpec {
        start_angle,
        end_angle,
        clockwise: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const ALL: [ArcConvention; 3] = [
        ArcConvention::ShrinkingPie,
        ArcConvention::EmptyingClockwise,
        ArcConvention::FillingClockwise,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn quarter_left_emptying_clockwise() {
        let arc = compute_arc(Progress::new(0.25), ArcConvention::EmptyingClockwise);
        assert!(close(arc.start_angle, -PI / 2.0 + 1.5 * PI));
        assert!(close(arc.end_angle, -PI / 2.0 + 2.0 * PI));
        assert!(arc.clockwise);
    }

    #[test]
    fn quarter_left_shrinking_pie_covers_last_quarter() {
        let arc = compute_arc(Progress::new(0.25), ArcConvention::ShrinkingPie);
        assert!(close(arc.start_angle, TOP + 1.5 * PI));
        assert!(close(arc.sweep(), PI / 2.0));
    }

    #[test]
    fn quarter_filling_clockwise_starts_at_top() {
        let arc = compute_arc(Progress::new(0.25), ArcConvention::FillingClockwise);
        assert!(close(arc.start_angle, TOP));
        assert!(close(arc.end_angle, 0.0));
    }

    #[test]
    fn empty_progress_draws_nothing() {
        for convention in ALL {
            assert!(compute_arc(Progress::EMPTY, convention).is_empty(), "{convention:?}");
        }
    }

    #[test]
    fn full_progress_draws_the_disk() {
        for convention in ALL {
            let arc = compute_arc(Progress::FULL, convention);
            assert!(arc.is_full_circle(), "{convention:?}");
            assert!(close(arc.start_angle, TOP), "{convention:?}");
        }
    }

    #[test]
    fn convention_serializes_kebab_case() {
        let json = serde_json::to_string(&ArcConvention::EmptyingClockwise).unwrap();
        assert_eq!(json, "\"emptying-clockwise\"");
    }
}
