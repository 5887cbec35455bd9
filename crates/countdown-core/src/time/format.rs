//! Text shown alongside the gauges.

use super::{DisplayUnit, Progress};

/// Main counter text: `"05"` for days, `"TT:CC"` for everything finer.
pub fn format_time_display(total_units: u64, current_unit: u64, unit: DisplayUnit) -> String {
    match unit {
        DisplayUnit::Days => format!("{total_units:02}"),
        _ => format!("{total_units:02}:{current_unit:02}"),
    }
}

/// Tooltip for the live gauge, e.g. `"4h 33min 5s"`.
///
/// Converts the gauge's progress back into the time it stands for within
/// one unit. Zero parts are dropped; an all-zero result reads `"0s"`.
pub fn format_progress_tooltip(progress: Progress, unit: DisplayUnit) -> String {
    let unit_secs = match unit {
        DisplayUnit::Days => 24.0 * 60.0 * 60.0,
        DisplayUnit::Hours => 60.0 * 60.0,
        DisplayUnit::Minutes | DisplayUnit::Seconds => 60.0,
    };
    let total_secs = (progress.value() * unit_secs).floor() as u64;

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}min"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_show_only_the_total() {
        assert_eq!(format_time_display(5, 13, DisplayUnit::Days), "05");
        assert_eq!(format_time_display(120, 0, DisplayUnit::Days), "120");
    }

    #[test]
    fn finer_units_show_total_and_current() {
        assert_eq!(format_time_display(3, 7, DisplayUnit::Hours), "03:07");
        assert_eq!(format_time_display(0, 0, DisplayUnit::Seconds), "00:00");
    }

    #[test]
    fn tooltip_for_partial_day() {
        // 4h 33min 5s of a day
        let secs = 4.0 * 3600.0 + 33.0 * 60.0 + 5.0;
        let p = Progress::new((secs + 0.5) / 86_400.0);
        assert_eq!(format_progress_tooltip(p, DisplayUnit::Days), "4h 33min 5s");
    }

    #[test]
    fn tooltip_drops_zero_parts() {
        assert_eq!(
            format_progress_tooltip(Progress::new(0.5), DisplayUnit::Hours),
            "30min"
        );
        assert_eq!(
            format_progress_tooltip(Progress::EMPTY, DisplayUnit::Minutes),
            "0s"
        );
    }
}
