//! Progress renderer: geometry for the circular gauges.
//!
//! The core stops at angles. Filling pixels, gradients and device pixel
//! ratios belong to whatever surface the host paints on.

mod arc;
mod indicator;

pub use arc::{compute_arc, ArcConvention, ArcSpec, TOP};
pub use indicator::{indicator_set, Indicator, Indicators};
