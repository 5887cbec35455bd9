use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::time::Progress;

/// One gauge in the row of remaining units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub index: u64,
    pub progress: Progress,
    /// Not-yet-reached unit, drawn at reduced weight.
    pub is_future: bool,
}

/// Lazy row of indicators: the live gauge first, then full placeholders.
///
/// Cloning restarts the sequence from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Indicators {
    next: u64,
    len: u64,
    active: Progress,
}

/// `max_units` indicators; element 0 carries `active`, the rest are full.
pub fn indicator_set(max_units: u64, active: Progress) -> Indicators {
    Indicators {
        next: 0,
        len: max_units,
        active,
    }
}

impl Iterator for Indicators {
    type Item = Indicator;

    fn next(&mut self) -> Option<Indicator> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(if index == 0 {
            Indicator {
                index,
                progress: self.active,
                is_future: false,
            }
        } else {
            Indicator {
                index,
                progress: Progress::FULL,
                is_future: true,
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.len - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Indicators {}

impl FusedIterator for Indicators {}
