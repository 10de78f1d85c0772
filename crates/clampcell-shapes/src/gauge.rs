//! A single flagged reading.

use clampcell_core::FlaggedCell;

/// One `level` field that remembers whether its last write was clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gauge {
    level: FlaggedCell,
}

impl Gauge {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: FlaggedCell::new(),
        }
    }

    #[must_use]
    pub fn with_maximum(maximum: i64) -> Self {
        Self {
            level: FlaggedCell::with_maximum(maximum),
        }
    }

    #[must_use]
    pub fn level(&self) -> i64 {
        self.level.get()
    }

    pub fn set_level(&mut self, value: i64) {
        self.level.set(value);
    }

    #[must_use]
    pub fn level_clamped(&self) -> bool {
        self.level.was_clamped()
    }
}
