//! Clamped cell with a projected "was clamped" flag.
//!
//! The flag describes only the most recent write: a clamped write sets it,
//! any in-range write clears it. Construction leaves it clear, even when the
//! initial value had to be clamped.

use std::fmt;

use crate::cell::{DEFAULT_MAXIMUM, clamp_write};
use crate::logging::debug;
use crate::wrapper::{Projected, Wrapper};

/// A bounded integer slot that records whether its last write was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlaggedCell {
    value: i64,
    maximum: i64,
    clamped: bool,
}

impl FlaggedCell {
    /// Value `0`, maximum [`DEFAULT_MAXIMUM`], flag clear.
    #[must_use]
    pub fn new() -> Self {
        debug!(message = "cell.init", path = "default", maximum = DEFAULT_MAXIMUM);
        Self {
            value: 0,
            maximum: DEFAULT_MAXIMUM,
            clamped: false,
        }
    }

    /// Value `min(0, maximum)` under an explicit `maximum`, flag clear.
    #[must_use]
    pub fn with_maximum(maximum: i64) -> Self {
        debug!(message = "cell.init", path = "with_maximum", maximum);
        Self::build(0, maximum)
    }

    /// Start at `value` (clamped) under the default maximum, flag clear.
    #[must_use]
    pub fn with_value(value: i64) -> Self {
        debug!(message = "cell.init", path = "with_value", value, maximum = DEFAULT_MAXIMUM);
        Self::build(value, DEFAULT_MAXIMUM)
    }

    /// Start at `value` (clamped) under an explicit `maximum`, flag clear.
    #[must_use]
    pub fn with_value_and_maximum(value: i64, maximum: i64) -> Self {
        debug!(message = "cell.init", path = "with_value_and_maximum", value, maximum);
        Self::build(value, maximum)
    }

    /// The flag describes writes only, so an out-of-range initial value
    /// still starts clear.
    fn build(value: i64, maximum: i64) -> Self {
        Self {
            value: value.min(maximum),
            maximum,
            clamped: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.value
    }

    /// Store `min(value, maximum)`, update the flag, and return what was stored.
    #[inline]
    pub fn set(&mut self, value: i64) -> i64 {
        let (stored, clamped) = clamp_write(value, self.maximum);
        self.value = stored;
        self.clamped = clamped;
        stored
    }

    /// Whether the most recent write exceeded the maximum.
    #[inline]
    #[must_use]
    pub const fn was_clamped(&self) -> bool {
        self.clamped
    }

    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> i64 {
        self.maximum
    }
}

impl Default for FlaggedCell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlaggedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Wrapper for FlaggedCell {
    type Value = i64;

    fn wrapped_value(&self) -> i64 {
        self.get()
    }

    fn set_wrapped_value(&mut self, value: i64) {
        self.set(value);
    }
}

impl Projected for FlaggedCell {
    type Projection = bool;

    fn projected_value(&self) -> bool {
        self.was_clamped()
    }
}
