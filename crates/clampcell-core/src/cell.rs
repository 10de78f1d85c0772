//! Configurable clamped cell.
//!
//! # Invariants
//!
//! 1. `value <= maximum` after construction and after every write.
//! 2. A write stores `min(requested, maximum)` and never fails.
//! 3. Construction clamps its initial value without emitting `cell.clamp`;
//!    that event belongs to writes.
//! 4. `maximum` is accepted as given; a negative ceiling is legal and simply
//!    clamps every write to that negative number.

use std::fmt;

use crate::logging::{debug, trace};
use crate::wrapper::Wrapper;

/// Ceiling used when a cell is created without an explicit maximum.
pub const DEFAULT_MAXIMUM: i64 = 12;

/// Clamp `requested` to `maximum`, reporting whether clamping happened.
///
/// Shared write path for every cell type.
#[inline]
pub(crate) fn clamp_write(requested: i64, maximum: i64) -> (i64, bool) {
    if requested > maximum {
        trace!(message = "cell.clamp", requested, maximum);
        (maximum, true)
    } else {
        (requested, false)
    }
}

/// A bounded integer slot whose writes are clamped to a configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedCell {
    value: i64,
    maximum: i64,
}

impl ClampedCell {
    /// Value `0`, maximum [`DEFAULT_MAXIMUM`].
    #[must_use]
    pub fn new() -> Self {
        debug!(message = "cell.init", path = "default", maximum = DEFAULT_MAXIMUM);
        Self {
            value: 0,
            maximum: DEFAULT_MAXIMUM,
        }
    }

    /// Start at `value` (clamped) under the default maximum.
    #[must_use]
    pub fn with_value(value: i64) -> Self {
        debug!(message = "cell.init", path = "with_value", value, maximum = DEFAULT_MAXIMUM);
        Self::build(value, DEFAULT_MAXIMUM)
    }

    /// Start at `value` (clamped) under an explicit `maximum`.
    #[must_use]
    pub fn with_value_and_maximum(value: i64, maximum: i64) -> Self {
        debug!(message = "cell.init", path = "with_value_and_maximum", value, maximum);
        Self::build(value, maximum)
    }

    fn build(value: i64, maximum: i64) -> Self {
        Self {
            value: value.min(maximum),
            maximum,
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.value
    }

    /// Store `min(value, maximum)` and return what was stored.
    #[inline]
    pub fn set(&mut self, value: i64) -> i64 {
        let (stored, _) = clamp_write(value, self.maximum);
        self.value = stored;
        stored
    }

    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> i64 {
        self.maximum
    }
}

impl Default for ClampedCell {
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for ClampedCell {
    fn from(value: i64) -> Self {
        Self::with_value(value)
    }
}

impl From<ClampedCell> for i64 {
    fn from(cell: ClampedCell) -> Self {
        cell.value
    }
}

impl fmt::Display for ClampedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Wrapper for ClampedCell {
    type Value = i64;

    #[inline]
    fn wrapped_value(&self) -> i64 {
        self.get()
    }

    #[inline]
    fn set_wrapped_value(&mut self, value: i64) {
        self.set(value);
    }
}
