//! The simplest wrapper: a fixed ceiling of twelve.

use std::fmt;

use crate::cell::{DEFAULT_MAXIMUM, clamp_write};
use crate::logging::debug;
use crate::wrapper::Wrapper;

/// An integer that is always twelve or less.
///
/// Unlike [`ClampedCell`](crate::ClampedCell) the ceiling is not
/// configurable and the only way to build one is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwelveOrLess {
    number: i64,
}

impl TwelveOrLess {
    pub const MAXIMUM: i64 = DEFAULT_MAXIMUM;

    #[must_use]
    pub fn new() -> Self {
        debug!(message = "cell.init", path = "default", maximum = Self::MAXIMUM);
        Self { number: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.number
    }

    #[inline]
    pub fn set(&mut self, value: i64) -> i64 {
        let (stored, _) = clamp_write(value, Self::MAXIMUM);
        self.number = stored;
        stored
    }

    #[inline]
    #[must_use]
    pub const fn maximum(&self) -> i64 {
        Self::MAXIMUM
    }
}

impl Default for TwelveOrLess {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TwelveOrLess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

impl Wrapper for TwelveOrLess {
    type Value = i64;

    fn wrapped_value(&self) -> i64 {
        self.get()
    }

    fn set_wrapped_value(&mut self, value: i64) {
        self.set(value);
    }
}
