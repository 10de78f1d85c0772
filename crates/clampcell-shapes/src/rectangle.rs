//! Rectangles whose `height` and `width` are clamped cells.
//!
//! # Invariants
//!
//! 1. `height` and `width` are independent: writing one never changes the other.
//! 2. Every accessor forwards to exactly one cell.

use std::fmt;

use clampcell_core::logging::debug;
use clampcell_core::{ClampedCell, FlaggedCell, Projected, TwelveOrLess, Wrapper};

/// A rectangle owning one wrapper cell per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle<W> {
    height: W,
    width: W,
}

/// Both dimensions are always twelve or less.
pub type SmallRectangle = Rectangle<TwelveOrLess>;

/// Dimensions with individually configurable ceilings.
pub type NumberRectangle = Rectangle<ClampedCell>;

/// Dimensions that also report whether their last write was clamped.
pub type FlaggedRectangle = Rectangle<FlaggedCell>;

impl<W: Wrapper<Value = i64> + Default> Rectangle<W> {
    /// Both cells default-initialized.
    #[must_use]
    pub fn new() -> Self {
        Self::from_cells(W::default(), W::default())
    }
}

impl<W: Wrapper<Value = i64> + Default> Default for Rectangle<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Wrapper<Value = i64>> Rectangle<W> {
    /// Build from independently configured cells.
    #[must_use]
    pub fn from_cells(height: W, width: W) -> Self {
        let rect = Self { height, width };
        debug!(message = "shape.init", height = rect.height(), width = rect.width());
        rect
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i64 {
        self.height.wrapped_value()
    }

    #[inline]
    pub fn set_height(&mut self, value: i64) {
        self.height.set_wrapped_value(value);
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i64 {
        self.width.wrapped_value()
    }

    #[inline]
    pub fn set_width(&mut self, value: i64) {
        self.width.set_wrapped_value(value);
    }

    /// Backing cell for `height`.
    #[must_use]
    pub const fn height_cell(&self) -> &W {
        &self.height
    }

    /// Backing cell for `width`.
    #[must_use]
    pub const fn width_cell(&self) -> &W {
        &self.width
    }
}

impl<W: Projected<Value = i64>> Rectangle<W> {
    #[must_use]
    pub fn height_projected(&self) -> W::Projection {
        self.height.projected_value()
    }

    #[must_use]
    pub fn width_projected(&self) -> W::Projection {
        self.width.projected_value()
    }
}

impl Rectangle<ClampedCell> {
    /// Default cells on both sides: `0 0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new()
    }

    /// Both sides start at one under the default ceiling: `1 1`.
    #[must_use]
    pub fn unit() -> Self {
        Self::from_cells(ClampedCell::with_value(1), ClampedCell::with_value(1))
    }

    /// Height `2` capped at `5`, width `3` capped at `4`.
    #[must_use]
    pub fn narrow() -> Self {
        Self::from_cells(
            ClampedCell::with_value_and_maximum(2, 5),
            ClampedCell::with_value_and_maximum(3, 4),
        )
    }
}

impl Rectangle<FlaggedCell> {
    /// Whether the last write to `height` was clamped.
    #[must_use]
    pub fn height_clamped(&self) -> bool {
        self.height.was_clamped()
    }

    /// Whether the last write to `width` was clamped.
    #[must_use]
    pub fn width_clamped(&self) -> bool {
        self.width.was_clamped()
    }
}

impl<W: Wrapper<Value = i64>> fmt::Display for Rectangle<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.height(), self.width())
    }
}
