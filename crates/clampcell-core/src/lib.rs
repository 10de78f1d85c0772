#![forbid(unsafe_code)]

//! Core: clamped value cells and the wrapper traits their owners forward through.
//!
//! A cell stores one integer and intercepts every write, replacing the
//! requested value with `min(requested, maximum)`. Writes never fail.
//!
//! - [`TwelveOrLess`]: fixed ceiling of [`DEFAULT_MAXIMUM`], default-only construction.
//! - [`ClampedCell`]: configurable ceiling with three construction paths.
//! - [`FlaggedCell`]: additionally projects whether the last write was clamped.
//!
//! # Example
//!
//! ```
//! use clampcell_core::ClampedCell;
//!
//! let mut cell = ClampedCell::with_value_and_maximum(2, 5);
//! assert_eq!(cell.get(), 2);
//! cell.set(100);
//! assert_eq!(cell.get(), 5);
//! ```

pub mod cell;
pub mod flagged;
pub mod logging;
pub mod twelve;
pub mod wrapper;

pub use cell::{ClampedCell, DEFAULT_MAXIMUM};
pub use flagged::FlaggedCell;
pub use twelve::TwelveOrLess;
pub use wrapper::{Projected, Wrapper};
