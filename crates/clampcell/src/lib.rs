#![forbid(unsafe_code)]

//! clampcell public facade.
//!
//! This crate provides the stable, ergonomic surface area for users.
//!
//! ```
//! use clampcell::prelude::*;
//!
//! let mut rect = SmallRectangle::new();
//! rect.set_height(24);
//! assert_eq!(rect.height(), 12);
//! ```

pub mod prelude {
    pub use clampcell_core as core;
    pub use clampcell_shapes as shapes;

    pub use clampcell_core::{
        ClampedCell, DEFAULT_MAXIMUM, FlaggedCell, Projected, TwelveOrLess, Wrapper,
    };
    pub use clampcell_shapes::{FlaggedRectangle, Gauge, NumberRectangle, Rectangle, SmallRectangle};
}
