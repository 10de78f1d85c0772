#![forbid(unsafe_code)]

//! Shapes composed from clamped value cells.
//!
//! Each shape owns its cells outright and forwards reads and writes through
//! [`Wrapper`](clampcell_core::Wrapper); there is no generated code.

pub mod gauge;
pub mod rectangle;

pub use gauge::Gauge;
pub use rectangle::{FlaggedRectangle, NumberRectangle, Rectangle, SmallRectangle};
