//! Logging shims.
//!
//! With the `tracing` feature, [`debug`] and [`trace`] are `tracing`'s own
//! macros. Without it they resolve to crate-root no-op macros, so call sites
//! import from here unconditionally and disabled builds carry no logging code.
//!
//! Event names are dotted (`cell.init`, `cell.clamp`, `shape.init`).

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};

/// No-op stand-in for `tracing::debug!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// No-op stand-in for `tracing::trace!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Build a JSON-formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// The subscriber is returned rather than installed so embedders choose
/// between `set_global_default` and a scoped `set_default`.
#[cfg(feature = "tracing-json")]
#[must_use]
pub fn json_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .finish()
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::*;
    use crate::ClampedCell;

    #[test]
    fn json_subscriber_accepts_cell_events() {
        let subscriber = json_subscriber();
        tracing::subscriber::with_default(subscriber, || {
            let mut cell = ClampedCell::new();
            assert_eq!(cell.set(99), 12);
        });
    }
}
