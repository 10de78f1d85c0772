//! Property-based invariant tests for shapes.
//!
//! 1. Writing one dimension never changes the other.
//! 2. Shape accessors agree with a standalone cell fed the same writes.
//! 3. Per-side clamp flags follow their own writes only.

use clampcell_core::{ClampedCell, FlaggedCell};
use clampcell_shapes::{FlaggedRectangle, Rectangle, SmallRectangle};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Write {
    Height(i64),
    Width(i64),
}

fn write_strategy() -> impl Strategy<Value = Write> {
    prop_oneof![
        (-100i64..=100).prop_map(Write::Height),
        (-100i64..=100).prop_map(Write::Width),
        any::<i64>().prop_map(Write::Height),
        any::<i64>().prop_map(Write::Width),
    ]
}

fn writes_strategy() -> impl Strategy<Value = Vec<Write>> {
    proptest::collection::vec(write_strategy(), 0..48)
}

proptest! {
    #[test]
    fn dimensions_are_independent(writes in writes_strategy()) {
        let mut rect = SmallRectangle::new();
        for w in writes {
            let (h_before, w_before) = (rect.height(), rect.width());
            match w {
                Write::Height(v) => {
                    rect.set_height(v);
                    prop_assert_eq!(rect.width(), w_before);
                }
                Write::Width(v) => {
                    rect.set_width(v);
                    prop_assert_eq!(rect.height(), h_before);
                }
            }
        }
    }

    #[test]
    fn shape_matches_standalone_cells(
        h_max in -50i64..=50,
        w_max in -50i64..=50,
        writes in writes_strategy(),
    ) {
        let mut rect = Rectangle::from_cells(
            ClampedCell::with_value_and_maximum(0, h_max),
            ClampedCell::with_value_and_maximum(0, w_max),
        );
        let mut height = ClampedCell::with_value_and_maximum(0, h_max);
        let mut width = ClampedCell::with_value_and_maximum(0, w_max);
        for w in writes {
            match w {
                Write::Height(v) => {
                    rect.set_height(v);
                    height.set(v);
                }
                Write::Width(v) => {
                    rect.set_width(v);
                    width.set(v);
                }
            }
            prop_assert_eq!(rect.height(), height.get());
            prop_assert_eq!(rect.width(), width.get());
        }
    }

    #[test]
    fn flags_follow_their_own_side(writes in writes_strategy()) {
        let mut rect = FlaggedRectangle::new();
        let mut height = FlaggedCell::new();
        let mut width = FlaggedCell::new();
        for w in writes {
            match w {
                Write::Height(v) => {
                    rect.set_height(v);
                    height.set(v);
                }
                Write::Width(v) => {
                    rect.set_width(v);
                    width.set(v);
                }
            }
            prop_assert_eq!(rect.height_clamped(), height.was_clamped());
            prop_assert_eq!(rect.width_clamped(), width.was_clamped());
        }
    }
}
