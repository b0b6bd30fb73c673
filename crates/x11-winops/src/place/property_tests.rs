use proptest::prelude::*;

use super::{GridSpec, Offset, target_rect};
use crate::geom::Rect;

fn head_strategy() -> impl Strategy<Value = Rect> {
    (
        -4000i32..4000,
        -4000i32..4000,
        300i32..4000,
        300i32..4000,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn valid_spec_strategy() -> impl Strategy<Value = GridSpec> {
    (1u32..=12, 1u32..=12)
        .prop_flat_map(|(x_div, y_div)| {
            (Just(x_div), Just(y_div), 1..=x_div, 1..=y_div)
        })
        .prop_flat_map(|(x_div, y_div, x_index, y_index)| {
            (
                Just(x_div),
                Just(y_div),
                Just(x_index),
                Just(y_index),
                1..=(x_div - x_index + 1),
                1..=(y_div - y_index + 1),
            )
        })
        .prop_map(|(x_div, y_div, x_index, y_index, x_size, y_size)| GridSpec {
            x_div,
            y_div,
            x_size,
            y_size,
            x_index,
            y_index,
        })
}

proptest! {
    // Valid specs always survive validation.
    #[test]
    fn generated_specs_validate(spec in valid_spec_strategy()) {
        prop_assert!(spec.validate().is_ok());
    }

    // Without decoration the target always lies inside its head, and its
    // size is an exact multiple of the per-cell unit.
    #[test]
    fn undecorated_target_stays_inside_the_head(
        head in head_strategy(),
        spec in valid_spec_strategy(),
    ) {
        let got = target_rect(&head, &spec, Offset::default());
        prop_assert!(got.x >= head.x);
        prop_assert!(got.y >= head.y);
        prop_assert!(got.right() <= head.right());
        prop_assert!(got.bottom() <= head.bottom());
        prop_assert_eq!(got.w, (head.w / spec.x_div as i32) * spec.x_size as i32);
        prop_assert_eq!(got.h, (head.h / spec.y_div as i32) * spec.y_size as i32);
    }

    // Single-cell placements on one row tile contiguously.
    #[test]
    fn adjacent_cells_are_gap_free(
        head in head_strategy(),
        x_div in 1u32..=12,
        x_index in 1u32..=11,
    ) {
        prop_assume!(x_index < x_div);
        let cell = |i| GridSpec {
            x_div,
            y_div: 1,
            x_size: 1,
            y_size: 1,
            x_index: i,
            y_index: 1,
        };
        let a = target_rect(&head, &cell(x_index), Offset::default());
        let b = target_rect(&head, &cell(x_index + 1), Offset::default());
        prop_assert_eq!(a.right(), b.x);
    }

    // The decorated footprint never crosses the head's right or bottom
    // edge, however large the remainder the grid leaves.
    #[test]
    fn decorated_footprint_never_overflows(
        head in head_strategy(),
        spec in valid_spec_strategy(),
        off_x in 0i32..32,
        off_y in 0i32..32,
    ) {
        let offset = Offset { x: off_x, y: off_y };
        let got = target_rect(&head, &spec, offset);
        prop_assert!(got.x + got.w + offset.x <= head.right());
        prop_assert!(got.y + got.h + offset.y <= head.bottom());
    }
}
