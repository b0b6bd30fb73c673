//! Active-head resolution.
//!
//! The focused window belongs to whichever head it overlaps the most. Basing
//! the choice on window geometry rather than the pointer keeps the result
//! deterministic and handles windows straddling a head boundary.

use crate::geom::Rect;

/// Index of the head with the greatest overlap against `focused`.
///
/// A head replaces the running best only on strictly greater overlap, so
/// ties keep the head that enumerates first. Returns `None` when every
/// overlap is zero or `heads` is empty.
pub fn pick_head(heads: &[Rect], focused: &Rect) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, head) in heads.iter().enumerate() {
        let overlap = head.intersect_area(focused);
        if overlap == 0 {
            continue;
        }
        if best.is_none_or(|(_, most)| overlap > most) {
            best = Some((i, overlap));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side() -> Vec<Rect> {
        vec![Rect::new(0, 0, 1920, 1080), Rect::new(1920, 0, 1920, 1080)]
    }

    #[test]
    fn window_inside_one_head_resolves_to_it() {
        let heads = side_by_side();
        let win = Rect::new(2000, 100, 800, 600);
        assert_eq!(pick_head(&heads, &win), Some(1));
    }

    #[test]
    fn straddling_window_resolves_to_larger_overlap() {
        let heads = side_by_side();
        // 700 px on the left head, 100 px on the right one.
        let win = Rect::new(1220, 100, 800, 600);
        assert_eq!(pick_head(&heads, &win), Some(0));
    }

    #[test]
    fn equal_overlap_keeps_the_earlier_head() {
        let heads = side_by_side();
        let win = Rect::new(1520, 100, 800, 600);
        assert_eq!(heads[0].intersect_area(&win), heads[1].intersect_area(&win));
        assert_eq!(pick_head(&heads, &win), Some(0));
    }

    #[test]
    fn fully_offscreen_window_resolves_to_none() {
        let heads = side_by_side();
        let win = Rect::new(-900, -700, 800, 600);
        assert_eq!(pick_head(&heads, &win), None);
        assert_eq!(pick_head(&[], &win), None);
    }
}
