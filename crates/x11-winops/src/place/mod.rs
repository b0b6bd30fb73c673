//! Grid placement math.
//!
//! Converts a grid coordinate (divisions, span, 1-based index) into an
//! absolute target rectangle inside a head, correcting for window decoration
//! so the decorated footprint never sticks out past the head.

use crate::{
    error::{Axis, Error},
    geom::Rect,
    Result,
};

#[cfg(test)]
mod property_tests;

/// Grid coordinates for one placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of grid columns the head is divided into.
    pub x_div: u32,
    /// Number of grid rows the head is divided into.
    pub y_div: u32,
    /// Width of the placement in cells.
    pub x_size: u32,
    /// Height of the placement in cells.
    pub y_size: u32,
    /// 1-based column of the placement's top-left cell.
    pub x_index: u32,
    /// 1-based row of the placement's top-left cell.
    pub y_index: u32,
}

impl GridSpec {
    /// Range-check every field, both axes symmetrically.
    ///
    /// Divisions and spans must be at least 1, indices must lie in
    /// `1..=div`, and a span must not run past the end of its axis. Checked
    /// before any window state is touched.
    pub fn validate(&self) -> Result<()> {
        check_axis(Axis::X, self.x_div, self.x_size, self.x_index)?;
        check_axis(Axis::Y, self.y_div, self.y_size, self.y_index)
    }
}

fn check_axis(axis: Axis, div: u32, size: u32, index: u32) -> Result<()> {
    if div == 0 {
        return Err(Error::ZeroGridField {
            what: match axis {
                Axis::X => "x_div",
                Axis::Y => "y_div",
            },
        });
    }
    if size == 0 {
        return Err(Error::ZeroGridField {
            what: match axis {
                Axis::X => "x_size",
                Axis::Y => "y_size",
            },
        });
    }
    if index == 0 || index > div {
        return Err(Error::IndexOutOfRange { axis, index, div });
    }
    if index - 1 + size > div {
        return Err(Error::SpanOutOfRange {
            axis,
            index,
            size,
            div,
        });
    }
    Ok(())
}

/// Decoration offset between a window's inner geometry and its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    /// Horizontal border thickness.
    pub x: i32,
    /// Vertical border (titlebar) thickness.
    pub y: i32,
}

/// Absolute target rectangle for `spec` inside `head`.
///
/// Cell size is the per-cell truncated share of the head (`head.w / x_div`),
/// and spans multiply that unit rather than re-dividing the total, so
/// adjacent placements tile without gaps or overlap. When the decorated
/// footprint (`target + offset`) would cross the head's right or bottom
/// edge, the position is shifted back so it sits flush instead; size is
/// never clipped.
pub fn target_rect(head: &Rect, spec: &GridSpec, offset: Offset) -> Rect {
    let unit_w = head.w / spec.x_div.max(1) as i32;
    let unit_h = head.h / spec.y_div.max(1) as i32;
    let w = unit_w * spec.x_size as i32;
    let h = unit_h * spec.y_size as i32;
    let mut x = head.x + (spec.x_index as i32 - 1) * unit_w;
    let mut y = head.y + (spec.y_index as i32 - 1) * unit_h;
    if x + w + offset.x > head.right() {
        x = head.right() - w - offset.x;
    }
    if y + h + offset.y > head.bottom() {
        y = head.bottom() - h - offset.y;
    }
    Rect::new(x, y, w, h)
}
