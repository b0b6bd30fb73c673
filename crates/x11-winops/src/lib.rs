//! x11-winops: X11 window operations for gridtile.
//!
//! Resolves the usable geometry of a multi-head X11 desktop (Xinerama heads
//! shrunk by EWMH struts), picks the head the focused window belongs to, and
//! places that window into a grid cell on it.
//!
//! All operations speak to the server through a blocking [`XConn`]; the
//! geometry engine itself (`geom`, `strut`, `screen`, `place`) is pure and
//! has no protocol dependencies.

mod conn;
mod error;
mod geom;
mod ops;
mod place;
mod screen;
mod strut;

pub use conn::XConn;
pub use error::{Axis, Error, Result};
pub use geom::Rect;
pub use ops::{compute_target, place_grid_focused};
pub use place::{GridSpec, Offset, target_rect};
pub use screen::pick_head;
pub use strut::Strut;
