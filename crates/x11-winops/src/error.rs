use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// Grid axis named in range diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (columns).
    X,
    /// Vertical (rows).
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Errors that can occur while resolving or applying a placement.
#[derive(Error, Debug)]
pub enum Error {
    /// The X display could not be reached at all.
    #[error("cannot connect to X display: {0}")]
    Connect(#[from] ConnectError),

    /// The connection dropped while a request was in flight.
    #[error("X connection failed: {0}")]
    X11(#[from] ConnectionError),

    /// A required query did not produce a usable reply.
    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),

    /// `_NET_ACTIVE_WINDOW` is unset or zero; nothing has input focus.
    #[error("no active window")]
    NoActiveWindow,

    /// The focused window overlaps none of the usable heads.
    #[error("cannot find a suitable screen")]
    NoSuitableScreen,

    /// A grid field that must be positive was zero.
    #[error("grid {what} must be at least 1")]
    ZeroGridField {
        /// Field name as spelled on the command line (e.g. `x_div`).
        what: &'static str,
    },

    /// A 1-based grid index fell outside its axis.
    #[error("cannot place outside {axis} range: index {index} not in 1..={div}")]
    IndexOutOfRange {
        /// Axis the index belongs to.
        axis: Axis,
        /// The offending 1-based index.
        index: u32,
        /// Number of divisions on that axis.
        div: u32,
    },

    /// A span runs past the end of its axis.
    #[error("cannot place outside {axis} range: {size} cells at index {index} exceed {div} divisions")]
    SpanOutOfRange {
        /// Axis the span belongs to.
        axis: Axis,
        /// The 1-based start index of the span.
        index: u32,
        /// Span length in cells.
        size: u32,
        /// Number of divisions on that axis.
        div: u32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
