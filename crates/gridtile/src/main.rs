//! Binary entrypoint for the gridtile CLI.
//!
//! Divides the focused window's screen into a grid and moves the window onto
//! a span of cells, e.g. `gridtile 2 1 1 1 2 1` for the right half.

use std::{io, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::fmt;
use x11_winops::{place_grid_focused, GridSpec, XConn};

/// Logging flags shared with the library targets.
mod logging;

use crate::logging::LogArgs;

#[derive(Parser, Debug)]
#[command(name = "gridtile", about = "Tile the focused window by grid", version)]
/// Command-line interface for the `gridtile` binary.
struct Cli {
    /// Number of grid columns the screen is divided into
    #[arg(value_name = "X_DIV")]
    x_div: u32,

    /// Number of grid rows the screen is divided into
    #[arg(value_name = "Y_DIV")]
    y_div: u32,

    /// Width of the placement in grid cells
    #[arg(value_name = "X_SIZE")]
    x_size: u32,

    /// Height of the placement in grid cells
    #[arg(value_name = "Y_SIZE")]
    y_size: u32,

    /// 1-based column of the placement's top-left cell
    #[arg(value_name = "X_INDEX")]
    x_index: u32,

    /// 1-based row of the placement's top-left cell
    #[arg(value_name = "Y_INDEX")]
    y_index: u32,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,
}

impl Cli {
    fn grid_spec(&self) -> GridSpec {
        GridSpec {
            x_div: self.x_div,
            y_div: self.y_div,
            x_size: self.x_size,
            y_size: self.y_size,
            x_index: self.x_index,
            y_index: self.y_index,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    fmt()
        .with_env_filter(cli.log.env_filter())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli.grid_spec()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Connect and place; every failure propagates to `main` for reporting.
fn run(spec: &GridSpec) -> x11_winops::Result<()> {
    debug!("placing: {:?}", spec);
    let conn = XConn::open()?;
    place_grid_focused(&conn, spec)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn six_positional_arguments_parse_into_a_spec() {
        let cli = Cli::try_parse_from(["gridtile", "2", "1", "1", "1", "2", "1"]).unwrap();
        let spec = cli.grid_spec();
        assert_eq!(
            (spec.x_div, spec.y_div, spec.x_size, spec.y_size, spec.x_index, spec.y_index),
            (2, 1, 1, 1, 2, 1)
        );
    }

    #[test]
    fn non_numeric_argument_is_rejected_naming_the_token() {
        let err = Cli::try_parse_from(["gridtile", "2", "1", "one", "1", "2", "1"]).unwrap_err();
        assert!(err.to_string().contains("one"));
    }

    #[test]
    fn negative_and_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["gridtile", "2", "1", "-1", "1", "2", "1"]).is_err());
        assert!(Cli::try_parse_from(["gridtile", "2", "1", "1", "1", "2"]).is_err());
        assert!(Cli::try_parse_from(["gridtile", "2", "1", "1", "1", "2", "1", "9"]).is_err());
    }

    #[test]
    fn logging_flags_ride_along() {
        let cli =
            Cli::try_parse_from(["gridtile", "--debug", "2", "2", "1", "1", "1", "1"]).unwrap();
        assert!(cli.log.debug);
        assert!(Cli::try_parse_from(["gridtile", "--debug", "--trace", "2", "2", "1", "1", "1", "1"]).is_err());
    }
}
