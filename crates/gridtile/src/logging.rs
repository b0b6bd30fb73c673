//! Logging flags and tracing filter construction.

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Crate targets that constitute "our" logs.
fn our_crates() -> &'static [&'static str] {
    &["gridtile", "x11_winops"]
}

/// Logging controls for the CLI.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_filter"])]
    pub debug: bool,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "x11_winops=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Build the tracing filter for these flags.
    ///
    /// Falls back to `RUST_LOG`, and to `warn` when that is unset too.
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(filter) = &self.log_filter {
            return EnvFilter::new(filter);
        }
        let level = if self.trace {
            Some("trace")
        } else if self.debug {
            Some("debug")
        } else {
            None
        };
        if let Some(level) = level {
            let directives = our_crates()
                .iter()
                .map(|krate| format!("{krate}={level}"))
                .collect::<Vec<_>>()
                .join(",");
            return EnvFilter::new(directives);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
