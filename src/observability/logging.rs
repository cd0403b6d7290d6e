//! Structured logging.
//!
//! Log lines go to stderr with the source file and line of each event.
//! Colours are used only when stderr is a terminal. `RUST_LOG` overrides the
//! default filter.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "compress=debug";

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .is_ok()
}
