//! Tracing subscriber setup
//!
//! Logs share stderr with `Error:` lines, so the default filter only lets
//! warnings through. Rejected input is reported to the user, not logged
//! above `info`.

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// `RUST_LOG` if set, otherwise [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build a fmt subscriber writing to `writer`
pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Install the global subscriber on stderr, colored only on a terminal
pub fn init() -> anyhow::Result<()> {
    let ansi = io::stderr().is_terminal();
    tracing::subscriber::set_global_default(subscriber(env_filter(), io::stderr, ansi))?;
    Ok(())
}
