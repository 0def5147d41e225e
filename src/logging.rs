//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log lines only go to a file and only
//! when one is requested.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber writing plain lines to `path`.
///
/// Without a path nothing is installed and tracing macros are no-ops.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| io::Error::other(format!("failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_path_is_noop() {
        assert!(init(None).is_ok());
    }
}
