//! Convenience helpers for the command handler.

use std::path::Path;

use anyhow::Result;
use pm42_labels::ColumnMap;
use tracing_subscriber::EnvFilter;

/// Column headers from `--columns`, or the export defaults.
pub fn load_columns(path: Option<&Path>) -> Result<ColumnMap> {
    match path {
        Some(path) => Ok(ColumnMap::from_json_file(path)?),
        None => Ok(ColumnMap::default()),
    }
}

/// Log to stderr, filtered by `RUST_LOG` unless `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
