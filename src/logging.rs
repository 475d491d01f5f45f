use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "stackpad=info";

/// Route tracing output to `path`.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// Without a path logging stays disabled. The filter is read from
/// `STACKPAD_LOG`, then `RUST_LOG`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = EnvFilter::try_from_env("STACKPAD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        // Goes to whichever subscriber was installed first
        tracing::warn!(path = %path.display(), %err, "subscriber already set, log file unused");
        return Ok(());
    }

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
