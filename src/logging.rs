//! Diagnostic logging
//!
//! The viewer owns the terminal, so log lines written to stderr would land on
//! top of the diagram. Pass a log file to keep them; without one only
//! warnings and errors go to stderr. `RUST_LOG` overrides the filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "heapviz=info";
const STDERR_FILTER: &str = "heapviz=warn";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(FILE_FILTER))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(STDERR_FILTER))
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heapviz.log");

        init(Some(&path)).unwrap();
        init(Some(&path)).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("heapviz.log");
        assert!(init(Some(&path)).is_err());
    }
}
