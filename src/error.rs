//! Error types for loading, viewing, and launching
//!
//! Errors are split along the lines of who can recover from them:
//!
//! - [`LoadError`]: one snapshot file could not be read or parsed. The file is
//!   skipped and the rest of the group still plays.
//! - [`ViewerError`]: the viewer cannot start at all (unreadable directory,
//!   empty group).
//! - [`LaunchError`]: the selection menu failed to start a viewer process. The
//!   menu shows it and keeps running.
//!
//! Dangling or self-referential free-list links are not errors; the overlay
//! skips them.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A single snapshot file that could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Conditions that prevent the viewer from starting
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot read snapshot directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No valid snapshots for '{selector}' in {}/", dir.display())]
    NoSnapshots { selector: String, dir: PathBuf },

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure to start a viewer from the selection menu
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot locate the viewer executable: {0}")]
    Executable(#[source] io::Error),

    #[error("failed to launch viewer for '{selector}': {source}")]
    Spawn {
        selector: String,
        #[source]
        source: io::Error,
    },

    #[error("viewer for '{selector}' exited with {status}")]
    Exited { selector: String, status: ExitStatus },
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;
