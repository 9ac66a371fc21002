//! Reading snapshot groups from the snapshot directory
//!
//! A group is every `*.json` file whose name starts with a selector such as
//! `Test07_`. Files are visited in name order so the encounter order the
//! sequencer preserves for equal steps is the same on every platform.

use super::{Snapshot, SnapshotEntry};
use crate::error::{LoadError, Result, ViewerError};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const SNAPSHOT_EXTENSION: &str = ".json";

/// Result of loading one group: the snapshots that parsed and the files that did not
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub entries: Vec<SnapshotEntry>,
    pub errors: Vec<LoadError>,
}

/// Parse a single snapshot record
pub fn parse_snapshot(text: &str) -> serde_json::Result<Snapshot> {
    serde_json::from_str(text)
}

/// Load every snapshot file in `dir` whose name starts with `selector`.
///
/// Per-file failures are collected in [`LoadOutcome::errors`]; only an
/// unreadable directory fails the whole call.
pub fn load_group(dir: &Path, selector: &str) -> Result<LoadOutcome> {
    let files = snapshot_files(dir, |name| name.starts_with(selector))?;
    let mut outcome = LoadOutcome::default();

    for path in files {
        match load_file(&path) {
            Ok(snapshot) => {
                let label = file_label(&path);
                tracing::debug!(%label, blocks = snapshot.blocks.len(), "loaded snapshot");
                outcome.entries.push(SnapshotEntry::new(snapshot, label));
            }
            Err(err) => outcome.errors.push(err),
        }
    }

    Ok(outcome)
}

/// List the distinct selector prefixes present in `dir`, sorted.
///
/// The selector of `Test07_Malloc.json` is `Test07_`: everything up to and
/// including the first underscore. Files without an underscore form no group.
pub fn discover_selectors(dir: &Path) -> Result<Vec<String>> {
    let files = snapshot_files(dir, |_| true)?;
    let selectors: BTreeSet<String> = files
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let underscore = name.find('_')?;
            (underscore > 0).then(|| name[..=underscore].to_string())
        })
        .collect();

    Ok(selectors.into_iter().collect())
}

fn load_file(path: &Path) -> std::result::Result<Snapshot, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_snapshot(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `*.json` files in `dir` whose names pass `keep`, sorted by name
fn snapshot_files(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|source| ViewerError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(SNAPSHOT_EXTENSION) && keep(name) && entry.path().is_file() {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
