//! Heap snapshot records
//!
//! A [`Snapshot`] is one capture of the allocator's block list plus its
//! aggregate [`Stats`]. Snapshots are produced outside this crate (by an
//! instrumented allocator writing JSON), loaded once by [`loader`], ordered
//! by [`sequence`], and never modified afterwards.
//!
//! # Record format
//!
//! ```text
//! {
//!   "step": 1,
//!   "blocks": [ { "offset": 32, "size": 128, "free": false,
//!                 "nextOffset": 0, "prevOffset": 0 }, ... ],
//!   "stats": { "totalUsedMem": 128, "totalFreeMem": 0,
//!              "numUsedBlocks": 1, "numFreeBlocks": 0 }
//! }
//! ```
//!
//! Missing or `null` link fields read as the null sentinel `0`, and a missing
//! `stats` object (or any missing field inside it) reads as zero. The
//! snake_case names emitted by the allocator (`next_offset`,
//! `total_used_mem`, ...) are accepted too.

pub mod loader;
pub mod sequence;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use serde::{Deserialize, Deserializer, Serialize};

pub use loader::{discover_selectors, load_group, parse_snapshot, LoadOutcome};
pub use sequence::{Frame, OrderKey, Sequence};

/// Null value of a free-list link
pub const NULL_OFFSET: u64 = 0;

/// One heap capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub stats: Stats,
}

/// One allocator region at capture time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub offset: u64,
    pub size: i64,
    pub free: bool,
    #[serde(
        rename = "nextOffset",
        alias = "next_offset",
        alias = "next",
        default,
        deserialize_with = "null_as_zero"
    )]
    pub next_offset: u64,
    #[serde(
        rename = "prevOffset",
        alias = "prev_offset",
        alias = "prev",
        default,
        deserialize_with = "null_as_zero"
    )]
    pub prev_offset: u64,
}

impl Block {
    /// Blocks with a non-positive size are not drawn
    pub fn is_rendered(&self) -> bool {
        self.size > 0
    }

    /// Rendered height in bytes, zero for blocks that are not drawn
    pub fn height(&self) -> u64 {
        self.size.max(0) as u64
    }

    pub fn next_link(&self) -> Option<u64> {
        Some(self.next_offset).filter(|&o| o != NULL_OFFSET)
    }

    pub fn prev_link(&self) -> Option<u64> {
        Some(self.prev_offset).filter(|&o| o != NULL_OFFSET)
    }
}

/// Aggregate counters reported by the allocator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "totalUsedMem", alias = "total_used_mem")]
    pub total_used_mem: u64,
    #[serde(rename = "totalFreeMem", alias = "total_free_mem")]
    pub total_free_mem: u64,
    #[serde(rename = "numUsedBlocks", alias = "num_used_blocks")]
    pub num_used_blocks: u64,
    #[serde(rename = "numFreeBlocks", alias = "num_free_blocks")]
    pub num_free_blocks: u64,
}

/// A parsed snapshot and the name of the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub snapshot: Snapshot,
    pub label: String,
}

impl SnapshotEntry {
    pub fn new(snapshot: Snapshot, label: impl Into<String>) -> Self {
        SnapshotEntry {
            snapshot,
            label: label.into(),
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(NULL_OFFSET))
}

/// Load every snapshot for `selector` and order it for playback.
///
/// Files that fail to load are logged and skipped. Returns
/// [`ViewerError::NoSnapshots`] when nothing usable remains.
pub fn open_group(config: &ViewerConfig, selector: &str) -> Result<Sequence> {
    let outcome = load_group(&config.snapshot_dir, selector)?;

    for err in &outcome.errors {
        tracing::warn!(path = %err.path().display(), "skipping snapshot: {err}");
    }

    let loaded = outcome.entries.len();
    let skipped = outcome.errors.len();

    match Sequence::from_entries(outcome.entries) {
        Some(sequence) => {
            tracing::info!(selector, loaded, skipped, "sequenced snapshots");
            Ok(sequence)
        }
        None => Err(ViewerError::NoSnapshots {
            selector: selector.to_string(),
            dir: config.snapshot_dir.clone(),
        }),
    }
}
