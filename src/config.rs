//! Runtime configuration shared by the viewer, the menu, and the launcher

use std::path::PathBuf;
use std::time::Duration;

/// Directory searched for snapshot files when none is given
pub const DEFAULT_SNAPSHOT_DIR: &str = "Heap_VisualLogs";

/// Time between playback ticks
pub const DEFAULT_INTERVAL_MS: u64 = 1500;

/// Where snapshots come from and how fast they play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub snapshot_dir: PathBuf,
    pub interval: Duration,
}

impl ViewerConfig {
    pub fn new(snapshot_dir: impl Into<PathBuf>, interval: Duration) -> Self {
        ViewerConfig {
            snapshot_dir: snapshot_dir.into(),
            interval,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SNAPSHOT_DIR,
            Duration::from_millis(DEFAULT_INTERVAL_MS),
        )
    }
}
