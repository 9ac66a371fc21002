//! Ordering loaded snapshots into a playback sequence

use super::{Snapshot, SnapshotEntry};

/// Sort key of a frame.
///
/// Every `Step` sorts before `Unstepped`, so snapshots without a step play last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderKey {
    Step(i64),
    Unstepped,
}

impl OrderKey {
    pub fn of(snapshot: &Snapshot) -> Self {
        snapshot.step.map_or(OrderKey::Unstepped, OrderKey::Step)
    }
}

/// One sequenced snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub label: String,
    pub order_key: OrderKey,
}

/// The frames of one group, in playback order. Never empty.
#[derive(Debug, Clone)]
pub struct Sequence {
    frames: Vec<Frame>,
}

impl Sequence {
    /// Order `entries` by step, keeping encounter order among equal keys.
    ///
    /// Returns `None` when there is nothing to play.
    pub fn from_entries(entries: impl IntoIterator<Item = SnapshotEntry>) -> Option<Self> {
        let mut frames: Vec<Frame> = entries
            .into_iter()
            .map(|entry| Frame {
                order_key: OrderKey::of(&entry.snapshot),
                snapshot: entry.snapshot,
                label: entry.label,
            })
            .collect();

        if frames.is_empty() {
            return None;
        }

        // sort_by_key is stable
        frames.sort_by_key(|frame| frame.order_key);
        Some(Sequence { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|frame| frame.label.as_str())
    }
}
