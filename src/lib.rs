//! # Introduction
//!
//! heapviz plays back a series of heap allocator snapshots as an animation in
//! the terminal. Each snapshot is a JSON record of the allocator's blocks and
//! counters; a group of them (all files sharing a prefix such as `Test07_`)
//! is ordered by capture step and looped, one frame per tick.
//!
//! ## Pipeline
//!
//! ```text
//! JSON files → Loader → Sequencer → Playback → Layout + Overlay → TUI
//! ```
//!
//! 1. [`snapshot`]: the record format, loading a group from disk, and
//!    ordering it into a [`snapshot::Sequence`].
//! 2. [`playback`]: the play/pause state machine and hover-toggled labels.
//! 3. [`heap`]: turns one snapshot into stacked block rectangles and the
//!    free-list edges drawn beside them.
//! 4. [`ui`]: ratatui viewer, selection menu, and panes.
//! 5. [`launcher`]: runs a viewer process for a group picked in the menu.
//!
//! [`cli`] ties these together; [`config`], [`error`], [`format`], and
//! [`logging`] are shared by all of them.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod heap;
pub mod launcher;
pub mod logging;
pub mod playback;
pub mod snapshot;
pub mod ui;
