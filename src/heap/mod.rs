//! Heap diagram geometry
//!
//! This module turns one [`Snapshot`](crate::snapshot::Snapshot) into
//! terminal-independent geometry:
//!
//! - [`layout`]: stacked block rectangles, their color class and size label,
//!   plus the per-frame [`LayoutIndex`] from offset to position
//! - [`overlay`]: free-list [`Edge`]s resolved through that index
//! - [`constants`]: thresholds, lane positions and anchor fractions
//!
//! Nothing here knows about ratatui; the heap pane maps this geometry onto a
//! canvas.

pub mod constants;
pub mod layout;
pub mod overlay;

pub use layout::{layout_blocks, BlockClass, BlockLayout, BlockPrimitive, BlockRect, LayoutIndex};
pub use overlay::{derive_edges, Edge, Lane, LinkKind};
