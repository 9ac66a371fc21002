//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`heap`]: stacked block diagram with the free-list overlay and hoverable
//!   size labels
//! - [`stats`]: aggregate heap counters and a color legend
//! - [`status`]: status bar with frame position, keybindings and the
//!   pause/play button
//! - [`shapes`]: canvas shapes (filled rectangles, dashed polylines)
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function. Panes that the
//! user can interact with return where their interactive parts ended up on
//! screen (label regions, button area) instead of holding on to state.

pub mod heap;
pub mod shapes;
pub mod stats;
pub mod status;

pub use heap::{render_heap_pane, HeapRenderData};
pub use stats::render_stats_pane;
pub use status::{render_status_bar, StatusRenderData};
