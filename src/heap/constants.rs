//! Geometry and classification constants for the heap diagram
//!
//! All positions are in canvas world coordinates: x runs from 0 to 1 across
//! the heap pane, y runs from 0 (bottom of the first block) up to the stack
//! height plus headroom.

/// Free blocks at or above this size are drawn as coalesced regions
pub const COALESCED_THRESHOLD: i64 = 4096;

/// A block is labelled only when taller than this fraction of the stack
pub const LABEL_MIN_FRACTION: f64 = 0.03;

/// Empty space above the stack, as a fraction of its height
pub const HEADROOM_FRACTION: f64 = 0.05;

pub const BLOCK_LEFT: f64 = 0.05;
pub const BLOCK_RIGHT: f64 = 0.60;

/// Lane x positions, in lane order: prev-free, next-free, prev-used, next-used
pub const LANE_X: [f64; 4] = [0.66, 0.74, 0.82, 0.90];

/// Where a "next" edge meets a block, measured up from its bottom edge
pub const NEXT_ANCHOR_FRACTION: f64 = 0.3;

/// Where a "previous" edge meets a block, measured up from its bottom edge
pub const PREV_ANCHOR_FRACTION: f64 = 0.7;

/// Edge opacity over the pane background
pub const EDGE_ALPHA: f64 = 0.8;

/// Arrowhead extent: x in world units, y as a fraction of the y range
pub const ARROW_DX: f64 = 0.02;
pub const ARROW_DY_FRACTION: f64 = 0.012;
