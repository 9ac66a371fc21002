//! Free-list pointer overlay
//!
//! Every rendered block may carry a "next" and a "previous" free-list link.
//! Each link that resolves to another rendered block in the same snapshot
//! becomes an [`Edge`]: a three-segment path leaving the source block's right
//! side, running vertically in one of four lanes, and entering the target
//! block from the right with an arrowhead.
//!
//! Links are skipped without complaint when the target is the null sentinel,
//! the source block itself, or an offset the layout index does not know
//! (stale pointers, or blocks with a non-positive size). Captures of a live
//! allocator are not always consistent and the overlay must still draw.
//!
//! # Lanes
//!
//! ```text
//!  block │ prev-free │ next-free │ prev-used │ next-used
//!  ──────┤    ╎      │    │      │    ╎      │    │
//! ```
//!
//! "Next" edges attach 30% of the way up a block and "previous" edges 70%
//! of the way up, leaving the middle clear for the size label.

use super::constants::{
    ARROW_DX, ARROW_DY_FRACTION, BLOCK_RIGHT, LANE_X, NEXT_ANCHOR_FRACTION, PREV_ANCHOR_FRACTION,
};
use super::layout::{BlockClass, LayoutIndex};
use crate::snapshot::Block;

/// Which free-list field an edge comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Next,
    Prev,
}

impl LinkKind {
    pub fn anchor_fraction(self) -> f64 {
        match self {
            LinkKind::Next => NEXT_ANCHOR_FRACTION,
            LinkKind::Prev => PREV_ANCHOR_FRACTION,
        }
    }

    /// Previous links are dashed, next links solid
    pub fn is_dashed(self) -> bool {
        matches!(self, LinkKind::Prev)
    }

    fn target(self, block: &Block) -> Option<u64> {
        match self {
            LinkKind::Next => block.next_link(),
            LinkKind::Prev => block.prev_link(),
        }
    }
}

/// Vertical track an edge runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    PrevFree,
    NextFree,
    PrevUsed,
    NextUsed,
}

impl Lane {
    pub fn for_link(kind: LinkKind, source_free: bool) -> Self {
        match (kind, source_free) {
            (LinkKind::Prev, true) => Lane::PrevFree,
            (LinkKind::Next, true) => Lane::NextFree,
            (LinkKind::Prev, false) => Lane::PrevUsed,
            (LinkKind::Next, false) => Lane::NextUsed,
        }
    }

    pub fn x(self) -> f64 {
        LANE_X[self as usize]
    }
}

/// A drawable free-list link between two rendered blocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: u64,
    pub target: u64,
    pub kind: LinkKind,
    pub source_class: BlockClass,
    pub lane: Lane,
    pub source_y: f64,
    pub target_y: f64,
}

impl Edge {
    pub fn source_free(&self) -> bool {
        self.source_class.is_free()
    }

    /// Orthogonal path from the source block, through the lane, into the target
    pub fn path(&self) -> [(f64, f64); 4] {
        let lane_x = self.lane.x();
        [
            (BLOCK_RIGHT, self.source_y),
            (lane_x, self.source_y),
            (lane_x, self.target_y),
            (BLOCK_RIGHT, self.target_y),
        ]
    }

    /// The two strokes of the arrowhead at the target end.
    ///
    /// `y_range` is the height of the drawing area in world units, so the
    /// arrowhead keeps the same on-screen size for every snapshot.
    pub fn arrowhead(&self, y_range: f64) -> [[(f64, f64); 2]; 2] {
        let tip = (BLOCK_RIGHT, self.target_y);
        let dy = y_range * ARROW_DY_FRACTION;
        [
            [tip, (BLOCK_RIGHT + ARROW_DX, self.target_y + dy)],
            [tip, (BLOCK_RIGHT + ARROW_DX, self.target_y - dy)],
        ]
    }
}

/// Resolve the free-list links of every rendered block against `index`.
pub fn derive_edges(blocks: &[Block], index: &LayoutIndex<'_>) -> Vec<Edge> {
    let mut edges = Vec::new();

    for block in blocks.iter().filter(|b| b.is_rendered()) {
        let Some(source) = index.get(block.offset) else {
            continue;
        };
        let source_class = BlockClass::classify(block);

        for kind in [LinkKind::Next, LinkKind::Prev] {
            let Some(target_offset) = kind.target(block) else {
                continue;
            };
            if target_offset == block.offset {
                continue;
            }
            let Some(target) = index.get(target_offset) else {
                tracing::trace!(
                    source = block.offset,
                    target = target_offset,
                    "dangling free-list link"
                );
                continue;
            };

            let fraction = kind.anchor_fraction();
            edges.push(Edge {
                source: block.offset,
                target: target_offset,
                kind,
                source_class,
                lane: Lane::for_link(kind, source_class.is_free()),
                source_y: source.anchor_y(fraction),
                target_y: target.anchor_y(fraction),
            });
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::layout::layout_blocks;
    use crate::snapshot::{Snapshot, Stats};

    fn block(offset: u64, size: i64, free: bool, next: u64, prev: u64) -> Block {
        Block {
            offset,
            size,
            free,
            next_offset: next,
            prev_offset: prev,
        }
    }

    fn edges_of(blocks: Vec<Block>) -> Vec<Edge> {
        let snapshot = Snapshot {
            step: None,
            blocks,
            stats: Stats::default(),
        };
        let layout = layout_blocks(&snapshot);
        derive_edges(&snapshot.blocks, &layout.index)
    }

    #[test]
    fn test_doubly_linked_free_blocks() {
        let edges = edges_of(vec![
            block(100, 100, true, 300, 0),
            block(200, 100, false, 0, 0),
            block(300, 100, true, 0, 100),
        ]);

        assert_eq!(edges.len(), 2);

        let next = edges[0];
        assert_eq!((next.source, next.target), (100, 300));
        assert_eq!(next.kind, LinkKind::Next);
        assert_eq!(next.lane, Lane::NextFree);
        assert!((next.source_y - 30.0).abs() < 1e-9);
        assert!((next.target_y - 230.0).abs() < 1e-9);

        let prev = edges[1];
        assert_eq!((prev.source, prev.target), (300, 100));
        assert_eq!(prev.kind, LinkKind::Prev);
        assert_eq!(prev.lane, Lane::PrevFree);
        assert!((prev.source_y - 270.0).abs() < 1e-9);
        assert!((prev.target_y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_suppressed_links() {
        let edges = edges_of(vec![
            // self loop
            block(10, 50, true, 10, 10),
            // dangling target
            block(20, 50, true, 999, 0),
            // target has no size
            block(30, 50, false, 40, 0),
            block(40, 0, true, 0, 30),
        ]);

        assert!(edges.is_empty());
    }

    #[test]
    fn test_unrendered_source_draws_nothing() {
        let edges = edges_of(vec![block(10, -4, true, 20, 20), block(20, 64, true, 0, 0)]);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_lanes_follow_kind_and_class() {
        let edges = edges_of(vec![
            block(1, 100, false, 2, 2),
            block(2, 5000, true, 1, 1),
        ]);

        let lanes: Vec<_> = edges.iter().map(|e| e.lane).collect();
        assert_eq!(
            lanes,
            vec![Lane::NextUsed, Lane::PrevUsed, Lane::NextFree, Lane::PrevFree]
        );
        assert_eq!(edges[2].source_class, BlockClass::Coalesced);
        assert!(edges[2].source_free());
        assert!(!edges[0].source_free());
    }

    #[test]
    fn test_lane_positions_are_distinct_and_right_of_blocks() {
        let xs = [
            Lane::PrevFree.x(),
            Lane::NextFree.x(),
            Lane::PrevUsed.x(),
            Lane::NextUsed.x(),
        ];
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(xs[0] > BLOCK_RIGHT);
    }

    #[test]
    fn test_path_and_arrowhead() {
        let edges = edges_of(vec![
            block(1, 100, true, 2, 0),
            block(2, 100, true, 0, 0),
        ]);
        let edge = edges[0];
        let path = edge.path();

        assert_eq!(path[0].0, BLOCK_RIGHT);
        assert_eq!(path[1].0, Lane::NextFree.x());
        assert_eq!(path[2], (Lane::NextFree.x(), edge.target_y));
        assert_eq!(path[3], (BLOCK_RIGHT, edge.target_y));

        let head = edge.arrowhead(200.0);
        assert_eq!(head[0][0], (BLOCK_RIGHT, edge.target_y));
        assert!(head[0][1].1 > edge.target_y);
        assert!(head[1][1].1 < edge.target_y);
    }

    #[test]
    fn test_prev_links_are_dashed() {
        assert!(LinkKind::Prev.is_dashed());
        assert!(!LinkKind::Next.is_dashed());
    }
}
