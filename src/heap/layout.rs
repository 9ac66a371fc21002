//! Block layout: stacking a snapshot's blocks into rectangles
//!
//! Blocks are stacked bottom-up in the order the snapshot lists them (capture
//! order, not address order), each as tall as its size in bytes. Blocks with
//! a non-positive size are skipped entirely.
//!
//! [`layout_blocks`] returns both the drawable [`BlockPrimitive`]s and a
//! [`LayoutIndex`] the pointer overlay uses to find where each offset landed.
//! Both borrow from the snapshot and live only as long as one frame's render.

use super::constants::{BLOCK_LEFT, BLOCK_RIGHT, COALESCED_THRESHOLD, LABEL_MIN_FRACTION};
use crate::snapshot::{Block, Snapshot};
use crate::format::{format_byte_count, format_bytes};
use rustc_hash::FxHashMap;

/// Visual class of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockClass {
    Used,
    Free,
    /// Free and at least [`COALESCED_THRESHOLD`] bytes
    Coalesced,
}

impl BlockClass {
    pub fn classify(block: &Block) -> Self {
        match (block.free, block.size >= COALESCED_THRESHOLD) {
            (false, _) => BlockClass::Used,
            (true, true) => BlockClass::Coalesced,
            (true, false) => BlockClass::Free,
        }
    }

    pub fn is_free(self) -> bool {
        !matches!(self, BlockClass::Used)
    }
}

/// Axis-aligned rectangle in world coordinates; `y` is the bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BlockRect {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Size label of a block in both of its display forms
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLabel {
    pub center_y: f64,
    /// Byte count with thousands separators, e.g. `8,192 B`
    pub raw: String,
    /// Scaled form, e.g. `8.00 KB`
    pub human: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockPrimitive {
    pub offset: u64,
    pub rect: BlockRect,
    pub class: BlockClass,
    pub label: Option<SizeLabel>,
}

/// Where a block landed in the stack
#[derive(Debug, Clone, Copy)]
pub struct IndexEntry<'a> {
    pub center_y: f64,
    pub block: &'a Block,
}

impl IndexEntry<'_> {
    /// Height `fraction` of the way up the block
    pub fn anchor_y(&self, fraction: f64) -> f64 {
        let height = self.block.height() as f64;
        let bottom = self.center_y - height / 2.0;
        bottom + fraction * height
    }
}

/// Offset lookup for one frame's layout
#[derive(Debug, Default)]
pub struct LayoutIndex<'a> {
    entries: FxHashMap<u64, IndexEntry<'a>>,
}

impl<'a> LayoutIndex<'a> {
    pub fn get(&self, offset: u64) -> Option<&IndexEntry<'a>> {
        self.entries.get(&offset)
    }

    pub fn contains(&self, offset: u64) -> bool {
        self.entries.contains_key(&offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Geometry of one snapshot
#[derive(Debug)]
pub struct BlockLayout<'a> {
    pub primitives: Vec<BlockPrimitive>,
    pub index: LayoutIndex<'a>,
    /// Sum of the sizes of all rendered blocks, i.e. the top of the stack
    pub total_height: f64,
}

impl BlockLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Stack `snapshot`'s blocks and build the offset index.
pub fn layout_blocks(snapshot: &Snapshot) -> BlockLayout<'_> {
    // Summed in f64 like the stacking cursor, so huge sizes cannot overflow
    let total_height: f64 = snapshot
        .blocks
        .iter()
        .map(|block| block.height() as f64)
        .sum();
    let min_label_height = total_height * LABEL_MIN_FRACTION;

    let mut primitives = Vec::with_capacity(snapshot.blocks.len());
    let mut index = LayoutIndex::default();
    let mut cursor = 0.0;

    for block in snapshot.blocks.iter().filter(|b| b.is_rendered()) {
        let height = block.height() as f64;
        let rect = BlockRect {
            x: BLOCK_LEFT,
            y: cursor,
            width: BLOCK_RIGHT - BLOCK_LEFT,
            height,
        };

        let label = (height > min_label_height).then(|| SizeLabel {
            center_y: rect.center_y(),
            raw: format_byte_count(block.height()),
            human: format_bytes(block.height()),
        });

        // Duplicate offsets are a capture anomaly; the last one wins
        index.entries.insert(
            block.offset,
            IndexEntry {
                center_y: rect.center_y(),
                block,
            },
        );

        primitives.push(BlockPrimitive {
            offset: block.offset,
            rect,
            class: BlockClass::classify(block),
            label,
        });

        cursor += height;
    }

    BlockLayout {
        primitives,
        index,
        total_height,
    }
}
