//! Heap pane: the stacked block diagram with its free-list overlay
//!
//! The pane lays out the current snapshot (see [`crate::heap::layout`]),
//! paints the blocks and free-list edges onto a half-block canvas, and then
//! draws the size labels as ordinary widgets on top so they can be
//! hit-tested.
//!
//! # Display
//!
//! - Red blocks are in use, light green blocks are free, dark green blocks
//!   are free regions of at least 4 KB (usually coalesced neighbours)
//! - Solid edges follow `next` links, dashed edges follow `prev` links
//! - Edge color tells whether the link leaves a free or a used block
//!
//! The returned [`HoverLabel`]s describe where each label ended up; the app
//! keeps them for pointer-motion handling until the next render.

use super::shapes::{FilledRect, Polyline};
use crate::heap::constants::{BLOCK_LEFT, BLOCK_RIGHT, EDGE_ALPHA, HEADROOM_FRACTION};
use crate::heap::{derive_edges, layout_blocks, BlockClass, BlockPrimitive, Edge};
use crate::playback::{HoverLabel, LabelMode};
use crate::snapshot::Snapshot;
use crate::ui::theme::{blend, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{canvas::Canvas, Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the heap pane
pub struct HeapRenderData<'a> {
    pub snapshot: &'a Snapshot,
    pub title: &'a str,
    /// Modes of the labels drawn last time for this frame; missing entries are raw
    pub label_modes: &'a [LabelMode],
}

pub fn block_color(class: BlockClass) -> Color {
    match class {
        BlockClass::Used => DEFAULT_THEME.used_block,
        BlockClass::Free => DEFAULT_THEME.free_block,
        BlockClass::Coalesced => DEFAULT_THEME.coalesced_block,
    }
}

/// Stroke color of an edge, pre-blended for translucency
pub fn edge_color(edge: &Edge) -> Color {
    let base = if edge.source_free() {
        DEFAULT_THEME.edge_free
    } else {
        DEFAULT_THEME.edge_used
    };
    blend(base, DEFAULT_THEME.bg, EDGE_ALPHA)
}

/// Render the heap pane and report where its labels were drawn
pub fn render_heap_pane(frame: &mut Frame, area: Rect, data: HeapRenderData) -> Vec<HoverLabel> {
    let block = Block::default()
        .title(format!(" {} ", data.title))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);

    let layout = layout_blocks(data.snapshot);
    if layout.is_empty() {
        let paragraph = Paragraph::new("(no blocks)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return Vec::new();
    }

    let edges = derive_edges(&data.snapshot.blocks, &layout.index);
    let y_max = layout.total_height * (1.0 + HEADROOM_FRACTION);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::HalfBlock)
        .background_color(DEFAULT_THEME.bg)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, y_max])
        .paint(|ctx| {
            for primitive in &layout.primitives {
                ctx.draw(&FilledRect {
                    x: primitive.rect.x,
                    y: primitive.rect.y,
                    width: primitive.rect.width,
                    height: primitive.rect.height,
                    color: block_color(primitive.class),
                    edge: Some(DEFAULT_THEME.block_edge),
                });
            }

            // Edges go on the same layer so they overwrite fill pixels
            for edge in &edges {
                let color = edge_color(edge);
                ctx.draw(&Polyline {
                    points: edge.path().to_vec(),
                    color,
                    dashed: edge.kind.is_dashed(),
                });
                for stroke in edge.arrowhead(y_max) {
                    ctx.draw(&Polyline {
                        points: stroke.to_vec(),
                        color,
                        dashed: false,
                    });
                }
            }
        });
    frame.render_widget(canvas, area);

    let labels = place_labels(&layout.primitives, inner, y_max, data.label_modes);
    for (label, class) in &labels {
        let paragraph = Paragraph::new(label.text())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.label)
                    .bg(block_color(*class))
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(paragraph, label.region);
    }

    labels.into_iter().map(|(label, _)| label).collect()
}

/// Screen regions for every labelled block, centered on the block
fn place_labels(
    primitives: &[BlockPrimitive],
    inner: Rect,
    y_max: f64,
    modes: &[LabelMode],
) -> Vec<(HoverLabel, BlockClass)> {
    if inner.width == 0 || inner.height == 0 {
        return Vec::new();
    }

    let left = project_col(inner, BLOCK_LEFT);
    let right = project_col(inner, BLOCK_RIGHT);
    let span = right - left + 1;

    primitives
        .iter()
        .filter_map(|primitive| Some((primitive.label.as_ref()?, primitive.class)))
        .enumerate()
        .map(|(i, (size_label, class))| {
            let text_width = size_label
                .raw
                .chars()
                .count()
                .max(size_label.human.chars().count()) as u16;
            let width = text_width.min(span);
            let region = Rect::new(
                left + (span - width) / 2,
                project_row(inner, size_label.center_y, y_max),
                width,
                1,
            );

            let mut label = HoverLabel::new(region, &size_label.raw, &size_label.human);
            label.mode = modes.get(i).copied().unwrap_or_default();
            (label, class)
        })
        .collect()
}

/// Terminal column of world x (0..=1) inside `inner`
fn project_col(inner: Rect, x: f64) -> u16 {
    let span = inner.width.saturating_sub(1) as f64;
    inner.x + (x.clamp(0.0, 1.0) * span).round() as u16
}

/// Terminal row of world y (0..=y_max, growing upwards) inside `inner`
fn project_row(inner: Rect, y: f64, y_max: f64) -> u16 {
    let from_top = (1.0 - y / y_max).clamp(0.0, 1.0);
    let row = (from_top * inner.height as f64).floor() as u16;
    inner.y + row.min(inner.height - 1)
}
