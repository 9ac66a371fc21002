//! Heap statistics pane with a color legend

use crate::format::format_bytes;
use crate::snapshot::Stats;
use crate::ui::theme::{blend, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub const STATS_TITLE: &str = "*** Heap Stats ***";

/// Label/value rows shown under the title
pub fn stats_fields(stats: &Stats) -> [(&'static str, String); 4] {
    [
        ("Used Mem ", format_bytes(stats.total_used_mem)),
        ("Free Mem ", format_bytes(stats.total_free_mem)),
        ("Used Blks", stats.num_used_blocks.to_string()),
        ("Free Blks", stats.num_free_blocks.to_string()),
    ]
}

/// Render the stats pane
pub fn render_stats_pane(frame: &mut Frame, area: Rect, stats: &Stats) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    let mut lines = vec![
        Line::from(Span::styled(
            STATS_TITLE,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (label, value) in stats_fields(stats) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} : ", label),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
    }

    lines.push(Line::default());
    lines.extend(legend_lines());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}

fn legend_lines() -> Vec<Line<'static>> {
    let swatch = |color, text: &'static str| {
        Line::from(vec![
            Span::styled("██ ", Style::default().fg(color)),
            Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
        ])
    };
    let stroke = |color, glyph: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(glyph, Style::default().fg(blend(color, DEFAULT_THEME.bg, 0.8))),
            Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
        ])
    };

    vec![
        swatch(DEFAULT_THEME.used_block, "used"),
        swatch(DEFAULT_THEME.free_block, "free"),
        swatch(DEFAULT_THEME.coalesced_block, "free ≥ 4 KB"),
        Line::default(),
        stroke(DEFAULT_THEME.edge_free, "─▶ ", "next (from free)"),
        stroke(DEFAULT_THEME.edge_used, "─▶ ", "next (from used)"),
        stroke(DEFAULT_THEME.edge_free, "╌▶ ", "prev (from free)"),
        stroke(DEFAULT_THEME.edge_used, "╌▶ ", "prev (from used)"),
    ]
}
