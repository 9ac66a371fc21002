//! Canvas shapes for the heap diagram
//!
//! ratatui's built-in canvas shapes only outline rectangles and draw solid
//! lines. The heap pane needs filled blocks and dashed links, so both are
//! implemented here on top of [`Painter`].

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Painted and skipped pixel run lengths of a dashed line
const DASH_ON: usize = 2;
const DASH_OFF: usize = 2;

/// A solid rectangle with an optional separator along its top edge.
///
/// `y` is the bottom edge in world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub edge: Option<Color>,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        // Grid rows grow downwards: the top edge maps to the smaller row
        let Some((left, top)) = painter.get_point(self.x, self.y + self.height) else {
            return;
        };
        let Some((right, bottom)) = painter.get_point(self.x + self.width, self.y) else {
            return;
        };

        for row in top..=bottom {
            let color = match self.edge {
                Some(edge) if row == top && bottom - top >= 2 => edge,
                _ => self.color,
            };
            for col in left..=right {
                painter.paint(col, row, color);
            }
        }
    }
}

/// Connected line segments, solid or dashed
#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub dashed: bool,
}

impl Shape for Polyline {
    fn draw(&self, painter: &mut Painter) {
        // The dash pattern runs continuously around corners
        let mut step = 0usize;

        for segment in self.points.windows(2) {
            let (Some(from), Some(to)) = (
                painter.get_point(segment[0].0, segment[0].1),
                painter.get_point(segment[1].0, segment[1].1),
            ) else {
                continue;
            };

            rasterize(from, to, |col, row| {
                if !self.dashed || step % (DASH_ON + DASH_OFF) < DASH_ON {
                    painter.paint(col, row, self.color);
                }
                step += 1;
            });
        }
    }
}

/// Bresenham walk over the grid points from `from` to `to`, inclusive
fn rasterize(from: (usize, usize), to: (usize, usize), mut visit: impl FnMut(usize, usize)) {
    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        visit(x as usize, y as usize);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::symbols::Marker;
    use ratatui::widgets::canvas::Canvas;
    use ratatui::widgets::Widget;

    fn render<S: Shape>(shape: &S, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, 1.0])
            .y_bounds([0.0, 1.0])
            .paint(|ctx| ctx.draw(shape))
            .render(area, &mut buffer);
        buffer
    }

    fn painted_cells(buffer: &Buffer) -> usize {
        buffer
            .content
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count()
    }

    #[test]
    fn test_rasterize_covers_endpoints() {
        let mut points = Vec::new();
        rasterize((0, 0), (3, 2), |x, y| points.push((x, y)));

        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(3, 2)));
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_rasterize_reverse_direction() {
        let mut points = Vec::new();
        rasterize((4, 1), (0, 1), |x, y| points.push((x, y)));
        assert_eq!(points, vec![(4, 1), (3, 1), (2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn test_filled_rect_fills_its_area() {
        let rect = FilledRect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            color: Color::Red,
            edge: None,
        };
        let buffer = render(&rect, 10, 4);
        assert_eq!(painted_cells(&buffer), 40);
    }

    #[test]
    fn test_filled_rect_lower_half_only() {
        let rect = FilledRect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 0.4,
            color: Color::Red,
            edge: None,
        };
        let buffer = render(&rect, 10, 10);
        let top_row_painted = (0..10).any(|x| buffer.content[x].symbol() != " ");
        let bottom_row_painted = (0..10).all(|x| buffer.content[90 + x].symbol() != " ");

        assert!(!top_row_painted);
        assert!(bottom_row_painted);
    }

    #[test]
    fn test_dashed_line_skips_pixels() {
        let solid = Polyline {
            points: vec![(0.0, 0.5), (1.0, 0.5)],
            color: Color::Yellow,
            dashed: false,
        };
        let dashed = Polyline {
            dashed: true,
            ..solid.clone()
        };

        let solid_cells = painted_cells(&render(&solid, 20, 3));
        let dashed_cells = painted_cells(&render(&dashed, 20, 3));

        assert_eq!(solid_cells, 20);
        assert!(dashed_cells > 0);
        assert!(dashed_cells < solid_cells);
    }
}
