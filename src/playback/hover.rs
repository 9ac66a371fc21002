//! Hover-toggled size labels
//!
//! The heap pane returns one [`HoverLabel`] per label it drew: where it is on
//! screen and both of its texts. The app keeps them in [`HoverLabels`] and
//! feeds pointer motion through it. Moving the pointer onto a label flips
//! that label between its raw byte count and its scaled form; moving off and
//! back on flips it again. Labels are rebuilt in raw form whenever the frame
//! changes.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// `8,192 B`
    #[default]
    Raw,
    /// `8.00 KB`
    Human,
}

impl LabelMode {
    pub fn toggled(self) -> Self {
        match self {
            LabelMode::Raw => LabelMode::Human,
            LabelMode::Human => LabelMode::Raw,
        }
    }
}

/// A drawn label and its screen region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverLabel {
    pub region: Rect,
    pub raw: String,
    pub human: String,
    pub mode: LabelMode,
}

impl HoverLabel {
    pub fn new(region: Rect, raw: impl Into<String>, human: impl Into<String>) -> Self {
        HoverLabel {
            region,
            raw: raw.into(),
            human: human.into(),
            mode: LabelMode::Raw,
        }
    }

    /// The text currently shown
    pub fn text(&self) -> &str {
        match self.mode {
            LabelMode::Raw => &self.raw,
            LabelMode::Human => &self.human,
        }
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        region_contains(self.region, column, row)
    }
}

/// Whether the terminal cell at `column`, `row` lies inside `region`
pub fn region_contains(region: Rect, column: u16, row: u16) -> bool {
    column >= region.x
        && column < region.x.saturating_add(region.width)
        && row >= region.y
        && row < region.y.saturating_add(region.height)
}

/// Labels of the frame on screen, plus which one the pointer is over
#[derive(Debug, Clone, Default)]
pub struct HoverLabels {
    labels: Vec<HoverLabel>,
    hovered: Option<usize>,
}

impl HoverLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[HoverLabel] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&HoverLabel> {
        self.labels.get(index)
    }

    /// Display mode of every label, in draw order
    pub fn modes(&self) -> Vec<LabelMode> {
        self.labels.iter().map(|label| label.mode).collect()
    }

    /// Take the labels produced by the latest render of the same frame
    pub fn replace(&mut self, labels: Vec<HoverLabel>) {
        if self.hovered.is_some_and(|i| i >= labels.len()) {
            self.hovered = None;
        }
        self.labels = labels;
    }

    /// Forget everything; the next render starts from raw labels
    pub fn reset(&mut self) {
        self.labels.clear();
        self.hovered = None;
    }

    /// Handle pointer motion. Returns whether a label was toggled.
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> bool {
        let under = self
            .labels
            .iter()
            .position(|label| label.contains(column, row));

        if under == self.hovered {
            return false;
        }
        self.hovered = under;

        match under {
            Some(index) => {
                self.labels[index].toggle();
                tracing::trace!(index, text = self.labels[index].text(), "label toggled");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> HoverLabels {
        let mut labels = HoverLabels::new();
        labels.replace(vec![
            HoverLabel::new(Rect::new(10, 5, 8, 1), "8,192 B", "8.00 KB"),
            HoverLabel::new(Rect::new(10, 12, 7, 1), "2,048 B", "2.00 KB"),
        ]);
        labels
    }

    #[test]
    fn test_hover_toggles_and_toggles_back() {
        let mut labels = labels();

        assert!(labels.pointer_moved(12, 5));
        assert_eq!(labels.get(0).unwrap().text(), "8.00 KB");
        assert_eq!(labels.get(1).unwrap().text(), "2,048 B");

        // still over the same label
        assert!(!labels.pointer_moved(13, 5));
        assert_eq!(labels.get(0).unwrap().text(), "8.00 KB");

        assert!(!labels.pointer_moved(0, 0));
        assert!(labels.pointer_moved(17, 5));
        assert_eq!(labels.get(0).unwrap().text(), "8,192 B");
        assert_eq!(labels.get(1).unwrap().text(), "2,048 B");
    }

    #[test]
    fn test_moving_between_labels() {
        let mut labels = labels();

        labels.pointer_moved(10, 5);
        assert!(labels.pointer_moved(10, 12));
        assert_eq!(labels.modes(), vec![LabelMode::Human, LabelMode::Human]);
    }

    #[test]
    fn test_region_edges() {
        let label = HoverLabel::new(Rect::new(10, 5, 8, 1), "a", "b");
        assert!(label.contains(10, 5));
        assert!(label.contains(17, 5));
        assert!(!label.contains(18, 5));
        assert!(!label.contains(9, 5));
        assert!(!label.contains(10, 6));
    }

    #[test]
    fn test_reset_returns_to_raw() {
        let mut labels = labels();
        labels.pointer_moved(10, 5);
        labels.reset();

        assert!(labels.labels().is_empty());
        assert!(labels.modes().is_empty());
    }
}
