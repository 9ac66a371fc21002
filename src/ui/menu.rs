//! Snapshot group selection menu
//!
//! Lists every selector found in the snapshot directory. Enter loads the
//! highlighted group once in-process, then hands the terminal to a viewer
//! process for it and takes it back when that process exits. A group with no
//! usable snapshots, or a viewer that fails, is shown in a modal on top of
//! the list until the next key press.

use super::theme::DEFAULT_THEME;
use super::tty;
use crate::config::ViewerConfig;
use crate::launcher::Launcher;
use crate::snapshot::open_group;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame, Terminal,
};
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

pub const MENU_TITLE: &str = " Select a Heap Snapshot Group ";
pub const LAUNCH_FAILED_TITLE: &str = " Launch Failed ";

/// What the caller should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Quit,
    Launch(String),
}

pub struct Menu {
    /// Selectors in display order
    pub selectors: Vec<String>,

    /// Index of the highlighted selector
    pub selected: usize,

    /// First visible row of the list
    pub scroll_offset: usize,

    /// Text of the launch failure being shown, if any
    pub error: Option<String>,

    /// Directory the selectors were found in
    pub snapshot_dir: PathBuf,

    pub should_quit: bool,
}

impl Menu {
    pub fn new(selectors: Vec<String>, snapshot_dir: impl Into<PathBuf>) -> Self {
        Menu {
            selectors,
            selected: 0,
            scroll_offset: 0,
            error: None,
            snapshot_dir: snapshot_dir.into(),
            should_quit: false,
        }
    }

    pub fn selected_selector(&self) -> Option<&str> {
        self.selectors.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.selectors.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn show_error(&mut self, err: &impl Display) {
        self.error = Some(err.to_string());
    }

    /// Load `selector` from `config`'s directory before launching a viewer.
    ///
    /// A group that cannot be played (nothing parses, unreadable directory)
    /// opens the failure modal and returns false.
    pub fn check_group(&mut self, config: &ViewerConfig, selector: &str) -> bool {
        match open_group(config, selector) {
            Ok(_) => true,
            Err(err) => {
                tracing::error!(selector, "{err}");
                self.show_error(&err);
                false
            }
        }
    }

    /// Run the menu until the user quits
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        launcher: &Launcher,
    ) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let MenuAction::Launch(selector) = self.handle_key_event(key) {
                    self.launch(terminal, launcher, &selector)?;
                }
            }
        }

        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        Ok(())
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> MenuAction {
        // Any key dismisses the failure modal
        if self.error.take().is_some() {
            return MenuAction::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                MenuAction::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                MenuAction::Quit
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                MenuAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                MenuAction::None
            }
            KeyCode::Enter => match self.selected_selector() {
                Some(selector) => MenuAction::Launch(selector.to_string()),
                None => MenuAction::None,
            },
            _ => MenuAction::None,
        }
    }

    fn launch<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        launcher: &Launcher,
        selector: &str,
    ) -> io::Result<()> {
        if !self.check_group(launcher.config(), selector) {
            return Ok(());
        }

        tty::suspend(terminal)?;
        let result = launcher.run(selector);
        tty::resume(terminal)?;

        if let Err(err) = result {
            tracing::error!(selector, "{err}");
            self.show_error(&err);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        self.render_list(frame, chunks[0]);
        render_hints(frame, chunks[1]);

        if let Some(message) = &self.error {
            render_error_modal(frame, message);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(MENU_TITLE)
            .title_bottom(format!(" {}/ ", self.snapshot_dir.display()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(DEFAULT_THEME.bg));

        let visible_height = area.height.saturating_sub(2).max(1) as usize;

        // Keep the highlighted row on screen
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected + 1 - visible_height;
        }

        let items: Vec<ListItem> = self
            .selectors
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_height)
            .map(|(i, selector)| {
                if i == self.selected {
                    ListItem::new(Line::from(vec![
                        Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.primary)),
                        Span::styled(
                            selector.as_str(),
                            Style::default()
                                .fg(DEFAULT_THEME.fg)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]))
                    .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
                } else {
                    ListItem::new(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(selector.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
                    ]))
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" Move ", desc_style),
        Span::styled(" Enter ", key_style),
        Span::styled(" Open ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" Quit ", desc_style),
    ];

    let hints = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(hints, area);
}

fn render_error_modal(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, frame.area());

    let block = Block::default()
        .title(LAUNCH_FAILED_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.error))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let text = vec![
        Line::from(Span::styled(message, Style::default().fg(DEFAULT_THEME.fg))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// A rectangle `percent_x` wide and `height` rows tall in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
