//! Viewer application state and event loop

use super::panes::{
    render_heap_pane, render_stats_pane, render_status_bar, HeapRenderData, StatusRenderData,
};
use crate::playback::{region_contains, HoverLabels, Playback, PlaybackState};
use crate::snapshot::{Frame as SnapshotFrame, Sequence};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before the tick timer is checked again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Space presses closer together than this are key repeats
const TOGGLE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The heap snapshot viewer
pub struct App {
    /// Frames in playback order
    pub sequence: Sequence,

    /// Play/pause state and current frame index
    pub playback: Playback,

    /// Labels drawn for the current frame, with their hover state
    pub labels: HoverLabels,

    /// Where the pause/play button was last drawn
    pub play_button: Rect,

    /// Time between ticks
    pub interval: Duration,

    /// When the last tick fired
    pub last_tick: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether something changed since the last draw
    pub needs_redraw: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a viewer that starts playing the first frame of `sequence`
    pub fn new(sequence: Sequence, interval: Duration) -> Self {
        let playback = Playback::new(sequence.len());
        App {
            sequence,
            playback,
            labels: HoverLabels::new(),
            play_button: Rect::default(),
            interval,
            last_tick: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            should_quit: false,
            needs_redraw: true,
            status_message: String::from("Playing..."),
        }
    }

    /// Run the viewer until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.needs_redraw {
                self.draw(terminal)?;
            }

            if self.should_quit {
                break;
            }

            if self.last_tick.elapsed() >= self.interval {
                self.on_tick();
                self.last_tick = Instant::now();
            }

            let timeout = self
                .interval
                .saturating_sub(self.last_tick.elapsed())
                .min(POLL_INTERVAL);
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
        }

        Ok(())
    }

    /// Draw the current frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        self.needs_redraw = false;
        Ok(())
    }

    /// The frame on screen
    pub fn current_frame(&self) -> Option<&SnapshotFrame> {
        self.sequence.get(self.playback.current())
    }

    /// Timer tick: when playing, show the next frame with raw labels
    pub fn on_tick(&mut self) {
        if !self.playback.tick() {
            return;
        }

        self.labels.reset();
        self.needs_redraw = true;

        if let Some(frame) = self.current_frame() {
            tracing::debug!(index = self.playback.current(), label = %frame.label, "advanced frame");
        }
    }

    /// Flip between playing and paused
    pub fn toggle_playback(&mut self) {
        let state = self.playback.toggle();
        self.status_message = match state {
            PlaybackState::Playing => "Playing...".to_string(),
            PlaybackState::Paused => "Paused".to_string(),
        };
        self.needs_redraw = true;
        tracing::debug!(?state, "playback toggled");
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Debounce to prevent key repeat spam
                if self.last_space_press.elapsed() >= TOGGLE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.toggle_playback();
                }
            }
            _ => {}
        }
    }

    /// Handle pointer motion (label hover) and clicks (pause/play button)
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => {
                if self.labels.pointer_moved(mouse.column, mouse.row) {
                    self.needs_redraw = true;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if region_contains(self.play_button, mouse.column, mouse.row) {
                    self.toggle_playback();
                }
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Diagram and stats side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(main_chunks[0]);

        let index = self.playback.current();
        let Some(current) = self.sequence.get(index) else {
            return;
        };

        let modes = self.labels.modes();
        let labels = render_heap_pane(
            frame,
            columns[0],
            HeapRenderData {
                snapshot: &current.snapshot,
                title: &current.label,
                label_modes: &modes,
            },
        );
        self.labels.replace(labels);

        render_stats_pane(frame, columns[1], &current.snapshot.stats);

        self.play_button = render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                frame_index: index,
                frame_count: self.sequence.len(),
                label: &current.label,
                state: self.playback.state(),
            },
        );
    }
}
