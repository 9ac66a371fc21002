//! Terminal setup and teardown
//!
//! Both the viewer and the selection menu run full-screen with mouse capture.
//! The menu also hands the terminal to a child viewer process, so entering
//! and leaving are separate calls that can be repeated.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen with raw mode and mouse capture
pub fn init() -> io::Result<Tui> {
    enter()?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Undo [`init`] and show the cursor again
pub fn restore<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    leave()?;
    terminal.show_cursor()
}

/// Give the terminal back to a child process
pub fn suspend<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    restore(terminal)
}

/// Take the terminal back after [`suspend`]
pub fn resume<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    enter()?;
    terminal.clear()
}

fn enter() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}
