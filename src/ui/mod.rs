//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: the animated viewer for one snapshot group (timer ticks,
//!   keyboard and mouse handling)
//! - **[`menu`]**: group selection list that launches viewers
//! - **[`panes`]**: render functions for the heap diagram, stats panel, and
//!   status bar
//! - **[`theme`]**: centralized color palette used by all panes
//! - **[`tty`]**: raw mode, alternate screen, and mouse capture
//!
//! Construct an [`App`] from a [`Sequence`] and call [`App::run`], or a
//! [`Menu`] from discovered selectors and call [`Menu::run`].
//!
//! [`Sequence`]: crate::snapshot::Sequence
//! [`App::run`]: app::App::run
//! [`Menu::run`]: menu::Menu::run

pub mod app;
pub mod menu;
pub mod panes;
pub mod theme;
pub mod tty;

pub use app::App;
pub use menu::{Menu, MenuAction};
