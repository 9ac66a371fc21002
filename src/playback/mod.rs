//! Playback state machine and hover labels
//!
//! [`Playback`] owns the current frame index. It is a two-state machine:
//!
//! ```text
//!          toggle
//! Playing ◀──────▶ Paused
//!    │
//!    └─ tick: index = (index + 1) % len
//! ```
//!
//! Ticks while paused are observed and ignored. Hover handling lives in
//! [`hover`] and never touches the frame index.

pub mod hover;

pub use hover::{region_contains, HoverLabel, HoverLabels, LabelMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        }
    }
}

/// Frame selection over a looping sequence of `len` frames
#[derive(Debug, Clone)]
pub struct Playback {
    state: PlaybackState,
    index: usize,
    len: usize,
}

impl Playback {
    /// Start playing from the first frame
    pub fn new(len: usize) -> Self {
        Playback {
            state: PlaybackState::Playing,
            index: 0,
            len,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flip between playing and paused, returning the new state
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = self.state.toggled();
        self.state
    }

    /// Handle one timer tick. Returns whether a frame was shown, which is
    /// every tick while playing, even when a single frame loops onto itself.
    pub fn tick(&mut self) -> bool {
        if self.state == PlaybackState::Paused || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }
}
