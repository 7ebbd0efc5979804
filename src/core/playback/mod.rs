//! core/playback/mod.rs
//! Playback core: state machine over an audio backend.
//!
//! - `PlaybackEngine` owns the state (stopped/playing/paused)
//! - `AudioBackend` is the decoder/output seam (rodio in the app, a fake in tests)
//! - No Iced imports.

mod backend;
mod decoder;
mod engine;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::RodioBackend;
pub use engine::PlaybackEngine;

use super::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Which animated glyph swap the play button should run.
/// Named after the glyph it ends on being replaced: `PlayToPause`
/// ends showing "pause" (we are now playing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTransition {
    PlayToPause,
    PauseToPlay,
}

impl IconTransition {
    pub fn for_state(state: PlaybackState) -> Self {
        match state {
            PlaybackState::Playing => IconTransition::PlayToPause,
            PlaybackState::Paused | PlaybackState::Stopped => IconTransition::PauseToPlay,
        }
    }
}

/// One loaded track behind an output device.
///
/// Positions are milliseconds from the start of the track.
pub trait AudioBackend {
    /// Throw away the current decoder and load the track again, paused at 0.
    fn reload(&mut self) -> Result<()>;
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position_ms: u64) -> Result<()>;
    fn position_ms(&self) -> u64;
    fn duration_ms(&self) -> u64;
    /// The source ran dry (end of track).
    fn is_finished(&self) -> bool;
}
