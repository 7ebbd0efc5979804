//! core/playback/engine.rs
//! Playback engine (state machine).
//!
//! Every transition hands back the `IconTransition` the play button should
//! animate, so callers never have to work it out from the state themselves.

use log::debug;

use super::{AudioBackend, IconTransition, PlaybackState};
use crate::core::error::Result;

pub struct PlaybackEngine {
    backend: Box<dyn AudioBackend>,
    state: PlaybackState,
}

impl PlaybackEngine {
    /// The backend is expected to be freshly loaded (paused at 0).
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            state: PlaybackState::Stopped,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn duration_ms(&self) -> u64 {
        self.backend.duration_ms()
    }

    /// Current position, never past the end of the track.
    pub fn position_ms(&self) -> u64 {
        let position = self.backend.position_ms();
        match self.backend.duration_ms() {
            0 => position,
            duration => position.min(duration),
        }
    }

    /// Pause if playing, otherwise start/resume from the current position.
    pub fn toggle_play_pause(&mut self) -> IconTransition {
        if self.is_playing() {
            self.backend.pause();
            self.state = PlaybackState::Paused;
        } else {
            self.backend.play();
            self.state = PlaybackState::Playing;
        }

        debug!(
            "toggle -> {:?} at {}ms",
            self.state,
            self.backend.position_ms()
        );
        IconTransition::for_state(self.state)
    }

    /// Halt and reload the track at position 0.
    ///
    /// Returns `None` when already stopped at the start (nothing to reset).
    pub fn stop(&mut self) -> Result<Option<IconTransition>> {
        if self.state == PlaybackState::Stopped && self.backend.position_ms() == 0 {
            return Ok(None);
        }

        self.reset()?;
        Ok(Some(IconTransition::for_state(self.state)))
    }

    /// Jump to `target_ms`, clamped into the track. Works in every state.
    /// Returns the position actually applied.
    pub fn seek(&mut self, target_ms: u64) -> Result<u64> {
        // 0 = length unknown; leave the target to the decoder.
        let applied = match self.backend.duration_ms() {
            0 => target_ms,
            duration => target_ms.min(duration),
        };
        self.backend.seek(applied)?;
        debug!("seek {target_ms}ms -> {applied}ms ({:?})", self.state);
        Ok(applied)
    }

    /// End-of-track check; meant to run on every progress tick.
    ///
    /// A track that played to the end goes back to Stopped at 0, so the
    /// next toggle plays it again from the start.
    pub fn poll_finished(&mut self) -> Result<Option<IconTransition>> {
        if self.state != PlaybackState::Playing || !self.backend.is_finished() {
            return Ok(None);
        }

        debug!("track finished");
        if let Err(e) = self.reset() {
            // Nothing left to play either way; stop polling this end.
            self.backend.pause();
            self.state = PlaybackState::Stopped;
            return Err(e);
        }
        Ok(Some(IconTransition::for_state(self.state)))
    }

    fn reset(&mut self) -> Result<()> {
        self.backend.reload()?;
        self.state = PlaybackState::Stopped;
        debug!("reloaded track, stopped at 0ms");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playback::fake::{FakeBackend, FakeCall};

    fn engine_with(duration_ms: u64) -> (PlaybackEngine, FakeBackend) {
        let backend = FakeBackend::new(duration_ms);
        let engine = PlaybackEngine::new(Box::new(backend.clone()));
        (engine, backend)
    }

    #[test]
    fn test_new_engine_is_stopped_at_zero() {
        let (engine, _) = engine_with(180_000);
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert_eq!(engine.position_ms(), 0);
        assert_eq!(engine.duration_ms(), 180_000);
    }

    #[test]
    fn test_toggle_alternates_and_reports_icon() {
        let (mut engine, _) = engine_with(180_000);

        assert_eq!(engine.toggle_play_pause(), IconTransition::PlayToPause);
        assert_eq!(engine.state(), PlaybackState::Playing);

        assert_eq!(engine.toggle_play_pause(), IconTransition::PauseToPlay);
        assert_eq!(engine.state(), PlaybackState::Paused);

        assert_eq!(engine.toggle_play_pause(), IconTransition::PlayToPause);
        assert_eq!(engine.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_toggle_never_moves_position() {
        let (mut engine, backend) = engine_with(180_000);

        engine.toggle_play_pause();
        backend.advance(1_500);
        engine.toggle_play_pause();
        assert_eq!(engine.position_ms(), 1_500);

        // paused: time passing does not move the playhead
        backend.advance(10_000);
        assert_eq!(engine.position_ms(), 1_500);

        engine.toggle_play_pause();
        assert_eq!(engine.position_ms(), 1_500);
    }

    #[test]
    fn test_seek_in_range_is_exact() {
        let (mut engine, _) = engine_with(180_000);
        assert_eq!(engine.seek(42_000).unwrap(), 42_000);
        assert_eq!(engine.position_ms(), 42_000);
        assert_eq!(engine.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_seek_past_end_clamps_to_duration() {
        let (mut engine, backend) = engine_with(180_000);
        engine.toggle_play_pause();

        assert_eq!(engine.seek(999_999).unwrap(), 180_000);
        assert_eq!(engine.position_ms(), 180_000);
        assert_eq!(backend.calls().last(), Some(&FakeCall::Seek(180_000)));
        assert_eq!(engine.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_stop_resets_from_every_state() {
        for toggles in 0..3 {
            let (mut engine, backend) = engine_with(180_000);
            engine.seek(30_000).unwrap();
            for _ in 0..toggles {
                engine.toggle_play_pause();
            }
            backend.advance(2_000);

            let icon = engine.stop().unwrap();

            assert_eq!(icon, Some(IconTransition::PauseToPlay));
            assert_eq!(engine.state(), PlaybackState::Stopped);
            assert_eq!(engine.position_ms(), 0);
        }
    }

    #[test]
    fn test_stop_when_already_stopped_is_noop() {
        let (mut engine, backend) = engine_with(180_000);

        assert_eq!(engine.stop().unwrap(), None);
        assert!(!backend.calls().contains(&FakeCall::Reload));

        engine.toggle_play_pause();
        engine.stop().unwrap();
        assert_eq!(engine.stop().unwrap(), None);
        assert_eq!(
            backend
                .calls()
                .iter()
                .filter(|c| **c == FakeCall::Reload)
                .count(),
            1
        );
    }

    #[test]
    fn test_play_after_stop_starts_from_zero() {
        let (mut engine, backend) = engine_with(180_000);
        engine.toggle_play_pause();
        backend.advance(5_000);
        engine.stop().unwrap();

        engine.toggle_play_pause();
        backend.advance(1_000);
        assert_eq!(engine.position_ms(), 1_000);
    }

    #[test]
    fn test_finished_track_returns_to_stopped() {
        let (mut engine, backend) = engine_with(3_000);
        engine.toggle_play_pause();
        assert_eq!(engine.poll_finished().unwrap(), None);

        backend.advance(5_000);
        assert_eq!(engine.position_ms(), 3_000);

        assert_eq!(
            engine.poll_finished().unwrap(),
            Some(IconTransition::PauseToPlay)
        );
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert_eq!(engine.position_ms(), 0);
        assert_eq!(engine.poll_finished().unwrap(), None);
    }

    #[test]
    fn test_seek_with_unknown_duration_is_not_pinned() {
        let (mut engine, backend) = engine_with(0);
        assert_eq!(engine.seek(5_000).unwrap(), 5_000);
        assert_eq!(backend.calls().last(), Some(&FakeCall::Seek(5_000)));
        assert_eq!(engine.position_ms(), 5_000);
    }

    #[test]
    fn test_failed_reload_at_track_end_stops_once() {
        let (mut engine, backend) = engine_with(3_000);
        engine.toggle_play_pause();
        backend.advance(5_000);
        backend.fail_next_reload();

        assert!(engine.poll_finished().is_err());
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert_eq!(backend.calls().last(), Some(&FakeCall::Pause));

        // no retry on the following ticks
        assert_eq!(engine.poll_finished().unwrap(), None);
    }

    #[test]
    fn test_failed_reload_keeps_previous_state() {
        let (mut engine, backend) = engine_with(180_000);
        engine.toggle_play_pause();
        backend.fail_next_reload();

        assert!(engine.stop().is_err());
        assert_eq!(engine.state(), PlaybackState::Playing);
    }
}
