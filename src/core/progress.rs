//! core/progress.rs
//! Progress synchronizer: reads the engine, produces what the slider and
//! time labels should show.
//!
//! The timer itself lives in the GUI subscription; this is the per-tick work.

use std::time::Duration;

use super::playback::PlaybackEngine;
use super::time::format_time;

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub position_ms: u64,
    pub duration_ms: u64,
    pub elapsed_label: String,
    pub duration_label: String,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ProgressSnapshot {
    pub fn new(position_ms: u64, duration_ms: u64) -> Self {
        Self {
            position_ms,
            duration_ms,
            elapsed_label: format_time(position_ms),
            duration_label: format_time(duration_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressSynchronizer {
    period: Duration,
    last: ProgressSnapshot,
}

impl ProgressSynchronizer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last: ProgressSnapshot::default(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn last(&self) -> &ProgressSnapshot {
        &self.last
    }

    /// Read position + duration now. Called every tick, and out of cycle
    /// right after a user seek.
    pub fn refresh(&mut self, engine: &PlaybackEngine) -> &ProgressSnapshot {
        let duration_ms = engine.duration_ms();
        let position_ms = engine.position_ms();

        if self.last.position_ms != position_ms || self.last.duration_ms != duration_ms {
            self.last = ProgressSnapshot::new(position_ms, duration_ms);
        }
        &self.last
    }
}

impl Default for ProgressSynchronizer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playback::fake::FakeBackend;

    #[test]
    fn test_refresh_reflects_engine_position() {
        let backend = FakeBackend::new(200_000);
        let mut engine = PlaybackEngine::new(Box::new(backend.clone()));
        let mut sync = ProgressSynchronizer::default();

        let snap = sync.refresh(&engine);
        assert_eq!(snap.position_ms, 0);
        assert_eq!(snap.elapsed_label, "00:00");
        assert_eq!(snap.duration_label, "03:20");

        engine.toggle_play_pause();
        backend.advance(65_000);

        let snap = sync.refresh(&engine);
        assert_eq!(snap.position_ms, 65_000);
        assert_eq!(snap.elapsed_label, "01:05");
    }

    #[test]
    fn test_refresh_sees_seek_immediately() {
        let backend = FakeBackend::new(200_000);
        let mut engine = PlaybackEngine::new(Box::new(backend));
        let mut sync = ProgressSynchronizer::default();

        engine.seek(125_000).unwrap();
        assert_eq!(sync.refresh(&engine).elapsed_label, "02:05");
    }

    #[test]
    fn test_default_period_is_100ms() {
        assert_eq!(ProgressSynchronizer::default().period(), Duration::from_millis(100));
    }
}
