//! core/controls.rs
//! Control surface logic that doesn't need a widget toolkit:
//! - progress slider value + "who moved it" guard
//! - play button glyph animation timing

use std::time::{Duration, Instant};

use super::playback::IconTransition;

/// Where a slider value change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The user dragged or clicked the slider.
    User,
    /// The progress synchronizer pushed the playback position.
    Programmatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSlider {
    value: u64,
    max: u64,
    dragging: bool,
}

impl ProgressSlider {
    pub fn new(max: u64) -> Self {
        Self {
            value: 0,
            max,
            dragging: false,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_range(&mut self, max: u64) {
        self.max = max;
        self.value = self.value.min(max);
    }

    /// Apply a value change. Returns the seek target for user changes and
    /// `None` for programmatic ones, so position pushes never loop back
    /// into a seek.
    pub fn on_progress_changed(&mut self, value: u64, origin: ChangeOrigin) -> Option<u64> {
        self.value = value.min(self.max);
        match origin {
            ChangeOrigin::User => {
                self.dragging = true;
                Some(self.value)
            }
            ChangeOrigin::Programmatic => None,
        }
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }
}

/// Glyphs for the play button.
pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "⏸";

pub const ICON_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAnimation {
    pub transition: IconTransition,
    pub started: Instant,
}

impl IconAnimation {
    pub fn start(transition: IconTransition, now: Instant) -> Self {
        Self {
            transition,
            started: now,
        }
    }

    /// Animation progress in `0.0..=1.0`.
    pub fn frame(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / ICON_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.frame(now) >= 1.0
    }

    fn endpoints(&self) -> (&'static str, &'static str) {
        match self.transition {
            IconTransition::PlayToPause => (PLAY_GLYPH, PAUSE_GLYPH),
            IconTransition::PauseToPlay => (PAUSE_GLYPH, PLAY_GLYPH),
        }
    }

    /// Source glyph for the first half, target glyph for the second.
    pub fn glyph(&self, now: Instant) -> &'static str {
        let (from, to) = self.endpoints();
        if self.frame(now) < 0.5 { from } else { to }
    }

    /// Glyph scale: shrinks out then grows back in around the swap.
    pub fn scale(&self, now: Instant) -> f32 {
        let t = self.frame(now);
        0.4 + 0.6 * (2.0 * t - 1.0).abs()
    }
}
