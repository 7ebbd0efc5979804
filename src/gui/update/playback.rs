//! gui/update/playback.rs
//! GUI -> playback engine bridge.
//!
//! - Control surface messages mutate the engine directly (same thread).
//! - Every engine transition starts a play-button animation.
//! - Ticks re-read the engine and push position into the slider as a
//!   programmatic change, which never seeks.

use std::time::Instant;

use iced::Task;
use log::{debug, error};

use super::super::state::{GlassPlay, Message};
use crate::core::controls::{ChangeOrigin, IconAnimation};
use crate::core::playback::{IconTransition, PlaybackState};

pub(crate) const NO_TRACK: &str = "No track loaded.";

fn animate(state: &mut GlassPlay, transition: IconTransition) {
    state.now = Instant::now();
    state.icon = Some(IconAnimation::start(transition, state.now));
}

/// Re-read the engine and mirror it into the slider + labels.
fn sync_progress(state: &mut GlassPlay) {
    let Some(engine) = &state.engine else {
        return;
    };

    let snapshot = state.progress.refresh(engine);
    state.slider.set_range(snapshot.duration_ms);

    // Don't fight the user's thumb mid-drag.
    if !state.slider.is_dragging() {
        state
            .slider
            .on_progress_changed(snapshot.position_ms, ChangeOrigin::Programmatic);
    }
}

pub(crate) fn tick(state: &mut GlassPlay) -> Task<Message> {
    if let Some(engine) = state.engine.as_mut() {
        match engine.poll_finished() {
            Ok(Some(transition)) => {
                state.icon = Some(IconAnimation::start(transition, state.now));
                state.status = "Finished.".into();
            }
            Ok(None) => {}
            Err(e) => {
                error!("Reload after track end failed: {e}");
                state.status = format!("Playback error: {e}");
            }
        }
    }

    sync_progress(state);

    if state.icon.is_some_and(|anim| anim.is_done(state.now)) {
        state.icon = None;
    }

    Task::none()
}

pub(crate) fn animation_frame(state: &mut GlassPlay, now: Instant) -> Task<Message> {
    state.now = now;
    if state.icon.is_some_and(|anim| anim.is_done(now)) {
        state.icon = None;
    }
    Task::none()
}

pub(crate) fn toggle_play_pause(state: &mut GlassPlay) -> Task<Message> {
    let Some(engine) = state.engine.as_mut() else {
        state.status = NO_TRACK.into();
        return Task::none();
    };

    let transition = engine.toggle_play_pause();
    state.status = match engine.state() {
        PlaybackState::Playing => format!("Playing: {}", state.title.title),
        PlaybackState::Paused | PlaybackState::Stopped => "Paused.".into(),
    };

    animate(state, transition);
    Task::none()
}

pub(crate) fn stop(state: &mut GlassPlay) -> Task<Message> {
    let Some(engine) = state.engine.as_mut() else {
        state.status = NO_TRACK.into();
        return Task::none();
    };

    match engine.stop() {
        Ok(Some(transition)) => {
            state.status = "Stopped.".into();
            animate(state, transition);
            sync_progress(state);
        }
        Ok(None) => debug!("stop ignored: already stopped"),
        Err(e) => {
            error!("Stop failed: {e}");
            state.status = format!("Stop failed: {e}");
        }
    }

    Task::none()
}

/// User dragged the slider: seek now and refresh out of cycle.
pub(crate) fn seek_dragged(state: &mut GlassPlay, value: f32) -> Task<Message> {
    let Some(engine) = state.engine.as_mut() else {
        state.status = NO_TRACK.into();
        return Task::none();
    };

    let value = value.max(0.0).round() as u64;
    let Some(target) = state.slider.on_progress_changed(value, ChangeOrigin::User) else {
        return Task::none();
    };

    if let Err(e) = engine.seek(target) {
        error!("Seek to {target}ms failed: {e}");
        state.status = format!("Seek failed: {e}");
    }

    state.progress.refresh(engine);
    Task::none()
}

pub(crate) fn seek_released(state: &mut GlassPlay) -> Task<Message> {
    state.slider.release();
    sync_progress(state);
    Task::none()
}
