//! gui/update/profile.rs
//! Remote profile bridge: start the listener, drain what it delivered.
//!
//! Failures are logged and otherwise dropped; the player keeps working
//! without remote data.

use std::time::Duration;

use log::{debug, info, warn};

use super::super::state::{GlassPlay, Screen};
use crate::core::AppError;
use crate::core::remote::{ProfileEvent, ProfileListener};

/// Start the listener for the current session.
/// No session -> sign-in screen instead of a listener.
pub(crate) fn subscribe(state: &mut GlassPlay) {
    let Some(store) = state.store.clone() else {
        return;
    };

    let poll = Duration::from_millis(state.config.remote.poll_ms);
    match ProfileListener::start(store, &state.session, poll) {
        Ok(listener) => {
            info!("Subscribed to profile of {}", listener.user_id());
            state.listener = Some(listener);
            state.screen = Screen::Player;
        }
        Err(AppError::AuthenticationRequired) => {
            info!("Remote sync enabled but no session; asking to sign in");
            state.listener = None;
            state.screen = Screen::SignIn;
        }
        Err(e) => {
            warn!("Could not start profile listener: {e}");
            state.listener = None;
            state.screen = Screen::Player;
        }
    }
}

pub(crate) fn drain_events(state: &mut GlassPlay) {
    let Some(listener) = &state.listener else {
        return;
    };

    for event in listener.drain() {
        match event {
            ProfileEvent::Snapshot(Some(profile)) => {
                debug!(
                    "Profile '{}': {} songs, {} images",
                    profile.name,
                    profile.songs.len(),
                    profile.images.len()
                );
                state.profile = Some(profile);
            }
            ProfileEvent::Snapshot(None) => {
                debug!("Profile record absent");
                state.profile = None;
            }
            // already logged by the listener thread
            ProfileEvent::Failed(err) => debug!("Profile update failed: {err}"),
        }
    }
}
