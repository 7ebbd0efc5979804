//! gui/subscription.rs
//! Progress timer + animation frames.
//!
//! The timer only exists while the Player screen is up: once it is no
//! longer returned here, iced drops it, so there is nothing left to cancel.

use iced::{Subscription, time, window};

use super::state::{GlassPlay, Message, Screen};

/// Progress ticks are scoped to the Player screen's lifetime.
pub(crate) fn runs_progress_timer(state: &GlassPlay) -> bool {
    state.screen == Screen::Player
}

pub(crate) fn subscription(state: &GlassPlay) -> Subscription<Message> {
    if !runs_progress_timer(state) {
        return Subscription::none();
    }

    let tick = time::every(state.progress.period()).map(Message::Tick);

    if state.is_animating() {
        Subscription::batch([tick, window::frames().map(Message::AnimationFrame)])
    } else {
        tick
    }
}
