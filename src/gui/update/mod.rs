//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{GlassPlay, Message};

mod playback;
pub(crate) mod profile;
mod sign_in;

pub(crate) fn update(state: &mut GlassPlay, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => {
            state.now = now;
            profile::drain_events(state);
            playback::tick(state)
        }
        Message::AnimationFrame(now) => playback::animation_frame(state, now),

        // Control surface
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Stop => playback::stop(state),
        Message::SeekDragged(value) => playback::seek_dragged(state, value),
        Message::SeekReleased => playback::seek_released(state),

        // Sign-in
        Message::SignInUserIdChanged(s) => sign_in::user_id_changed(state, s),
        Message::SignInTokenChanged(s) => sign_in::token_changed(state, s),
        Message::SignInSubmitted => sign_in::submit(state),
        Message::ContinueOffline => sign_in::continue_offline(state),
    }
}
