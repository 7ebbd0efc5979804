//! gui/update/sign_in.rs
//! Sign-in screen: collect a user id (+ optional token), then subscribe.

use iced::Task;
use log::info;

use super::super::state::{GlassPlay, Message, Screen};
use super::profile;
use crate::core::remote::{Session, SessionState};

pub(crate) fn user_id_changed(state: &mut GlassPlay, value: String) -> Task<Message> {
    state.sign_in.user_id = value;
    Task::none()
}

pub(crate) fn token_changed(state: &mut GlassPlay, value: String) -> Task<Message> {
    state.sign_in.id_token = value;
    Task::none()
}

pub(crate) fn submit(state: &mut GlassPlay) -> Task<Message> {
    let user_id = state.sign_in.user_id.trim();
    if user_id.is_empty() {
        state.status = "Enter a user id to sign in.".into();
        return Task::none();
    }

    let token = state.sign_in.id_token.trim();
    state.session = SessionState::SignedIn(Session {
        user_id: user_id.to_string(),
        id_token: (!token.is_empty()).then(|| token.to_string()),
    });
    state.sign_in.id_token.clear();

    profile::subscribe(state);
    if state.screen == Screen::Player {
        state.status = "Signed in.".into();
    }
    Task::none()
}

pub(crate) fn continue_offline(state: &mut GlassPlay) -> Task<Message> {
    info!("Continuing without remote profile");
    state.screen = Screen::Player;
    state.status = "Offline.".into();
    Task::none()
}
