//! Sign-in screen (remote sync on, no session yet).

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{GlassPlay, Message};
use super::constants::{FORM_W, STATUS_TEXT, TITLE_TEXT};
use super::widgets::frosted;

pub(crate) fn build_sign_in(state: &GlassPlay) -> iced::widget::Container<'_, Message> {
    let user_id = text_input("User id", &state.sign_in.user_id)
        .on_input(Message::SignInUserIdChanged)
        .on_submit(Message::SignInSubmitted)
        .width(Length::Fill);

    let token = text_input("Token (optional)", &state.sign_in.id_token)
        .on_input(Message::SignInTokenChanged)
        .on_submit(Message::SignInSubmitted)
        .secure(true)
        .width(Length::Fill);

    let actions = row![
        button("Sign in").on_press(Message::SignInSubmitted),
        button("Continue offline").on_press(Message::ContinueOffline),
    ]
    .spacing(8);

    let form = column![
        text("Sign in to sync your library").size(TITLE_TEXT),
        text(state.status.as_str()).size(STATUS_TEXT),
        user_id,
        token,
        actions,
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fixed(FORM_W));

    container(
        container(form)
            .padding(20)
            .style(frosted(state.config.blur.all_radius)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}
