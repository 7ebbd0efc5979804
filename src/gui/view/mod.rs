//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod sign_in;
mod widgets;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::state::{GlassPlay, Message, Screen};
use constants::{ARTIST_TEXT, STATUS_TEXT, TITLE_TEXT};

pub(crate) fn view(state: &GlassPlay) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match state.screen {
        Screen::Player => player(state).into(),
        Screen::SignIn => sign_in::build_sign_in(state).into(),
    };

    container(screen)
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn player(state: &GlassPlay) -> iced::widget::Container<'_, Message> {
    let header = column![
        text(state.title.title.as_str()).size(TITLE_TEXT),
        text(state.title.artist.as_str()).size(ARTIST_TEXT),
        text(state.status.as_str()).size(STATUS_TEXT),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let body = column![
        container(header)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        widgets::control_surface(state),
    ]
    .spacing(12)
    .height(Length::Fill);

    container(body)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::frosted(state.config.blur.all_radius))
}
