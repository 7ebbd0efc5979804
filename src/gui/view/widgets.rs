//! Reusable widgets/helpers used across view modules.

use iced::widget::{button, column, container, row, slider, text};
use iced::{Alignment, Background, Border, Color, Length, Theme};

use super::super::state::{GlassPlay, Message};
use super::constants::{PLAY_BUTTON, PLAY_GLYPH_SIZE, STOP_GLYPH_SIZE, TIME_TEXT};

/// Frosted-glass panel look. The blur itself is left to the compositor;
/// this is the translucent fill, hairline edge and corner radius.
pub(crate) fn frosted(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.10))),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.22),
            width: 1.0,
            radius: radius.into(),
        },
        ..container::Style::default()
    }
}

/// Bottom control surface: slider, time labels, transport buttons.
///
/// Emits only Messages (no rodio, no decoding).
pub(crate) fn control_surface(state: &GlassPlay) -> iced::widget::Container<'_, Message> {
    let snapshot = state.progress.last();
    let loaded = state.engine.is_some();

    // slider needs a sane range; if we don't know duration yet, freeze it at 0..=1
    let max = state.slider.max();
    let (seek_max, seek_val) = if max > 0 {
        (max as f32, state.slider.value() as f32)
    } else {
        (1.0f32, 0.0f32)
    };

    let seek = slider(0.0..=seek_max, seek_val, Message::SeekDragged)
        .on_release(Message::SeekReleased)
        .step(1.0)
        .width(Length::Fill);

    let times = row![
        container(text(snapshot.elapsed_label.as_str()).size(TIME_TEXT)).width(Length::Fill),
        text(snapshot.duration_label.as_str()).size(TIME_TEXT),
    ]
    .width(Length::Fill);

    let (glyph, scale) = state.play_glyph();
    let play_label = container(text(glyph).size(PLAY_GLYPH_SIZE * scale))
        .center_x(Length::Fixed(PLAY_BUTTON))
        .center_y(Length::Fixed(PLAY_BUTTON));
    let stop_label = text("■").size(STOP_GLYPH_SIZE);

    let (play_btn, stop_btn) = if loaded {
        (
            button(play_label).on_press(Message::TogglePlayPause),
            button(stop_label).on_press(Message::Stop),
        )
    } else {
        (button(play_label), button(stop_label))
    };

    let transport = row![stop_btn, play_btn]
        .spacing(24)
        .align_y(Alignment::Center);

    let surface = column![
        seek,
        times,
        container(transport).center_x(Length::Fill),
    ]
    .spacing(10);

    container(surface)
        .padding(18)
        .width(Length::Fill)
        .style(frosted(state.config.blur.bottom_radius))
}
