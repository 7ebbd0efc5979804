//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 400.0;
pub(crate) const WINDOW_H: f32 = 720.0;

pub(crate) const PLAY_BUTTON: f32 = 72.0;
pub(crate) const PLAY_GLYPH_SIZE: f32 = 34.0;
pub(crate) const STOP_GLYPH_SIZE: f32 = 22.0;

pub(crate) const TITLE_TEXT: f32 = 22.0;
pub(crate) const ARTIST_TEXT: f32 = 15.0;
pub(crate) const TIME_TEXT: f32 = 12.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const FORM_W: f32 = 300.0;
