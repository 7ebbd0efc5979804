//! GlassPlay
//!
//! # What this program is
//! A one-screen player (built with the `iced` GUI library) for a single
//! bundled track: frosted control panel, animated play/pause button,
//! seek slider, elapsed/total time. Optionally mirrors the signed-in
//! user's profile record from a remote database.
//!
//! # How it runs
//! - `GlassPlay` holds all state, `Message` says what happened
//! - `update(state, message)` applies it, `view(state)` redraws
//! - a `Subscription` ticks every `tick_ms` (100ms by default) while the
//!   player screen is up; each tick re-reads the playback position
//!
//! # Concurrency model
//! - Playback engine calls happen on the UI thread, inside `update()`.
//! - The remote profile listener polls on its own thread and only posts
//!   events into a channel; ticks drain that channel on the UI thread.

mod core;
mod gui;

use gui::view::constants::{WINDOW_H, WINDOW_W};
use gui::{GlassPlay, subscription, update, view};
use iced::Theme;
use log::{info, warn};

use crate::core::config::Config;

fn main() -> iced::Result {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.parse_default_env();
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Config unusable ({e}); falling back to defaults");
            Config::default()
        }
    };
    info!("Track: {}", config.track.display());

    iced::application(move || GlassPlay::boot(config.clone()), update, view)
        .title("GlassPlay")
        .subscription(subscription)
        .theme(theme)
        .window_size((WINDOW_W, WINDOW_H))
        .run()
}

fn theme(_state: &GlassPlay) -> Theme {
    Theme::Dark
}
