//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::error;

use crate::core::config::Config;
use crate::core::controls::{IconAnimation, PAUSE_GLYPH, PLAY_GLYPH, ProgressSlider};
use crate::core::playback::{PlaybackEngine, RodioBackend};
use crate::core::progress::ProgressSynchronizer;
use crate::core::remote::{
    ProfileListener, ProfileStore, RestProfileStore, SessionState, UserProfile,
};
use crate::core::tags::{TrackTitle, read_track_title};

use super::update::profile;

/// Which screen is showing. Only `Player` runs the progress timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Player,
    /// Remote sync is on but nobody is signed in.
    SignIn,
}

/// Draft sign-in form (strings, so the user can type anything).
#[derive(Debug, Default, Clone)]
pub(crate) struct SignInDraft {
    pub user_id: String,
    pub id_token: String,
}

/// App state
pub(crate) struct GlassPlay {
    pub config: Config,
    pub screen: Screen,
    pub status: String,

    // Now playing
    pub title: TrackTitle,
    pub engine: Option<PlaybackEngine>,
    pub progress: ProgressSynchronizer,
    pub slider: ProgressSlider,

    // Play button
    pub icon: Option<IconAnimation>,
    pub now: Instant,

    // Remote profile
    pub session: SessionState,
    pub store: Option<Arc<dyn ProfileStore>>,
    pub listener: Option<ProfileListener>,
    /// Latest delivered profile. Held only; no widget reads it yet.
    pub profile: Option<UserProfile>,
    pub sign_in: SignInDraft,
}

impl GlassPlay {
    /// Real startup: open the audio device + bundled track, and the REST
    /// store when remote sync is enabled.
    pub(crate) fn boot(config: Config) -> Self {
        let (engine, status) = match RodioBackend::open(&config.track) {
            Ok(backend) => (Some(PlaybackEngine::new(Box::new(backend))), "Ready.".to_string()),
            Err(e) => {
                error!("Failed to load {}: {e}", config.track.display());
                (None, format!("Could not load {}: {e}", config.track.display()))
            }
        };

        let store: Option<Arc<dyn ProfileStore>> = if config.remote.enabled {
            Some(Arc::new(RestProfileStore::new(&config.remote.base_url)))
        } else {
            None
        };

        Self::with_parts(config, engine, store, status)
    }

    pub(crate) fn with_parts(
        config: Config,
        engine: Option<PlaybackEngine>,
        store: Option<Arc<dyn ProfileStore>>,
        status: String,
    ) -> Self {
        let title = read_track_title(&config.track);
        let session = SessionState::from_session(config.session());
        let progress = ProgressSynchronizer::new(Duration::from_millis(config.tick_ms));

        let mut state = Self {
            config,
            screen: Screen::Player,
            status,

            title,
            engine,
            progress,
            slider: ProgressSlider::new(0),

            icon: None,
            now: Instant::now(),

            session,
            store,
            listener: None,
            profile: None,
            sign_in: SignInDraft::default(),
        };

        if let Some(engine) = &state.engine {
            state.slider.set_range(engine.duration_ms());
            state.progress.refresh(engine);
        }

        if state.store.is_some() {
            profile::subscribe(&mut state);
        }

        state
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.engine.as_ref().is_some_and(PlaybackEngine::is_playing)
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.icon.is_some_and(|anim| !anim.is_done(self.now))
    }

    /// Glyph + scale for the play button right now.
    pub(crate) fn play_glyph(&self) -> (&'static str, f32) {
        match self.icon {
            Some(anim) => (anim.glyph(self.now), anim.scale(self.now)),
            None if self.is_playing() => (PAUSE_GLYPH, 1.0),
            None => (PLAY_GLYPH, 1.0),
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Progress timer fired.
    Tick(Instant),
    /// Redraw request while the play button animates.
    AnimationFrame(Instant),

    // Control surface
    TogglePlayPause,
    Stop,
    /// Slider moved by the user (the widget only reports user input).
    SeekDragged(f32),
    SeekReleased,

    // Sign-in
    SignInUserIdChanged(String),
    SignInTokenChanged(String),
    SignInSubmitted,
    ContinueOffline,
}
