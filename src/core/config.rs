//! core/config.rs
//! `config.toml` loading.
//!
//! Lookup order:
//! - `$GLASSPLAY_CONFIG` (explicit file path)
//! - `<config dir>/glassplay/config.toml`
//!
//! A missing file is not an error: every key has a default.

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use super::error::{AppError, Result};
use super::remote::Session;

pub const CONFIG_ENV: &str = "GLASSPLAY_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The one track this player ships with.
    pub track: PathBuf,
    /// Progress refresh period.
    pub tick_ms: u64,
    pub blur: BlurConfig,
    pub remote: RemoteConfig,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub all_radius: f32,
    pub bottom_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub base_url: String,
    pub poll_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    pub user_id: String,
    #[serde(default)]
    pub id_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track: PathBuf::from("assets/track.mp3"),
            tick_ms: 100,
            blur: BlurConfig::default(),
            remote: RemoteConfig::default(),
            session: None,
        }
    }
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            all_radius: 5.0,
            bottom_radius: 10.0,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            poll_ms: 2000,
        }
    }
}

impl SessionConfig {
    pub fn to_session(&self) -> Option<Session> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            return None;
        }
        Some(Session {
            user_id: user_id.to_string(),
            id_token: self.id_token.clone().filter(|t| !t.trim().is_empty()),
        })
    }
}

impl Config {
    /// Where the config file is expected to live, if anywhere.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|dir| dir.join("glassplay").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        match Self::resolve_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::parse(&raw)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(AppError::Config("tick_ms must be greater than zero".into()));
        }
        if self.remote.poll_ms == 0 {
            return Err(AppError::Config(
                "remote.poll_ms must be greater than zero".into(),
            ));
        }
        if self.remote.enabled && self.remote.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "remote.enabled requires remote.base_url".into(),
            ));
        }
        Ok(())
    }

    pub fn session(&self) -> Option<Session> {
        self.session.as_ref().and_then(SessionConfig::to_session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = Config::parse("").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.blur.all_radius, 5.0);
        assert_eq!(config.blur.bottom_radius, 10.0);
        assert!(!config.remote.enabled);
        assert!(config.session().is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            track = "music/song.mp3"

            [remote]
            enabled = true
            base_url = "https://example.firebaseio.com"

            [session]
            user_id = "abc123"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.track, PathBuf::from("music/song.mp3"));
        assert_eq!(config.remote.poll_ms, 2000);
        assert_eq!(config.tick_ms, 100);

        let session = config.session().expect("session should be present");
        assert_eq!(session.user_id, "abc123");
        assert_eq!(session.id_token, None);
    }

    #[test]
    fn test_blank_user_id_is_no_session() {
        let config = Config::parse(
            r#"
            [session]
            user_id = "   "
            id_token = ""
            "#,
        )
        .expect("config should parse");
        assert!(config.session().is_none());
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let err = Config::parse("tick_ms = 0").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_poll_is_rejected() {
        let err = Config::parse(
            r#"
            [remote]
            enabled = true
            base_url = "https://example.firebaseio.com"
            poll_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("poll_ms")));
    }

    #[test]
    fn test_remote_without_url_is_rejected() {
        let err = Config::parse("[remote]\nenabled = true").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::parse("tick_ms = [").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("glassplay-definitely-missing.toml");
        let config = Config::load_from(&path).expect("missing file is not an error");
        assert_eq!(config, Config::default());
    }
}
