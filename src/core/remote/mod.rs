//! core/remote/mod.rs
//! Per-user profile record mirrored from the remote database.
//!
//! Record shape under `Users/<user id>`:
//! `{ "name": "...", "songs": { "<id>": true }, "images": { "<id>": true } }`
//!
//! The app only ever reads it. What the screen does with a delivered
//! profile is left open: it is held on the GUI state and nothing renders it.

mod listener;
mod store;

pub use listener::ProfileListener;
pub use store::{ProfileStore, RestProfileStore};

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub songs: BTreeMap<String, bool>,
    pub images: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub id_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedIn(Session),
    SignedOut,
}

impl SessionState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(s) => SessionState::SignedIn(s),
            None => SessionState::SignedOut,
        }
    }

    pub fn require(&self) -> Result<&Session> {
        match self {
            SessionState::SignedIn(session) => Ok(session),
            SessionState::SignedOut => Err(AppError::AuthenticationRequired),
        }
    }
}

/// What the listener hands to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    /// `None` = the record does not exist.
    Snapshot(Option<UserProfile>),
    Failed(String),
}

/// JSON `null` is an absent record, not an error.
pub fn decode_snapshot(value: Value) -> Result<Option<UserProfile>> {
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let profile = decode_snapshot(json!({
            "name": "Ada",
            "songs": { "s1": true, "s2": false },
            "images": { "i1": true }
        }))
        .unwrap()
        .expect("record should be present");

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.songs.get("s1"), Some(&true));
        assert_eq!(profile.songs.get("s2"), Some(&false));
        assert_eq!(profile.images.len(), 1);
    }

    #[test]
    fn test_missing_songs_is_empty_not_error() {
        let profile = decode_snapshot(json!({ "name": "Ada" }))
            .unwrap()
            .expect("record should be present");
        assert!(profile.songs.is_empty());
        assert!(profile.images.is_empty());
    }

    #[test]
    fn test_null_is_absent_record() {
        assert_eq!(decode_snapshot(Value::Null).unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = decode_snapshot(json!({ "songs": ["not", "a", "map"] })).unwrap_err();
        assert!(matches!(err, AppError::RemoteDecode(_)));
    }

    #[test]
    fn test_signed_out_requires_authentication() {
        let err = SessionState::from_session(None).require().unwrap_err();
        assert!(matches!(err, AppError::AuthenticationRequired));

        let signed_in = SessionState::from_session(Some(Session {
            user_id: "u1".into(),
            id_token: None,
        }));
        assert_eq!(signed_in.require().unwrap().user_id, "u1");
    }
}
