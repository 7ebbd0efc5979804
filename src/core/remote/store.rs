//! core/remote/store.rs
//! Reading one user record from the remote database.

use std::time::Duration;

use serde_json::Value;

use super::Session;
use crate::core::error::Result;

/// Read access to the `Users` collection.
pub trait ProfileStore: Send + Sync {
    /// Raw record for `session.user_id`; `Value::Null` when absent.
    fn fetch(&self, session: &Session) -> Result<Value>;
}

/// Realtime-database REST endpoint: `GET {base_url}/Users/{uid}.json`.
pub struct RestProfileStore {
    agent: ureq::Agent,
    base_url: String,
}

impl RestProfileStore {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn record_url(&self, user_id: &str) -> String {
        format!("{}/Users/{}.json", self.base_url, urlencoding::encode(user_id))
    }
}

impl ProfileStore for RestProfileStore {
    fn fetch(&self, session: &Session) -> Result<Value> {
        let mut request = self.agent.get(&self.record_url(&session.user_id));
        if let Some(token) = &session.id_token {
            request = request.query("auth", token);
        }
        let value = request.call()?.into_json::<Value>()?;
        Ok(value)
    }
}
