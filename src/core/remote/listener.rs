//! core/remote/listener.rs
//! Background profile subscription.
//!
//! A worker thread polls the store and posts `ProfileEvent`s into a channel
//! whenever the record changes. The UI drains that channel on its own
//! thread (same pattern as the playback event drain in the player), so the
//! worker never touches screen state.
//!
//! Dropping the listener stops the worker at its next wake-up.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde_json::Value;

use super::store::ProfileStore;
use super::{ProfileEvent, Session, SessionState, decode_snapshot};
use crate::core::error::Result;

/// How often a sleeping worker checks the stop flag.
const STOP_CHECK: Duration = Duration::from_millis(50);

pub struct ProfileListener {
    user_id: String,
    stop: Arc<AtomicBool>,
    events: Receiver<ProfileEvent>,
}

impl ProfileListener {
    /// Subscribe to the signed-in user's record.
    ///
    /// Fails with `AuthenticationRequired` when nobody is signed in.
    pub fn start(
        store: Arc<dyn ProfileStore>,
        session: &SessionState,
        poll: Duration,
    ) -> Result<Self> {
        let session = session.require()?.clone();
        Self::spawn(store, session, poll)
    }

    fn spawn(store: Arc<dyn ProfileStore>, session: Session, poll: Duration) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel::<ProfileEvent>();
        let stop = Arc::new(AtomicBool::new(false));
        let user_id = session.user_id.clone();

        let worker_stop = Arc::clone(&stop);
        thread::Builder::new()
            .name("profile-listener".into())
            .spawn(move || run(store, session, poll, event_tx, worker_stop))?;

        debug!("Profile listener started for {user_id}");
        Ok(Self {
            user_id,
            stop,
            events: event_rx,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Everything delivered since the last drain, oldest first.
    pub fn drain(&self) -> Vec<ProfileEvent> {
        let mut drained = Vec::new();
        while let Ok(ev) = self.events.try_recv() {
            drained.push(ev);
        }
        drained
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: Duration) -> Option<ProfileEvent> {
        self.events.recv_timeout(timeout).ok()
    }
}

impl Drop for ProfileListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        debug!("Profile listener for {} stopping", self.user_id);
    }
}

fn run(
    store: Arc<dyn ProfileStore>,
    session: Session,
    poll: Duration,
    event_tx: Sender<ProfileEvent>,
    stop: Arc<AtomicBool>,
) {
    let mut last_value: Option<Value> = None;
    let mut last_error: Option<String> = None;

    while !stop.load(Ordering::Relaxed) {
        let event = match store.fetch(&session) {
            Ok(value) => {
                last_error = None;
                if last_value.as_ref() == Some(&value) {
                    None
                } else {
                    last_value = Some(value.clone());
                    Some(snapshot_event(value))
                }
            }
            Err(e) => {
                let msg = e.to_string();
                if last_error.as_deref() == Some(msg.as_str()) {
                    None
                } else {
                    warn!("Profile fetch failed: {msg}");
                    last_error = Some(msg.clone());
                    Some(ProfileEvent::Failed(msg))
                }
            }
        };

        if let Some(event) = event {
            // Receiver gone = listener dropped.
            if event_tx.send(event).is_err() {
                break;
            }
        }

        sleep_unless_stopped(poll, &stop);
    }
}

fn snapshot_event(value: Value) -> ProfileEvent {
    match decode_snapshot(value) {
        Ok(profile) => ProfileEvent::Snapshot(profile),
        Err(e) => ProfileEvent::Failed(e.to_string()),
    }
}

fn sleep_unless_stopped(total: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + total;
    loop {
        if stop.load(Ordering::Relaxed) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep(STOP_CHECK.min(deadline - now));
    }
}
