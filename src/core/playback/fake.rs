//! In-memory backend for tests. Clones share one deck, so a test can keep a
//! handle after boxing the backend into an engine.

use std::cell::RefCell;
use std::rc::Rc;

use super::AudioBackend;
use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FakeCall {
    Reload,
    Play,
    Pause,
    Seek(u64),
}

#[derive(Debug, Default)]
struct Deck {
    position_ms: u64,
    duration_ms: u64,
    playing: bool,
    fail_next_reload: bool,
    calls: Vec<FakeCall>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeBackend {
    deck: Rc<RefCell<Deck>>,
}

impl FakeBackend {
    pub(crate) fn new(duration_ms: u64) -> Self {
        Self {
            deck: Rc::new(RefCell::new(Deck {
                duration_ms,
                ..Deck::default()
            })),
        }
    }

    /// Wall-clock time passing; only moves the playhead while playing.
    pub(crate) fn advance(&self, ms: u64) {
        let mut deck = self.deck.borrow_mut();
        if deck.playing {
            deck.position_ms = (deck.position_ms + ms).min(deck.duration_ms);
        }
    }

    pub(crate) fn fail_next_reload(&self) {
        self.deck.borrow_mut().fail_next_reload = true;
    }

    pub(crate) fn calls(&self) -> Vec<FakeCall> {
        self.deck.borrow().calls.clone()
    }

    pub(crate) fn seek_count(&self) -> usize {
        self.deck
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, FakeCall::Seek(_)))
            .count()
    }
}

impl AudioBackend for FakeBackend {
    fn reload(&mut self) -> Result<()> {
        let mut deck = self.deck.borrow_mut();
        if deck.fail_next_reload {
            deck.fail_next_reload = false;
            return Err(AppError::Audio("fake reload failure".into()));
        }
        deck.calls.push(FakeCall::Reload);
        deck.position_ms = 0;
        deck.playing = false;
        Ok(())
    }

    fn play(&mut self) {
        let mut deck = self.deck.borrow_mut();
        deck.calls.push(FakeCall::Play);
        deck.playing = true;
    }

    fn pause(&mut self) {
        let mut deck = self.deck.borrow_mut();
        deck.calls.push(FakeCall::Pause);
        deck.playing = false;
    }

    fn seek(&mut self, position_ms: u64) -> Result<()> {
        let mut deck = self.deck.borrow_mut();
        deck.calls.push(FakeCall::Seek(position_ms));
        deck.position_ms = position_ms;
        Ok(())
    }

    fn position_ms(&self) -> u64 {
        self.deck.borrow().position_ms
    }

    fn duration_ms(&self) -> u64 {
        self.deck.borrow().duration_ms
    }

    fn is_finished(&self) -> bool {
        let deck = self.deck.borrow();
        deck.playing && deck.position_ms >= deck.duration_ms
    }
}
