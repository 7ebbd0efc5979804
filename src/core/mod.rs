//! core/mod.rs
//!
//! Everything that works without a window:
//! - playback state machine over an audio backend
//! - progress snapshots + "MM:SS" labels
//! - slider / play-button logic
//! - remote profile subscription
//! - config + errors
//!
//! The GUI calls into here and renders plain data back out.

pub mod config;
pub mod controls;
pub mod error;
pub mod playback;
pub mod progress;
pub mod remote;
pub mod tags;
pub mod time;

pub use error::{AppError, Result};
