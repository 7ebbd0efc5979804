//! core/playback/backend.rs
//! rodio-backed `AudioBackend`.
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink holding one decoder for the track
//!
//! A reload builds a brand new Sink + Decoder instead of rewinding the old
//! one, so "stopped" always means a fresh decoder at 0.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::AudioBackend;
use super::decoder::probe_duration_ms;
use crate::core::error::{AppError, Result};

pub struct RodioBackend {
    // Keep this alive for the lifetime of the backend!
    stream: OutputStream,
    sink: Sink,
    path: PathBuf,
    duration_ms: u64,
}

impl RodioBackend {
    /// Open the default output device and load `path`, paused at 0.
    pub fn open(path: &Path) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AppError::Audio(format!("Failed to open audio output: {e}")))?;
        stream.log_on_drop(false);

        let (sink, decoder_duration) = load_sink(&stream, path)?;

        let duration_ms = match probe_duration_ms(path) {
            Ok(Some(ms)) => ms,
            Ok(None) => decoder_duration.unwrap_or(0),
            Err(e) => {
                warn!("Duration probe failed for {}: {e}", path.display());
                decoder_duration.unwrap_or(0)
            }
        };

        debug!("Loaded {} ({duration_ms}ms)", path.display());

        Ok(Self {
            stream,
            sink,
            path: path.to_path_buf(),
            duration_ms,
        })
    }
}

fn load_sink(stream: &OutputStream, path: &Path) -> Result<(Sink, Option<u64>)> {
    // rodio 0.21.x: Sink is created from the stream's mixer
    let sink = Sink::connect_new(stream.mixer());

    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| AppError::Decode(format!("Decode failed: {e}")))?;
    let duration_ms = decoder.total_duration().map(|d| d.as_millis() as u64);

    sink.pause();
    sink.append(decoder);

    Ok((sink, duration_ms))
}

impl AudioBackend for RodioBackend {
    fn reload(&mut self) -> Result<()> {
        let (sink, _) = load_sink(&self.stream, &self.path)?;
        self.sink.stop();
        self.sink = sink;
        Ok(())
    }

    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek(&mut self, position_ms: u64) -> Result<()> {
        self.sink
            .try_seek(Duration::from_millis(position_ms))
            .map_err(|e| AppError::Audio(format!("Seek failed: {e}")))
    }

    fn position_ms(&self) -> u64 {
        self.sink.get_pos().as_millis() as u64
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
