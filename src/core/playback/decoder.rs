//! core/playback/decoder.rs
//! Track probing (Symphonia).
//!
//! rodio's decoder cannot always report a length for MP3s, so the
//! duration comes from the container's codec params instead.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use crate::core::error::{AppError, Result};

/// Total length of the default audio track in `path`, if the container knows it.
pub(crate) fn probe_duration_ms(path: &Path) -> Result<Option<u64>> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AppError::Decode(format!("Format probe failed: {e}")))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| AppError::Decode("No supported audio track found.".into()))?;

    Ok(duration_from_params(
        track.codec_params.time_base,
        track.codec_params.n_frames,
    ))
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}
