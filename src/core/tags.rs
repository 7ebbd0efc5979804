//! core/tags.rs
//! Title/artist for the now-playing header, read from ID3.
//!
//! Never fails: unreadable tags fall back to the file name.

use std::path::Path;

use id3::{Tag, TagLike};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTitle {
    pub title: String,
    pub artist: String,
}

pub fn read_track_title(path: &Path) -> TrackTitle {
    match Tag::read_from_path(path) {
        Ok(tag) => title_from_tag(path, &tag),
        Err(e) => {
            debug!("No readable tag in {}: {e}", path.display());
            fallback_title(path)
        }
    }
}

fn title_from_tag(path: &Path, tag: &Tag) -> TrackTitle {
    let fallback = fallback_title(path);
    TrackTitle {
        title: clean(tag.title()).unwrap_or(fallback.title),
        artist: clean(tag.artist())
            .or_else(|| clean(tag.album_artist()))
            .unwrap_or(fallback.artist),
    }
}

fn fallback_title(path: &Path) -> TrackTitle {
    TrackTitle {
        title: filename_stem(path),
        artist: "Unknown Artist".to_string(),
    }
}

fn clean(s: Option<&str>) -> Option<String> {
    let trimmed = s?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Gets filename without extension, used as a fallback title.
/// Ex: 'song.mp3' -> 'song'
fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown Title")
        .to_string()
}
