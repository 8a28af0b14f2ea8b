//! Timed-text JSON loading and normalization.
//!
//! Two file shapes are accepted:
//! - Legacy: a top-level array of `{ "startTimeMs": "7430", "words": "..." }`
//!   entries (unknown fields ignored).
//! - Extended: a top-level object with optional `title` / `artist` keys and
//!   the legacy array under `lyrics`.
//!
//! Normalization happens once here; the player only ever sees a validated
//! [`Timeline`]. Entries whose `words` are empty or all-whitespace are
//! dropped entirely, `startTimeMs` is converted from milliseconds to
//! seconds, and input order is preserved (nothing re-sorts).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::timeline::{TimedLine, Timeline};

/// Title sentinel when no title is supplied by the caller or the file.
const UNTITLED: &str = "untitled";
/// Artist sentinel when no artist is supplied by the caller or the file.
const UNKNOWN_ARTIST: &str = "unknown";

/// A normalized, validated timed-text document.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub timeline: Timeline,
    pub title: String,
    pub artist: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Extended {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        artist: Option<String>,
        lyrics: Vec<RawEntry>,
    },
    Legacy(Vec<RawEntry>),
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(rename = "startTimeMs", default)]
    start_time_ms: StartTime,
    #[serde(default)]
    words: String,
    #[serde(default)]
    highlight: bool,
}

/// `startTimeMs` arrives as a numeric string in API dumps but as a plain
/// number in hand-written files; both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum StartTime {
    Text(String),
    Millis(f64),
}

impl Default for StartTime {
    fn default() -> Self {
        StartTime::Millis(0.0)
    }
}

impl StartTime {
    fn seconds(&self) -> Result<f64> {
        let millis = match self {
            StartTime::Text(s) => s
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid startTimeMs {s:?}"))?,
            StartTime::Millis(ms) => *ms,
        };
        Ok(millis / 1000.0)
    }
}

/// Loads and normalizes a timed-text file.
///
/// `title` / `artist` supplied here win over anything found in the file;
/// empty strings count as not supplied.
pub fn load_file(path: &Path, title: Option<&str>, artist: Option<&str>) -> Result<Loaded> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read lyrics from {}", path.display()))?;
    let loaded = parse(&contents, title, artist)
        .with_context(|| format!("failed to parse lyrics from {}", path.display()))?;
    tracing::debug!(
        lines = loaded.timeline.len(),
        title = %loaded.title,
        "loaded timed text"
    );
    Ok(loaded)
}

/// Parses a timed-text document from a JSON string.
pub fn parse(json: &str, title: Option<&str>, artist: Option<&str>) -> Result<Loaded> {
    let document: Document = serde_json::from_str(json).context("malformed JSON")?;

    let (file_title, file_artist, raw) = match document {
        Document::Extended {
            title,
            artist,
            lyrics,
        } => (title, artist, lyrics),
        Document::Legacy(entries) => (None, None, entries),
    };

    let title = pick(title, file_title, UNTITLED);
    let artist = pick(artist, file_artist, UNKNOWN_ARTIST);

    let mut lines = Vec::with_capacity(raw.len());
    for entry in raw {
        // Blank entries are dropped, not kept as blank lines.
        if entry.words.trim().is_empty() {
            continue;
        }
        lines.push(TimedLine {
            time: entry.start_time_ms.seconds()?,
            text: entry.words,
            highlight: entry.highlight,
        });
    }

    Ok(Loaded {
        timeline: Timeline::new(lines),
        title,
        artist,
    })
}

/// Caller-supplied metadata wins over file content; empty strings on
/// either side count as absent.
fn pick(explicit: Option<&str>, from_file: Option<String>, sentinel: &str) -> String {
    explicit
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or(from_file.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| sentinel.to_string())
}
