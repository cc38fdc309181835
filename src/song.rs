//! # Song Files
//!
//! Reads YAML song files into note sequences the layout builder accepts.
//!
//! ## Format
//! ```yaml
//! title: Twinkle Twinkle Little Star
//! seconds-per-beat: 0.75   # or `tempo: 80` (BPM), not both
//! beat-width: 56           # pixels per beat
//! form: [A, B, A]          # optional, defaults to section order
//! sections:
//!   - name: A
//!     notes:
//!       - { pitch: "A4", finger: 0, string: A, bow: down, beats: 1 }
//! ```
//!
//! ## Validation
//! - `beats` must be a whole number of at least 1
//! - `form` may only name sections that exist
//! - `seconds-per-beat` and `tempo` are mutually exclusive
//! - `tempo` must be a positive BPM
//!
//! `seconds-per-beat` and `beat-width` are passed through as given; the
//! builder rejects non-positive units.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;
use crate::layout::{
    build_layout, seconds_per_beat_from_bpm, NoteEvent, SequenceConfig, SequenceLayout,
    DEFAULT_PIXELS_PER_BEAT, DEFAULT_TEMPO_BPM,
};

/// Bow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bow {
    Down,
    Up,
}

impl fmt::Display for Bow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bow::Down => write!(f, "⬇️ bow"),
            Bow::Up => write!(f, "⬆️ bow"),
        }
    }
}

/// What a violinist reads above each note box.
///
/// This is the annotation payload for songs; the layout builder never
/// inspects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolinNote {
    pub pitch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bow: Option<Bow>,
}

impl ViolinNote {
    pub fn new(pitch: impl Into<String>) -> Self {
        Self {
            pitch: pitch.into(),
            finger: None,
            string: None,
            bow: None,
        }
    }

    pub fn finger(mut self, finger: u8) -> Self {
        self.finger = Some(finger);
        self
    }

    pub fn string(mut self, string: impl Into<String>) -> Self {
        self.string = Some(string.into());
        self
    }

    pub fn bow(mut self, bow: Bow) -> Self {
        self.bow = Some(bow);
        self
    }
}

/// A named run of notes, e.g. the "A" part of an A-B-A tune
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub notes: Vec<NoteEvent<ViolinNote>>,
}

impl Section {
    /// Total length in beats, or `None` if it does not fit in an `i64`.
    pub fn beats(&self) -> Option<i64> {
        self.notes
            .iter()
            .try_fold(0i64, |sum, n| sum.checked_add(n.beat_length))
    }
}

/// A parsed song file
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: Option<String>,
    pub config: SequenceConfig,
    pub sections: Vec<Section>,
    /// Section names in play order
    pub form: Vec<String>,
}

impl Song {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// The full note sequence, with every section repeated as `form` says.
    pub fn notes(&self) -> Vec<NoteEvent<ViolinNote>> {
        self.form
            .iter()
            .filter_map(|name| self.section(name))
            .flat_map(|section| section.notes.iter().cloned())
            .collect()
    }

    /// Lay out the full note sequence with the song's own tempo and width.
    pub fn layout(&self) -> Result<SequenceLayout<ViolinNote>, LayoutError> {
        self.layout_with(&self.config)
    }

    /// Lay out the full note sequence with another tempo or width.
    pub fn layout_with(
        &self,
        config: &SequenceConfig,
    ) -> Result<SequenceLayout<ViolinNote>, LayoutError> {
        build_layout(&self.notes(), config)
    }
}

/// Raw song file for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSong {
    title: Option<String>,
    seconds_per_beat: Option<f64>,
    tempo: Option<f64>, // BPM
    beat_width: Option<f64>,
    form: Option<Vec<String>>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawSection {
    name: String,
    #[serde(default)]
    notes: Vec<RawNote>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawNote {
    pitch: String,
    finger: Option<u8>,
    string: Option<String>,
    bow: Option<Bow>,
    // Read as a float so fractional beats are reported rather than failing to parse.
    beats: f64,
}

/// Parse a YAML song file.
///
/// # Example
/// ```rust
/// use notestrip::parse_song;
///
/// let song = parse_song(r#"
/// title: Open Strings
/// tempo: 80
/// sections:
///   - name: A
///     notes:
///       - { pitch: "A4", finger: 0, string: A, bow: down, beats: 1 }
///       - { pitch: "E5", finger: 0, string: E, bow: up, beats: 2 }
/// "#)?;
///
/// let layout = song.layout()?;
/// assert_eq!(layout.total_duration_seconds, 2.25);
/// # Ok::<(), notestrip::LayoutError>(())
/// ```
///
/// # Errors
/// - `SongError` for malformed YAML, unknown keys, duplicate section names,
///   a form naming a missing section, or both `tempo` and `seconds-per-beat`
/// - `InvalidInput` for a `beats` value that is not a whole number >= 1 that
///   fits in an `i64`, or a `tempo` that is not a positive BPM
pub fn parse_song(source: &str) -> Result<Song, LayoutError> {
    let raw: RawSong =
        serde_yaml::from_str(source).map_err(|e| LayoutError::SongError(e.to_string()))?;

    let config = song_config(&raw)?;

    let mut sections: Vec<Section> = Vec::with_capacity(raw.sections.len());
    for raw_section in raw.sections {
        if sections.iter().any(|s| s.name == raw_section.name) {
            return Err(LayoutError::SongError(format!(
                "section '{}' is defined twice",
                raw_section.name
            )));
        }
        sections.push(convert_section(raw_section)?);
    }

    let form = match raw.form {
        Some(form) => {
            if let Some(missing) = form.iter().find(|name| !sections.iter().any(|s| &s.name == *name)) {
                return Err(LayoutError::SongError(format!(
                    "form refers to unknown section '{}'",
                    missing
                )));
            }
            form
        }
        None => sections.iter().map(|s| s.name.clone()).collect(),
    };

    Ok(Song {
        title: raw.title,
        config,
        sections,
        form,
    })
}

fn song_config(raw: &RawSong) -> Result<SequenceConfig, LayoutError> {
    let seconds_per_beat = match (raw.seconds_per_beat, raw.tempo) {
        (Some(_), Some(_)) => {
            return Err(LayoutError::SongError(
                "give either seconds-per-beat or tempo, not both".to_string(),
            ))
        }
        (Some(spb), None) => spb,
        (None, Some(bpm)) => seconds_per_beat_from_bpm(bpm)?,
        (None, None) => {
            warn!(
                "song {:?} has no tempo, using {} BPM",
                raw.title.as_deref().unwrap_or("(untitled)"),
                DEFAULT_TEMPO_BPM
            );
            60.0 / DEFAULT_TEMPO_BPM
        }
    };

    let pixels_per_beat = raw.beat_width.unwrap_or(DEFAULT_PIXELS_PER_BEAT);

    Ok(SequenceConfig::new(seconds_per_beat, pixels_per_beat))
}

fn convert_section(raw: RawSection) -> Result<Section, LayoutError> {
    let notes = raw
        .notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| convert_note(note).map_err(|e| in_section(e, &raw.name, i + 1)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Section {
        name: raw.name,
        notes,
    })
}

fn convert_note(raw: RawNote) -> Result<NoteEvent<ViolinNote>, LayoutError> {
    if raw.beats.fract() != 0.0 || raw.beats < 1.0 {
        return Err(LayoutError::invalid(format!(
            "beats must be a whole number of at least 1, got {}",
            raw.beats
        )));
    }
    // i64::MAX rounds up to 2^63 as a float, so 2^63 itself must be caught here.
    if raw.beats >= i64::MAX as f64 {
        return Err(LayoutError::invalid(format!("beats {} is too large", raw.beats)));
    }

    let annotation = ViolinNote {
        pitch: raw.pitch,
        finger: raw.finger,
        string: raw.string,
        bow: raw.bow,
    };

    Ok(NoteEvent::new(annotation, raw.beats as i64))
}

fn in_section(err: LayoutError, section: &str, note: usize) -> LayoutError {
    match err {
        LayoutError::InvalidInput(message) => LayoutError::InvalidInput(format!(
            "section '{}', note {}: {}",
            section, note, message
        )),
        other => other,
    }
}
