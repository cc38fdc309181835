//! # Public API
//!
//! One-call entry points from a song file to finished output.
//!
//! - [`render_song_source()`] - Parse a YAML song and render it
//! - [`render_song()`] - Render an already parsed song, optionally with a
//!   different tempo or beat width
//!
//! ## Typical Usage
//!
//! ```rust
//! use notestrip::{render_song_source, OutputFormat};
//!
//! let source = r#"
//! title: Open Strings
//! seconds-per-beat: 0.75
//! sections:
//!   - name: A
//!     notes:
//!       - { pitch: "A4", beats: 2 }
//!       - { pitch: "E5", beats: 2 }
//! "#;
//!
//! let style = render_song_source(source, OutputFormat::Style)?;
//! assert_eq!(style, "--song-duration:3.00s;--song-width:224px;--beat-width:56px");
//! # Ok::<(), notestrip::LayoutError>(())
//! ```

use crate::layout::{seconds_per_beat_from_bpm, SequenceConfig};
use crate::render::{render_note_strip, render_sheet, sheet_style, to_json, RenderOptions};
use crate::song::{parse_song, Song};
use crate::LayoutError;

/// What to produce from a song's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `song-note` elements only
    #[default]
    Html,
    /// A full `song-sheet` block with playhead and notes
    Sheet,
    /// The container's CSS custom properties
    Style,
    /// The layout as JSON
    Json,
}

/// Tempo and beat-width values that replace a song's own
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overrides {
    pub tempo_bpm: Option<f64>,
    pub beat_width: Option<f64>,
}

impl Overrides {
    /// Replace the values of `config` that are overridden.
    ///
    /// # Errors
    /// `InvalidInput` naming the BPM if `tempo_bpm` is not positive.
    pub fn apply(&self, config: SequenceConfig) -> Result<SequenceConfig, LayoutError> {
        let seconds_per_beat = match self.tempo_bpm {
            Some(bpm) => seconds_per_beat_from_bpm(bpm)?,
            None => config.seconds_per_beat,
        };
        Ok(SequenceConfig {
            seconds_per_beat,
            pixels_per_beat: self.beat_width.unwrap_or(config.pixels_per_beat),
        })
    }
}

/// Lay out `song` and render it in `format`.
///
/// # Errors
/// `InvalidInput` if the effective tempo or beat width is not positive.
pub fn render_song(
    song: &Song,
    overrides: &Overrides,
    format: OutputFormat,
) -> Result<String, LayoutError> {
    let layout = song.layout_with(&overrides.apply(song.config)?)?;

    match format {
        OutputFormat::Html => Ok(render_note_strip(&layout, &RenderOptions::default())),
        OutputFormat::Sheet => Ok(render_sheet(song.title.as_deref(), &layout)),
        OutputFormat::Style => Ok(sheet_style(&layout)),
        OutputFormat::Json => to_json(&layout),
    }
}

/// Parse a YAML song file and render it in `format` with its own settings.
pub fn render_song_source(source: &str, format: OutputFormat) -> Result<String, LayoutError> {
    let song = parse_song(source)?;
    render_song(&song, &Overrides::default(), format)
}
