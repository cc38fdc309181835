//! Layout type definitions
//!
//! Input note events and configuration, and the descriptors the builder
//! produces for a timeline UI.

use serde::Serialize;

use crate::error::LayoutError;

/// Default tempo in BPM when a song does not give one
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default horizontal width of one beat, in pixels
pub const DEFAULT_PIXELS_PER_BEAT: f64 = 56.0;

/// A single note in the input sequence.
///
/// The annotation is carried through to the output untouched; the builder
/// only looks at `beat_length`.
///
/// `beat_length` is signed so that a negative length coming from user data
/// can reach the builder and be rejected there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent<A> {
    pub annotation: A,
    pub beat_length: i64,
}

impl<A> NoteEvent<A> {
    pub fn new(annotation: A, beat_length: i64) -> Self {
        Self {
            annotation,
            beat_length,
        }
    }
}

/// Tempo and spatial scale for a whole sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceConfig {
    pub seconds_per_beat: f64,
    pub pixels_per_beat: f64,
}

impl SequenceConfig {
    pub fn new(seconds_per_beat: f64, pixels_per_beat: f64) -> Self {
        Self {
            seconds_per_beat,
            pixels_per_beat,
        }
    }

    /// Build a config from a tempo in beats per minute.
    ///
    /// A non-positive BPM produces a non-positive or infinite
    /// `seconds_per_beat`, which the builder rejects.
    ///
    /// # Example
    /// ```
    /// use notestrip::SequenceConfig;
    ///
    /// let config = SequenceConfig::from_bpm(80.0, 56.0);
    /// assert_eq!(config.seconds_per_beat, 0.75);
    /// ```
    pub fn from_bpm(bpm: f64, pixels_per_beat: f64) -> Self {
        Self::new(60.0 / bpm, pixels_per_beat)
    }

    /// Like [`SequenceConfig::from_bpm`], but rejects a BPM that is not a
    /// positive finite number, naming the BPM in the error.
    pub fn try_from_bpm(bpm: f64, pixels_per_beat: f64) -> Result<Self, LayoutError> {
        Ok(Self::new(seconds_per_beat_from_bpm(bpm)?, pixels_per_beat))
    }

    /// Tempo in beats per minute
    pub fn bpm(&self) -> f64 {
        60.0 / self.seconds_per_beat
    }
}

/// Convert a tempo in BPM to seconds per beat.
///
/// # Errors
/// `LayoutError::InvalidInput` if `bpm` is zero, negative, NaN or infinite.
pub fn seconds_per_beat_from_bpm(bpm: f64) -> Result<f64, LayoutError> {
    if bpm.is_finite() && bpm > 0.0 {
        Ok(60.0 / bpm)
    } else {
        Err(LayoutError::invalid(format!(
            "tempo must be a positive BPM, got {}",
            bpm
        )))
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::from_bpm(DEFAULT_TEMPO_BPM, DEFAULT_PIXELS_PER_BEAT)
    }
}

/// Computed placement of one note
///
/// # Fields
/// - `annotation`: Copied from the source note
/// - `start_beat`: Integer beat offset the note starts at
/// - `beat_length`: Integer beat length of the note
/// - `start_time_seconds`: `start_beat * seconds_per_beat`
/// - `duration_seconds`: `beat_length * seconds_per_beat`
/// - `x_offset_pixels`: `start_beat * pixels_per_beat`
/// - `width_pixels`: `beat_length * pixels_per_beat`
///
/// The float fields are each derived from the exact integer beats with a
/// single multiplication, so neighbouring notes tile without accumulated
/// rounding drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor<A> {
    pub annotation: A,
    pub start_beat: i64,
    pub beat_length: i64,
    pub start_time_seconds: f64,
    pub duration_seconds: f64,
    pub x_offset_pixels: f64,
    pub width_pixels: f64,
}

impl<A> LayoutDescriptor<A> {
    pub fn end_time_seconds(&self) -> f64 {
        self.start_time_seconds + self.duration_seconds
    }

    pub fn end_x_pixels(&self) -> f64 {
        self.x_offset_pixels + self.width_pixels
    }

    /// Half-open: a note owns its start instant but not its end.
    pub fn contains_time(&self, seconds: f64) -> bool {
        seconds >= self.start_time_seconds && seconds < self.end_time_seconds()
    }
}

/// Layout for an entire sequence
///
/// Contains one descriptor per input note, in input order, plus the totals a
/// UI needs to size the strip and its scroll animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceLayout<A> {
    pub descriptors: Vec<LayoutDescriptor<A>>,
    pub total_beats: i64,
    pub total_duration_seconds: f64,
    pub total_width_pixels: f64,
    pub seconds_per_beat: f64,
    pub pixels_per_beat: f64,
}

impl<A> SequenceLayout<A> {
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutDescriptor<A>> {
        self.descriptors.iter()
    }

    /// Find the note under a playhead at `seconds` from the start.
    ///
    /// Returns `None` before the first note, at or after the total duration,
    /// and for an empty layout.
    pub fn descriptor_at_time(&self, seconds: f64) -> Option<&LayoutDescriptor<A>> {
        if seconds.is_nan() || seconds < 0.0 || seconds >= self.total_duration_seconds {
            return None;
        }
        // Start times are sorted, so the candidate is the last note starting at or before `seconds`.
        let idx = self
            .descriptors
            .partition_point(|d| d.start_time_seconds <= seconds);
        idx.checked_sub(1)
            .map(|i| &self.descriptors[i])
            .filter(|d| d.contains_time(seconds))
    }
}

impl<'a, A> IntoIterator for &'a SequenceLayout<A> {
    type Item = &'a LayoutDescriptor<A>;
    type IntoIter = std::slice::Iter<'a, LayoutDescriptor<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
