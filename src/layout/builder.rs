//! Timeline layout builder
//!
//! Folds an ordered note sequence into absolute time and pixel placements.

use log::{debug, trace};

use super::types::{LayoutDescriptor, NoteEvent, SequenceConfig, SequenceLayout};
use crate::error::LayoutError;

/// Builds [`SequenceLayout`]s for one validated [`SequenceConfig`].
///
/// The builder holds no state besides its config and may be reused for any
/// number of sequences, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineLayoutBuilder {
    config: SequenceConfig,
}

impl TimelineLayoutBuilder {
    /// Validate `config` and create a builder for it.
    ///
    /// # Errors
    /// `LayoutError::InvalidInput` if either unit is zero, negative, NaN or
    /// infinite.
    pub fn new(config: SequenceConfig) -> Result<Self, LayoutError> {
        check_unit("seconds per beat", config.seconds_per_beat)?;
        check_unit("pixels per beat", config.pixels_per_beat)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Lay out `notes` in order.
    ///
    /// # Algorithm
    /// 1. Reject the whole sequence if any note is shorter than one beat
    /// 2. Walk the notes with an integer beat offset starting at 0
    /// 3. Derive each note's time and pixel values from that offset
    /// 4. Advance the offset by the note's beat length
    ///
    /// All values are products of an exact integer and a unit, never running
    /// float sums.
    ///
    /// # Example
    /// ```
    /// use notestrip::{NoteEvent, SequenceConfig, TimelineLayoutBuilder};
    ///
    /// let builder = TimelineLayoutBuilder::new(SequenceConfig::new(0.75, 56.0))?;
    /// let layout = builder.build(&[NoteEvent::new("A4", 1), NoteEvent::new("E5", 2)])?;
    ///
    /// assert_eq!(layout.descriptors[1].x_offset_pixels, 56.0);
    /// assert_eq!(layout.total_width_pixels, 168.0);
    /// # Ok::<(), notestrip::LayoutError>(())
    /// ```
    pub fn build<A: Clone>(&self, notes: &[NoteEvent<A>]) -> Result<SequenceLayout<A>, LayoutError> {
        let total_beats = total_beats(notes)?;

        let SequenceConfig {
            seconds_per_beat,
            pixels_per_beat,
        } = self.config;

        let mut descriptors = Vec::with_capacity(notes.len());
        let mut offset: i64 = 0;

        for (index, note) in notes.iter().enumerate() {
            let descriptor = LayoutDescriptor {
                annotation: note.annotation.clone(),
                start_beat: offset,
                beat_length: note.beat_length,
                start_time_seconds: offset as f64 * seconds_per_beat,
                duration_seconds: note.beat_length as f64 * seconds_per_beat,
                x_offset_pixels: offset as f64 * pixels_per_beat,
                width_pixels: note.beat_length as f64 * pixels_per_beat,
            };
            trace!(
                "note {}: beat {}+{} -> {:.3}s/{:.3}s at {:.1}px/{:.1}px",
                index,
                descriptor.start_beat,
                descriptor.beat_length,
                descriptor.start_time_seconds,
                descriptor.duration_seconds,
                descriptor.x_offset_pixels,
                descriptor.width_pixels
            );
            descriptors.push(descriptor);
            offset += note.beat_length;
        }

        let layout = SequenceLayout {
            descriptors,
            total_beats,
            total_duration_seconds: total_beats as f64 * seconds_per_beat,
            total_width_pixels: total_beats as f64 * pixels_per_beat,
            seconds_per_beat,
            pixels_per_beat,
        };

        debug!(
            "laid out {} notes: {} beats, {:.2}s, {:.0}px",
            layout.len(),
            layout.total_beats,
            layout.total_duration_seconds,
            layout.total_width_pixels
        );

        Ok(layout)
    }
}

/// Compute the layout of `notes` under `config`.
///
/// Equivalent to `TimelineLayoutBuilder::new(*config)?.build(notes)`.
///
/// # Example
/// ```
/// use notestrip::{build_layout, NoteEvent, SequenceConfig};
///
/// let notes = vec![NoteEvent::new("A4", 1), NoteEvent::new("A4", 1), NoteEvent::new("E5", 2)];
/// let layout = build_layout(&notes, &SequenceConfig::new(0.75, 56.0))?;
///
/// assert_eq!(layout.descriptors[2].start_time_seconds, 1.5);
/// assert_eq!(layout.total_duration_seconds, 3.0);
/// assert_eq!(layout.total_width_pixels, 224.0);
/// # Ok::<(), notestrip::LayoutError>(())
/// ```
///
/// # Errors
/// `LayoutError::InvalidInput` for a non-positive unit or a note shorter
/// than one beat. Nothing is returned on failure.
pub fn build_layout<A: Clone>(
    notes: &[NoteEvent<A>],
    config: &SequenceConfig,
) -> Result<SequenceLayout<A>, LayoutError> {
    TimelineLayoutBuilder::new(*config)?.build(notes)
}

fn check_unit(name: &str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

/// Validate every beat length and sum them, before anything is laid out.
fn total_beats<A>(notes: &[NoteEvent<A>]) -> Result<i64, LayoutError> {
    notes.iter().enumerate().try_fold(0i64, |sum, (index, note)| {
        if note.beat_length < 1 {
            return Err(LayoutError::invalid(format!(
                "note {} has beat length {}, expected at least 1",
                index + 1,
                note.beat_length
            )));
        }
        sum.checked_add(note.beat_length).ok_or_else(|| {
            LayoutError::invalid(format!("beat offset overflows at note {}", index + 1))
        })
    })
}
