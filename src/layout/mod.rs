//! # Layout Module
//!
//! Turn an ordered note sequence into absolute timing and pixel placement for
//! a scrolling note strip.
//!
//! ## Purpose
//! A timeline UI needs, for every note:
//! 1. **When** it starts and how long it lasts, in seconds
//! 2. **Where** it sits on the strip and how wide it is, in pixels
//!
//! and, for the whole sequence, the total duration and the total width.
//!
//! ## Sub-modules
//! - `types` - NoteEvent, SequenceConfig, LayoutDescriptor, SequenceLayout
//! - `builder` - TimelineLayoutBuilder and the `build_layout` entry point
//!
//! ## Entry Point
//! [`build_layout()`] - Lay out a note sequence under one tempo and beat width
//!
//! ## Example
//! ```rust
//! use notestrip::layout::{build_layout, NoteEvent, SequenceConfig};
//!
//! let notes = vec![
//!     NoteEvent::new("A4", 1),
//!     NoteEvent::new("A4", 1),
//!     NoteEvent::new("E5", 2),
//! ];
//! let layout = build_layout(&notes, &SequenceConfig::new(0.75, 56.0)).unwrap();
//!
//! assert_eq!(layout.descriptors[1].start_time_seconds, 0.75);
//! assert_eq!(layout.descriptors[2].width_pixels, 112.0);
//! assert_eq!(layout.total_width_pixels, 224.0);
//! ```
//!
//! ## Timing Model
//!
//! The builder keeps one integer beat offset. Every time and pixel value is
//! `beats * unit` for an exact integer `beats`, so the strip tiles without
//! gaps and the error of any value is that of a single multiplication,
//! however long the song.
//!
//! ## Annotations
//! The `A` in `NoteEvent<A>` is an opaque payload: pitch, fingering, string,
//! bow, or anything else. The builder clones it into the output and never
//! reads it.
//!
//! ## Related Modules
//! - `song` - Reads song files into `NoteEvent<ViolinNote>` sequences
//! - `render` - Turns a `SequenceLayout` into markup or JSON

mod builder;
mod types;


pub use builder::{build_layout, TimelineLayoutBuilder};
pub use types::{
    seconds_per_beat_from_bpm, LayoutDescriptor, NoteEvent, SequenceConfig, SequenceLayout,
    DEFAULT_PIXELS_PER_BEAT, DEFAULT_TEMPO_BPM,
};
