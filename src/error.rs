//! # Error Types
//!
//! This module defines all error types for notestrip.
//!
//! The layout builder itself only ever fails with `InvalidInput`. The other
//! kinds come from the outer layers that read song files and the embedded
//! song library.
//!
//! ## Error Types
//! - `InvalidInput` - Non-positive tempo or beat width, or a bad beat length
//! - `SongError` - Malformed song file (YAML, form, tempo keys)
//! - `UnknownSong` - No embedded song with the requested name
//! - `Serialize` - JSON output failed
//!
//! ## Usage
//! ```rust
//! use notestrip::{build_layout, LayoutError, NoteEvent, SequenceConfig};
//!
//! let notes = vec![NoteEvent::new("A4", 0)];
//! match build_layout(&notes, &SequenceConfig::new(0.75, 56.0)) {
//!     Ok(layout) => println!("{} s", layout.total_duration_seconds),
//!     Err(LayoutError::InvalidInput(message)) => eprintln!("Rejected: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Invalid layout input.
    ///
    /// Occurs when a beat length is below one beat (or not a whole number in
    /// a song file), or when seconds-per-beat or pixels-per-beat is not a
    /// strictly positive finite number.
    ///
    /// # Example
    /// ```
    /// # use notestrip::LayoutError;
    /// let err = LayoutError::InvalidInput("note 3 has beat length 0".to_string());
    /// assert_eq!(err.to_string(), "Invalid input: note 3 has beat length 0");
    /// ```
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed song file.
    ///
    /// # Example
    /// ```
    /// # use notestrip::LayoutError;
    /// let err = LayoutError::SongError("form refers to unknown section 'C'".to_string());
    /// assert_eq!(err.to_string(), "Invalid song file: form refers to unknown section 'C'");
    /// ```
    #[error("Invalid song file: {0}")]
    SongError(String),

    /// No embedded song with this name.
    #[error("Unknown song: {0}")]
    UnknownSong(String),

    /// A layout could not be written as JSON.
    #[error("Failed to serialize layout: {0}")]
    Serialize(String),
}

impl LayoutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        LayoutError::InvalidInput(message.into())
    }

    /// True for the `InvalidInput` kind.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LayoutError::InvalidInput(_))
    }
}
