//! Embedded song library
//!
//! Every `songs/*.yaml` file is compiled into the binary by `build.rs` and
//! addressed by its file stem (`songs/lightly-row.yaml` is `lightly-row`).

use crate::error::LayoutError;
use crate::song::{parse_song, Song};

include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// A song file with its name and content
#[derive(Debug, Clone, PartialEq)]
pub struct SongSource {
    pub name: &'static str,
    pub content: &'static str,
}

/// Get all embedded song files
pub fn get_all_songs() -> Vec<SongSource> {
    SONGS
        .iter()
        .map(|&(name, content)| SongSource { name, content })
        .collect()
}

/// Get a song file by name
pub fn get_song(name: &str) -> Option<SongSource> {
    SONGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(name, content)| SongSource { name, content })
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}

/// Parse an embedded song by name.
///
/// # Example
/// ```
/// let song = notestrip::load_song("twinkle")?;
/// assert_eq!(song.form, vec!["A", "B", "A"]);
/// # Ok::<(), notestrip::LayoutError>(())
/// ```
pub fn load_song(name: &str) -> Result<Song, LayoutError> {
    let source = get_song(name).ok_or_else(|| LayoutError::UnknownSong(name.to_string()))?;
    parse_song(source.content)
}
