pub mod api;
pub mod cli;
pub mod error;
pub mod layout;
pub mod library;
pub mod render;
pub mod song;

pub use api::{render_song, render_song_source, OutputFormat, Overrides};
pub use error::*;
pub use layout::{
    build_layout, LayoutDescriptor, NoteEvent, SequenceConfig, SequenceLayout,
    TimelineLayoutBuilder,
};
pub use library::{list_songs, load_song};
pub use song::{parse_song, Bow, Section, Song, ViolinNote};
