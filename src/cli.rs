use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::api::{OutputFormat, Overrides};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Song file (YAML)
    #[arg(conflicts_with_all = ["song", "list"])]
    pub input: Option<PathBuf>,

    /// Use an embedded song instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "list")]
    pub song: Option<String>,

    /// List embedded songs
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Tempo in BPM, replacing the song's own
    #[arg(long, value_name = "BPM")]
    pub tempo: Option<f64>,

    /// Pixels per beat, replacing the song's own
    #[arg(long, value_name = "PX")]
    pub beat_width: Option<f64>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Sheet,
    Style,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Sheet => OutputFormat::Sheet,
            Format::Style => OutputFormat::Style,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            tempo_bpm: self.tempo,
            beat_width: self.beat_width,
        }
    }
}
