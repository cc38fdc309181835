use clap::Parser;
use std::fs;
use std::process;

use notestrip::cli::Args;
use notestrip::{list_songs, load_song, parse_song, render_song, Song};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.list {
        for name in list_songs() {
            println!("{}", name);
        }
        return;
    }

    let song = match load_input(&args) {
        Ok(song) => song,
        Err(message) => fail(&message),
    };

    let output = match render_song(&song, &args.overrides(), args.format.into()) {
        Ok(output) => output,
        Err(e) => fail(&format!("Layout error: {}", e)),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                fail(&format!("Error writing to '{}': {}", path.display(), e));
            }
            eprintln!("Wrote {} to {}", song.title.as_deref().unwrap_or("song"), path.display());
        }
        None => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }
}

fn load_input(args: &Args) -> Result<Song, String> {
    if let Some(name) = &args.song {
        return load_song(name).map_err(|e| {
            format!("{} (available: {})", e, list_songs().join(", "))
        });
    }

    let Some(path) = &args.input else {
        return Err("Usage: notestrip <song.yaml> | --song <NAME> | --list".to_string());
    };

    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?;
    log::info!("read {} bytes from {}", source.len(), path.display());

    parse_song(&source).map_err(|e| format!("Error in '{}': {}", path.display(), e))
}

fn fail(message: &str) -> ! {
    log::error!("{}", message);
    eprintln!("{}", message);
    process::exit(1);
}
