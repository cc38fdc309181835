//! Integration tests for notestrip
//!
//! Tests the full pipeline from song file to rendered note strip.

use notestrip::render::sheet_style;
use notestrip::{
    load_song, parse_song, render_song, render_song_source, Bow, OutputFormat, Overrides,
    SequenceConfig,
};

#[test]
fn test_twinkle_layout() {
    let song = load_song("twinkle").unwrap();
    let layout = song.layout().unwrap();

    // A (14 notes) + B (14 notes) + A again
    assert_eq!(layout.len(), 42);
    assert_eq!(layout.total_beats, 48);
    assert_eq!(layout.total_duration_seconds, 36.0);
    assert_eq!(layout.total_width_pixels, 2688.0);
    assert_eq!(
        sheet_style(&layout),
        "--song-duration:36.00s;--song-width:2688px;--beat-width:56px"
    );

    // The reprise of A starts at beat 32
    assert_eq!(layout.descriptors[28].start_beat, 32);
    assert_eq!(layout.descriptors[28].annotation.pitch, "A4");
    assert_eq!(layout.descriptors[28].x_offset_pixels, 1792.0);
}

#[test]
fn test_mary_layout() {
    let song = load_song("mary").unwrap();
    let layout = song.layout().unwrap();

    assert_eq!(song.title.as_deref(), Some("Mary Had a Little Lamb"));
    assert_eq!(layout.len(), 26);
    assert_eq!(layout.total_beats, 32);
    assert_eq!(
        sheet_style(&layout),
        "--song-duration:25.92s;--song-width:1792px;--beat-width:56px"
    );

    let last = layout.descriptors.last().unwrap();
    assert_eq!(last.annotation.pitch, "C#5");
    assert_eq!(last.beat_length, 4);
    assert_eq!(last.x_offset_pixels, 1568.0);
}

#[test]
fn test_lightly_row_layout() {
    let song = load_song("lightly-row").unwrap();
    let layout = song.layout().unwrap();

    assert_eq!(song.form, vec!["A", "B", "A2"]);
    assert_eq!(layout.len(), 38);
    assert_eq!(
        sheet_style(&layout),
        "--song-duration:36.96s;--song-width:2688px;--beat-width:56px"
    );
}

#[test]
fn test_last_note_markup() {
    let song = load_song("mary").unwrap();
    let html = render_song(&song, &Overrides::default(), OutputFormat::Html).unwrap();

    assert_eq!(html.matches("class=\"song-note\"").count(), 26);
    assert!(html.contains(
        "<div class=\"song-note\" style=\"--note-x:1568px;--note-width:224px;--note-start:22.68s;--note-duration:3.24s\">"
    ));
}

#[test]
fn test_annotations_survive_layout() {
    let song = load_song("twinkle").unwrap();
    let layout = song.layout().unwrap();

    let first = &layout.descriptors[0].annotation;
    assert_eq!(first.pitch, "A4");
    assert_eq!(first.finger, Some(0));
    assert_eq!(first.string.as_deref(), Some("A"));
    assert_eq!(first.bow, Some(Bow::Down));

    let notes = song.notes();
    for (note, descriptor) in notes.iter().zip(layout.iter()) {
        assert_eq!(note.annotation, descriptor.annotation);
        assert_eq!(note.beat_length, descriptor.beat_length);
    }
}

#[test]
fn test_every_song_tiles_contiguously() {
    for name in notestrip::list_songs() {
        let layout = load_song(name).unwrap().layout().unwrap();

        for pair in layout.descriptors.windows(2) {
            assert!((pair[1].start_time_seconds - pair[0].end_time_seconds()).abs() < 1e-9);
            assert!((pair[1].x_offset_pixels - pair[0].end_x_pixels()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_overrides_rescale_layout() {
    let song = load_song("twinkle").unwrap();
    let overrides = Overrides {
        tempo_bpm: Some(40.0),
        beat_width: Some(28.0),
    };
    let style = render_song(&song, &overrides, OutputFormat::Style).unwrap();

    assert_eq!(style, "--song-duration:72.00s;--song-width:1344px;--beat-width:28px");
}

#[test]
fn test_override_validation() {
    let song = load_song("twinkle").unwrap();
    let overrides = Overrides {
        tempo_bpm: None,
        beat_width: Some(0.0),
    };
    let err = render_song(&song, &overrides, OutputFormat::Html).unwrap_err();

    assert!(err.is_invalid_input());
}

#[test]
fn test_zero_tempo_override_names_bpm() {
    let song = load_song("twinkle").unwrap();
    let overrides = Overrides {
        tempo_bpm: Some(0.0),
        beat_width: None,
    };
    let err = render_song(&song, &overrides, OutputFormat::Style).unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "Invalid input: tempo must be a positive BPM, got 0");
}

#[test]
fn test_sheet_output() {
    let song = load_song("lightly-row").unwrap();
    let html = render_song(&song, &Overrides::default(), OutputFormat::Sheet).unwrap();

    assert!(html.starts_with("<div class=\"song-sheet\" aria-label=\"Lightly Row\""));
    assert!(html.contains("song-playhead"));
}

#[test]
fn test_json_output_round_trips_totals() {
    let json = render_song_source(
        "seconds-per-beat: 0.5\nsections: [{ name: A, notes: [{ pitch: G4, beats: 3 }] }]",
        OutputFormat::Json,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["totalDurationSeconds"], 1.5);
    assert_eq!(value["totalWidthPixels"], 168.0);
    assert_eq!(value["descriptors"][0]["annotation"]["pitch"], "G4");
}

#[test]
fn test_invalid_song_is_rejected_before_rendering() {
    let result = render_song_source(
        "sections: [{ name: A, notes: [{ pitch: G4, beats: 0.5 }] }]",
        OutputFormat::Html,
    );
    assert!(result.unwrap_err().is_invalid_input());
}

#[test]
fn test_song_config_matches_file() {
    let song = parse_song(include_str!("../songs/lightly-row.yaml")).unwrap();
    assert_eq!(song.config, SequenceConfig::new(0.77, 56.0));
}
