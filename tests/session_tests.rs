//! Session and command tests over fake fonts.

mod common;

use common::{HalfEmBackend, session};
use poster_type::cli::{Commands, Weight, execute, load_config, read_tracks};
use poster_type::preview::{PreviewOptions, draw_line, render_preview};
use poster_type::{Session, WeightChains};
use poster_type_config::{Config, WeightClass};
use poster_type_fonts::{FontChain, FontDescriptor, GlyphCoverageCache};
use poster_type_layout::{HeadingFitter, Point, RasterBackend, TextMeasurer};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_segment_mixed_scripts() {
    let session = session(Config::default());
    let runs = session.segment("আমার গান (live) 東京", WeightClass::Regular);
    let summary: Vec<(&str, &str)> = runs.iter().map(|r| (r.text, r.font.alias())).collect();
    assert_eq!(
        summary,
        [
            ("আমার গান (", "bengali"),
            ("live) ", "latin"),
            ("東京", "cjk")
        ]
    );
}

#[test]
fn test_segment_command_json() {
    let session = session(Config::default());
    let command = Commands::Segment {
        text: "Hello 世界".to_string(),
        weight: Weight::Regular,
    };
    let mut out = Vec::new();
    execute(&command, &session, true, &mut out).unwrap();

    let runs: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(runs[0]["text"], "Hello ");
    assert_eq!(runs[0]["font"], "latin");
    assert_eq!(runs[1]["text"], "世界");
    assert_eq!(runs[1]["font"], "cjk");
    assert_eq!(runs[1]["font_index"], 2);
}

#[test]
fn test_measure_and_fit_through_session() {
    let session = session(Config::default());
    let mut backend = HalfEmBackend::default();
    assert_eq!(session.measure(&mut backend, "", WeightClass::Regular, 24.0), 0);
    assert_eq!(session.measure(&mut backend, "Hello", WeightClass::Regular, 24.0), 60);

    let fitter = HeadingFitter::new(100, 72);
    let fitted = session.fit_heading(
        &mut backend,
        &fitter,
        "Hello",
        WeightClass::Heavy,
        Point::default(),
    );
    assert_eq!(fitted.size, 40);
    assert_eq!(backend.drawn, [("Hello".to_string(), Point::default())]);
}

#[test]
fn test_pack_with_configured_index() {
    let session = session(Config::default());
    let mut backend = HalfEmBackend::default();
    let tracks = ["Alpha", "Beta", "Gamma"];

    let options = session.pack_options(&mut backend, tracks.len(), WeightClass::Regular);
    // "3. " at 24px.
    assert_eq!(options.index_width, 36);
    assert_eq!(options.max_rows, 5);

    let (layout, widths) =
        session.pack_tracks(&mut backend, options, &tracks, WeightClass::Regular);
    assert_eq!(layout.columns[0].items, ["1. Alpha", "2. Beta", "3. Gamma"]);
    assert_eq!(widths, [60 + 36]);
}

#[test]
fn test_draw_line_advances_per_run() {
    let session = session(Config::default());
    let mut backend = HalfEmBackend::default();
    let width = {
        let mut measurer = TextMeasurer::new(session.coverage(), &mut backend);
        draw_line(
            &mut measurer,
            "1. 東京",
            session.chain(WeightClass::Regular),
            10.0,
            Point::new(3.0, 4.0),
        )
    };
    assert_eq!(width, 25.0);
    assert_eq!(
        backend.drawn,
        [
            ("1. ".to_string(), Point::new(3.0, 4.0)),
            ("東京".to_string(), Point::new(18.0, 4.0)),
        ]
    );
}

#[test]
fn test_pack_command_reads_tracks_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tracks.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Intro\n\nSong Two\n東京の夜").unwrap();

    assert_eq!(read_tracks(&path).unwrap(), ["Intro", "Song Two", "東京の夜"]);

    let session = session(Config::default());
    let command = Commands::Pack {
        input: path,
        max_rows: Some(2),
        max_width: None,
        no_index: true,
    };
    let mut out = Vec::new();
    execute(&command, &session, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("column 1 ("));
    assert!(text.contains("  Intro\n"));
    assert!(text.contains("column 2 ("));
    assert!(!text.contains("dropped"));
}

#[test]
fn test_missing_track_list_is_an_error() {
    let err = read_tracks(std::path::Path::new("/nonexistent/tracks.txt")).unwrap_err();
    assert!(err.to_string().contains("Failed to open track list"));
}

#[test]
fn test_preview_renders_png_without_installed_fonts() {
    let dir = TempDir::new().unwrap();
    let tracks: Vec<String> = (1..=8).map(|n| format!("Track {n}")).collect();
    let session = session(Config::default());

    let options = PreviewOptions {
        width: 320,
        height: 240,
        ..PreviewOptions::default()
    };
    let (backend, summary) = render_preview(&session, "Live in Tokyo", &tracks, options).unwrap();
    // The fake chains point at files that do not exist.
    assert_eq!(summary.fonts_registered, 0);
    assert_eq!(summary.heading.size, 72);
    assert_eq!(summary.tracks.item_count(), 8);
    assert_eq!(backend.canvas().dimensions(), (320, 240));

    let out = dir.path().join("preview.png");
    backend.save_png(&out).unwrap();
    assert!(out.exists());
}

#[test]
fn test_load_config_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "heading:\n  max_width: 640\nlog_level: debug\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.heading.max_width, 640);
    assert_eq!(config.heading.initial_size, 72);

    let err = load_config(Some(&dir.path().join("missing.yaml"))).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load config"));
}

#[test]
fn test_heavy_chain_renders_with_its_own_face() {
    let fonts = concat!(env!("CARGO_MANIFEST_DIR"), "/poster-type-fonts/tests/fonts");
    let regular = FontDescriptor::new(format!("{fonts}/DejaVuSans.ttf"), "DejaVu Sans");
    let bold = FontDescriptor::new(format!("{fonts}/DejaVuSans-Bold.ttf"), "DejaVu Sans");
    let chains = WeightChains {
        regular: FontChain::new(vec![regular]),
        bold: FontChain::new(vec![bold.clone()]),
        heavy: FontChain::new(vec![bold]),
    };
    let session = Session::from_parts(Config::default(), chains, GlyphCoverageCache::default());

    let mut backend = RasterBackend::measuring();
    assert_eq!(session.register_fonts(&mut backend), 2);

    let light = session.measure(&mut backend, "HEADLINE", WeightClass::Regular, 72.0);
    let heavy = session.measure(&mut backend, "HEADLINE", WeightClass::Heavy, 72.0);
    assert!(heavy > light);
}
