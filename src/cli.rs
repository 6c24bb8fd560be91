//! Command-line interface for poster-type.
//!
//! Every subcommand loads the config, resolves the font chains once and
//! prints its result to stdout, as plain text or with `--json`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use poster_type_config::{Config, LogLevel, WeightClass};
use poster_type_layout::{HeadingFitter, Point, RasterBackend};
use serde::Serialize;

use crate::preview::{PreviewOptions, render_preview};
use crate::session::Session;

/// poster-type - Multi-script typesetting for music posters
#[derive(Parser, Debug)]
#[command(name = "poster-type")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/poster-type/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into single-font runs
    Segment {
        text: String,

        #[arg(long, value_enum, default_value_t = Weight::Regular)]
        weight: Weight,
    },

    /// Print the rendered width of text in pixels
    Measure {
        text: String,

        /// Pixel size (default: the track-list font size)
        #[arg(long)]
        size: Option<u32>,

        #[arg(long, value_enum, default_value_t = Weight::Regular)]
        weight: Weight,
    },

    /// Print the largest size at which a heading fits
    Fit {
        text: String,

        /// Maximum width in pixels (default: from config)
        #[arg(long)]
        max_width: Option<u32>,

        /// Size to start shrinking from (default: from config)
        #[arg(long)]
        initial_size: Option<u32>,

        #[arg(long, value_enum, default_value_t = Weight::Heavy)]
        weight: Weight,
    },

    /// Pack a track list (one per line) into columns
    Pack {
        /// Track list file, or - for stdin
        input: PathBuf,

        /// Maximum rows per column (default: from config)
        #[arg(long)]
        max_rows: Option<usize>,

        /// Maximum total width in pixels (default: from config)
        #[arg(long)]
        max_width: Option<u32>,

        /// Do not number the tracks
        #[arg(long)]
        no_index: bool,
    },

    /// Render the heading and track grid to a PNG
    Preview {
        #[arg(long)]
        title: String,

        /// Track list file, or - for stdin
        #[arg(long)]
        tracks: PathBuf,

        /// Output PNG path
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value_t = 1200)]
        width: u32,

        #[arg(long, default_value_t = 1600)]
        height: u32,
    },
}

/// Weight class as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Weight {
    Regular,
    Bold,
    Heavy,
}

impl From<Weight> for WeightClass {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Regular => WeightClass::Regular,
            Weight::Bold => WeightClass::Bold,
            Weight::Heavy => WeightClass::Heavy,
        }
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    text: &'a str,
    font: &'a str,
    font_index: usize,
}

#[derive(Serialize)]
struct MeasureOutput<'a> {
    text: &'a str,
    size: u32,
    width: u32,
}

#[derive(Serialize)]
struct FitOutput<'a> {
    text: &'a str,
    size: u32,
    width: u32,
    fits: bool,
}

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load(),
    }
}

/// Read one track per line from `path` (`-` for stdin), skipping blank lines.
pub fn read_tracks(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return parse_tracks(io::stdin().lock());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open track list {}", path.display()))?;
    parse_tracks(io::BufReader::new(file))
}

fn parse_tracks(reader: impl BufRead) -> Result<Vec<String>> {
    let mut tracks = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let track = line.trim();
        if !track.is_empty() {
            tracks.push(track.to_string());
        }
    }
    Ok(tracks)
}

/// Run `command` against `session`, writing the result to `out`.
pub fn execute(
    command: &Commands,
    session: &Session,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Segment { text, weight } => {
            let runs = session.segment(text, (*weight).into());
            if json {
                let runs: Vec<RunOutput> = runs
                    .iter()
                    .map(|run| RunOutput {
                        text: run.text,
                        font: run.font.alias(),
                        font_index: run.font_index,
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &runs)?;
                writeln!(out)?;
            } else {
                for run in &runs {
                    writeln!(out, "{:?}\t{}", run.text, run.font.alias())?;
                }
            }
        }
        Commands::Measure { text, size, weight } => {
            let size = size.unwrap_or(session.config().track_list.font_size);
            let mut backend = RasterBackend::measuring();
            session.register_fonts(&mut backend);
            let width = session.measure(&mut backend, text, (*weight).into(), size as f32);
            if json {
                serde_json::to_writer_pretty(&mut *out, &MeasureOutput { text, size, width })?;
                writeln!(out)?;
            } else {
                writeln!(out, "{width}")?;
            }
        }
        Commands::Fit {
            text,
            max_width,
            initial_size,
            weight,
        } => {
            let configured = session.heading_fitter();
            let fitter = HeadingFitter::new(
                max_width.unwrap_or(configured.max_width),
                initial_size.unwrap_or(configured.initial_size),
            );
            let mut backend = RasterBackend::measuring();
            session.register_fonts(&mut backend);
            let fitted = session.fit_heading(
                &mut backend,
                &fitter,
                text,
                (*weight).into(),
                Point::default(),
            );
            if json {
                let output = FitOutput {
                    text,
                    size: fitted.size,
                    width: fitted.width,
                    fits: fitted.fits,
                };
                serde_json::to_writer_pretty(&mut *out, &output)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", fitted.size)?;
            }
        }
        Commands::Pack {
            input,
            max_rows,
            max_width,
            no_index,
        } => {
            let tracks = read_tracks(input)?;
            let mut backend = RasterBackend::measuring();
            session.register_fonts(&mut backend);

            let mut options =
                session.pack_options(&mut backend, tracks.len(), WeightClass::Regular);
            if let Some(max_rows) = max_rows {
                options.max_rows = *max_rows;
            }
            if let Some(max_width) = max_width {
                options.max_total_width = *max_width;
            }
            if *no_index {
                options.with_index = false;
            }

            let (layout, _) =
                session.pack_tracks(&mut backend, options, &tracks, WeightClass::Regular);
            if json {
                serde_json::to_writer_pretty(&mut *out, &layout)?;
                writeln!(out)?;
            } else {
                for (i, column) in layout.columns.iter().enumerate() {
                    writeln!(out, "column {} ({}px)", i + 1, column.width)?;
                    for item in &column.items {
                        writeln!(out, "  {item}")?;
                    }
                }
                writeln!(out, "total {}px", layout.total_width)?;
                for &position in &layout.dropped {
                    writeln!(out, "dropped: {}", tracks[position])?;
                }
            }
        }
        Commands::Preview {
            title,
            tracks,
            out: path,
            width,
            height,
        } => {
            let tracks = read_tracks(tracks)?;
            let options = PreviewOptions {
                width: *width,
                height: *height,
                ..PreviewOptions::default()
            };
            let (backend, summary) = render_preview(session, title, &tracks, options)?;
            backend.save_png(path)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)?;
            } else {
                writeln!(
                    out,
                    "heading {}px, {} tracks in {} columns, saved {}",
                    summary.heading.size,
                    summary.tracks.item_count(),
                    summary.tracks.columns.len(),
                    path.display()
                )?;
            }
        }
    }
    Ok(())
}
