//! Command-line argument definitions for the fretboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The `chord` subcommand renders chord notation, the `board`
//! subcommand renders a free fretboard from individual markers. Output path,
//! configuration file and logging verbosity are global options.

use std::str::FromStr;

use clap::{Parser, Subcommand};

use fretboard::{FretRange, Instrument, color::Color};

/// Command-line arguments for the fretboard diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg", global = true)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a chord diagram from chord notation
    Chord(ChordArgs),

    /// Render a fretboard with individually placed markers
    Board(BoardArgs),
}

impl Command {
    pub fn diagram(&self) -> &DiagramArgs {
        match self {
            Self::Chord(chord) => &chord.diagram,
            Self::Board(board) => &board.diagram,
        }
    }
}

/// Options shared by every diagram kind
#[derive(clap::Args, Debug, Default)]
pub struct DiagramArgs {
    /// Instrument (guitar, bass, ukulele); overrides the configuration file
    #[arg(short, long)]
    pub instrument: Option<Instrument>,

    /// Title drawn above the diagram
    #[arg(short, long)]
    pub title: Option<String>,

    /// Draw frets vertically instead of horizontally
    #[arg(long)]
    pub landscape: bool,
}

#[derive(clap::Args, Debug)]
pub struct ChordArgs {
    /// Fret per string, lowest string first (e.g. `xx0232` or `x-15-14-11-12-11`)
    pub positions: String,

    /// Finger label per string (e.g. `---132`); `-` leaves a string unlabelled
    #[arg(short, long, default_value = "")]
    pub fingers: String,

    /// Draw a barre across all strings at this fret
    #[arg(long, value_name = "FRET")]
    pub barre: Option<u32>,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

#[derive(clap::Args, Debug)]
pub struct BoardArgs {
    /// Visible fret range (e.g. `5-8`)
    #[arg(long, value_name = "FIRST-LAST")]
    pub frets: Option<FretRange>,

    /// Marker as `STRING:FRET[:LABEL[:COLOR]]`; may be repeated
    #[arg(short, long = "marker", value_name = "MARKER")]
    pub markers: Vec<MarkerArg>,

    /// Barre as `FROM-TO:FRET[:LABEL]`; may be repeated
    #[arg(long = "barre", value_name = "BARRE")]
    pub barres: Vec<BarreArg>,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

/// A single-string marker given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerArg {
    pub string: usize,
    pub fret: u32,
    pub label: Option<String>,
    pub color: Option<Color>,
}

impl FromStr for MarkerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid marker `{s}`, expected STRING:FRET[:LABEL[:COLOR]]");

        let mut parts = s.splitn(4, ':');
        let string = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .ok_or_else(invalid)?;
        let fret = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .ok_or_else(invalid)?;
        let label = non_empty(parts.next());
        let color = non_empty(parts.next())
            .map(|color| Color::new(&color))
            .transpose()?;

        Ok(Self {
            string,
            fret,
            label,
            color,
        })
    }
}

/// A barre given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarreArg {
    pub from: usize,
    pub to: usize,
    pub fret: u32,
    pub label: Option<String>,
}

impl FromStr for BarreArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid barre `{s}`, expected FROM-TO:FRET[:LABEL]");

        let mut parts = s.splitn(3, ':');
        let (from, to) = parts
            .next()
            .and_then(|strings| strings.split_once('-'))
            .ok_or_else(invalid)?;
        let from: usize = from.trim().parse().map_err(|_| invalid())?;
        let to: usize = to.trim().parse().map_err(|_| invalid())?;
        let fret = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .ok_or_else(invalid)?;
        let label = non_empty(parts.next());

        if from > to {
            return Err(format!("invalid barre `{s}`, first string is above last string"));
        }

        Ok(Self {
            from,
            to,
            fret,
            label,
        })
    }
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.filter(|part| !part.is_empty()).map(str::to_string)
}
