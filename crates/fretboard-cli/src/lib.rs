//! CLI logic for the fretboard diagram tool.
//!
//! This module builds a chord or free fretboard diagram from the parsed
//! command line and writes it as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, BarreArg, BoardArgs, ChordArgs, Command, DiagramArgs, MarkerArg};

use std::fs;

use log::{debug, info};

use fretboard::{
    DiagramBuilder, DrawingOverride, Fretboard, FretboardError, Marker, Orientation,
    StyleOverride,
};

/// Run the fretboard CLI application
///
/// This function builds the requested diagram and writes the resulting SVG
/// to the output file.
///
/// # Errors
///
/// Returns `FretboardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed chord notation
/// - Markers on strings the instrument does not have
/// - Layout errors
pub fn run(args: &Args) -> Result<(), FretboardError> {
    info!(output_path = args.output; "Processing diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let diagram = args.command.diagram();
    let mut builder = DiagramBuilder::new(app_config);
    if let Some(instrument) = diagram.instrument {
        builder = builder.with_instrument(instrument);
    }

    let mut board = match &args.command {
        Command::Chord(chord) => chord_board(&builder, chord)?,
        Command::Board(board) => free_board(&builder, board)?,
    };

    if diagram.landscape {
        board.apply_style_override(&StyleOverride {
            drawing: DrawingOverride {
                orientation: Some(Orientation::Landscape),
                ..Default::default()
            },
            ..Default::default()
        })?;
    }

    let svg = builder.render_svg(&board)?;
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn chord_board(builder: &DiagramBuilder, args: &ChordArgs) -> Result<Fretboard, FretboardError> {
    let mut chord = builder.chord(&args.positions, &args.fingers)?;
    if let Some(fret) = args.barre {
        chord = chord.with_barre(fret);
    }
    if let Some(title) = &args.diagram.title {
        chord = chord.with_title(title.as_str());
    }

    chord.to_fretboard()
}

fn free_board(builder: &DiagramBuilder, args: &BoardArgs) -> Result<Fretboard, FretboardError> {
    let mut board = builder.fretboard()?;
    if let Some(frets) = args.frets {
        board = board.with_frets(frets);
    }
    if let Some(title) = &args.diagram.title {
        board = board.with_title(title.as_str());
    }

    for barre in &args.barres {
        board.add_barre(barre.fret, (barre.from, barre.to), barre.label.as_deref())?;
    }

    for marker_arg in &args.markers {
        let mut marker = Marker::new(marker_arg.string, marker_arg.fret);
        if let Some(label) = &marker_arg.label {
            marker = marker.with_label(label.as_str());
        }
        if let Some(color) = marker_arg.color {
            marker = marker.with_color(color);
        }
        board.add_marker(marker)?;
    }

    debug!(
        frets = board.frets().to_string(),
        markers = board.markers().len();
        "Free fretboard built"
    );
    Ok(board)
}
