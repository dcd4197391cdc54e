//! Example: Rendering a gallery of chord and fretboard diagrams
//!
//! Writes one SVG per diagram into the directory given as the first argument
//! (`gallery/` by default):
//!
//! ```text
//! cargo run -p fretboard --example gallery -- /tmp/gallery
//! ```

use std::{env, fs, path::PathBuf};

use fretboard::{
    Chord, FretRange, Fretboard, Instrument, Marker, StyleOverride, color::Color,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| "gallery".to_string()));
    fs::create_dir_all(&out_dir)?;

    let chords = [
        ("D.svg", Instrument::Guitar, "xx0232", "---132", Some("D Major Chord")),
        ("F-sharp.svg", Instrument::Guitar, "133211", "134211", Some("F#")),
        ("C-shape.svg", Instrument::Guitar, "x-15-14-11-12-11", "-43121", Some("C")),
        ("ukulele-G.svg", Instrument::Ukulele, "x232", "-132", Some("G")),
        ("ukulele-G-no-title.svg", Instrument::Ukulele, "x232", "-132", None),
        ("bass-E.svg", Instrument::Bass, "x221", "-321", Some("E")),
    ];

    for (file, instrument, positions, fingers, title) in chords {
        let mut chord = Chord::new(instrument, positions, fingers)?;
        if let Some(title) = title {
            chord = chord.with_title(title);
        }
        chord.save(out_dir.join(file))?;
        println!("Wrote {file}");
    }

    // F# with per-string colors on a dark background
    let overrides: StyleOverride = toml::from_str(
        r#"
        [drawing]
        background_color = "black"

        [fret]
        color = "darkslategray"

        [nut]
        color = "darkslategray"

        [marker]
        color = "darkslategray"
        border_color = "slategray"

        [string]
        color = "darkslategray"
        "#,
    )?;
    let mut board = Fretboard::new(Instrument::Guitar).with_title("F#");
    board.apply_style_override(&overrides)?;
    board.add_barre(1, (0, 5), Some("1"))?;
    board.add_marker(Marker::new(1, 3).with_label("3"))?;
    board.add_marker(Marker::new(2, 3).with_label("4"))?;
    board.add_marker(Marker::new(3, 2).with_label("2"))?;
    for (string, color) in ["red", "gold", "deepskyblue", "orange", "limegreen", "magenta"]
        .into_iter()
        .enumerate()
    {
        board.set_string_color(string, Color::new(color)?)?;
    }
    board.save(out_dir.join("F-sharp-colored-strings.svg"))?;
    println!("Wrote F-sharp-colored-strings.svg");

    // Minor pentatonic shape with highlighted roots
    let overrides: StyleOverride = toml::from_str(
        r#"
        [drawing]
        orientation = "landscape"

        [marker]
        color = "cornflowerblue"
        "#,
    )?;
    let mut board = Fretboard::new(Instrument::Guitar).with_frets(FretRange::new(5, 8));
    board.apply_style_override(&overrides)?;

    let root = Color::new("salmon")?;
    let notes = [
        (0, 5, "A"),
        (1, 5, "D"),
        (2, 5, "G"),
        (3, 5, "C"),
        (4, 5, "E"),
        (5, 5, "A"),
        (0, 8, "C"),
        (1, 7, "E"),
        (2, 7, "A"),
        (3, 7, "D"),
        (4, 8, "G"),
        (5, 8, "C"),
    ];
    for (string, fret, note) in notes {
        let mut marker = Marker::new(string, fret).with_label(note);
        if note == "A" {
            marker = marker.with_color(root);
        }
        board.add_marker(marker)?;
    }
    board.save(out_dir.join("pentatonic-shape.svg"))?;
    println!("Wrote pentatonic-shape.svg");

    Ok(())
}
