//! Chord diagrams.
//!
//! A [`Chord`] interprets position and finger notations and turns them into a
//! populated [`Fretboard`]:
//!
//! - open strings get an `O` label, muted strings an `X` label
//! - the visible window is picked from the fretted positions
//! - a barre is inferred from the first finger label used on several strings
//! - every other fretted string gets a marker labelled with its finger
//!
//! # Example
//!
//! ```
//! # use fretboard::{Chord, Instrument};
//! let chord = Chord::new(Instrument::Guitar, "133211", "134211").unwrap();
//! let barre = chord.barre().unwrap();
//! assert_eq!((barre.from(), barre.to(), barre.fret()), (0, 5, 1));
//!
//! let board = chord.to_fretboard().unwrap();
//! assert_eq!(board.markers().len(), 4);
//! ```

mod notation;

use std::path::Path;

use log::{debug, info};

use crate::{
    error::FretboardError,
    instrument::{Instrument, InstrumentProfile},
    model::{FretRange, Fretboard, Marker},
    style::{Style, StyleOverride},
};

/// Highest fret a chord can reach and still be drawn from the nut.
const OPEN_POSITION_LIMIT: u32 = 5;

/// Number of frets shown after the first one.
const WINDOW_SPAN: u32 = 4;

/// A barre: one finger across strings `from..=to` at `fret`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barre {
    fret: u32,
    from: usize,
    to: usize,
    label: Option<char>,
}

impl Barre {
    pub fn fret(&self) -> u32 {
        self.fret
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Whether a string fretted at `fret` is held down by this barre.
    pub fn covers(&self, string: usize, fret: u32) -> bool {
        fret == self.fret && (self.from..=self.to).contains(&string)
    }
}

/// A chord diagram described by position and finger notations.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    profile: InstrumentProfile,
    positions: Vec<Option<u32>>,
    fingers: Vec<Option<char>>,
    explicit_barre: Option<u32>,
    title: Option<String>,
    style_override: StyleOverride,
}

impl Chord {
    /// Parses a chord for a built-in instrument.
    ///
    /// `positions` holds one token per string, lowest string first: a fret
    /// number or `x` for a muted string. Tokens are single characters unless
    /// the notation contains hyphens, in which case hyphens separate them.
    /// Strings past the end of the notation are muted.
    ///
    /// `fingers` holds one label per string; `-`, `.` and space mean no label.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::MalformedChord`] for an invalid token, for
    /// more positions than strings, or for more finger labels than positions.
    pub fn new(
        instrument: Instrument,
        positions: &str,
        fingers: &str,
    ) -> Result<Self, FretboardError> {
        Self::with_profile(instrument.profile(), positions, fingers)
    }

    /// Parses a chord for a custom instrument profile.
    pub fn with_profile(
        profile: InstrumentProfile,
        positions: &str,
        fingers: &str,
    ) -> Result<Self, FretboardError> {
        let tokens = notation::parse_positions(positions)?;
        let string_count = profile.string_count();

        if let Some(extra) = tokens.get(string_count) {
            return Err(FretboardError::malformed_chord(
                format!(
                    "{} positions given for an instrument with {string_count} strings",
                    tokens.len()
                ),
                positions,
                Some(extra.span.start..positions.len()),
            ));
        }

        let finger_labels = notation::parse_fingers(fingers);
        if finger_labels.len() > tokens.len() {
            return Err(FretboardError::malformed_chord(
                format!(
                    "{} finger labels given for {} positions",
                    finger_labels.len(),
                    tokens.len()
                ),
                fingers,
                None,
            ));
        }

        let mut positions: Vec<_> = tokens.into_iter().map(|token| token.fret).collect();
        positions.resize(string_count, None);

        Ok(Self {
            profile,
            positions,
            fingers: finger_labels,
            explicit_barre: None,
            title: None,
            style_override: StyleOverride::default(),
        })
    }

    /// Barres every string at `fret`, replacing barre detection.
    ///
    /// A barre at fret 0 is ignored.
    pub fn with_barre(mut self, fret: u32) -> Self {
        self.explicit_barre = Some(fret);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the override merged on top of the chord default style.
    pub fn with_style_override(mut self, style_override: StyleOverride) -> Self {
        self.style_override = style_override;
        self
    }

    /// Fret per string, `None` for muted strings.
    pub fn positions(&self) -> &[Option<u32>] {
        &self.positions
    }

    pub fn fingers(&self) -> &[Option<char>] {
        &self.fingers
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The frets shown by the diagram.
    ///
    /// Chords that stay below fret 5 are drawn from the nut; higher chords
    /// start at their lowest fretted position.
    pub fn fret_range(&self) -> FretRange {
        let fretted = || self.positions.iter().flatten().copied();

        let first = match fretted().max() {
            Some(highest) if highest >= OPEN_POSITION_LIMIT => {
                fretted().filter(|fret| *fret > 0).min().unwrap_or(0)
            }
            _ => 0,
        };

        FretRange::new(first, first + WINDOW_SPAN)
    }

    /// The barre of this chord, explicit or detected.
    ///
    /// Detection looks for the first finger digit used on more than one
    /// string; other labels such as `T` for the thumb never form a barre. The barre spans from its first to its last use, at the fret of
    /// its first use. Detection stops at that label: when its first string is
    /// open or muted there is no barre.
    pub fn barre(&self) -> Option<Barre> {
        if let Some(fret) = self.explicit_barre {
            return self.explicit(fret);
        }

        for (index, finger) in self.fingers.iter().enumerate() {
            let Some(label) = finger.filter(char::is_ascii_digit) else {
                continue;
            };
            let last = self
                .fingers
                .iter()
                .rposition(|other| *other == Some(label))
                .unwrap_or(index);
            if last == index {
                continue;
            }

            return match self.positions[index] {
                Some(fret) if fret > 0 => Some(Barre {
                    fret,
                    from: index,
                    to: last,
                    label: Some(label),
                }),
                _ => None,
            };
        }

        None
    }

    fn explicit(&self, fret: u32) -> Option<Barre> {
        if fret == 0 {
            return None;
        }

        let label = self
            .positions
            .iter()
            .position(|position| *position == Some(fret))
            .and_then(|index| self.fingers.get(index).copied().flatten());

        Some(Barre {
            fret,
            from: 0,
            to: self.positions.len().saturating_sub(1),
            label,
        })
    }

    /// Builds the fretboard diagram of this chord.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::InvalidStyleOverride`] if the style override
    /// does not merge.
    pub fn to_fretboard(&self) -> Result<Fretboard, FretboardError> {
        let frets = self.fret_range();
        let barre = self.barre();
        debug!(frets:% = frets, barre:? = barre; "Chord interpreted");

        let mut board = Fretboard::with_profile(self.profile.clone())
            .with_frets(frets)
            .with_style(Style::chord_default_borrowed().clone());
        board.apply_style_override(&self.style_override)?;
        if let Some(title) = &self.title {
            board = board.with_title(title.as_str());
        }

        let open_color = board.style().string.open_font_color;
        let muted_color = board.style().string.muted_font_color;

        if let Some(barre) = barre {
            let label = barre.label.map(String::from);
            board.add_barre(barre.fret, (barre.from, barre.to), label.as_deref())?;
        }

        for (string, position) in self.positions.iter().enumerate() {
            match *position {
                None => board.add_string_label(string, "X", muted_color)?,
                Some(0) => board.add_string_label(string, "O", open_color)?,
                Some(fret) if barre.is_some_and(|barre| barre.covers(string, fret)) => {}
                Some(fret) => {
                    let mut marker = Marker::new(string, fret);
                    if let Some(Some(label)) = self.fingers.get(string) {
                        marker = marker.with_label(*label);
                    }
                    board.add_marker(marker)?;
                }
            }
        }

        Ok(board)
    }

    /// Renders the chord diagram to an SVG string.
    pub fn render_svg(&self) -> Result<String, FretboardError> {
        self.to_fretboard()?.render_svg()
    }

    /// Renders the chord diagram as SVG into the file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FretboardError> {
        info!(positions:? = self.positions; "Saving chord");
        self.to_fretboard()?.save(path)
    }
}
