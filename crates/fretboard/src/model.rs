//! The diagram model.
//!
//! A [`Fretboard`] owns everything that is drawn: per-string state, markers,
//! the visible fret range, the instrument profile, the merged style and an
//! optional title. Layout is not stored; every render recomputes it from the
//! current state.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    ops::RangeInclusive,
    path::Path,
    str::FromStr,
};

use log::{debug, info, trace};

use fretboard_core::{color::Color, draw::DrawList};

use crate::{
    error::FretboardError,
    export,
    instrument::{Instrument, InstrumentProfile},
    layout::{Layout, compute_layout},
    render,
    style::{Orientation, Style, StyleOverride},
};

/// An inclusive range of frets, `first..=last`.
///
/// The rendered window always starts one fret below `first` (clamped at 0),
/// leaving room for the nut or for the fret the window continues from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretRange {
    first: u32,
    last: u32,
}

impl FretRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// First fret of the rendered window.
    pub fn padded_first(&self) -> u32 {
        self.first.saturating_sub(1)
    }

    /// The rendered fret sequence, `max(first - 1, 0)..=last`.
    pub fn padded(&self) -> RangeInclusive<u32> {
        self.padded_first()..=self.last
    }

    /// Number of fret lines in the rendered window. Zero for a reversed range.
    pub fn padded_count(&self) -> usize {
        self.last.saturating_add(1).saturating_sub(self.padded_first()) as usize
    }

    /// Whether the rendered window includes the nut.
    pub fn starts_at_nut(&self) -> bool {
        self.padded_first() == 0
    }
}

impl Default for FretRange {
    fn default() -> Self {
        Self::new(0, 5)
    }
}

impl fmt::Display for FretRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl FromStr for FretRange {
    type Err = String;

    /// Parses `"first-last"`, e.g. `"5-8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid fret range `{s}`, expected FIRST-LAST (e.g. 5-8)");

        let (first, last) = s.split_once('-').ok_or_else(invalid)?;
        let first = first.trim().parse().map_err(|_| invalid())?;
        let last = last.trim().parse().map_err(|_| invalid())?;

        if first > last {
            return Err(format!(
                "invalid fret range `{s}`, first fret is above last fret"
            ));
        }

        Ok(Self::new(first, last))
    }
}

/// Display state of one string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringState {
    label: Option<String>,
    font_color: Option<Color>,
    color: Option<Color>,
}

impl StringState {
    /// Label drawn past the end of the string, e.g. `"X"` or `"O"`.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn font_color(&self) -> Option<Color> {
        self.font_color
    }

    /// Line color, overriding `string.color`.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// The string(s) a marker is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerString {
    Single(usize),
    /// A barre from the first to the second string, inclusive.
    Barre(usize, usize),
}

/// A finger position.
///
/// A marker without a fret is kept but never drawn.
///
/// # Examples
///
/// ```
/// # use fretboard::{Marker, MarkerString};
/// # use fretboard::color::Color;
/// let marker = Marker::new(2, 5)
///     .with_label("R")
///     .with_color(Color::new("crimson").unwrap());
/// assert_eq!(marker.string(), MarkerString::Single(2));
/// assert_eq!(marker.fret(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    fret: Option<u32>,
    string: MarkerString,
    color: Option<Color>,
    label: Option<String>,
    font_color: Option<Color>,
}

impl Marker {
    /// A marker on a single string.
    pub fn new(string: usize, fret: u32) -> Self {
        Self::at(MarkerString::Single(string), Some(fret))
    }

    /// A barre from string `from` to string `to`, inclusive.
    pub fn barre(from: usize, to: usize, fret: u32) -> Self {
        Self::at(MarkerString::Barre(from, to), Some(fret))
    }

    pub fn at(string: MarkerString, fret: Option<u32>) -> Self {
        Self {
            fret,
            string,
            color: None,
            label: None,
            font_color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_font_color(mut self, font_color: Color) -> Self {
        self.font_color = Some(font_color);
        self
    }

    pub fn fret(&self) -> Option<u32> {
        self.fret
    }

    pub fn string(&self) -> MarkerString {
        self.string
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn font_color(&self) -> Option<Color> {
        self.font_color
    }

    pub fn is_barre(&self) -> bool {
        matches!(self.string, MarkerString::Barre(..))
    }
}

/// A fretboard diagram.
///
/// # Examples
///
/// ```
/// # use fretboard::{FretRange, Fretboard, Instrument, Marker};
/// let mut board = Fretboard::new(Instrument::Guitar)
///     .with_frets(FretRange::new(5, 8))
///     .with_title("A minor pentatonic");
/// board.add_marker(Marker::new(0, 5).with_label("R")).unwrap();
/// board.add_barre(5, (0, 5), Some("1")).unwrap();
///
/// let svg = board.render_svg().unwrap();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    profile: InstrumentProfile,
    strings: Vec<StringState>,
    markers: Vec<Marker>,
    frets: FretRange,
    title: Option<String>,
    style: Style,
}

impl Fretboard {
    /// Creates an empty diagram for a built-in instrument, spanning frets 0-5.
    pub fn new(instrument: Instrument) -> Self {
        Self::with_profile(instrument.profile())
    }

    /// Creates an empty diagram for a custom instrument profile.
    pub fn with_profile(profile: InstrumentProfile) -> Self {
        Self {
            strings: vec![StringState::default(); profile.string_count()],
            profile,
            markers: Vec::new(),
            frets: FretRange::default(),
            title: None,
            style: Style::default_borrowed().clone(),
        }
    }

    pub fn with_frets(mut self, frets: FretRange) -> Self {
        self.frets = frets;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the whole style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Merges `overrides` into the current style.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::InvalidStyleOverride`] if the override is
    /// invalid. The current style is left untouched in that case.
    pub fn apply_style_override(
        &mut self,
        overrides: &StyleOverride,
    ) -> Result<(), FretboardError> {
        self.style = self.style.merged(overrides)?;
        Ok(())
    }

    /// Adds a marker. Markers at the same position overlap; the last one
    /// added is drawn on top.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::StringOutOfRange`] if the marker targets a
    /// string the instrument does not have.
    pub fn add_marker(&mut self, marker: Marker) -> Result<(), FretboardError> {
        match marker.string() {
            MarkerString::Single(string) => self.check_string(string)?,
            MarkerString::Barre(from, to) => {
                self.check_string(from)?;
                self.check_string(to)?;
            }
        }

        trace!(marker:?; "Adding marker");
        self.markers.push(marker);
        Ok(())
    }

    /// Adds a barre across `strings` (inclusive) at `fret`.
    pub fn add_barre(
        &mut self,
        fret: u32,
        strings: (usize, usize),
        label: Option<&str>,
    ) -> Result<(), FretboardError> {
        let mut marker = Marker::barre(strings.0, strings.1, fret);
        if let Some(label) = label {
            marker = marker.with_label(label);
        }
        self.add_marker(marker)
    }

    /// Sets the label drawn past the end of a string.
    pub fn add_string_label(
        &mut self,
        string: usize,
        label: impl Into<String>,
        font_color: Option<Color>,
    ) -> Result<(), FretboardError> {
        self.check_string(string)?;
        let state = &mut self.strings[string];
        state.label = Some(label.into());
        state.font_color = font_color;
        Ok(())
    }

    /// Overrides the line color of a single string.
    pub fn set_string_color(&mut self, string: usize, color: Color) -> Result<(), FretboardError> {
        self.check_string(string)?;
        self.strings[string].color = Some(color);
        Ok(())
    }

    pub fn profile(&self) -> &InstrumentProfile {
        &self.profile
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn strings(&self) -> &[StringState] {
        &self.strings
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn frets(&self) -> FretRange {
        self.frets
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn orientation(&self) -> Orientation {
        self.style.drawing.orientation
    }

    /// Computes a fresh layout for the current state.
    pub fn layout(&self) -> Result<Layout, FretboardError> {
        compute_layout(
            self.frets,
            self.string_count(),
            &self.style,
            self.title.is_some(),
            self.orientation(),
        )
    }

    /// Renders the diagram into an ordered list of primitives.
    pub fn render(&self) -> Result<DrawList, FretboardError> {
        render::render(self)
    }

    /// Renders the diagram to an SVG string.
    pub fn render_svg(&self) -> Result<String, FretboardError> {
        let (list, layout) = self.render_with_layout()?;
        Ok(export::svg::to_document(&list, layout.canvas()).to_string())
    }

    /// Renders the diagram as SVG into `writer`.
    pub fn write_svg(&self, writer: impl Write) -> Result<(), FretboardError> {
        let (list, layout) = self.render_with_layout()?;
        let document = export::svg::to_document(&list, layout.canvas());
        svg::write(writer, &document)?;
        Ok(())
    }

    /// Renders the diagram as SVG into the file at `path`.
    ///
    /// The file is created (or truncated), written and flushed within this
    /// call.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FretboardError> {
        let path = path.as_ref();
        info!(path:? = path; "Saving diagram");

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_svg(&mut writer)?;
        writer.flush()?;

        debug!(path:? = path; "Diagram saved");
        Ok(())
    }

    fn render_with_layout(&self) -> Result<(DrawList, Layout), FretboardError> {
        let layout = self.layout()?;
        let list = render::render_with(self, &layout);
        Ok((list, layout))
    }

    fn check_string(&self, index: usize) -> Result<(), FretboardError> {
        if index < self.string_count() {
            Ok(())
        } else {
            Err(FretboardError::StringOutOfRange {
                index,
                count: self.string_count(),
            })
        }
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new(Instrument::default())
    }
}
