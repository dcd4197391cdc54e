//! Fretboard - chord and fretboard diagrams for stringed instruments.
//!
//! Chord notation is interpreted into a [`Fretboard`] model, laid out by the
//! layout engine, rendered into backend-neutral primitives and exported as
//! SVG. Guitar, bass and ukulele are built in; other instruments can be
//! described with an [`InstrumentProfile`].

pub mod config;
pub mod export;

mod chord;
mod error;
mod instrument;
mod layout;
mod model;
mod render;
mod style;

pub use fretboard_core::{color, draw, geometry};

pub use chord::{Barre, Chord};
pub use error::FretboardError;
pub use instrument::{Inlay, Instrument, InstrumentProfile};
pub use layout::{Layout, compute_layout};
pub use model::{FretRange, Fretboard, Marker, MarkerString, StringState};
pub use style::{
    DrawingOverride, DrawingStyle, FretLabelOverride, FretLabelStyle, FretOverride, FretStyle,
    InlayOverride, InlayStyle, MarkerOverride, MarkerStyle, NutOverride, NutStyle, Orientation,
    StringOverride, StringStyle, Style, StyleOverride, TitleOverride, TitleStyle,
};

use log::{debug, info};

use config::AppConfig;

/// Builder for chord and fretboard diagrams.
///
/// Every diagram it creates uses the configured instrument and has the
/// configured style override applied.
///
/// # Examples
///
/// ```rust,no_run
/// use fretboard::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Interpret a chord
/// let board = builder
///     .chord("xx0232", "---132")
///     .expect("Failed to parse chord")
///     .to_fretboard()
///     .expect("Failed to build diagram");
///
/// // Render it to SVG
/// let svg = builder.render_svg(&board)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Replaces the configured instrument.
    pub fn with_instrument(self, instrument: Instrument) -> Self {
        Self {
            config: AppConfig::new(instrument, self.config.style().clone()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse chord notation for the configured instrument.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::MalformedChord`] if either notation is
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fretboard::DiagramBuilder;
    ///
    /// let chord = DiagramBuilder::default()
    ///     .chord("x-15-14-11-12-11", "-43121")
    ///     .expect("Failed to parse chord");
    /// assert_eq!(chord.fret_range().first(), 11);
    /// ```
    pub fn chord(&self, positions: &str, fingers: &str) -> Result<Chord, FretboardError> {
        info!(positions = positions, fingers = fingers; "Parsing chord");

        let chord = Chord::new(self.config.instrument(), positions, fingers)?
            .with_style_override(self.config.style().clone());

        debug!(positions:? = chord.positions(); "Chord parsed successfully");
        Ok(chord)
    }

    /// Create an empty fretboard for the configured instrument.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::InvalidStyleOverride`] if the configured
    /// style override does not merge.
    pub fn fretboard(&self) -> Result<Fretboard, FretboardError> {
        let mut board = Fretboard::new(self.config.instrument());
        board.apply_style_override(self.config.style())?;
        Ok(board)
    }

    /// Render a fretboard to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::InvalidLayout`] if the diagram cannot be
    /// laid out.
    pub fn render_svg(&self, board: &Fretboard) -> Result<String, FretboardError> {
        info!(instrument = self.config.instrument().name(); "Rendering diagram");
        let svg = board.render_svg()?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
