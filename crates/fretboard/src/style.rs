//! The typed style tree.
//!
//! A [`Style`] holds every visual attribute of a diagram, grouped in sections
//! (`drawing`, `nut`, `fret`, `fret_label`, `inlays`, `string`, `marker`,
//! `title`). Two immutable defaults exist for the whole process:
//!
//! - [`Style::default_borrowed`] for free fretboards
//! - [`Style::chord_default_borrowed`] for chord diagrams, which additionally
//!   colors the open and muted string labels
//!
//! Partial customisation goes through a [`StyleOverride`], whose leaves are all
//! optional. [`Style::merged`] clones the base style and replaces only the
//! leaves the override sets.
//!
//! # Example
//!
//! ```
//! # use fretboard::{Orientation, Style, StyleOverride};
//! let overrides: StyleOverride = toml::from_str(
//!     r#"
//!     [drawing]
//!     orientation = "landscape"
//!
//!     [marker]
//!     color = "teal"
//!     "#,
//! )
//! .unwrap();
//!
//! let style = Style::default_borrowed().merged(&overrides).unwrap();
//! assert_eq!(style.drawing.orientation, Orientation::Landscape);
//! assert_eq!(style.nut.size, 10.0);
//! ```

mod overrides;

pub use overrides::{
    DrawingOverride, FretLabelOverride, FretOverride, InlayOverride, MarkerOverride, NutOverride,
    StringOverride, StyleOverride, TitleOverride,
};

use std::sync::OnceLock;

use serde::Deserialize;

use fretboard_core::{color::Color, draw::FontStyle};

use crate::error::FretboardError;

static DEFAULT_STYLE: OnceLock<Style> = OnceLock::new();
static CHORD_DEFAULT_STYLE: OnceLock<Style> = OnceLock::new();

/// Direction in which the diagram is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Strings run vertically, the nut is at the top.
    #[default]
    Portrait,
    /// Strings run horizontally, the nut is on the left.
    Landscape,
}

/// Canvas-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingStyle {
    pub orientation: Orientation,
    pub background_color: Option<Color>,
    pub font_color: Color,
    pub font_family: String,
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
    /// Label every fret line instead of only the first one.
    pub label_all_frets: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutStyle {
    pub color: Color,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FretStyle {
    pub color: Color,
    pub size: f32,
}

/// Fret number labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FretLabelStyle {
    /// Falls back to `drawing.font_family` when unset.
    pub font_family: Option<String>,
    /// Multiplier applied to `drawing.font_size`.
    pub font_scale: f32,
    pub font_style: FontStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlayStyle {
    pub color: Color,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringStyle {
    pub color: Color,
    /// Width of the lowest string.
    pub size: f32,
    pub muted_font_color: Option<Color>,
    pub open_font_color: Option<Color>,
    pub label_font_family: String,
    pub label_font_size: f32,
    /// Draw every string with `size` instead of tapering them.
    pub equal_weight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub border_color: Color,
    pub color: Color,
    pub font_color: Color,
    pub stroke_width: f32,
    /// Fixed marker radius. Derived from the layout when unset.
    pub radius: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    pub font_color: Color,
    pub font_family: String,
    pub font_size: f32,
}

/// The complete, resolved style of a diagram.
///
/// # Default Values
///
/// | Section | Attribute | Default |
/// |---------|-----------|---------|
/// | drawing | orientation | portrait |
/// | drawing | background_color | none |
/// | drawing | font (color / family / size) | dimgray / Verdana / 24 |
/// | drawing | width / height / spacing | 300 / 400 / 30 |
/// | nut | color / size | darkslategray / 10 |
/// | fret | color / size | darkgray / 2 |
/// | fret_label | font_scale / font_style | 0.8 / italic |
/// | inlays | color / radius | darkslategray / 2 |
/// | string | color / size | darkslategray / 3 |
/// | string | label font (family / size) | Verdana / 8 |
/// | marker | border / fill / font color | black / darkslategray / white |
/// | marker | stroke_width | 2 |
/// | title | font (color / family / size) | dimgray / Verdana / 30 |
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub drawing: DrawingStyle,
    pub nut: NutStyle,
    pub fret: FretStyle,
    pub fret_label: FretLabelStyle,
    pub inlays: InlayStyle,
    pub string: StringStyle,
    pub marker: MarkerStyle,
    pub title: TitleStyle,
}

fn named(name: &str) -> Color {
    Color::new(name).expect("built-in style colors are valid CSS names")
}

impl Style {
    /// Returns a reference to the process-wide default style.
    pub fn default_borrowed() -> &'static Self {
        DEFAULT_STYLE.get_or_init(|| Style {
            drawing: DrawingStyle {
                orientation: Orientation::Portrait,
                background_color: None,
                font_color: named("dimgray"),
                font_family: String::from("Verdana"),
                font_size: 24.0,
                width: 300.0,
                height: 400.0,
                spacing: 30.0,
                label_all_frets: false,
            },
            nut: NutStyle {
                color: named("darkslategray"),
                size: 10.0,
            },
            fret: FretStyle {
                color: named("darkgray"),
                size: 2.0,
            },
            fret_label: FretLabelStyle {
                font_family: None,
                font_scale: 0.8,
                font_style: FontStyle::Italic,
            },
            inlays: InlayStyle {
                color: named("darkslategray"),
                radius: 2.0,
            },
            string: StringStyle {
                color: named("darkslategray"),
                size: 3.0,
                muted_font_color: None,
                open_font_color: None,
                label_font_family: String::from("Verdana"),
                label_font_size: 8.0,
                equal_weight: false,
            },
            marker: MarkerStyle {
                border_color: named("black"),
                color: named("darkslategray"),
                font_color: named("white"),
                stroke_width: 2.0,
                radius: None,
            },
            title: TitleStyle {
                font_color: named("dimgray"),
                font_family: String::from("Verdana"),
                font_size: 30.0,
            },
        })
    }

    /// Returns a reference to the default style of chord diagrams.
    ///
    /// Same as [`Style::default_borrowed`], with muted string labels in silver
    /// and open string labels in darkslategray.
    pub fn chord_default_borrowed() -> &'static Self {
        CHORD_DEFAULT_STYLE.get_or_init(|| {
            let mut style = Self::default_borrowed().clone();
            style.string.muted_font_color = Some(named("silver"));
            style.string.open_font_color = Some(named("darkslategray"));
            style
        })
    }

    /// Returns a copy of this style with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::InvalidStyleOverride`] if a color in the
    /// override does not parse, or if a size ends up non-positive.
    pub fn merged(&self, overrides: &StyleOverride) -> Result<Self, FretboardError> {
        let mut style = self.clone();
        overrides.apply_to(&mut style)?;
        style.validate()?;
        Ok(style)
    }

    /// Font size of the fret number labels.
    pub fn fret_label_font_size(&self) -> f32 {
        self.drawing.font_size * self.fret_label.font_scale
    }

    /// Font family of the fret number labels.
    pub fn fret_label_font_family(&self) -> &str {
        self.fret_label
            .font_family
            .as_deref()
            .unwrap_or(&self.drawing.font_family)
    }

    fn validate(&self) -> Result<(), FretboardError> {
        let positive = [
            ("drawing.font_size", self.drawing.font_size),
            ("drawing.width", self.drawing.width),
            ("drawing.height", self.drawing.height),
            ("drawing.spacing", self.drawing.spacing),
            ("fret_label.font_scale", self.fret_label.font_scale),
            ("string.label_font_size", self.string.label_font_size),
            ("title.font_size", self.title.font_size),
        ];
        let non_negative = [
            ("nut.size", self.nut.size),
            ("fret.size", self.fret.size),
            ("inlays.radius", self.inlays.radius),
            ("string.size", self.string.size),
            ("marker.stroke_width", self.marker.stroke_width),
            ("marker.radius", self.marker.radius.unwrap_or(0.0)),
        ];

        if let Some((key, value)) = positive.iter().find(|(_, value)| !(*value > 0.0)) {
            return Err(FretboardError::InvalidStyleOverride(format!(
                "`{key}` must be positive, got {value}"
            )));
        }
        if let Some((key, value)) = non_negative.iter().find(|(_, value)| !(*value >= 0.0)) {
            return Err(FretboardError::InvalidStyleOverride(format!(
                "`{key}` must not be negative, got {value}"
            )));
        }

        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::default_borrowed().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_borrowed_returns_static() {
        assert!(ptr::eq(Style::default_borrowed(), Style::default_borrowed()));
        assert!(ptr::eq(
            Style::chord_default_borrowed(),
            Style::chord_default_borrowed()
        ));
    }

    #[test]
    fn test_default_values() {
        let style = Style::default_borrowed();

        assert_eq!(style.drawing.orientation, Orientation::Portrait);
        assert!(style.drawing.background_color.is_none());
        assert_eq!(style.drawing.font_family, "Verdana");
        assert_approx_eq!(f32, style.drawing.width, 300.0);
        assert_approx_eq!(f32, style.drawing.height, 400.0);
        assert_approx_eq!(f32, style.drawing.spacing, 30.0);
        assert_approx_eq!(f32, style.nut.size, 10.0);
        assert_approx_eq!(f32, style.fret.size, 2.0);
        assert_approx_eq!(f32, style.string.size, 3.0);
        assert_approx_eq!(f32, style.string.label_font_size, 8.0);
        assert_approx_eq!(f32, style.title.font_size, 30.0);
        assert_eq!(style.fret_label.font_style, FontStyle::Italic);
        assert!(style.string.muted_font_color.is_none());
        assert!(style.marker.radius.is_none());
    }

    #[test]
    fn test_chord_default_colors_open_and_muted_labels() {
        let style = Style::chord_default_borrowed();

        assert_eq!(style.string.muted_font_color, Some(named("silver")));
        assert_eq!(style.string.open_font_color, Some(named("darkslategray")));
        assert_eq!(style.nut, Style::default_borrowed().nut);
    }

    #[test]
    fn test_empty_override_is_identity() {
        let merged = Style::default_borrowed()
            .merged(&StyleOverride::default())
            .unwrap();
        assert_eq!(&merged, Style::default_borrowed());
    }

    #[test]
    fn test_merge_replaces_only_set_leaves() {
        let overrides: StyleOverride = toml::from_str(
            r#"
            [drawing]
            width = 500
            background_color = "white"

            [string]
            equal_weight = true
            "#,
        )
        .unwrap();

        let merged = Style::default_borrowed().merged(&overrides).unwrap();
        assert_approx_eq!(f32, merged.drawing.width, 500.0);
        assert_approx_eq!(f32, merged.drawing.height, 400.0);
        assert_eq!(merged.drawing.background_color, Some(named("white")));
        assert!(merged.string.equal_weight);
        assert_eq!(merged.string.color, named("darkslategray"));
        assert_eq!(merged.title, Style::default_borrowed().title);
    }

    #[test]
    fn test_merge_rejects_non_positive_size() {
        let overrides = StyleOverride {
            drawing: DrawingOverride {
                spacing: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = Style::default_borrowed().merged(&overrides).unwrap_err();
        assert!(matches!(err, FretboardError::InvalidStyleOverride(_)));
        assert!(err.to_string().contains("drawing.spacing"));
    }

    #[test]
    fn test_fret_label_font_fallback() {
        let mut style = Style::default();
        assert_eq!(style.fret_label_font_family(), "Verdana");
        assert_approx_eq!(f32, style.fret_label_font_size(), 19.2);

        style.fret_label.font_family = Some("Georgia".to_string());
        assert_eq!(style.fret_label_font_family(), "Georgia");
    }
}
