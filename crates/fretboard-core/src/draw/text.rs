//! Text style definitions for diagram labels.
//!
//! A [`TextDefinition`] bundles the font and placement attributes of a text
//! primitive: family, size, weight, style, fill color, horizontal anchor and
//! vertical baseline. The renderer builds one definition per kind of label
//! (string labels, marker labels, fret numbers, title) from the resolved style.
//!
//! # Quick Start
//!
//! ```
//! # use fretboard_core::draw::{FontWeight, TextAnchor, TextBaseline, TextDefinition};
//! # use fretboard_core::color::Color;
//! let label = TextDefinition::new("Verdana", 24.0)
//!     .with_weight(FontWeight::Bold)
//!     .with_color(Color::new("white").unwrap())
//!     .with_anchor(TextAnchor::Middle)
//!     .with_baseline(TextBaseline::Central);
//! assert_eq!(label.font_size(), 24.0);
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Font weight of a text primitive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font style of a text primitive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// Returns the SVG font-style value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
///
/// Maps to the SVG `text-anchor` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical alignment of text relative to its anchor point.
///
/// Maps to the SVG `alignment-baseline` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// Align the middle of lowercase letters with the anchor
    Middle,
    /// Align the center of the em box with the anchor
    Central,
}

impl TextBaseline {
    /// Returns the SVG alignment-baseline value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::Central => "central",
        }
    }
}

/// Defines the visual style for text primitives.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Verdana"` |
/// | Font size | `24` |
/// | Weight / style | normal / normal |
/// | Color | black |
/// | Anchor | start |
/// | Baseline | none (SVG default) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    style: FontStyle,
    color: Color,
    anchor: TextAnchor,
    baseline: Option<TextBaseline>,
}

impl TextDefinition {
    /// Creates a text definition with the given font, keeping other defaults.
    pub fn new(font_family: &str, font_size: f32) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn baseline(&self) -> Option<TextBaseline> {
        self.baseline
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Verdana".to_string(),
            font_size: 24.0,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            color: Color::default(),
            anchor: TextAnchor::default(),
            baseline: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_default() {
        let def = TextDefinition::default();
        assert_eq!(def.font_family(), "Verdana");
        assert_eq!(def.font_size(), 24.0);
        assert_eq!(def.weight(), FontWeight::Normal);
        assert_eq!(def.anchor(), TextAnchor::Start);
        assert!(def.baseline().is_none());
    }

    #[test]
    fn test_text_definition_builders() {
        let def = TextDefinition::new("Helvetica", 19.2)
            .with_weight(FontWeight::Bold)
            .with_style(FontStyle::Italic)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Middle);

        assert_eq!(def.font_family(), "Helvetica");
        assert_eq!(def.weight(), FontWeight::Bold);
        assert_eq!(def.style(), FontStyle::Italic);
        assert_eq!(def.anchor(), TextAnchor::Middle);
        assert_eq!(def.baseline(), Some(TextBaseline::Middle));
    }

    #[test]
    fn test_svg_values() {
        assert_eq!(FontWeight::Bold.to_svg_value(), "bold");
        assert_eq!(FontStyle::Italic.to_svg_value(), "italic");
        assert_eq!(TextAnchor::End.to_svg_value(), "end");
        assert_eq!(TextBaseline::Central.to_svg_value(), "central");
    }
}
