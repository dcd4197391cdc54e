//! Strokes for fret wires, strings, the nut, barres and marker borders.
//!
//! A [`StrokeDefinition`] is a color, a width and a [`StrokeCap`]. Barres are
//! the only round-capped strokes; everything else keeps the butt default.
//! [`apply_stroke!`](crate::apply_stroke!) writes a definition onto an SVG
//! element, leaving out attributes that equal the SVG defaults
//! (`stroke-linecap="butt"`, `stroke-opacity="1"`).

use crate::color::Color;

/// Line endpoint shape, as in SVG `stroke-linecap`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    /// Extends past each endpoint by half the width; used for barres.
    Round,
    Square,
}

impl StrokeCap {
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Color, width and cap of a stroked line or outline.
///
/// # Examples
///
/// ```
/// use fretboard_core::draw::{StrokeCap, StrokeDefinition};
/// use fretboard_core::color::Color;
///
/// let fret_wire = StrokeDefinition::new(Color::new("darkgray").unwrap(), 2.0);
/// assert_eq!(fret_wire.cap(), StrokeCap::Butt);
///
/// let barre = StrokeDefinition::new(Color::new("darkslategray").unwrap(), 28.0)
///     .with_cap(StrokeCap::Round);
/// assert_eq!(barre.cap(), StrokeCap::Round);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::Butt,
        }
    }

    pub fn with_cap(self, cap: StrokeCap) -> Self {
        Self { cap, ..self }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Whether the stroke paints anything at all.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.alpha() > 0.0
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Writes the `stroke*` attributes of a [`StrokeDefinition`] onto an SVG
/// element.
///
/// ```
/// use fretboard_core::{color::Color, draw::StrokeDefinition};
///
/// let nut = StrokeDefinition::new(Color::new("darkslategray").unwrap(), 10.0);
/// let line = fretboard_core::apply_stroke!(svg::node::element::Line::new(), &nut);
///
/// let rendered = line.to_string();
/// assert!(rendered.contains(r#"stroke-width="10""#));
/// assert!(!rendered.contains("stroke-linecap"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::draw::StrokeDefinition = $stroke;
        let color = stroke.color();

        let element = $element
            .set("stroke", color.to_string())
            .set("stroke-width", stroke.width());
        let element = match stroke.cap() {
            $crate::draw::StrokeCap::Butt => element,
            cap => element.set("stroke-linecap", cap.to_svg_value()),
        };
        if color.alpha() < 1.0 {
            element.set("stroke-opacity", color.alpha())
        } else {
            element
        }
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Line};

    use super::*;

    fn color(name: &str) -> Color {
        Color::new(name).unwrap()
    }

    #[test]
    fn test_default_stroke_is_thin_black_butt() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color(), Color::default());
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert!(stroke.is_visible());
    }

    #[test]
    fn test_invisible_strokes() {
        assert!(!StrokeDefinition::new(color("black"), 0.0).is_visible());
        assert!(!StrokeDefinition::new(color("rgba(0, 0, 0, 0)"), 2.0).is_visible());
    }

    #[test]
    fn test_round_cap_is_written() {
        let barre = StrokeDefinition::new(color("darkslategray"), 28.0).with_cap(StrokeCap::Round);
        let rendered = crate::apply_stroke!(Line::new(), &barre).to_string();

        assert!(rendered.contains(r#"stroke-width="28""#));
        assert!(rendered.contains(r#"stroke-linecap="round""#));
        assert!(!rendered.contains("stroke-opacity"));
    }

    #[test]
    fn test_translucent_stroke_writes_opacity() {
        let border = StrokeDefinition::new(color("rgba(0, 0, 0, 0.5)"), 2.0);
        let rendered = crate::apply_stroke!(Circle::new(), &border).to_string();

        assert!(rendered.contains(r#"stroke-opacity="0.5""#));
    }
}
