//! Primitive draw commands.
//!
//! These are the only shapes a fretboard diagram is made of:
//!
//! - [`Line`]: strings, frets, the nut and barres
//! - [`Circle`]: finger markers and inlay dots
//! - [`Rect`]: the optional background
//! - [`Text`]: string labels, marker labels, fret numbers and the title

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, StrokeDefinition, SvgNode, TextDefinition},
    geometry::{Point, Size},
};

/// A straight line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self { start, end, stroke }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Line {
    fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y());

        Box::new(apply_stroke!(line, &self.stroke))
    }
}

/// A filled circle with an optional outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    fill: Color,
    stroke: Option<StrokeDefinition>,
}

impl Circle {
    pub fn new(center: Point, radius: f32, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke: None,
        }
    }

    /// Adds an outline to the circle (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}

impl Drawable for Circle {
    fn render_to_svg(&self) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        match &self.stroke {
            Some(stroke) => Box::new(apply_stroke!(circle, stroke)),
            None => Box::new(circle),
        }
    }
}

/// An axis-aligned filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
    fill: Color,
}

impl Rect {
    pub fn new(origin: Point, size: Size, fill: Color) -> Self {
        Self { origin, size, fill }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Color {
        self.fill
    }
}

impl Drawable for Rect {
    fn render_to_svg(&self) -> SvgNode {
        let rect = svg_element::Rectangle::new()
            .set("x", self.origin.x())
            .set("y", self.origin.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        Box::new(rect)
    }
}

/// A single line of text anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    position: Point,
    definition: TextDefinition,
}

impl Text {
    pub fn new(content: impl Into<String>, position: Point, definition: TextDefinition) -> Self {
        Self {
            content: content.into(),
            position,
            definition,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl Drawable for Text {
    fn render_to_svg(&self) -> SvgNode {
        let def = &self.definition;
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-family", def.font_family())
            .set("font-size", def.font_size())
            .set("font-weight", def.weight().to_svg_value())
            .set("font-style", def.style().to_svg_value())
            .set("fill", def.color().to_string())
            .set("fill-opacity", def.color().alpha())
            .set("text-anchor", def.anchor().to_svg_value());

        if let Some(baseline) = def.baseline() {
            text = text.set("alignment-baseline", baseline.to_svg_value());
        }

        Box::new(text)
    }
}

/// One draw command of a rendered diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
    Rect(Rect),
    Text(Text),
}

impl Drawable for Primitive {
    fn render_to_svg(&self) -> SvgNode {
        match self {
            Self::Line(line) => line.render_to_svg(),
            Self::Circle(circle) => circle.render_to_svg(),
            Self::Rect(rect) => rect.render_to_svg(),
            Self::Text(text) => text.render_to_svg(),
        }
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rect> for Primitive {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Text> for Primitive {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
