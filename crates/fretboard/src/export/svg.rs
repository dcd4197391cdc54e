//! SVG backend built on the `svg` crate.

use log::trace;
use svg::Document;

use fretboard_core::{
    draw::{Backend, Circle, DrawList, Drawable, LayeredOutput, Line, Rect, RenderLayer, Text},
    geometry::Size,
};

/// A [`Backend`] collecting SVG nodes, grouped by render layer.
#[derive(Debug, Default)]
pub struct SvgBackend {
    output: LayeredOutput,
    layer: Option<RenderLayer>,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, primitive: &dyn Drawable) {
        let layer = self.layer.unwrap_or(RenderLayer::Background);
        self.output.push(layer, primitive.render_to_svg());
    }

    /// Wraps the collected nodes into a document of the given size.
    pub fn into_document(self, canvas: Size) -> Document {
        let (width, height) = (canvas.width(), canvas.height());
        let mut document = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        for group in self.output.into_groups() {
            document = document.add(group);
        }

        document
    }
}

impl Backend for SvgBackend {
    fn set_layer(&mut self, layer: RenderLayer) {
        trace!(layer = layer.name(); "Switching SVG layer");
        self.layer = Some(layer);
    }

    fn line(&mut self, line: &Line) {
        self.add(line);
    }

    fn circle(&mut self, circle: &Circle) {
        self.add(circle);
    }

    fn rect(&mut self, rect: &Rect) {
        self.add(rect);
    }

    fn text(&mut self, text: &Text) {
        self.add(text);
    }
}

/// Replays `list` into a new SVG document of size `canvas`.
pub fn to_document(list: &DrawList, canvas: Size) -> Document {
    let mut backend = SvgBackend::new();
    list.replay(&mut backend);
    backend.into_document(canvas)
}
