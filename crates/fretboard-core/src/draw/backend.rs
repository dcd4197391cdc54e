//! The seam between the renderer and an output format.
//!
//! The renderer fills a [`DrawList`]; a [`Backend`] receives the primitives
//! one by one, in order, via [`DrawList::replay`].

use std::slice;

use crate::draw::{Circle, Line, Primitive, Rect, RenderLayer, Text};

/// A drawing target able to reproduce primitive draw calls.
///
/// Layer changes are announced through [`Backend::set_layer`] before the
/// first primitive of each layer run. Backends without a notion of layers
/// can ignore it.
pub trait Backend {
    fn set_layer(&mut self, _layer: RenderLayer) {}

    fn line(&mut self, line: &Line);

    fn circle(&mut self, circle: &Circle);

    fn rect(&mut self, rect: &Rect);

    fn text(&mut self, text: &Text);
}

/// An ordered sequence of primitives, each tagged with its render layer.
///
/// # Example
///
/// ```
/// # use fretboard_core::draw::{Circle, DrawList, RenderLayer};
/// # use fretboard_core::{color::Color, geometry::Point};
/// let mut list = DrawList::new();
/// list.push(
///     RenderLayer::Inlays,
///     Circle::new(Point::new(22.0, 130.0), 2.0, Color::default()),
/// );
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.count_in(RenderLayer::Inlays), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<(RenderLayer, Primitive)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive to the end of the list.
    pub fn push(&mut self, layer: RenderLayer, primitive: impl Into<Primitive>) {
        self.items.push((layer, primitive.into()));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (RenderLayer, Primitive)> {
        self.items.iter()
    }

    /// Returns the primitives of a single layer, in draw order.
    pub fn in_layer(&self, layer: RenderLayer) -> impl Iterator<Item = &Primitive> {
        self.items
            .iter()
            .filter(move |(item_layer, _)| *item_layer == layer)
            .map(|(_, primitive)| primitive)
    }

    /// Returns the number of primitives in a single layer.
    pub fn count_in(&self, layer: RenderLayer) -> usize {
        self.in_layer(layer).count()
    }

    /// Replays every primitive into `backend`, in order.
    pub fn replay(&self, backend: &mut dyn Backend) {
        let mut current_layer = None;

        for (layer, primitive) in &self.items {
            if current_layer != Some(*layer) {
                backend.set_layer(*layer);
                current_layer = Some(*layer);
            }

            match primitive {
                Primitive::Line(line) => backend.line(line),
                Primitive::Circle(circle) => backend.circle(circle),
                Primitive::Rect(rect) => backend.rect(rect),
                Primitive::Text(text) => backend.text(text),
            }
        }
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a (RenderLayer, Primitive);
    type IntoIter = slice::Iter<'a, (RenderLayer, Primitive)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        draw::{StrokeDefinition, TextDefinition},
        geometry::{Point, Size},
    };

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Backend for Recorder {
        fn set_layer(&mut self, layer: RenderLayer) {
            self.calls.push(format!("layer:{}", layer.name()));
        }

        fn line(&mut self, _line: &Line) {
            self.calls.push("line".to_string());
        }

        fn circle(&mut self, _circle: &Circle) {
            self.calls.push("circle".to_string());
        }

        fn rect(&mut self, _rect: &Rect) {
            self.calls.push("rect".to_string());
        }

        fn text(&mut self, _text: &Text) {
            self.calls.push("text".to_string());
        }
    }

    #[test]
    fn test_replay_preserves_order_and_announces_layers() {
        let mut list = DrawList::new();
        list.push(
            RenderLayer::Background,
            Rect::new(Point::default(), Size::new(10.0, 10.0), Color::default()),
        );
        list.push(
            RenderLayer::Frets,
            Line::new(
                Point::default(),
                Point::new(10.0, 0.0),
                StrokeDefinition::default(),
            ),
        );
        list.push(
            RenderLayer::Frets,
            Line::new(
                Point::new(0.0, 5.0),
                Point::new(10.0, 5.0),
                StrokeDefinition::default(),
            ),
        );
        list.push(
            RenderLayer::Markers,
            Circle::new(Point::new(5.0, 5.0), 1.0, Color::default()),
        );
        list.push(
            RenderLayer::Title,
            Text::new("G", Point::new(5.0, 0.0), TextDefinition::default()),
        );

        let mut recorder = Recorder::default();
        list.replay(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "layer:background",
                "rect",
                "layer:frets",
                "line",
                "line",
                "layer:markers",
                "circle",
                "layer:title",
                "text",
            ]
        );
    }

    #[test]
    fn test_empty_list_replays_nothing() {
        let list = DrawList::new();
        let mut recorder = Recorder::default();
        list.replay(&mut recorder);

        assert!(list.is_empty());
        assert!(recorder.calls.is_empty());
    }
}
