//! Render layers and per-layer SVG grouping.
//!
//! A fretboard diagram is painted back to front: background, frets, inlays,
//! fret numbers, strings, nut, markers, title. Each primitive is tagged with
//! its [`RenderLayer`], and [`LayeredOutput`] turns the tagged SVG nodes into
//! one `<g data-layer="...">` group per layer in that order.
//!
//! ```
//! # use fretboard_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Circle, Line};
//! let mut output = LayeredOutput::new();
//! output.push(RenderLayer::Markers, Box::new(Circle::new()));
//! output.push(RenderLayer::Frets, Box::new(Line::new()));
//!
//! let groups = output.into_groups();
//! assert!(groups[0].to_string().contains(r#"data-layer="frets""#));
//! assert!(groups[1].to_string().contains(r#"data-layer="markers""#));
//! ```

use std::collections::BTreeMap;

use svg::node::element::Group;

/// A boxed SVG node.
pub type SvgNode = Box<dyn svg::Node>;

/// Paint order of a fretboard diagram, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    Background,
    Frets,
    Inlays,
    FretLabels,
    /// String lines and the open/muted labels past their ends
    Strings,
    Nut,
    /// Finger markers and barres
    Markers,
    Title,
}

impl RenderLayer {
    /// Value of the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Frets => "frets",
            Self::Inlays => "inlays",
            Self::FretLabels => "fret-labels",
            Self::Strings => "strings",
            Self::Nut => "nut",
            Self::Markers => "markers",
            Self::Title => "title",
        }
    }
}

/// SVG nodes collected per layer.
///
/// Nodes of one layer keep the order they were pushed in.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// One group per non-empty layer, bottom layer first.
    pub fn into_groups(self) -> Vec<Group> {
        self.layers
            .into_iter()
            .map(|(layer, nodes)| {
                nodes
                    .into_iter()
                    .fold(Group::new().set("data-layer", layer.name()), |group, node| {
                        group.add(node)
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Line, Text};

    use super::*;

    #[test]
    fn test_empty_output_has_no_groups() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.into_groups().is_empty());
    }

    #[test]
    fn test_one_group_per_layer() {
        let mut output = LayeredOutput::new();
        for _ in 0..6 {
            output.push(RenderLayer::Strings, Box::new(Line::new()));
        }
        output.push(RenderLayer::Markers, Box::new(Circle::new()));
        output.push(RenderLayer::Markers, Box::new(Text::new("1")));

        let groups = output.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].to_string().matches("<line").count(), 6);
    }

    #[test]
    fn test_nodes_keep_push_order_within_layer() {
        let mut output = LayeredOutput::new();
        output.push(RenderLayer::Markers, Box::new(Circle::new().set("id", "first")));
        output.push(RenderLayer::Title, Box::new(Text::new("G")));
        output.push(RenderLayer::Markers, Box::new(Circle::new().set("id", "second")));

        let markers = output.into_groups()[0].to_string();
        let first = markers.find("first").unwrap();
        let second = markers.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_layers_follow_paint_order() {
        let order = [
            RenderLayer::Background,
            RenderLayer::Frets,
            RenderLayer::Inlays,
            RenderLayer::FretLabels,
            RenderLayer::Strings,
            RenderLayer::Nut,
            RenderLayer::Markers,
            RenderLayer::Title,
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
