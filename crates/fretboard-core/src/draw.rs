//! Draw primitives for diagram rendering
//!
//! The renderer never talks to an output format directly. It produces a
//! [`DrawList`]: an ordered sequence of [`Primitive`] draw commands (lines,
//! circles, rectangles and text), each tagged with the [`RenderLayer`] it
//! belongs to. A [`Backend`] replays the list into a concrete format.
//!
//! Every primitive also implements [`Drawable`], which converts it into an
//! SVG node for the SVG backend.

mod backend;
mod layer;
mod primitive;
mod stroke;
mod text;

pub use backend::{Backend, DrawList};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Circle, Line, Primitive, Rect, Text};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{FontStyle, FontWeight, TextAnchor, TextBaseline, TextDefinition};

/// A primitive that knows how to express itself as an SVG node.
pub trait Drawable: std::fmt::Debug {
    fn render_to_svg(&self) -> SvgNode;
}
