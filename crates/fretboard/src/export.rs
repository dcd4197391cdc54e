//! Export of rendered diagrams.
//!
//! Rendering produces a backend-neutral [`DrawList`]; this module turns it
//! into an output format. It is the last stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Chord notation
//!     ↓ interpret
//! Fretboard
//!     ↓ layout + render
//! DrawList
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::SvgBackend`] and [`svg::to_document`]
//!
//! [`DrawList`]: fretboard_core::draw::DrawList

/// SVG export backend.
pub mod svg;
