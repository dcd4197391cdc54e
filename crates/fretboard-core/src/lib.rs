//! Fretboard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the fretboard
//! diagram renderer. It includes:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Primitive draw commands, render layers and the backend seam
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
