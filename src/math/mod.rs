//! Minimal 2D vector math used by the clipper and the viewer.

pub mod vec2;

pub use vec2::Vec2;
