//! CPU rendering into an ARGB8888 color buffer.

mod renderer;

pub use renderer::Renderer;
