//! Cohen–Sutherland line clipping with a small interactive viewer.
//!
//! The [`clipper`] module is self-contained: it classifies a segment against
//! an axis-aligned rectangle and returns the visible piece together with every
//! piece cut away. The remaining modules paint those pieces with a CPU
//! renderer and show them in an SDL2 window.
//!
//! # Quick Start
//!
//! ```
//! use line_clipper::prelude::*;
//!
//! let rect = ClipRect::new(-200.0, -100.0, 200.0, 100.0).unwrap();
//! let result = clip(Segment::from_coords(-300.0, 0.0, 300.0, 0.0), &rect);
//!
//! assert_eq!(result.kind(), ClipKind::Partial);
//! assert_eq!(result.segment(), Some(Segment::from_coords(-200.0, 0.0, 200.0, 0.0)));
//! assert_eq!(result.discarded().len(), 2);
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod config;
pub mod logging;
pub mod math;
pub mod render;
pub mod viewer;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip, ClipError, ClipKind, ClipRect, ClipResult, Outcode, Segment};
pub use config::ViewerConfig;
pub use viewer::Viewer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use line_clipper::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip, ClipError, ClipKind, ClipRect, ClipResult, Fragment, FragmentStyle, Outcode,
        Segment,
    };

    // Math
    pub use crate::math::Vec2;

    // Viewer
    pub use crate::config::ViewerConfig;
    pub use crate::viewer::Viewer;

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
