//! Line clipping against an axis-aligned rectangle.
//!
//! - [`outcode`]: Cohen–Sutherland region codes for points.
//! - [`rect`]: the validated clip rectangle.
//! - [`cohen_sutherland`]: the clipping loop and its result types.

pub mod cohen_sutherland;
pub mod error;
pub mod outcode;
pub mod rect;

pub use cohen_sutherland::{
    clip, ClipKind, ClipResult, Fragment, FragmentStyle, Segment, MAX_CLIP_STEPS,
};
pub use error::{Axis, ClipError};
pub use outcode::Outcode;
pub use rect::ClipRect;
