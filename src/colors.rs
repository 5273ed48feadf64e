//! Colors in ARGB8888 format.

use crate::clipper::FragmentStyle;

pub const BACKGROUND: u32 = 0xFFEEEEEE;
pub const GRID: u32 = 0xFFDDDDDD;
pub const CLIP_RECT: u32 = 0xFF000000;
pub const ACCEPTED: u32 = 0xFF00FF00;
pub const REJECTED: u32 = 0xFFFF0000;
/// Marks the start point while a drag is in progress.
pub const ANCHOR: u32 = 0xFF3366FF;

/// Paint color for a clipped fragment.
pub fn fragment_color(style: FragmentStyle) -> u32 {
    match style {
        FragmentStyle::Accepted => ACCEPTED,
        FragmentStyle::Rejected => REJECTED,
    }
}
