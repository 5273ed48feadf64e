//! Viewer settings.

pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 600;
pub const CLIP_WIDTH: f32 = 400.0;
pub const CLIP_HEIGHT: f32 = 200.0;
pub const FPS: u64 = 60;

/// Settings for the interactive viewer.
///
/// The clip rectangle is always `clip_width` x `clip_height`, centered in
/// the current view, and follows the window when it is resized.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clip_width: f32,
    pub clip_height: f32,
    pub show_grid: bool,
    pub grid_spacing: i32,
    pub target_fps: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Line Clipping".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            clip_width: CLIP_WIDTH,
            clip_height: CLIP_HEIGHT,
            show_grid: false,
            grid_spacing: 50,
            target_fps: FPS,
        }
    }
}

impl ViewerConfig {
    /// Milliseconds per frame at the target frame rate.
    pub fn frame_target_time(&self) -> u64 {
        1000 / self.target_fps.max(1)
    }
}
