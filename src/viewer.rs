//! Interactive line clipping viewer.
//!
//! The [`Viewer`] owns the frame's color buffer, tracks the pointer drag that
//! defines the segment, and repaints the clip rectangle and the clipped
//! segment each frame. It has no SDL dependency, so it can be driven headless.

use crate::clipper::{clip, ClipError, ClipRect, ClipResult, Segment};
use crate::colors;
use crate::config::ViewerConfig;
use crate::math::Vec2;
use crate::render::Renderer;

pub struct Viewer {
    renderer: Renderer,
    config: ViewerConfig,
    clip_rect: ClipRect,
    drag_start: Option<Vec2>,
    segment: Option<Segment>,
    last_clip: Option<ClipResult>,
}

impl Viewer {
    /// Create a viewer sized from `config`.
    ///
    /// # Errors
    /// Fails if the configured clip size does not produce a valid rectangle.
    pub fn new(config: ViewerConfig) -> Result<Self, ClipError> {
        let clip_rect = centered_clip_rect(&config, config.width, config.height)?;
        Ok(Self {
            renderer: Renderer::new(config.width, config.height),
            config,
            clip_rect,
            drag_start: None,
            segment: None,
            last_clip: None,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn clip_rect(&self) -> &ClipRect {
        &self.clip_rect
    }

    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// Result of clipping the current segment, refreshed by [`Viewer::update`].
    pub fn last_clip(&self) -> Option<&ClipResult> {
        self.last_clip.as_ref()
    }

    /// Resize the buffer and re-center the clip rectangle on the new view.
    ///
    /// # Errors
    /// Fails if the configured clip size does not produce a valid rectangle.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ClipError> {
        self.clip_rect = centered_clip_rect(&self.config, width, height)?;
        self.renderer.resize(width, height);
        self.config.width = width;
        self.config.height = height;
        Ok(())
    }

    pub fn toggle_grid(&mut self) {
        self.config.show_grid = !self.config.show_grid;
    }

    pub fn clear_segment(&mut self) {
        self.drag_start = None;
        self.segment = None;
        self.last_clip = None;
    }

    /// Start a new segment at `p`.
    pub fn pointer_pressed(&mut self, p: Vec2) {
        self.drag_start = Some(p);
    }

    /// Finish the segment at `p`. Releases without a matching press are ignored.
    pub fn pointer_released(&mut self, p: Vec2) {
        if let Some(start) = self.drag_start.take() {
            let segment = Segment::new(start, p);
            log::debug!("new segment {segment:?}");
            self.segment = Some(segment);
        }
    }

    /// Clip the current segment against the current rectangle.
    pub fn update(&mut self) {
        let Some(segment) = self.segment else {
            self.last_clip = None;
            return;
        };

        let result = clip(segment, &self.clip_rect);
        let changed = self
            .last_clip
            .as_ref()
            .map_or(true, |previous| previous != &result);
        if changed {
            log::info!(
                "{:?}: visible {:?}, {} piece(s) discarded",
                result.kind(),
                result.segment(),
                result.discarded().len()
            );
        }
        self.last_clip = Some(result);
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);

        if self.config.show_grid {
            self.renderer
                .draw_grid(self.config.grid_spacing, colors::GRID);
        }

        self.renderer
            .draw_clip_rect(&self.clip_rect, colors::CLIP_RECT);

        if let Some(result) = &self.last_clip {
            self.renderer.draw_clip_result(result);
        }

        if let Some(start) = self.drag_start {
            self.renderer.draw_marker(start, 5, colors::ANCHOR);
        }
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.renderer.get_pixel(x, y)
    }
}

fn centered_clip_rect(
    config: &ViewerConfig,
    width: u32,
    height: u32,
) -> Result<ClipRect, ClipError> {
    let center = Vec2::new((width / 2) as f32, (height / 2) as f32);
    ClipRect::centered(center, config.clip_width, config.clip_height)
}
