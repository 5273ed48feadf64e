//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! the drawing operations the viewer needs: lines, rectangle outlines, a grid,
//! and clipped segments.

use crate::clipper::{ClipRect, ClipResult, Segment};
use crate::colors;
use crate::math::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Outline the four edges of a clip rectangle.
    pub fn draw_clip_rect(&mut self, rect: &ClipRect, color: u32) {
        let corners = rect.corners();
        for i in 0..corners.len() {
            let from = corners[i];
            let to = corners[(i + 1) % corners.len()];
            self.draw_segment(&Segment::new(from, to), color);
        }
    }

    pub fn draw_segment(&mut self, segment: &Segment, color: u32) {
        let (x0, y0) = segment.start.to_pixel();
        let (x1, y1) = segment.end.to_pixel();
        self.draw_line_bresenham(x0, y0, x1, y1, color);
    }

    /// Paint every fragment of a clip in order: rejected pieces first, then
    /// the visible piece on top.
    pub fn draw_clip_result(&mut self, result: &ClipResult) {
        for fragment in result.fragments() {
            self.draw_segment(&fragment.segment, colors::fragment_color(fragment.style));
        }
    }

    /// Small filled square centered on `p`.
    pub fn draw_marker(&mut self, p: Vec2, size: i32, color: u32) {
        let (x, y) = p.to_pixel();
        self.draw_rect(x - size / 2, y - size / 2, size, size, color);
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Only integer arithmetic is used. An error term tracks the distance
    /// between the ideal line and the current pixel; each step moves along the
    /// major axis and also along the minor axis once the error crosses the
    /// threshold. Both endpoints are drawn.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both branches can fire, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice borrows the buffer for as long as `self` is borrowed.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}
