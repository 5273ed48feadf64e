//! Cohen–Sutherland region codes.
//!
//! The plane around a [`ClipRect`] is split into nine regions by the lines
//! extending its edges. Each point gets a 4-bit code with one bit per
//! half-plane it lies in outside the rectangle:
//!
//! ```text
//!   1001 | 1000 | 1010
//!  ------+------+------   y_max
//!   0001 | 0000 | 0010
//!  ------+------+------   y_min
//!   0101 | 0100 | 0110
//!      x_min  x_max
//! ```
//!
//! A code of zero means the point is inside or on the boundary.

use bitflags::bitflags;

use super::rect::ClipRect;
use crate::math::Vec2;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const TOP = 0b1000;
    }
}

impl Outcode {
    /// The region code of `p` relative to `rect`.
    ///
    /// LEFT/RIGHT and BOTTOM/TOP are mutually exclusive because the
    /// rectangle bounds are ordered.
    pub fn of(p: Vec2, rect: &ClipRect) -> Self {
        let mut code = Outcode::empty();

        if p.x < rect.x_min() {
            code |= Outcode::LEFT;
        } else if p.x > rect.x_max() {
            code |= Outcode::RIGHT;
        }

        if p.y < rect.y_min() {
            code |= Outcode::BOTTOM;
        } else if p.y > rect.y_max() {
            code |= Outcode::TOP;
        }

        code
    }

    /// True when the point lies inside or on the edge of the rectangle.
    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}
