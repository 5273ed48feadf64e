//! Axis-aligned clip region.

use super::error::{Axis, ClipError};
use crate::math::Vec2;

/// An axis-aligned rectangle that segments are clipped against.
///
/// Bounds are inclusive: a point lying exactly on an edge is inside.
/// The invariant `x_min <= x_max && y_min <= y_max` is checked on
/// construction and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
}

impl ClipRect {
    /// Create a rectangle from its bounds.
    ///
    /// # Errors
    /// Returns [`ClipError::NonFiniteBound`] if any bound is NaN or infinite,
    /// and [`ClipError::InvertedBounds`] if a minimum exceeds its maximum.
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self, ClipError> {
        check_axis(Axis::X, x_min, x_max)?;
        check_axis(Axis::Y, y_min, y_max)?;
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Create a `width` x `height` rectangle centered on `center`.
    ///
    /// # Errors
    /// Same conditions as [`ClipRect::new`]; a negative size inverts the bounds.
    pub fn centered(center: Vec2, width: f32, height: f32) -> Result<Self, ClipError> {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }

    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    pub fn y_min(&self) -> f32 {
        self.y_min
    }

    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    pub fn y_max(&self) -> f32 {
        self.y_max
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Corners in drawing order: (min,min), (max,min), (max,max), (min,max).
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x_min, self.y_min),
            Vec2::new(self.x_max, self.y_min),
            Vec2::new(self.x_max, self.y_max),
            Vec2::new(self.x_min, self.y_max),
        ]
    }
}

fn check_axis(axis: Axis, min: f32, max: f32) -> Result<(), ClipError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ClipError::NonFiniteBound { axis });
    }
    if min > max {
        return Err(ClipError::InvertedBounds { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accepts_valid_and_zero_area_bounds() {
        assert!(ClipRect::new(-200.0, -100.0, 200.0, 100.0).is_ok());
        assert!(ClipRect::new(5.0, 5.0, 5.0, 5.0).is_ok());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = ClipRect::new(10.0, 0.0, -10.0, 5.0).unwrap_err();
        assert_eq!(
            err,
            ClipError::InvertedBounds {
                axis: Axis::X,
                min: 10.0,
                max: -10.0
            }
        );

        let err = ClipRect::new(0.0, 3.0, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, ClipError::InvertedBounds { axis: Axis::Y, .. }));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let err = ClipRect::new(f32::NAN, 0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, ClipError::NonFiniteBound { axis: Axis::X });

        let err = ClipRect::new(0.0, 0.0, 1.0, f32::INFINITY).unwrap_err();
        assert_eq!(err, ClipError::NonFiniteBound { axis: Axis::Y });
    }

    #[test]
    fn centered_matches_demo_layout() {
        // 400x200 box in a 600x600 view
        let rect = ClipRect::centered(Vec2::new(300.0, 300.0), 400.0, 200.0).unwrap();
        assert_relative_eq!(rect.x_min(), 100.0);
        assert_relative_eq!(rect.y_min(), 200.0);
        assert_relative_eq!(rect.x_max(), 500.0);
        assert_relative_eq!(rect.y_max(), 400.0);
        assert_relative_eq!(rect.width(), 400.0);
        assert_relative_eq!(rect.height(), 200.0);
    }

    #[test]
    fn centered_with_negative_size_is_an_error() {
        assert!(ClipRect::centered(Vec2::ZERO, -1.0, 1.0).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let rect = ClipRect::new(-1.0, -1.0, 1.0, 1.0).unwrap();
        assert!(rect.contains(Vec2::new(1.0, -1.0)));
        assert!(rect.contains(Vec2::ZERO));
        assert!(!rect.contains(Vec2::new(1.001, 0.0)));
    }

    #[test]
    fn error_messages_name_the_axis() {
        let err = ClipRect::new(0.0, 2.0, 1.0, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "inverted clip bounds on y axis: min 2 is greater than max 1"
        );
    }
}
