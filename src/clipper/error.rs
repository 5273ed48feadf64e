use thiserror::Error;

/// Errors produced while building a clip region.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ClipError {
    #[error("inverted clip bounds on {axis} axis: min {min} is greater than max {max}")]
    InvertedBounds { axis: Axis, min: f32, max: f32 },

    #[error("clip bound on {axis} axis is not finite")]
    NonFiniteBound { axis: Axis },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}
