//! Cohen–Sutherland line clipping against an axis-aligned rectangle.
//!
//! The clipper classifies both endpoints with an [`Outcode`] and then either
//! accepts the segment (both codes zero), rejects it (codes share a bit, so
//! both endpoints are beyond the same edge), or moves one outside endpoint
//! onto a rectangle edge and tries again.
//!
//! Every piece cut away along the way is kept in [`ClipResult::discarded`],
//! so a caller can paint the rejected parts as well as the visible one.

use super::outcode::Outcode;
use super::rect::ClipRect;
use crate::math::Vec2;

/// Upper bound on classify/trim rounds for a single clip.
///
/// Each endpoint crosses at most two edges, so four trims plus the final
/// classification always suffice; the rest is slack for rounding.
pub const MAX_CLIP_STEPS: usize = 8;

/// A directed line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Clip this segment against `rect`. See [`clip`].
    pub fn clip(&self, rect: &ClipRect) -> ClipResult {
        clip(*self, rect)
    }
}

/// Final classification of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipKind {
    /// Entirely inside the rectangle, nothing was cut.
    Accepted,
    /// Nothing of the segment is inside the rectangle.
    Rejected,
    /// Crosses the rectangle boundary; one visible piece remains.
    Partial,
}

/// How a fragment should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentStyle {
    Accepted,
    Rejected,
}

/// A piece of the input segment paired with its paint style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub segment: Segment,
    pub style: FragmentStyle,
}

/// Outcome of one [`clip`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipResult {
    kind: ClipKind,
    segment: Option<Segment>,
    discarded: Vec<Segment>,
    trims: usize,
}

impl ClipResult {
    pub fn kind(&self) -> ClipKind {
        self.kind
    }

    /// The visible part of the segment, `None` when rejected.
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// Pieces removed while clipping, in the order they were cut.
    ///
    /// For a rejected segment the last entry is the remainder that was
    /// found to lie wholly outside.
    pub fn discarded(&self) -> &[Segment] {
        &self.discarded
    }

    /// Number of edge intersections applied.
    pub fn trims(&self) -> usize {
        self.trims
    }

    pub fn is_visible(&self) -> bool {
        self.segment.is_some()
    }

    /// Everything to paint, in order: discarded pieces styled
    /// [`FragmentStyle::Rejected`], then the visible piece styled
    /// [`FragmentStyle::Accepted`].
    pub fn fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
        let rejected = self.discarded.iter().map(|&segment| Fragment {
            segment,
            style: FragmentStyle::Rejected,
        });
        let accepted = self.segment.map(|segment| Fragment {
            segment,
            style: FragmentStyle::Accepted,
        });
        rejected.chain(accepted)
    }

    fn visible(segment: Segment, discarded: Vec<Segment>, trims: usize) -> Self {
        let kind = if trims == 0 {
            ClipKind::Accepted
        } else {
            ClipKind::Partial
        };
        Self {
            kind,
            segment: Some(segment),
            discarded,
            trims,
        }
    }

    fn rejected(discarded: Vec<Segment>, trims: usize) -> Self {
        Self {
            kind: ClipKind::Rejected,
            segment: None,
            discarded,
            trims,
        }
    }
}

/// Rectangle edges in the order they are tried when trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

const BOUNDARY_PRIORITY: [Boundary; 4] = [
    Boundary::Top,
    Boundary::Bottom,
    Boundary::Right,
    Boundary::Left,
];

impl Boundary {
    fn flag(self) -> Outcode {
        match self {
            Self::Top => Outcode::TOP,
            Self::Bottom => Outcode::BOTTOM,
            Self::Right => Outcode::RIGHT,
            Self::Left => Outcode::LEFT,
        }
    }

    /// Where the line through `seg` meets this edge.
    ///
    /// Returns `None` when the segment runs parallel to the edge, since the
    /// intersection formula would divide by zero.
    fn intersect(self, seg: &Segment, rect: &ClipRect) -> Option<Vec2> {
        let Segment {
            start: p1,
            end: p2,
        } = *seg;
        let d = p2 - p1;

        match self {
            Self::Top | Self::Bottom => {
                if d.y == 0.0 {
                    return None;
                }
                let y = if self == Self::Top {
                    rect.y_max()
                } else {
                    rect.y_min()
                };
                Some(Vec2::new(p1.x + d.x * (y - p1.y) / d.y, y))
            }
            Self::Right | Self::Left => {
                if d.x == 0.0 {
                    return None;
                }
                let x = if self == Self::Right {
                    rect.x_max()
                } else {
                    rect.x_min()
                };
                Some(Vec2::new(x, p1.y + d.y * (x - p1.x) / d.x))
            }
        }
    }
}

/// Clip `segment` against `rect` with the Cohen–Sutherland algorithm.
///
/// When both endpoints are outside, the start point is trimmed first. Within
/// one outcode the edges are tried as TOP, BOTTOM, RIGHT, LEFT and exactly one
/// is applied per round before both endpoints are classified again.
///
/// Non-finite input is rejected without producing any fragments.
pub fn clip(segment: Segment, rect: &ClipRect) -> ClipResult {
    if !segment.is_finite() {
        log::warn!("refusing to clip non-finite segment {segment:?}");
        return ClipResult::rejected(Vec::new(), 0);
    }

    let mut current = segment;
    let mut discarded = Vec::new();
    let mut trims = 0;

    for _ in 0..MAX_CLIP_STEPS {
        let start_code = Outcode::of(current.start, rect);
        let end_code = Outcode::of(current.end, rect);

        if start_code.is_inside() && end_code.is_inside() {
            let result = ClipResult::visible(current, discarded, trims);
            log::trace!("clip {segment:?} -> {:?} {current:?}", result.kind());
            return result;
        }

        if start_code.intersects(end_code) {
            discarded.push(current);
            log::trace!("clip {segment:?} -> Rejected after {trims} trims");
            return ClipResult::rejected(discarded, trims);
        }

        let trim_start = !start_code.is_inside();
        let code = if trim_start { start_code } else { end_code };

        let Some(point) = BOUNDARY_PRIORITY
            .iter()
            .filter(|boundary| code.contains(boundary.flag()))
            .find_map(|boundary| {
                let hit = boundary.intersect(&current, rect);
                if hit.is_none() {
                    log::warn!("{boundary:?} edge is parallel to {current:?}, trying next edge");
                }
                hit
            })
        else {
            log::warn!("no edge intersection for {current:?}, rejecting");
            discarded.push(current);
            return ClipResult::rejected(discarded, trims);
        };

        if trim_start {
            discarded.push(Segment::new(current.start, point));
            current.start = point;
        } else {
            discarded.push(Segment::new(point, current.end));
            current.end = point;
        }
        trims += 1;
    }

    log::warn!("clip of {segment:?} did not converge in {MAX_CLIP_STEPS} steps, rejecting");
    discarded.push(current);
    ClipResult::rejected(discarded, trims)
}
