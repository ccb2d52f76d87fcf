//! Cabin coordinate types.
//!
//! Coordinates are in the cabin drawing's own units (the same space the
//! rendering layer draws the fuselage in): `x` grows across the cabin,
//! `y` grows from the nose towards the tail.

use std::fmt;
use std::fmt::Write as _;

/// A point in cabin drawing space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinPoint {
    pub x: f64,
    pub y: f64,
}

impl CabinPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance_to(self, other: CabinPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: CabinPoint, t: f64) -> CabinPoint {
        CabinPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl fmt::Display for CabinPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A passenger's walk from the cabin entry to their seat, as a polyline.
///
/// The path is opaque to the scheduler; only the animation layer reads the
/// vertices (via [`point_at`](Self::point_at) or [`to_svg`](Self::to_svg)).
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelPath {
    points: Vec<CabinPoint>,
}

impl TravelPath {
    pub fn new(points: Vec<CabinPoint>) -> Self {
        Self { points }
    }

    /// A path with no vertices, held by unassigned passengers.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CabinPoint] {
        &self.points
    }

    pub fn start(&self) -> Option<CabinPoint> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<CabinPoint> {
        self.points.last().copied()
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    /// Position after walking `fraction` of the path length (clamped to
    /// `[0, 1]`).  Returns `None` for an empty path.
    pub fn point_at(&self, fraction: f64) -> Option<CabinPoint> {
        let first = self.start()?;
        let total = self.length();
        if total <= 0.0 {
            return Some(first);
        }

        let mut remaining = fraction.clamp(0.0, 1.0) * total;
        for w in self.points.windows(2) {
            let seg = w[0].distance_to(w[1]);
            if remaining <= seg {
                let t = if seg > 0.0 { remaining / seg } else { 0.0 };
                return Some(w[0].lerp(w[1], t));
            }
            remaining -= seg;
        }
        self.end()
    }

    /// Render as an SVG path (`M x y L x y …`) for motion-path animation.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                out.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{cmd} {} {}", p.x, p.y);
        }
        out
    }
}
