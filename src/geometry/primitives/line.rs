use std::f64::consts::PI;
use std::fmt::Display;

use anyhow::{Result, ensure};

use crate::geometry::Geometry;
use crate::geometry::geo_enums::{GeoPosition, Side};
use crate::geometry::primitives::{Point, Rect};
use crate::util::FPA;

/// Directed line segment between two distinct [`Point`]s, running from `a` to `b`.
///
/// Direction matters for [`Line::angle`], [`Line::relative_angle`] and the clip polarity
/// of [`Line::in_bound`], but not for spatial equality (see [`Line::coterminous`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Result<Self> {
        ensure!(a != b, "degenerate line, {a} == {b}");
        Ok(Line { a, b })
    }

    pub fn reverse(mut self) -> Self {
        std::mem::swap(&mut self.a, &mut self.b);
        self
    }

    pub fn dx(&self) -> f64 {
        self.b.0 - self.a.0
    }

    pub fn dy(&self) -> f64 {
        self.b.1 - self.a.1
    }

    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    pub fn midpoint(&self) -> Point {
        Point((self.a.0 + self.b.0) / 2.0, (self.a.1 + self.b.1) / 2.0)
    }

    pub fn is_horizontal(&self) -> bool {
        FPA(self.a.1) == FPA(self.b.1)
    }

    pub fn is_vertical(&self) -> bool {
        FPA(self.a.0) == FPA(self.b.0)
    }

    /// Increase in y per unit increase in x. `None` for vertical lines, 0 for horizontal.
    pub fn gradient(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        if self.is_horizontal() {
            return Some(0.0);
        }
        Some(self.dy() / self.dx())
    }

    /// Direction of the line as the angle with the positive x-axis, in (-π, π].
    pub fn angle(&self) -> f64 {
        f64::atan2(self.dy(), self.dx())
    }

    /// Signed angle from this line's direction to the other's, normalized to (-π, π].
    pub fn relative_angle(&self, other: &Line) -> f64 {
        normalize_angle(other.angle() - self.angle())
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: f64::min(self.a.0, self.b.0),
            y_min: f64::min(self.a.1, self.b.1),
            x_max: f64::max(self.a.0, self.b.0),
            y_max: f64::max(self.a.1, self.b.1),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Line {
        Line {
            a: self.a.translate(dx, dy),
            b: self.b.translate(dx, dy),
        }
    }

    /// Point at parameter `t` along the segment (0 at `a`, 1 at `b`).
    pub fn point_at(&self, t: f64) -> Point {
        Point(self.a.0 + t * self.dx(), self.a.1 + t * self.dy())
    }

    /// Parameter of a point assumed to lie on the infinite extension of this line,
    /// projected along the dominant axis.
    pub fn param_of(&self, p: &Point) -> f64 {
        if self.dx().abs() >= self.dy().abs() {
            (p.0 - self.a.0) / self.dx()
        } else {
            (p.1 - self.a.1) / self.dy()
        }
    }

    /// y-value where the infinite extension of this line meets the vertical at `x`.
    /// `None` for vertical lines.
    pub fn intercept_x(&self, x: f64) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        if self.is_horizontal() {
            return Some(self.a.1);
        }
        Some(self.a.1 + (x - self.a.0) * (self.dy() / self.dx()))
    }

    /// x-value where the infinite extension of this line meets the horizontal at `y`.
    /// `None` for horizontal lines.
    pub fn intercept_y(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() {
            return None;
        }
        if self.is_vertical() {
            return Some(self.a.0);
        }
        Some(self.a.0 + (y - self.a.1) * (self.dx() / self.dy()))
    }

    /// Whether any point of the segment lies at the given x-value.
    /// Vertical lines span no x-value at all.
    pub fn spans_x(&self, x: f64) -> bool {
        if self.is_vertical() {
            return false;
        }
        let (x1, x2) = (
            f64::min(self.a.0, self.b.0),
            f64::max(self.a.0, self.b.0),
        );
        !(FPA(x1) > FPA(x) || FPA(x2) < FPA(x))
    }

    /// Whether any point of the segment lies at the given y-value.
    /// Horizontal lines span no y-value at all.
    pub fn spans_y(&self, y: f64) -> bool {
        if self.is_horizontal() {
            return false;
        }
        let (y1, y2) = (
            f64::min(self.a.1, self.b.1),
            f64::max(self.a.1, self.b.1),
        );
        !(FPA(y1) > FPA(y) || FPA(y2) < FPA(y))
    }

    /// Intersection point of the two lines extended infinitely in both directions.
    /// `None` for parallel (including anti-parallel) lines.
    pub fn extrapolate_intersection(&self, other: &Line) -> Option<Point> {
        if self.is_vertical() {
            if other.is_vertical() {
                return None;
            }
            return Some(Point(self.a.0, other.intercept_x(self.a.0)?));
        }
        if other.is_vertical() {
            return Some(Point(other.a.0, self.intercept_x(other.a.0)?));
        }
        if self.is_horizontal() && other.is_horizontal() {
            return None;
        }

        let rel = self.relative_angle(other);
        if FPA(rel) == FPA(0.0) || FPA(rel.abs()) == FPA(PI) {
            return None;
        }
        // shared endpoints shortcut, avoids precision loss on near-parallel pairs
        if self.a == other.a || self.a == other.b {
            return Some(self.a);
        }
        if self.b == other.a || self.b == other.b {
            return Some(self.b);
        }

        let convergence = self.gradient()? - other.gradient()?;
        if FPA(convergence) == FPA(0.0) {
            return None;
        }
        let ydist = other.intercept_x(self.a.0)? - self.a.1;
        let x = self.a.0 + ydist / convergence;
        Some(Point(x, self.intercept_x(x)?))
    }

    /// Classify a point against the infinite extension of this line, looking from `a`
    /// towards `b`. `None` means the point lies on the line (within tolerance).
    pub fn in_bound(&self, p: &Point) -> Option<Side> {
        if *p == self.a || *p == self.b {
            return None;
        }

        if self.is_horizontal() {
            if FPA(p.1) == FPA(self.a.1) {
                return None;
            }
            let below = p.1 < self.a.1;
            return match self.a.0 < self.b.0 {
                true => Some(if below { Side::Right } else { Side::Left }),
                false => Some(if below { Side::Left } else { Side::Right }),
            };
        }

        if self.is_vertical() {
            if FPA(p.0) == FPA(self.a.0) {
                return None;
            }
            let right_of = p.0 > self.a.0;
            return match self.a.1 < self.b.1 {
                true => Some(if right_of { Side::Right } else { Side::Left }),
                false => Some(if right_of { Side::Left } else { Side::Right }),
            };
        }

        // compare p against the point on the line with the same x-value
        let y = self.a.1 + (p.0 - self.a.0) * (self.dy() / self.dx());
        if FPA(p.1) == FPA(y) {
            return None;
        }
        let below = p.1 < y;
        match self.a.0 < self.b.0 {
            true => Some(if below { Side::Right } else { Side::Left }),
            false => Some(if below { Side::Left } else { Side::Right }),
        }
    }

    /// Whether the point lies anywhere on the segment, endpoints included.
    pub fn intersects_point(&self, p: &Point) -> bool {
        if *p == self.a || *p == self.b {
            return true;
        }
        let bbox = self.bbox();
        if bbox.position_of(p) == GeoPosition::Exterior {
            return false;
        }
        if self.is_vertical() {
            return FPA(p.0) == FPA(self.a.0);
        }
        if self.is_horizontal() {
            return FPA(p.1) == FPA(self.a.1);
        }
        match self.intercept_x(p.0) {
            Some(y) => FPA(y) == FPA(p.1),
            None => false,
        }
    }

    /// True bounded-segment intersection test, bbox-gated.
    pub fn intersects_line(&self, other: &Line) -> bool {
        if self.bbox().disjoint(&other.bbox()) {
            return false;
        }
        self.intersection_line(other).is_some()
    }

    /// Bounded-segment intersection: `None`, a point where the segments cross or touch,
    /// or the overlapping sub-segment when they are collinear, oriented like `self`.
    pub fn intersection_line(&self, other: &Line) -> Option<Geometry> {
        if self.bbox().disjoint(&other.bbox()) {
            return None;
        }

        let rel = self.relative_angle(other);
        if FPA(rel) == FPA(0.0) || FPA(rel.abs()) == FPA(PI) {
            // parallel: overlap exists only if collinear
            if self.in_bound(&other.a).is_some() || self.in_bound(&other.b).is_some() {
                return None;
            }
            let (ta, tb) = (self.param_of(&other.a), self.param_of(&other.b));
            let lo = f64::max(f64::min(ta, tb), 0.0);
            let hi = f64::min(f64::max(ta, tb), 1.0);
            if FPA(lo) > FPA(hi) {
                return None;
            }
            let (pa, pb) = (self.point_at(lo), self.point_at(hi));
            return match pa == pb {
                true => Some(Geometry::Point(pa)),
                false => Some(Geometry::Line(Line { a: pa, b: pb })),
            };
        }

        let p = self.extrapolate_intersection(other)?;
        if self.bbox().position_of(&p) == GeoPosition::Exterior
            || other.bbox().position_of(&p) == GeoPosition::Exterior
        {
            return None;
        }
        Some(Geometry::Point(p))
    }

    /// Portion of this segment on the right-hand side of the infinite boundary line:
    /// `None` if fully excluded, the whole segment if fully included, a single endpoint
    /// if only touching, or the sub-segment up to the crossing otherwise.
    pub fn crop(&self, boundary: &Line) -> Option<Geometry> {
        let sa = boundary.in_bound(&self.a);
        let sb = boundary.in_bound(&self.b);
        match (sa, sb) {
            (Some(Side::Left), Some(Side::Left)) => None,
            (None, Some(Side::Left)) => Some(Geometry::Point(self.a)),
            (Some(Side::Left), None) => Some(Geometry::Point(self.b)),
            (Some(Side::Left), Some(Side::Right)) => {
                let x = boundary.extrapolate_intersection(self)?;
                match x == self.b {
                    true => Some(Geometry::Point(self.b)),
                    false => Some(Geometry::Line(Line { a: x, b: self.b })),
                }
            }
            (Some(Side::Right), Some(Side::Left)) => {
                let x = boundary.extrapolate_intersection(self)?;
                match x == self.a {
                    true => Some(Geometry::Point(self.a)),
                    false => Some(Geometry::Line(Line { a: self.a, b: x })),
                }
            }
            _ => Some(Geometry::Line(*self)),
        }
    }

    /// Whether both lines connect the same pair of endpoints, in either direction.
    pub fn coterminous(&self, other: &Line) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Line starting at this line's end, deflected counter-clockwise by `turn` radians
    /// from this line's direction, with the given length.
    pub fn adjacent(&self, turn: f64, length: f64) -> Result<Line> {
        let theta = self.angle() + turn;
        let end = Point(
            self.b.0 + length * theta.cos(),
            self.b.1 + length * theta.sin(),
        );
        Line::new(self.b, end)
    }
}

/// Normalize an angle into (-π, π].
pub fn normalize_angle(mut theta: f64) -> f64 {
    while theta > PI {
        theta -= 2.0 * PI;
    }
    while theta <= -PI {
        theta += 2.0 * PI;
    }
    theta
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.a, self.b)
    }
}
