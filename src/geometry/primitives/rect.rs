use anyhow::{Result, ensure};

use crate::geometry::Geometry;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::primitives::{Line, Point, Polygon};
use crate::util::FPA;

/// Axis-aligned rectangle defined by its extrema.
/// Degenerate boxes of zero width and/or height are permitted.
#[derive(Clone, Debug, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            FPA(x_min) <= FPA(x_max) && FPA(y_min) <= FPA(y_max),
            "invalid rect, extrema out of order: [{x_min}, {y_min}, {x_max}, {y_max}]"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        FPA(self.width()) == FPA(0.0) || FPA(self.height()) == FPA(0.0)
    }

    /// Corners in clockwise ring order, starting at the bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_min, self.y_max),
            Point(self.x_max, self.y_max),
            Point(self.x_max, self.y_min),
        ]
    }

    /// Boundary segments in clockwise ring order.
    /// Only meaningful for non-degenerate boxes (degenerate edges collapse).
    pub fn edges(&self) -> [Line; 4] {
        let [c0, c1, c2, c3] = self.corners();
        [
            Line { a: c0, b: c1 },
            Line { a: c1, b: c2 },
            Line { a: c2, b: c3 },
            Line { a: c3, b: c0 },
        ]
    }

    /// The clockwise ring polygon covering this box. Fails for degenerate boxes.
    pub fn to_polygon(&self) -> Result<Polygon> {
        let [c0, c1, c2, c3] = self.corners();
        Polygon::new(vec![c0, c1, c2, c3])
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Smallest box covering both boxes.
    pub fn merged(&self, other: &Rect) -> Rect {
        Rect {
            x_min: f64::min(self.x_min, other.x_min),
            y_min: f64::min(self.y_min, other.y_min),
            x_max: f64::max(self.x_max, other.x_max),
            y_max: f64::max(self.y_max, other.y_max),
        }
    }

    /// Tolerant point location against the closed box.
    pub fn position_of(&self, p: &Point) -> GeoPosition {
        if FPA(p.0) < FPA(self.x_min)
            || FPA(p.0) > FPA(self.x_max)
            || FPA(p.1) < FPA(self.y_min)
            || FPA(p.1) > FPA(self.y_max)
        {
            return GeoPosition::Exterior;
        }
        if FPA(p.0) == FPA(self.x_min)
            || FPA(p.0) == FPA(self.x_max)
            || FPA(p.1) == FPA(self.y_min)
            || FPA(p.1) == FPA(self.y_max)
        {
            return GeoPosition::Boundary;
        }
        GeoPosition::Interior
    }

    /// Whether the two boxes have no contact at all, not even by touching.
    pub fn disjoint(&self, other: &Rect) -> bool {
        FPA(other.x_max) < FPA(self.x_min)
            || FPA(other.x_min) > FPA(self.x_max)
            || FPA(other.y_max) < FPA(self.y_min)
            || FPA(other.y_min) > FPA(self.y_max)
    }

    /// A line is contained if neither endpoint is outside the closed box and the line
    /// does not lie along one of the boundary edges.
    pub fn contains_line(&self, line: &Line) -> bool {
        if self.position_of(&line.a) == GeoPosition::Exterior
            || self.position_of(&line.b) == GeoPosition::Exterior
        {
            return false;
        }
        let on_horizontal_edge = line.is_horizontal()
            && (FPA(line.a.1) == FPA(self.y_min) || FPA(line.a.1) == FPA(self.y_max));
        let on_vertical_edge = line.is_vertical()
            && (FPA(line.a.0) == FPA(self.x_min) || FPA(line.a.0) == FPA(self.x_max));
        !(on_horizontal_edge || on_vertical_edge)
    }

    /// Closed inclusion: a box contains itself and anything touching only its boundary.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        !(FPA(other.x_min) < FPA(self.x_min)
            || FPA(other.x_max) > FPA(self.x_max)
            || FPA(other.y_min) < FPA(self.y_min)
            || FPA(other.y_max) > FPA(self.y_max))
    }

    pub fn contains_polygon(&self, poly: &Polygon) -> bool {
        poly.vertices()
            .iter()
            .all(|p| self.position_of(p) != GeoPosition::Exterior)
    }

    /// Intersection of two boxes: `None`, a point, a segment, or a smaller box.
    pub fn intersection_rect(&self, other: &Rect) -> Option<Geometry> {
        if self.disjoint(other) {
            return None;
        }
        let x_min = f64::max(self.x_min, other.x_min);
        let y_min = f64::max(self.y_min, other.y_min);
        let x_max = f64::min(self.x_max, other.x_max);
        let y_max = f64::min(self.y_max, other.y_max);
        // disjoint() already ruled out empty overlap beyond tolerance
        let flat_x = FPA(x_min) == FPA(x_max);
        let flat_y = FPA(y_min) == FPA(y_max);
        match (flat_x, flat_y) {
            (true, true) => Some(Geometry::Point(Point(x_min, y_min))),
            (true, false) => Some(Geometry::Line(Line {
                a: Point(x_min, y_min),
                b: Point(x_min, y_max),
            })),
            (false, true) => Some(Geometry::Line(Line {
                a: Point(x_min, y_min),
                b: Point(x_max, y_min),
            })),
            (false, false) => Some(Geometry::Rect(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })),
        }
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        FPA(self.x_min) == FPA(other.x_min)
            && FPA(self.y_min) == FPA(other.y_min)
            && FPA(self.x_max) == FPA(other.x_max)
            && FPA(self.y_max) == FPA(other.y_max)
    }
}
