use std::fmt::Display;

use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// Geometric primitive representing a point.
/// Equality is tolerance-based on both ordinates.
#[derive(Debug, Clone, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }

    /// Degenerate bounding box containing just this point.
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.0,
            y_min: self.1,
            x_max: self.0,
            y_max: self.1,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        FPA(self.0) == FPA(other.0) && FPA(self.1) == FPA(other.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_equality() {
        assert_eq!(Point(1.0, 2.0), Point(1.0 + 1e-10, 2.0 - 1e-10));
        assert_ne!(Point(1.0, 2.0), Point(1.0, 2.1));
    }

    #[test]
    fn distance() {
        assert_eq!(FPA(Point(0.0, 0.0).distance(&Point(3.0, 4.0))), FPA(5.0));
    }
}
