use std::f64::consts::PI;
use std::fmt::Display;

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::{GeoPosition, Side};
use crate::geometry::primitives::line::normalize_angle;
use crate::geometry::primitives::{Line, Point, Rect};
use crate::util::FPA;

/// Simple polygon bounded by a closed linear ring of straight segments.
///
/// The ring must be wound clockwise, with the interior on the right-hand side of each
/// directed edge. Winding is a caller contract and is not validated; everything else is:
/// construction removes consecutive duplicate and collinear vertices, closes the ring,
/// and rejects degenerate, backtracking or self-intersecting input.
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        // drop consecutive tolerance-duplicates
        let mut pts: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if pts.last() != Some(&p) {
                pts.push(p);
            }
        }
        // work on the open ring
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }

        // elide vertices whose incoming and outgoing edges are collinear
        let distinct = pts.len();
        let mut i = 0;
        while pts.len() >= 3 && i < pts.len() {
            let n = pts.len();
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let incoming = f64::atan2(cur.1 - prev.1, cur.0 - prev.0);
            let outgoing = f64::atan2(next.1 - cur.1, next.0 - cur.0);
            if FPA(normalize_angle(outgoing - incoming)) == FPA(0.0) {
                pts.remove(i);
            } else {
                i += 1;
            }
        }

        if pts.len() < 3 {
            match distinct >= 3 {
                true => bail!("degenerate polygon, ring collapses to a collinear run"),
                false => bail!("not enough distinct vertices for a closed polygon"),
            }
        }
        pts.push(pts[0]);
        let poly = Polygon { points: pts };

        let lines = poly.lines();
        for (e1, e2) in lines.iter().circular_tuple_windows() {
            ensure!(
                FPA(e1.relative_angle(e2).abs()) != FPA(PI),
                "edge {e2} backtracks along {e1}"
            );
        }
        let n = lines.len();
        for i in 0..n {
            for j in i + 1..n {
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                ensure!(
                    !lines[i].intersects_line(&lines[j]),
                    "edge {} intersects with {}",
                    lines[i],
                    lines[j]
                );
            }
        }
        Ok(poly)
    }

    /// Regular n-gon around `center`, starting at the top vertex and wound clockwise.
    pub fn regular(center: Point, n: usize, radius: f64) -> Result<Polygon> {
        ensure!(n >= 3, "regular polygon needs at least 3 vertices, got {n}");
        ensure!(radius > 0.0, "regular polygon needs a positive radius");
        let pts = (0..n)
            .map(|k| {
                let theta = 2.0 * PI * k as f64 / n as f64;
                Point(
                    center.0 + radius * theta.sin(),
                    center.1 + radius * theta.cos(),
                )
            })
            .collect();
        Polygon::new(pts)
    }

    /// Regular n-gon with a given side length instead of a circumradius.
    pub fn regular_with_side(center: Point, n: usize, side: f64) -> Result<Polygon> {
        ensure!(side > 0.0, "regular polygon needs a positive side length");
        ensure!(n >= 3, "regular polygon needs at least 3 vertices, got {n}");
        let radius = side / (2.0 * (PI / n as f64).sin());
        Polygon::regular(center, n, radius)
    }

    /// The closed vertex list: first point repeated as last.
    pub fn vertices(&self) -> &[Point] {
        &self.points
    }

    /// The open ring, without the closing duplicate.
    pub fn ring(&self) -> &[Point] {
        &self.points[..self.points.len() - 1]
    }

    /// Consecutive boundary segments of the ring.
    pub fn lines(&self) -> Vec<Line> {
        self.points
            .windows(2)
            .map(|w| Line { a: w[0], b: w[1] })
            .collect()
    }

    pub fn bbox(&self) -> Rect {
        let mut it = self.ring().iter();
        let first = it.next().copied().unwrap_or(Point(0.0, 0.0));
        it.fold(first.bbox(), |bb, p| bb.merged(&p.bbox()))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        Polygon {
            points: self.points.iter().map(|p| p.translate(dx, dy)).collect(),
        }
    }

    /// Same boundary, with the starting vertex shifted clockwise by `n` positions.
    pub fn shift(&self, n: usize) -> Polygon {
        let ring = self.ring();
        let n = n % ring.len();
        let mut pts: Vec<Point> = ring[n..].to_vec();
        pts.extend_from_slice(&ring[..n]);
        pts.push(pts[0]);
        Polygon { points: pts }
    }

    /// Ring rotated to start at the lexicographically smallest vertex.
    pub fn canonical(&self) -> Polygon {
        let start = self
            .ring()
            .iter()
            .position_min_by_key(|p| (OrderedFloat(p.0), OrderedFloat(p.1)))
            .unwrap_or(0);
        self.shift(start)
    }

    /// Divide the polygon into two along the chord between the vertices at `i` and `j`.
    ///
    /// The indices refer to the closed vertex list and must not name adjacent vertices.
    /// No attempt is made to verify that the chord lies internal to the polygon.
    pub fn divide(&self, i: usize, j: usize) -> Result<(Polygon, Polygon)> {
        let (i, j) = if i > j { (j, i) } else { (i, j) };
        let length = self.points.len();
        let diff = j - i;
        ensure!(j < length, "invalid indices for divide: out of bounds");
        ensure!(
            i != j && diff != length - 1,
            "invalid indices for divide: must specify two different points"
        );
        ensure!(
            (2..length - 2).contains(&diff),
            "invalid indices for divide: must not specify adjacent points"
        );
        let mut a: Vec<Point> = self.points[i..=j].to_vec();
        a.push(self.points[i]);
        let mut b: Vec<Point> = self.points[..=i].to_vec();
        b.extend_from_slice(&self.points[j..]);
        Ok((Polygon::new(a)?, Polygon::new(b)?))
    }

    /// Whether the point equals one of the ring's vertices.
    pub fn has_vertex(&self, p: &Point) -> bool {
        self.ring().iter().any(|v| v == p)
    }

    /// No vertex may fall on the left of the line through its two predecessors.
    pub fn is_convex(&self) -> bool {
        self.ring()
            .iter()
            .circular_tuple_windows::<(_, _, _)>()
            .all(|(a, b, c)| Line { a: *a, b: *b }.in_bound(c) != Some(Side::Left))
    }

    /// Tolerant point location by horizontal ray-cast.
    ///
    /// Finds the nearest boundary crossings strictly left and right of the point on its
    /// horizontal; the point is interior iff the right-side edge descends and the
    /// left-side edge ascends (even/odd rule with direction, for clockwise rings).
    pub fn position_of(&self, p: &Point) -> GeoPosition {
        if self.bbox().position_of(p) == GeoPosition::Exterior {
            return GeoPosition::Exterior;
        }
        if self.has_vertex(p) {
            return GeoPosition::Boundary;
        }
        let lines = self.lines();
        for l in &lines {
            if l.is_horizontal() && l.spans_x(p.0) && FPA(l.a.1) == FPA(p.1) {
                return GeoPosition::Boundary;
            }
        }

        let crossings: Vec<(f64, &Line)> = lines
            .iter()
            .filter(|l| l.spans_y(p.1))
            .filter_map(|l| l.intercept_y(p.1).map(|x| (x - p.0, l)))
            .collect();
        if crossings.iter().any(|(d, _)| FPA(*d) == FPA(0.0)) {
            return GeoPosition::Boundary;
        }
        let left = crossings
            .iter()
            .filter(|(d, _)| *d < 0.0)
            .max_by_key(|(d, _)| OrderedFloat(*d));
        let right = crossings
            .iter()
            .filter(|(d, _)| *d > 0.0)
            .min_by_key(|(d, _)| OrderedFloat(*d));
        match (left, right) {
            (Some((_, ll)), Some((_, rl))) if rl.a.1 > rl.b.1 && ll.a.1 < ll.b.1 => {
                GeoPosition::Interior
            }
            _ => GeoPosition::Exterior,
        }
    }
}

impl PartialEq for Polygon {
    /// Rings are equal if one is a rotation of the other (same winding).
    fn eq(&self, other: &Self) -> bool {
        let (r1, r2) = (self.ring(), other.ring());
        let n = r1.len();
        if n != r2.len() {
            return false;
        }
        (0..n).any(|shift| (0..n).all(|i| r1[i] == r2[(i + shift) % n]))
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.points.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(pts: &[(f64, f64)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Point(x, y)).collect()).unwrap()
    }

    #[test]
    fn ring_is_closed() {
        let p = poly(&[(1.0, 2.0), (3.0, 5.0), (4.0, 1.0)]);
        assert_eq!(p.vertices().len(), 4);
        assert_eq!(p.vertices().first(), p.vertices().last());
    }

    #[test]
    fn rejects_degenerate_input() {
        // all vertices collinear: the ring backtracks
        let err = Polygon::new(vec![Point(1.0, 2.0), Point(3.0, 6.0), Point(2.0, 4.0)])
            .unwrap_err();
        assert!(err.to_string().contains("collinear"));
        // too few distinct vertices
        let err = Polygon::new(vec![Point(0.0, 0.0), Point(0.0, 0.0), Point(1.0, 1.0)])
            .unwrap_err();
        assert!(err.to_string().contains("not enough distinct vertices"));
    }

    #[test]
    fn rejects_self_intersection() {
        let bowtie = vec![
            Point(0.0, 0.0),
            Point(0.0, 2.0),
            Point(2.0, 0.0),
            Point(2.0, 2.0),
        ];
        assert!(Polygon::new(bowtie).is_err());
    }

    #[test]
    fn elides_collinear_vertices() {
        let p = poly(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert_eq!(p.ring().len(), 4);
        assert!(!p.has_vertex(&Point(0.0, 1.0)));
    }

    #[test]
    fn convexity() {
        let square = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert!(square.is_convex());
        let ushape = poly(&[
            (1.0, 0.0),
            (1.0, 4.0),
            (2.0, 4.0),
            (2.0, 1.0),
            (4.0, 1.0),
            (4.0, 4.0),
            (5.0, 4.0),
            (5.0, 0.0),
        ]);
        assert!(!ushape.is_convex());
    }

    #[test]
    fn point_location_in_triangle() {
        let t = poly(&[(1.0, 2.0), (3.0, 5.0), (4.0, 1.0)]);
        assert_eq!(t.position_of(&Point(3.0, 2.0)), GeoPosition::Interior);
        assert_eq!(t.position_of(&Point(2.0, 4.0)), GeoPosition::Exterior);
        assert_eq!(t.position_of(&Point(1.0, 2.0)), GeoPosition::Boundary);
    }

    #[test]
    fn rotation_equality() {
        let a = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let b = a.shift(2);
        assert_eq!(a, b);
        assert_eq!(a.canonical().ring()[0], Point(0.0, 0.0));
    }

    #[test]
    fn divide_along_chord() {
        let square = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let (a, b) = square.divide(0, 2).unwrap();
        assert_eq!(a, poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]));
        assert_eq!(b, poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0)]));
        assert!(square.divide(0, 1).is_err());
    }

    #[test]
    fn regular_square() {
        let sq = Polygon::regular(Point(0.0, 0.0), 4, 1.0).unwrap();
        assert_eq!(
            sq,
            poly(&[(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0)])
        );
    }
}
