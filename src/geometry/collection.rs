use anyhow::Result;

use crate::geometry::Geometry;
use crate::geometry::primitives::{Line, Point, Polygon, Rect};

/// Unordered aggregate of distinct geometries.
///
/// The homogeneous variants guarantee every member is the same concrete kind; the
/// [`Collection::make`] factory picks the homogeneous form automatically, flattens
/// nested collections one level, drops spatial duplicates and collapses a singleton to
/// its sole member. Members are only ever points, lines or polygons; boxes are
/// converted to their ring polygon on the way in.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Points(Vec<Point>),
    Lines(Vec<Line>),
    Polygons(Vec<Polygon>),
    Mixed(Vec<Geometry>),
}

impl Collection {
    /// Canonicalizing factory: `None` for empty input, the sole member for a singleton,
    /// a homogeneous or mixed collection otherwise.
    pub fn make(items: Vec<Geometry>) -> Result<Option<Geometry>> {
        let mut flat: Vec<Geometry> = Vec::new();
        for item in items {
            match item {
                Geometry::Collection(c) => flat.extend(c.into_members()),
                Geometry::Rect(r) => flat.push(Geometry::Polygon(r.to_polygon()?)),
                other => flat.push(other),
            }
        }

        let mut members: Vec<Geometry> = Vec::with_capacity(flat.len());
        for g in flat {
            if !members.iter().any(|m| m.equals(&g)) {
                members.push(g);
            }
        }

        Ok(match members.len() {
            0 => None,
            1 => members.pop(),
            _ => Some(Geometry::Collection(Collection::from_members(members))),
        })
    }

    fn from_members(members: Vec<Geometry>) -> Collection {
        if members.iter().all(|m| matches!(m, Geometry::Point(_))) {
            return Collection::Points(
                members
                    .into_iter()
                    .filter_map(|m| match m {
                        Geometry::Point(p) => Some(p),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if members.iter().all(|m| matches!(m, Geometry::Line(_))) {
            return Collection::Lines(
                members
                    .into_iter()
                    .filter_map(|m| match m {
                        Geometry::Line(l) => Some(l),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if members.iter().all(|m| matches!(m, Geometry::Polygon(_))) {
            return Collection::Polygons(
                members
                    .into_iter()
                    .filter_map(|m| match m {
                        Geometry::Polygon(p) => Some(p),
                        _ => None,
                    })
                    .collect(),
            );
        }
        Collection::Mixed(members)
    }

    pub fn members(&self) -> Vec<Geometry> {
        match self {
            Collection::Points(ps) => ps.iter().copied().map(Geometry::Point).collect(),
            Collection::Lines(ls) => ls.iter().copied().map(Geometry::Line).collect(),
            Collection::Polygons(ps) => ps.iter().cloned().map(Geometry::Polygon).collect(),
            Collection::Mixed(gs) => gs.clone(),
        }
    }

    pub fn into_members(self) -> Vec<Geometry> {
        match self {
            Collection::Points(ps) => ps.into_iter().map(Geometry::Point).collect(),
            Collection::Lines(ls) => ls.into_iter().map(Geometry::Line).collect(),
            Collection::Polygons(ps) => ps.into_iter().map(Geometry::Polygon).collect(),
            Collection::Mixed(gs) => gs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Points(ps) => ps.len(),
            Collection::Lines(ls) => ls.len(),
            Collection::Polygons(ps) => ps.len(),
            Collection::Mixed(gs) => gs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bbox(&self) -> Rect {
        let members = self.members();
        let mut it = members.iter();
        let first = it
            .next()
            .map(|m| m.bbox())
            .unwrap_or(Point(0.0, 0.0).bbox());
        it.fold(first, |bb, m| bb.merged(&m.bbox()))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Collection {
        match self {
            Collection::Points(ps) => {
                Collection::Points(ps.iter().map(|p| p.translate(dx, dy)).collect())
            }
            Collection::Lines(ls) => {
                Collection::Lines(ls.iter().map(|l| l.translate(dx, dy)).collect())
            }
            Collection::Polygons(ps) => {
                Collection::Polygons(ps.iter().map(|p| p.translate(dx, dy)).collect())
            }
            Collection::Mixed(gs) => {
                Collection::Mixed(gs.iter().map(|g| g.translate(dx, dy)).collect())
            }
        }
    }

    /// Set-style spatial equality: same member count and every member of one matched by
    /// a spatially equal member of the other.
    pub fn spatially_equals(&self, other: &Collection) -> bool {
        let a = self.members();
        let b = other.members();
        if a.len() != b.len() {
            return false;
        }
        let mut used = vec![false; b.len()];
        for m in &a {
            let found = b
                .iter()
                .enumerate()
                .position(|(i, n)| !used[i] && m.equals(n));
            match found {
                Some(i) => used[i] = true,
                None => return false,
            }
        }
        true
    }
}
