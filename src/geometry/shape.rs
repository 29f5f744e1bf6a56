//! The unified geometry value and its pairwise operator dispatch.
//!
//! Every predicate and constructive operator is implemented once per unordered pair of
//! geometry kinds; the exhaustive matches below guarantee no pair is forgotten.
//! Combinations the kernel deliberately does not support (non-convex against non-convex
//! polygon clipping, touches between two polygons or with collections, containment by a
//! lower-dimensional operand) fail loudly with an error naming both operand kinds.

use anyhow::{Result, bail, ensure};
use log::debug;

use crate::geometry::clip::{
    clip_convex, line_polygon_pieces, line_spans, polygon_covers_polygon,
};
use crate::geometry::collection::Collection;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::primitives::{Line, Point, Polygon, Rect};
use crate::util::FPA;

/// Any geometry value the kernel can operate on.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Rect(Rect),
    Polygon(Polygon),
    Collection(Collection),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::Line(_) => "line",
            Geometry::Rect(_) => "rect",
            Geometry::Polygon(_) => "polygon",
            Geometry::Collection(_) => "collection",
        }
    }

    /// Topological dimension: 0 for points, 1 for lines, 2 for areal shapes,
    /// the maximum over members for collections.
    pub fn dim(&self) -> u32 {
        match self {
            Geometry::Point(_) => 0,
            Geometry::Line(_) => 1,
            Geometry::Rect(r) if r.is_degenerate() => self.basic().dim(),
            Geometry::Rect(_) => 2,
            Geometry::Polygon(_) => 2,
            Geometry::Collection(c) => c.members().iter().map(Geometry::dim).max().unwrap_or(0),
        }
    }

    pub fn bbox(&self) -> Rect {
        match self {
            Geometry::Point(p) => p.bbox(),
            Geometry::Line(l) => l.bbox(),
            Geometry::Rect(r) => *r,
            Geometry::Polygon(pg) => pg.bbox(),
            Geometry::Collection(c) => c.bbox(),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Geometry {
        match self {
            Geometry::Point(p) => Geometry::Point(p.translate(dx, dy)),
            Geometry::Line(l) => Geometry::Line(l.translate(dx, dy)),
            Geometry::Rect(r) => Geometry::Rect(r.translate(dx, dy)),
            Geometry::Polygon(pg) => Geometry::Polygon(pg.translate(dx, dy)),
            Geometry::Collection(c) => Geometry::Collection(c.translate(dx, dy)),
        }
    }

    /// Canonical form: a degenerate box collapses to the point or segment it covers, so
    /// the operator matrix only ever sees full-dimension operands.
    pub fn basic(&self) -> Geometry {
        match self {
            Geometry::Rect(r) if r.is_degenerate() => {
                let flat_x = FPA(r.width()) == FPA(0.0);
                let flat_y = FPA(r.height()) == FPA(0.0);
                match (flat_x, flat_y) {
                    (true, true) => Geometry::Point(Point(r.x_min, r.y_min)),
                    (true, false) => Geometry::Line(Line {
                        a: Point(r.x_min, r.y_min),
                        b: Point(r.x_min, r.y_max),
                    }),
                    (false, _) => Geometry::Line(Line {
                        a: Point(r.x_min, r.y_min),
                        b: Point(r.x_max, r.y_min),
                    }),
                }
            }
            other => other.clone(),
        }
    }

    /// Spatial equality: same interior/boundary partition, robust to ring rotation for
    /// polygons and to direction for lines.
    pub fn equals(&self, other: &Geometry) -> bool {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Point(p), Geometry::Point(q)) => p == q,
            (Geometry::Line(l), Geometry::Line(m)) => l.coterminous(m),
            (Geometry::Rect(r), Geometry::Rect(s)) => r == s,
            (Geometry::Rect(r), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Rect(r)) => {
                r.to_polygon().map(|rp| rp == *pg).unwrap_or(false)
            }
            (Geometry::Polygon(p1), Geometry::Polygon(p2)) => p1 == p2,
            (Geometry::Collection(c1), Geometry::Collection(c2)) => c1.spatially_equals(c2),
            _ => false,
        }
    }

    /// Whether interiors or boundaries share any point. Symmetric, bbox-gated.
    pub fn intersects(&self, other: &Geometry) -> bool {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(c), g) | (g, Geometry::Collection(c)) => {
                c.members().iter().any(|m| m.intersects(g))
            }
            (Geometry::Point(p), g) | (g, Geometry::Point(p)) => point_in_closure(g, p),
            (Geometry::Line(l), Geometry::Line(m)) => l.intersects_line(m),
            (Geometry::Line(l), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Line(l)) => {
                line_intersects_rect(l, r)
            }
            (Geometry::Line(l), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Line(l)) => line_intersects_polygon(l, pg),
            (Geometry::Rect(r), Geometry::Rect(s)) => !r.disjoint(s),
            (Geometry::Rect(r), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Rect(r)) => rect_intersects_polygon(r, pg),
            (Geometry::Polygon(p1), Geometry::Polygon(p2)) => polygon_intersects_polygon(p1, p2),
        }
    }

    pub fn disjoint(&self, other: &Geometry) -> bool {
        !self.intersects(other)
    }

    /// Boundary contact without any shared interior. Points have no boundary, so a
    /// point never touches another point.
    pub fn touches(&self, other: &Geometry) -> Result<bool> {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(_), _) | (_, Geometry::Collection(_)) => {
                bail!("touches is not supported for {} and {}", a.kind(), b.kind())
            }
            (Geometry::Point(_), Geometry::Point(_)) => Ok(false),
            (Geometry::Point(p), Geometry::Line(l)) | (Geometry::Line(l), Geometry::Point(p)) => {
                Ok(*p == l.a || *p == l.b)
            }
            (Geometry::Point(p), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Point(p)) => {
                Ok(r.position_of(p) == GeoPosition::Boundary)
            }
            (Geometry::Point(p), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Point(p)) => {
                Ok(pg.position_of(p) == GeoPosition::Boundary)
            }
            (Geometry::Line(l), Geometry::Line(m)) => Ok(match l.intersection_line(m) {
                Some(Geometry::Point(p)) => p == l.a || p == l.b || p == m.a || p == m.b,
                _ => false,
            }),
            (Geometry::Line(l), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Line(l)) => {
                let rp = r.to_polygon()?;
                Ok(line_intersects_polygon(l, &rp) && !line_spans(l, &rp).0)
            }
            (Geometry::Line(l), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Line(l)) => {
                Ok(line_intersects_polygon(l, pg) && !line_spans(l, pg).0)
            }
            (Geometry::Rect(r), Geometry::Rect(s)) => Ok(matches!(
                r.intersection_rect(s),
                Some(Geometry::Point(_)) | Some(Geometry::Line(_))
            )),
            (Geometry::Rect(r), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Rect(r)) => {
                Ok(match rect_polygon_intersection(r, pg)? {
                    Some(g) => g.dim() < 2,
                    None => false,
                })
            }
            (Geometry::Polygon(_), Geometry::Polygon(_)) => {
                bail!("touches is not supported for polygon and polygon")
            }
        }
    }

    /// Interiors intersect in a geometry of lower dimension than both operands.
    /// Always false when either operand is a point or both are areal.
    pub fn crosses(&self, other: &Geometry) -> bool {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(c), g) | (g, Geometry::Collection(c)) => {
                c.members().iter().any(|m| m.crosses(g))
            }
            (Geometry::Point(_), _) | (_, Geometry::Point(_)) => false,
            (Geometry::Line(l), Geometry::Line(m)) => match l.intersection_line(m) {
                Some(Geometry::Point(p)) => p != l.a && p != l.b && p != m.a && p != m.b,
                _ => false,
            },
            (Geometry::Line(l), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Line(l)) => r
                .to_polygon()
                .map(|rp| {
                    let (has_int, has_ext) = line_spans(l, &rp);
                    has_int && has_ext
                })
                .unwrap_or(false),
            (Geometry::Line(l), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Line(l)) => {
                let (has_int, has_ext) = line_spans(l, pg);
                has_int && has_ext
            }
            _ => false,
        }
    }

    /// Some part of `other` lies in this geometry's interior and no part in its
    /// exterior. Boundary contact is allowed for areal operands; a shape contains
    /// itself but never a point or line lying entirely on its boundary.
    pub fn contains(&self, other: &Geometry) -> Result<bool> {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(_), _) => {
                bail!("containment by a collection is not supported")
            }
            (g, Geometry::Collection(c)) => {
                for m in c.members() {
                    if !g.contains(&m)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Geometry::Point(p), Geometry::Point(q)) => Ok(p == q),
            (Geometry::Point(_), _)
            | (Geometry::Line(_), Geometry::Rect(_))
            | (Geometry::Line(_), Geometry::Polygon(_)) => bail!(
                "containment of a {} within a {} is not supported",
                b.kind(),
                a.kind()
            ),
            (Geometry::Line(l), Geometry::Point(p)) => {
                Ok(l.intersects_point(p) && *p != l.a && *p != l.b)
            }
            (Geometry::Line(l), Geometry::Line(m)) => {
                Ok(l.intersects_point(&m.a) && l.intersects_point(&m.b))
            }
            (Geometry::Rect(r), Geometry::Point(p)) => {
                Ok(r.position_of(p) == GeoPosition::Interior)
            }
            (Geometry::Rect(r), Geometry::Line(l)) => Ok(r.contains_line(l)),
            (Geometry::Rect(r), Geometry::Rect(s)) => Ok(r.contains_rect(s)),
            (Geometry::Rect(r), Geometry::Polygon(pg)) => Ok(r.contains_polygon(pg)),
            (Geometry::Polygon(pg), Geometry::Point(p)) => {
                Ok(pg.position_of(p) == GeoPosition::Interior)
            }
            (Geometry::Polygon(pg), Geometry::Line(l)) => {
                let (has_int, has_ext) = line_spans(l, pg);
                Ok(has_int && !has_ext)
            }
            (Geometry::Polygon(pg), Geometry::Rect(r)) => {
                Ok(polygon_covers_polygon(pg, &r.to_polygon()?))
            }
            (Geometry::Polygon(p1), Geometry::Polygon(p2)) => Ok(polygon_covers_polygon(p1, p2)),
        }
    }

    /// No part of `other` lies in this geometry's exterior; boundary contact alone
    /// suffices.
    pub fn covers(&self, other: &Geometry) -> Result<bool> {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(_), _) => {
                bail!("covering by a collection is not supported")
            }
            (g, Geometry::Collection(c)) => {
                for m in c.members() {
                    if !g.covers(&m)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Geometry::Point(p), Geometry::Point(q)) => Ok(p == q),
            (Geometry::Point(_), _)
            | (Geometry::Line(_), Geometry::Rect(_))
            | (Geometry::Line(_), Geometry::Polygon(_)) => bail!(
                "covering of a {} by a {} is not supported",
                b.kind(),
                a.kind()
            ),
            (Geometry::Line(l), Geometry::Point(p)) => Ok(l.intersects_point(p)),
            (Geometry::Line(l), Geometry::Line(m)) => {
                Ok(l.intersects_point(&m.a) && l.intersects_point(&m.b))
            }
            (Geometry::Rect(r), Geometry::Point(p)) => {
                Ok(r.position_of(p) != GeoPosition::Exterior)
            }
            (Geometry::Rect(r), Geometry::Line(l)) => Ok(r.position_of(&l.a)
                != GeoPosition::Exterior
                && r.position_of(&l.b) != GeoPosition::Exterior),
            (Geometry::Rect(r), Geometry::Rect(s)) => Ok(r.contains_rect(s)),
            (Geometry::Rect(r), Geometry::Polygon(pg)) => Ok(r.contains_polygon(pg)),
            (Geometry::Polygon(pg), Geometry::Point(p)) => {
                Ok(pg.position_of(p) != GeoPosition::Exterior)
            }
            (Geometry::Polygon(pg), Geometry::Line(l)) => Ok(!line_spans(l, pg).1),
            (Geometry::Polygon(pg), Geometry::Rect(r)) => {
                Ok(polygon_covers_polygon(pg, &r.to_polygon()?))
            }
            (Geometry::Polygon(p1), Geometry::Polygon(p2)) => Ok(polygon_covers_polygon(p1, p2)),
        }
    }

    pub fn within(&self, other: &Geometry) -> Result<bool> {
        other.contains(self)
    }

    /// Same-dimension operands whose interiors partially overlap, neither covering the
    /// other. Always false for points and for operands of different dimension.
    pub fn overlaps(&self, other: &Geometry) -> Result<bool> {
        let (a, b) = (self.basic(), other.basic());
        if matches!(a, Geometry::Collection(_)) || matches!(b, Geometry::Collection(_)) {
            bail!("overlaps is not supported for {} and {}", a.kind(), b.kind());
        }
        if a.dim() != b.dim() || matches!(a, Geometry::Point(_)) {
            return Ok(false);
        }
        if let (Geometry::Line(l), Geometry::Line(m)) = (&a, &b) {
            let partial = matches!(l.intersection_line(m), Some(Geometry::Line(_)));
            return Ok(partial && !a.covers(&b)? && !b.covers(&a)?);
        }
        let areal_overlap = match a.intersection(&b)? {
            Some(g) => g.dim() == 2,
            None => false,
        };
        Ok(areal_overlap && !a.covers(&b)? && !b.covers(&a)?)
    }

    /// The mutual part of both inputs: `None` when disjoint, otherwise a geometry of
    /// dimension at most `min(dim(a), dim(b))`, or a collection when the overlap is
    /// disconnected.
    pub fn intersection(&self, other: &Geometry) -> Result<Option<Geometry>> {
        let (a, b) = (self.basic(), other.basic());
        match (&a, &b) {
            (Geometry::Collection(c), g) | (g, Geometry::Collection(c)) => {
                let mut pieces = Vec::new();
                for m in c.members() {
                    if let Some(x) = m.intersection(g)? {
                        pieces.push(x);
                    }
                }
                Collection::make(pieces)
            }
            (Geometry::Point(p), g) | (g, Geometry::Point(p)) => {
                Ok(point_in_closure(g, p).then(|| Geometry::Point(*p)))
            }
            (Geometry::Line(l), Geometry::Line(m)) => Ok(l.intersection_line(m)),
            (Geometry::Line(l), Geometry::Rect(r)) | (Geometry::Rect(r), Geometry::Line(l)) => {
                if l.bbox().disjoint(r) {
                    return Ok(None);
                }
                clip_convex(Geometry::Line(*l), &r.to_polygon()?)
            }
            (Geometry::Line(l), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Line(l)) => line_polygon_intersection(l, pg),
            (Geometry::Rect(r), Geometry::Rect(s)) => Ok(r.intersection_rect(s)),
            (Geometry::Rect(r), Geometry::Polygon(pg))
            | (Geometry::Polygon(pg), Geometry::Rect(r)) => rect_polygon_intersection(r, pg),
            (Geometry::Polygon(p1), Geometry::Polygon(p2)) => {
                polygon_polygon_intersection(p1, p2)
            }
        }
    }

    /// The combined interior of both inputs: the larger when one covers the other, a
    /// two-member collection when disjoint. The union of two distinct overlapping
    /// interiors is not implemented.
    pub fn union(&self, other: &Geometry) -> Result<Geometry> {
        let (a, b) = (self.basic(), other.basic());
        if let Geometry::Collection(c) = &a {
            let mut items = c.members();
            items.push(b.clone());
            return Geometry::union_many(&items);
        }
        if let Geometry::Collection(c) = &b {
            let mut items = vec![a.clone()];
            items.extend(c.members());
            return Geometry::union_many(&items);
        }
        if a.equals(&b) {
            return Ok(a);
        }
        if a.dim() >= b.dim() && a.covers(&b)? {
            return Ok(a);
        }
        if b.dim() >= a.dim() && b.covers(&a)? {
            return Ok(b);
        }
        if !a.intersects(&b) {
            return match Collection::make(vec![a.clone(), b])? {
                Some(g) => Ok(g),
                None => Ok(a),
            };
        }
        bail!(
            "union of overlapping {} and {} is not supported",
            a.kind(),
            b.kind()
        )
    }

    /// n-ary union: drop every argument subsumed by another, then fold pairwise.
    pub fn union_many(items: &[Geometry]) -> Result<Geometry> {
        ensure!(!items.is_empty(), "union of an empty set of geometries");
        let mut keep: Vec<Geometry> = Vec::new();
        for (i, g) in items.iter().enumerate() {
            let mut subsumed = false;
            for (j, h) in items.iter().enumerate() {
                if i == j {
                    continue;
                }
                if h.equals(g) {
                    // keep only the first of an equal pair
                    if j < i {
                        subsumed = true;
                        break;
                    }
                    continue;
                }
                if h.dim() >= g.dim() && h.covers(g).unwrap_or(false) {
                    subsumed = true;
                    break;
                }
            }
            match subsumed {
                true => debug!("dropping {} subsumed by another union argument", g.kind()),
                false => keep.push(g.clone()),
            }
        }
        let mut it = keep.into_iter();
        let mut acc = match it.next() {
            Some(g) => g,
            None => bail!("union of an empty set of geometries"),
        };
        for g in it {
            acc = acc.union(&g)?;
        }
        Ok(acc)
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Line> for Geometry {
    fn from(l: Line) -> Self {
        Geometry::Line(l)
    }
}

impl From<Rect> for Geometry {
    fn from(r: Rect) -> Self {
        Geometry::Rect(r)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<Collection> for Geometry {
    fn from(c: Collection) -> Self {
        Geometry::Collection(c)
    }
}

/// Boundary-inclusive point membership.
fn point_in_closure(g: &Geometry, p: &Point) -> bool {
    match g {
        Geometry::Point(q) => p == q,
        Geometry::Line(l) => l.intersects_point(p),
        Geometry::Rect(r) => r.position_of(p) != GeoPosition::Exterior,
        Geometry::Polygon(pg) => pg.position_of(p) != GeoPosition::Exterior,
        Geometry::Collection(c) => c.members().iter().any(|m| point_in_closure(m, p)),
    }
}

fn line_intersects_rect(l: &Line, r: &Rect) -> bool {
    if l.bbox().disjoint(r) {
        return false;
    }
    if r.position_of(&l.a) != GeoPosition::Exterior || r.position_of(&l.b) != GeoPosition::Exterior
    {
        return true;
    }
    r.edges().iter().any(|e| e.intersects_line(l))
}

fn line_intersects_polygon(l: &Line, pg: &Polygon) -> bool {
    if l.bbox().disjoint(&pg.bbox()) {
        return false;
    }
    pg.lines().iter().any(|e| e.intersects_line(l))
        || pg.position_of(&l.a) != GeoPosition::Exterior
}

fn rect_intersects_polygon(r: &Rect, pg: &Polygon) -> bool {
    match r.to_polygon() {
        Ok(rp) => polygon_intersects_polygon(&rp, pg),
        Err(_) => false,
    }
}

fn polygon_intersects_polygon(a: &Polygon, b: &Polygon) -> bool {
    if a.bbox().disjoint(&b.bbox()) {
        return false;
    }
    let b_lines = b.lines();
    a.lines()
        .iter()
        .any(|e1| b_lines.iter().any(|e2| e1.intersects_line(e2)))
        || a.position_of(&b.ring()[0]) != GeoPosition::Exterior
        || b.position_of(&a.ring()[0]) != GeoPosition::Exterior
}

fn line_polygon_intersection(l: &Line, pg: &Polygon) -> Result<Option<Geometry>> {
    if l.bbox().disjoint(&pg.bbox()) {
        return Ok(None);
    }
    match pg.is_convex() {
        true => clip_convex(Geometry::Line(*l), pg),
        false => Collection::make(line_polygon_pieces(l, pg)?),
    }
}

fn rect_polygon_intersection(r: &Rect, pg: &Polygon) -> Result<Option<Geometry>> {
    if r.disjoint(&pg.bbox()) {
        return Ok(None);
    }
    let rp = r.to_polygon()?;
    if polygon_covers_polygon(&rp, pg) {
        return Ok(Some(Geometry::Polygon(pg.clone())));
    }
    if polygon_covers_polygon(pg, &rp) {
        return Ok(Some(Geometry::Rect(*r)));
    }
    clip_convex(Geometry::Polygon(pg.clone()), &rp)
}

fn polygon_polygon_intersection(a: &Polygon, b: &Polygon) -> Result<Option<Geometry>> {
    if a.bbox().disjoint(&b.bbox()) {
        return Ok(None);
    }
    if a == b {
        return Ok(Some(Geometry::Polygon(a.clone())));
    }
    if polygon_covers_polygon(a, b) {
        return Ok(Some(Geometry::Polygon(b.clone())));
    }
    if polygon_covers_polygon(b, a) {
        return Ok(Some(Geometry::Polygon(a.clone())));
    }
    match (a.is_convex(), b.is_convex()) {
        (_, true) => clip_convex(Geometry::Polygon(a.clone()), b),
        (true, false) => clip_convex(Geometry::Polygon(b.clone()), a),
        (false, false) => bail!("intersection of two non-convex polygons is not supported"),
    }
}
