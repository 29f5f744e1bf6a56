//! Pure half-plane clipping functions.
//!
//! Every function here builds new vertex vectors from immutable inputs; nothing mutates
//! an operand. The boundary of a crop is always an infinite directed line, with the kept
//! side on its right (see [`Line::in_bound`]).

use std::collections::HashMap;

use anyhow::Result;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::geometry::Geometry;
use crate::geometry::collection::Collection;
use crate::geometry::geo_enums::{GeoPosition, Side};
use crate::geometry::primitives::{Line, Point, Polygon};
use crate::util::FPA;

/// Crop any geometry against the right-hand side of an infinite boundary line.
pub fn crop_geometry(subject: &Geometry, boundary: &Line) -> Result<Option<Geometry>> {
    match subject {
        Geometry::Point(p) => Ok(match boundary.in_bound(p) {
            Some(Side::Left) => None,
            _ => Some(Geometry::Point(*p)),
        }),
        Geometry::Line(l) => Ok(l.crop(boundary)),
        Geometry::Rect(r) => crop_polygon(&r.to_polygon()?, boundary),
        Geometry::Polygon(pg) => crop_polygon(pg, boundary),
        Geometry::Collection(c) => {
            let mut pieces = Vec::new();
            for m in c.members() {
                if let Some(g) = crop_geometry(&m, boundary)? {
                    pieces.push(g);
                }
            }
            Collection::make(pieces)
        }
    }
}

/// Crop a subject against every edge of a convex clipper, one half-plane at a time.
/// The subject degrades monotonically towards `None` as edges eliminate it.
pub fn clip_convex(subject: Geometry, clipper: &Polygon) -> Result<Option<Geometry>> {
    let mut acc = Some(subject);
    for edge in clipper.lines() {
        acc = match acc {
            Some(g) => crop_geometry(&g, &edge)?,
            None => return Ok(None),
        };
    }
    Ok(acc)
}

/// Portion of a polygon on the right-hand side of an infinite boundary line.
///
/// A single boundary may sever a non-convex ring into several fragments. The walk keeps
/// every maximal chain of in-bound vertices (with the crossing points where the ring
/// pierces the boundary), then reconnects chains along the boundary: sorting all
/// crossings by their position on the boundary pairs them into the spans where the
/// boundary runs through the polygon's interior, and each span links one chain's exit to
/// another's entry. Chains that only touch the boundary from the cut side come out as
/// degenerate Point/Line contacts.
pub fn crop_polygon(subject: &Polygon, boundary: &Line) -> Result<Option<Geometry>> {
    let ring = subject.ring();
    let sides: Vec<Option<Side>> = ring.iter().map(|p| boundary.in_bound(p)).collect();

    if !sides.contains(&Some(Side::Left)) {
        // nothing is cut away
        return Ok(Some(Geometry::Polygon(subject.clone())));
    }
    if !sides.contains(&Some(Side::Right)) {
        return boundary_contacts(ring, &sides);
    }

    // start the walk strictly outside, so chains never wrap around the ring start
    let n = ring.len();
    let start = sides
        .iter()
        .position(|s| *s == Some(Side::Left))
        .unwrap_or(0);

    // augmented ring: vertices plus the crossing point of every strictly straddling edge
    let mut aug: Vec<(Point, Option<Side>)> = Vec::with_capacity(n + 4);
    for k in 0..n {
        let i = (start + k) % n;
        let j = (start + k + 1) % n;
        aug.push((ring[i], sides[i]));
        if straddles(sides[i], sides[j]) {
            let edge = Line {
                a: ring[i],
                b: ring[j],
            };
            if let Some(x) = boundary.extrapolate_intersection(&edge) {
                aug.push((x, None));
            }
        }
    }

    // chains of kept points, delimited by strictly-left vertices
    let mut chains: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for (p, side) in aug {
        match side {
            Some(Side::Left) => {
                if !current.is_empty() {
                    chains.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(p),
        }
    }
    if !current.is_empty() {
        chains.push(current);
    }

    let (real, contacts): (Vec<Vec<Point>>, Vec<Vec<Point>>) = chains
        .into_iter()
        .partition(|c| c.iter().any(|p| boundary.in_bound(p) == Some(Side::Right)));

    let mut pieces: Vec<Geometry> = Vec::new();
    if !real.is_empty() {
        let frags = stitch_fragments(&real, boundary);
        debug!(
            "crop severed polygon into {} fragment(s), {} contact(s)",
            frags.len(),
            contacts.len()
        );
        for frag in frags {
            pieces.push(piece_from_run(frag)?);
        }
    }
    // tangent contacts from the cut side still lie on the kept closure
    let contact_pieces: Vec<Geometry> = contacts.iter().map(|c| contact_piece(c)).collect();
    for c in contact_pieces {
        if !subsumed_by_any(&c, &pieces) {
            pieces.push(c);
        }
    }

    Collection::make(pieces)
}

/// All boundary pieces of a line cut by a polygon's edges: the sub-segments running
/// through the polygon's closure plus any isolated touch points, ordered along the line.
pub fn line_polygon_pieces(line: &Line, poly: &Polygon) -> Result<Vec<Geometry>> {
    let ts = cut_params(line, poly);

    // spans whose midpoint is not exterior are kept, adjacent kept spans merge
    let mut spans: Vec<(f64, f64)> = Vec::new();
    for (t0, t1) in ts.iter().copied().tuple_windows() {
        let mid = line.point_at((t0 + t1) / 2.0);
        if poly.position_of(&mid) != GeoPosition::Exterior {
            match spans.last_mut() {
                Some(last) if FPA(last.1) == FPA(t0) => last.1 = t1,
                _ => spans.push((t0, t1)),
            }
        }
    }

    let mut pieces: Vec<Geometry> = spans
        .iter()
        .map(|&(t0, t1)| {
            Geometry::Line(Line {
                a: line.point_at(t0),
                b: line.point_at(t1),
            })
        })
        .collect();

    // isolated boundary touches outside every kept span become points
    for &t in &ts {
        let in_span = spans
            .iter()
            .any(|&(t0, t1)| FPA(t) >= FPA(t0) && FPA(t) <= FPA(t1));
        if !in_span {
            let p = line.point_at(t);
            if poly.position_of(&p) != GeoPosition::Exterior {
                pieces.push(Geometry::Point(p));
            }
        }
    }

    pieces.sort_by_key(|g| OrderedFloat(piece_param(line, g)));
    Ok(pieces)
}

/// Classify the spans of a line against a polygon: whether any part runs strictly
/// through the interior, and whether any part runs through the exterior.
pub fn line_spans(line: &Line, poly: &Polygon) -> (bool, bool) {
    let ts = cut_params(line, poly);
    let mut has_interior = false;
    let mut has_exterior = false;
    for (t0, t1) in ts.iter().copied().tuple_windows() {
        match poly.position_of(&line.point_at((t0 + t1) / 2.0)) {
            GeoPosition::Interior => has_interior = true,
            GeoPosition::Exterior => has_exterior = true,
            GeoPosition::Boundary => {}
        }
    }
    (has_interior, has_exterior)
}

/// Whether no part of `other` runs through the exterior of `poly`.
pub fn polygon_covers_polygon(poly: &Polygon, other: &Polygon) -> bool {
    if poly.bbox().disjoint(&other.bbox()) {
        return false;
    }
    other.lines().iter().all(|e| !line_spans(e, poly).1)
}

/// Parameter partition of a line by a polygon's edge crossings, including 0 and 1.
fn cut_params(line: &Line, poly: &Polygon) -> Vec<f64> {
    let mut ts: Vec<f64> = vec![0.0, 1.0];
    for edge in poly.lines() {
        match line.intersection_line(&edge) {
            Some(Geometry::Point(p)) => ts.push(line.param_of(&p).clamp(0.0, 1.0)),
            Some(Geometry::Line(l)) => {
                ts.push(line.param_of(&l.a).clamp(0.0, 1.0));
                ts.push(line.param_of(&l.b).clamp(0.0, 1.0));
            }
            _ => {}
        }
    }
    ts.sort_by_key(|t| OrderedFloat(*t));
    ts.dedup_by(|a, b| FPA(*a) == FPA(*b));
    ts
}

fn piece_param(line: &Line, g: &Geometry) -> f64 {
    match g {
        Geometry::Point(p) => line.param_of(p),
        Geometry::Line(l) => line.param_of(&l.a),
        _ => 0.0,
    }
}

fn straddles(s1: Option<Side>, s2: Option<Side>) -> bool {
    matches!(
        (s1, s2),
        (Some(Side::Left), Some(Side::Right)) | (Some(Side::Right), Some(Side::Left))
    )
}

/// Reconnect kept chains into closed fragment rings.
///
/// Each chain enters the boundary at its first point and exits at its last. Sorting all
/// entry/exit points by position along the boundary pairs consecutive crossings into the
/// interior spans of the boundary line; following exit → span → entry stitches the
/// chains of each fragment together.
fn stitch_fragments(chains: &[Vec<Point>], boundary: &Line) -> Vec<Vec<Point>> {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct CrossingId {
        chain: usize,
        entry: bool,
    }

    let mut crossings: Vec<(f64, CrossingId)> = Vec::with_capacity(chains.len() * 2);
    for (ci, chain) in chains.iter().enumerate() {
        if let (Some(first), Some(last)) = (chain.first(), chain.last()) {
            crossings.push((
                boundary.param_of(first),
                CrossingId {
                    chain: ci,
                    entry: true,
                },
            ));
            crossings.push((
                boundary.param_of(last),
                CrossingId {
                    chain: ci,
                    entry: false,
                },
            ));
        }
    }
    crossings.sort_by_key(|(t, _)| OrderedFloat(*t));

    let mut partner: HashMap<CrossingId, CrossingId> = HashMap::new();
    for pair in crossings.chunks(2) {
        if let [(_, c1), (_, c2)] = pair {
            partner.insert(*c1, *c2);
            partner.insert(*c2, *c1);
        }
    }

    let mut used = vec![false; chains.len()];
    let mut frags: Vec<Vec<Point>> = Vec::new();
    for start in 0..chains.len() {
        if used[start] {
            continue;
        }
        let mut frag: Vec<Point> = Vec::new();
        let mut cur = start;
        loop {
            used[cur] = true;
            frag.extend(chains[cur].iter().copied());
            match partner.get(&CrossingId {
                chain: cur,
                entry: false,
            }) {
                Some(next) if next.entry && !used[next.chain] => cur = next.chain,
                _ => break, // returned to the starting chain (or inconsistent pairing)
            }
        }
        frags.push(frag);
    }
    frags
}

/// Turn a run of ring points into the smallest geometry describing it.
fn piece_from_run(run: Vec<Point>) -> Result<Geometry> {
    let mut pts: Vec<Point> = Vec::with_capacity(run.len());
    for p in run {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    Ok(match pts.len() {
        1 => Geometry::Point(pts[0]),
        2 => Geometry::Line(Line {
            a: pts[0],
            b: pts[1],
        }),
        _ => Geometry::Polygon(Polygon::new(pts)?),
    })
}

/// A chain lying entirely on the boundary: a single touch point or an edge segment.
fn contact_piece(chain: &[Point]) -> Geometry {
    let first = chain[0];
    let last = chain[chain.len() - 1];
    match first == last {
        true => Geometry::Point(first),
        false => Geometry::Line(Line { a: first, b: last }),
    }
}

fn subsumed_by_any(piece: &Geometry, others: &[Geometry]) -> bool {
    others.iter().any(|other| match (piece, other) {
        (Geometry::Point(p), Geometry::Polygon(pg)) => pg.position_of(p) != GeoPosition::Exterior,
        (Geometry::Point(p), Geometry::Line(l)) => l.intersects_point(p),
        (Geometry::Line(l), Geometry::Polygon(pg)) => !line_spans(l, pg).1,
        _ => false,
    })
}

/// Crop result when the polygon never reaches the kept side: its on-boundary runs.
fn boundary_contacts(ring: &[Point], sides: &[Option<Side>]) -> Result<Option<Geometry>> {
    let n = ring.len();
    let start = sides
        .iter()
        .position(|s| *s == Some(Side::Left))
        .unwrap_or(0);
    let mut pieces: Vec<Geometry> = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    for k in 0..n {
        let i = (start + k) % n;
        match sides[i] {
            None => run.push(ring[i]),
            _ => {
                if !run.is_empty() {
                    pieces.push(contact_piece(&std::mem::take(&mut run)));
                }
            }
        }
    }
    if !run.is_empty() {
        pieces.push(contact_piece(&run));
    }
    Collection::make(pieces)
}
