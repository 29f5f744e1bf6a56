use test_case::test_case;

use flatgeom::geometry::clip::crop_geometry;
use flatgeom::geometry::{Collection, Geometry};
use flatgeom::geometry::primitives::{Line, Point, Polygon, Rect};

fn pt(x: f64, y: f64) -> Geometry {
    Geometry::Point(Point(x, y))
}

fn ln(a: (f64, f64), b: (f64, f64)) -> Geometry {
    Geometry::Line(Line::new(a.into(), b.into()).unwrap())
}

fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Geometry {
    Geometry::Rect(Rect::new(x_min, y_min, x_max, y_max).unwrap())
}

fn poly(pts: &[(f64, f64)]) -> Geometry {
    Geometry::Polygon(Polygon::new(pts.iter().map(|&p| p.into()).collect()).unwrap())
}

fn collection(items: Vec<Geometry>) -> Geometry {
    Collection::make(items).unwrap().unwrap()
}

#[test]
fn collinear_overlap_follows_receiver_direction() {
    let a = ln((3.0, 3.0), (3.0, 5.0));
    let b = ln((3.0, 4.0), (3.0, 6.0));
    assert_eq!(a.intersection(&b).unwrap(), Some(ln((3.0, 4.0), (3.0, 5.0))));
}

#[test]
fn triangle_point_membership_grid() {
    let t = poly(&[(1.0, 2.0), (3.0, 5.0), (4.0, 1.0)]);
    let expect = [
        [false, false, false, false, false],
        [false, false, false, false, false],
        [false, false, true, true, false],
        [false, false, true, true, false],
        [false, false, false, true, false],
        [false, false, false, false, false],
    ];
    for (y, row) in expect.iter().enumerate() {
        for (x, &inside) in row.iter().enumerate() {
            let p = pt(x as f64, y as f64);
            assert_eq!(t.contains(&p).unwrap(), inside, "({x}, {y})");
        }
    }
}

#[test]
fn horseshoe_point_membership_grid() {
    let horseshoe = poly(&[
        (1.0, 1.0),
        (1.0, 6.0),
        (2.0, 5.0),
        (2.0, 2.0),
        (4.0, 2.0),
        (3.0, 4.0),
        (5.0, 4.0),
        (4.0, 0.0),
    ]);
    let expect = [
        [false, false, false, false, false, false, false],
        [false, false, true, true, true, false, false],
        [false, false, false, false, false, false, false],
        [false, false, false, false, true, false, false],
        [false, false, false, false, false, false, false],
        [false, false, false, false, false, false, false],
        [false, false, false, false, false, false, false],
    ];
    for (y, row) in expect.iter().enumerate() {
        for (x, &inside) in row.iter().enumerate() {
            let p = pt(x as f64, y as f64);
            assert_eq!(horseshoe.contains(&p).unwrap(), inside, "({x}, {y})");
        }
    }
}

#[test]
fn square_cropped_along_diagonal() {
    let square = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    let diagonal = Line::new(Point(0.0, 0.0), Point(2.0, 2.0)).unwrap();
    assert_eq!(
        crop_geometry(&square, &diagonal).unwrap(),
        Some(poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0)]))
    );
}

#[test]
fn right_triangle_cropped_horizontally() {
    let t = poly(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0)]);
    // leftward boundary keeps the part above it
    let above = Line::new(Point(1.0, 1.0), Point(0.0, 1.0)).unwrap();
    assert_eq!(
        crop_geometry(&t, &above).unwrap(),
        Some(poly(&[(0.0, 1.0), (0.0, 3.0), (2.0, 1.0)]))
    );
    // rightward boundary keeps the part below it
    let below = Line::new(Point(0.0, 1.0), Point(1.0, 1.0)).unwrap();
    assert_eq!(
        crop_geometry(&t, &below).unwrap(),
        Some(poly(&[(0.0, 0.0), (0.0, 1.0), (2.0, 1.0), (3.0, 0.0)]))
    );
}

#[test]
fn box_corner_touch_yields_point() {
    let b = rect(0.0, 0.0, 10.0, 5.0);
    let l = ln((15.0, 0.0), (5.0, 10.0));
    assert_eq!(b.intersection(&l).unwrap(), Some(pt(10.0, 5.0)));
}

#[test]
fn backtracking_ring_is_rejected() {
    assert!(Polygon::new(vec![Point(1.0, 2.0), Point(3.0, 6.0), Point(2.0, 4.0)]).is_err());
}

#[test_case(0.0, 0.0, true; "interior")]
#[test_case(0.0, 6.0, false; "boundary is not contained")]
#[test_case(12.0, -8.0, false; "exterior")]
fn box_point_containment(x: f64, y: f64, expect: bool) {
    let b = rect(-2.0, -7.0 / 3.0, 3.1, 6.0);
    assert_eq!(b.contains(&pt(x, y)).unwrap(), expect);
}

#[test]
fn box_containment() {
    let b = rect(-2.0, -7.0 / 3.0, 3.1, 6.0);

    assert!(b.contains(&ln((0.0, 0.0), (1.0, 1.0))).unwrap());
    assert!(!b.contains(&ln((0.0, 0.0), (7.0, 7.0))).unwrap());
    assert!(!b.contains(&ln((-3.0, 0.0), (-4.0, 1.0))).unwrap());
    // a line along the boundary is not contained
    assert!(!b.contains(&ln((3.1, 0.0), (3.1, -1.0))).unwrap());

    assert!(b.contains(&rect(0.0, 0.0, 1.0, 1.0)).unwrap());
    assert!(!b.contains(&rect(0.0, 0.0, 1000.0, 1000.0)).unwrap());
    assert!(!b.contains(&rect(-7.0, -7.0, -6.0, -6.0)).unwrap());

    // a shape contains itself
    assert!(b.contains(&b).unwrap());

    assert!(b.contains(&poly(&[(-1.0, -1.0), (0.0, 3.0), (3.0, 0.0)])).unwrap());
    assert!(!b.contains(&poly(&[(6.0, 6.0), (7.0, 10.0), (10.0, 7.0)])).unwrap());
}

#[test_case(11.0, 0.0, false; "right of box")]
#[test_case(-1.0, 0.0, false; "left of box")]
#[test_case(1.0, -1.0, false; "below box")]
#[test_case(1.0, 6.0, false; "above box")]
#[test_case(3.0, 3.0, true; "interior")]
#[test_case(0.0, 0.0, true; "corner")]
#[test_case(0.0, 1.0, true; "left edge")]
#[test_case(0.0, 5.0, true; "top left corner")]
#[test_case(5.0, 5.0, true; "top edge")]
#[test_case(10.0, 5.0, true; "top right corner")]
#[test_case(10.0, 2.0, true; "right edge")]
#[test_case(10.0, 0.0, true; "bottom right corner")]
#[test_case(9.0, 0.0, true; "bottom edge")]
fn box_point_intersects(x: f64, y: f64, expect: bool) {
    let b = rect(0.0, 0.0, 10.0, 5.0);
    let p = pt(x, y);
    assert_eq!(b.intersects(&p), expect);
    assert_eq!(p.intersects(&b), expect);
}

#[test]
fn box_line_intersects() {
    let b = rect(0.0, 0.0, 10.0, 5.0);
    assert!(!b.intersects(&ln((11.0, 0.0), (11.0, 5.0))));
    assert!(b.intersects(&ln((1.0, 1.0), (4.0, 3.0))));
    assert!(b.intersects(&ln((-7.0, 4.0), (12.0, 4.0))));
    assert!(b.intersects(&ln((0.0, 0.0), (0.0, 5.0))));
    assert!(b.intersects(&ln((10.0, 4.0), (10.0, 6.0))));
    assert!(b.intersects(&ln((9.0, -1.0), (11.0, 1.0))));
}

#[test]
fn box_polygon_intersects() {
    let b = rect(0.0, 0.0, 10.0, 5.0);
    let external = poly(&[(0.0, 6.0), (0.0, 9.0), (4.0, 6.0)]);
    assert!(!b.intersects(&external));
    assert!(b.intersects(&external.translate(1.0, -5.0)));
    assert!(b.intersects(&external.translate(9.0, -5.0)));
    assert!(b.intersects(&external.translate(10.0, -5.0)));
    // shared boundary point only
    assert!(b.intersects(&external.translate(-4.0, -5.0)));
    assert!(b.intersects(&external.translate(-4.0, -1.0)));
}

#[test]
fn box_line_intersection() {
    let b = rect(0.0, 0.0, 10.0, 5.0);

    assert_eq!(b.intersection(&ln((11.0, 1.0), (12.0, 6.0))).unwrap(), None);

    let internal = ln((1.0, 1.0), (9.0, 4.0));
    assert_eq!(b.intersection(&internal).unwrap(), Some(internal.clone()));

    assert_eq!(
        b.intersection(&ln((-1.0, 3.0), (1.0, 3.0))).unwrap(),
        Some(ln((0.0, 3.0), (1.0, 3.0)))
    );
    assert_eq!(
        b.intersection(&ln((5.0, 0.0), (11.0, 12.0))).unwrap(),
        Some(ln((5.0, 0.0), (7.5, 5.0)))
    );

    // shared boundary
    assert_eq!(
        b.intersection(&ln((10.0, 5.0), (10.0, 0.0))).unwrap(),
        Some(ln((10.0, 5.0), (10.0, 0.0)))
    );
    assert_eq!(
        b.intersection(&ln((1.0, 5.0), (9.0, 5.0))).unwrap(),
        Some(ln((1.0, 5.0), (9.0, 5.0)))
    );
    assert_eq!(
        b.intersection(&ln((0.0, 2.0), (0.0, -2.0))).unwrap(),
        Some(ln((0.0, 2.0), (0.0, 0.0)))
    );

    // point contact
    assert_eq!(
        b.intersection(&ln((3.0, 5.0), (4.0, 8.0))).unwrap(),
        Some(pt(3.0, 5.0))
    );
}

#[test]
fn box_box_intersection() {
    let a = rect(0.0, 0.0, 10.0, 5.0);

    assert_eq!(a.intersection(&rect(-5.0, -1.0, -1.0, 4.0)).unwrap(), None);

    let inner = rect(2.0, 3.0, 8.0, 4.0);
    assert_eq!(a.intersection(&inner).unwrap(), Some(inner.clone()));

    assert_eq!(
        a.intersection(&rect(-10.0, -2.0, 15.0, 10.0)).unwrap(),
        Some(a.clone())
    );
    assert_eq!(a.intersection(&a).unwrap(), Some(a.clone()));

    assert_eq!(
        a.intersection(&rect(8.0, -2.0, 12.0, 2.0)).unwrap(),
        Some(rect(8.0, 0.0, 10.0, 2.0))
    );
}

#[test]
fn box_polygon_intersection() {
    let b = rect(0.0, 0.0, 10.0, 5.0);

    assert_eq!(
        b.intersection(&poly(&[(12.0, 1.0), (13.0, 4.0), (17.0, 2.0)])).unwrap(),
        None
    );

    let internal = poly(&[(1.0, 1.0), (3.0, 4.0), (7.0, 2.0)]);
    assert_eq!(b.intersection(&internal).unwrap(), Some(internal.clone()));

    let containing = poly(&[(-1.0, -1.0), (-2.0, 9.0), (13.0, 11.0), (14.0, -6.0)]);
    assert_eq!(b.intersection(&containing).unwrap(), Some(b.clone()));

    let partial = poly(&[(8.0, 0.0), (12.0, 4.0), (12.0, 0.0)]);
    assert_eq!(
        b.intersection(&partial).unwrap(),
        Some(poly(&[(8.0, 0.0), (10.0, 2.0), (10.0, 0.0)]))
    );

    let shared_inside = poly(&[(0.0, 0.0), (4.0, 5.0), (4.0, 0.0)]);
    assert_eq!(b.intersection(&shared_inside).unwrap(), Some(shared_inside.clone()));

    // an external polygon sharing only a boundary segment degenerates to a line
    let shared_outside = poly(&[(0.0, 0.0), (-4.0, 0.0), (0.0, 5.0)]);
    let got = b.intersection(&shared_outside).unwrap().unwrap();
    assert!(got.equals(&ln((0.0, 0.0), (0.0, 5.0))));

    let corner = poly(&[(3.0, 9.0), (7.0, 9.0), (5.0, 5.0)]);
    assert_eq!(b.intersection(&corner).unwrap(), Some(pt(5.0, 5.0)));
}

#[test]
fn square_line_intersection() {
    let square = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    let f = |l: Geometry| square.intersection(&l).unwrap();

    // edge to edge, vertex to vertex, vertex to edge, edge to interior
    for l in [
        ln((0.0, 1.0), (2.0, 1.0)),
        ln((0.0, 0.0), (2.0, 2.0)),
        ln((0.0, 0.0), (1.0, 2.0)),
        ln((0.0, 1.0), (1.0, 1.0)),
    ] {
        assert_eq!(f(l.clone()), Some(l));
    }

    assert_eq!(
        f(ln((1.0, 1.0), (1.0, 3.0))),
        Some(ln((1.0, 1.0), (1.0, 2.0)))
    );
    assert_eq!(f(ln((2.0, 1.0), (4.0, 4.0))), Some(pt(2.0, 1.0)));
    assert_eq!(f(ln((-2.0, -2.0), (0.0, 0.0))), Some(pt(0.0, 0.0)));
}

fn w_shape() -> Geometry {
    poly(&[
        (1.0, 0.0),
        (1.0, 4.0),
        (2.0, 4.0),
        (2.0, 1.0),
        (4.0, 1.0),
        (4.0, 4.0),
        (5.0, 4.0),
        (5.0, 0.0),
    ])
}

#[test]
fn nonconvex_line_intersection() {
    let u = w_shape();

    assert_eq!(u.intersection(&ln((0.0, -1.0), (2.0, -2.0))).unwrap(), None);

    // a transversal picks up one sub-segment per prong
    let expected = collection(vec![ln((1.0, 2.0), (2.0, 2.0)), ln((4.0, 2.0), (5.0, 2.0))]);
    let got = u.intersection(&ln((0.0, 2.0), (6.0, 2.0))).unwrap().unwrap();
    assert!(got.equals(&expected));

    // vertex contact
    assert_eq!(
        u.intersection(&ln((0.0, 3.0), (2.0, 5.0))).unwrap(),
        Some(pt(1.0, 4.0))
    );

    // single sub-segment results
    assert_eq!(
        u.intersection(&ln((1.0, -1.0), (1.0, 7.0))).unwrap(),
        Some(ln((1.0, 0.0), (1.0, 4.0)))
    );
    assert_eq!(
        u.intersection(&ln((2.0, 1.0), (4.0, 1.0))).unwrap(),
        Some(ln((2.0, 1.0), (4.0, 1.0)))
    );
    assert_eq!(
        u.intersection(&ln((2.0, 4.0), (1.0, 3.0))).unwrap(),
        Some(ln((2.0, 4.0), (1.0, 3.0)))
    );

    // through two vertices, one sub-segment per prong
    let expected = collection(vec![ln((1.0, 0.0), (2.0, 1.0)), ln((4.0, 3.0), (5.0, 4.0))]);
    let got = u.intersection(&ln((0.0, -1.0), (6.0, 5.0))).unwrap().unwrap();
    assert!(got.equals(&expected));

    // mixed point and segment contact
    let expected = collection(vec![pt(2.0, 4.0), ln((4.0, 3.0), (5.0, 2.5))]);
    let got = u.intersection(&ln((0.0, 5.0), (6.0, 2.0))).unwrap().unwrap();
    assert!(got.equals(&expected));
}

#[test]
fn nonconvex_crop() {
    let u = w_shape();

    // grazing point contact
    let graze = Line::new(Point(6.0, 3.0), Point(4.0, 5.0)).unwrap();
    assert_eq!(crop_geometry(&u, &graze).unwrap(), Some(pt(5.0, 4.0)));

    // one ring survives, notch included
    let cut = Line::new(Point(0.0, 2.0), Point(6.0, 2.0)).unwrap();
    assert_eq!(
        crop_geometry(&u, &cut).unwrap(),
        Some(poly(&[
            (1.0, 0.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (2.0, 1.0),
            (4.0, 1.0),
            (4.0, 2.0),
            (5.0, 2.0),
            (5.0, 0.0),
        ]))
    );

    // the reverse cut severs the shape into its two prongs
    let cut = Line::new(Point(6.0, 2.0), Point(0.0, 2.0)).unwrap();
    let expected = collection(vec![
        poly(&[(1.0, 2.0), (1.0, 4.0), (2.0, 4.0), (2.0, 2.0)]),
        poly(&[(4.0, 2.0), (4.0, 4.0), (5.0, 4.0), (5.0, 2.0)]),
    ]);
    let got = crop_geometry(&u, &cut).unwrap().unwrap();
    assert!(got.equals(&expected));

    // a cut through boundary segments keeps them in the ring
    let cut = Line::new(Point(2.0, 1.0), Point(3.0, 1.0)).unwrap();
    assert_eq!(
        crop_geometry(&u, &cut).unwrap(),
        Some(poly(&[(1.0, 0.0), (1.0, 1.0), (5.0, 1.0), (5.0, 0.0)]))
    );
}

#[test]
fn triangle_polygon_intersection() {
    let t = poly(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0)]);

    let huge = poly(&[(-1.0, -1.0), (-1.0, 5.0), (5.0, 5.0), (5.0, -1.0)]);
    assert_eq!(t.intersection(&huge).unwrap(), Some(t.clone()));

    let inner = poly(&[(0.5, 0.5), (0.5, 1.5), (2.0, 0.5)]);
    assert_eq!(t.intersection(&inner).unwrap(), Some(inner.clone()));

    let shared = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0)]);
    assert_eq!(t.intersection(&shared).unwrap(), Some(shared.clone()));

    let outside = poly(&[(4.0, 0.0), (1.0, 3.0), (4.0, 3.0)]);
    assert_eq!(t.intersection(&outside).unwrap(), None);

    // hypotenuse shared from the outside degenerates to a line
    let mirrored = poly(&[(3.0, 0.0), (0.0, 3.0), (3.0, 3.0)]);
    let got = t.intersection(&mirrored).unwrap().unwrap();
    assert!(got.equals(&ln((0.0, 3.0), (3.0, 0.0))));

    // single shared vertex degenerates to a point
    let corner = poly(&[(3.0, 0.0), (3.0, 3.0), (6.0, 0.0)]);
    assert_eq!(t.intersection(&corner).unwrap(), Some(pt(3.0, 0.0)));

    let square = poly(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)]);
    assert_eq!(
        t.intersection(&square).unwrap(),
        Some(poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]))
    );
}

#[test]
fn touches_and_crosses() {
    let square = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);

    let grazing = ln((2.0, 1.0), (4.0, 4.0));
    assert!(square.touches(&grazing).unwrap());
    assert!(!square.crosses(&grazing));

    let transversal = ln((-1.0, 1.0), (3.0, 1.0));
    assert!(!square.touches(&transversal).unwrap());
    assert!(square.crosses(&transversal));

    assert!(square.touches(&pt(0.0, 1.0)).unwrap());
    assert!(!square.touches(&pt(1.0, 1.0)).unwrap());

    // crossing lines cross but do not touch; end-contact touches but does not cross
    let a = ln((0.0, 0.0), (2.0, 2.0));
    let b = ln((0.0, 2.0), (2.0, 0.0));
    assert!(a.crosses(&b) && !a.touches(&b).unwrap());
    let c = ln((2.0, 2.0), (3.0, 0.0));
    assert!(a.touches(&c).unwrap() && !a.crosses(&c));
}

#[test]
fn overlaps_requires_partial_interior_exchange() {
    let a = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    let shifted = a.translate(1.0, 0.0);
    assert!(a.overlaps(&shifted).unwrap());
    assert!(!a.overlaps(&a).unwrap());

    let inner = poly(&[(0.5, 0.5), (0.5, 1.5), (1.5, 0.5)]);
    assert!(!a.overlaps(&inner).unwrap());
    assert!(!a.overlaps(&ln((-1.0, 1.0), (3.0, 1.0))).unwrap());

    let l = ln((0.0, 0.0), (4.0, 0.0));
    let m = ln((2.0, 0.0), (6.0, 0.0));
    assert!(l.overlaps(&m).unwrap());
    assert!(!l.overlaps(&ln((1.0, 0.0), (2.0, 0.0))).unwrap());
}

#[test]
fn union_absorbs_or_collects() {
    let t = poly(&[(1.0, 2.0), (3.0, 5.0), (4.0, 1.0)]);

    // covered points are absorbed, vertex contact included
    assert!(t.union(&pt(1.0, 2.0)).unwrap().equals(&t));
    assert!(t.union(&pt(3.0, 3.0)).unwrap().equals(&t));

    // a detached point rides along in a collection
    let p = pt(0.0, 0.0);
    let got = t.union(&p).unwrap();
    let expected = collection(vec![t.clone(), p.clone()]);
    assert!(got.equals(&expected));
    assert!(got.intersects(&p) && got.intersects(&t));

    // n-ary form drops subsumed arguments
    let got = Geometry::union_many(&[pt(3.0, 3.0), t.clone(), p.clone()]).unwrap();
    assert!(got.equals(&expected));
}

#[test]
fn union_absorption_is_order_independent() {
    let big = poly(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
    let small = poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 1.0)]);
    assert!(big.union(&small).unwrap().equals(&big));
    assert!(small.union(&big).unwrap().equals(&big));

    let long = ln((0.0, 0.0), (4.0, 0.0));
    let short = ln((1.0, 0.0), (2.0, 0.0));
    assert!(long.union(&short).unwrap().equals(&long));
    assert!(short.union(&long).unwrap().equals(&long));
}

#[test]
fn unsupported_combinations_bail() {
    let u = w_shape();
    let v = u.translate(2.0, 0.0);
    assert!(u.intersection(&v).is_err());

    let a = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    let b = a.translate(1.0, 0.0);
    assert!(a.union(&b).is_err());
    assert!(a.touches(&b).is_err());

    let c = collection(vec![pt(0.0, 0.0), pt(9.0, 9.0)]);
    assert!(c.touches(&a).is_err());
    assert!(c.overlaps(&a).is_err());
    assert!(c.contains(&pt(0.0, 0.0)).is_err());

    assert!(pt(0.0, 0.0).contains(&a).is_err());
    assert!(ln((0.0, 0.0), (1.0, 0.0)).covers(&a).is_err());
}

#[test]
fn collection_operations_distribute() {
    let c = collection(vec![pt(1.0, 1.0), pt(11.0, 1.0), ln((0.0, 3.0), (20.0, 3.0))]);
    let b = rect(0.0, 0.0, 10.0, 5.0);

    assert!(c.intersects(&b));
    let got = c.intersection(&b).unwrap().unwrap();
    let expected = collection(vec![pt(1.0, 1.0), ln((0.0, 3.0), (10.0, 3.0))]);
    assert!(got.equals(&expected));

    // membership is unordered
    let reversed = collection(vec![ln((0.0, 3.0), (20.0, 3.0)), pt(11.0, 1.0), pt(1.0, 1.0)]);
    assert!(c.equals(&reversed));
}

#[test]
fn degenerate_boxes_behave_as_their_basic_form() {
    let flat = rect(2.0, 1.0, 2.0, 4.0);
    assert!(flat.equals(&ln((2.0, 1.0), (2.0, 4.0))));
    assert_eq!(flat.dim(), 1);
    assert!(flat.covers(&pt(2.0, 3.0)).unwrap());

    let dot = rect(2.0, 1.0, 2.0, 1.0);
    assert!(dot.equals(&pt(2.0, 1.0)));
    assert!(!dot.touches(&pt(2.0, 1.0)).unwrap());
}
