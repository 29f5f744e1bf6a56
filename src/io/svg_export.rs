//! Headless SVG rendering: pure mappings from geometries to `svg` path data and nodes.
//! Nothing in the geometry modules depends on this.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::Geometry;
use crate::geometry::primitives::{Line, Point, Polygon, Rect};

pub fn ring_data(poly: &Polygon) -> Data {
    let ring = poly.ring();
    let mut data = Data::new().move_to::<(f64, f64)>(ring[0].into());
    for p in &ring[1..] {
        data = data.line_to::<(f64, f64)>((*p).into());
    }
    data.close()
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn line_data(line: &Line) -> Data {
    Data::new()
        .move_to((line.a.0, line.a.1))
        .line_to((line.b.0, line.b.1))
}

pub fn point_node(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

/// Document with a viewbox covering the geometry's bbox, padded by 5% of its larger
/// extent (at least 5% of a unit, so zero-extent geometries stay visible).
pub fn document_for(g: &Geometry) -> Document {
    let bbox = g.bbox();
    let pad = f64::max(bbox.width(), bbox.height()).max(1.0) * 0.05;
    Document::new().set(
        "viewBox",
        (
            bbox.x_min - pad,
            bbox.y_min - pad,
            bbox.width() + 2.0 * pad,
            bbox.height() + 2.0 * pad,
        ),
    )
}

/// Append the nodes rendering `g` to the document, applying `params` to every path.
pub fn draw(doc: Document, g: &Geometry, params: &[(&str, &str)]) -> Document {
    match g {
        Geometry::Point(p) => doc.add(point_node(*p, None, None)),
        Geometry::Line(l) => doc.add(data_to_path(line_data(l), params)),
        Geometry::Rect(r) => doc.add(data_to_path(rect_data(r), params)),
        Geometry::Polygon(pg) => doc.add(data_to_path(ring_data(pg), params)),
        Geometry::Collection(c) => c.members().iter().fold(doc, |d, m| draw(d, m, params)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_renders_as_closed_path() {
        let square = Polygon::new(vec![
            Point(0.0, 0.0),
            Point(0.0, 2.0),
            Point(2.0, 2.0),
            Point(2.0, 0.0),
        ])
        .unwrap();
        let path = data_to_path(ring_data(&square), &[("fill", "none"), ("stroke", "black")]);
        let rendered = path.to_string();
        assert!(rendered.contains("fill=\"none\""));
        assert!(rendered.contains('M') && rendered.contains('z'));
    }

    #[test]
    fn document_covers_geometry() {
        let g = Geometry::Line(Line::new(Point(0.0, 0.0), Point(10.0, 0.0)).unwrap());
        let doc = draw(document_for(&g), &g, &[("stroke", "black")]);
        assert!(doc.to_string().contains("viewBox"));
    }
}
