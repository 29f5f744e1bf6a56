/// Position of a point relative to a closed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Exterior,
    Boundary,
    Interior,
}

/// Side of a directed infinite line, looking from start towards end.
/// With clockwise-wound polygons the interior lies on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}
