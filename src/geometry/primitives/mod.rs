mod line;
mod point;
mod polygon;
mod rect;

#[doc(inline)]
pub use line::Line;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use rect::Rect;
