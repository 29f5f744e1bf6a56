//! A planar computational-geometry kernel.
//!
//! Provides a small set of immutable geometric primitives ([`Point`], [`Line`], [`Rect`],
//! [`Polygon`], [`Collection`]) unified under the [`Geometry`] enum, together with
//! tolerance-based spatial predicates (intersects, touches, crosses, contains, covers,
//! overlaps, equals) and constructive operators (intersection, union, half-plane crop).
//!
//! All scalar comparisons go through [`util::FPA`] with a fixed tolerance of
//! [`util::EPSILON`], so nearly-coincident inputs never produce contradictory answers.
//!
//! [`Point`]: geometry::primitives::Point
//! [`Line`]: geometry::primitives::Line
//! [`Rect`]: geometry::primitives::Rect
//! [`Polygon`]: geometry::primitives::Polygon
//! [`Collection`]: geometry::Collection
//! [`Geometry`]: geometry::Geometry

pub mod geometry;
pub mod io;
pub mod util;
