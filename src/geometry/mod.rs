pub mod clip;
pub mod collection;
pub mod geo_enums;
pub mod primitives;
pub mod shape;

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use shape::Geometry;
