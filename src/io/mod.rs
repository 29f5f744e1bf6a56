//! Ingestion and rendering boundaries of the kernel.

pub mod coords;
pub mod svg_export;

#[doc(inline)]
pub use coords::Coords;
