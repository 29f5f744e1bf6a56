mod fpa;

#[doc(inline)]
pub use fpa::FPA;

/// Absolute tolerance used for every scalar comparison in the kernel.
pub const EPSILON: f64 = 1e-9;
