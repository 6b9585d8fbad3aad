//! Decomposition stages, leaves first.
//!
//! Each stage is a free function over a [`GeometryKernel`](crate::geometry::GeometryKernel);
//! [`Decomposer`](crate::engine::Decomposer) chains them in order.

pub mod combinations;
pub mod levels;
pub mod maximal;
pub mod rings;
pub mod simple;

pub use combinations::{Combinations, binomial, combinations};
pub use levels::{LevelOptions, enumerate_levels};
pub use maximal::{MaximalSplit, detect_maximal};
pub use rings::{RingOptions, RingReduction, reduce_rings};
pub use simple::{SimpleDerivation, derive_simple};
