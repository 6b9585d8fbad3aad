//! Planar geometry kernel used by the decomposition engine.
//!
//! The engine never touches coordinates directly. It only needs the boolean
//! set operations and a few queries captured by [`GeometryKernel`]; the
//! default implementation [`GeoKernel`] is backed by the `geo` crate.
//!
//! All region geometries are carried as [`Geometry`], a multi-polygon in a
//! common planar reference. Polygons are promoted on entry.

pub mod kernel;
pub mod sliver;

pub use kernel::{GeoKernel, OverlayConfig, UnionStrategy};
pub use sliver::SliverFilter;

use thiserror::Error;

/// Region geometry: a (possibly empty) multi-polygon with holes.
pub type Geometry = geo::MultiPolygon<f64>;

/// Failures reported by a [`GeometryKernel`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A boolean operation produced a region that fails validation.
    #[error("{op} produced an invalid region")]
    InvalidOutput { op: &'static str },
    /// An input region failed validation.
    #[error("input region is not valid")]
    InvalidInput,
}

/// Capability set the engine requires from a planar geometry collaborator.
///
/// Every operation returns a new value; inputs are never modified.
/// Implementations must be deterministic: the same inputs always produce the
/// same output, so callers never retry a failed operation.
pub trait GeometryKernel: Send + Sync {
    /// Union of many regions. An empty slice yields the empty region.
    fn union_all(&self, regions: &[&Geometry]) -> Result<Geometry, KernelError>;

    /// `a ∩ b`.
    fn intersect(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError>;

    /// `a \ b`.
    fn difference(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError>;

    /// True when `g` covers no area.
    fn is_empty(&self, g: &Geometry) -> bool;

    /// Total number of coordinates over all rings, closing coordinates included.
    fn vertex_count(&self, g: &Geometry) -> usize;

    /// True when `g` is a valid region (no self-intersection, holes nested).
    fn validate(&self, g: &Geometry) -> bool;

    /// Point-in-region query. Boundary points are not contained.
    fn contains_point(&self, g: &Geometry, x: f64, y: f64) -> bool;

    /// Union of exactly two regions.
    fn union_pair(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError> {
        self.union_all(&[a, b])
    }
}

/// The empty region.
pub fn empty() -> Geometry {
    geo::MultiPolygon::new(Vec::new())
}
