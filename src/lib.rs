#![cfg_attr(docsrs, feature(doc_cfg))]
//! # coverage-strata
//!
//! coverage-strata decomposes a set of overlapping planar coverage regions
//! (sensor footprints, service areas, survey swaths) into a complete,
//! non-overlapping stratification by overlap multiplicity: for every covered
//! point, how many sources contain it and which subset is responsible.
//!
//! ## Output layers
//! - **Simple zones**: per source, the area no other source covers.
//! - **Multiple zones**: per combination of sources, the area covered by
//!   exactly that combination.
//! - **Rings**: per multiplicity `m >= 2`, the area covered by exactly `m`
//!   sources.
//! - **Maximal coverage**: the area covered by all sources, if any.
//! - **Totals**: simple total, multiple total and coverage total.
//!
//! Simple zones, rings and the maximal region are mutually disjoint and
//! together cover the union of the sources.
//!
//! ## Pipeline
//! 1. [`algs::enumerate_levels`] intersects every combination of sources
//!    from size `n` down to 2 and drops empty ones.
//! 2. [`algs::detect_maximal`] splits off the size-`n` intersection.
//! 3. [`algs::reduce_rings`] subtracts higher levels from lower ones in
//!    descending order.
//! 4. [`algs::derive_simple`] removes the overlap from each source.
//!
//! [`engine::Decomposer`] chains these stages. The geometry kernel is
//! pluggable through [`geometry::GeometryKernel`]; [`geometry::GeoKernel`]
//! wraps the `geo` crate.
//!
//! ## Determinism
//! The pipeline is single-threaded except for the per-level intersections,
//! which run on rayon when the `rayon` feature is enabled. Results are
//! merged back in combination order, so output does not depend on
//! scheduling.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! coverage-strata = "0.1"
//! # features = ["rayon"]
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod engine;
pub mod geometry;
pub mod region;
pub mod strata_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::engine::{
        DecompositionConfig, DecompositionResult, Decomposer, LayerDescriptor, decompose,
    };
    pub use crate::geometry::{
        GeoKernel, Geometry, GeometryKernel, OverlayConfig, SliverFilter, UnionStrategy,
    };
    pub use crate::region::{CombinationGroup, Region, RegionKind};
    pub use crate::strata_error::StrataError;
}
