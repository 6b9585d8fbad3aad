//! One-shot decomposition pipeline.
//!
//! ```text
//! Start → LevelsEnumerated → MaxDetected → RingsReduced → SimpleDerived → Done
//! ```
//!
//! The run is synchronous and has no retry state: the first kernel failure
//! aborts it and is returned to the caller unchanged, wrapped with the name
//! of the region being built.
//!
//! # Example
//! ```rust
//! use coverage_strata::engine::decompose;
//! use coverage_strata::region::Region;
//! use geo::{Area, Rect};
//!
//! let a = Region::original("A", "survey", Rect::new((0.0, 0.0), (2.0, 2.0)).to_polygon());
//! let b = Region::original("B", "survey", Rect::new((1.0, 0.0), (3.0, 2.0)).to_polygon());
//! let out = decompose("survey", &[a, b])?;
//! let shared = out.maximal.as_ref().expect("A and B overlap");
//! assert!((shared.geometry().unsigned_area() - 2.0).abs() < 1e-9);
//! assert!((out.simple_total.geometry().unsigned_area() - 4.0).abs() < 1e-9);
//! # Ok::<(), coverage_strata::strata_error::StrataError>(())
//! ```

pub mod config;
pub mod result;

pub use config::DecompositionConfig;
pub use result::{DecompositionResult, LayerDescriptor};

use std::fmt;

use log::{debug, warn};

use crate::algs::{
    LevelOptions, RingOptions, derive_simple, detect_maximal, enumerate_levels,
    levels::index_sources, reduce_rings,
};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::{GeoKernel, GeometryKernel, KernelError};
use crate::region::Region;
use crate::strata_error::StrataError;

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    LevelsEnumerated,
    MaxDetected,
    RingsReduced,
    SimpleDerived,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Start => "start",
            Stage::LevelsEnumerated => "levels enumerated",
            Stage::MaxDetected => "maximal coverage detected",
            Stage::RingsReduced => "rings reduced",
            Stage::SimpleDerived => "simple zones derived",
            Stage::Done => "done",
        };
        f.write_str(s)
    }
}

/// Runs the decomposition with a given kernel and configuration.
#[derive(Clone, Debug)]
pub struct Decomposer<K = GeoKernel> {
    kernel: K,
    config: DecompositionConfig,
}

impl Decomposer<GeoKernel> {
    /// Decomposer on the default `geo` kernel, using `config.overlay`.
    pub fn new(config: DecompositionConfig) -> Self {
        Self {
            kernel: GeoKernel::new(config.overlay),
            config,
        }
    }
}

impl Default for Decomposer<GeoKernel> {
    fn default() -> Self {
        Self::new(DecompositionConfig::default())
    }
}

impl<K: GeometryKernel> Decomposer<K> {
    /// Use a caller-supplied kernel.
    ///
    /// The kernel carries its own overlay settings, so `config.overlay` is
    /// ignored here. It only configures the [`GeoKernel`] built by [`Decomposer::new`].
    pub fn with_kernel(kernel: K, config: DecompositionConfig) -> Self {
        Self { kernel, config }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Reject source sets the decomposition is undefined for.
    ///
    /// Checks the source count and name uniqueness always, and geometry
    /// validity when `validate_inputs` is set.
    pub fn validate_sources(&self, sources: &[Region]) -> Result<(), StrataError> {
        if sources.len() < 2 {
            return Err(StrataError::InsufficientSources {
                found: sources.len(),
            });
        }
        index_sources(sources)?;
        if self.config.validate_inputs {
            for src in sources {
                if !self.kernel.validate(src.geometry()) {
                    warn!("source {} has an invalid geometry", src.name());
                    return Err(StrataError::geometry(src.name(), KernelError::InvalidInput));
                }
            }
        }
        Ok(())
    }

    /// Decompose `sources` by overlap multiplicity. Every derived region
    /// carries `tag`.
    pub fn decompose(
        &self,
        tag: &str,
        sources: &[Region],
    ) -> Result<DecompositionResult, StrataError> {
        let n = sources.len();
        let sep = self.config.name_separator.as_str();
        debug!("{}: {n} sources, tag {tag:?}", Stage::Start);
        self.validate_sources(sources)?;

        let levels = enumerate_levels(
            &self.kernel,
            sources,
            &LevelOptions {
                tag,
                separator: sep,
                parallel: self.config.parallel,
            },
        )?;
        debug!("{}: {} non-empty levels", Stage::LevelsEnumerated, levels.len());

        let split = detect_maximal(levels, n, &self.config.maximal_name)?;
        debug!("{}: exists = {}", Stage::MaxDetected, split.exists());

        let reduction = reduce_rings(
            &self.kernel,
            split.levels,
            split.maximal.as_ref(),
            &RingOptions {
                tag,
                sliver: self.config.sliver_filter(),
            },
        )?;
        debug!(
            "{}: {} rings, {} levels kept",
            Stage::RingsReduced,
            reduction.rings.len(),
            reduction.levels.len()
        );

        let simple = derive_simple(
            &self.kernel,
            sources,
            &reduction.rings,
            split.maximal.as_ref(),
            tag,
            sep,
        )?;
        debug!("{}: {} simple zones", Stage::SimpleDerived, simple.simples.len());

        let result = DecompositionResult {
            source_count: n,
            levels: reduction.levels,
            rings: reduction.rings,
            maximal: split.maximal,
            simples: simple.simples,
            simple_total: simple.simple_total,
            multiple_total: simple.multiple_total,
            coverage_total: simple.coverage_total,
        };
        result.debug_assert_invariants();
        debug!("{}", Stage::Done);
        Ok(result)
    }
}

/// Decompose with the default kernel and configuration.
pub fn decompose(tag: &str, sources: &[Region]) -> Result<DecompositionResult, StrataError> {
    Decomposer::default().decompose(tag, sources)
}
