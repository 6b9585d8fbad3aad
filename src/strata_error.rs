//! StrataError: Unified error type for coverage-strata public APIs
//!
//! Every fallible operation of the decomposition pipeline returns this type.
//! Empty intersections and fully disjoint inputs are normal outcomes and are
//! never reported through it.

use thiserror::Error;

use crate::geometry::KernelError;

/// Unified error type for decomposition operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StrataError {
    /// The decomposition is undefined below two sources.
    #[error("at least 2 source regions are required, found {found}")]
    InsufficientSources { found: usize },
    /// Two sources were supplied under the same name.
    #[error("duplicate source name `{0}`")]
    DuplicateSource(String),
    /// A combination referenced a name with no matching source.
    #[error("unknown source `{0}`")]
    UnknownSource(String),
    /// Combination size outside `1..=n`.
    #[error("combination size {k} is out of range for {n} names")]
    InvalidCombinationSize { k: usize, n: usize },
    /// A source or a boolean operation result is not a valid region.
    #[error("invalid geometry in `{context}`: {source}")]
    InvalidGeometry {
        context: String,
        #[source]
        source: KernelError,
    },
    /// A derived structure failed an internal consistency check.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl StrataError {
    /// Wrap a kernel failure with the identity of the region being built.
    pub fn geometry(context: impl Into<String>, source: KernelError) -> Self {
        StrataError::InvalidGeometry {
            context: context.into(),
            source,
        }
    }
}
