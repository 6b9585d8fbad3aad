//! Single-coverage zones and whole-set totals.

use log::debug;

use crate::geometry::{Geometry, GeometryKernel};
use crate::region::{CombinationGroup, Region, RegionKind};
use crate::strata_error::StrataError;

#[derive(Clone, Debug)]
pub struct SimpleDerivation {
    /// One `Simple` region per source, in source order, possibly empty.
    pub simples: CombinationGroup,
    /// Area covered by exactly one source.
    pub simple_total: Region,
    /// Area covered by two or more sources.
    pub multiple_total: Region,
    /// Area covered by at least one source.
    pub coverage_total: Region,
}

/// Derive simple zones and totals from the rings and the maximal coverage.
pub fn derive_simple<K: GeometryKernel>(
    kernel: &K,
    sources: &[Region],
    rings: &CombinationGroup,
    maximal: Option<&Region>,
    tag: &str,
    separator: &str,
) -> Result<SimpleDerivation, StrataError> {
    let overlap_parts: Vec<&Geometry> = maximal
        .into_iter()
        .chain(rings.iter())
        .map(Region::geometry)
        .collect();
    let multiple = kernel
        .union_all(&overlap_parts)
        .map_err(|e| StrataError::geometry("multiple total", e))?;

    let source_parts: Vec<&Geometry> = sources.iter().map(Region::geometry).collect();
    let coverage = kernel
        .union_all(&source_parts)
        .map_err(|e| StrataError::geometry("coverage total", e))?;
    let single = kernel
        .difference(&coverage, &multiple)
        .map_err(|e| StrataError::geometry("simple total", e))?;

    let simples = sources
        .iter()
        .map(|src| {
            kernel
                .difference(src.geometry(), &multiple)
                .map(|g| Region::derived(RegionKind::Simple, src.name(), tag, 0, g))
                .map_err(|e| StrataError::geometry(src.name(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "{} of {} sources keep a simple zone",
        simples.iter().filter(|r| !kernel.is_empty(r.geometry())).count(),
        simples.len()
    );

    Ok(SimpleDerivation {
        simples: CombinationGroup::new(tag, separator, simples),
        simple_total: Region::derived(RegionKind::SimpleTotal, "", tag, 0, single),
        multiple_total: Region::derived(RegionKind::MultiTotal, "", tag, 0, multiple),
        coverage_total: Region::derived(RegionKind::Total, "", tag, 0, coverage),
    })
}
