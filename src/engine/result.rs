//! The decomposition product and its flattened export form.

use geo::{Area, CoordsIter};
use serde::Serialize;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::geometry::GeometryKernel;
use crate::region::{CombinationGroup, LayerStyle, Region, RegionKind};
use crate::strata_error::StrataError;

/// Full stratification of a set of sources by overlap multiplicity.
///
/// Simple zones, rings and the maximal region are mutually disjoint and
/// together cover the union of the sources (up to dropped slivers).
#[derive(Clone, Debug)]
pub struct DecompositionResult {
    /// Number of sources decomposed.
    pub source_count: usize,
    /// Surviving per-level groups, highest multiplicity first. Each member
    /// is the area covered by exactly its combination of sources, except
    /// for the seed level when no maximal coverage exists.
    pub levels: Vec<CombinationGroup>,
    /// One `MultiTotal` region per non-empty multiplicity, highest first.
    pub rings: CombinationGroup,
    /// Area covered by every source, if any.
    pub maximal: Option<Region>,
    /// One `Simple` region per source, in source order. May be empty.
    pub simples: CombinationGroup,
    /// Area covered by exactly one source.
    pub simple_total: Region,
    /// Area covered by two or more sources.
    pub multiple_total: Region,
    /// Area covered by at least one source.
    pub coverage_total: Region,
}

/// One exportable layer: everything a map writer needs besides geometry.
#[derive(Clone, Debug, Serialize)]
pub struct LayerDescriptor {
    pub label: String,
    pub tag: String,
    pub kind: RegionKind,
    pub multiplicity: usize,
    pub style: LayerStyle,
    pub area: f64,
    pub vertex_count: usize,
    pub has_gaps: bool,
}

impl LayerDescriptor {
    pub fn from_region(region: &Region) -> Self {
        Self {
            label: region.display_label(),
            tag: region.tag().to_string(),
            kind: region.kind(),
            multiplicity: region.multiplicity(),
            style: LayerStyle::for_region(region),
            area: region.geometry().unsigned_area(),
            vertex_count: region.geometry().coords_count(),
            has_gaps: region.has_gaps(),
        }
    }
}

impl DecompositionResult {
    /// Ring for multiplicity `m`, if non-empty.
    pub fn ring(&self, m: usize) -> Option<&Region> {
        self.rings.iter().find(|r| r.multiplicity() == m)
    }

    /// Simple zone of the source named `name`.
    pub fn simple(&self, name: &str) -> Option<&Region> {
        self.simples.get(name)
    }

    /// The mutually exclusive layers: simple zones, rings, maximal region.
    pub fn exclusive_layers(&self) -> impl Iterator<Item = &Region> + '_ {
        self.simples
            .iter()
            .chain(self.rings.iter())
            .chain(self.maximal.iter())
    }

    /// Exclusive layers whose interior contains `(x, y)`.
    ///
    /// For a point covered by some source and off every boundary this is
    /// exactly one region.
    pub fn claims_at<'a, K: GeometryKernel + ?Sized>(
        &'a self,
        kernel: &K,
        x: f64,
        y: f64,
    ) -> Vec<&'a Region> {
        self.exclusive_layers()
            .filter(|r| kernel.contains_point(r.geometry(), x, y))
            .collect()
    }

    /// Every non-empty region in export order: coverage total, simple total,
    /// simple zones, multiple total, maximal, rings, level members.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        std::iter::once(&self.coverage_total)
            .chain(std::iter::once(&self.simple_total))
            .chain(self.simples.iter())
            .chain(std::iter::once(&self.multiple_total))
            .chain(self.maximal.iter())
            .chain(self.rings.iter())
            .chain(self.levels.iter().flat_map(CombinationGroup::iter))
            .filter(|r| !r.geometry().0.is_empty())
    }

    /// Flattened layer list for an export collaborator.
    pub fn layers(&self) -> Vec<LayerDescriptor> {
        self.regions().map(LayerDescriptor::from_region).collect()
    }
}

impl DebugInvariants for DecompositionResult {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "DecompositionResult");
    }

    fn validate_invariants(&self) -> Result<(), StrataError> {
        let n = self.source_count;
        let mut last = usize::MAX;
        for ring in &self.rings {
            let m = ring.multiplicity();
            ensure(ring.kind() == RegionKind::MultiTotal, || {
                format!("ring of kind {:?}", ring.kind())
            })?;
            ensure((2..n).contains(&m), || {
                format!("ring multiplicity {m} out of range for {n} sources")
            })?;
            ensure(m < last, || format!("ring {m} out of order"))?;
            last = m;
        }
        let mut last = usize::MAX;
        for level in &self.levels {
            level.validate_invariants()?;
            let m = level.multiplicity().unwrap_or(0);
            ensure(!level.is_empty(), || "empty level group kept".to_string())?;
            ensure(level.iter().all(|r| r.multiplicity() == m), || {
                format!("level {m} mixes multiplicities")
            })?;
            ensure(m < last, || format!("level {m} out of order"))?;
            last = m;
        }
        if let Some(full) = &self.maximal {
            ensure(full.multiplicity() == n, || {
                format!("maximal region has multiplicity {}, expected {n}", full.multiplicity())
            })?;
        }
        self.simples.validate_invariants()?;
        ensure(self.simples.len() == n, || {
            format!("{} simple zones for {n} sources", self.simples.len())
        })?;
        ensure(
            self.simples.iter().all(|r| r.kind() == RegionKind::Simple),
            || "simple group holds a non-simple region".to_string(),
        )?;
        Ok(())
    }
}
