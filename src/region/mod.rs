//! Named planar regions and their provenance metadata.
//!
//! A [`Region`] is an immutable value: a geometry plus the name, tag, kind
//! and multiplicity a consumer needs to label and style it. Derived regions
//! are produced by the engine and never edited afterwards; replacing the
//! geometry yields a new `Region` via [`Region::with_geometry`].

pub mod group;
pub mod style;

pub use group::CombinationGroup;
pub use style::{LayerStyle, Rgb};

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Classification of a region in the decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// A source region as supplied by the caller.
    Original,
    /// Area of one source covered by no other source.
    Simple,
    /// Area covered by exactly one source, over all sources.
    SimpleTotal,
    /// Area covered by an exact subset of sources.
    Multi,
    /// Area covered at one multiplicity (a ring), or at any multiplicity ≥ 2.
    MultiTotal,
    /// Area covered by at least one source.
    Total,
}

impl RegionKind {
    /// Whether `multiplicity` carries meaning for this kind.
    pub fn has_multiplicity(self) -> bool {
        matches!(self, RegionKind::Multi | RegionKind::MultiTotal)
    }
}

/// A named planar area with provenance metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    name: String,
    tag: String,
    kind: RegionKind,
    multiplicity: usize,
    geometry: Geometry,
    has_gaps: bool,
}

impl Region {
    /// A source region. Polygons are promoted to multi-polygons.
    pub fn original(
        name: impl Into<String>,
        tag: impl Into<String>,
        geometry: impl Into<Geometry>,
    ) -> Self {
        Self::derived(RegionKind::Original, name, tag, 0, geometry)
    }

    /// A region produced by the engine.
    ///
    /// `multiplicity` is forced to 0 for kinds where it has no meaning.
    pub fn derived(
        kind: RegionKind,
        name: impl Into<String>,
        tag: impl Into<String>,
        multiplicity: usize,
        geometry: impl Into<Geometry>,
    ) -> Self {
        let geometry = geometry.into();
        Self {
            name: name.into(),
            tag: tag.into(),
            kind,
            multiplicity: if kind.has_multiplicity() { multiplicity } else { 0 },
            has_gaps: geometry.0.iter().any(|p| !p.interiors().is_empty()),
            geometry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Set when the geometry has at least one hole. Informational only.
    pub fn has_gaps(&self) -> bool {
        self.has_gaps
    }

    /// Same metadata, new geometry.
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self::derived(
            self.kind,
            self.name.clone(),
            self.tag.clone(),
            self.multiplicity,
            geometry,
        )
    }

    /// Same geometry and metadata, new name.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Human-readable label derived from kind, name and multiplicity.
    pub fn display_label(&self) -> String {
        match self.kind {
            RegionKind::Original | RegionKind::Simple => self.name.clone(),
            RegionKind::Multi => format!("{} ({})", self.name, self.multiplicity),
            RegionKind::MultiTotal if self.multiplicity == 0 => "multiple total".to_string(),
            RegionKind::MultiTotal => format!("ring {}", self.multiplicity),
            RegionKind::SimpleTotal => "simple total".to_string(),
            RegionKind::Total => "coverage total".to_string(),
        }
    }

    /// Consume the region, keeping only its geometry.
    pub fn into_geometry(self) -> Geometry {
        self.geometry
    }
}
