//! [`GeometryKernel`] implementation on top of the `geo` crate.

use geo::{Area, BooleanOps, Contains, CoordsIter, Point, Validation};

use super::{Geometry, GeometryKernel, KernelError, empty};

/// How many-way unions are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnionStrategy {
    /// Divide-and-conquer union of the whole set at once.
    #[default]
    Cascaded,
    /// Left fold of binary unions. Slow on large sets; kept for comparison.
    Pairwise,
}

/// Overlay settings for [`GeoKernel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    pub union_strategy: UnionStrategy,
    /// Fail on a boolean result with non-finite coordinates.
    ///
    /// Overlay output may legitimately contain rings that touch themselves
    /// at a vertex, so the strict validity check is reserved for inputs.
    pub check_outputs: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            union_strategy: UnionStrategy::Cascaded,
            check_outputs: true,
        }
    }
}

/// Geometry kernel backed by `geo`'s boolean operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoKernel {
    config: OverlayConfig,
}

impl GeoKernel {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    fn checked(&self, op: &'static str, g: Geometry) -> Result<Geometry, KernelError> {
        if self.config.check_outputs && !has_finite_coords(&g) {
            return Err(KernelError::InvalidOutput { op });
        }
        Ok(g)
    }
}

fn has_finite_coords(g: &Geometry) -> bool {
    g.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite())
}

impl GeometryKernel for GeoKernel {
    fn union_all(&self, regions: &[&Geometry]) -> Result<Geometry, KernelError> {
        let out = match (regions, self.config.union_strategy) {
            ([], _) => return Ok(empty()),
            ([single], _) => return Ok((*single).clone()),
            (_, UnionStrategy::Cascaded) => geo::unary_union(regions.iter().copied()),
            (_, UnionStrategy::Pairwise) => regions.iter().fold(empty(), |acc, g| acc.union(*g)),
        };
        self.checked("union", out)
    }

    fn intersect(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError> {
        if a.0.is_empty() || b.0.is_empty() {
            return Ok(empty());
        }
        self.checked("intersection", a.intersection(b))
    }

    fn difference(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError> {
        if a.0.is_empty() {
            return Ok(empty());
        }
        if b.0.is_empty() {
            return Ok(a.clone());
        }
        self.checked("difference", a.difference(b))
    }

    fn is_empty(&self, g: &Geometry) -> bool {
        g.0.is_empty() || g.unsigned_area() == 0.0
    }

    fn vertex_count(&self, g: &Geometry) -> usize {
        g.coords_count()
    }

    fn validate(&self, g: &Geometry) -> bool {
        g.is_valid()
    }

    fn contains_point(&self, g: &Geometry, x: f64, y: f64) -> bool {
        g.contains(&Point::new(x, y))
    }
}
