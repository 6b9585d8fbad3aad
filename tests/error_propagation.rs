mod util;
use coverage_strata::geometry::KernelError;
use geo::polygon;
use coverage_strata::prelude::*;
use util::*;

/// Delegates to `GeoKernel` but fails one chosen operation.
struct FailingKernel {
    inner: GeoKernel,
    fail_intersect: bool,
    fail_difference: bool,
}

impl FailingKernel {
    fn new(fail_intersect: bool, fail_difference: bool) -> Self {
        Self {
            inner: GeoKernel::default(),
            fail_intersect,
            fail_difference,
        }
    }
}

impl GeometryKernel for FailingKernel {
    fn union_all(&self, regions: &[&Geometry]) -> Result<Geometry, KernelError> {
        self.inner.union_all(regions)
    }
    fn intersect(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError> {
        if self.fail_intersect {
            return Err(KernelError::InvalidOutput { op: "intersection" });
        }
        self.inner.intersect(a, b)
    }
    fn difference(&self, a: &Geometry, b: &Geometry) -> Result<Geometry, KernelError> {
        if self.fail_difference {
            return Err(KernelError::InvalidOutput { op: "difference" });
        }
        self.inner.difference(a, b)
    }
    fn is_empty(&self, g: &Geometry) -> bool {
        self.inner.is_empty(g)
    }
    fn vertex_count(&self, g: &Geometry) -> usize {
        self.inner.vertex_count(g)
    }
    fn validate(&self, g: &Geometry) -> bool {
        self.inner.validate(g)
    }
    fn contains_point(&self, g: &Geometry, x: f64, y: f64) -> bool {
        self.inner.contains_point(g, x, y)
    }
}

fn sources() -> Vec<Region> {
    vec![square("A", 0.0, 0.0, 2.0), square("B", 1.0, 0.0, 2.0)]
}

#[test]
fn intersection_failure_names_the_combination() {
    let d = Decomposer::with_kernel(
        FailingKernel::new(true, false),
        DecompositionConfig::default(),
    );
    let err = d.decompose(TAG, &sources()).unwrap_err();
    assert_eq!(
        err,
        StrataError::geometry("A+B", KernelError::InvalidOutput { op: "intersection" })
    );
    assert!(err.to_string().contains("A+B"));
}

#[test]
fn difference_failure_aborts_the_run() {
    let d = Decomposer::with_kernel(
        FailingKernel::new(false, true),
        DecompositionConfig::default(),
    );
    let err = d.decompose(TAG, &sources()).unwrap_err();
    assert!(matches!(
        err,
        StrataError::InvalidGeometry {
            source: KernelError::InvalidOutput { op: "difference" },
            ..
        }
    ));
}

#[test]
fn validation_can_be_skipped() {
    let bow_tie = Region::original(
        "Z",
        TAG,
        geo::polygon![(x: 5.0, y: 0.0), (x: 6.0, y: 1.0), (x: 6.0, y: 0.0), (x: 5.0, y: 1.0)],
    );
    let strict = Decomposer::default();
    assert!(strict.validate_sources(&[square("A", 0.0, 0.0, 1.0), bow_tie.clone()]).is_err());

    let lax = Decomposer::new(DecompositionConfig {
        validate_inputs: false,
        overlay: OverlayConfig {
            check_outputs: false,
            ..Default::default()
        },
        ..Default::default()
    });
    assert!(lax.validate_sources(&[square("A", 0.0, 0.0, 1.0), bow_tie]).is_ok());
}
