#![allow(dead_code)]
use coverage_strata::geometry::{GeoKernel, Geometry, GeometryKernel};
use coverage_strata::region::Region;
use geo::{Area, LineString, MultiPolygon, Polygon, Rect};

pub const TAG: &str = "survey";

/// Axis-aligned rectangle source.
pub fn rect(name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Region {
    Region::original(name, TAG, Rect::new((x0, y0), (x1, y1)).to_polygon())
}

/// Square source with lower-left corner `(x0, y0)`.
pub fn square(name: &str, x0: f64, y0: f64, side: f64) -> Region {
    rect(name, x0, y0, x0 + side, y0 + side)
}

/// Regular `segments`-gon approximating a circular footprint.
pub fn circle(name: &str, cx: f64, cy: f64, r: f64, segments: usize) -> Region {
    let ring: Vec<(f64, f64)> = (0..segments)
        .map(|i| {
            let t = i as f64 / segments as f64 * std::f64::consts::TAU;
            (cx + r * t.cos(), cy + r * t.sin())
        })
        .collect();
    Region::original(
        name,
        TAG,
        MultiPolygon::new(vec![Polygon::new(LineString::from(ring), vec![])]),
    )
}

pub fn area(g: &Geometry) -> f64 {
    g.unsigned_area()
}

pub fn union_area<'a>(regions: impl IntoIterator<Item = &'a Region>) -> f64 {
    let parts: Vec<&Geometry> = regions.into_iter().map(Region::geometry).collect();
    area(&GeoKernel::default().union_all(&parts).unwrap())
}

pub fn overlap_area(a: &Geometry, b: &Geometry) -> f64 {
    area(&GeoKernel::default().intersect(a, b).unwrap())
}

pub fn assert_close(got: f64, want: f64, tol: f64) {
    assert!(
        (got - want).abs() <= tol * want.abs().max(1.0),
        "got {got}, want {want} (tol {tol})"
    );
}
