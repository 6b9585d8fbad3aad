//! Sub-threshold sliver suppression.
//!
//! Floating-point overlay of nearly coincident boundaries leaves thin
//! fragments behind. A fragment is recognised purely by its coordinate count:
//! anything with fewer than `min_vertices` coordinates is treated as empty.

use log::trace;

use super::{Geometry, GeometryKernel, empty};

/// Default minimum coordinate count for a region to survive a subtraction.
pub const DEFAULT_MIN_VERTICES: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliverFilter {
    /// Geometries with fewer coordinates than this collapse to empty.
    /// `0` disables the filter.
    pub min_vertices: usize,
}

impl Default for SliverFilter {
    fn default() -> Self {
        Self {
            min_vertices: DEFAULT_MIN_VERTICES,
        }
    }
}

impl SliverFilter {
    pub fn new(min_vertices: usize) -> Self {
        Self { min_vertices }
    }

    /// A filter that keeps everything.
    pub fn disabled() -> Self {
        Self { min_vertices: 0 }
    }

    pub fn is_sliver<K: GeometryKernel + ?Sized>(&self, kernel: &K, g: &Geometry) -> bool {
        kernel.vertex_count(g) < self.min_vertices
    }

    /// Return `g`, or the empty region if it is a sliver.
    pub fn apply<K: GeometryKernel + ?Sized>(&self, kernel: &K, g: Geometry) -> Geometry {
        if !g.0.is_empty() && self.is_sliver(kernel, &g) {
            trace!(
                "dropping sliver with {} coordinates (< {})",
                kernel.vertex_count(&g),
                self.min_vertices
            );
            return empty();
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeoKernel;
    use geo::{LineString, MultiPolygon, Polygon};

    /// Convex polygon on the unit circle with `n` distinct corners
    /// (`n + 1` coordinates once closed).
    fn ngon(n: usize) -> Geometry {
        let ring: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                (t.cos(), t.sin())
            })
            .collect();
        MultiPolygon::new(vec![Polygon::new(LineString::from(ring), vec![])])
    }

    #[test]
    fn ten_coordinates_is_a_sliver() {
        let k = GeoKernel::default();
        let g = ngon(9);
        assert_eq!(k.vertex_count(&g), 10);
        let out = SliverFilter::default().apply(&k, g);
        assert!(out.0.is_empty());
    }

    #[test]
    fn eleven_coordinates_is_kept() {
        let k = GeoKernel::default();
        let g = ngon(10);
        assert_eq!(k.vertex_count(&g), 11);
        let out = SliverFilter::default().apply(&k, g.clone());
        assert_eq!(out, g);
    }

    #[test]
    fn disabled_filter_keeps_triangles() {
        let k = GeoKernel::default();
        let g = ngon(3);
        assert_eq!(SliverFilter::disabled().apply(&k, g.clone()), g);
    }
}
