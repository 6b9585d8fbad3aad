use crate::geometry::{OverlayConfig, SliverFilter, sliver::DEFAULT_MIN_VERTICES};

/// Tunables for a decomposition run.
///
/// Numerical settings are explicit here rather than ambient, so tests can
/// vary them.
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionConfig {
    /// Results of a subtraction with fewer coordinates than this are treated
    /// as empty. `0` disables sliver suppression.
    pub sliver_min_vertices: usize,
    /// Overlay algorithm settings for the default kernel.
    pub overlay: OverlayConfig,
    /// Joins source names into combination names and member names into
    /// group names.
    pub name_separator: String,
    /// Name given to the region covered by every source.
    pub maximal_name: String,
    /// Reject invalid source geometries before enumeration.
    pub validate_inputs: bool,
    /// Intersect combinations of a level in parallel (`rayon` feature only).
    pub parallel: bool,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            sliver_min_vertices: DEFAULT_MIN_VERTICES,
            overlay: OverlayConfig::default(),
            name_separator: "+".to_string(),
            maximal_name: "maximal".to_string(),
            validate_inputs: true,
            parallel: true,
        }
    }
}

impl DecompositionConfig {
    pub fn sliver_filter(&self) -> SliverFilter {
        SliverFilter::new(self.sliver_min_vertices)
    }
}
