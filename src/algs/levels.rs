//! Per-multiplicity enumeration of non-empty subset intersections.
//!
//! For every level `m` from `n` down to 2, each size-`m` combination of
//! sources is intersected and kept when the result is non-empty. Levels
//! without a single surviving combination are left out entirely.
//!
//! Cost is `O(2^n)` intersections in the worst case; the enumeration is exact
//! and meant for tens of sources, not thousands.

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use super::combinations::combinations;
use crate::geometry::{GeometryKernel, empty};
use crate::region::{CombinationGroup, Region, RegionKind};
use crate::strata_error::StrataError;

/// Naming and scheduling options for [`enumerate_levels`].
#[derive(Clone, Debug)]
pub struct LevelOptions<'a> {
    pub tag: &'a str,
    pub separator: &'a str,
    /// Intersect the combinations of one level on the rayon pool.
    /// Ignored without the `rayon` feature.
    pub parallel: bool,
}

/// Look up sources by name, rejecting duplicates.
pub fn index_sources(sources: &[Region]) -> Result<HashMap<&str, &Region>, StrataError> {
    let mut index = HashMap::with_capacity(sources.len());
    for r in sources {
        if index.insert(r.name(), r).is_some() {
            return Err(StrataError::DuplicateSource(r.name().to_string()));
        }
    }
    Ok(index)
}

/// Non-empty intersections for every level `n..=2`, highest level first.
pub fn enumerate_levels<K: GeometryKernel>(
    kernel: &K,
    sources: &[Region],
    opts: &LevelOptions<'_>,
) -> Result<Vec<CombinationGroup>, StrataError> {
    let index = index_sources(sources)?;
    let names: Vec<&str> = sources.iter().map(Region::name).collect();
    let n = names.len();
    let mut levels = Vec::new();
    if n < 2 {
        return Ok(levels);
    }

    for m in (2..=n).rev() {
        let combos: Vec<Vec<&&str>> = combinations(&names, m)?.collect();
        let found = intersect_all(kernel, &index, &combos, m, opts)?;
        let members: Vec<Region> = found.into_iter().flatten().collect();
        debug!(
            "level {m}: {} of {} combinations overlap",
            members.len(),
            combos.len()
        );
        if !members.is_empty() {
            levels.push(CombinationGroup::new(opts.tag, opts.separator, members));
        }
    }
    Ok(levels)
}

#[cfg(feature = "rayon")]
fn intersect_all<K: GeometryKernel>(
    kernel: &K,
    index: &HashMap<&str, &Region>,
    combos: &[Vec<&&str>],
    m: usize,
    opts: &LevelOptions<'_>,
) -> Result<Vec<Option<Region>>, StrataError> {
    if opts.parallel {
        // Indexed collect keeps combination order.
        combos
            .par_iter()
            .map(|c| intersect_combination(kernel, index, c, m, opts))
            .collect()
    } else {
        combos
            .iter()
            .map(|c| intersect_combination(kernel, index, c, m, opts))
            .collect()
    }
}

#[cfg(not(feature = "rayon"))]
fn intersect_all<K: GeometryKernel>(
    kernel: &K,
    index: &HashMap<&str, &Region>,
    combos: &[Vec<&&str>],
    m: usize,
    opts: &LevelOptions<'_>,
) -> Result<Vec<Option<Region>>, StrataError> {
    combos
        .iter()
        .map(|c| intersect_combination(kernel, index, c, m, opts))
        .collect()
}

/// Left-fold intersection of the named sources; `None` when empty.
fn intersect_combination<K: GeometryKernel>(
    kernel: &K,
    index: &HashMap<&str, &Region>,
    combo: &[&&str],
    m: usize,
    opts: &LevelOptions<'_>,
) -> Result<Option<Region>, StrataError> {
    let name = combo.iter().join(opts.separator);
    let mut regions = combo.iter().map(|&&n| {
        index
            .get(n)
            .copied()
            .ok_or_else(|| StrataError::UnknownSource(n.to_string()))
    });
    let mut acc = match regions.next() {
        Some(first) => first?.geometry().clone(),
        None => empty(),
    };
    for r in regions {
        let r = r?;
        acc = kernel
            .intersect(&acc, r.geometry())
            .map_err(|e| StrataError::geometry(name.as_str(), e))?;
        if kernel.is_empty(&acc) {
            break;
        }
    }
    if kernel.is_empty(&acc) {
        trace!("combination {name} does not overlap");
        return Ok(None);
    }
    Ok(Some(Region::derived(RegionKind::Multi, name, opts.tag, m, acc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeoKernel;
    use geo::{Area, Rect};

    fn square(name: &str, x0: f64, y0: f64, side: f64) -> Region {
        Region::original(name, "t", Rect::new((x0, y0), (x0 + side, y0 + side)).to_polygon())
    }

    fn opts() -> LevelOptions<'static> {
        LevelOptions {
            tag: "t",
            separator: "+",
            parallel: false,
        }
    }

    #[test]
    fn chain_of_squares_has_no_triple() {
        // A overlaps B, B overlaps C, A and C are apart.
        let sources = vec![
            square("A", 0.0, 0.0, 2.0),
            square("B", 1.0, 0.0, 2.0),
            square("C", 2.5, 0.0, 2.0),
        ];
        let levels = enumerate_levels(&GeoKernel::default(), &sources, &opts()).unwrap();
        assert_eq!(levels.len(), 1);
        let pairs = &levels[0];
        assert_eq!(pairs.multiplicity(), Some(2));
        let names: Vec<_> = pairs.iter().map(Region::name).collect();
        assert_eq!(names, vec!["A+B", "B+C"]);
        assert!((pairs.members()[0].geometry().unsigned_area() - 2.0).abs() < 1e-9);
        assert_eq!(pairs.name(), "A+B+B+C");
    }

    #[test]
    fn nested_squares_fill_every_level() {
        let sources = vec![
            square("A", 0.0, 0.0, 4.0),
            square("B", 1.0, 1.0, 2.0),
            square("C", 1.5, 1.5, 1.0),
        ];
        let levels = enumerate_levels(&GeoKernel::default(), &sources, &opts()).unwrap();
        let sizes: Vec<_> = levels.iter().map(|g| (g.multiplicity(), g.len())).collect();
        assert_eq!(sizes, vec![(Some(3), 1), (Some(2), 3)]);
        assert_eq!(levels[0].members()[0].name(), "A+B+C");
    }

    #[test]
    fn duplicate_names_rejected() {
        let sources = vec![square("A", 0.0, 0.0, 1.0), square("A", 0.5, 0.0, 1.0)];
        let err = enumerate_levels(&GeoKernel::default(), &sources, &opts()).unwrap_err();
        assert_eq!(err, StrataError::DuplicateSource("A".into()));
    }

    #[test]
    fn disjoint_sources_yield_no_levels() {
        let sources = vec![square("A", 0.0, 0.0, 1.0), square("B", 3.0, 0.0, 1.0)];
        let levels = enumerate_levels(&GeoKernel::default(), &sources, &opts()).unwrap();
        assert!(levels.is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_serial() {
        let sources: Vec<_> = (0..5)
            .map(|i| square(&format!("S{i}"), i as f64 * 0.5, 0.0, 2.0))
            .collect();
        let k = GeoKernel::default();
        let serial = enumerate_levels(&k, &sources, &opts()).unwrap();
        let parallel = enumerate_levels(
            &k,
            &sources,
            &LevelOptions {
                parallel: true,
                ..opts()
            },
        )
        .unwrap();
        assert_eq!(serial, parallel);
    }
}
