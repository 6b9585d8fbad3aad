//! Reduction of per-level intersections to mutually disjoint rings.
//!
//! Levels are processed strictly from the highest multiplicity down. A
//! running `covered` area holds the union of every level already processed
//! (or the maximal coverage when it exists); each lower level has it
//! subtracted, member by member and as a whole, before its own raw union is
//! added to it. The result for level `m` is the area covered by exactly `m`
//! sources.
//!
//! Both branches (with and without maximal coverage) prune members the same
//! way: a member that is empty or a sliver after subtraction is dropped, a
//! level left without members is dropped, and an empty ring is never
//! recorded.

use log::{debug, trace};

use crate::geometry::{Geometry, GeometryKernel, SliverFilter};
use crate::region::{CombinationGroup, Region, RegionKind};
use crate::strata_error::StrataError;

#[derive(Clone, Debug)]
pub struct RingOptions<'a> {
    pub tag: &'a str,
    pub sliver: SliverFilter,
}

/// Surviving levels and their ring totals.
#[derive(Clone, Debug)]
pub struct RingReduction {
    /// Levels with at least one non-empty member, highest first. Members
    /// hold the area covered by exactly their combination of sources.
    pub levels: Vec<CombinationGroup>,
    /// One `MultiTotal` region per non-empty ring, highest first.
    pub rings: CombinationGroup,
}

/// Reduce `levels` (highest first, level `n` already removed when `maximal`
/// is present) to disjoint rings.
pub fn reduce_rings<K: GeometryKernel>(
    kernel: &K,
    levels: Vec<CombinationGroup>,
    maximal: Option<&Region>,
    opts: &RingOptions<'_>,
) -> Result<RingReduction, StrataError> {
    let mut pending = levels.into_iter();
    let mut kept = Vec::new();
    let mut rings = Vec::new();

    let mut covered = match maximal {
        Some(full) => full.geometry().clone(),
        None => {
            // The highest surviving level seeds the running area unreduced.
            let Some(top) = pending.next() else {
                debug!("no overlapping levels to reduce");
                return Ok(RingReduction {
                    levels: kept,
                    rings: ring_group(opts.tag, rings),
                });
            };
            let m = level_of(&top)?;
            let seed = union_members(kernel, &top, m)?;
            debug!("level {m} seeds the reduction with {} regions", top.len());
            rings.push(ring_region(opts.tag, m, seed.clone()));
            kept.push(top);
            seed
        }
    };

    for level in pending {
        let m = level_of(&level)?;
        let step = reduce_level(kernel, &level, &covered, m, opts)?;
        covered = kernel
            .union_pair(&covered, &step.raw_union)
            .map_err(|e| StrataError::geometry(format!("covered area at level {m}"), e))?;

        match step.group {
            Some(g) => kept.push(g),
            None => debug!("level {m} is entirely covered by higher levels"),
        }
        if kernel.is_empty(&step.ring) {
            trace!("ring {m} is empty");
        } else {
            rings.push(ring_region(opts.tag, m, step.ring));
        }
    }

    debug!("{} rings over {} surviving levels", rings.len(), kept.len());
    Ok(RingReduction {
        levels: kept,
        rings: ring_group(opts.tag, rings),
    })
}

struct LevelStep {
    /// Reduced members, or `None` if every member vanished.
    group: Option<CombinationGroup>,
    ring: Geometry,
    /// Union of the members before subtraction.
    raw_union: Geometry,
}

fn reduce_level<K: GeometryKernel>(
    kernel: &K,
    level: &CombinationGroup,
    covered: &Geometry,
    m: usize,
    opts: &RingOptions<'_>,
) -> Result<LevelStep, StrataError> {
    let raw_union = union_members(kernel, level, m)?;

    let mut reduced = Vec::with_capacity(level.len());
    for member in level {
        let rest = kernel
            .difference(member.geometry(), covered)
            .map_err(|e| StrataError::geometry(member.name(), e))?;
        let rest = opts.sliver.apply(kernel, rest);
        if kernel.is_empty(&rest) {
            trace!("{} is covered by higher levels", member.name());
            continue;
        }
        reduced.push(member.with_geometry(rest));
    }

    let parts: Vec<&Geometry> = reduced.iter().map(Region::geometry).collect();
    let reduced_union = kernel
        .union_all(&parts)
        .map_err(|e| StrataError::geometry(format!("ring {m}"), e))?;
    let ring = kernel
        .difference(&reduced_union, covered)
        .map_err(|e| StrataError::geometry(format!("ring {m}"), e))?;
    let ring = opts.sliver.apply(kernel, ring);

    let group = (!reduced.is_empty()).then(|| level.rebuild(reduced));
    Ok(LevelStep {
        group,
        ring,
        raw_union,
    })
}

fn union_members<K: GeometryKernel>(
    kernel: &K,
    level: &CombinationGroup,
    m: usize,
) -> Result<Geometry, StrataError> {
    let parts: Vec<&Geometry> = level.iter().map(Region::geometry).collect();
    kernel
        .union_all(&parts)
        .map_err(|e| StrataError::geometry(format!("level {m} union"), e))
}

fn level_of(group: &CombinationGroup) -> Result<usize, StrataError> {
    group
        .multiplicity()
        .ok_or_else(|| StrataError::InvariantViolation("empty level group".into()))
}

fn ring_region(tag: &str, m: usize, geometry: Geometry) -> Region {
    Region::derived(RegionKind::MultiTotal, "", tag, m, geometry)
}

/// Ring names are empty, so the group name is too.
fn ring_group(tag: &str, rings: Vec<Region>) -> CombinationGroup {
    CombinationGroup::new(tag, "", rings)
}
