//! Detection of the region covered by every source.

use log::debug;

use crate::region::{CombinationGroup, Region};
use crate::strata_error::StrataError;

/// Enumerated levels with the full-coverage level split off.
#[derive(Clone, Debug)]
pub struct MaximalSplit {
    /// The level-`n` intersection, renamed to the maximal-coverage label.
    pub maximal: Option<Region>,
    /// Remaining levels, highest first.
    pub levels: Vec<CombinationGroup>,
}

impl MaximalSplit {
    pub fn exists(&self) -> bool {
        self.maximal.is_some()
    }
}

/// Split the level-`n` group off `levels` (ordered highest first).
///
/// Only one size-`n` combination exists, so a present level `n` holds exactly
/// one region.
pub fn detect_maximal(
    mut levels: Vec<CombinationGroup>,
    n: usize,
    label: &str,
) -> Result<MaximalSplit, StrataError> {
    let top_is_full = levels
        .first()
        .is_some_and(|g| g.multiplicity() == Some(n));
    if !top_is_full {
        debug!("no area is covered by all {n} sources");
        return Ok(MaximalSplit {
            maximal: None,
            levels,
        });
    }

    let mut members = levels.remove(0).into_members();
    if members.len() != 1 {
        return Err(StrataError::InvariantViolation(format!(
            "level {n} holds {} regions, expected 1",
            members.len()
        )));
    }
    let full = members.remove(0);
    debug!("maximal coverage found for {}", full.name());
    Ok(MaximalSplit {
        maximal: Some(full.renamed(label)),
        levels,
    })
}
