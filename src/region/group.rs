//! Fixed-membership collections of regions.

use itertools::Itertools;

use super::Region;
use crate::debug_invariants::{DebugInvariants, ensure};
use crate::strata_error::StrataError;

/// A named collection of regions sharing a purpose and a tag.
///
/// Membership is fixed at construction and the composite name is computed
/// from it once. Changing membership means building a new group.
#[derive(Clone, Debug, PartialEq)]
pub struct CombinationGroup {
    name: String,
    tag: String,
    separator: String,
    members: Vec<Region>,
}

impl CombinationGroup {
    pub fn new(tag: impl Into<String>, separator: impl Into<String>, members: Vec<Region>) -> Self {
        let separator = separator.into();
        Self {
            name: composite_name(&members, &separator),
            tag: tag.into(),
            separator,
            members,
        }
    }

    /// A group with no members.
    pub fn empty(tag: impl Into<String>, separator: impl Into<String>) -> Self {
        Self::new(tag, separator, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn members(&self) -> &[Region] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.members.iter()
    }

    /// Member named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.members.iter().find(|r| r.name() == name)
    }

    /// Multiplicity of the first member; the level of a per-level group.
    pub fn multiplicity(&self) -> Option<usize> {
        self.members.first().map(Region::multiplicity)
    }

    /// New group with the same tag and separator and the given members.
    pub fn rebuild(&self, members: Vec<Region>) -> Self {
        Self::new(self.tag.clone(), self.separator.clone(), members)
    }

    pub fn into_members(self) -> Vec<Region> {
        self.members
    }
}

impl<'a> IntoIterator for &'a CombinationGroup {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

fn composite_name(members: &[Region], separator: &str) -> String {
    members.iter().map(Region::name).join(separator)
}

impl DebugInvariants for CombinationGroup {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "CombinationGroup");
    }

    fn validate_invariants(&self) -> Result<(), StrataError> {
        let expected = composite_name(&self.members, &self.separator);
        ensure(self.name == expected, || {
            format!("group name `{}` does not match members `{}`", self.name, expected)
        })?;
        for r in &self.members {
            ensure(r.tag() == self.tag, || {
                format!("member `{}` has tag `{}`, group tag is `{}`", r.name(), r.tag(), self.tag)
            })?;
        }
        Ok(())
    }
}
