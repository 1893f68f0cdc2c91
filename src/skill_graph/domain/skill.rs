use std::borrow::Borrow;

/// Number of dependency columns a skill row carries
pub const DEPENDENCY_SLOTS: usize = 4;

/// NewType wrapper for a skill identifier
///
/// Skill names are opaque: no character or length validation is applied,
/// they only need to compare equal to be treated as the same graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillName(String);

impl SkillName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for SkillName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// SkillRow value object representing one line of the skill table
///
/// The dependency slots keep their original positions; an empty slot is
/// `None`, never an empty-string placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    skill: SkillName,
    category: String,
    dependencies: [Option<SkillName>; DEPENDENCY_SLOTS],
}

impl SkillRow {
    pub fn new(
        skill: SkillName,
        category: impl Into<String>,
        dependencies: [Option<SkillName>; DEPENDENCY_SLOTS],
    ) -> Self {
        Self {
            skill,
            category: category.into(),
            dependencies,
        }
    }

    /// Test helper packing non-empty values into the leading slots
    #[cfg(test)]
    pub(crate) fn from_dependency_list<I, S>(
        skill: SkillName,
        category: impl Into<String>,
        dependencies: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: [Option<SkillName>; DEPENDENCY_SLOTS] = Default::default();
        let present = dependencies
            .into_iter()
            .filter(|d| !d.as_ref().is_empty())
            .map(|d| SkillName::new(d.as_ref()));
        for (slot, dep) in slots.iter_mut().zip(present) {
            *slot = Some(dep);
        }

        Self::new(skill, category, slots)
    }

    pub fn skill(&self) -> &SkillName {
        &self.skill
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Present dependencies in slot order
    pub fn direct_dependencies(&self) -> impl Iterator<Item = &SkillName> {
        self.dependencies.iter().flatten()
    }

    /// Dependency slots rendered as cells, empty string for unused slots
    pub fn dependency_cells(&self) -> [&str; DEPENDENCY_SLOTS] {
        let mut cells = [""; DEPENDENCY_SLOTS];
        for (cell, slot) in cells.iter_mut().zip(self.dependencies.iter()) {
            if let Some(dep) = slot {
                *cell = dep.as_str();
            }
        }
        cells
    }
}
