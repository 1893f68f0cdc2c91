use crate::skill_graph::domain::{SkillName, SkillRow};
use crate::skill_graph::services::RemovedDependency;

/// PruneResponse - Internal response DTO from the prune use case
#[derive(Debug, Clone)]
pub struct PruneResponse {
    /// One cleaned row per input row, in input order
    pub cleaned_rows: Vec<SkillRow>,
    /// Every dependency edge that was dropped
    pub removed: Vec<RemovedDependency>,
    /// Cycles found in the input graph (empty when the policy skips detection)
    pub cycles: Vec<Vec<SkillName>>,
}

impl PruneResponse {
    pub fn new(
        cleaned_rows: Vec<SkillRow>,
        removed: Vec<RemovedDependency>,
        cycles: Vec<Vec<SkillName>>,
    ) -> Self {
        Self {
            cleaned_rows,
            removed,
            cycles,
        }
    }

    pub fn has_redundant_dependencies(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Number of distinct skills that lost at least one dependency
    pub fn affected_skill_count(&self) -> usize {
        let mut skills: Vec<&SkillName> = self.removed.iter().map(|r| &r.skill).collect();
        skills.sort();
        skills.dedup();
        skills.len()
    }
}
