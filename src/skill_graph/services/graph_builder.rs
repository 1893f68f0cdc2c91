use crate::skill_graph::domain::{DependencyGraph, SkillName, SkillRow};
use std::collections::{HashMap, HashSet};

/// GraphBuilder service for turning table rows into a DependencyGraph
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the adjacency map skill -> direct dependencies
    ///
    /// Every row's skill becomes a key, even without dependencies. Rows that
    /// repeat a skill are merged into the same dependency set.
    pub fn build(rows: &[SkillRow]) -> DependencyGraph {
        let mut edges: HashMap<SkillName, HashSet<SkillName>> = HashMap::new();

        for row in rows {
            edges
                .entry(row.skill().clone())
                .or_default()
                .extend(row.direct_dependencies().cloned());
        }

        DependencyGraph::new(edges)
    }
}
