use super::SkillName;
use std::collections::{HashMap, HashSet, VecDeque};

/// DependencyGraph aggregate mapping each skill to its direct dependencies
///
/// Built once per run and never mutated afterwards. Skills that only ever
/// appear as a dependency value are not keys; lookups treat them as leaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    edges: HashMap<SkillName, HashSet<SkillName>>,
}

impl DependencyGraph {
    pub fn new(edges: HashMap<SkillName, HashSet<SkillName>>) -> Self {
        Self { edges }
    }

    /// Direct dependencies of a skill, empty for skills without a row
    pub fn direct_dependencies(&self, skill: &str) -> impl Iterator<Item = &SkillName> {
        self.edges.get(skill).into_iter().flatten()
    }

    #[cfg(test)]
    pub(crate) fn contains_skill(&self, skill: &str) -> bool {
        self.edges.contains_key(skill)
    }

    /// Skills that have a row of their own
    pub fn skills(&self) -> impl Iterator<Item = &SkillName> {
        self.edges.keys()
    }

    pub fn skill_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|deps| deps.len()).sum()
    }

    /// Every skill reachable through one or more edges from `skill`
    ///
    /// Breadth-first from the skill's own direct dependencies. A node is
    /// marked visited when dequeued, so `skill` itself is part of the result
    /// only when a cycle leads back to it.
    pub fn transitive_closure(&self, skill: &str) -> HashSet<SkillName> {
        let mut visited: HashSet<SkillName> = HashSet::new();
        let mut queue: VecDeque<&SkillName> = self.direct_dependencies(skill).collect();

        while let Some(current) = queue.pop_front() {
            if visited.insert(current.clone()) {
                queue.extend(self.direct_dependencies(current.as_str()));
            }
        }

        visited
    }
}
