use crate::skill_graph::domain::{DependencyGraph, SkillName};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    OnPath,
    Done,
}

/// CycleDetector service for finding dependency cycles
///
/// Iterative depth-first search, so deep dependency chains cannot overflow
/// the stack. Skills and their dependencies are visited in sorted order,
/// which keeps the reported cycles stable between runs.
pub struct CycleDetector;

impl CycleDetector {
    /// Returns every cycle closed by a back edge during the search
    ///
    /// Each cycle lists the skills in dependency order with the first skill
    /// repeated at the end, e.g. `[A, B, A]`. An acyclic graph yields an empty list.
    pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<SkillName>> {
        let mut state: HashMap<&SkillName, VisitState> = HashMap::new();
        let mut cycles = Vec::new();

        let mut roots: Vec<&SkillName> = graph.skills().collect();
        roots.sort();

        for root in roots {
            if state.contains_key(root) {
                continue;
            }

            state.insert(root, VisitState::OnPath);
            let mut path: Vec<&SkillName> = vec![root];
            let mut stack = vec![Self::sorted_dependencies(graph, root)];

            while !stack.is_empty() {
                let next = stack.last_mut().and_then(Iterator::next);

                match next {
                    Some(child) => match state.get(child) {
                        None => {
                            state.insert(child, VisitState::OnPath);
                            path.push(child);
                            stack.push(Self::sorted_dependencies(graph, child));
                        }
                        Some(VisitState::OnPath) => {
                            if let Some(start) = path.iter().position(|node| *node == child) {
                                let mut cycle: Vec<SkillName> =
                                    path[start..].iter().map(|node| (*node).clone()).collect();
                                cycle.push(child.clone());
                                cycles.push(cycle);
                            }
                        }
                        Some(VisitState::Done) => {}
                    },
                    None => {
                        stack.pop();
                        if let Some(finished) = path.pop() {
                            state.insert(finished, VisitState::Done);
                        }
                    }
                }
            }
        }

        cycles
    }

    fn sorted_dependencies<'a>(
        graph: &'a DependencyGraph,
        skill: &SkillName,
    ) -> std::vec::IntoIter<&'a SkillName> {
        let mut deps: Vec<&'a SkillName> = graph.direct_dependencies(skill.as_str()).collect();
        deps.sort();
        deps.into_iter()
    }
}

/// Formats a cycle as `A -> B -> A`
pub fn describe_cycle(cycle: &[SkillName]) -> String {
    cycle
        .iter()
        .map(SkillName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
