use crate::skill_graph::domain::{DependencyGraph, SkillName, SkillRow, DEPENDENCY_SLOTS};
use std::collections::HashSet;

/// A direct dependency dropped because another dependency already implies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedDependency {
    pub skill: SkillName,
    pub dependency: SkillName,
    pub implied_by: SkillName,
}

/// Cleaned rows together with every edge that was removed
#[derive(Debug, Clone, Default)]
pub struct ReductionResult {
    pub rows: Vec<SkillRow>,
    pub removed: Vec<RemovedDependency>,
}

/// TransitiveReducer service removing redundant direct dependencies
///
/// Each row is reduced on its own against the original graph, so the output
/// does not depend on row order.
pub struct TransitiveReducer;

impl TransitiveReducer {
    /// Reduces every row of the table
    ///
    /// `on_row` is called with the 1-based position of each row before it is reduced.
    pub fn remove_transitive_dependencies<F>(
        rows: &[SkillRow],
        graph: &DependencyGraph,
        mut on_row: F,
    ) -> ReductionResult
    where
        F: FnMut(usize, &SkillRow),
    {
        let mut result = ReductionResult::default();

        for (idx, row) in rows.iter().enumerate() {
            on_row(idx + 1, row);
            let (cleaned, removed) = Self::reduce_row(row, graph);
            result.rows.push(cleaned);
            result.removed.extend(removed);
        }

        result
    }

    /// Reduces a single row
    ///
    /// A dependency `d` is dropped when another dependency `o` of the same row
    /// reaches it and `o` dominates `d`: either `d` cannot reach `o` back, or
    /// both reach each other and `o` comes first. On acyclic graphs this is
    /// plain "reachable from another dependency". Surviving dependencies keep
    /// their relative order and are packed into the leading slots.
    pub fn reduce_row(row: &SkillRow, graph: &DependencyGraph) -> (SkillRow, Vec<RemovedDependency>) {
        let direct: Vec<&SkillName> = row.direct_dependencies().collect();
        let closures: Vec<HashSet<SkillName>> = direct
            .iter()
            .map(|dep| graph.transitive_closure(dep.as_str()))
            .collect();

        let mut kept: Vec<SkillName> = Vec::with_capacity(direct.len());
        let mut removed = Vec::new();

        for (i, dep) in direct.iter().enumerate() {
            let dominator = direct.iter().enumerate().find(|(j, other)| {
                *j != i
                    && closures[*j].contains(dep.as_str())
                    && (*j < i || !closures[i].contains(other.as_str()))
            });

            match dominator {
                Some((_, implied_by)) => removed.push(RemovedDependency {
                    skill: row.skill().clone(),
                    dependency: (*dep).clone(),
                    implied_by: (*implied_by).clone(),
                }),
                None => kept.push((*dep).clone()),
            }
        }

        let mut slots: [Option<SkillName>; DEPENDENCY_SLOTS] = Default::default();
        for (slot, dep) in slots.iter_mut().zip(kept) {
            *slot = Some(dep);
        }

        (
            SkillRow::new(row.skill().clone(), row.category(), slots),
            removed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill_graph::services::GraphBuilder;

    fn row(skill: &str, deps: &[&str]) -> SkillRow {
        SkillRow::from_dependency_list(SkillName::new(skill), "Category", deps)
    }

    fn reduce(rows: &[SkillRow]) -> ReductionResult {
        let graph = GraphBuilder::build(rows);
        TransitiveReducer::remove_transitive_dependencies(rows, &graph, |_, _| {})
    }

    #[test]
    fn test_removes_dependency_implied_by_sibling() {
        let rows = vec![row("A", &["B", "C"]), row("B", &["C"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["B", "", "", ""]);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].skill.as_str(), "A");
        assert_eq!(result.removed[0].dependency.as_str(), "C");
        assert_eq!(result.removed[0].implied_by.as_str(), "B");
    }

    #[test]
    fn test_keeps_independent_dependencies() {
        let rows = vec![row("A", &["B", "C"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["B", "C", "", ""]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_row_without_dependencies_passes_through() {
        let rows = vec![SkillRow::new(
            SkillName::new("Grip"),
            "Basics",
            Default::default(),
        )];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].skill().as_str(), "Grip");
        assert_eq!(result.rows[0].category(), "Basics");
        assert_eq!(result.rows[0].dependency_cells(), ["", "", "", ""]);
    }

    #[test]
    fn test_two_node_cycle_keeps_single_dependency() {
        let rows = vec![row("A", &["B"]), row("B", &["A"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["B", "", "", ""]);
        assert_eq!(result.rows[1].dependency_cells(), ["A", "", "", ""]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_self_dependency_is_kept() {
        let rows = vec![row("A", &["A"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["A", "", "", ""]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_self_dependency_does_not_imply_siblings() {
        let rows = vec![row("A", &["A", "B"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["A", "B", "", ""]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_mutually_reachable_dependencies_keep_first() {
        let rows = vec![row("A", &["B", "C"]), row("B", &["C"]), row("C", &["B"])];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["B", "", "", ""]);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].dependency.as_str(), "C");
    }

    #[test]
    fn test_deep_chain_preserves_order() {
        let rows = vec![
            row("Jump Smash", &["Footwork", "Smash", "Grip", "Jump"]),
            row("Smash", &["Grip"]),
            row("Jump", &["Footwork"]),
        ];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].dependency_cells(), ["Smash", "Jump", "", ""]);
        let removed: Vec<&str> = result.removed.iter().map(|r| r.dependency.as_str()).collect();
        assert_eq!(removed, vec!["Footwork", "Grip"]);
    }

    #[test]
    fn test_category_passed_through() {
        let rows = vec![SkillRow::from_dependency_list(
            SkillName::new("A"),
            "Net Play, Advanced",
            ["B"],
        )];

        let result = reduce(&rows);

        assert_eq!(result.rows[0].category(), "Net Play, Advanced");
    }

    #[test]
    fn test_row_callback_sees_every_row_in_order() {
        let rows = vec![row("A", &["B", "C"]), row("B", &["C"]), row("C", &[])];
        let graph = GraphBuilder::build(&rows);
        let mut seen = Vec::new();

        let result = TransitiveReducer::remove_transitive_dependencies(&rows, &graph, |idx, row| {
            seen.push((idx, row.skill().as_str().to_string()));
        });

        assert_eq!(
            seen,
            vec![
                (1, "A".to_string()),
                (2, "B".to_string()),
                (3, "C".to_string())
            ]
        );
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.removed.len(), 1);
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let rows = vec![
            row("A", &["B", "C", "D"]),
            row("B", &["D"]),
            row("C", &["E"]),
            row("E", &["D"]),
        ];

        let result = reduce(&rows);

        for (input, output) in rows.iter().zip(result.rows.iter()) {
            let input_deps: Vec<&SkillName> = input.direct_dependencies().collect();
            assert!(output.direct_dependencies().all(|d| input_deps.contains(&d)));
        }
        assert_eq!(result.rows[0].dependency_cells(), ["B", "C", "", ""]);
    }

    #[test]
    fn test_second_pass_is_fixed_point_for_acyclic_input() {
        let rows = vec![
            row("A", &["B", "C", "D", "E"]),
            row("B", &["C", "E"]),
            row("C", &["E"]),
            row("D", &["E"]),
        ];

        let first = reduce(&rows);
        let second = reduce(&first.rows);

        assert_eq!(first.rows, second.rows);
        assert!(second.removed.is_empty());
    }

    #[test]
    fn test_removed_dependency_reachable_from_retained_one() {
        let rows = vec![
            row("A", &["B", "C", "D"]),
            row("B", &["C"]),
            row("C", &["D"]),
            row("D", &["B"]),
        ];
        let graph = GraphBuilder::build(&rows);

        let (cleaned, removed) = TransitiveReducer::reduce_row(&rows[0], &graph);

        let kept: Vec<&SkillName> = cleaned.direct_dependencies().collect();
        assert!(!kept.is_empty());
        for entry in &removed {
            assert!(kept
                .iter()
                .any(|k| graph.transitive_closure(k.as_str()).contains(entry.dependency.as_str())));
        }
    }
}
