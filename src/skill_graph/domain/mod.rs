pub mod dependency_graph;
pub mod skill;

pub use dependency_graph::DependencyGraph;
pub use skill::{SkillName, SkillRow, DEPENDENCY_SLOTS};
