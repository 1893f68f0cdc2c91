use crate::skill_graph::policies::CyclePolicy;
use std::path::PathBuf;

/// PruneRequest - Internal request DTO for the prune use case
#[derive(Debug, Clone)]
pub struct PruneRequest {
    /// Location of the skill table to read
    pub table_path: PathBuf,
    /// How dependency cycles are handled
    pub cycle_policy: CyclePolicy,
}

impl PruneRequest {
    pub fn new(table_path: PathBuf, cycle_policy: CyclePolicy) -> Self {
        Self {
            table_path,
            cycle_policy,
        }
    }
}
