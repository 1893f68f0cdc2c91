use crate::application::dto::{PruneRequest, PruneResponse};
use crate::ports::outbound::{ProgressReporter, SkillTableReader};
use crate::shared::error::PruneError;
use crate::shared::Result;
use crate::skill_graph::domain::SkillName;
use crate::skill_graph::policies::CyclePolicy;
use crate::skill_graph::services::{describe_cycle, CycleDetector, GraphBuilder, TransitiveReducer};

/// PruneDependenciesUseCase - Core use case for transitive reduction
///
/// Load table -> build immutable graph -> apply cycle policy -> reduce
/// every row against that graph. Writing the result is left to the caller
/// so the same run can back `--check`, `--stdout` and in-place rewrites.
///
/// # Type Parameters
/// * `R` - SkillTableReader implementation
/// * `PR` - ProgressReporter implementation
pub struct PruneDependenciesUseCase<R, PR> {
    table_reader: R,
    progress_reporter: PR,
}

impl<R, PR> PruneDependenciesUseCase<R, PR>
where
    R: SkillTableReader,
    PR: ProgressReporter,
{
    /// Creates a new PruneDependenciesUseCase with injected dependencies
    pub fn new(table_reader: R, progress_reporter: PR) -> Self {
        Self {
            table_reader,
            progress_reporter,
        }
    }

    /// Executes the prune use case
    ///
    /// # Errors
    /// Returns an error if the table cannot be read, or if the graph has
    /// cycles and the request's policy rejects them.
    pub fn execute(&self, request: PruneRequest) -> Result<PruneResponse> {
        // Step 1: Load table
        self.progress_reporter.report(&format!(
            "📖 Loading skill table from: {}",
            request.table_path.display()
        ));

        let rows = self.table_reader.read_table(&request.table_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} row(s)", rows.len()));

        // Step 2: Build graph
        let graph = GraphBuilder::build(&rows);

        self.progress_reporter.report(&format!(
            "   - Skills: {}, dependency edges: {}",
            graph.skill_count(),
            graph.edge_count()
        ));

        // Step 3: Cycle policy
        let cycles = if request.cycle_policy.reports_cycles() {
            CycleDetector::find_cycles(&graph)
        } else {
            Vec::new()
        };
        self.apply_cycle_policy(request.cycle_policy, &cycles)?;

        // Step 4: Reduce each row against the original graph
        self.progress_reporter
            .report("🔍 Removing transitive dependencies...");

        let total = rows.len();
        let reduction =
            TransitiveReducer::remove_transitive_dependencies(&rows, &graph, |current, row| {
                self.progress_reporter
                    .report_progress(current, total, Some(row.skill().as_str()));
            });

        let response = PruneResponse::new(reduction.rows, reduction.removed, cycles);

        self.progress_reporter.report_completion(&format!(
            "✂️  Removed {} redundant dependency(ies) from {} skill(s)",
            response.removed.len(),
            response.affected_skill_count()
        ));

        Ok(response)
    }

    fn apply_cycle_policy(&self, policy: CyclePolicy, cycles: &[Vec<SkillName>]) -> Result<()> {
        if cycles.is_empty() {
            return Ok(());
        }

        if !policy.allows_cycles() {
            let listing = cycles
                .iter()
                .map(|cycle| format!("  {}", describe_cycle(cycle)))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(PruneError::CyclicDependencies {
                count: cycles.len(),
                cycles: listing,
            }
            .into());
        }

        for cycle in cycles {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Dependency cycle detected: {}",
                describe_cycle(cycle)
            ));
        }

        Ok(())
    }
}
