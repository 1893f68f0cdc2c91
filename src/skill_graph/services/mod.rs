mod cycle_detector;
mod graph_builder;
mod transitive_reducer;

pub use cycle_detector::{describe_cycle, CycleDetector};
pub use graph_builder::GraphBuilder;
pub use transitive_reducer::{ReductionResult, RemovedDependency, TransitiveReducer};
