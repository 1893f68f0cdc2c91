//! skill-prune - transitive reduction for skill dependency tables
//!
//! Each row of a skill table names a skill and up to four skills it depends
//! on. A dependency is redundant when another dependency of the same skill
//! already reaches it; this library removes those and writes the table back.
//!
//! # Architecture
//!
//! - **Domain Layer** (`skill_graph`): graph model, reduction and cycle detection
//! - **Application Layer** (`application`): the prune use case and DTOs
//! - **Ports** (`ports`): interfaces for table I/O and status output
//! - **Adapters** (`adapters`): CSV, filesystem and console implementations
//! - **Shared** (`shared`): error types and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use skill_prune::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = PruneDependenciesUseCase::new(CsvFileReader::new(), StderrProgressReporter::new());
//!
//! let request = PruneRequest::new(PathBuf::from("badminton_skill_dag.csv"), CyclePolicy::Warn);
//! let response = use_case.execute(request)?;
//!
//! let output = CsvTableFormatter::new().format(&response.cleaned_rows)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod skill_graph;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvFileReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CsvTableFormatter;
    pub use crate::application::dto::{PruneRequest, PruneResponse};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::PruneDependenciesUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, SkillTableReader, TableFormatter,
    };
    pub use crate::skill_graph::domain::{DependencyGraph, SkillName, SkillRow};
    pub use crate::skill_graph::policies::CyclePolicy;
    pub use crate::skill_graph::services::{GraphBuilder, TransitiveReducer};
    pub use crate::shared::Result;
}
