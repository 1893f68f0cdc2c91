mod cli;

use cli::{Args, RunSettings};
use skill_prune::config::{discover_config, load_config_from_path, ConfigFile};
use skill_prune::prelude::*;
use skill_prune::shared::error::ExitCode;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(code) => return Ok(code),
    };

    let config = resolve_config(&args)?;
    let settings = RunSettings::resolve(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let table_reader = CsvFileReader::new();
    let progress_reporter = StderrProgressReporter::new();
    let use_case = PruneDependenciesUseCase::new(table_reader, progress_reporter);

    let request = PruneRequest::new(settings.input.clone(), settings.cycle_policy);
    let response = use_case.execute(request)?;

    for entry in &response.removed {
        eprintln!(
            "   - {}: {} (implied by {})",
            entry.skill, entry.dependency, entry.implied_by
        );
    }

    if settings.check_only {
        return Ok(check_outcome(&response));
    }

    let content = CsvTableFormatter::new().format(&response.cleaned_rows)?;
    let presenter = PresenterFactory::create(settings.presenter_type);
    presenter.present(&content)?;

    Ok(ExitCode::Success)
}

/// Loads the config named on the command line, or the one in the current directory
fn resolve_config(args: &Args) -> Result<Option<ConfigFile>> {
    let found = match args.config.as_deref() {
        Some(path) => Some((path.to_path_buf(), load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?)?,
    };

    Ok(found.map(|(path, config)| {
        eprintln!("⚙️  Loaded config from: {}", path.display());
        config
    }))
}

fn check_outcome(response: &PruneResponse) -> ExitCode {
    if response.has_redundant_dependencies() {
        eprintln!(
            "❌ {} redundant dependency(ies) found. Run without --check to remove them.",
            response.removed.len()
        );
        ExitCode::RedundantDependenciesFound
    } else {
        eprintln!("✅ No redundant dependencies found.");
        ExitCode::Success
    }
}
