use clap::Parser;
use skill_prune::application::factories::PresenterType;
use skill_prune::config::ConfigFile;
use skill_prune::shared::error::ExitCode;
use skill_prune::shared::Result;
use skill_prune::skill_graph::policies::CyclePolicy;
use std::path::PathBuf;

/// Table read (and rewritten) when neither CLI nor config names one
pub const DEFAULT_TABLE: &str = "badminton_skill_dag.csv";

/// Remove dependencies that are already implied by other dependencies
#[derive(Parser, Debug)]
#[command(name = "skill-prune")]
#[command(version)]
#[command(
    about = "Remove dependencies from a skill table that are already implied by other dependencies",
    long_about = None
)]
pub struct Args {
    /// Skill table to read [default: badminton_skill_dag.csv]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the cleaned table (defaults to overwriting the input)
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the cleaned table to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Only report redundant dependencies; exit with 1 if any are found
    #[arg(long, conflicts_with_all = ["stdout", "output"])]
    pub check: bool,

    /// How to handle dependency cycles: accept, warn or reject
    #[arg(long = "cycles", value_name = "POLICY")]
    pub cycle_policy: Option<CyclePolicy>,

    /// Path to a config file (defaults to skill-prune.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments
    ///
    /// On failure clap's message (or the help/version text) is printed and
    /// the exit code to finish with is returned instead.
    pub fn parse_args() -> std::result::Result<Self, ExitCode> {
        Self::try_parse().map_err(|e| {
            let code = parse_exit_code(&e);
            let _ = e.print();
            code
        })
    }
}

/// Help and version requests finish successfully, real parse errors do not
fn parse_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub presenter_type: PresenterType,
    pub cycle_policy: CyclePolicy,
    pub check_only: bool,
}

impl RunSettings {
    /// CLI values win over config values, config values over defaults
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let input = args
            .input
            .clone()
            .or_else(|| config.and_then(|c| c.input.as_ref().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE));

        let presenter_type = if args.stdout {
            PresenterType::Stdout
        } else {
            let output = args
                .output
                .clone()
                .or_else(|| config.and_then(|c| c.output.as_ref().map(PathBuf::from)))
                .unwrap_or_else(|| input.clone());
            PresenterType::File(output)
        };

        let cycle_policy = match args.cycle_policy {
            Some(policy) => policy,
            None => config
                .map(ConfigFile::cycle_policy)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };

        Ok(Self {
            input,
            presenter_type,
            cycle_policy,
            check_only: args.check,
        })
    }
}
