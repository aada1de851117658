use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repohealth",
    version,
    about = "Score the health and beginner friendliness of GitHub repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a repository from GitHub and score it
    Analyze(AnalyzeCommand),
    /// Score a previously collected facts bundle without network access
    Score(ScoreCommand),
    /// Check a repository identifier and print its canonical URL
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// `owner/name`, `github.com/owner/name` or a full GitHub URL
    pub repo: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Bearer token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[arg(long)]
    pub api_url: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Config file to use instead of the global and working-directory files
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON facts bundle
    pub facts: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Evaluation time (RFC 3339); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub repo: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}
