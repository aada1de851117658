mod analyze;
mod bus_factor;
mod cli;
mod config;
mod dependencies;
mod error;
mod gateway;
mod identifier;
mod pipeline;
mod report;
mod types;

use crate::error::RepoHealthError;
use crate::gateway::GitHubGateway;
use crate::identifier::RepoId;
use crate::report::OutputFormat;
use crate::types::facts::FactsBundle;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const RATE_LIMITED: i32 = 5;
}

fn exit_code_for(error: &RepoHealthError) -> i32 {
    match error.status_code() {
        400 => exit_code::INVALID_INPUT,
        404 => exit_code::NOT_FOUND,
        429 => exit_code::RATE_LIMITED,
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("repohealth={level}")));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_format(flag: Option<cli::ReportFormat>, configured: Option<OutputFormat>) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or(configured)
        .unwrap_or(OutputFormat::Md)
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>, RepoHealthError> {
    match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| RepoHealthError::InvalidInput(format!("invalid --now timestamp: {e}"))),
        None => Ok(Utc::now()),
    }
}

async fn run(cli: cli::Cli) -> Result<i32, RepoHealthError> {
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let repo = RepoId::parse(&cmd.repo)?;
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd, cmd.config.as_deref())?;

            let mut gateway_config = loaded.gateway();
            if let Some(token) = cmd.token.filter(|token| !token.trim().is_empty()) {
                gateway_config.token = Some(token);
            }
            if let Some(api_url) = cmd.api_url {
                gateway_config.api_url = api_url;
            }
            if let Some(timeout_secs) = cmd.timeout_secs {
                gateway_config.timeout_secs = timeout_secs;
            }
            tracing::debug!(config = ?gateway_config, "gateway configured");

            let gateway = GitHubGateway::new(gateway_config)?;
            let analysis = pipeline::analyze_repository(&gateway, &repo, Utc::now()).await?;
            let format = resolve_format(cmd.format, loaded.output_format());
            println!("{}", report::render(&analysis, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let now = parse_now(cmd.now.as_deref())?;
            let content = std::fs::read_to_string(&cmd.facts)?;
            let bundle: FactsBundle = serde_json::from_str(&content)?;
            let url = format!(
                "https://github.com/{}/{}",
                bundle.repository.owner, bundle.repository.name
            );
            let analysis = pipeline::assemble(bundle, url, now);
            let format = resolve_format(cmd.format, None);
            println!("{}", report::render(&analysis, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let repo = RepoId::parse(&cmd.repo)?;
            println!("{}", repo.canonical_url());
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
