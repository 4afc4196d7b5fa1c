mod adapters;
mod analytics;
mod application;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{EdgeFileReader, JsonFileCache};
use adapters::outbound::network::BrewApiClient;
use application::dto::{AnalyticsReport, DependencyRequest};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::{
    BuildDependencyReportUseCase, BuildInstallReportUseCase, CollectMetadataUseCase,
};
use clap::Parser;
use cli::{Args, Command, EdgesFileArgs};
use config::Settings;
use owo_colors::OwoColorize;
use ports::outbound::FreshnessPolicy;
use shared::error::ExitCode;
use shared::Result;
use std::process;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            // Help and version go to stdout, usage errors to stderr
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose, args.quiet);

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Log level for the `-v` count and `-q` flag; `-v` wins over `-q`
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` / `-q` when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brew_analytics={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let started = Instant::now();

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let top_flag = match &args.command {
        Command::Matrix { top, .. } => *top,
        _ => None,
    };
    let settings = Settings::merge(config, args.format, top_flag);
    tracing::debug!(?settings, "effective settings");

    let quiet = args.quiet;
    let client = || {
        BrewApiClient::with_options(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    };

    // Create adapters and use cases (Dependency Injection)
    let installs =
        BuildInstallReportUseCase::new(client()?, StderrProgressReporter::with_quiet(quiet));

    let report = match args.command {
        Command::Installs => AnalyticsReport::Installs(installs.execute().await?),
        Command::Edges { relation } => {
            let use_case = dependency_use_case(installs, client()?, &settings, quiet);
            let request = DependencyRequest::live(relation.relation, args.refresh);
            AnalyticsReport::Edges(use_case.edges(&request).await?)
        }
        Command::Tree {
            formula,
            relation,
            edges,
        } => {
            let use_case = dependency_use_case(installs, client()?, &settings, quiet);
            let request = dependency_request(relation.relation, edges, args.refresh);
            AnalyticsReport::Tree(use_case.tree(&request, &formula).await?)
        }
        Command::Matrix {
            relation, edges, ..
        } => {
            let use_case = dependency_use_case(installs, client()?, &settings, quiet);
            let request = dependency_request(relation.relation, edges, args.refresh);
            AnalyticsReport::Matrix(use_case.matrix(&request, settings.top_n).await?)
        }
    };

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatted = FormatterFactory::create(settings.format).format(&report)?;
    PresenterFactory::create(PresenterType::from(args.output)).present(&formatted)?;

    if !quiet {
        eprintln!("⏱️  Finished in {:.2}s", started.elapsed().as_secs_f64());
    }
    Ok(())
}

type DependencyUseCase = BuildDependencyReportUseCase<
    BrewApiClient,
    BrewApiClient,
    JsonFileCache,
    EdgeFileReader,
    StderrProgressReporter,
>;

fn dependency_use_case(
    installs: BuildInstallReportUseCase<BrewApiClient, StderrProgressReporter>,
    client: BrewApiClient,
    settings: &Settings,
    quiet: bool,
) -> DependencyUseCase {
    let policy = FreshnessPolicy::from_hours(Some(settings.cache_max_age_hours));
    let cache = match policy {
        FreshnessPolicy::Bypass => None,
        _ => Some(JsonFileCache::new(settings.cache_path.clone())),
    };
    let collector = CollectMetadataUseCase::new(
        client,
        cache,
        StderrProgressReporter::with_quiet(quiet),
        settings.concurrency,
        policy,
    );
    BuildDependencyReportUseCase::new(installs, collector, EdgeFileReader::new())
}

fn dependency_request(
    relation: analytics::domain::RelationKind,
    edges: EdgesFileArgs,
    refresh: bool,
) -> DependencyRequest {
    match edges.edges_file {
        Some(path) => DependencyRequest::from_file(relation, path),
        None => DependencyRequest::live(relation, refresh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(0, true), "error");
        assert_eq!(log_level(1, true), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(5, false), "trace");
    }

    #[test]
    fn test_quiet_help_matches_log_level() {
        let command = Args::command();
        let quiet = command
            .get_arguments()
            .find(|arg| arg.get_id() == "quiet")
            .unwrap();
        let help = quiet.get_help().unwrap().to_string();

        assert_eq!(log_level(0, true), "error");
        assert!(help.contains("only errors"));
        assert!(!help.contains("warnings"));
    }
}
