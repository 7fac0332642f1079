use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use detect_next_version::analyzer::{self, VersionAnalyzer};
use detect_next_version::config;
use detect_next_version::domain::{increment, BumpCategory, IncrementOptions};
use detect_next_version::git::Git2Repository;
use detect_next_version::ui;

#[derive(Parser)]
#[command(
    name = "detect-next-version",
    version,
    about = "Detect the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Work out the next version from commit messages or a repository
    Detect {
        /// Raw commit messages; the repository is read when none are given
        messages: Vec<String>,

        #[arg(long, help = "Current version the messages apply to")]
        current: Option<String>,

        #[arg(long, default_value = ".", help = "Path inside the git repository")]
        repo: String,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Increment a version by a release category
    Inc {
        version: String,

        /// major, minor, patch, premajor, preminor, prepatch, prerelease or pre
        release: String,

        #[arg(long, help = "Accept loosely formatted versions")]
        loose: bool,

        #[arg(long, help = "Pre-release identifier, e.g. beta")]
        preid: Option<String>,
    },
    /// Print the bump a single commit message calls for
    Classify { message: String },
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Detect {
            messages,
            current,
            repo,
            json,
        } => detect(args.config.as_deref(), messages, current, &repo, json),
        Command::Inc {
            version,
            release,
            loose,
            preid,
        } => {
            let category: BumpCategory = release.parse()?;
            let mut options = IncrementOptions::default().loose(loose);
            if let Some(preid) = preid {
                options = options.identifier(preid);
            }
            println!("{}", increment(&version, category, &options)?);
            Ok(())
        }
        Command::Classify { message } => {
            let bump = analyzer::detect(&message)?;
            println!("{}", bump.map_or("none", |b| b.as_str()));
            Ok(())
        }
    }
}

fn detect(
    config_path: Option<&str>,
    messages: Vec<String>,
    current: Option<String>,
    repo_path: &str,
    json: bool,
) -> Result<()> {
    let config = config::load_config(config_path).context("Error loading config")?;
    let analyzer = VersionAnalyzer::new(&config);

    if !messages.is_empty() {
        let current = current.unwrap_or_else(|| config.versioning.initial_version.clone());
        debug!(%current, count = messages.len(), "analyzing messages from the command line");

        let analysis = analyzer.analyze_messages(&messages);
        let next = analyzer.report(&current, analysis.increment)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&next)?);
        } else {
            for warning in &analysis.warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_next_version(&next);
        }
        return Ok(());
    }

    let repo = Git2Repository::open(repo_path)
        .with_context(|| format!("Git repository error at '{}'", repo_path))?;
    let report = analyzer.analyze_repository(&repo)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.next)?);
    } else {
        ui::display_report(&report);
    }

    Ok(())
}
