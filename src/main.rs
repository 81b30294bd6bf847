//! Browser Survey
//!
//! Command-line front end for the experience classifier.
//!
//! - `classify`: classify a single user agent and width
//! - `replay`: replay JSON-lines trigger samples against the configured page
//! - `signatures`: print the active tier profiles, signatures and thresholds

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use browser_survey::{
    replay, ExperienceClassifier, Result, StaticEnvironment, SurveyConfig, SurveySession,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Browser Survey - detect which experience to serve a browsing client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(long, env = "SURVEY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single client
    Classify {
        /// Client user-agent string
        #[arg(long, short = 'u')]
        user_agent: Option<String>,

        /// Viewport width in CSS pixels
        #[arg(long, short = 'w')]
        width: Option<u32>,

        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay JSON-lines trigger samples and print one event per line
    Replay {
        /// Sample file (defaults to stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Print the active tier profiles, signatures and thresholds as YAML
    Signatures,
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SurveyConfig::load(path).await?,
        None => SurveyConfig::default(),
    };

    let classifier = ExperienceClassifier::with_config(config.classifier.clone())?;

    match args.command {
        Command::Classify {
            user_agent,
            width,
            json,
        } => {
            let classification = classifier.classify_detailed(user_agent.as_deref(), width);
            if json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                println!("{}", classification.tier);
            }
        }

        Command::Replay { input } => {
            let mut session = SurveySession::with_classifier(classifier, StaticEnvironment::default());
            let mut document = config.document.clone();
            let stdout = tokio::io::stdout();

            let summary = match input {
                Some(path) => {
                    let file = tokio::fs::File::open(&path).await?;
                    info!(path = %path.display(), "Replaying samples from file");
                    replay(&mut session, &mut document, tokio::io::BufReader::new(file), stdout)
                        .await?
                }
                None => {
                    info!("Replaying samples from stdin");
                    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                    replay(&mut session, &mut document, stdin, stdout).await?
                }
            };

            info!(
                triggers = summary.triggers,
                changes = summary.changes,
                body_class = %document.body_class,
                "Final page state"
            );
        }

        Command::Signatures => {
            let active = SurveyConfig {
                classifier: classifier.config().clone(),
                document: config.document,
            };
            print!("{}", active.report_yaml()?);
        }
    }

    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout stays machine-readable
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
