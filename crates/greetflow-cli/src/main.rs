mod logging;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use greetflow_core::{AgeGroup, Person};
use greetflow_pipeline::model::DEFAULT_PEOPLE_COUNT;
use greetflow_pipeline::{PipelineError, PipelineOptions, run_pipeline};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use logging::init_logging;
use report::{RunReport, write_report};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "greetflow", version, about = "Generate people and greet them")]
struct Cli {
    /// Number of people to generate (zero or less reports an error).
    #[arg(long, default_value_t = DEFAULT_PEOPLE_COUNT, allow_negative_numbers = true)]
    count: i64,
    /// Seed for the person generator. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let token = CancellationToken::new();
    let _cancel_on_exit = token.clone().drop_guard();
    spawn_interrupt_watcher(token.clone());

    let started_at = chrono::Utc::now();
    let mut options = PipelineOptions {
        count: cli.count,
        seed: cli.seed,
    };
    let seed = options.resolved_seed();
    options.seed = Some(seed);
    let mut run_report = RunReport::new(seed, started_at);
    tracing::info!(
        run_id = %run_report.run_id,
        count = options.count,
        seed,
        "run started"
    );

    let timer = Instant::now();
    let outcome = run_pipeline(&options, token.clone(), io::stdout()).await?;

    run_report.generation = outcome.generation;
    run_report.printed = outcome.printed;
    run_report.duration_ms = timer.elapsed().as_millis() as u64;

    print_age_groups(&mut io::stdout().lock())?;

    tracing::info!(
        run_id = %run_report.run_id,
        produced = run_report.generation.produced,
        greetings = run_report.printed.greetings,
        errors = run_report.printed.errors,
        duration_ms = run_report.duration_ms,
        "run finished"
    );

    if let Some(path) = cli.report.as_deref() {
        write_report(path, &run_report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Cancel the run when the process receives Ctrl-C.
fn spawn_interrupt_watcher(token: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => {
                    tracing::warn!("interrupt received, cancelling generation");
                    token.cancel();
                }
                Err(err) => tracing::warn!(error = %err, "failed to listen for interrupt"),
            },
            _ = token.cancelled() => {}
        }
    });
}

fn demo_people() -> [Person; 3] {
    [
        Person::new("Alice", 15),
        Person::new("Bob", 35),
        Person::new("Charlie", 60),
    ]
}

fn print_age_groups<W: Write>(out: &mut W) -> io::Result<()> {
    for person in demo_people() {
        writeln!(out, "{} is an {}.", person.name, AgeGroup::of(&person))?;
    }
    out.flush()
}
