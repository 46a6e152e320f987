use std::io::Write;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::errors::PipelineError;
use crate::generator::{PersonGenerator, generate_people};
use crate::model::{ERROR_CHANNEL_CAPACITY, GenerationReport, PipelineOptions, PrintSummary};
use crate::printer::consume;

/// Result of a completed pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome<W> {
    pub generation: GenerationReport,
    pub printed: PrintSummary,
    /// Writer the printer rendered into, returned to the caller.
    pub writer: W,
}

/// Run the generator and the printer as two tasks and wait for both.
///
/// The generator is seeded from `options.seed` (or the clock) and observes
/// `token`; the printer only observes channel closure.
pub async fn run_pipeline<W>(
    options: &PipelineOptions,
    token: CancellationToken,
    writer: W,
) -> Result<PipelineOutcome<W>, PipelineError>
where
    W: Write + Send + 'static,
{
    let start = Instant::now();
    let count = options.count;
    let mut generator = PersonGenerator::from_options(options);
    let (people_tx, people_rx) = mpsc::channel(options.people_capacity());
    let (errors_tx, errors_rx) = mpsc::channel(ERROR_CHANNEL_CAPACITY);

    let producer = tokio::spawn(async move {
        generate_people(&token, count, &mut generator, people_tx, errors_tx).await
    });
    // Writes are synchronous; the printer emits a handful of short lines.
    let printer = tokio::spawn(consume(people_rx, errors_rx, writer));

    let (generation, printed) = tokio::join!(producer, printer);
    let generation = generation?;
    let (writer, printed) = printed??;

    info!(
        requested = generation.requested,
        produced = generation.produced,
        cancelled = generation.cancelled,
        complete = generation.is_complete(),
        greetings = printed.greetings,
        errors = printed.errors,
        duration_ms = start.elapsed().as_millis() as u64,
        "pipeline completed"
    );

    Ok(PipelineOutcome {
        generation,
        printed,
        writer,
    })
}
