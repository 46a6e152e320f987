use std::io::Write;

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info};

use greetflow_core::Greeter;

use crate::errors::{GenerationError, PipelineError};
use crate::model::PrintSummary;

/// Print one greeting per record and one line per error until `people` closes.
///
/// The two sources are multiplexed with no priority between them; when both
/// are ready the branch taken is unspecified. Errors do not stop the loop. Once
/// the people channel is closed and drained, any error already queued is
/// printed before returning, regardless of whether the error channel is open.
/// The writer is handed back alongside the summary.
pub async fn consume<G, W>(
    mut people: Receiver<G>,
    mut errors: Receiver<GenerationError>,
    mut out: W,
) -> Result<(W, PrintSummary), PipelineError>
where
    G: Greeter,
    W: Write,
{
    let mut summary = PrintSummary::default();
    let mut errors_open = true;

    loop {
        tokio::select! {
            next = people.recv() => match next {
                Some(person) => {
                    writeln!(out, "{}", person.greet())?;
                    summary.greetings += 1;
                }
                None => break,
            },
            next = errors.recv(), if errors_open => match next {
                Some(err) => {
                    print_error(&mut out, &err)?;
                    summary.errors += 1;
                }
                None => {
                    debug!("error channel closed");
                    errors_open = false;
                }
            },
        }
    }

    while let Ok(err) = errors.try_recv() {
        print_error(&mut out, &err)?;
        summary.errors += 1;
    }

    out.flush()?;
    info!(
        greetings = summary.greetings,
        errors = summary.errors,
        "printer finished"
    );
    Ok((out, summary))
}

fn print_error<W: Write>(out: &mut W, err: &GenerationError) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")
}
