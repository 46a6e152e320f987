//! Producer/consumer pipeline for greetflow.
//!
//! A generator task streams randomly populated `Person` records through a
//! bounded channel to a printer task, which renders one greeting per record.
//! Invalid requests travel on a separate error channel.

pub mod errors;
pub mod generator;
pub mod model;
pub mod pipeline;
pub mod printer;

pub use errors::{GenerationError, PipelineError};
pub use generator::{PersonGenerator, generate_people};
pub use model::{GenerationReport, PipelineOptions, PrintSummary};
pub use pipeline::{PipelineOutcome, run_pipeline};
pub use printer::consume;
