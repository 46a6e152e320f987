use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use greetflow_pipeline::{GenerationReport, PrintSummary};

use crate::CliError;

/// Summary of one `greetflow` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub seed: u64,
    pub generation: GenerationReport,
    pub printed: PrintSummary,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn new(seed: u64, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at,
            seed,
            generation: GenerationReport::default(),
            printed: PrintSummary::default(),
            duration_ms: 0,
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
