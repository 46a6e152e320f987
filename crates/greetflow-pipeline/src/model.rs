use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of people generated when nothing else is requested.
pub const DEFAULT_PEOPLE_COUNT: i64 = 5;

/// Buffer size of the error channel.
pub const ERROR_CHANNEL_CAPACITY: usize = 1;

/// Upper bound on the people channel buffer.
pub const MAX_PEOPLE_CAPACITY: usize = 1 << 16;

/// Options for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Number of people to generate. Zero or less is rejected by the generator.
    pub count: i64,
    /// Seed for the person generator. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PEOPLE_COUNT,
            seed: None,
        }
    }
}

impl PipelineOptions {
    /// Seed for this run: the configured one, or one taken from the clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| clock_seed(Utc::now()))
    }

    /// Buffer size for the people channel: one slot per requested person.
    ///
    /// Tokio rejects zero-capacity channels, so invalid counts still get one slot.
    pub fn people_capacity(&self) -> usize {
        usize::try_from(self.count)
            .ok()
            .filter(|capacity| *capacity > 0)
            .map(|capacity| capacity.min(MAX_PEOPLE_CAPACITY))
            .unwrap_or(1)
    }
}

/// Seed derived from a timestamp, at nanosecond resolution when representable.
pub fn clock_seed(now: DateTime<Utc>) -> u64 {
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp() as u64)
}

/// Outcome of a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub requested: i64,
    pub produced: u64,
    /// The lifecycle token fired before all people were produced.
    pub cancelled: bool,
    /// The requested count was not positive.
    pub rejected: bool,
    /// The printer went away before generation finished.
    pub consumer_dropped: bool,
}

impl GenerationReport {
    pub fn new(requested: i64) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.rejected && u64::try_from(self.requested).is_ok_and(|n| n == self.produced)
    }
}

/// Lines written by the printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSummary {
    pub greetings: u64,
    pub errors: u64,
}
