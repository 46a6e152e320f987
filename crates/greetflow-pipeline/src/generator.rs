use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use greetflow_core::{MAX_AGE, PERSON_NAMES, Person};

use crate::errors::GenerationError;
use crate::model::{GenerationReport, PipelineOptions};

const FALLBACK_NAME: &str = "Alice";

/// Source of random people.
///
/// The random source is owned by the generator rather than shared globally,
/// so a fixed seed always yields the same sequence of people.
#[derive(Debug, Clone)]
pub struct PersonGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl PersonGenerator<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from `options.seed`, or from the clock when unset.
    pub fn from_options(options: &PipelineOptions) -> Self {
        Self::seeded(options.resolved_seed())
    }
}

impl<R: Rng> PersonGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a person with a uniform name from the fixed set and a uniform age.
    pub fn next_person(&mut self) -> Person {
        let name = pick(&PERSON_NAMES, &mut self.rng).unwrap_or(FALLBACK_NAME);
        let age = self.rng.random_range(0..MAX_AGE);
        Person::new(name, age)
    }
}

impl<R: Rng> Iterator for PersonGenerator<R> {
    type Item = Person;

    fn next(&mut self) -> Option<Person> {
        Some(self.next_person())
    }
}

/// Produce `count` people onto `people`, or a single error when `count <= 0`.
///
/// Both senders are owned by this function and dropped on every return path,
/// which closes the channels for the consumer. The token is polled once per
/// iteration; a cancelled run stops early and is not treated as a failure.
pub async fn generate_people<R: Rng>(
    token: &CancellationToken,
    count: i64,
    generator: &mut PersonGenerator<R>,
    people: Sender<Person>,
    errors: Sender<GenerationError>,
) -> GenerationReport {
    let mut report = GenerationReport::new(count);

    if count <= 0 {
        warn!(count, "rejecting non-positive people count");
        report.rejected = true;
        if errors
            .send(GenerationError::InvalidCount { requested: count })
            .await
            .is_err()
        {
            warn!("error receiver dropped before the error was delivered");
        }
        return report;
    }

    info!(count, "generation started");

    for index in 0..count {
        if token.is_cancelled() {
            report.cancelled = true;
            info!(
                requested = count,
                produced = report.produced,
                "generation cancelled"
            );
            return report;
        }

        let person = generator.next_person();
        debug!(index, name = %person.name, age = person.age, "person generated");

        if people.send(person).await.is_err() {
            report.consumer_dropped = true;
            warn!(
                produced = report.produced,
                "people receiver dropped, stopping generation"
            );
            return report;
        }
        report.produced += 1;
    }

    info!(produced = report.produced, "generation completed");
    report
}

fn pick<R: Rng + ?Sized>(values: &[&'static str], rng: &mut R) -> Option<&'static str> {
    if values.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..values.len());
    values.get(idx).copied()
}
