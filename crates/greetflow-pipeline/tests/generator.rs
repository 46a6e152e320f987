use greetflow_core::{MAX_AGE, PERSON_NAMES, Person};
use greetflow_pipeline::{GenerationError, PersonGenerator, generate_people};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

async fn drain(mut people: mpsc::Receiver<Person>) -> Vec<Person> {
    let mut received = Vec::new();
    while let Some(person) = people.recv().await {
        received.push(person);
    }
    received
}

#[test]
fn same_seed_yields_same_people() {
    let a: Vec<Person> = PersonGenerator::seeded(42).take(20).collect();
    let b: Vec<Person> = PersonGenerator::seeded(42).take(20).collect();
    assert_eq!(a, b, "seeded generation should be deterministic");

    let c: Vec<Person> = PersonGenerator::seeded(43).take(20).collect();
    assert_ne!(a, c, "different seeds should diverge");
}

#[tokio::test]
async fn produces_exactly_count_people_then_closes() {
    let token = CancellationToken::new();
    let mut generator = PersonGenerator::seeded(1);
    let (people_tx, people_rx) = mpsc::channel(5);
    let (errors_tx, mut errors_rx) = mpsc::channel(1);

    let report = generate_people(&token, 5, &mut generator, people_tx, errors_tx).await;

    assert_eq!(report.produced, 5);
    assert!(report.is_complete());
    assert!(!report.cancelled);

    let people = drain(people_rx).await;
    assert_eq!(people.len(), 5);
    for person in &people {
        assert!(PERSON_NAMES.contains(&person.name.as_str()));
        assert!(person.age < MAX_AGE);
    }
    assert!(errors_rx.recv().await.is_none(), "no error expected");
}

#[tokio::test]
async fn non_positive_count_sends_one_error_and_no_people() {
    for count in [0, -3] {
        let token = CancellationToken::new();
        let mut generator = PersonGenerator::seeded(1);
        let (people_tx, people_rx) = mpsc::channel(1);
        let (errors_tx, mut errors_rx) = mpsc::channel(1);

        let report = generate_people(&token, count, &mut generator, people_tx, errors_tx).await;

        assert!(report.rejected);
        assert_eq!(report.produced, 0);
        assert!(drain(people_rx).await.is_empty());

        let err = errors_rx.recv().await.expect("one error");
        assert_eq!(err, GenerationError::InvalidCount { requested: count });
        assert_eq!(err.to_string(), "number of people must be greater than 0");
        assert!(errors_rx.recv().await.is_none(), "only one error expected");
    }
}

#[tokio::test]
async fn cancelled_before_start_produces_nothing_and_closes() {
    let token = CancellationToken::new();
    token.cancel();
    let mut generator = PersonGenerator::seeded(1);
    let (people_tx, people_rx) = mpsc::channel(5);
    let (errors_tx, _errors_rx) = mpsc::channel(1);

    let report = generate_people(&token, 5, &mut generator, people_tx, errors_tx).await;

    assert!(report.cancelled);
    assert_eq!(report.produced, 0);
    assert!(drain(people_rx).await.is_empty());
}

#[tokio::test]
async fn cancellation_mid_run_stops_within_one_iteration() {
    let token = CancellationToken::new();
    let (people_tx, mut people_rx) = mpsc::channel(1);
    let (errors_tx, _errors_rx) = mpsc::channel(1);

    let producer_token = token.clone();
    let producer = tokio::spawn(async move {
        let mut generator = PersonGenerator::seeded(9);
        generate_people(&producer_token, 100, &mut generator, people_tx, errors_tx).await
    });

    let first = people_rx.recv().await.expect("first person");
    token.cancel();
    let mut received = vec![first];
    while let Some(person) = people_rx.recv().await {
        received.push(person);
    }

    let report = producer.await.expect("producer task");
    assert!(report.cancelled);
    // One buffered and one in-flight send can still land after cancellation.
    assert!(received.len() <= 3, "received {}", received.len());
    assert_eq!(report.produced, received.len() as u64);
}

#[tokio::test]
async fn dropped_consumer_stops_generation() {
    let token = CancellationToken::new();
    let mut generator = PersonGenerator::seeded(3);
    let (people_tx, people_rx) = mpsc::channel(1);
    let (errors_tx, _errors_rx) = mpsc::channel(1);
    drop(people_rx);

    let report = generate_people(&token, 10, &mut generator, people_tx, errors_tx).await;

    assert!(report.consumer_dropped);
    assert_eq!(report.produced, 0);
}
