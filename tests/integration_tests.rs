use loadstat::{Aggregator, Merger, Outcome, Reporter, RunConfig, Summary, outcome_channel};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const WORKERS: u64 = 8;
const REQUESTS_PER_WORKER: u64 = 250;

fn run_config() -> RunConfig {
    RunConfig::new("http://localhost:3000/", 64, 8)
}

/// Deterministic outcome for request `i` of `worker`
fn synthetic_outcome(worker: u64, i: u64) -> Outcome {
    let code = match (worker + i) % 10 {
        0..=6 => 200,
        7 => 301,
        8 => 404,
        _ => 503,
    };
    Outcome::new(Duration::from_micros(100 + worker * 37 + i * 13), 512 + i, code)
}

/// Run one instance: spawn workers against a fresh aggregator and return its encoding
async fn run_instance(seed: u64) -> (Summary, String) {
    let (tx, rx) = outcome_channel();
    let aggregator = Aggregator::with_reporter(&run_config(), Reporter::new(Vec::new()));
    let handle = aggregator.spawn(rx, Instant::now());

    let mut workers = Vec::new();
    for worker in 0..WORKERS {
        let tx = tx.clone();
        workers.push(tokio::spawn(async move {
            for i in 0..REQUESTS_PER_WORKER {
                tx.send(synthetic_outcome(worker + seed, i))
                    .await
                    .expect("aggregator hung up");
                if i % 50 == 0 {
                    tokio::task::yield_now().await;
                }
            }
        }));
    }
    drop(tx);

    for worker in workers {
        worker.await.expect("worker panicked");
    }
    let result = handle.await.expect("aggregator panicked");
    (result.summary, result.encoded)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_producers_single_aggregator() {
    let (summary, encoded) = run_instance(0).await;
    let count = (WORKERS * REQUESTS_PER_WORKER) as usize;

    assert_eq!(summary.count(), count);
    assert_eq!(summary.classified_count(), count as u64);

    let expected_sum: Duration = (0..WORKERS)
        .flat_map(|w| (0..REQUESTS_PER_WORKER).map(move |i| synthetic_outcome(w, i).duration))
        .sum();
    assert_eq!(summary.sum, expected_sum);

    let expected_bytes: u64 = (0..WORKERS)
        .flat_map(|w| (0..REQUESTS_PER_WORKER).map(move |i| synthetic_outcome(w, i).size))
        .sum();
    assert_eq!(summary.transferred, expected_bytes);

    assert!(summary.times.windows(2).all(|w| w[0] <= w[1]));
    assert!(!encoded.is_empty());
    assert_eq!(Summary::decode(&encoded).unwrap(), summary);
}

#[tokio::test]
async fn test_distributed_merge_is_order_independent() {
    let mut encoded = Vec::new();
    for seed in 0..3 {
        encoded.push(run_instance(seed * 100).await.1);
    }

    let orders = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    let mut results = Vec::new();
    for order in orders {
        let (tx, mut rx) = mpsc::channel(4);
        for index in order {
            tx.send(encoded[index].clone()).await.unwrap();
        }

        let mut merger = Merger::with_reporter(run_config(), Reporter::new(Vec::new()));
        let combined = merger.merge(&mut rx).expect("partials pending");
        let output = String::from_utf8(merger.reporter().sink().clone()).unwrap();
        assert!(output.contains("Total number of calls:\t\t6000"));
        results.push(combined);
    }

    let first = &results[0];
    for other in &results[1..] {
        assert_eq!(other.times, first.times);
        assert_eq!(other.sum, first.sum);
        assert_eq!(other.transferred, first.transferred);
        assert_eq!(
            (other.resp200, other.resp300, other.resp400, other.resp500),
            (first.resp200, first.resp300, first.resp400, first.resp500)
        );
        assert_eq!(other.duration, first.duration);
    }
}

#[tokio::test]
async fn test_merge_of_empty_channel_prints_nothing() {
    let (tx, mut rx) = mpsc::channel::<String>(1);
    let mut merger = Merger::with_reporter(run_config(), Reporter::new(Vec::new()));

    assert!(merger.merge(&mut rx).is_none());
    assert!(merger.reporter().sink().is_empty());

    // A later partial is still picked up by the next merge
    let (_, encoded) = run_instance(7).await;
    tx.send(encoded).await.unwrap();
    let combined = merger.merge(&mut rx).unwrap();
    assert_eq!(combined.count(), (WORKERS * REQUESTS_PER_WORKER) as usize);
}

#[tokio::test]
async fn test_merge_tolerates_corrupt_partial() {
    let (_, good) = run_instance(1).await;
    let (tx, mut rx) = mpsc::channel(4);
    tx.send(good.clone()).await.unwrap();
    tx.send(good[..good.len() / 2].to_string()).await.unwrap();

    let mut merger = Merger::with_reporter(run_config(), Reporter::new(Vec::new()));
    let combined = merger.merge(&mut rx).unwrap();

    let original = Summary::decode(&good).unwrap();
    assert_eq!(combined.times, original.times);
    assert_eq!(combined.duration, original.duration);
    assert_eq!(
        combined.avg_duration,
        Duration::from_nanos((original.duration.as_nanos() / 2) as u64)
    );
}
