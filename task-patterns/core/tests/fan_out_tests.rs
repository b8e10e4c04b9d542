use task_patterns_core::{FanOut, PatternError};

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

#[tokio::test]
async fn test_squares_all_inputs() {
    let fan_out = FanOut::new(2);
    let results = fan_out
        .run(vec![1, 2, 3, 4, 5], |n| n * n)
        .await
        .unwrap();

    assert_eq!(sorted(results), vec![1, 4, 9, 16, 25]);
}

#[tokio::test]
async fn test_single_worker() {
    let fan_out = FanOut::new(1);
    let results = fan_out.run((1..=10).collect(), |n| n * n).await.unwrap();

    assert_eq!(
        sorted(results),
        (1..=10).map(|n| n * n).collect::<Vec<i64>>()
    );
}

#[tokio::test]
async fn test_more_workers_than_inputs() {
    let fan_out = FanOut::new(16);
    let results = fan_out.run(vec![2, 3], |n| n * n).await.unwrap();

    assert_eq!(sorted(results), vec![4, 9]);
}

#[tokio::test]
async fn test_empty_input_yields_empty_output() {
    let fan_out = FanOut::new(4);
    let results = fan_out.run(Vec::new(), |n| n * n).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_zero_workers_rejected() {
    let fan_out = FanOut::new(0);
    let result = fan_out.run(vec![1, 2, 3], |n| n * n).await;

    assert_eq!(result, Err(PatternError::NoWorkers));
}

#[tokio::test]
async fn test_worker_panic_reported_as_error() {
    let fan_out = FanOut::new(3);
    let result = fan_out
        .run((1..=10).collect(), |n| {
            if n == 4 {
                panic!("transform failed");
            }
            n * n
        })
        .await;

    assert!(
        matches!(result, Err(PatternError::WorkerPanicked { .. })),
        "A panicking worker must surface as a tagged error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_cancelled_before_start_reports_cancellation() {
    let fan_out = FanOut::new(2);
    fan_out.cancellation_token().cancel();

    let result = fan_out.run((1..=10).collect(), |n| n * n).await;

    assert_eq!(result, Err(PatternError::Cancelled));
}

#[tokio::test]
async fn test_rerun_yields_same_multiset() {
    let fan_out = FanOut::new(4);
    let inputs: Vec<i64> = (1..=40).collect();

    let first = fan_out.run(inputs.clone(), |n| n * n).await.unwrap();
    let second = fan_out.run(inputs, |n| n * n).await.unwrap();

    assert_eq!(sorted(first), sorted(second));
}
