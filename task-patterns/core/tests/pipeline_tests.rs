use task_patterns_core::{PatternError, Pipeline};

#[tokio::test]
async fn test_even_squares_in_input_order() {
    let pipeline = Pipeline::new();
    let results = pipeline.run(vec![1, 2, 3, 4, 5]).await.unwrap();

    assert_eq!(results, vec![4, 16]);
}

#[tokio::test]
async fn test_order_preserved_for_larger_input() {
    let pipeline = Pipeline::new();
    let inputs: Vec<i64> = (1..=20).collect();

    let results = pipeline.run(inputs.clone()).await.unwrap();

    let expected: Vec<i64> = inputs
        .iter()
        .map(|n| n * n)
        .filter(|square| square % 2 == 0)
        .collect();
    assert_eq!(results, expected, "Single-lane stages must preserve order");
}

#[tokio::test]
async fn test_empty_input_yields_empty_output() {
    let pipeline = Pipeline::new();
    let results = pipeline.run(Vec::new()).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_all_odd_inputs_filtered_out() {
    // Odd inputs square to odd values, so nothing survives the filter
    let pipeline = Pipeline::new();
    let results = pipeline.run(vec![1, 3, 5, 7]).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_minimal_stage_buffer_still_completes() {
    // Buffer of one forces backpressure at every stage boundary
    let pipeline = Pipeline::with_stage_buffer(1);
    let inputs: Vec<i64> = (1..=50).collect();

    let results = pipeline.run(inputs).await.unwrap();

    assert_eq!(results.len(), 25);
    assert_eq!(results[0], 4);
    assert_eq!(results[24], 2500);
}

#[tokio::test]
async fn test_stage_panic_reported_with_stage_name() {
    // i64::MAX overflows when squared, panicking the square stage task
    // under debug assertions instead of taking the process down
    let pipeline = Pipeline::new();
    let result = pipeline.run(vec![2, i64::MAX]).await;

    assert_eq!(
        result,
        Err(PatternError::StagePanicked { stage: "square" }),
        "A panicking stage must surface as a tagged error naming the stage"
    );
}

#[tokio::test]
async fn test_rerun_yields_identical_sequence() {
    let pipeline = Pipeline::new();
    let inputs: Vec<i64> = (1..=30).collect();

    let first = pipeline.run(inputs.clone()).await.unwrap();
    let second = pipeline.run(inputs).await.unwrap();

    assert_eq!(first, second);
}
