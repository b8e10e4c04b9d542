use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::time::Instant;
use task_patterns_core::{FanOut, Job, Pipeline, RateLimiter, TokioTimer, WorkerPool};

#[derive(Debug, Deserialize)]
struct Config {
    num_jobs: usize,
    num_workers: usize,
    fan_out_workers: usize,
    requests_per_second: u32,
    stage_buffer: usize,
}

impl Config {
    fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let start_time = Instant::now();

    // Load configuration from JSON file
    let config = match Config::load("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config.json: {}", e);
            eprintln!("Using default configuration...");
            Config {
                num_jobs: 10,
                num_workers: 3,
                fan_out_workers: 2,
                requests_per_second: 2,
                stage_buffer: 16,
            }
        }
    };

    println!("=== TASK PATTERNS DEMO ===");
    println!("Configuration:");
    println!("  - Jobs: {}", config.num_jobs);
    println!("  - Pool workers: {}", config.num_workers);
    println!("  - Fan-out workers: {}", config.fan_out_workers);
    println!("  - Dispatch rate: {}/s", config.requests_per_second);
    println!("  - Stage buffer: {}", config.stage_buffer);

    let mut rng = rand::rng();
    let jobs: Vec<Job> = (0..config.num_jobs)
        .map(|_| rng.random_range(1..=100))
        .collect();
    println!("\nGenerated {} jobs", jobs.len());

    let pool = WorkerPool::new(config.num_workers);
    let fan_out = FanOut::new(config.fan_out_workers);

    // Setup Ctrl+C handler to cancel in-flight runs
    let pool_token = pool.cancellation_token();
    let fan_out_token = fan_out.cancellation_token();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n\n=== Ctrl+C received, cancelling in-flight work ===");
        pool_token.cancel();
        fan_out_token.cancel();
    });

    // WORKER POOL - fixed pool doubling each job
    println!("\n=== WORKER POOL ===");
    match pool.run(jobs.clone(), |job| job * 2).await {
        Ok(results) => println!("Worker pool results: {:?}", results),
        Err(e) => eprintln!("Worker pool failed: {}", e),
    }

    // PIPELINE - generate -> square -> filter-even, order preserving
    println!("\n=== PIPELINE ===");
    let pipeline = Pipeline::with_stage_buffer(config.stage_buffer);
    match pipeline.run(jobs.clone()).await {
        Ok(results) => println!("Pipeline results (even squares): {:?}", results),
        Err(e) => eprintln!("Pipeline failed: {}", e),
    }

    // FAN OUT - producer plus shared-queue consumers squaring each input
    println!("\n=== FAN OUT ===");
    match fan_out.run(jobs, |n| n * n).await {
        Ok(results) => println!("Fan-out results: {:?}", results),
        Err(e) => eprintln!("Fan-out failed: {}", e),
    }

    // RATE LIMITER - throttled serial dispatch
    println!("\n=== RATE LIMITER ===");
    match RateLimiter::new(config.requests_per_second, TokioTimer) {
        Ok(limiter) => {
            let tasks: Vec<String> = (1..=5).map(|i| format!("task{}", i)).collect();
            let dispatched = limiter
                .dispatch(&tasks, |index, task| {
                    println!("Processing task {}: {}", index, task);
                })
                .await;
            println!("Dispatched {} tasks", dispatched);
        }
        Err(e) => eprintln!("Rate limiter rejected configuration: {}", e),
    }

    let elapsed = start_time.elapsed();
    println!("\n=== DEMO COMPLETE ===");
    println!("Total time: {:.2}s", elapsed.as_secs_f64());
}
