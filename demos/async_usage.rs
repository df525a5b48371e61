//! Async usage example
//!
//! Demonstrates the non-blocking call style: each operation offloads the
//! write to a worker and suspends only the calling task.
//!
//! Run with: cargo run --example async_usage

use miraveja_log::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let registry = LoggerRegistry::new();

    std::fs::create_dir_all("logs")?;
    let config = LoggerConfig::builder("async-app")
        .output_target(OutputTarget::File)
        .directory("logs")
        .filename("async.log")
        .build()?;

    let logger = registry.get_or_create_async(&config)?;

    logger.info("Application starting").await;

    // Concurrent tasks sharing one logger
    let mut tasks = Vec::new();
    for worker in 0..4 {
        let logger = Arc::clone(&logger);
        tasks.push(tokio::spawn(async move {
            for step in 0..3 {
                logger
                    .info(&format!("worker {} finished step {}", worker, step))
                    .await;
            }
        }));
    }
    for task in tasks {
        task.await.expect("worker task panicked");
    }

    // Exception context is rendered before the offload
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "backend down");
    logger
        .error_with("health check failed", LogOptions::new().with_error(&err))
        .await;

    logger.info("Application stopping").await;
    println!("Wrote async records to logs/async.log");

    Ok(())
}
