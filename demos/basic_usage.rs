//! Basic usage example
//!
//! Demonstrates synchronous logging to the console and to a JSON file.
//!
//! Run with: cargo run --example basic_usage

use miraveja_log::prelude::*;

fn main() -> Result<()> {
    let registry = LoggerRegistry::new();

    // Console logger with the default format
    let config = LoggerConfig::builder("app").level(LogLevel::Debug).build()?;
    let logger = registry.get_or_create(&config)?;

    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    // Structured fields
    logger.info_with(
        "User logged in",
        LogOptions::new()
            .with_field("user_id", 123)
            .with_field("ip", "192.168.1.10"),
    );

    // JSON file logger; one JSON object per line
    let json_config = LoggerConfig::builder("app-json")
        .output_target(OutputTarget::Json)
        .directory("logs")
        .filename("app.jsonl")
        .build()?;
    std::fs::create_dir_all("logs")?;
    let json_logger = registry.get_or_create(&json_config)?;

    json_logger.info_with(
        "payment processed",
        LogOptions::new().with_field("amount", 42.5),
    );
    println!("Wrote structured record to logs/app.jsonl");

    // Same name, second request: the cached instance is returned and the
    // new configuration is ignored.
    let again = registry.get_or_create(&LoggerConfig::builder("app").build()?)?;
    again.info("Still the first logger");

    Ok(())
}
