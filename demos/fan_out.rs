//! Fan-out example
//!
//! Sends every message to a formatted console chain, a JSON lines file and a
//! debug dump, each seeing its own copy. Also shows hierarchical prefixes.
//!
//! Run with: cargo run --example fan_out

use rust_pipeline_logger::prelude::*;
use rust_pipeline_logger::{error, log};
use std::fs::File;

fn main() -> Result<()> {
    println!("=== Rust Pipeline Logger - Fan-out Example ===\n");

    let json_path = std::env::temp_dir().join("rust_pipeline_logger_fan_out.jsonl");
    let json_file = File::create(&json_path).map_err(|e| {
        LoggerError::io_operation("create", json_path.display().to_string(), e)
    })?;

    let root = FanOutSink::new()
        .with_child(
            SinkBuilder::from_sink(StreamSink::stdout())
                .decorate(|inner| MetaFormatSink::new(inner).with_colors(true))
                .evaluate_templates()
                .build(),
        )
        .with_child(SinkBuilder::json(json_file).build())
        .with_child(SinkBuilder::debug().build());

    let app = PrefixedLogger::new(std::sync::Arc::new(root));
    let db = app.child("db");
    let http = app.child("http");

    log!(app, "application starting");
    log!(db, fmt = "connected to ${1}:${2}", "localhost", 5432);
    log!(http, fmt = "listening on port ${1}", 8080);
    error!(db.child("pool"), "connection pool exhausted");

    app.logger().flush()?;
    println!("\nJSON lines written to {}", json_path.display());
    println!("=== Example completed successfully! ===");
    Ok(())
}
