//! Format template example
//!
//! Demonstrates compile-time checked templates, runtime parsed templates and
//! how a template travels unevaluated until a sink renders it.
//!
//! Run with: cargo run --example templates

use rust_pipeline_logger::prelude::*;
use rust_pipeline_logger::{info, log};

const REQUEST: Template = Template::literal("${1:method} ${2:path} -> ${3:status}");

fn main() -> Result<()> {
    println!("=== Rust Pipeline Logger - Templates Example ===\n");

    let logger = Logger::new(
        SinkBuilder::from_sink(StreamSink::stdout())
            .meta_format()
            .evaluate_templates()
            .build(),
    );

    println!("1. Checked template literals:");
    log!(logger, fmt = "Two ${2} ${1} log", "one", "two");
    info!(logger, fmt = "User ${1:id} performed ${2:action}", 42, "login");
    logger.log_template(&REQUEST, ("GET", "/api/users", 200));

    println!("\n2. Runtime templates:");
    let text = String::from("Loaded ${1:count} entries from ${2:file}");
    let template = Template::parse(text)?;
    logger.log_template(&template, (12, "config.toml"));

    match Template::parse("Broken ${1") {
        Ok(_) => println!("   unexpected success"),
        Err(e) => log!(logger, "rejected template: ", Shown(e)),
    }

    println!("\n3. Raw messages before evaluation:");
    let raw = Logger::from_sink(DebugSink::with_target(GlobalStream::Stdout.into()));
    raw.log_template(&REQUEST, ("POST", "/api/login", 401));

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
