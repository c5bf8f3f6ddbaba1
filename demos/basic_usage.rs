//! Basic logger usage example
//!
//! Demonstrates a console chain, priority tags, streaming and the lap timer.
//!
//! Run with: cargo run --example basic_usage

use rust_pipeline_logger::prelude::*;
use rust_pipeline_logger::{debug, error, info, log, warning};

fn main() -> Result<()> {
    println!("=== Rust Pipeline Logger - Basic Usage Example ===\n");

    // stderr <- metadata header <- template evaluation
    let sink = SinkBuilder::console()
        .meta_format()
        .evaluate_templates()
        .build();
    let logger = Logger::new(sink);

    println!("1. Logging plain values:");
    logger.log(("x", 'c', "x", 1, 1.0));
    log!(logger, "Server started on port ", 8080);

    println!("\n2. Logging with priorities:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "Result is ", 10);
    error!(logger, "This is an error message");
    logger.log(("Priority can also be passed inline", Priority::Warning));

    println!("\n3. Streaming values:");
    let name = String::from("foo");
    logger.stream().append("Wow!").append(' ').append(&name);
    {
        let mut stream = logger.stream();
        stream.append("Collected ");
        for i in 0..3 {
            stream.append(i).append(' ');
        }
        stream.append(Priority::Debug);
    }

    println!("\n4. Timing:");
    let mut timer = Timer::new(logger.clone());
    let sum: u64 = (0..1_000_000u64).sum();
    timer.lap("summed numbers");
    log!(logger, "sum = ", sum);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
