//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines written from many threads never interleave
//! - Every message reaches every fan-out child
//! - Prefixed children can be created and used across threads

use parking_lot::Mutex;
use rust_pipeline_logger::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

/// Counts messages and checks each arrives evaluated
#[derive(Default)]
struct CountingSink {
    count: AtomicUsize,
}

impl Sink for CountingSink {
    fn take(&self, message: Message) {
        assert!(!message.has_template());
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_concurrent_lines_stay_intact() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::new(
        SinkBuilder::shared_stream(buffer.clone())
            .evaluate_templates()
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log_template(&Template::literal("thread ${1} message ${2}"), (t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let text = String::from_utf8(buffer.lock().clone()).expect("utf8 output");
    let lines: HashSet<&str> = text.lines().collect();
    assert_eq!(text.lines().count(), THREADS * PER_THREAD);
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    for t in 0..THREADS {
        assert!(lines.contains(format!("thread {} message 0", t).as_str()));
        assert!(lines.contains(format!("thread {} message {}", t, PER_THREAD - 1).as_str()));
    }
}

#[test]
fn test_concurrent_fan_out_delivers_everywhere() {
    let children: Vec<Arc<CountingSink>> = (0..4).map(|_| Arc::new(CountingSink::default())).collect();
    let root: FanOutSink = children
        .iter()
        .map(|c| SinkBuilder::from_shared(c.clone()).evaluate_templates().build())
        .collect();
    let logger = Logger::from_sink(root);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log_template(&Template::literal("${1}/${2}"), (t, i));
                }
            });
        }
    });

    for child in &children {
        assert_eq!(child.count.load(Ordering::Relaxed), THREADS * PER_THREAD);
    }
}

#[test]
fn test_concurrent_streams_and_prefixes_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let sink = SinkBuilder::from_sink(StreamSink::file(&log_file).expect("Failed to create sink"))
        .meta_format()
        .evaluate_templates()
        .build();
    let root = PrefixedLogger::new(sink);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let worker = root.child(&format!("worker{}", t));
            scope.spawn(move || {
                for i in 0..PER_THREAD / 10 {
                    worker.stream().append("step ").append(i).append(Priority::Debug);
                }
            });
        }
    });
    root.logger().flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * (PER_THREAD / 10));
    for line in &lines {
        assert!(line.contains("   debug [root.worker"), "line {:?}", line);
        assert!(line.contains("] -- step "), "line {:?}", line);
    }
}
