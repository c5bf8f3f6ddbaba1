//! Integration tests for the logging pipeline
//!
//! These tests verify:
//! - Gathering of plain and template-headed messages
//! - Metadata stamping and tagging along sink chains
//! - Fan-out independence
//! - Hierarchical prefixes
//! - End-to-end output to streams and files

use parking_lot::Mutex;
use rust_pipeline_logger::prelude::*;
use rust_pipeline_logger::{error, log};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Keeps every message it receives
#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<Message>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }
}

impl Sink for RecordingSink {
    fn take(&self, message: Message) {
        self.messages.lock().push(message);
    }
}

fn recording_logger() -> (Arc<RecordingSink>, Logger) {
    let recorder = Arc::new(RecordingSink::default());
    let logger = Logger::new(recorder.clone());
    (recorder, logger)
}

fn output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().clone()).expect("utf8 output")
}

#[test]
fn test_gathered_values_reach_sink_in_order() {
    let (recorder, logger) = recording_logger();
    logger.log(("x", 'c', String::from("x"), 1, 1.5, true));

    let messages = recorder.messages();
    assert_eq!(messages.len(), 1);
    let values: Vec<&str> = messages[0].sequence.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, ["x", "c", "x", "1", "1.5", "true"]);
    assert_eq!(messages[0].text(), "xcx11.5true");
}

#[test]
fn test_template_round_trip() {
    let (recorder, logger) = recording_logger();
    let template = Template::literal("Two ${2} ${1} log");
    logger.log_template(&template, ("one", "two"));

    let messages = recorder.messages();
    let msg = &messages[0];
    assert!(msg.has_template());
    assert_eq!(msg.sequence[0].type_tag, keys::TEMPLATE);
    assert_eq!(msg.sequence[0].value, "Two ${2} ${1} log");
    assert_eq!(msg.sequence[1].value, "one");
    assert_eq!(msg.sequence[2].value, "two");

    let evaluated = TemplateSink::evaluate(msg).unwrap();
    assert_eq!(evaluated.as_deref(), Some("Two two one log"));
}

#[test]
fn test_priority_value_becomes_metadata() {
    let (recorder, logger) = recording_logger();
    logger.log(("Result is ", 10, Priority::Warning));

    let messages = recorder.messages();
    assert_eq!(messages[0].meta(keys::PRIORITY), Some("warning"));
    assert_eq!(messages[0].sequence.len(), 2);
    assert_eq!(messages[0].text(), "Result is 10");
}

#[test]
fn test_empty_message_is_stamped() {
    let (recorder, logger) = recording_logger();
    logger.log(());

    let messages = recorder.messages();
    assert!(messages[0].sequence.is_empty());
    assert!(messages[0].meta(keys::TIME_STAMP).is_some());
    assert!(messages[0].meta(keys::THREAD_ID).is_some());
    assert_eq!(messages[0].meta(keys::PRIORITY), None);
}

#[test]
fn test_fan_out_children_are_independent() {
    let plain = Arc::new(RecordingSink::default());
    let evaluated = Arc::new(RecordingSink::default());
    let root = FanOutSink::new()
        .with_child(plain.clone())
        .with_child(SinkBuilder::from_shared(evaluated.clone()).evaluate_templates().build());
    let logger = Logger::from_sink(root);

    logger.log_template(&Template::literal("One ${1} log"), ("test",));

    let plain = plain.messages();
    let evaluated = evaluated.messages();
    assert_eq!(plain[0].sequence.len(), 2);
    assert!(plain[0].has_template());
    assert_eq!(evaluated[0].sequence.len(), 1);
    assert_eq!(evaluated[0].text(), "One test log");
    assert_eq!(plain[0].meta, evaluated[0].meta);
}

#[test]
fn test_priority_tag_with_template_through_fan_out() {
    let plain = Arc::new(RecordingSink::default());
    let evaluated = Arc::new(RecordingSink::default());
    let root = FanOutSink::new()
        .with_child(plain.clone())
        .with_child(SinkBuilder::from_shared(evaluated.clone()).evaluate_templates().build());
    let logger = Logger::from_sink(root);

    logger.log_template(&Template::literal("value ${1}"), ("x", Priority::Warning));
    log!(logger, fmt = "value ${1}", Priority::Error, "y");

    let evaluated = evaluated.messages();
    assert_eq!(evaluated[0].text(), "value x");
    assert_eq!(evaluated[0].meta(keys::PRIORITY), Some("warning"));
    assert_eq!(evaluated[1].text(), "value y");
    assert_eq!(evaluated[1].meta(keys::PRIORITY), Some("error"));
    assert_eq!(plain.messages().len(), 2);
}

#[test]
fn test_unsatisfied_template_reaches_no_sink() {
    let plain = Arc::new(RecordingSink::default());
    let evaluated = Arc::new(RecordingSink::default());
    let root = FanOutSink::new()
        .with_child(plain.clone())
        .with_child(SinkBuilder::from_shared(evaluated.clone()).evaluate_templates().build());
    let logger = Logger::from_sink(root);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.log_template(&Template::literal("value ${2}"), ("x", Priority::Warning));
    }));

    assert!(result.is_err());
    assert!(plain.messages().is_empty());
    assert!(evaluated.messages().is_empty());
}

#[test]
fn test_prefix_hierarchy() {
    let recorder = Arc::new(RecordingSink::default());
    let root = PrefixedLogger::new(recorder.clone());
    let nested = root.child("a").child("b");

    root.log(("top",));
    nested.log(("deep",));

    let messages = recorder.messages();
    assert_eq!(nested.prefix(), "root.a.b");
    assert_eq!(messages[0].meta(keys::PREFIX), Some("root"));
    assert_eq!(messages[1].meta(keys::PREFIX), Some("root.a.b"));
}

#[test]
fn test_cloned_loggers_share_sink() {
    let (recorder, logger) = recording_logger();
    let copy = logger.clone();

    logger.log(("a",));
    copy.log(("a",));

    let messages = recorder.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sequence, messages[1].sequence);
}

#[test]
fn test_full_chain_to_stream() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = SinkBuilder::shared_stream(buffer.clone())
        .meta_format()
        .evaluate_templates()
        .build();
    let logger = PrefixedLogger::new(sink).child("db");

    logger.log_template(&Template::literal("connected to ${1}:${2}"), ("localhost", 5432));
    log!(logger, "plain ", 1, Priority::Error);

    let text = output(&buffer);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].ends_with("[root.db] -- connected to localhost:5432"),
        "line {:?}",
        lines[0]
    );
    assert!(lines[1].ends_with("   error [root.db] -- plain 1"), "line {:?}", lines[1]);

    let thread_id = rust_pipeline_logger::core::timestamp::current_thread_id();
    assert!(lines[0].contains(&format!("<{}>", thread_id)));
}

#[test]
fn test_stream_output_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("pipeline.log");

    let sink = StreamSink::file(&log_file).expect("Failed to create sink");
    let logger = Logger::new(SinkBuilder::from_sink(sink).evaluate_templates().build());

    for i in 0..10 {
        logger.log_template(&Template::literal("entry ${1}"), (i,));
    }
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "entry 0");
    assert_eq!(lines[9], "entry 9");
}

#[test]
fn test_file_sink_appends_to_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");
    fs::write(&log_file, "existing\n").expect("Failed to seed log file");

    {
        let logger = Logger::from_sink(StreamSink::file(&log_file).expect("Failed to create sink"));
        logger.log(("appended",));
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "existing\nappended\n");
}

#[test]
fn test_file_sink_reports_bad_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("no_such_dir").join("x.log");

    let err = StreamSink::file(&missing).err().expect("open should fail");
    assert!(matches!(err, LoggerError::IoOperation { .. }));
}

#[test]
fn test_json_sink_lines() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::from_sink(JsonSink::shared(buffer.clone()));

    error!(logger, fmt = "disk ${1} full", "/var");

    let text = output(&buffer);
    let parsed: Message = serde_json::from_str(text.trim_end()).expect("valid json");
    assert_eq!(parsed.meta(keys::PRIORITY), Some("error"));
    assert!(parsed.has_template());
    assert_eq!(parsed.sequence[1].value, "/var");
}

#[test]
fn test_debug_sink_dump() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::from_sink(DebugSink::with_target(StreamTarget::shared(buffer.clone())));

    logger.log(("value", 7));

    let text = output(&buffer);
    assert!(text.starts_with("{ThreadId, "));
    assert!(text.contains("{TimeStamp, "));
    assert!(text.ends_with("{str, value} {i32, 7} \n"), "dump {:?}", text);
}

#[test]
fn test_timer_laps() {
    let (recorder, logger) = recording_logger();
    let mut timer = Timer::new(logger);
    timer.lap("loaded");

    let messages = recorder.messages();
    assert_eq!(messages[0].text(), "Timer starts");
    assert!(messages[1].text().starts_with("loaded "));
    assert!(messages[1].text().ends_with(" ms"));
}

#[test]
fn test_parse_runtime_template() {
    let template = Template::parse(String::from("${1} of ${3}")).expect("valid template");
    assert_eq!(template.placeholder_count(), 3);

    let err = Template::parse("${x}").unwrap_err();
    assert!(matches!(
        err,
        LoggerError::Syntax(PlaceholderError::ExpectedNumber { position: 2 })
    ));
}
