//! JSON lines sink

use super::stream::StreamTarget;
use crate::core::{Message, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Writes each message as one JSON object per line
///
/// # Example
///
/// ```
/// use parking_lot::Mutex;
/// use rust_pipeline_logger::prelude::*;
/// use rust_pipeline_logger::sinks::JsonSink;
/// use std::sync::Arc;
///
/// let buffer = Arc::new(Mutex::new(Vec::new()));
/// let logger = Logger::from_sink(JsonSink::shared(buffer.clone()));
/// logger.log(("started",));
///
/// let line = String::from_utf8(buffer.lock().clone()).unwrap();
/// let json: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
/// assert_eq!(json["sequence"][0]["value"], "started");
/// ```
pub struct JsonSink {
    target: StreamTarget,
}

impl JsonSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_target(StreamTarget::owned(writer))
    }

    pub fn shared<W: Write + Send + 'static>(writer: Arc<Mutex<W>>) -> Self {
        Self::with_target(StreamTarget::shared(writer))
    }

    pub fn with_target(target: StreamTarget) -> Self {
        Self { target }
    }

    pub fn render(message: &Message) -> Result<String> {
        let mut line = serde_json::to_string(message)?;
        line.push('\n');
        Ok(line)
    }
}

impl Sink for JsonSink {
    fn take(&self, message: Message) {
        match Self::render(&message) {
            Ok(line) => self.target.write_or_report(&line, "json"),
            Err(e) => eprintln!("[LOGGER ERROR] json sink serialization failed: {}", e),
        }
    }

    fn flush(&self) -> Result<()> {
        self.target.flush()?;
        Ok(())
    }
}

impl Drop for JsonSink {
    fn drop(&mut self) {
        if let StreamTarget::Owned(_) = self.target {
            let _ = self.target.flush();
        }
    }
}
