//! Stream sink implementation
//!
//! Writes the message sequence, concatenated in order and newline-terminated,
//! to a writable target. Writes are serialized by a lock, so one stream sink
//! may be shared by many threads.
//!
//! Write failures are reported on stderr and otherwise ignored; logging never
//! fails the caller.

use crate::core::{LoggerError, Message, Result, Sink};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Process-wide standard stream
///
/// Borrowed for the whole program run; a sink writing to it never closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalStream {
    Stdout,
    Stderr,
}

/// Where a stream-backed sink writes
pub enum StreamTarget {
    /// Writer owned by the sink, flushed when the sink is dropped
    Owned(Mutex<Box<dyn Write + Send>>),
    /// Writer shared with other owners
    Shared(Arc<Mutex<dyn Write + Send>>),
    /// Non-owning handle to a process-wide stream
    Global(GlobalStream),
}

impl StreamTarget {
    pub fn owned<W: Write + Send + 'static>(writer: W) -> Self {
        StreamTarget::Owned(Mutex::new(Box::new(writer)))
    }

    pub fn shared<W: Write + Send + 'static>(writer: Arc<Mutex<W>>) -> Self {
        let writer: Arc<Mutex<dyn Write + Send>> = writer;
        StreamTarget::Shared(writer)
    }

    /// Open `path` for appending, creating it if needed
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log stream",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::owned(BufWriter::new(file)))
    }

    /// Write `text` in one locked operation
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        match self {
            StreamTarget::Owned(writer) => writer.lock().write_all(text.as_bytes()),
            StreamTarget::Shared(writer) => writer.lock().write_all(text.as_bytes()),
            StreamTarget::Global(GlobalStream::Stdout) => {
                io::stdout().lock().write_all(text.as_bytes())
            }
            StreamTarget::Global(GlobalStream::Stderr) => {
                io::stderr().lock().write_all(text.as_bytes())
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            StreamTarget::Owned(writer) => writer.lock().flush(),
            StreamTarget::Shared(writer) => writer.lock().flush(),
            StreamTarget::Global(GlobalStream::Stdout) => io::stdout().flush(),
            StreamTarget::Global(GlobalStream::Stderr) => io::stderr().flush(),
        }
    }

    /// Write and report failures on stderr
    pub(crate) fn write_or_report(&self, text: &str, sink_name: &str) {
        if let Err(e) = self.write_str(text) {
            eprintln!("[LOGGER ERROR] {} sink write failed: {}", sink_name, e);
        }
    }
}

impl From<GlobalStream> for StreamTarget {
    fn from(stream: GlobalStream) -> Self {
        StreamTarget::Global(stream)
    }
}

pub struct StreamSink {
    target: StreamTarget,
}

impl StreamSink {
    /// Sink owning `writer`
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_target(StreamTarget::owned(writer))
    }

    /// Sink writing to a writer shared with other owners
    ///
    /// # Examples
    ///
    /// ```
    /// use parking_lot::Mutex;
    /// use rust_pipeline_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let buffer = Arc::new(Mutex::new(Vec::new()));
    /// let logger = Logger::from_sink(StreamSink::shared(buffer.clone()));
    /// logger.log(("hello", ' ', "world", '!'));
    /// assert_eq!(buffer.lock().as_slice(), b"hello world!\n");
    /// ```
    pub fn shared<W: Write + Send + 'static>(writer: Arc<Mutex<W>>) -> Self {
        Self::with_target(StreamTarget::shared(writer))
    }

    /// Sink borrowing a process-wide stream
    pub fn global(stream: GlobalStream) -> Self {
        Self::with_target(stream.into())
    }

    pub fn stdout() -> Self {
        Self::global(GlobalStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::global(GlobalStream::Stderr)
    }

    /// Sink appending to the file at `path`
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_target(StreamTarget::file(path)?))
    }

    pub fn with_target(target: StreamTarget) -> Self {
        Self { target }
    }

    fn render(message: &Message) -> String {
        let mut line = message.text();
        line.push('\n');
        line
    }
}

impl Sink for StreamSink {
    fn take(&self, message: Message) {
        self.target.write_or_report(&Self::render(&message), "stream");
    }

    fn flush(&self) -> Result<()> {
        self.target.flush()?;
        Ok(())
    }
}

impl Drop for StreamSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches an owned writer
        if let StreamTarget::Owned(_) = self.target {
            let _ = self.target.flush();
        }
    }
}
