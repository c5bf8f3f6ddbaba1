//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    gatherer::{Gatherer, LogArgs},
    loggable::Loggable,
    message::{keys, Message},
    priority::Priority,
    sink::{SharedSink, Sink},
    template::Template,
    timestamp,
};
use crate::sinks::{PrefixSink, PrioritySink};
use std::fmt;
use std::sync::Arc;

/// Logging facade bound to one root sink
///
/// Cloning a logger is cheap and the clone shares the same sink chain.
/// Every submitted message is stamped with `TimeStamp` and `ThreadId`
/// metadata before it reaches the sink.
#[derive(Clone)]
pub struct Logger {
    sink: SharedSink,
}

impl Logger {
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn from_sink<S: Sink + 'static>(sink: S) -> Self {
        Self::new(Arc::new(sink))
    }

    /// Log a plain argument list.
    ///
    /// `args` is a tuple of up to 12 [`Loggable`] values, metadata included.
    /// Longer messages go through [`Logger::stream`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::prelude::*;
    ///
    /// let logger = Logger::from_sink(NullSink);
    /// logger.log(("x", 'c', "x", 1, 1.0));
    /// logger.log(("Result is ", 10, Priority::Warning));
    /// ```
    pub fn log<A: LogArgs>(&self, args: A) {
        self.submit(Gatherer::gather(args));
    }

    /// Log `args` against `template`.
    ///
    /// # Panics
    ///
    /// Panics if the template's placeholder bound differs from the number of
    /// sequence arguments. Metadata arguments such as [`Priority`] do not
    /// count. The [`log!`](crate::log) macro performs the same check at
    /// compile time for constant templates. The check runs before the message
    /// reaches any sink.
    pub fn log_template<A: LogArgs>(&self, template: &Template, args: A) {
        self.submit(Gatherer::gather_template(template, args));
    }

    /// Start a streaming accumulation that is submitted exactly once, when the
    /// returned [`LogStream`] is finished or goes out of scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::prelude::*;
    ///
    /// let logger = Logger::from_sink(NullSink);
    /// let test = String::from("foo");
    /// logger.stream().append("Wow!").append(' ').append(&test);
    /// ```
    pub fn stream(&self) -> LogStream<'_> {
        LogStream {
            logger: self,
            gatherer: Some(Gatherer::new()),
        }
    }

    /// Stamp process metadata into `message` and hand it to the sink
    pub fn submit(&self, mut message: Message) {
        message.set_meta(keys::TIME_STAMP, timestamp::now());
        message.set_meta(keys::THREAD_ID, timestamp::current_thread_id());
        self.sink.take(message);
    }

    /// Logger sharing this chain, with every message tagged `priority`
    #[must_use]
    pub fn with_priority(&self, priority: Priority) -> Logger {
        Logger::from_sink(PrioritySink::new(Arc::clone(&self.sink), priority))
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_pipeline_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .sink(SinkBuilder::null().build())
    ///     .priority(Priority::Debug)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Scoped accumulator returned by [`Logger::stream`]
///
/// Values are appended in order; the message is submitted once, either by
/// [`LogStream::finish`] or when the stream is dropped (including early
/// returns and unwinding).
#[must_use = "a log stream is submitted when dropped; bind it or chain appends"]
pub struct LogStream<'a> {
    logger: &'a Logger,
    gatherer: Option<Gatherer>,
}

impl LogStream<'_> {
    pub fn append<T: Loggable>(&mut self, value: T) -> &mut Self {
        if let Some(gatherer) = self.gatherer.as_mut() {
            gatherer.push(&value);
        }
        self
    }

    /// Submit now instead of at the end of the scope
    pub fn finish(mut self) {
        self.submit();
    }

    fn submit(&mut self) {
        if let Some(gatherer) = self.gatherer.take() {
            self.logger.submit(gatherer.finish());
        }
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        self.submit();
    }
}

/// Builder for Logger
pub struct LoggerBuilder {
    sink: Option<SharedSink>,
    priority: Option<Priority>,
    prefix: Option<String>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            sink: None,
            priority: None,
            prefix: None,
        }
    }

    /// Set the root sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Tag every message with `priority`
    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Tag every message with `prefix`
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Build the Logger
    ///
    /// Fails if no sink was configured.
    pub fn build(self) -> Result<Logger> {
        let mut sink = self
            .sink
            .ok_or_else(|| LoggerError::config("LoggerBuilder", "no sink configured"))?;

        if let Some(priority) = self.priority {
            sink = Arc::new(PrioritySink::new(sink, priority));
        }
        if let Some(prefix) = self.prefix {
            sink = Arc::new(PrefixSink::new(sink, prefix));
        }

        Ok(Logger::new(sink))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
