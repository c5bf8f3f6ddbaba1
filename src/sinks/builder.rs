//! Bottom-up assembly of sink chains
//!
//! Start from a terminal sink and wrap it with decorators; the last decorator
//! added is the first to see each message.
//!
//! # Example
//!
//! ```
//! use rust_pipeline_logger::prelude::*;
//!
//! // console <- meta header <- template evaluation
//! let console = SinkBuilder::console()
//!     .meta_format()
//!     .evaluate_templates()
//!     .build();
//!
//! let root = FanOutSink::new()
//!     .with_child(console)
//!     .with_child(SinkBuilder::null().build());
//! let logger = Logger::from_sink(root);
//! ```

use super::{
    DebugSink, JsonSink, MetaFormatSink, NullSink, PrefixSink, PrioritySink, StreamSink,
    TemplateSink,
};
use crate::core::{Priority, SharedSink, Sink};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

pub struct SinkBuilder {
    sink: SharedSink,
}

impl SinkBuilder {
    /// Start from an existing sink
    pub fn from_sink<S: Sink + 'static>(sink: S) -> Self {
        Self::from_shared(Arc::new(sink))
    }

    pub fn from_shared(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Stream sink owning `writer`
    pub fn stream<W: Write + Send + 'static>(writer: W) -> Self {
        Self::from_sink(StreamSink::new(writer))
    }

    /// Stream sink writing to a shared writer
    pub fn shared_stream<W: Write + Send + 'static>(writer: Arc<Mutex<W>>) -> Self {
        Self::from_sink(StreamSink::shared(writer))
    }

    /// Stream sink on stderr
    pub fn console() -> Self {
        Self::from_sink(StreamSink::stderr())
    }

    pub fn null() -> Self {
        Self::from_sink(NullSink)
    }

    pub fn debug() -> Self {
        Self::from_sink(DebugSink::new())
    }

    pub fn json<W: Write + Send + 'static>(writer: W) -> Self {
        Self::from_sink(JsonSink::new(writer))
    }

    /// Wrap the chain built so far
    #[must_use = "builder methods return a new value"]
    pub fn decorate<D, F>(self, wrap: F) -> Self
    where
        D: Sink + 'static,
        F: FnOnce(SharedSink) -> D,
    {
        Self::from_sink(wrap(self.sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn meta_format(self) -> Self {
        self.decorate(MetaFormatSink::new)
    }

    #[must_use = "builder methods return a new value"]
    pub fn evaluate_templates(self) -> Self {
        self.decorate(TemplateSink::new)
    }

    #[must_use = "builder methods return a new value"]
    pub fn priority(self, priority: Priority) -> Self {
        self.decorate(|inner| PrioritySink::new(inner, priority))
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.decorate(|inner| PrefixSink::new(inner, prefix))
    }

    /// Root of the assembled chain
    pub fn build(self) -> SharedSink {
        self.sink
    }
}
