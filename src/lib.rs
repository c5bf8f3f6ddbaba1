//! # Rust Pipeline Logger
//!
//! A type-safe logging pipeline. Call sites gather heterogeneous values into
//! a [`Message`] of typed string entries plus metadata; the message then flows
//! through a chain of composable [`Sink`]s that tag, evaluate, format,
//! broadcast and finally write it.
//!
//! ## Features
//!
//! - **Checked Templates**: `${N}` placeholders are validated at compile time
//!   for literals, with arity checked against the supplied arguments
//! - **Composable Sinks**: Priority and prefix tagging, template evaluation,
//!   metadata headers and fan-out, assembled with [`SinkBuilder`]
//! - **Scoped Streaming**: [`LogStream`] submits exactly once when dropped
//! - **Thread Safe**: Loggers are cheap to clone and share one sink chain
//!
//! ## Example
//!
//! ```
//! use rust_pipeline_logger::prelude::*;
//!
//! let sink = SinkBuilder::console()
//!     .meta_format()
//!     .evaluate_templates()
//!     .build();
//! let logger = Logger::new(sink);
//!
//! logger.log(("Result is ", 10, Priority::Warning));
//! logger.log_template(&Template::literal("Two ${2} ${1} log"), ("one", "two"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        keys, Gatherer, LogArgs, LogStream, Loggable, Logger, LoggerBuilder, LoggerError, Message,
        PlaceholderError, Priority, Result, SharedSink, Shown, Sink, Template, Timer, TypedValue,
    };
    pub use crate::sinks::{
        DebugSink, FanOutSink, GlobalStream, JsonSink, MetaFormatSink, NullSink, PrefixSink,
        PrefixedLogger, PrioritySink, SinkBuilder, StreamSink, StreamTarget, TemplateSink,
    };
}

pub use self::core::{
    keys, placeholder_count, read_placeholder, Gatherer, LogArgs, LogStream, Loggable, Logger,
    LoggerBuilder, LoggerError, Message, PlaceholderError, Priority, Result, SharedSink, Shown,
    Sink, Template, Timer, TypedValue,
};
pub use sinks::{
    DebugSink, FanOutSink, GlobalStream, JsonSink, MetaFormatSink, NullSink, PrefixSink,
    PrefixedLogger, PrioritySink, SinkBuilder, StreamSink, StreamTarget, TemplateSink,
};
