//! Sink implementations
//!
//! Decorators ([`PrioritySink`], [`PrefixSink`], [`MetaFormatSink`],
//! [`TemplateSink`]) wrap exactly one downstream sink; [`FanOutSink`]
//! broadcasts to many; [`StreamSink`], [`DebugSink`], [`JsonSink`] and
//! [`NullSink`] terminate a chain.

pub mod builder;
pub mod debug;
pub mod fan_out;
pub mod json;
pub mod meta_format;
pub mod null;
pub mod prefix;
pub mod priority;
pub mod stream;
pub mod template;

pub use builder::SinkBuilder;
pub use debug::DebugSink;
pub use fan_out::FanOutSink;
pub use json::JsonSink;
pub use meta_format::MetaFormatSink;
pub use null::NullSink;
pub use prefix::{PrefixSink, PrefixedLogger};
pub use priority::PrioritySink;
pub use stream::{GlobalStream, StreamSink, StreamTarget};
pub use template::TemplateSink;

// Re-export the trait for convenience
pub use crate::core::Sink;
