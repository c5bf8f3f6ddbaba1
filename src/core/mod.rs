//! Core logger types and traits

pub mod error;
pub mod gatherer;
pub mod loggable;
pub mod logger;
pub mod message;
pub mod placeholder;
pub mod priority;
pub mod sink;
pub mod template;
pub mod timer;
pub mod timestamp;

pub use error::{LoggerError, PlaceholderError, Result};
pub use gatherer::{Gatherer, LogArgs};
pub use loggable::{Loggable, Shown};
pub use logger::{LogStream, Logger, LoggerBuilder};
pub use message::{keys, Message, TypedValue};
pub use placeholder::{placeholder_count, read_placeholder};
pub use priority::Priority;
pub use sink::{SharedSink, Sink};
pub use template::Template;
pub use timer::Timer;
