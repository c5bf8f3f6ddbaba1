//! Logging macros for call sites.
//!
//! `log!` takes a logger and a list of loggable values. With a leading
//! `fmt = ...` constant template string, the template syntax and the number
//! of substitution values are both checked at compile time. Metadata values
//! such as [`Priority`](crate::Priority) are not substitution values.
//!
//! # Examples
//!
//! ```
//! use rust_pipeline_logger::prelude::*;
//! use rust_pipeline_logger::{info, log};
//!
//! let logger = Logger::new(SinkBuilder::null().evaluate_templates().build());
//!
//! // Positional values
//! log!(logger, "Server started on port ", 8080);
//!
//! // Checked template
//! log!(logger, fmt = "User ${1:id} performed ${2:action}", 42, "login");
//!
//! // Tagged with a priority
//! info!(logger, fmt = "Processing ${1} items", 100);
//! ```
//!
//! ```compile_fail
//! use rust_pipeline_logger::prelude::*;
//! use rust_pipeline_logger::log;
//!
//! let logger = Logger::from_sink(NullSink);
//! log!(logger, fmt = "${1} and ${2}", "only one");
//! ```
//!
//! ```compile_fail
//! use rust_pipeline_logger::prelude::*;
//! use rust_pipeline_logger::log;
//!
//! let logger = Logger::from_sink(NullSink);
//! log!(logger, fmt = "missing brace ${1", "value");
//! ```
//!
//! ```compile_fail
//! use rust_pipeline_logger::prelude::*;
//! use rust_pipeline_logger::log;
//!
//! let logger = Logger::from_sink(NullSink);
//! // the priority is a tag and cannot fill ${2}
//! log!(logger, fmt = "${1} ${2}", "value", Priority::Warning);
//! ```

/// Log a list of values, or a checked template followed by its values.
///
/// The template after `fmt =` must be a constant `&'static str` expression:
/// a literal, a `const` item or a `const fn` call.
///
/// At most 12 values can be passed per call, metadata included, since the
/// values are handed over as a tuple (see [`LogArgs`](crate::LogArgs)).
/// Use [`Logger::stream`](crate::Logger::stream) for longer messages.
///
/// # Examples
///
/// ```
/// # use rust_pipeline_logger::prelude::*;
/// # let logger = Logger::from_sink(NullSink);
/// use rust_pipeline_logger::log;
/// log!(logger, "Simple message");
/// log!(logger, "Error code: ", 500, Priority::Error);
/// log!(logger, fmt = "Two ${2} ${1} log", "one", "two");
/// log!(logger, fmt = "Retry ${1}", 3, Priority::Warning);
/// log!(logger, fmt = " Zero ");
///
/// const GREETING: &str = "Hello ${1:name}";
/// log!(logger, fmt = GREETING, "you");
/// ```
///
/// ```compile_fail
/// # use rust_pipeline_logger::prelude::*;
/// # let logger = Logger::from_sink(NullSink);
/// use rust_pipeline_logger::log;
/// log!(logger, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, fmt = $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.submit($crate::__gather_checked!($fmt $(, $arg)*))
    };
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(($($arg,)*))
    };
}

/// Log with an explicit priority tag.
///
/// # Examples
///
/// ```
/// # use rust_pipeline_logger::prelude::*;
/// # let logger = Logger::from_sink(NullSink);
/// use rust_pipeline_logger::log_with_priority;
/// log_with_priority!(logger, Priority::Warning, "Retry attempt ", 3);
/// log_with_priority!(logger, Priority::Error, fmt = "Failed: ${1}", "disk full");
/// ```
#[macro_export]
macro_rules! log_with_priority {
    ($logger:expr, $priority:expr, fmt = $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let mut message = $crate::__gather_checked!($fmt $(, $arg)*);
        $crate::Loggable::append_to(&$priority, &mut message);
        $logger.submit(message)
    }};
    ($logger:expr, $priority:expr $(, $arg:expr)* $(,)?) => {{
        let mut message = $crate::Gatherer::gather(($($arg,)*));
        $crate::Loggable::append_to(&$priority, &mut message);
        $logger.submit(message)
    }};
}

/// Log a debug-tagged message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $($rest:tt)*)?) => {
        $crate::log_with_priority!($logger, $crate::Priority::Debug $(, $($rest)*)?)
    };
}

/// Log an info-tagged message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $($rest:tt)*)?) => {
        $crate::log_with_priority!($logger, $crate::Priority::Info $(, $($rest)*)?)
    };
}

/// Log a warning-tagged message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $($rest:tt)*)?) => {
        $crate::log_with_priority!($logger, $crate::Priority::Warning $(, $($rest)*)?)
    };
}

/// Log an error-tagged message.
///
/// # Examples
///
/// ```
/// # use rust_pipeline_logger::prelude::*;
/// # let logger = Logger::from_sink(NullSink);
/// use rust_pipeline_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, fmt = "Error code: ${1}, message: ${2}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $($rest:tt)*)?) => {
        $crate::log_with_priority!($logger, $crate::Priority::Error $(, $($rest)*)?)
    };
}

/// Build a template-headed message, checking syntax and arity at compile time.
#[doc(hidden)]
#[macro_export]
macro_rules! __gather_checked {
    ($fmt:expr $(, $arg:expr)*) => {{
        const __LOG_TEMPLATE: $crate::Template = $crate::Template::literal($fmt);
        $crate::Gatherer::gather_template_checked::<
            { $crate::core::placeholder::checked_placeholder_count($fmt) },
            _,
        >(&__LOG_TEMPLATE, ($($arg,)*))
    }};
}
