//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Malformed `${index[:hint]}` placeholder.
///
/// Every variant carries the byte offset inside the template where the
/// problem was detected. The type is `Copy` so that the parser can stay a
/// `const fn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceholderError {
    #[error("expected '{{' after '$' at byte {position}")]
    MissingOpenBrace { position: usize },

    #[error("expected a number at byte {position}")]
    ExpectedNumber { position: usize },

    #[error("closing brace not found for placeholder starting at byte {position}")]
    MissingCloseBrace { position: usize },

    #[error("placeholder indices start at 1 (byte {position})")]
    ZeroIndex { position: usize },
}

impl PlaceholderError {
    /// Byte offset where parsing stopped
    pub const fn position(&self) -> usize {
        match *self {
            PlaceholderError::MissingOpenBrace { position }
            | PlaceholderError::ExpectedNumber { position }
            | PlaceholderError::MissingCloseBrace { position }
            | PlaceholderError::ZeroIndex { position } => position,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed template
    #[error("Template syntax error: {0}")]
    Syntax(#[from] PlaceholderError),

    /// Placeholder refers to a value that was never supplied
    #[error("Placeholder ${{{index}}} out of range: only {available} values supplied")]
    PlaceholderOutOfRange { index: usize, available: usize },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Unknown priority name
    #[error("Invalid priority: '{0}'")]
    InvalidPriority(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(index: usize, available: usize) -> Self {
        LoggerError::PlaceholderOutOfRange { index, available }
    }
}
