//! Priority definitions
//!
//! A priority is a tag, not a filter: logging a [`Priority`] value sets the
//! `Priority` metadata entry and never adds to the message sequence.

use super::error::LoggerError;
use super::loggable::Loggable;
use super::message::keys;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Priority {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Debug,
        Priority::Info,
        Priority::Warning,
        Priority::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Priority::Debug => "debug",
            Priority::Info => "info",
            Priority::Warning => "warning",
            Priority::Error => "error",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Priority::Debug => Blue,
            Priority::Info => Green,
            Priority::Warning => Yellow,
            Priority::Error => Red,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Priority {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Priority::Debug),
            "info" => Ok(Priority::Info),
            "warning" | "warn" => Ok(Priority::Warning),
            "error" => Ok(Priority::Error),
            _ => Err(LoggerError::InvalidPriority(s.to_string())),
        }
    }
}

impl Loggable for Priority {
    const IS_METADATA: bool = true;

    fn type_tag(&self) -> &'static str {
        keys::PRIORITY
    }

    fn stringify(&self) -> String {
        self.to_str().to_string()
    }
}
