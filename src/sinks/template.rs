//! Template evaluation decorator

use crate::core::template::substitute;
use crate::core::{Message, Result, SharedSink, Sink, TypedValue};

/// Replaces a template-headed sequence with its single `Formatted` rendering
///
/// Messages whose first entry is not a template pass through unchanged.
///
/// # Panics
///
/// `take` panics if the template is malformed or references a value that
/// was not supplied. Messages built through [`Logger`](crate::Logger) are
/// checked for both before they reach any sink.
pub struct TemplateSink {
    inner: SharedSink,
}

impl TemplateSink {
    pub fn new(inner: SharedSink) -> Self {
        Self { inner }
    }

    /// Render a template-headed message into a single string
    pub fn evaluate(message: &Message) -> Result<Option<String>> {
        if !message.has_template() {
            return Ok(None);
        }
        let (template, values) = match message.sequence.split_first() {
            Some(parts) => parts,
            None => return Ok(None),
        };
        substitute(&template.value, values).map(Some)
    }
}

impl Sink for TemplateSink {
    fn take(&self, mut message: Message) {
        match Self::evaluate(&message) {
            Ok(Some(text)) => message.sequence = vec![TypedValue::formatted(text)],
            Ok(None) => {}
            Err(e) => panic!("template evaluation failed: {}", e),
        }
        self.inner.take(message);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
