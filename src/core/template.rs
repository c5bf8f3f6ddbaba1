//! Validated format templates
//!
//! A [`Template`] is a format string whose placeholder syntax has already been
//! checked, together with its arity bound (the highest placeholder index).
//! It is only ever accepted as the first argument of a logging call; it does
//! not implement [`Loggable`](super::loggable::Loggable), so passing it
//! anywhere else does not compile.

use super::error::{LoggerError, Result};
use super::message::{keys, TypedValue};
use super::placeholder::{checked_placeholder_count, placeholder_count, Segment, Segments};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: Cow<'static, str>,
    placeholder_count: usize,
}

impl Template {
    /// Build a template from a string literal, validated at compile time when
    /// used in a `const` context.
    ///
    /// Outside a `const` context a malformed literal panics on construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::Template;
    ///
    /// const GREETING: Template = Template::literal("Hello ${1:name}, you are ${2}");
    /// assert_eq!(GREETING.placeholder_count(), 2);
    /// ```
    ///
    /// ```compile_fail
    /// use rust_pipeline_logger::Template;
    ///
    /// const BROKEN: Template = Template::literal("Hello ${name}");
    /// ```
    pub const fn literal(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            placeholder_count: checked_placeholder_count(text),
        }
    }

    /// Parse a template known only at run time (e.g. a translated string).
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::Template;
    ///
    /// let template = Template::parse(String::from("One ${1} log")).unwrap();
    /// assert_eq!(template.placeholder_count(), 1);
    /// assert!(Template::parse("${x}").is_err());
    /// ```
    pub fn parse(text: impl Into<Cow<'static, str>>) -> Result<Self> {
        let text = text.into();
        let placeholder_count = placeholder_count(&text)?;
        Ok(Self {
            text,
            placeholder_count,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Highest placeholder index referenced by the template
    pub const fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Sequence entry that carries this template through the sink chain
    pub fn to_typed_value(&self) -> TypedValue {
        TypedValue::new(keys::TEMPLATE, self.text.as_ref())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Substitute `values` into `template`.
///
/// `values[0]` fills `${1}`, `values[1]` fills `${2}` and so on. Indices may
/// repeat and appear in any order. An index with no value is an error, never
/// an empty substitution.
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::core::template::substitute;
///
/// let out = substitute("Two ${2} ${1} log", &["one", "two"]).unwrap();
/// assert_eq!(out, "Two two one log");
/// ```
pub fn substitute<S: AsRef<str>>(template: &str, values: &[S]) -> Result<String> {
    let mut output = String::with_capacity(template.len());

    for segment in Segments::new(template) {
        match segment? {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(index) => {
                let value = values
                    .get(index - 1)
                    .ok_or_else(|| LoggerError::out_of_range(index, values.len()))?;
                output.push_str(value.as_ref());
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_parse_agree() {
        const LITERAL: Template = Template::literal("${2} and ${1}");
        let parsed = Template::parse("${2} and ${1}").unwrap();
        assert_eq!(LITERAL, parsed);
        assert_eq!(parsed.placeholder_count(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["$1", "${1", "${1:", "${1:xx", "${x}"] {
            assert!(
                matches!(Template::parse(text), Err(LoggerError::Syntax(_))),
                "template {:?}",
                text
            );
        }
    }

    #[test]
    #[should_panic(expected = "expected a number")]
    fn test_literal_panics_outside_const() {
        let _ = Template::literal("${x}");
    }

    #[test]
    fn test_typed_value_is_tagged_template() {
        let template = Template::literal("${1}");
        let value = template.to_typed_value();
        assert_eq!(value.type_tag, keys::TEMPLATE);
        assert_eq!(value.value, "${1}");
    }

    #[test]
    fn test_substitute_repeats_and_reorders() {
        assert_eq!(substitute("${1}${1}", &["ab"]).unwrap(), "abab");
        assert_eq!(substitute("${2:b}-${1:a}", &["a", "b"]).unwrap(), "b-a");
        assert_eq!(substitute(" Zero ", &[] as &[&str]).unwrap(), " Zero ");
    }

    #[test]
    fn test_substitute_keeps_unicode_literals() {
        assert_eq!(substitute("größe: ${1} €", &["3"]).unwrap(), "größe: 3 €");
    }

    #[test]
    fn test_substitute_out_of_range() {
        let err = substitute("${3}", &["a", "b"]).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::PlaceholderOutOfRange {
                index: 3,
                available: 2
            }
        ));
    }
}
