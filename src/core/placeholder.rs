//! Placeholder grammar for format templates
//!
//! A placeholder starts with `$` and has the shape `${index[:hint]}`:
//!
//! ```text
//! placeholder := '{' digits [':' hint] '}'
//! digits      := one or more '0'-'9'
//! hint        := any characters except '}'
//! ```
//!
//! Indices are 1-based. The hint is documentation for translators and readers
//! of the template; it is parsed and dropped. There is no escape for a literal
//! `$`.
//!
//! [`read_placeholder`] is the only implementation of the grammar. It is a
//! `const fn`, so [`placeholder_count`] can validate template literals at
//! compile time while [`Segments`] drives substitution at run time.

use super::error::PlaceholderError;

/// Parse one placeholder starting right after its `$`.
///
/// Returns the 1-based index and the byte offset just past the closing `}`.
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::core::placeholder::read_placeholder;
///
/// let template = "id=${12:user id}!";
/// assert_eq!(read_placeholder(template, 4), Ok((12, 16)));
/// ```
pub const fn read_placeholder(
    template: &str,
    cursor: usize,
) -> Result<(usize, usize), PlaceholderError> {
    let bytes = template.as_bytes();
    let len = bytes.len();

    if cursor >= len || bytes[cursor] != b'{' {
        return Err(PlaceholderError::MissingOpenBrace { position: cursor });
    }

    let start = cursor + 1;
    let mut it = start;
    while it < len && bytes[it] != b':' && bytes[it] != b'}' {
        it += 1;
    }
    if it == len {
        return Err(PlaceholderError::MissingCloseBrace { position: cursor });
    }
    if it == start {
        return Err(PlaceholderError::ExpectedNumber { position: start });
    }

    let mut index: usize = 0;
    let mut digit = start;
    while digit < it {
        let b = bytes[digit];
        if !b.is_ascii_digit() {
            return Err(PlaceholderError::ExpectedNumber { position: digit });
        }
        index = match index.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as usize) {
                Some(v) => v,
                None => return Err(PlaceholderError::ExpectedNumber { position: start }),
            },
            None => return Err(PlaceholderError::ExpectedNumber { position: start }),
        };
        digit += 1;
    }
    if index == 0 {
        return Err(PlaceholderError::ZeroIndex { position: start });
    }

    // hint, if any
    while it < len && bytes[it] != b'}' {
        it += 1;
    }
    if it == len {
        return Err(PlaceholderError::MissingCloseBrace { position: cursor });
    }

    Ok((index, it + 1))
}

/// Highest placeholder index referenced by `template`.
///
/// This is an arity bound, not an occurrence count: `"${1} ${1}"` yields 1
/// and `"${2} ${1}"` yields 2. A template without `$` yields 0.
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::core::placeholder::placeholder_count;
///
/// assert_eq!(placeholder_count("no dollars"), Ok(0));
/// assert_eq!(placeholder_count("${2:x} ${1:x}"), Ok(2));
/// assert!(placeholder_count("$1").is_err());
/// ```
pub const fn placeholder_count(template: &str) -> Result<usize, PlaceholderError> {
    let bytes = template.as_bytes();
    let mut max_found = 0;
    let mut it = 0;

    while it < bytes.len() {
        if bytes[it] == b'$' {
            match read_placeholder(template, it + 1) {
                Ok((index, next)) => {
                    if index > max_found {
                        max_found = index;
                    }
                    it = next;
                }
                Err(e) => return Err(e),
            }
        } else {
            it += 1;
        }
    }

    Ok(max_found)
}

/// Like [`placeholder_count`], but panics on malformed input.
///
/// Evaluated in a `const` item this turns a malformed template literal into a
/// compile error.
pub const fn checked_placeholder_count(template: &str) -> usize {
    match placeholder_count(template) {
        Ok(count) => count,
        Err(PlaceholderError::MissingOpenBrace { .. }) => {
            panic!("malformed template: expected an opening brace after '$'")
        }
        Err(PlaceholderError::ExpectedNumber { .. }) => {
            panic!("malformed template: expected a number inside a placeholder")
        }
        Err(PlaceholderError::MissingCloseBrace { .. }) => {
            panic!("malformed template: closing brace not found")
        }
        Err(PlaceholderError::ZeroIndex { .. }) => {
            panic!("malformed template: placeholder indices start at 1")
        }
    }
}

/// Piece of a template: literal text or a placeholder reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(usize),
}

/// Iterator over the [`Segment`]s of a template, left to right.
///
/// Yields `Err` once on malformed input and then stops.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    template: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Segments<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            cursor: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, PlaceholderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.template.len() {
            return None;
        }

        let rest = &self.template[self.cursor..];
        match rest.find('$') {
            Some(0) => match read_placeholder(self.template, self.cursor + 1) {
                Ok((index, next)) => {
                    self.cursor = next;
                    Some(Ok(Segment::Placeholder(index)))
                }
                Err(e) => {
                    self.failed = true;
                    Some(Err(e))
                }
            },
            Some(offset) => {
                self.cursor += offset;
                Some(Ok(Segment::Literal(&rest[..offset])))
            }
            None => {
                self.cursor = self.template.len();
                Some(Ok(Segment::Literal(rest)))
            }
        }
    }
}
