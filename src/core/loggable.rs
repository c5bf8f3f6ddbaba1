//! Conversion of logged arguments to `(type tag, text)` pairs
//!
//! Every argument of a logging call goes through [`Loggable`]. The associated
//! constant [`Loggable::IS_METADATA`] is fixed per type and decides whether a
//! value lands in the message metadata (keyed by its type tag) or is appended
//! to the positional sequence.

use super::message::{Message, TypedValue};
use std::borrow::Cow;
use std::fmt;

pub trait Loggable {
    /// `true` for tag types such as [`Priority`](super::priority::Priority)
    const IS_METADATA: bool = false;

    /// Stable name of the value's logical type
    fn type_tag(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Canonical text rendering
    fn stringify(&self) -> String;

    /// Route this value into `message` according to [`Self::IS_METADATA`]
    fn append_to(&self, message: &mut Message) {
        if Self::IS_METADATA {
            message.set_meta(self.type_tag(), self.stringify());
        } else {
            message.push(TypedValue::new(self.type_tag(), self.stringify()));
        }
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    const IS_METADATA: bool = T::IS_METADATA;

    fn type_tag(&self) -> &'static str {
        (**self).type_tag()
    }

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    const IS_METADATA: bool = T::IS_METADATA;

    fn type_tag(&self) -> &'static str {
        (**self).type_tag()
    }

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl Loggable for str {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Loggable for String {
    fn stringify(&self) -> String {
        self.clone()
    }
}

impl Loggable for Cow<'_, str> {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Loggable for char {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Loggable for bool {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_loggable_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn stringify(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_loggable_for_numbers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Log any [`Display`](fmt::Display) type through its `Display` rendering.
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::core::loggable::{Loggable, Shown};
/// use std::net::Ipv4Addr;
///
/// let addr = Shown(Ipv4Addr::LOCALHOST);
/// assert_eq!(addr.stringify(), "127.0.0.1");
/// assert!(addr.type_tag().ends_with("Ipv4Addr"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Loggable for Shown<T> {
    fn type_tag(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn stringify(&self) -> String {
        self.0.to_string()
    }
}
