//! Message building from heterogeneous argument lists
//!
//! Argument lists are tuples of [`Loggable`] values. A [`Template`] can only
//! be given separately as the head of the list, and the number of tuple
//! elements must match its placeholder bound.
//!
//! ```compile_fail
//! use rust_pipeline_logger::{Gatherer, Template};
//!
//! let template = Template::literal("${1}");
//! // a template is not a loggable value
//! let msg = Gatherer::gather(("value", template));
//! ```

use super::loggable::Loggable;
use super::message::Message;
use super::template::Template;

/// Argument list of a logging call
///
/// Implemented for tuples of up to 12 [`Loggable`] values.
pub trait LogArgs {
    /// Number of arguments, metadata included
    const LEN: usize;

    /// Number of arguments that land in the message sequence, i.e. the
    /// values a template can reference
    const SEQUENCE_LEN: usize;

    fn append_to(&self, message: &mut Message);
}

impl LogArgs for () {
    const LEN: usize = 0;
    const SEQUENCE_LEN: usize = 0;

    fn append_to(&self, _message: &mut Message) {}
}

macro_rules! count_idents {
    () => { 0 };
    ($head:ident $($tail:ident)*) => { 1 + count_idents!($($tail)*) };
}

macro_rules! impl_log_args_for_tuples {
    ($( ( $($name:ident),+ ) )+) => {
        $(
            impl<$($name: Loggable),+> LogArgs for ($($name,)+) {
                const LEN: usize = count_idents!($($name)+);
                const SEQUENCE_LEN: usize =
                    0 $( + (!<$name as Loggable>::IS_METADATA) as usize )+;

                #[allow(non_snake_case)]
                fn append_to(&self, message: &mut Message) {
                    let ($($name,)+) = self;
                    $( $name.append_to(message); )+
                }
            }
        )+
    };
}

impl_log_args_for_tuples! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

/// Incremental message builder
///
/// The streaming logger feeds values one at a time; the call-style logger
/// uses [`Gatherer::gather`] and [`Gatherer::gather_template`].
#[derive(Debug, Default)]
pub struct Gatherer {
    message: Message,
}

impl Gatherer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a message whose first sequence entry is `template`
    pub fn with_template(template: &Template) -> Self {
        let mut message = Message::new();
        message.push(template.to_typed_value());
        Self { message }
    }

    pub fn push<T: Loggable + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.append_to(&mut self.message);
        self
    }

    pub fn push_all<A: LogArgs + ?Sized>(&mut self, args: &A) -> &mut Self {
        args.append_to(&mut self.message);
        self
    }

    pub fn finish(self) -> Message {
        self.message
    }

    /// Build a message from a plain argument list
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::Gatherer;
    ///
    /// let msg = Gatherer::gather(("test", 1));
    /// assert_eq!(msg.sequence[0].value, "test");
    /// assert_eq!(msg.sequence[1].value, "1");
    /// ```
    pub fn gather<A: LogArgs>(args: A) -> Message {
        let mut gatherer = Self::new();
        gatherer.push_all(&args);
        gatherer.finish()
    }

    /// Build a message headed by `template`.
    ///
    /// Metadata arguments such as [`Priority`](super::priority::Priority)
    /// may appear anywhere in `args`; they are not substitution values.
    ///
    /// # Panics
    ///
    /// Panics if the template's placeholder bound differs from the number of
    /// sequence arguments. That is a bug at the call site, not a runtime
    /// condition.
    pub fn gather_template<A: LogArgs>(template: &Template, args: A) -> Message {
        assert_eq!(
            template.placeholder_count(),
            A::SEQUENCE_LEN,
            "number of arguments and substitution tokens does not match for template {:?}",
            template.as_str()
        );
        let mut gatherer = Self::with_template(template);
        gatherer.push_all(&args);
        gatherer.finish()
    }

    /// [`Gatherer::gather_template`] with the placeholder bound `COUNT` known
    /// at compile time; a mismatch with the sequence arguments fails the
    /// build instead of panicking. Used by [`log!`](crate::log).
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_pipeline_logger::{Gatherer, Priority, Template};
    ///
    /// const TEMPLATE: Template = Template::literal("${1} ok");
    /// let msg = Gatherer::gather_template_checked::<1, _>(&TEMPLATE, ("x", Priority::Info));
    /// assert_eq!(msg.sequence.len(), 2);
    /// ```
    ///
    /// ```compile_fail
    /// use rust_pipeline_logger::{Gatherer, Priority, Template};
    ///
    /// // a priority is metadata, it cannot fill ${2}
    /// const TEMPLATE: Template = Template::literal("${2}");
    /// let msg = Gatherer::gather_template_checked::<2, _>(&TEMPLATE, ("x", Priority::Info));
    /// ```
    pub fn gather_template_checked<const COUNT: usize, A: LogArgs>(
        template: &Template,
        args: A,
    ) -> Message {
        const {
            assert!(
                COUNT == A::SEQUENCE_LEN,
                "number of arguments and substitution tokens does not match"
            )
        };
        Self::gather_template(template, args)
    }
}
