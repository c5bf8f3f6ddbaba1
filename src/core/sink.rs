//! Sink trait for message consumers

use super::{error::Result, message::Message};
use std::sync::Arc;

/// Consumer of a [`Message`]
///
/// A sink owns the message it is handed and may mutate it before forwarding
/// it downstream. `take` has no failure channel: terminal sinks deal with
/// their own I/O errors. Sinks are shared between threads, so terminal sinks
/// writing to a shared resource must serialize access themselves.
pub trait Sink: Send + Sync {
    fn take(&self, message: Message);

    /// Flush buffered output down the chain
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn take(&self, message: Message) {
        (**self).take(message)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn take(&self, message: Message) {
        (**self).take(message)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Shared handle to a sink chain
pub type SharedSink = Arc<dyn Sink>;
