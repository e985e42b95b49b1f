use std::{error::Error, sync::Arc};

/// Behavior of a per-subscription sink.
///
/// An `Observer` receives the values a producer emits through `next` and is
/// told about the end of the stream through at most one of `complete` or
/// `error`. After a terminal call the observer ignores everything that follows.
pub trait Observer {
    /// The type of items this observer accepts through `next`.
    type NextFnType;

    fn next(&mut self, _: Self::NextFnType);
    fn complete(&mut self);
    fn error(&mut self, _: Arc<dyn Error + Send + Sync>);
}
