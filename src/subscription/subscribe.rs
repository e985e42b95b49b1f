use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use crate::observer::Observer;

/// A trait for types that can be subscribed to, allowing consumers to receive
/// values emitted by an observable stream.
pub trait Subscribeable {
    /// The type of items emitted by the observable stream.
    type ObsType;

    /// Subscribes to the observable stream and specifies how to handle emitted
    /// values.
    ///
    /// The `Subscriber` parameter defines the behavior for processing values
    /// emitted by the observable stream. Subscribing starts an independent
    /// producer run for this subscriber; the returned `Subscription` allows the
    /// caller to terminate that run and trigger its teardown.
    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription;
}

/// A trait for types that can be unsubscribed, allowing the clean release of
/// resources associated with a subscription.
pub trait Unsubscribeable {
    /// Unsubscribes from a subscription and runs its teardown, if any.
    ///
    /// Unsubscribing marks the subscription as terminal, which suppresses every
    /// later `next`, `error` and `complete` delivery to the subscriber. If the
    /// subscription already terminated through `error` or `complete`, this call
    /// has no further effect; the teardown never runs more than once.
    ///
    /// The `Subscription` instance that this method is called on is consumed,
    /// making it unusable after the `unsubscribe` operation.
    fn unsubscribe(self);
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type CompleteFn = Box<dyn FnMut() + Send + Sync>;
type ErrorFn = Box<dyn FnMut(Arc<dyn Error + Send + Sync>) + Send + Sync>;
type TeardownFn = Box<dyn FnOnce() + Send>;

/// Terminal flag and pending teardown, shared between a `Subscriber` and the
/// `Subscription` handed back from `subscribe`.
#[derive(Clone)]
pub(crate) struct SubscriptionState {
    inner: Arc<Mutex<StateInner>>,
}

struct StateInner {
    closed: bool,
    teardown: Option<TeardownFn>,
}

impl SubscriptionState {
    fn new() -> Self {
        SubscriptionState {
            inner: Arc::new(Mutex::new(StateInner {
                closed: false,
                teardown: None,
            })),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().closed
    }

    // Flips the terminal flag. `None` means the state was already terminal and
    // the caller must not act; otherwise the caller receives whatever teardown
    // was registered so far and is responsible for running it.
    pub(crate) fn close(&self) -> Option<Option<TeardownFn>> {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return None;
        }
        inner.closed = true;
        Some(inner.teardown.take())
    }

    // Registers the teardown a producer returned from its subscribe function.
    // A producer that emitted and terminated synchronously is already terminal
    // by the time its teardown arrives here, so in that case the teardown runs
    // immediately instead of being discarded.
    pub(crate) fn register_teardown(&self, teardown: TeardownFn) {
        let run_now = {
            let mut inner = self.inner.lock().unwrap();
            if inner.closed {
                Some(teardown)
            } else {
                inner.teardown = Some(teardown);
                None
            }
        };
        if let Some(teardown) = run_now {
            teardown();
        }
    }
}

/// A type that acts as an observer, allowing users to handle emitted values,
/// errors, and completion when subscribing to an `Observable`.
///
/// Users can create a `Subscriber` instance using the `new` method and provide
/// custom functions to handle the `next`, `error`, and `complete` events. All
/// three handlers are optional; a `Subscriber` built through `Default` observes
/// the stream only through its terminal flag.
///
/// A `Subscriber` terminates at most once, on the first of `error`, `complete`
/// or an `unsubscribe` call on the `Subscription` it was subscribed with. Once
/// terminated, no handler is ever invoked again.
pub struct Subscriber<NextFnType> {
    next_fn: Option<NextFn<NextFnType>>,
    complete_fn: Option<CompleteFn>,
    error_fn: Option<ErrorFn>,
    state: SubscriptionState,
}

impl<NextFnType> Subscriber<NextFnType> {
    /// Creates a new `Subscriber` instance with custom handling functions for
    /// emitted values, errors, and completion.
    ///
    /// The `error` and `complete` handlers are optional. When no `error`
    /// handler is supplied, stream errors are dropped silently; only the
    /// teardown side effect of the terminal transition remains visible.
    pub fn new(
        next_fn: impl FnMut(NextFnType) + 'static + Send,
        error_fn: Option<impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send + Sync>,
        complete_fn: Option<impl FnMut() + 'static + Send + Sync>,
    ) -> Self {
        let mut s = Subscriber {
            next_fn: Some(Box::new(next_fn)),
            complete_fn: None,
            error_fn: None,
            state: SubscriptionState::new(),
        };

        if let Some(efn) = error_fn {
            s.error_fn = Some(Box::new(efn));
        }
        if let Some(cfn) = complete_fn {
            s.complete_fn = Some(Box::new(cfn));
        }
        s
    }

    /// Create a new `Subscriber` with the provided `next` function.
    ///
    /// The `next` closure is called when the observable emits a new item. It
    /// takes a parameter of type `NextFnType`, which is an item emitted by the
    /// observable.
    pub fn on_next(next_fn: impl FnMut(NextFnType) + 'static + Send) -> Self {
        Subscriber {
            next_fn: Some(Box::new(next_fn)),
            complete_fn: None,
            error_fn: None,
            state: SubscriptionState::new(),
        }
    }

    /// Set the completion function for the `Subscriber`.
    ///
    /// The provided closure will be called when the observable completes its
    /// emission sequence.
    pub fn on_complete(&mut self, complete_fn: impl FnMut() + 'static + Send + Sync) {
        self.complete_fn = Some(Box::new(complete_fn));
    }

    /// Set the error-handling function for the `Subscriber`.
    ///
    /// The provided closure will be called when the observable signals an error
    /// during its emission sequence. It takes an `Arc` wrapping a trait object
    /// that implements the `Error`, `Send`, and `Sync` traits as its parameter.
    pub fn on_error(
        &mut self,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send + Sync,
    ) {
        self.error_fn = Some(Box::new(error_fn));
    }

    /// Returns `true` once this subscriber terminated, by any path.
    ///
    /// Producers that keep emitting after `subscribe` returned, e.g. from a
    /// spawned thread, can poll this to stop early after the consumer
    /// unsubscribed. Emitting past termination is harmless either way; the
    /// values are simply dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub(crate) fn state(&self) -> &SubscriptionState {
        &self.state
    }
}

impl<NextFnType> Default for Subscriber<NextFnType> {
    fn default() -> Self {
        Subscriber {
            next_fn: None,
            complete_fn: None,
            error_fn: None,
            state: SubscriptionState::new(),
        }
    }
}

impl<N> Observer for Subscriber<N> {
    type NextFnType = N;

    fn next(&mut self, v: Self::NextFnType) {
        if self.state.is_closed() {
            return;
        }
        if let Some(nfn) = &mut self.next_fn {
            (nfn)(v);
        }
    }

    fn complete(&mut self) {
        let Some(teardown) = self.state.close() else {
            return;
        };
        if let Some(cfn) = &mut self.complete_fn {
            (cfn)();
        }
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    fn error(&mut self, observable_error: Arc<dyn Error + Send + Sync>) {
        let Some(teardown) = self.state.close() else {
            return;
        };
        if let Some(efn) = &mut self.error_fn {
            (efn)(observable_error);
        }
        if let Some(teardown) = teardown {
            teardown();
        }
    }
}

/// Unsubscribe logic type which is returned from the user supplied subscribe
/// function and registered with the subscription it belongs to.
pub enum UnsubscribeLogic {
    /// No specific unsubscribe logic.
    Nil,

    /// Unsubscribe logic defined by a function. Runs exactly once, on the first
    /// terminal transition of the subscription.
    Logic(Box<dyn FnOnce() + Send>),
}

/// Represents a subscription to an observable, allowing control over the
/// subscription.
///
/// When an observable is subscribed to, it returns a `Subscription` instance.
/// The subscription shares its terminal state with the `Subscriber` the
/// producer emits into: unsubscribing suppresses all further deliveries to the
/// subscriber and runs the producer's teardown, and a subscription whose
/// subscriber already completed or errored reports itself as closed.
pub struct Subscription {
    state: SubscriptionState,
}

impl Subscription {
    pub(crate) fn new(state: SubscriptionState) -> Self {
        Subscription { state }
    }

    /// Returns `true` once the subscription terminated through `error`,
    /// `complete` or `unsubscribe`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }
}

impl Unsubscribeable for Subscription {
    fn unsubscribe(self) {
        if let Some(Some(teardown)) = self.state.close() {
            teardown();
        }
    }
}
