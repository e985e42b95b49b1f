//! The `observable` module provides the building blocks for creating cold
//! observables and subscribing to them.

use crate::observer::Observer;
use crate::subscription::subscribe::{Subscribeable, Subscriber, Subscription, UnsubscribeLogic};

/// The `Observable` struct represents a source of values that can be observed.
///
/// An `Observable` is an inert recipe: constructing one executes nothing. Each
/// call to `subscribe` starts an independent producer run with its own
/// `Subscriber`, so two subscriptions to the same observable never observe each
/// other's state.
///
/// # Example: basic synchronous `Observable`
///
/// This simple `Observable` emits values and completes before `subscribe`
/// returns. It returns no teardown, so unsubscribing from it afterwards has no
/// effect beyond being a safe no-op.
///
/// ```
/// use rxo::subscribe::{Subscriber, UnsubscribeLogic};
/// use rxo::{Observable, Observer, Subscribeable};
///
/// // Create a custom observable that emits values from 1 to 10.
/// let mut emit_10_observable = Observable::new(|mut subscriber| {
///     let mut i = 1;
///
///     while i <= 10 {
///         // Emit the value to the subscriber.
///         subscriber.next(i);
///         i += 1;
///     }
///     // Signal completion to the subscriber.
///     subscriber.complete();
///
///     // No teardown for this producer.
///     UnsubscribeLogic::Nil
/// });
///
/// // Create the `Subscriber` with a `next` function, and optional `error`
/// // and `complete` functions.
/// let observer = Subscriber::new(
///     |v| println!("Emitted {}", v),
///     // No need for the `error` function in this simple example, but we
///     // have to type annotate `None`.
///     None::<fn(_)>,
///     // The `complete` function is optional, so we wrap it in `Some()`.
///     Some(|| println!("Completed")),
/// );
///
/// // This observable is synchronous, so it blocks the current thread until it
/// // completes emission. If you comment out the line below, no emissions will
/// // occur because observables are cold.
/// emit_10_observable.subscribe(observer);
///
/// println!("Custom Observable finished emitting")
/// ```
///
/// # Example: `Observable` with a teardown
///
/// A producer may return teardown logic to run when its subscription
/// terminates. The teardown runs exactly once, whether the stream completed,
/// errored, or the consumer unsubscribed, and it is honored even when the
/// producer terminated synchronously before returning it.
///
/// ```
/// use std::sync::{
///     atomic::{AtomicUsize, Ordering},
///     Arc,
/// };
///
/// use rxo::subscribe::{Subscriber, UnsubscribeLogic, Unsubscribeable};
/// use rxo::{Observable, Observer, Subscribeable};
///
/// let torn_down = Arc::new(AtomicUsize::new(0));
/// let torn_down_c = Arc::clone(&torn_down);
///
/// let mut observable = Observable::new(move |mut subscriber: Subscriber<i32>| {
///     subscriber.next(1);
///     subscriber.complete();
///
///     let torn_down = Arc::clone(&torn_down_c);
///     UnsubscribeLogic::Logic(Box::new(move || {
///         torn_down.fetch_add(1, Ordering::SeqCst);
///     }))
/// });
///
/// let subscription = observable.subscribe(Subscriber::on_next(|v| println!("Emitted {}", v)));
///
/// // The producer completed synchronously, so its teardown already ran.
/// assert_eq!(torn_down.load(std::sync::atomic::Ordering::SeqCst), 1);
///
/// // Unsubscribing afterwards is a no-op; the teardown does not run again.
/// subscription.unsubscribe();
/// assert_eq!(torn_down.load(std::sync::atomic::Ordering::SeqCst), 1);
/// ```
pub struct Observable<T> {
    subscribe_fn: Box<dyn FnMut(Subscriber<T>) -> UnsubscribeLogic + Send + Sync>,
}

impl<T> Observable<T> {
    /// Creates a new `Observable` with the provided subscribe function.
    ///
    /// The subscribe function (`sf`) is the producer: a closure that defines
    /// the behavior of the `Observable` when subscribed. It is stored and not
    /// executed; each call to `subscribe` invokes it with a fresh `Subscriber`
    /// to emit into. The producer returns the teardown logic for that run as an
    /// [`UnsubscribeLogic`], or [`UnsubscribeLogic::Nil`] if it has nothing to
    /// clean up.
    ///
    /// If the producer panics while `subscribe` runs it, the panic propagates
    /// to the `subscribe` caller; no handler is invoked on its behalf.
    ///
    /// [`UnsubscribeLogic`]: crate::subscribe::UnsubscribeLogic
    /// [`UnsubscribeLogic::Nil`]: crate::subscribe::UnsubscribeLogic::Nil
    pub fn new(sf: impl FnMut(Subscriber<T>) -> UnsubscribeLogic + Send + Sync + 'static) -> Self {
        Observable {
            subscribe_fn: Box::new(sf),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Creates an `Observable` that emits every element of `values` in order
    /// and then completes.
    ///
    /// Emission is synchronous and exhaustive: by the time `subscribe` returns,
    /// every value has been delivered and the stream has completed. The
    /// sequence is cloned for each subscription, so the observable can be
    /// subscribed to any number of times and every run emits the full sequence.
    ///
    /// The producer returns a diagnostic teardown that only emits a `tracing`
    /// event; it must not be relied upon for resource release.
    ///
    /// ```
    /// use rxo::subscribe::Subscriber;
    /// use rxo::{Observable, Subscribeable};
    ///
    /// let mut observable = Observable::from([1, 2, 3]);
    ///
    /// let observer = Subscriber::new(
    ///     |v| println!("Emitted {}", v),
    ///     None::<fn(_)>,
    ///     Some(|| println!("Completed")),
    /// );
    ///
    /// observable.subscribe(observer);
    /// ```
    pub fn from<I>(values: I) -> Observable<T>
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
    {
        Observable::new(move |mut o: Subscriber<T>| {
            for value in values.clone() {
                o.next(value);
            }
            o.complete();

            UnsubscribeLogic::Logic(Box::new(|| {
                tracing::debug!("source observable subscription torn down");
            }))
        })
    }
}

impl<T: 'static> Subscribeable for Observable<T> {
    type ObsType = T;

    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription {
        let state = s.state().clone();
        let unsubscribe_logic = (self.subscribe_fn)(s);

        // Register after the producer returned. The producer may have already
        // terminated the subscriber synchronously; `register_teardown` runs the
        // teardown immediately in that case.
        match unsubscribe_logic {
            UnsubscribeLogic::Nil => (),
            UnsubscribeLogic::Logic(teardown) => state.register_teardown(teardown),
        }
        Subscription::new(state)
    }
}

#[cfg(test)]
mod tests;
