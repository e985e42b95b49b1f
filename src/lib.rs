//! `rxo` is a minimal reactive-stream primitive: a lazy, push-based
//! [`Observable`] with [`Observer`]-mediated subscription and a disciplined
//! unsubscribe/teardown protocol.
//!
//! Observables here are cold and unicast. An `Observable` is a reusable recipe
//! wrapping a producer function; nothing runs until `subscribe` is called, and
//! every `subscribe` call starts an independent producer run with its own
//! [`Subscriber`]. Emission is synchronous: the producer runs to completion
//! before `subscribe` returns, unless it hands its `Subscriber` off to a thread
//! of its own.
//!
//! A subscription terminates at most once, on the first of `error`, `complete`
//! or `unsubscribe`. After that every further delivery is suppressed and the
//! producer's teardown has run, exactly once.
//!
//! ```
//! use rxo::subscribe::{Subscriber, Unsubscribeable};
//! use rxo::{Observable, Subscribeable};
//!
//! let mut observable = Observable::from([1, 2, 3]);
//!
//! let observer = Subscriber::new(
//!     |v| println!("Emitted {}", v),
//!     None::<fn(_)>,
//!     Some(|| println!("Completed")),
//! );
//!
//! // Delivers 1, 2, 3, then completes, all before returning.
//! let subscription = observable.subscribe(observer);
//!
//! // The stream already completed; unsubscribing now is a safe no-op.
//! subscription.unsubscribe();
//! ```
//!
//! There are no operators, subjects or schedulers in this crate; composition
//! happens through explicit functions from one `Observable` to another, written
//! by the consumer.

pub mod observable;
pub mod observer;
pub mod subscription;

pub use observable::Observable;
pub use observer::Observer;
pub use subscription::subscribe::{Subscribeable, Unsubscribeable};

/// Re-exports of the subscription machinery: `Subscriber`, `Subscription` and
/// `UnsubscribeLogic`.
pub mod subscribe {
    pub use crate::subscription::subscribe::{
        Subscribeable, Subscriber, Subscription, UnsubscribeLogic, Unsubscribeable,
    };
}
