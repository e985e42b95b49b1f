//! Builds an `Observable` from a finite sequence with `Observable::from`.
//!
//! `from` producers emit the whole sequence and complete before `subscribe`
//! returns, and hand back a diagnostic-only teardown that reports through
//! `tracing`. Installing a subscriber with a low enough level makes that
//! teardown event visible.
//!
//! To run this example, execute `cargo run --example from_observable`.

use rxo::subscribe::{Subscriber, Unsubscribeable};
use rxo::{Observable, Subscribeable};

fn main() {
    // Route the crate's diagnostic events to stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut observable = Observable::from(["apple", "banana", "cherry"]);

    let observer = Subscriber::new(
        |v| println!("Emitted {}", v),
        None::<fn(_)>,
        Some(|| println!("Completed")),
    );

    // Everything is delivered synchronously; the stream is already complete
    // when subscribe() returns, and the teardown diagnostic has already fired.
    let subscription = observable.subscribe(observer);

    // Safe no-op: the subscription terminated when the stream completed.
    subscription.unsubscribe();

    println!("Sequence observable finished emitting")
}
