//! This simple `Observable` emits values and completes. It returns no teardown,
//! so the subscription it produces has nothing to clean up.
//!
//! This is a synchronous `Observable`, so it blocks the current thread until it
//! completes emissions.
//!
//! To run this example, execute `cargo run --example basic_observable`.

use rxo::subscribe::{Subscriber, UnsubscribeLogic};
use rxo::{Observable, Observer, Subscribeable};

fn main() {
    // Create a custom observable that emits values from 1 to 10.
    let mut emit_10_observable = Observable::new(|mut subscriber| {
        let mut i = 1;

        while i <= 10 {
            // Emit the value to the subscriber.
            subscriber.next(i);

            i += 1;
        }

        // Signal completion to the subscriber.
        subscriber.complete();

        // No teardown for this producer.
        UnsubscribeLogic::Nil
    });

    // Create the `Subscriber` with a `next` function, and an optional
    // `complete` function. No need for an `error` function in this example.
    let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
    observer.on_complete(|| println!("Completed"));

    // This observable does not use threads so it will block until it is done.
    // Observables are cold so if you comment out the line below nothing will
    // be emitted.
    emit_10_observable.subscribe(observer);

    println!("Custom Observable finished emitting")
}
