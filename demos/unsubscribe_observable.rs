//! This `Observable` emits values from a spawned thread and returns a teardown
//! that joins it. The subscription can be unsubscribed from, which suppresses
//! all further deliveries and stops the producer.
//!
//! To run this example, execute `cargo run --example unsubscribe_observable`.

use std::time::Duration;

use rxo::subscribe::{Subscriber, UnsubscribeLogic, Unsubscribeable};
use rxo::{Observable, Observer, Subscribeable};

fn main() {
    // Create a custom observable that emits values in a separate thread.
    let mut observable = Observable::new(|mut o: Subscriber<i32>| {
        // Launch a new thread for the Observable's processing and store its handle.
        let join_handle = std::thread::spawn(move || {
            for i in 0..=10_000 {
                // The terminal flag flips when the consumer unsubscribes; stop
                // emitting as soon as that happens.
                if o.is_closed() {
                    break;
                }
                // Emit the value to the subscriber.
                o.next(i);
                std::thread::sleep(Duration::from_millis(1));
            }
            // Signal completion to the subscriber. Ignored if the consumer
            // already unsubscribed.
            o.complete();
        });

        // The returned teardown joins the producer thread, so unsubscribing
        // also waits for the producer to wind down.
        UnsubscribeLogic::Logic(Box::new(move || {
            let _ = join_handle.join();
        }))
    });

    // Create the `Subscriber` with a `next` function, and an optional
    // `complete` function.
    let mut observer = Subscriber::on_next(|v| println!("Emitted {}", v));
    observer.on_complete(|| println!("Completed"));

    // This observable uses an OS thread so it will not block the current
    // thread. Observables are cold so if you comment out the statement below
    // nothing will be emitted.
    let subscription = observable.subscribe(observer);

    // Do something else here.
    println!("Do something while Observable is emitting.");
    std::thread::sleep(Duration::from_millis(20));

    // Unsubscribe from the observable to stop emissions.
    subscription.unsubscribe();

    println!("`main` function done")
}
