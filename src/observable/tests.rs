use super::*;

use std::{
    error::Error,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use crate::subscription::subscribe::Unsubscribeable;

#[derive(Debug)]
struct TestError;

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test stream failure")
    }
}

impl Error for TestError {}

fn recording_subscriber() -> (Subscriber<i32>, Arc<Mutex<Vec<i32>>>, Arc<Mutex<Vec<i32>>>) {
    let nexts: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));
    let nexts_c = Arc::clone(&nexts);

    let completes: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));
    let completes_c = Arc::clone(&completes);

    let subscriber = Subscriber::new(
        move |n| nexts_c.lock().unwrap().push(n),
        None::<fn(_)>,
        Some(move || completes_c.lock().unwrap().push(1)),
    );
    (subscriber, nexts, completes)
}

#[test]
fn from_emits_all_values_in_order_then_completes() {
    let (subscriber, nexts, completes) = recording_subscriber();

    let mut observable = Observable::from(vec![1, 2, 3]);
    let subscription = observable.subscribe(subscriber);

    assert_eq!(*nexts.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(completes.lock().unwrap().len(), 1);
    assert!(subscription.is_closed());

    // The stream already completed; unsubscribing must not re-run complete.
    subscription.unsubscribe();
    assert_eq!(completes.lock().unwrap().len(), 1);
}

#[test]
fn from_runs_are_independent_per_subscription() {
    let mut observable = Observable::from([10, 20]);

    let (first, first_nexts, first_completes) = recording_subscriber();
    let (second, second_nexts, second_completes) = recording_subscriber();

    observable.subscribe(first);
    observable.subscribe(second);

    assert_eq!(*first_nexts.lock().unwrap(), vec![10, 20]);
    assert_eq!(*second_nexts.lock().unwrap(), vec![10, 20]);
    assert_eq!(first_completes.lock().unwrap().len(), 1);
    assert_eq!(second_completes.lock().unwrap().len(), 1);
}

#[test]
fn teardown_registered_after_synchronous_completion_still_runs() {
    let teardowns = Arc::new(AtomicUsize::new(0));
    let teardowns_c = Arc::clone(&teardowns);

    let mut observable = Observable::new(move |mut o: Subscriber<i32>| {
        o.next(1);
        // Terminal before the producer had a chance to hand back its teardown.
        o.complete();

        let teardowns = Arc::clone(&teardowns_c);
        UnsubscribeLogic::Logic(Box::new(move || {
            teardowns.fetch_add(1, Ordering::SeqCst);
        }))
    });

    let subscription = observable.subscribe(Subscriber::on_next(|_| {}));

    // Registering on an already terminal subscription runs the teardown right
    // away instead of discarding it.
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);

    subscription.unsubscribe();
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
}

#[test]
fn teardown_runs_once_when_unsubscribe_terminates_the_stream() {
    let teardowns = Arc::new(AtomicUsize::new(0));
    let teardowns_c = Arc::clone(&teardowns);

    // Producer that emits nothing; the subscription stays open until the
    // consumer unsubscribes.
    let mut observable = Observable::new(move |_: Subscriber<i32>| {
        let teardowns = Arc::clone(&teardowns_c);
        UnsubscribeLogic::Logic(Box::new(move || {
            teardowns.fetch_add(1, Ordering::SeqCst);
        }))
    });

    let subscription = observable.subscribe(Subscriber::on_next(|_| {}));
    assert_eq!(teardowns.load(Ordering::SeqCst), 0);
    assert!(!subscription.is_closed());

    subscription.unsubscribe();
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
}

#[test]
fn emissions_after_error_are_suppressed() {
    let (subscriber, nexts, completes) = recording_subscriber();

    let errors = Arc::new(AtomicUsize::new(0));
    let errors_c = Arc::clone(&errors);

    let mut subscriber = subscriber;
    subscriber.on_error(move |_| {
        errors_c.fetch_add(1, Ordering::SeqCst);
    });

    let mut observable = Observable::new(move |mut o: Subscriber<i32>| {
        o.next(1);
        o.error(Arc::new(TestError));
        // All of these arrive after the terminal transition.
        o.next(2);
        o.error(Arc::new(TestError));
        o.complete();
        UnsubscribeLogic::Nil
    });

    observable.subscribe(subscriber);

    assert_eq!(*nexts.lock().unwrap(), vec![1]);
    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert!(completes.lock().unwrap().is_empty());
}

#[test]
fn unsubscribing_a_fresh_subscription_suppresses_later_emissions() {
    let (subscriber, nexts, completes) = recording_subscriber();

    // Producer that stashes its subscriber instead of emitting, so the test
    // can drive emissions after the consumer unsubscribed.
    let stash: Arc<Mutex<Option<Subscriber<i32>>>> = Arc::new(Mutex::new(None));
    let stash_c = Arc::clone(&stash);

    let mut observable = Observable::new(move |o: Subscriber<i32>| {
        *stash_c.lock().unwrap() = Some(o);
        UnsubscribeLogic::Nil
    });

    let subscription = observable.subscribe(subscriber);
    subscription.unsubscribe();

    let mut stashed = stash.lock().unwrap().take().unwrap();
    assert!(stashed.is_closed());

    stashed.next(1);
    stashed.complete();

    assert!(nexts.lock().unwrap().is_empty());
    assert!(completes.lock().unwrap().is_empty());
}

#[test]
fn unsubscribe_stops_a_thread_backed_producer() {
    let (subscriber, nexts, _completes) = recording_subscriber();

    let mut observable = Observable::new(move |mut o: Subscriber<i32>| {
        let join_handle = std::thread::spawn(move || {
            for i in 0..10_000 {
                if o.is_closed() {
                    break;
                }
                o.next(i);
                std::thread::sleep(Duration::from_millis(1));
            }
            o.complete();
        });

        UnsubscribeLogic::Logic(Box::new(move || {
            let _ = join_handle.join();
        }))
    });

    let subscription = observable.subscribe(subscriber);

    std::thread::sleep(Duration::from_millis(25));
    // Flips the terminal flag, then joins the producer thread via the teardown.
    subscription.unsubscribe();

    let emitted = nexts.lock().unwrap().len();
    assert!(emitted > 0, "producer thread never emitted");

    // Terminal flag is checked on every `next`, so nothing lands after the
    // unsubscribe returned.
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(nexts.lock().unwrap().len(), emitted);
}
