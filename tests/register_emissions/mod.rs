use std::sync::{Arc, Mutex};

use rxo::subscribe::Subscriber;

/// Shared record of everything the subscribers built from it observed.
///
/// Each call to `subscriber()` hands out a fresh `Subscriber` whose handlers
/// push into the same three logs, so a test can subscribe any number of times
/// and assert over the combined emissions afterwards.
#[derive(Clone, Default)]
pub struct EmissionRegistry {
    nexts: Arc<Mutex<Vec<i32>>>,
    completes: Arc<Mutex<Vec<i32>>>,
    errors: Arc<Mutex<Vec<i32>>>,
}

impl EmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber(&self) -> Subscriber<i32> {
        let nexts = Arc::clone(&self.nexts);
        let completes = Arc::clone(&self.completes);
        let errors = Arc::clone(&self.errors);

        Subscriber::new(
            move |n| {
                // Track next() calls.
                nexts.lock().unwrap().push(n);
            },
            Some(move |_| {
                // Track error() calls.
                errors.lock().unwrap().push(1);
            }),
            Some(move || {
                // Track complete() calls.
                completes.lock().unwrap().push(1);
            }),
        )
    }

    pub fn nexts(&self) -> Vec<i32> {
        self.nexts.lock().unwrap().clone()
    }

    pub fn complete_count(&self) -> usize {
        self.completes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}
