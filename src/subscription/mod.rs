//! Provides structures and traits related to subscription management.
//!
//! This module includes types such as `Subscriber` for handling observed values,
//! errors, and completions, as well as `Subscription` for controlling
//! subscriptions to observables.
//!
//! Additionally, it defines the enum and traits used to describe and run the
//! teardown of a subscription.
pub mod subscribe;
