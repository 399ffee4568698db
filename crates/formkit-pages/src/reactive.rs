//! Reactive values
//!
//! A small synchronous reactive container: [`Signal`] for shared values and
//! [`Memo`] for values derived from one signal. There is no scheduler; every
//! notification runs to completion inside the write that caused it.

pub mod memo;
pub mod signal;

pub use memo::Memo;
pub use signal::{Signal, Subscription, SubscriptionId};
