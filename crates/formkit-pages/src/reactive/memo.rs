//! Memo - derived reactive value
//!
//! A `Memo<T>` recomputes from its source signal synchronously on every source
//! write, and notifies its own subscribers only when the derived value is
//! different from the previous one.

use super::signal::{Signal, Subscription, SubscriptionId};
use std::fmt;

/// A derived value over one source signal
///
/// # Example
///
/// ```
/// use formkit_pages::reactive::{Memo, Signal};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let n = Signal::new(3);
/// let parity = Memo::new(&n, |n| n % 2);
/// let changes = Rc::new(Cell::new(0));
///
/// let sink = changes.clone();
/// let _watch = parity.watch(move |_| sink.set(sink.get() + 1));
///
/// n.set(5); // still odd
/// n.set(6);
/// assert_eq!(parity.get(), 0);
/// assert_eq!(changes.get(), 1);
/// ```
pub struct Memo<T: 'static> {
	output: Signal<T>,
	_source: Subscription,
}

impl<T: Clone + PartialEq + 'static> Memo<T> {
	pub fn new<S, F>(source: &Signal<S>, compute: F) -> Self
	where
		S: Clone + 'static,
		F: Fn(&S) -> T + 'static,
	{
		let output = Signal::new(source.with(&compute));
		let sink = output.clone();
		let watch = source.watch(move |value| {
			sink.set_if_changed(compute(value));
		});
		Self {
			output,
			_source: watch,
		}
	}

	pub fn get(&self) -> T {
		self.output.get()
	}

	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.output.with(f)
	}

	pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
		self.output.subscribe(callback)
	}

	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		self.output.unsubscribe(id)
	}

	#[must_use = "the watch ends as soon as the Subscription is dropped"]
	pub fn watch(&self, callback: impl Fn(&T) + 'static) -> Subscription {
		self.output.watch(callback)
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Memo<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Memo").field("output", &self.output).finish()
	}
}
