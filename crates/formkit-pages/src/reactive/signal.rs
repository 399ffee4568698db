//! Signal - shared reactive value
//!
//! `Signal<T>` holds a value behind `Rc<RefCell<T>>` and notifies subscribers
//! synchronously after every write. Clones share the same value and the same
//! subscriber list.
//!
//! ## Example
//!
//! ```
//! use formkit_pages::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = seen.clone();
//! let _watch = count.watch(move |n| sink.set(*n));
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! assert_eq!(seen.get(), 43);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle returned by [`Signal::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
	next_id: Cell<u64>,
}

/// A reactive value with synchronous change notification
pub struct Signal<T: 'static> {
	inner: Rc<Inner<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Clone + 'static> Signal<T> {
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(Inner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_id: Cell::new(0),
			}),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T {
		self.inner.value.borrow().clone()
	}

	/// Read the current value without cloning it
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&*self.inner.value.borrow())
	}

	/// Replace the value and notify subscribers
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutate the value in place, then notify subscribers once
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut *self.inner.value.borrow_mut());
		self.notify();
	}

	/// Set the value only if it differs from the current one.
	///
	/// Returns whether subscribers were notified.
	pub fn set_if_changed(&self, value: T) -> bool
	where
		T: PartialEq,
	{
		if *self.inner.value.borrow() == value {
			return false;
		}
		self.set(value);
		true
	}

	/// Register `callback`, called with the new value after every write.
	///
	/// The subscription lives until [`Signal::unsubscribe`] is called.
	pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.inner.next_id.get());
		self.inner.next_id.set(id.0 + 1);
		self.inner
			.subscribers
			.borrow_mut()
			.push((id, Rc::new(callback)));
		id
	}

	/// Remove a subscriber. Returns false if `id` was not registered.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.inner.subscribers.borrow_mut();
		let before = subscribers.len();
		subscribers.retain(|(sid, _)| *sid != id);
		subscribers.len() != before
	}

	/// Like [`Signal::subscribe`], but the subscription ends when the
	/// returned guard is dropped.
	#[must_use = "the watch ends as soon as the Subscription is dropped"]
	pub fn watch(&self, callback: impl Fn(&T) + 'static) -> Subscription {
		let id = self.subscribe(callback);
		let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
		Subscription {
			cancel: Some(Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					Signal { inner }.unsubscribe(id);
				}
			})),
		}
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	/// Whether both handles point at the same value
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	fn notify(&self) {
		// Subscribers may subscribe, unsubscribe or write while being notified,
		// so neither the list nor the value stays borrowed across the calls.
		let subscribers: Vec<Callback<T>> = self
			.inner
			.subscribers
			.borrow()
			.iter()
			.map(|(_, cb)| Rc::clone(cb))
			.collect();
		if subscribers.is_empty() {
			return;
		}
		let value = self.get();
		for callback in subscribers {
			callback(&value);
		}
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

/// Guard returned by [`Signal::watch`]; unsubscribes on drop
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Keep the subscription alive for the lifetime of the signal
	pub fn detach(mut self) {
		self.cancel = None;
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.cancel.is_some())
			.finish()
	}
}
