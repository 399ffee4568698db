//! Dependent options
//!
//! A [`Cascade`] derives the option list of a child field from its parent
//! field's value. Whenever the derived list changes, the child selection is
//! reset to the head of the new list (or emptied), even when the previous
//! selection is still one of the options.

use super::values::FormValue;
use crate::catalog::{ReferenceData, SelectOption};
use crate::reactive::{Memo, Signal, Subscription};

/// Explicit `parent -> child options` edge
pub struct Cascade {
	options: Memo<Vec<SelectOption>>,
	_reset: Subscription,
}

impl Cascade {
	/// Wire `child` to the options derived from `parent`.
	///
	/// The child is moved to the head of the initial list right away, the
	/// same way it is after every later change.
	pub fn new<F>(parent: &Signal<FormValue>, child: &Signal<FormValue>, derive: F) -> Self
	where
		F: Fn(&str) -> Vec<SelectOption> + 'static,
	{
		let options = Memo::new(parent, move |value: &FormValue| derive(value.as_text()));

		child.set_if_changed(FormValue::Text(options.with(|o| head(o))));

		let target = child.clone();
		let reset = options.watch(move |options| {
			let next = head(options);
			tracing::debug!(
				options = options.len(),
				selected = %next,
				"dependent options changed, resetting selection"
			);
			target.set(FormValue::Text(next));
		});

		Self {
			options,
			_reset: reset,
		}
	}

	/// Country to city cascade over `data`
	///
	/// # Examples
	///
	/// ```
	/// use formkit_pages::catalog::Catalog;
	/// use formkit_pages::form::{Cascade, FormValue};
	/// use formkit_pages::reactive::Signal;
	///
	/// let country = Signal::new(FormValue::text("egypt"));
	/// let city = Signal::new(FormValue::text("mansoura"));
	/// let cascade = Cascade::country_city(Catalog, &country, &city);
	/// assert_eq!(city.get(), FormValue::text("alex"));
	///
	/// country.set(FormValue::text("ksa"));
	/// assert_eq!(city.get(), FormValue::text("lorem"));
	/// assert_eq!(cascade.options().len(), 2);
	/// ```
	pub fn country_city<R>(data: R, country: &Signal<FormValue>, city: &Signal<FormValue>) -> Self
	where
		R: ReferenceData + 'static,
	{
		Self::new(country, city, move |value| data.city_options(value))
	}

	/// Current derived options
	pub fn options(&self) -> Vec<SelectOption> {
		self.options.get()
	}

	/// Called after the derived options change, after the child was reset
	#[must_use = "the watch ends as soon as the Subscription is dropped"]
	pub fn watch_options(&self, f: impl Fn(&Vec<SelectOption>) + 'static) -> Subscription {
		self.options.watch(f)
	}
}

fn head(options: &[SelectOption]) -> String {
	options.first().map(|o| o.value.clone()).unwrap_or_default()
}
