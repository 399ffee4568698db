//! Searchable single-choice list

use super::WidgetError;
use crate::catalog::SelectOption;
use crate::form::FormValue;
use crate::reactive::Signal;

pub const COMBOBOX_PLACEHOLDER: &str = "Select language";
pub const COMBOBOX_SEARCH_PLACEHOLDER: &str = "Search framework...";
pub const COMBOBOX_EMPTY_TEXT: &str = "No framework found.";

/// Combobox bound to a form value.
///
/// Search matches labels case-insensitively, with the query characters
/// appearing in order but not necessarily adjacent ("eng" and "egl" both
/// match "English").
#[derive(Debug, Clone)]
pub struct Combobox {
	options: Vec<SelectOption>,
	value: Signal<FormValue>,
	query: String,
	open: bool,
}

impl Combobox {
	pub fn new<I, O>(value: Signal<FormValue>, options: I) -> Self
	where
		I: IntoIterator<Item = O>,
		O: Into<SelectOption>,
	{
		Self {
			options: options.into_iter().map(Into::into).collect(),
			value,
			query: String::new(),
			open: false,
		}
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn set_open(&mut self, open: bool) {
		self.open = open;
		if !open {
			self.query.clear();
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn search_placeholder(&self) -> &'static str {
		COMBOBOX_SEARCH_PLACEHOLDER
	}

	/// Options matching the current query, in list order
	pub fn filtered(&self) -> Vec<&SelectOption> {
		self.options
			.iter()
			.filter(|o| fuzzy_match(&o.label, &self.query))
			.collect()
	}

	/// Text shown instead of the list when nothing matches
	pub fn empty_text(&self) -> Option<&'static str> {
		self.filtered().is_empty().then_some(COMBOBOX_EMPTY_TEXT)
	}

	pub fn is_checked(&self, value: &str) -> bool {
		self.value.with(|v| v.as_text() == value)
	}

	/// Trigger text: the selected label, else the placeholder
	///
	/// # Examples
	///
	/// ```
	/// use formkit_pages::catalog::LANGUAGES;
	/// use formkit_pages::form::FormValue;
	/// use formkit_pages::reactive::Signal;
	/// use formkit_pages::widgets::Combobox;
	///
	/// let value = Signal::new(FormValue::text("fr"));
	/// let combobox = Combobox::new(value.clone(), LANGUAGES);
	/// assert_eq!(combobox.display_label(), "French");
	///
	/// value.set(FormValue::text(""));
	/// assert_eq!(combobox.display_label(), "Select language");
	/// ```
	pub fn display_label(&self) -> String {
		self.value
			.with(|v| {
				let current = v.as_text();
				if current.is_empty() {
					return None;
				}
				self.options
					.iter()
					.find(|o| o.value == current)
					.map(|o| o.label.clone())
			})
			.unwrap_or_else(|| COMBOBOX_PLACEHOLDER.to_string())
	}

	/// Choose the option with `value`
	pub fn select(&mut self, value: &str) -> Result<(), WidgetError> {
		if !self.options.iter().any(|o| o.value == value) {
			return Err(WidgetError::UnknownOption(value.to_string()));
		}
		self.value.set(FormValue::text(value));
		Ok(())
	}
}

fn fuzzy_match(label: &str, query: &str) -> bool {
	let mut label = label.chars().flat_map(char::to_lowercase);
	query
		.trim()
		.chars()
		.flat_map(char::to_lowercase)
		.filter(|c| !c.is_whitespace())
		.all(|q| label.any(|l| l == q))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{LANGUAGES, Language};
	use rstest::{fixture, rstest};

	#[fixture]
	fn languages() -> Combobox {
		Combobox::new(Signal::new(FormValue::text("en")), LANGUAGES)
	}

	#[rstest]
	#[case("", 9)]
	#[case("eng", 1)]
	#[case("ENG", 1)]
	#[case("egl", 1)]
	#[case("an", 5)]
	#[case("xyz", 0)]
	fn test_filter(languages: Combobox, #[case] query: &str, #[case] expected: usize) {
		// Arrange
		let mut combobox = languages;

		// Act
		combobox.set_query(query);

		// Assert
		assert_eq!(combobox.filtered().len(), expected);
	}

	#[rstest]
	fn test_empty_text_only_without_matches(mut languages: Combobox) {
		assert_eq!(languages.empty_text(), None);
		languages.set_query("klingon");
		assert_eq!(languages.empty_text(), Some("No framework found."));
	}

	#[rstest]
	fn test_select_checks_item(mut languages: Combobox) {
		languages.select("ja").unwrap();
		assert!(languages.is_checked("ja"));
		assert!(!languages.is_checked("en"));
		assert_eq!(languages.display_label(), "Japanese");
	}

	#[rstest]
	fn test_select_unknown(mut languages: Combobox) {
		assert!(languages.select("tlh").is_err());
		assert_eq!(languages.display_label(), "English");
	}

	#[rstest]
	fn test_closing_clears_query(mut languages: Combobox) {
		languages.set_open(true);
		languages.set_query("fr");
		languages.set_open(false);
		assert_eq!(languages.query(), "");
	}

	#[rstest]
	fn test_unknown_value_shows_placeholder() {
		let combobox = Combobox::new(
			Signal::new(FormValue::text("xx")),
			LANGUAGES.iter().map(|l: &Language| SelectOption::from(l)),
		);
		assert_eq!(combobox.display_label(), "Select language");
	}
}
