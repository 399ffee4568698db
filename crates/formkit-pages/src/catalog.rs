//! Static reference data
//!
//! Countries, cities, areas, genders and languages are constant tables. Widgets
//! and cascades read them through [`ReferenceData`] so that option filtering
//! never depends on how the tables are stored.

use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
	pub id: u32,
	pub label: &'static str,
	pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
	pub id: u32,
	pub country_id: u32,
	pub label: &'static str,
	pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
	pub id: u32,
	pub city_id: u32,
	pub label: &'static str,
	pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gender {
	pub id: u32,
	pub label: &'static str,
	pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
	pub label: &'static str,
	pub value: &'static str,
}

/// One entry of a select, radio group or combobox
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectOption {
	pub label: String,
	pub value: String,
}

impl SelectOption {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

macro_rules! impl_select_option {
	($($ty:ty),*) => {
		$(
			impl From<&$ty> for SelectOption {
				fn from(record: &$ty) -> Self {
					SelectOption::new(record.label, record.value)
				}
			}
		)*
	};
}

impl_select_option!(Country, City, Area, Gender, Language);

pub const COUNTRIES: &[Country] = &[
	Country { id: 1, label: "Egypt", value: "egypt" },
	Country { id: 2, label: "KSA", value: "ksa" },
	Country { id: 3, label: "UAE", value: "uae" },
];

pub const CITIES: &[City] = &[
	City { id: 1, country_id: 1, label: "Alexandria", value: "alex" },
	City { id: 2, country_id: 1, label: "Cairo", value: "cairo" },
	City { id: 3, country_id: 1, label: "Mansoura", value: "mansoura" },
	City { id: 4, country_id: 2, label: "Lorem", value: "lorem" },
	City { id: 5, country_id: 2, label: "Ipsum", value: "ipsum" },
	City { id: 6, country_id: 3, label: "Gada", value: "gada" },
];

pub const AREAS: &[Area] = &[Area { id: 1, city_id: 2, label: "Old Town", value: "old-town" }];

pub const GENDERS: &[Gender] = &[
	Gender { id: 0, label: "Male", value: "male" },
	Gender { id: 1, label: "Female", value: "female" },
	Gender { id: 2, label: "Others", value: "others" },
];

pub const LANGUAGES: &[Language] = &[
	Language { label: "English", value: "en" },
	Language { label: "French", value: "fr" },
	Language { label: "German", value: "de" },
	Language { label: "Spanish", value: "es" },
	Language { label: "Portuguese", value: "pt" },
	Language { label: "Russian", value: "ru" },
	Language { label: "Japanese", value: "ja" },
	Language { label: "Korean", value: "ko" },
	Language { label: "Chinese", value: "zh" },
];

/// Broken relation or duplicate found by [`ReferenceData::check_integrity`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
	#[error("duplicate {table} value '{value}'")]
	DuplicateValue { table: &'static str, value: String },

	#[error("city '{city}' references missing country id {country_id}")]
	MissingCountry { city: String, country_id: u32 },

	#[error("area '{area}' references missing city id {city_id}")]
	MissingCity { area: String, city_id: u32 },
}

/// Read-only lookups over the reference tables
pub trait ReferenceData {
	fn countries(&self) -> &[Country];
	fn cities(&self) -> &[City];
	fn areas(&self) -> &[Area];
	fn genders(&self) -> &[Gender];
	fn languages(&self) -> &[Language];

	fn country_by_value(&self, value: &str) -> Option<&Country> {
		self.countries().iter().find(|c| c.value == value)
	}

	fn country_by_id(&self, id: u32) -> Option<&Country> {
		self.countries().iter().find(|c| c.id == id)
	}

	fn city_by_value(&self, value: &str) -> Option<&City> {
		self.cities().iter().find(|c| c.value == value)
	}

	fn language_by_value(&self, value: &str) -> Option<&Language> {
		self.languages().iter().find(|l| l.value == value)
	}

	fn gender_by_value(&self, value: &str) -> Option<&Gender> {
		self.genders().iter().find(|g| g.value == value)
	}

	/// Cities of `country_id`, in table order
	fn cities_of(&self, country_id: u32) -> impl Iterator<Item = &City> {
		self.cities().iter().filter(move |c| c.country_id == country_id)
	}

	/// Areas of `city_id`, in table order
	fn areas_of(&self, city_id: u32) -> impl Iterator<Item = &Area> {
		self.areas().iter().filter(move |a| a.city_id == city_id)
	}

	/// City options for a selected country value.
	///
	/// Empty when nothing is selected or the value is unknown.
	fn city_options(&self, country_value: &str) -> Vec<SelectOption> {
		if country_value.is_empty() {
			return Vec::new();
		}
		match self.country_by_value(country_value) {
			Some(country) => self.cities_of(country.id).map(SelectOption::from).collect(),
			None => Vec::new(),
		}
	}

	fn check_integrity(&self) -> Result<(), IntegrityError> {
		unique("country", self.countries().iter().map(|c| c.value))?;
		unique("city", self.cities().iter().map(|c| c.value))?;
		unique("area", self.areas().iter().map(|a| a.value))?;
		unique("gender", self.genders().iter().map(|g| g.value))?;
		unique("language", self.languages().iter().map(|l| l.value))?;

		for city in self.cities() {
			if self.country_by_id(city.country_id).is_none() {
				return Err(IntegrityError::MissingCountry {
					city: city.value.to_string(),
					country_id: city.country_id,
				});
			}
		}
		for area in self.areas() {
			if !self.cities().iter().any(|c| c.id == area.city_id) {
				return Err(IntegrityError::MissingCity {
					area: area.value.to_string(),
					city_id: area.city_id,
				});
			}
		}
		Ok(())
	}
}

fn unique<'a>(
	table: &'static str,
	values: impl Iterator<Item = &'a str>,
) -> Result<(), IntegrityError> {
	let mut seen = HashSet::new();
	for value in values {
		if !seen.insert(value) {
			return Err(IntegrityError::DuplicateValue {
				table,
				value: value.to_string(),
			});
		}
	}
	Ok(())
}

/// The built-in constant tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl ReferenceData for Catalog {
	fn countries(&self) -> &[Country] {
		COUNTRIES
	}

	fn cities(&self) -> &[City] {
		CITIES
	}

	fn areas(&self) -> &[Area] {
		AREAS
	}

	fn genders(&self) -> &[Gender] {
		GENDERS
	}

	fn languages(&self) -> &[Language] {
		LANGUAGES
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	struct Tables {
		countries: Vec<Country>,
		cities: Vec<City>,
		areas: Vec<Area>,
	}

	impl ReferenceData for Tables {
		fn countries(&self) -> &[Country] {
			&self.countries
		}
		fn cities(&self) -> &[City] {
			&self.cities
		}
		fn areas(&self) -> &[Area] {
			&self.areas
		}
		fn genders(&self) -> &[Gender] {
			GENDERS
		}
		fn languages(&self) -> &[Language] {
			LANGUAGES
		}
	}

	#[rstest]
	fn test_builtin_tables_are_consistent() {
		assert_eq!(Catalog.check_integrity(), Ok(()));
	}

	#[rstest]
	#[case("egypt", &["alex", "cairo", "mansoura"])]
	#[case("ksa", &["lorem", "ipsum"])]
	#[case("uae", &["gada"])]
	#[case("", &[])]
	#[case("france", &[])]
	fn test_city_options(#[case] country: &str, #[case] expected: &[&str]) {
		// Act
		let options = Catalog.city_options(country);

		// Assert
		let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
		assert_eq!(values, expected);
	}

	#[rstest]
	fn test_areas_of_cairo() {
		let cairo = Catalog.city_by_value("cairo").unwrap();
		let areas: Vec<_> = Catalog.areas_of(cairo.id).map(|a| a.label).collect();
		assert_eq!(areas, ["Old Town"]);
	}

	#[rstest]
	fn test_lookups() {
		assert_eq!(Catalog.country_by_id(2).map(|c| c.value), Some("ksa"));
		assert_eq!(Catalog.language_by_value("ja").map(|l| l.label), Some("Japanese"));
		assert_eq!(Catalog.gender_by_value("others").map(|g| g.id), Some(2));
		assert!(Catalog.gender_by_value("x").is_none());
	}

	#[rstest]
	fn test_option_conversion() {
		let option = SelectOption::from(&COUNTRIES[0]);
		assert_eq!(option, SelectOption::new("Egypt", "egypt"));
	}

	#[rstest]
	fn test_integrity_detects_dangling_city() {
		// Arrange
		let tables = Tables {
			countries: COUNTRIES.to_vec(),
			cities: vec![City { id: 9, country_id: 42, label: "Nowhere", value: "nowhere" }],
			areas: Vec::new(),
		};

		// Act
		let result = tables.check_integrity();

		// Assert
		assert_eq!(
			result,
			Err(IntegrityError::MissingCountry {
				city: "nowhere".to_string(),
				country_id: 42,
			})
		);
	}

	#[rstest]
	fn test_integrity_detects_duplicates() {
		let tables = Tables {
			countries: vec![COUNTRIES[0], COUNTRIES[0]],
			cities: Vec::new(),
			areas: Vec::new(),
		};
		assert!(matches!(
			tables.check_integrity(),
			Err(IntegrityError::DuplicateValue { table: "country", .. })
		));
	}

	proptest! {
		#[test]
		fn prop_city_options_match_fk_filter(index in 0usize..COUNTRIES.len()) {
			let country = COUNTRIES[index];
			let expected: Vec<_> = CITIES
				.iter()
				.filter(|c| c.country_id == country.id)
				.map(|c| c.value.to_string())
				.collect();
			let actual: Vec<_> = Catalog
				.city_options(country.value)
				.into_iter()
				.map(|o| o.value)
				.collect();
			prop_assert_eq!(actual, expected);
		}
	}
}
