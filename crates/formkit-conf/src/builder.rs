//! Settings builder

use crate::settings::{Settings, SettingsError};
use crate::sources::{ConfigSource, DefaultSource, EnvSource, TomlFileSource, deep_merge};
use serde_json::Value;
use std::path::Path;

/// Builds [`Settings`] from layered sources.
///
/// Sources are merged in ascending [`ConfigSource::priority`]; sources of
/// equal priority are merged in the order they were added, so the later one
/// wins. The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use formkit_conf::{DefaultSource, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new())
///     .build()
///     .unwrap();
/// assert_eq!(settings.area_sentinel_city, "cairo");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Defaults, then `path` if given, then `FORMKIT_` environment variables.
	pub fn standard(path: Option<&Path>) -> Self {
		let mut builder = Self::new().add_source(DefaultSource::new());
		if let Some(path) = path {
			builder = builder.add_source(TomlFileSource::new(path));
		}
		builder.add_source(EnvSource::new())
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	pub fn source_descriptions(&self) -> Vec<String> {
		self.sources.iter().map(|s| s.description()).collect()
	}

	pub fn build(self) -> Result<Settings, SettingsError> {
		let mut sources = self.sources;
		sources.sort_by_key(|s| s.priority());

		let mut merged = Value::Object(serde_json::Map::new());
		for source in &sources {
			let layer = source.load()?;
			tracing::debug!(
				source = %source.description(),
				keys = layer.len(),
				"merging settings source"
			);
			deep_merge(&mut merged, Value::Object(layer.into_iter().collect()));
		}

		let settings: Settings =
			serde_json::from_value(merged).map_err(|e| SettingsError::Parse(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}
}
