//! Configuration sources for layered settings
//!
//! Each source yields a tree of JSON values; the builder deep-merges them in
//! priority order (environment variables > config files > defaults).

use crate::settings::{Settings, SettingsError};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Separator between nested keys in environment variable names
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Default prefix of environment variables read by [`EnvSource`]
pub const DEFAULT_ENV_PREFIX: &str = "FORMKIT_";

/// Keys whose environment value is a comma-separated list
const LIST_KEYS: &[&str] = &["fill_colors", "tooltips"];

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Built-in defaults, taken from [`Settings::default`]
pub struct DefaultSource {
	settings: Settings,
}

impl DefaultSource {
	pub fn new() -> Self {
		Self {
			settings: Settings::default(),
		}
	}
	/// Use `settings` as the base layer instead of the built-in defaults
	pub fn with_settings(settings: Settings) -> Self {
		Self { settings }
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let value =
			serde_json::to_value(&self.settings).map_err(|e| SettingsError::Parse(e.to_string()))?;
		object_entries(value)
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Built-in defaults".to_string()
	}
}

/// TOML file configuration source
///
/// A missing file contributes nothing.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// # Examples
	///
	/// ```
	/// use formkit_conf::TomlFileSource;
	/// use std::path::PathBuf;
	///
	/// let source = TomlFileSource::new(PathBuf::from("formkit.toml"));
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		if !self.path.exists() {
			tracing::debug!(path = %self.path.display(), "settings file not found, skipping");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)
			.map_err(|e| SettingsError::Parse(format!("{}: {}", self.path.display(), e)))?;

		let json_value =
			serde_json::to_value(&toml_value).map_err(|e| SettingsError::Parse(e.to_string()))?;
		object_entries(json_value)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variable configuration source
///
/// `FORMKIT_PASSWORD__SHOW_STRENGTH=false` becomes
/// `{"password": {"show_strength": false}}`. Values are read as JSON scalars
/// when they parse as such and as strings otherwise.
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
		}
	}
	/// Set the variable prefix
	///
	/// # Examples
	///
	/// ```
	/// use formkit_conf::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("MYAPP_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Fold `(name, value)` pairs into a nested tree, ignoring names without
	/// the prefix.
	pub fn collect<I>(&self, vars: I) -> Result<IndexMap<String, Value>, SettingsError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut config = IndexMap::new();

		for (key, raw) in vars {
			let Some(stripped) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let path: Vec<String> = stripped
				.split(ENV_NESTING_SEPARATOR)
				.map(str::to_lowercase)
				.collect();
			if path.iter().any(String::is_empty) {
				return Err(SettingsError::Env {
					key,
					message: "empty key segment".to_string(),
				});
			}
			let leaf = path.last().map(String::as_str).unwrap_or_default();
			let value = parse_env_value(leaf, &raw);
			insert_path(&mut config, &path, value).map_err(|message| SettingsError::Env {
				key: key.clone(),
				message,
			})?;
		}

		Ok(config)
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		self.collect(std::env::vars())
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

fn parse_env_value(leaf: &str, raw: &str) -> Value {
	if LIST_KEYS.contains(&leaf) && !raw.trim_start().starts_with('[') {
		return Value::Array(
			raw.split(',')
				.map(str::trim)
				.filter(|s| !s.is_empty())
				.map(|s| Value::String(s.to_string()))
				.collect(),
		);
	}
	match serde_json::from_str::<Value>(raw) {
		Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::Array(_))) => value,
		_ => Value::String(raw.to_string()),
	}
}

fn insert_path(
	config: &mut IndexMap<String, Value>,
	path: &[String],
	value: Value,
) -> Result<(), String> {
	let Some((head, rest)) = path.split_first() else {
		return Ok(());
	};
	if rest.is_empty() {
		config.insert(head.clone(), value);
		return Ok(());
	}
	let entry = config
		.entry(head.clone())
		.or_insert_with(|| Value::Object(serde_json::Map::new()));
	let Value::Object(map) = entry else {
		return Err(format!("'{}' is not a table", head));
	};
	let mut current = map;
	for (i, segment) in rest.iter().enumerate() {
		if i + 1 == rest.len() {
			current.insert(segment.clone(), value);
			return Ok(());
		}
		let next = current
			.entry(segment.clone())
			.or_insert_with(|| Value::Object(serde_json::Map::new()));
		let Value::Object(next) = next else {
			return Err(format!("'{}' is not a table", segment));
		};
		current = next;
	}
	Ok(())
}

fn object_entries(value: Value) -> Result<IndexMap<String, Value>, SettingsError> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SettingsError::Parse("Expected object at root".to_string())),
	}
}

/// Merge `overlay` into `base`, recursing into nested objects.
pub(crate) fn deep_merge(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Object(base), Value::Object(overlay)) => {
			for (key, value) in overlay {
				match base.get_mut(&key) {
					Some(existing) => deep_merge(existing, value),
					None => {
						base.insert(key, value);
					}
				}
			}
		}
		(base, overlay) => *base = overlay,
	}
}
