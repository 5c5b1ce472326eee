//! Tracker configuration
//!
//! [`TrackerOptions`] configures one tracker: an optional label, the output
//! level, an on/off switch and the sink. [`TrackerSettings`] is the
//! serializable subset, loadable from the environment.
//!
//! ## Environment
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `DEPWATCH_ENABLED` | `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` | `true` |
//! | `DEPWATCH_LEVEL` | `trace`, `debug`, `info`, `warn`, `error` | `debug` |
//! | `DEPWATCH_LABEL` | any text | unset |

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sink::{DiagnosticEntry, DiagnosticSink, TracingSink};

/// Environment variable toggling output
pub const ENV_ENABLED: &str = "DEPWATCH_ENABLED";
/// Environment variable selecting the output level
pub const ENV_LEVEL: &str = "DEPWATCH_LEVEL";
/// Environment variable setting the label
pub const ENV_LABEL: &str = "DEPWATCH_LABEL";

/// Severity used when emitting change entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	/// Trace level
	Trace,
	/// Debug level
	#[default]
	Debug,
	/// Info level
	Info,
	/// Warn level
	Warn,
	/// Error level
	Error,
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"trace" => Ok(Self::Trace),
			"debug" => Ok(Self::Debug),
			"info" => Ok(Self::Info),
			"warn" | "warning" => Ok(Self::Warn),
			"error" => Ok(Self::Error),
			_ => Err(ConfigError::InvalidValue {
				key: ENV_LEVEL,
				value: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Trace => "trace",
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
		};
		f.write_str(name)
	}
}

/// Serializable tracker settings
///
/// # Examples
///
/// ```
/// use depwatch_hooks::{LogLevel, TrackerSettings};
///
/// let settings: TrackerSettings = serde_json::from_str(r#"{"level": "info"}"#).unwrap();
/// assert_eq!(settings.level, LogLevel::Info);
/// assert!(settings.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
	/// Whether change entries are emitted
	pub enabled: bool,
	/// Output level
	pub level: LogLevel,
	/// Prefix identifying the call site
	pub label: Option<String>,
}

impl Default for TrackerSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			level: LogLevel::default(),
			label: None,
		}
	}
}

impl TrackerSettings {
	/// Load settings from `DEPWATCH_*` environment variables
	///
	/// Unset variables keep their defaults.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Load settings through an arbitrary key lookup
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidValue`] when a value cannot be parsed.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut settings = Self::default();

		if let Some(value) = lookup(ENV_ENABLED) {
			settings.enabled = parse_flag(&value).ok_or(ConfigError::InvalidValue {
				key: ENV_ENABLED,
				value,
			})?;
		}
		if let Some(value) = lookup(ENV_LEVEL) {
			settings.level = value.parse()?;
		}
		if let Some(value) = lookup(ENV_LABEL) {
			let value = value.trim();
			if !value.is_empty() {
				settings.label = Some(value.to_string());
			}
		}

		Ok(settings)
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

/// Options for a dependency tracker
///
/// # Examples
///
/// ```
/// use depwatch_hooks::{LogLevel, MemorySink, TrackerOptions};
///
/// let sink = MemorySink::new();
/// let options = TrackerOptions::default()
///     .with_label("ProfileCard")
///     .with_level(LogLevel::Info)
///     .with_sink(sink.clone());
///
/// assert_eq!(options.label(), Some("ProfileCard"));
/// assert!(options.is_enabled());
/// ```
#[derive(Clone)]
pub struct TrackerOptions {
	label: Option<String>,
	level: LogLevel,
	enabled: bool,
	sink: Option<Rc<dyn DiagnosticSink>>,
}

impl Default for TrackerOptions {
	fn default() -> Self {
		Self {
			label: None,
			level: LogLevel::default(),
			enabled: true,
			sink: None,
		}
	}
}

impl TrackerOptions {
	/// Set the label prefixed to every entry
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the level used by the default tracing sink
	pub fn with_level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	/// Enable or silence output
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Replace the default tracing sink
	pub fn with_sink<S>(mut self, sink: S) -> Self
	where
		S: DiagnosticSink + 'static,
	{
		self.sink = Some(Rc::new(sink));
		self
	}

	/// Label prefixed to every entry
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Level used by the default tracing sink
	pub fn level(&self) -> LogLevel {
		self.level
	}

	/// Whether entries are emitted
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Whether a custom sink replaces the tracing sink
	pub fn has_custom_sink(&self) -> bool {
		self.sink.is_some()
	}

	/// Send an entry to the configured sink
	pub(crate) fn emit(&self, entry: &DiagnosticEntry) {
		match &self.sink {
			Some(sink) => sink.emit(entry),
			None => TracingSink::new(self.level).emit(entry),
		}
	}
}

impl From<TrackerSettings> for TrackerOptions {
	fn from(settings: TrackerSettings) -> Self {
		Self {
			label: settings.label,
			level: settings.level,
			enabled: settings.enabled,
			sink: None,
		}
	}
}

impl fmt::Debug for TrackerOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TrackerOptions")
			.field("label", &self.label)
			.field("level", &self.level)
			.field("enabled", &self.enabled)
			.field("custom_sink", &self.sink.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key: &str| map.get(key).cloned()
	}

	#[rstest]
	#[case("trace", LogLevel::Trace)]
	#[case("DEBUG", LogLevel::Debug)]
	#[case(" info ", LogLevel::Info)]
	#[case("warning", LogLevel::Warn)]
	#[case("error", LogLevel::Error)]
	fn test_log_level_from_str(#[case] input: &str, #[case] expected: LogLevel) {
		assert_eq!(input.parse::<LogLevel>(), Ok(expected));
	}

	#[rstest]
	fn test_log_level_rejects_unknown() {
		assert_eq!(
			"loud".parse::<LogLevel>(),
			Err(ConfigError::InvalidValue {
				key: ENV_LEVEL,
				value: "loud".to_string()
			})
		);
	}

	#[rstest]
	fn test_settings_defaults_without_variables() {
		let settings = TrackerSettings::from_lookup(lookup(&[])).unwrap();
		assert_eq!(settings, TrackerSettings::default());
	}

	#[rstest]
	fn test_settings_from_lookup() {
		let settings = TrackerSettings::from_lookup(lookup(&[
			(ENV_ENABLED, "off"),
			(ENV_LEVEL, "warn"),
			(ENV_LABEL, "  Sidebar  "),
		]))
		.unwrap();

		assert!(!settings.enabled);
		assert_eq!(settings.level, LogLevel::Warn);
		assert_eq!(settings.label.as_deref(), Some("Sidebar"));
	}

	#[rstest]
	fn test_settings_blank_label_is_ignored() {
		let settings = TrackerSettings::from_lookup(lookup(&[(ENV_LABEL, "   ")])).unwrap();
		assert_eq!(settings.label, None);
	}

	#[rstest]
	fn test_settings_invalid_flag() {
		let err = TrackerSettings::from_lookup(lookup(&[(ENV_ENABLED, "maybe")])).unwrap_err();
		assert_eq!(
			err,
			ConfigError::InvalidValue {
				key: ENV_ENABLED,
				value: "maybe".to_string()
			}
		);
	}

	#[rstest]
	fn test_settings_deserialize_partial() {
		let settings: TrackerSettings =
			serde_json::from_str(r#"{"enabled": false, "label": "Nav"}"#).unwrap();

		assert!(!settings.enabled);
		assert_eq!(settings.level, LogLevel::Debug);
		assert_eq!(settings.label.as_deref(), Some("Nav"));
	}

	#[rstest]
	fn test_options_from_settings() {
		let options = TrackerOptions::from(TrackerSettings {
			enabled: false,
			level: LogLevel::Error,
			label: Some("Form".to_string()),
		});

		assert!(!options.is_enabled());
		assert_eq!(options.level(), LogLevel::Error);
		assert_eq!(options.label(), Some("Form"));
		assert!(!options.has_custom_sink());
	}

	#[rstest]
	fn test_options_debug_hides_sink() {
		let options = TrackerOptions::default().with_sink(crate::sink::MemorySink::new());
		let rendered = format!("{options:?}");
		assert!(rendered.contains("custom_sink: true"));
	}
}
