//! Errors raised while loading tracker settings.

/// Error type for invalid tracker settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// A setting could not be parsed
	#[error("invalid value for {key}: {value:?}")]
	InvalidValue {
		/// Name of the setting
		key: &'static str,
		/// Value that failed to parse
		value: String,
	},
}
