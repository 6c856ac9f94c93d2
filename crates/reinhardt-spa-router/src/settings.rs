//! Router settings.
//!
//! Settings can be built in code or decoded from JSON (for example from a
//! `<script type="application/json">` block emitted by the server).

use crate::error::RouterError;
use serde::{Deserialize, Serialize};

/// Default number of entries kept by [`MemoryHistory`](crate::history::MemoryHistory).
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Configuration for the navigation engine.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSettings {
	/// Path used when the platform cannot report the current location.
	#[serde(default = "default_initial_path")]
	pub initial_path: String,

	/// Maximum number of entries kept by the in-memory history.
	#[serde(default = "default_history_limit")]
	pub history_limit: usize,

	/// Emit a debug event for every navigation.
	#[serde(default = "default_log_navigation")]
	pub log_navigation: bool,
}

fn default_initial_path() -> String {
	"/".to_string()
}

fn default_history_limit() -> usize {
	DEFAULT_HISTORY_LIMIT
}

fn default_log_navigation() -> bool {
	true
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			initial_path: default_initial_path(),
			history_limit: default_history_limit(),
			log_navigation: default_log_navigation(),
		}
	}
}

impl RouterSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback initial path.
	pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
		self.initial_path = path.into();
		self
	}

	/// Sets the in-memory history limit.
	pub fn with_history_limit(mut self, limit: usize) -> Self {
		self.history_limit = limit;
		self
	}

	/// Enables or disables navigation logging.
	pub fn with_log_navigation(mut self, enabled: bool) -> Self {
		self.log_navigation = enabled;
		self
	}

	/// Decodes and validates settings from a JSON document.
	///
	/// Missing fields take their default values.
	pub fn from_json(json: &str) -> Result<Self, RouterError> {
		let settings: Self =
			serde_json::from_str(json).map_err(|e| RouterError::InvalidSettings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Validate settings
	pub fn validate(&self) -> Result<(), RouterError> {
		if !self.initial_path.starts_with('/') {
			return Err(RouterError::InvalidSettings(format!(
				"initial_path must start with '/', got '{}'",
				self.initial_path
			)));
		}

		if self.history_limit == 0 {
			return Err(RouterError::InvalidSettings(
				"history_limit must be greater than zero".to_string(),
			));
		}

		Ok(())
	}
}
