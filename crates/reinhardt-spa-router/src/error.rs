//! Error types for client-side navigation.
//!
//! Failing to match a route is not an error: the matcher returns `None` and
//! the router renders its not-found view. The types here cover platform
//! failures, misconfiguration and typed parameter extraction.

/// Error type for path parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
	/// The requested parameter was not bound by the matched route.
	#[error("Missing path parameter: {0}")]
	Missing(String),
	/// Failed to parse a parameter value.
	#[error("Failed to parse parameter '{name}' value '{raw_value}' as {param_type}: {reason}")]
	ParseError {
		/// Name of the parameter that failed to parse.
		name: String,
		/// Expected type name.
		param_type: &'static str,
		/// Raw string value that failed to parse.
		raw_value: String,
		/// Error message from parsing.
		reason: String,
	},
}

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// No route carries the requested name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Missing parameter for reverse URL.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),
	/// The platform rejected a history operation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// The platform navigation primitives are not reachable (no window).
	#[error("Navigation platform unavailable: {0}")]
	PlatformUnavailable(String),
	/// Router settings failed validation or could not be decoded.
	#[error("Invalid router settings: {0}")]
	InvalidSettings(String),
	/// Path parameter extraction failed.
	#[error("Path extraction error: {0}")]
	PathExtraction(#[from] PathError),
}
