//! Logging macros for the navigation engine.
//!
//! The macros work across WASM and native targets:
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | `console.info` | `tracing::info!` |
//! | `warn_log!` | `console.warn` | `tracing::warn!` |
//! | `error_log!` | `console.error` | `tracing::error!` |
//!
//! On native targets the events carry the `reinhardt_spa_router` target, so a
//! host subscriber can filter them like any other `tracing` output.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_spa_router::{debug_log, warn_log};
//!
//! debug_log!("navigate: {} -> {}", from, to);
//! warn_log!("history unavailable: {}", err);
//! ```

/// Logs a debug message.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__tracing::debug!(target: "reinhardt_spa_router", $($arg)*);
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__tracing::info!(target: "reinhardt_spa_router", $($arg)*);
	}};
}

/// Logs a warning message.
///
/// Used for platform failures the engine recovers from, such as a missing
/// `window` during startup.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__tracing::warn!(target: "reinhardt_spa_router", $($arg)*);
	}};
}

/// Logs an error message.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__tracing::error!(target: "reinhardt_spa_router", $($arg)*);
	}};
}
