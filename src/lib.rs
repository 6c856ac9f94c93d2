//! # Reinhardt SPA
//!
//! Client-side navigation for Reinhardt single-page applications.
//!
//! The engine lives in `reinhardt-spa-router` and is re-exported here as
//! [`router`]. Most applications only need the [`prelude`].
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_spa::prelude::*;
//!
//! let navigator = Navigator::new(MemoryHistory::new("/"));
//! let router = Router::new(navigator.clone())
//! 	.route(RouteNode::new("/", "Home"))
//! 	.route(RouteNode::new("/users", "Users").child(RouteNode::new("/:id", "UserDetail")))
//! 	.not_found("NotFound");
//!
//! navigator.navigate("/users/42").unwrap();
//! let resolution = router.resolve();
//! assert_eq!(resolution.output, Rendered::View("UserDetail"));
//! assert_eq!(resolution.context.params.get("id"), Some("42"));
//! ```
//!
//! On `wasm32` targets, build the navigator over
//! `BrowserHistory::new()?` to drive `window.history` instead.

pub mod router;

/// Commonly used types for building and driving a router.
pub mod prelude {
	pub use reinhardt_spa_router::prelude::*;
}

pub use reinhardt_spa_router::{
	Link, Location, MemoryHistory, Navigator, QueryMap, Rendered, RouteNode, Router,
	RouterError, RouterSettings,
};

// Logging macros are exported via #[macro_export] from the engine crate.
// Users can access them as: reinhardt_spa::router::debug_log!, etc.
