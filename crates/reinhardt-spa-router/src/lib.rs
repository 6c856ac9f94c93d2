//! Reinhardt SPA Router - client-side navigation engine
//!
//! Resolves the current location against a declarative route tree, composes
//! the matched view with its layout and suspension boundary, and keeps the
//! output in sync with back/forward moves, programmatic navigation and link
//! clicks, all without a page reload.
//!
//! ## Architecture
//!
//! - [`route`]: declarative route tree ([`RouteNode`])
//! - [`matcher`]: depth-first path matching ([`match_routes`])
//! - [`composer`]: layout/suspension composition and the [`RenderBoundary`] seam
//! - [`location`]: current location and its store
//! - [`query`]: query string mapping and accessor
//! - [`navigation`]: the [`Navigator`] facade
//! - [`history`]: platform navigation primitives (memory and browser)
//! - [`reactive`]: single-threaded observable value
//! - [`context`]: route context scoped to a render pass
//! - [`components`]: [`Link`] and [`Redirect`]
//! - [`core`](crate::core): the [`Router`] tying it together
//!
//! ## Example
//!
//! ```
//! use reinhardt_spa_router::prelude::*;
//!
//! let navigator = Navigator::new(MemoryHistory::new("/"));
//! let router = Router::new(navigator.clone())
//! 	.route(RouteNode::new("/a", "RouteA"))
//! 	.route(RouteNode::lazy("/b", "RouteB"))
//! 	.route(
//! 		RouteNode::lazy("/c", "RouteC").layout("Shell").child(
//! 			RouteNode::lazy("/:userId", "RouteD")
//! 				.child(RouteNode::lazy("/e", "RouteE").child(RouteNode::lazy("/:postId", "RouteF"))),
//! 		),
//! 	)
//! 	.not_found("NotFound")
//! 	.default_fallback("Loading...");
//!
//! navigator.navigate("/c/42/e/7").unwrap();
//! let resolution = router.resolve();
//! assert_eq!(resolution.output.to_string(), "Shell(Suspense[Loading...](RouteF))");
//! assert_eq!(resolution.context.params.get("postId"), Some("7"));
//!
//! navigator.navigate("/z").unwrap();
//! assert!(router.resolve().output.is_not_found());
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod composer;
pub mod context;
pub mod core;
pub mod error;
pub mod history;
pub mod location;
pub mod logging;
pub mod matcher;
pub mod navigation;
pub mod prelude;
pub mod query;
pub mod reactive;
pub mod route;
pub mod settings;

pub use components::{Link, Redirect};
pub use composer::{RenderBoundary, Rendered, RouteComposer};
pub use context::{RouteContext, provide_route_context, use_params, use_query, use_route_context};
pub use crate::core::{Resolution, Router};
pub use error::{PathError, RouterError};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, MemoryHistory, NavigationType};
pub use location::{Location, LocationStore};
pub use matcher::{Params, RouteMatch, match_routes};
pub use navigation::{LinkEvent, Navigator, SyntheticClick};
pub use query::{QueryMap, QueryParams};
pub use reactive::{Signal, Subscription};
pub use route::RouteNode;
pub use settings::RouterSettings;

// Used by the logging macros.
#[doc(hidden)]
pub use tracing as __tracing;
#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys as __web_sys;
