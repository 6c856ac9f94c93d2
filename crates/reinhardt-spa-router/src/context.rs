//! Route context scoped to a render pass.
//!
//! Views read the current path parameters and query through the accessors
//! here. The context exists only while [`provide_route_context`] runs; each
//! resolution installs its own, so no state leaks between passes.
//!
//! ```
//! use reinhardt_spa_router::context::{RouteContext, provide_route_context, use_params};
//! use reinhardt_spa_router::{Params, QueryMap};
//!
//! let params: Params = [("userId", "42")].into_iter().collect();
//! let ctx = RouteContext::new("/c/42", params, QueryMap::new());
//!
//! let user = provide_route_context(ctx, || use_params().get("userId").map(str::to_string));
//! assert_eq!(user.as_deref(), Some("42"));
//! assert!(use_params().is_empty());
//! ```

use crate::error::RouterError;
use crate::matcher::Params;
use crate::query::QueryMap;
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

/// Path, parameters and query of the route being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
	/// Path that was resolved.
	pub path: String,
	/// Parameters bound by the match.
	pub params: Params,
	/// Query mapping of the location snapshot.
	pub query: QueryMap,
}

impl RouteContext {
	/// Creates a context.
	pub fn new(path: impl Into<String>, params: Params, query: QueryMap) -> Self {
		Self {
			path: path.into(),
			params,
			query,
		}
	}

	/// Parses the parameter `name` into `T`.
	///
	/// A missing or malformed value is reported as
	/// [`RouterError::PathExtraction`].
	pub fn param<T>(&self, name: &str) -> Result<T, RouterError>
	where
		T: FromStr,
		T::Err: fmt::Display,
	{
		Ok(self.params.parse(name)?)
	}
}

thread_local! {
	static ROUTE_CONTEXT: RefCell<Vec<RouteContext>> = const { RefCell::new(Vec::new()) };
}

/// Pops the installed context when the render pass ends, including on unwind.
struct ContextGuard;

impl Drop for ContextGuard {
	fn drop(&mut self) {
		ROUTE_CONTEXT.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// Installs `ctx` for the duration of `f`.
///
/// Calls nest: an inner provider shadows the outer one until it returns.
pub fn provide_route_context<R>(ctx: RouteContext, f: impl FnOnce() -> R) -> R {
	ROUTE_CONTEXT.with(|stack| stack.borrow_mut().push(ctx));
	let _guard = ContextGuard;
	f()
}

/// Returns the innermost installed context.
pub fn use_route_context() -> Option<RouteContext> {
	ROUTE_CONTEXT.with(|stack| stack.borrow().last().cloned())
}

/// Returns the current path parameters, empty outside a render pass.
pub fn use_params() -> Params {
	ROUTE_CONTEXT.with(|stack| {
		stack
			.borrow()
			.last()
			.map(|ctx| ctx.params.clone())
			.unwrap_or_default()
	})
}

/// Returns the current query mapping, empty outside a render pass.
pub fn use_query() -> QueryMap {
	ROUTE_CONTEXT.with(|stack| {
		stack
			.borrow()
			.last()
			.map(|ctx| ctx.query.clone())
			.unwrap_or_default()
	})
}
