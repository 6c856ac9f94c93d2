//! Core router.
//!
//! [`Router`] ties the pieces together: it owns the declared route tree, reads
//! location snapshots from its [`Navigator`], matches them and composes the
//! output handed to the rendering boundary.

use crate::composer::{RenderBoundary, Rendered, RouteComposer};
use crate::context::{RouteContext, provide_route_context};
use crate::debug_log;
use crate::error::RouterError;
use crate::location::Location;
use crate::matcher::{Params, RouteMatch, match_routes};
use crate::navigation::Navigator;
use crate::route::{RouteNode, join_path, param_name};
use std::collections::HashMap;
use std::fmt;

/// Outcome of resolving one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<V> {
	/// Composed output, or the not-found outcome.
	pub output: Rendered<V>,
	/// Context to expose to views during the render pass.
	pub context: RouteContext,
	/// Whether a route matched.
	pub matched: bool,
}

/// The main router.
pub struct Router<V> {
	/// Declared route tree, in declaration order.
	routes: Vec<RouteNode<V>>,
	/// Absolute patterns of named nodes for reverse lookups.
	named_routes: HashMap<String, String>,
	/// View rendered when nothing matches.
	not_found: Option<V>,
	/// Output composer.
	composer: RouteComposer<V>,
	/// Source of location snapshots.
	navigator: Navigator,
}

impl<V> fmt::Debug for Router<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.field("has_not_found", &self.not_found.is_some())
			.field("navigator", &self.navigator)
			.finish()
	}
}

impl<V: Clone> Router<V> {
	/// Creates a router reading locations from `navigator`.
	pub fn new(navigator: Navigator) -> Self {
		Self {
			routes: Vec::new(),
			named_routes: HashMap::new(),
			not_found: None,
			composer: RouteComposer::new(),
			navigator,
		}
	}

	/// Appends a top-level route.
	pub fn route(mut self, node: RouteNode<V>) -> Self {
		collect_names(&node, "", &mut self.named_routes);
		self.routes.push(node);
		self
	}

	/// Appends several top-level routes, keeping their order.
	pub fn routes<I>(self, nodes: I) -> Self
	where
		I: IntoIterator<Item = RouteNode<V>>,
	{
		nodes.into_iter().fold(self, Router::route)
	}

	/// Sets the view rendered when no route matches.
	pub fn not_found(mut self, view: V) -> Self {
		self.not_found = Some(view);
		self
	}

	/// Sets the placeholder for async views under a layout without their own
	/// fallback.
	pub fn default_fallback(mut self, fallback: V) -> Self {
		self.composer = self.composer.with_default_fallback(fallback);
		self
	}

	/// Returns the navigator.
	pub fn navigator(&self) -> &Navigator {
		&self.navigator
	}

	/// Returns the declared route tree.
	pub fn route_tree(&self) -> &[RouteNode<V>] {
		&self.routes
	}

	/// Matches a path against the route tree.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, V>> {
		match_routes(&self.routes, path)
	}

	/// Resolves the navigator's current location.
	pub fn resolve(&self) -> Resolution<V> {
		self.resolve_location(&self.navigator.location())
	}

	/// Resolves an explicit location snapshot.
	pub fn resolve_location(&self, location: &Location) -> Resolution<V> {
		match self.match_path(&location.path) {
			Some(matched) => {
				let output = self.composer.compose(&matched);
				Resolution {
					output,
					context: RouteContext::new(
						location.path.clone(),
						matched.params,
						location.query.clone(),
					),
					matched: true,
				}
			}
			None => {
				debug_log!("router: no route matches {}", location.path);
				let output = match &self.not_found {
					Some(view) => Rendered::NotFound(view.clone()),
					None => Rendered::Empty,
				};
				Resolution {
					output,
					context: RouteContext::new(
						location.path.clone(),
						Params::new(),
						location.query.clone(),
					),
					matched: false,
				}
			}
		}
	}

	/// Resolves the current location and mounts it through `boundary`.
	///
	/// Views read parameters through [`use_params`](crate::context::use_params)
	/// and [`use_query`](crate::context::use_query) while mounting.
	pub fn render_into<B>(&self, boundary: &mut B) -> B::Node
	where
		B: RenderBoundary<V> + ?Sized,
	{
		let Resolution { output, context, .. } = self.resolve();
		let scoped = context.clone();
		provide_route_context(scoped, || output.mount(boundary, &context))
	}

	/// Generates a URL for a named route.
	///
	/// Parameter values are percent-encoded, so a value containing `/` or
	/// `?` stays a single segment and matches back to the same route.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::{MemoryHistory, Navigator, RouteNode, Router};
	///
	/// let router = Router::new(Navigator::new(MemoryHistory::new("/")))
	/// 	.route(RouteNode::new("/c", "C").child(RouteNode::new("/:userId", "D").name("user")));
	///
	/// assert_eq!(router.reverse("user", &[("userId", "42")]).unwrap(), "/c/42");
	/// ```
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let pattern = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let segments = pattern
			.split('/')
			.map(|segment| match param_name(segment) {
				Some(param) => params
					.iter()
					.find(|(key, _)| *key == param)
					.map(|(_, value)| urlencoding::encode(value).into_owned())
					.ok_or_else(|| RouterError::MissingParameter(param.to_string())),
				None => Ok(segment.to_string()),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(segments.join("/"))
	}

	/// Returns the number of top-level routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}
}

/// Records the absolute pattern of every named node under `node`.
///
/// A later declaration of the same name replaces the earlier one.
fn collect_names<V>(node: &RouteNode<V>, parent: &str, names: &mut HashMap<String, String>) {
	let full_path = join_path(parent, node.path());
	if let Some(name) = node.route_name() {
		names.insert(name.to_string(), full_path.clone());
	}
	for child in node.children_nodes() {
		collect_names(child, &full_path, names);
	}
}
