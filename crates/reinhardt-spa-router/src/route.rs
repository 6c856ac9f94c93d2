//! Declarative route tree.
//!
//! A [`RouteNode`] pairs a path pattern with a view, an optional layout and an
//! optional loading fallback. Children are declared relative to their parent,
//! so `/c` with a child `/:userId` covers `/c/42`.
//!
//! Views, layouts and fallbacks are values of a single host-chosen type `V`.
//! The engine never inspects them; it only decides which ones to hand to the
//! rendering boundary and in what nesting.
//!
//! # Example
//!
//! ```
//! use reinhardt_spa_router::RouteNode;
//!
//! let tree = vec![
//! 	RouteNode::new("/a", "RouteA"),
//! 	RouteNode::lazy("/c", "RouteC")
//! 		.layout("Layout")
//! 		.child(RouteNode::lazy("/:userId", "RouteD").fallback("Loading user")),
//! ];
//!
//! assert_eq!(tree[1].children_nodes().len(), 1);
//! assert!(tree[1].children_nodes()[0].is_async());
//! ```

use std::fmt;

/// Prefix that marks a parameter segment (`:userId`).
pub const PARAM_MARKER: char = ':';

/// A single node of the declarative route tree.
#[derive(Clone)]
pub struct RouteNode<V> {
	/// Segment pattern, relative to the parent.
	path: String,
	/// The view rendered when this node terminates the match.
	view: V,
	/// Whether the view loads asynchronously behind a suspension boundary.
	is_async: bool,
	/// Placeholder shown while an async view loads.
	fallback: Option<V>,
	/// Wrapper receiving the resolved output as nested content.
	layout: Option<V>,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// Child nodes, in declaration order.
	children: Vec<RouteNode<V>>,
}

impl<V> RouteNode<V> {
	/// Creates a node with a synchronously available view.
	pub fn new(path: impl Into<String>, view: V) -> Self {
		Self {
			path: path.into(),
			view,
			is_async: false,
			fallback: None,
			layout: None,
			name: None,
			children: Vec::new(),
		}
	}

	/// Creates a node whose view loads asynchronously.
	pub fn lazy(path: impl Into<String>, view: V) -> Self {
		Self::new(path, view).with_async(true)
	}

	/// Sets whether the view is asynchronously loaded.
	pub fn with_async(mut self, is_async: bool) -> Self {
		self.is_async = is_async;
		self
	}

	/// Sets the loading placeholder for this node's own suspension boundary.
	pub fn fallback(mut self, fallback: V) -> Self {
		self.fallback = Some(fallback);
		self
	}

	/// Sets the layout wrapping this node and, unless overridden, its descendants.
	pub fn layout(mut self, layout: V) -> Self {
		self.layout = Some(layout);
		self
	}

	/// Names this node for [`Router::reverse`](crate::Router::reverse).
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Appends a child node.
	pub fn child(mut self, child: RouteNode<V>) -> Self {
		self.children.push(child);
		self
	}

	/// Appends several child nodes, keeping their order.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = RouteNode<V>>,
	{
		self.children.extend(children);
		self
	}

	/// Returns the node's own path pattern.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the node's view.
	pub fn view(&self) -> &V {
		&self.view
	}

	/// Returns whether the view is asynchronously loaded.
	pub fn is_async(&self) -> bool {
		self.is_async
	}

	/// Returns the node's own fallback.
	pub fn fallback_view(&self) -> Option<&V> {
		self.fallback.as_ref()
	}

	/// Returns the node's own layout.
	pub fn layout_view(&self) -> Option<&V> {
		self.layout.as_ref()
	}

	/// Returns the route name.
	pub fn route_name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the child nodes.
	pub fn children_nodes(&self) -> &[RouteNode<V>] {
		&self.children
	}

	/// Returns whether this node declares children.
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}
}

impl<V: fmt::Debug> fmt::Debug for RouteNode<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteNode")
			.field("path", &self.path)
			.field("view", &self.view)
			.field("is_async", &self.is_async)
			.field("has_fallback", &self.fallback.is_some())
			.field("has_layout", &self.layout.is_some())
			.field("name", &self.name)
			.field("children", &self.children)
			.finish()
	}
}

/// Joins a parent's absolute path with a child's relative path.
///
/// The child gets a leading `/` when it does not carry one, so both `"e"`
/// and `"/e"` under `/c/:userId` produce `/c/:userId/e`.
pub fn join_path(parent: &str, path: &str) -> String {
	if path.starts_with('/') {
		format!("{}{}", parent, path)
	} else {
		format!("{}/{}", parent, path)
	}
}

/// Splits a path into its `/`-delimited, non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
	path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Returns the bound name when `segment` is a parameter segment.
pub fn param_name(segment: &str) -> Option<&str> {
	segment.strip_prefix(PARAM_MARKER)
}
