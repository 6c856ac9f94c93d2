//! Route composition.
//!
//! [`RouteComposer`] turns a [`RouteMatch`] into a [`Rendered`] tree:
//!
//! | layout | async | output |
//! |--------|-------|--------|
//! | yes | yes | `Layout(Suspense(fallback or default, View))` |
//! | yes | no  | `Layout(View)` |
//! | no  | yes | `Suspense(none, View)` |
//! | no  | no  | `View` |
//!
//! The suspension node is declarative: it tells the host to show the
//! fallback while the view loads and swap the view in once ready. The engine
//! never polls loading state.
//!
//! A host mounts the tree through its [`RenderBoundary`] implementation.

use crate::context::RouteContext;
use crate::matcher::RouteMatch;
use std::fmt;

/// Declarative output of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<V> {
	/// A view rendered as-is.
	View(V),
	/// A layout receiving `content` as nested content.
	Layout {
		/// Wrapper view.
		layout: V,
		/// Wrapped output.
		content: Box<Rendered<V>>,
	},
	/// A suspension boundary around an asynchronously loaded view.
	Suspense {
		/// Placeholder while loading; `None` shows nothing.
		fallback: Option<V>,
		/// Output once loaded.
		content: Box<Rendered<V>>,
	},
	/// The designated not-found view.
	NotFound(V),
	/// Nothing matched and no not-found view is configured.
	Empty,
}

impl<V> Rendered<V> {
	/// Returns whether this is a not-found outcome.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Rendered::NotFound(_) | Rendered::Empty)
	}

	/// Returns the innermost view, skipping layouts and suspension boundaries.
	pub fn view(&self) -> Option<&V> {
		match self {
			Rendered::View(view) => Some(view),
			Rendered::Layout { content, .. } | Rendered::Suspense { content, .. } => content.view(),
			Rendered::NotFound(_) | Rendered::Empty => None,
		}
	}

	/// Returns the layout wrapping the output, if any.
	pub fn layout(&self) -> Option<&V> {
		match self {
			Rendered::Layout { layout, .. } => Some(layout),
			_ => None,
		}
	}

	/// Mounts the tree through `boundary`, innermost node first.
	pub fn mount<B>(&self, boundary: &mut B, ctx: &RouteContext) -> B::Node
	where
		B: RenderBoundary<V> + ?Sized,
	{
		match self {
			Rendered::View(view) => boundary.view(view, ctx),
			Rendered::Layout { layout, content } => {
				let inner = content.mount(boundary, ctx);
				boundary.layout(layout, inner, ctx)
			}
			Rendered::Suspense { fallback, content } => {
				let inner = content.mount(boundary, ctx);
				boundary.suspense(fallback.as_ref(), inner)
			}
			Rendered::NotFound(view) => boundary.not_found(view, ctx),
			Rendered::Empty => boundary.empty(),
		}
	}
}

impl<V: fmt::Display> fmt::Display for Rendered<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rendered::View(view) => write!(f, "{}", view),
			Rendered::Layout { layout, content } => write!(f, "{}({})", layout, content),
			Rendered::Suspense {
				fallback: Some(fallback),
				content,
			} => write!(f, "Suspense[{}]({})", fallback, content),
			Rendered::Suspense {
				fallback: None,
				content,
			} => write!(f, "Suspense[]({})", content),
			Rendered::NotFound(view) => write!(f, "{}", view),
			Rendered::Empty => Ok(()),
		}
	}
}

/// The hosting framework's rendering surface.
///
/// The engine calls these in post-order while mounting a [`Rendered`] tree.
pub trait RenderBoundary<V> {
	/// The host's node type.
	type Node;

	/// Renders a route view.
	fn view(&mut self, view: &V, ctx: &RouteContext) -> Self::Node;

	/// Wraps already-rendered content in a layout.
	fn layout(&mut self, layout: &V, content: Self::Node, ctx: &RouteContext) -> Self::Node;

	/// Establishes a suspension boundary around `content`.
	fn suspense(&mut self, fallback: Option<&V>, content: Self::Node) -> Self::Node;

	/// Renders the not-found view.
	fn not_found(&mut self, view: &V, ctx: &RouteContext) -> Self::Node {
		self.view(view, ctx)
	}

	/// Renders nothing.
	fn empty(&mut self) -> Self::Node;
}

/// Builds [`Rendered`] output from matches.
#[derive(Debug, Clone)]
pub struct RouteComposer<V> {
	default_fallback: Option<V>,
}

impl<V> Default for RouteComposer<V> {
	fn default() -> Self {
		Self {
			default_fallback: None,
		}
	}
}

impl<V: Clone> RouteComposer<V> {
	/// Creates a composer without a default fallback.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the placeholder used when an async view under a layout has no
	/// fallback of its own.
	pub fn with_default_fallback(mut self, fallback: V) -> Self {
		self.default_fallback = Some(fallback);
		self
	}

	/// Returns the default fallback.
	pub fn default_fallback(&self) -> Option<&V> {
		self.default_fallback.as_ref()
	}

	/// Composes the output for `matched`.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::{RouteComposer, RouteNode, match_routes};
	///
	/// let tree = vec![RouteNode::new("/c", "C").layout("L1").child(RouteNode::lazy("/:userId", "D"))];
	/// let composer = RouteComposer::new().with_default_fallback("Loading...");
	///
	/// let matched = match_routes(&tree, "/c/42").unwrap();
	/// assert_eq!(composer.compose(&matched).to_string(), "L1(Suspense[Loading...](D))");
	/// ```
	pub fn compose(&self, matched: &RouteMatch<'_, V>) -> Rendered<V> {
		let view = Rendered::View(matched.route.view().clone());

		match (matched.layout, matched.route.is_async()) {
			(Some(layout), true) => Rendered::Layout {
				layout: layout.clone(),
				content: Box::new(Rendered::Suspense {
					fallback: matched.fallback.or(self.default_fallback.as_ref()).cloned(),
					content: Box::new(view),
				}),
			},
			(Some(layout), false) => Rendered::Layout {
				layout: layout.clone(),
				content: Box::new(view),
			},
			(None, true) => Rendered::Suspense {
				fallback: None,
				content: Box::new(view),
			},
			(None, false) => view,
		}
	}
}
