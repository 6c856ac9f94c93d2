//! Path matching against a nested route tree.
//!
//! The matcher walks the tree depth-first in declaration order. At each node
//! it builds the node's absolute pattern (parent pattern + own path) and
//! compares segment lists with the target:
//!
//! 1. Equal segment counts: every pattern segment must be a parameter or
//!    equal to the target segment. A full match terminates the search at
//!    this node, even if it has children.
//! 2. Otherwise the node is an ancestor candidate when the target starts with
//!    its absolute pattern, or when the pattern contains a parameter marker.
//!    Candidates recurse into their children; the first child match wins and
//!    picks up this node's layout if it has none of its own.
//!
//! There is no ranking across branches: the first successful match in
//! depth-first declaration order is the result.

use crate::error::PathError;
use crate::route::{PARAM_MARKER, RouteNode, join_path, param_name, segments};
use std::collections::HashMap;
use std::str::FromStr;

/// Path parameters bound by a match, keyed by declared parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the percent-decoded segment bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Parses the segment bound to `name` into `T`.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::Params;
	///
	/// let params: Params = [("userId", "42")].into_iter().collect();
	/// let user_id: u64 = params.parse("userId").unwrap();
	/// assert_eq!(user_id, 42);
	/// ```
	pub fn parse<T>(&self, name: &str) -> Result<T, PathError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let raw = self
			.get(name)
			.ok_or_else(|| PathError::Missing(name.to_string()))?;

		raw.parse::<T>().map_err(|e| PathError::ParseError {
			name: name.to_string(),
			param_type: std::any::type_name::<T>(),
			raw_value: raw.to_string(),
			reason: e.to_string(),
		})
	}

	/// Returns the number of bound parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether no parameter is bound.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(name, value)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// A matched route with extracted parameters and resolved wrappers.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
	/// The deepest node that terminates the path.
	pub route: &'a RouteNode<V>,
	/// Extracted path parameters.
	pub params: Params,
	/// Nearest layout on the matched chain, the most specific one winning.
	pub layout: Option<&'a V>,
	/// The matched node's own fallback; never inherited.
	pub fallback: Option<&'a V>,
}

impl<V> Clone for RouteMatch<'_, V> {
	fn clone(&self) -> Self {
		Self {
			route: self.route,
			params: self.params.clone(),
			layout: self.layout,
			fallback: self.fallback,
		}
	}
}

/// Matches `target` against the route tree.
///
/// Returns `None` when no node matches; the caller renders its not-found
/// view. The result depends only on `tree` and `target`.
///
/// # Example
///
/// ```
/// use reinhardt_spa_router::{RouteNode, match_routes};
///
/// let tree = vec![RouteNode::new("/c", "C").child(
/// 	RouteNode::new("/:userId", "D").child(RouteNode::new("/e", "E").child(RouteNode::new("/:postId", "F"))),
/// )];
///
/// let matched = match_routes(&tree, "/c/42/e/7").unwrap();
/// assert_eq!(*matched.route.view(), "F");
/// assert_eq!(matched.params.get("userId"), Some("42"));
/// assert_eq!(matched.params.get("postId"), Some("7"));
/// ```
pub fn match_routes<'a, V>(tree: &'a [RouteNode<V>], target: &str) -> Option<RouteMatch<'a, V>> {
	let target_segments = segments(target);
	find_route(tree, target, &target_segments, "")
}

fn find_route<'a, V>(
	routes: &'a [RouteNode<V>],
	target: &str,
	target_segments: &[&str],
	parent_path: &str,
) -> Option<RouteMatch<'a, V>> {
	for route in routes {
		let full_path = join_path(parent_path, route.path());
		let pattern_segments = segments(&full_path);

		if pattern_segments.len() == target_segments.len()
			&& let Some(params) = bind_segments(&pattern_segments, target_segments)
		{
			return Some(RouteMatch {
				route,
				params,
				layout: route.layout_view(),
				fallback: route.fallback_view(),
			});
		}

		let is_candidate = target.starts_with(full_path.as_str()) || full_path.contains(PARAM_MARKER);
		if is_candidate
			&& route.has_children()
			&& let Some(child_match) =
				find_route(route.children_nodes(), target, target_segments, &full_path)
		{
			// Ancestors bind nothing at this stage; only the layout propagates.
			return Some(RouteMatch {
				layout: child_match.layout.or(route.layout_view()),
				..child_match
			});
		}
	}

	None
}

/// Compares equally long segment lists, binding parameter segments.
///
/// Bound values are percent-decoded; a segment that does not decode to UTF-8
/// is bound as written.
fn bind_segments(pattern: &[&str], target: &[&str]) -> Option<Params> {
	let mut params = HashMap::new();

	for (pattern_segment, target_segment) in pattern.iter().zip(target) {
		match param_name(pattern_segment) {
			Some(name) => {
				let value = urlencoding::decode(target_segment)
					.map(|decoded| decoded.into_owned())
					.unwrap_or_else(|_| (*target_segment).to_string());
				params.insert(name.to_string(), value);
			}
			None if pattern_segment == target_segment => {}
			None => return None,
		}
	}

	Some(Params(params))
}
