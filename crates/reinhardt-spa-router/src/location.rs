//! Current location and its store.
//!
//! [`LocationStore`] is the single owner of the current [`Location`]. Only the
//! navigator writes to it; the matcher and query accessors read snapshots.

use crate::query::QueryMap;
use crate::reactive::{Signal, Subscription};
use std::fmt;

/// A parsed location: `/`-rooted path plus query mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	/// Current pathname, always `/`-rooted.
	pub path: String,
	/// Current query mapping.
	pub query: QueryMap,
}

impl Location {
	/// Creates a location for `path` with an empty query.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: normalize_path(&path.into()),
			query: QueryMap::new(),
		}
	}

	/// Parses a URL-like string of the form `path[?query][#fragment]`.
	///
	/// The fragment is ignored and an empty path becomes `/`.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::Location;
	///
	/// let location = Location::parse("/posts?page=2#top");
	/// assert_eq!(location.path, "/posts");
	/// assert_eq!(location.query.get("page"), Some("2"));
	/// ```
	pub fn parse(url: &str) -> Self {
		let without_fragment = strip_fragment(url);
		let (path, query) = without_fragment
			.split_once('?')
			.unwrap_or((without_fragment, ""));

		Self {
			path: normalize_path(path),
			query: QueryMap::parse(query),
		}
	}

	/// Replaces the query mapping.
	pub fn with_query(mut self, query: QueryMap) -> Self {
		self.query = query;
		self
	}

	/// Renders `path`, or `path?query` when the query is non-empty.
	pub fn to_url(&self) -> String {
		if self.query.is_empty() {
			self.path.clone()
		} else {
			format!("{}?{}", self.path, self.query.to_query_string())
		}
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_url())
	}
}

/// Resolves `reference` against `base` the way the browser resolves a
/// same-document history URL.
///
/// Both sides are `path[?query][#fragment]` strings and the result is
/// `path[?query]`:
///
/// - an empty or fragment-only reference keeps the base path and query
/// - a query-only reference keeps the base path
/// - a `/`-rooted reference replaces the path
/// - any other reference is joined to the base directory, then `.` and `..`
///   segments are removed
///
/// An absolute `scheme://host/...` reference keeps only its path and query;
/// the platform rejects cross-origin entries anyway.
///
/// # Example
///
/// ```
/// use reinhardt_spa_router::location::resolve_url;
///
/// assert_eq!(resolve_url("/c/42", "?tab=2"), "/c/42?tab=2");
/// assert_eq!(resolve_url("/c/42", "b"), "/c/b");
/// assert_eq!(resolve_url("/c/42/e", "../x?y=1"), "/c/x?y=1");
/// ```
pub fn resolve_url(base: &str, reference: &str) -> String {
	let base = strip_fragment(base);
	let reference = strip_fragment(reference);
	let (base_path, _) = base.split_once('?').unwrap_or((base, ""));
	let base_path = normalize_path(base_path);

	if reference.is_empty() {
		return match base.split_once('?') {
			Some((_, query)) => format!("{}?{}", base_path, query),
			None => base_path,
		};
	}
	if reference.starts_with('?') {
		return format!("{}{}", base_path, reference);
	}

	let reference = strip_origin(reference);
	let (reference_path, query) = match reference.split_once('?') {
		Some((path, query)) => (path, Some(query)),
		None => (reference, None),
	};

	let merged = if reference_path.starts_with('/') {
		reference_path.to_string()
	} else {
		let directory = base_path.rfind('/').map_or("/", |i| &base_path[..=i]);
		format!("{}{}", directory, reference_path)
	};
	let path = remove_dot_segments(&merged);

	match query {
		Some(query) => format!("{}?{}", path, query),
		None => path,
	}
}

fn strip_fragment(url: &str) -> &str {
	url.split_once('#').map_or(url, |(head, _)| head)
}

fn strip_origin(url: &str) -> &str {
	match url.split_once("://") {
		Some((scheme, rest))
			if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) =>
		{
			rest.find(['/', '?']).map_or("/", |i| &rest[i..])
		}
		_ => url,
	}
}

fn remove_dot_segments(path: &str) -> String {
	let mut output: Vec<&str> = Vec::new();
	let mut trailing_slash = false;

	for segment in path.split('/').skip(1) {
		trailing_slash = false;
		match segment {
			"." => trailing_slash = true,
			".." => {
				output.pop();
				trailing_slash = true;
			}
			other => output.push(other),
		}
	}

	let mut resolved = format!("/{}", output.join("/"));
	if trailing_slash && !resolved.ends_with('/') {
		resolved.push('/');
	}
	resolved
}

fn normalize_path(path: &str) -> String {
	if path.is_empty() {
		"/".to_string()
	} else if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{}", path)
	}
}

/// Owner of the current [`Location`].
#[derive(Debug, Clone)]
pub struct LocationStore {
	current: Signal<Location>,
}

impl LocationStore {
	/// Creates a store holding `initial`.
	pub fn new(initial: Location) -> Self {
		Self {
			current: Signal::new(initial),
		}
	}

	/// Returns a stable copy of the current location.
	pub fn snapshot(&self) -> Location {
		self.current.get()
	}

	/// Reads the current location without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&Location) -> R) -> R {
		self.current.with(f)
	}

	/// Returns the current path.
	pub fn path(&self) -> String {
		self.current.with(|location| location.path.clone())
	}

	/// Replaces the location and notifies subscribers.
	pub(crate) fn set(&self, location: Location) {
		self.current.set(location);
	}

	/// Registers a listener for location changes.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&Location) + 'static,
	{
		self.current.subscribe(listener)
	}

	/// Returns the number of registered listeners.
	pub fn subscriber_count(&self) -> usize {
		self.current.subscriber_count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[rstest]
	#[case("/posts", "/posts", 0)]
	#[case("/posts?page=2", "/posts", 1)]
	#[case("/posts?page=2#frag", "/posts", 1)]
	#[case("/posts#frag?page=2", "/posts", 0)]
	#[case("", "/", 0)]
	#[case("?page=2", "/", 1)]
	#[case("posts", "/posts", 0)]
	fn test_parse(#[case] url: &str, #[case] path: &str, #[case] query_len: usize) {
		let location = Location::parse(url);
		assert_eq!(location.path, path);
		assert_eq!(location.query.len(), query_len);
	}

	#[rstest]
	#[case("/c/42", "/about", "/about")]
	#[case("/c/42", "/about?x=1#top", "/about?x=1")]
	#[case("/c/42", "?tab=2", "/c/42?tab=2")]
	#[case("/c/42?tab=1", "?tab=2", "/c/42?tab=2")]
	#[case("/c/42?tab=1", "", "/c/42?tab=1")]
	#[case("/c/42?tab=1", "#section", "/c/42?tab=1")]
	#[case("/c/42", "b", "/c/b")]
	#[case("/c/42/", "b", "/c/42/b")]
	#[case("/c/42/e", "../x?y=1", "/c/x?y=1")]
	#[case("/c/42", "./", "/c/")]
	#[case("/c/42", "../../..", "/")]
	#[case("/", "posts", "/posts")]
	#[case("/c/42", "https://app.example/d/1?k=v", "/d/1?k=v")]
	#[case("/c/42", "https://app.example", "/")]
	fn test_resolve_url(#[case] base: &str, #[case] reference: &str, #[case] expected: &str) {
		assert_eq!(resolve_url(base, reference), expected);
	}

	#[rstest]
	fn test_to_url() {
		assert_eq!(Location::new("/a").to_url(), "/a");

		let location = Location::parse("/a?x=1&y=two%20words");
		assert_eq!(location.to_url(), "/a?x=1&y=two%20words");
		assert_eq!(location.to_string(), "/a?x=1&y=two%20words");
	}

	#[rstest]
	fn test_store_notifies_on_set() {
		let store = LocationStore::new(Location::new("/"));
		let seen = Rc::new(RefCell::new(Vec::new()));

		let log = Rc::clone(&seen);
		store.subscribe(move |location: &Location| log.borrow_mut().push(location.path.clone()));

		store.set(Location::new("/b"));
		assert_eq!(store.path(), "/b");
		assert_eq!(*seen.borrow(), vec!["/b".to_string()]);
	}
}
