//! Query string mapping.
//!
//! [`QueryMap`] is the key/value view of a URL's query component. Keys are
//! unique and values are always strings. Entries are kept ordered by key so
//! that serialization is deterministic.
//!
//! Parsing is lenient: a piece without `=` or with an invalid
//! percent-encoding is dropped and the rest of the string is still parsed.
//! An empty key is an ordinary key, so `=x` reads as `("", "x")`. `+` is kept
//! literally rather than read as a space.

use crate::debug_log;
use crate::error::RouterError;
use crate::navigation::Navigator;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from query key to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap(BTreeMap<String, String>);

impl QueryMap {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a query component, with or without its leading `?`.
	///
	/// When a key appears more than once the last value wins.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::QueryMap;
	///
	/// let query = QueryMap::parse("?mode=edit&title=Hello%20World&broken");
	/// assert_eq!(query.get("mode"), Some("edit"));
	/// assert_eq!(query.get("title"), Some("Hello World"));
	/// assert_eq!(query.len(), 2);
	/// ```
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let mut entries = BTreeMap::new();

		for piece in query.split('&').filter(|p| !p.is_empty()) {
			let Some((raw_key, raw_value)) = piece.split_once('=') else {
				debug_log!("query: dropping piece without '=': {}", piece);
				continue;
			};

			let decoded = urlencoding::decode(raw_key)
				.and_then(|key| urlencoding::decode(raw_value).map(|value| (key, value)));
			match decoded {
				Ok((key, value)) => {
					entries.insert(key.into_owned(), value.into_owned());
				}
				Err(e) => {
					debug_log!("query: dropping undecodable piece {}: {}", piece, e);
				}
			}
		}

		Self(entries)
	}

	/// Serializes the mapping without a leading `?`.
	///
	/// Keys and values are percent-encoded; only unreserved characters are
	/// written literally.
	pub fn to_query_string(&self) -> String {
		self.0
			.iter()
			.map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
			.collect::<Vec<_>>()
			.join("&")
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Inserts or overwrites a single entry, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Merges `entries` in: new keys are added, existing keys overwritten and
	/// untouched keys preserved.
	pub fn merge<I, K, V>(&mut self, entries: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in entries {
			self.0.insert(key.into(), value.into());
		}
	}

	/// Iterates over entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether the mapping is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Decodes the mapping into a typed struct.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::QueryMap;
	/// use serde::Deserialize;
	///
	/// #[derive(Deserialize)]
	/// struct Filter {
	/// 	page: u32,
	/// 	tag: Option<String>,
	/// }
	///
	/// let filter: Filter = QueryMap::parse("page=3").deserialize().unwrap();
	/// assert_eq!(filter.page, 3);
	/// assert!(filter.tag.is_none());
	/// ```
	pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_urlencoded::de::Error> {
		serde_urlencoded::from_str(&self.to_query_string())
	}
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.merge(iter);
		map
	}
}

impl IntoIterator for QueryMap {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Query parameter accessor bound to a [`Navigator`].
///
/// Reads always reflect the location currently held by the navigator, so a
/// back/forward event is visible on the next read.
#[derive(Debug, Clone)]
pub struct QueryParams {
	navigator: Navigator,
}

impl QueryParams {
	pub(crate) fn new(navigator: Navigator) -> Self {
		Self { navigator }
	}

	/// Returns a copy of the current mapping.
	pub fn snapshot(&self) -> QueryMap {
		self.navigator.location().query
	}

	/// Returns the current value stored under `key`.
	pub fn get(&self, key: &str) -> Option<String> {
		self.navigator
			.location_store()
			.with(|location| location.query.get(key).map(str::to_string))
	}

	/// Merges `entries` into the current query and pushes a history entry
	/// with the same path.
	pub fn update<I, K, V>(&self, entries: I) -> Result<(), RouterError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.navigator.update_query_params(entries)
	}
}
