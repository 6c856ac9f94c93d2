//! Navigation facade.
//!
//! [`Navigator`] is the only writer of the current location. Every mutation
//! follows the same order: update platform history, read back the URL the
//! platform now shows, replace the location, then notify subscribers
//! synchronously in subscription order.
//!
//! Back/forward moves reported by the platform go through the same path
//! without touching history again.

use crate::error::RouterError;
use crate::history::{History, NavigationType};
use crate::location::{Location, LocationStore, resolve_url};
use crate::query::QueryParams;
use crate::reactive::Subscription;
use crate::settings::RouterSettings;
use crate::{debug_log, warn_log};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// An activation event whose default platform behavior can be suppressed.
pub trait LinkEvent {
	/// Suppresses the platform's default link navigation.
	fn prevent_default(&self);

	/// Returns whether a modifier key or non-primary button was involved,
	/// in which case the platform should handle the click (new tab, etc.).
	fn is_modified(&self) -> bool {
		false
	}
}

#[cfg(target_arch = "wasm32")]
impl LinkEvent for web_sys::Event {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

#[cfg(target_arch = "wasm32")]
impl LinkEvent for web_sys::MouseEvent {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}

	fn is_modified(&self) -> bool {
		self.ctrl_key() || self.meta_key() || self.shift_key() || self.alt_key() || self.button() != 0
	}
}

/// A host-free click event.
///
/// Native hosts and tests use it to drive link activation and observe
/// whether the default action was suppressed.
#[derive(Debug, Default)]
pub struct SyntheticClick {
	default_prevented: Cell<bool>,
	modified: bool,
}

impl SyntheticClick {
	/// Creates a plain primary-button click.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a click with a modifier key held.
	pub fn modified() -> Self {
		Self {
			default_prevented: Cell::new(false),
			modified: true,
		}
	}

	/// Returns whether the default action was suppressed.
	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl LinkEvent for SyntheticClick {
	fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	fn is_modified(&self) -> bool {
		self.modified
	}
}

struct NavigatorInner {
	history: Rc<dyn History>,
	location: LocationStore,
	settings: RouterSettings,
}

impl NavigatorInner {
	fn commit(&self, url: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		let next = match nav_type {
			NavigationType::Push => {
				self.history.push(url)?;
				self.recorded(url)
			}
			NavigationType::Replace => {
				self.history.replace(url)?;
				self.recorded(url)
			}
			NavigationType::Pop => Location::parse(url),
		};

		if self.settings.log_navigation {
			let from = self.location.path();
			debug_log!("navigation ({:?}): {} -> {}", nav_type, from, next.to_url());
		}
		self.location.set(next);
		Ok(())
	}

	/// The location the platform shows after `url` was pushed or replaced.
	///
	/// Read back from history so relative and query-only URLs agree with the
	/// address bar. Without a readable platform URL, `url` is resolved
	/// against the current location instead.
	fn recorded(&self, url: &str) -> Location {
		match self.history.location() {
			Ok(shown) => Location::parse(&shown),
			Err(e) => {
				debug_log!("navigation: cannot read back {} ({}), resolving locally", url, e);
				let base = self.location.with(Location::to_url);
				Location::parse(&resolve_url(&base, url))
			}
		}
	}
}

/// Handle to the navigation engine.
///
/// Cloning is cheap; all clones share the same history and location.
#[derive(Clone)]
pub struct Navigator {
	inner: Rc<NavigatorInner>,
}

impl Navigator {
	/// Creates a navigator with default settings.
	pub fn new<H: History + 'static>(history: H) -> Self {
		Self::with_settings(history, RouterSettings::default())
	}

	/// Creates a navigator with explicit settings.
	pub fn with_settings<H: History + 'static>(history: H, settings: RouterSettings) -> Self {
		Self::from_shared(Rc::new(history), settings)
	}

	/// Creates a navigator over a history the caller keeps a handle to.
	///
	/// The initial location is read from the platform. When that fails the
	/// configured `initial_path` is used instead.
	pub fn from_shared(history: Rc<dyn History>, settings: RouterSettings) -> Self {
		let initial = match history.location() {
			Ok(url) => Location::parse(&url),
			Err(e) => {
				warn_log!(
					"navigation: cannot read platform location ({}), starting at {}",
					e,
					settings.initial_path
				);
				Location::parse(&settings.initial_path)
			}
		};

		let inner = Rc::new(NavigatorInner {
			history: Rc::clone(&history),
			location: LocationStore::new(initial),
			settings,
		});

		let weak = Rc::downgrade(&inner);
		let listening = history.listen(Box::new(move |url: &str| {
			if let Some(inner) = weak.upgrade()
				&& let Err(e) = inner.commit(url, NavigationType::Pop)
			{
				warn_log!("navigation: pop to {} failed: {}", url, e);
			}
		}));
		if let Err(e) = listening {
			warn_log!("navigation: back/forward events unavailable: {}", e);
		}

		Self { inner }
	}

	/// Pushes `path` (which may carry a query) and notifies subscribers.
	///
	/// Any string is accepted; a malformed path simply fails to match later.
	/// Relative paths and query-only strings such as `?tab=2` resolve against
	/// the current location, as they do in the address bar.
	pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
		self.inner.commit(path, NavigationType::Push)
	}

	/// Replaces the current history entry with `path` and notifies subscribers.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.inner.commit(path, NavigationType::Replace)
	}

	/// Suppresses the event's default navigation, then navigates to `path`.
	pub fn activate_link<E>(&self, path: &str, event: &E) -> Result<(), RouterError>
	where
		E: LinkEvent + ?Sized,
	{
		event.prevent_default();
		self.navigate(path)
	}

	/// Moves one entry back.
	pub fn back(&self) -> Result<(), RouterError> {
		self.inner.history.back()
	}

	/// Moves one entry forward.
	pub fn forward(&self) -> Result<(), RouterError> {
		self.inner.history.forward()
	}

	/// Registers a listener invoked with the new path on every location change.
	///
	/// When a listener navigates, the nested change is delivered to every
	/// listener first and the rest of the outer delivery is dropped, so the
	/// last path a listener receives is always the current one.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_spa_router::{MemoryHistory, Navigator};
	/// use std::cell::RefCell;
	/// use std::rc::Rc;
	///
	/// let navigator = Navigator::new(MemoryHistory::new("/"));
	/// let seen = Rc::new(RefCell::new(Vec::new()));
	///
	/// let log = Rc::clone(&seen);
	/// let subscription = navigator.subscribe(move |path| log.borrow_mut().push(path.to_string()));
	///
	/// navigator.navigate("/b").unwrap();
	/// subscription.unsubscribe();
	/// navigator.navigate("/c").unwrap();
	///
	/// assert_eq!(*seen.borrow(), vec!["/b".to_string()]);
	/// ```
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&str) + 'static,
	{
		self.inner
			.location
			.subscribe(move |location: &Location| listener(&location.path))
	}

	/// Registers a listener receiving the full location on every change.
	pub fn subscribe_location<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&Location) + 'static,
	{
		self.inner.location.subscribe(listener)
	}

	/// Returns a snapshot of the current location.
	pub fn location(&self) -> Location {
		self.inner.location.snapshot()
	}

	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.inner.location.path()
	}

	/// Returns the underlying location store.
	pub fn location_store(&self) -> &LocationStore {
		&self.inner.location
	}

	/// Returns the query parameter accessor.
	pub fn query(&self) -> QueryParams {
		QueryParams::new(self.clone())
	}

	/// Merges `entries` into the current query and pushes `path?query`.
	///
	/// The path is unchanged. When the merged mapping is empty only the path
	/// is pushed.
	pub fn update_query_params<I, K, V>(&self, entries: I) -> Result<(), RouterError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut location = self.location();
		location.query.merge(entries);
		self.inner.commit(&location.to_url(), NavigationType::Push)
	}

	/// Returns the active settings.
	pub fn settings(&self) -> &RouterSettings {
		&self.inner.settings
	}
}

impl fmt::Debug for Navigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("location", &self.location().to_url())
			.field("subscribers", &self.inner.location.subscriber_count())
			.field("settings", &self.inner.settings)
			.finish()
	}
}
