//! Platform navigation primitives.
//!
//! The [`History`] trait is the seam between the navigator and the platform:
//! read the current URL, push or replace an entry without reloading, step
//! through the stack and hear about back/forward moves.
//!
//! - [`MemoryHistory`] keeps the stack in process. Native hosts and tests use
//!   it; pop listeners fire synchronously from [`History::go`].
//! - [`BrowserHistory`] (wasm32 only) drives `window.history` and listens for
//!   `popstate`.

use crate::error::RouterError;
use crate::location::resolve_url;
use crate::settings::{DEFAULT_HISTORY_LIMIT, RouterSettings};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// How a location change entered the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationType {
	/// A new entry was pushed.
	Push,
	/// The current entry was replaced.
	Replace,
	/// The platform moved back or forward.
	Pop,
}

/// Callback invoked with the new URL (`path[?query]`) after a back/forward move.
pub type PopListener = Box<dyn Fn(&str)>;

/// Platform navigation primitives.
pub trait History {
	/// Returns the current URL as `pathname` plus `search`.
	fn location(&self) -> Result<String, RouterError>;

	/// Pushes a new entry without reloading.
	fn push(&self, url: &str) -> Result<(), RouterError>;

	/// Replaces the current entry without reloading.
	fn replace(&self, url: &str) -> Result<(), RouterError>;

	/// Moves `delta` entries through the stack. Out-of-range moves are ignored.
	fn go(&self, delta: isize) -> Result<(), RouterError>;

	/// Registers a back/forward listener for the lifetime of the history.
	fn listen(&self, on_pop: PopListener) -> Result<(), RouterError>;

	/// Moves one entry back.
	fn back(&self) -> Result<(), RouterError> {
		self.go(-1)
	}

	/// Moves one entry forward.
	fn forward(&self) -> Result<(), RouterError> {
		self.go(1)
	}
}

struct MemoryStack {
	entries: Vec<String>,
	cursor: usize,
	limit: usize,
}

/// In-process history stack.
///
/// Pushing discards forward entries. When the stack exceeds its limit the
/// oldest entry is evicted. Pushed and replaced URLs are resolved against the
/// current entry, so relative and query-only URLs land where the browser
/// would put them.
pub struct MemoryHistory {
	stack: RefCell<MemoryStack>,
	listeners: RefCell<Vec<Rc<dyn Fn(&str)>>>,
}

impl MemoryHistory {
	/// Creates a history whose single entry is `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
	}

	/// Creates a history keeping at most `limit` entries (at least one).
	pub fn with_limit(initial: impl Into<String>, limit: usize) -> Self {
		Self {
			stack: RefCell::new(MemoryStack {
				entries: vec![initial.into()],
				cursor: 0,
				limit: limit.max(1),
			}),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// Creates a history from router settings.
	pub fn from_settings(settings: &RouterSettings) -> Self {
		Self::with_limit(settings.initial_path.clone(), settings.history_limit)
	}

	/// Returns all entries, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.stack.borrow().entries.clone()
	}

	/// Returns the index of the current entry.
	pub fn index(&self) -> usize {
		self.stack.borrow().cursor
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.stack.borrow().entries.len()
	}

	/// Always `false`: the stack holds at least the initial entry.
	pub fn is_empty(&self) -> bool {
		self.stack.borrow().entries.is_empty()
	}

	/// Returns whether a back move would change the entry.
	pub fn can_go_back(&self) -> bool {
		self.stack.borrow().cursor > 0
	}

	/// Returns whether a forward move would change the entry.
	pub fn can_go_forward(&self) -> bool {
		let stack = self.stack.borrow();
		stack.cursor + 1 < stack.entries.len()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl History for MemoryHistory {
	fn location(&self) -> Result<String, RouterError> {
		let stack = self.stack.borrow();
		stack
			.entries
			.get(stack.cursor)
			.cloned()
			.ok_or_else(|| RouterError::NavigationFailed("history cursor out of range".to_string()))
	}

	fn push(&self, url: &str) -> Result<(), RouterError> {
		let mut stack = self.stack.borrow_mut();
		let current = stack.entries.get(stack.cursor).map_or("/", String::as_str);
		let resolved = resolve_url(current, url);
		let keep = stack.cursor + 1;
		stack.entries.truncate(keep);
		stack.entries.push(resolved);

		if stack.entries.len() > stack.limit {
			let overflow = stack.entries.len() - stack.limit;
			stack.entries.drain(..overflow);
		}
		stack.cursor = stack.entries.len() - 1;
		Ok(())
	}

	fn replace(&self, url: &str) -> Result<(), RouterError> {
		let mut stack = self.stack.borrow_mut();
		let cursor = stack.cursor;
		match stack.entries.get_mut(cursor) {
			Some(entry) => {
				*entry = resolve_url(entry, url);
				Ok(())
			}
			None => Err(RouterError::NavigationFailed(
				"history cursor out of range".to_string(),
			)),
		}
	}

	fn go(&self, delta: isize) -> Result<(), RouterError> {
		let url = {
			let mut stack = self.stack.borrow_mut();
			let target = stack.cursor.checked_add_signed(delta);
			match target {
				Some(index) if delta != 0 && index < stack.entries.len() => {
					stack.cursor = index;
					stack.entries[index].clone()
				}
				_ => return Ok(()),
			}
		};

		// Listeners may push or go again; no borrow is held while they run.
		let listeners: Vec<Rc<dyn Fn(&str)>> = self.listeners.borrow().clone();
		for listener in listeners {
			listener(&url);
		}
		Ok(())
	}

	fn listen(&self, on_pop: PopListener) -> Result<(), RouterError> {
		self.listeners.borrow_mut().push(Rc::from(on_pop));
		Ok(())
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let stack = self.stack.borrow();
		f.debug_struct("MemoryHistory")
			.field("entries", &stack.entries)
			.field("cursor", &stack.cursor)
			.field("limit", &stack.limit)
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{History, PopListener};
	use crate::error::RouterError;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::JsValue;
	use wasm_bindgen::closure::Closure;
	use web_sys::{Event, Window};

	fn js_error(context: &str, value: JsValue) -> RouterError {
		RouterError::NavigationFailed(format!("{}: {:?}", context, value))
	}

	fn current_url(window: &Window) -> Result<String, RouterError> {
		let location = window.location();
		let pathname = location
			.pathname()
			.map_err(|e| js_error("location.pathname", e))?;
		let search = location.search().map_err(|e| js_error("location.search", e))?;
		Ok(format!("{}{}", pathname, search))
	}

	/// `window.history` backed navigation.
	#[derive(Debug, Clone)]
	pub struct BrowserHistory {
		window: Window,
	}

	impl BrowserHistory {
		/// Binds to the global `window`.
		pub fn new() -> Result<Self, RouterError> {
			web_sys::window()
				.map(|window| Self { window })
				.ok_or_else(|| RouterError::PlatformUnavailable("no global window".to_string()))
		}

		fn history(&self) -> Result<web_sys::History, RouterError> {
			self.window
				.history()
				.map_err(|e| js_error("window.history", e))
		}
	}

	impl History for BrowserHistory {
		fn location(&self) -> Result<String, RouterError> {
			current_url(&self.window)
		}

		fn push(&self, url: &str) -> Result<(), RouterError> {
			self.history()?
				.push_state_with_url(&JsValue::NULL, "", Some(url))
				.map_err(|e| js_error("history.pushState", e))
		}

		fn replace(&self, url: &str) -> Result<(), RouterError> {
			self.history()?
				.replace_state_with_url(&JsValue::NULL, "", Some(url))
				.map_err(|e| js_error("history.replaceState", e))
		}

		fn go(&self, delta: isize) -> Result<(), RouterError> {
			let delta = i32::try_from(delta)
				.map_err(|_| RouterError::NavigationFailed(format!("history delta out of range: {}", delta)))?;
			self.history()?
				.go_with_delta(delta)
				.map_err(|e| js_error("history.go", e))
		}

		fn listen(&self, on_pop: PopListener) -> Result<(), RouterError> {
			let window = self.window.clone();
			let handler = Closure::wrap(Box::new(move |_event: Event| {
				match current_url(&window) {
					Ok(url) => on_pop(&url),
					Err(e) => crate::warn_log!("popstate: {}", e),
				}
			}) as Box<dyn FnMut(_)>);

			self.window
				.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
				.map_err(|e| js_error("addEventListener(popstate)", e))?;
			// The listener lives as long as the page.
			handler.forget();
			Ok(())
		}
	}
}
