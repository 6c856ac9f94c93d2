//! Signal - single-threaded observable value
//!
//! `Signal<T>` holds the engine's mutable state (the current location) and
//! fans out every change to its subscribers.
//!
//! ## Dispatch Rules
//!
//! - Listeners run synchronously, in subscription order, once per change.
//! - The listener set is captured when dispatch starts. A listener added
//!   during dispatch first runs on the next change.
//! - A listener removed during dispatch (by itself or by an earlier
//!   listener) is skipped for the rest of that dispatch.
//! - A listener that sets the signal again starts a newer dispatch. The
//!   older one stops once the newer one returns, so no listener is handed a
//!   stale value after the current one.
//! - No borrow is held while a listener runs, so listeners may read the
//!   signal, set it again, subscribe, or unsubscribe.
//!
//! ## Example
//!
//! ```
//! use reinhardt_spa_router::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_clone = Rc::clone(&seen);
//! let subscription = count.subscribe(move |value: &i32| seen_clone.set(*value));
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//!
//! subscription.unsubscribe();
//! count.set(7);
//! assert_eq!(seen.get(), 42);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

/// Identifier of a registered listener, unique per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct ListenerSet<T> {
	next_id: u64,
	entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> ListenerSet<T> {
	fn new() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}

	fn contains(&self, id: ListenerId) -> bool {
		self.entries.iter().any(|(entry_id, _)| *entry_id == id)
	}
}

/// Type-erased removal, so [`Subscription`] does not carry the signal's type.
trait Detach {
	fn detach(&self, id: ListenerId) -> bool;
	fn is_attached(&self, id: ListenerId) -> bool;
}

impl<T> Detach for RefCell<ListenerSet<T>> {
	fn detach(&self, id: ListenerId) -> bool {
		let mut set = self.borrow_mut();
		let before = set.entries.len();
		set.entries.retain(|(entry_id, _)| *entry_id != id);
		set.entries.len() != before
	}

	fn is_attached(&self, id: ListenerId) -> bool {
		self.borrow().contains(id)
	}
}

/// Handle returned by [`Signal::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`unsubscribe`](Self::unsubscribe) to remove it.
#[derive(Clone)]
pub struct Subscription {
	id: ListenerId,
	set: Weak<dyn Detach>,
}

impl Subscription {
	/// Removes the listener. Calling this more than once is a no-op.
	///
	/// Returns `true` if the listener was still registered.
	pub fn unsubscribe(&self) -> bool {
		self.set.upgrade().is_some_and(|set| set.detach(self.id))
	}

	/// Returns whether the listener is still registered.
	pub fn is_active(&self) -> bool {
		self.set.upgrade().is_some_and(|set| set.is_attached(self.id))
	}

	/// Returns the listener identifier.
	pub fn id(&self) -> ListenerId {
		self.id
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}

/// An observable value with ordered subscribers.
///
/// Cloning a `Signal` yields another handle to the same value and the same
/// subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	listeners: Rc<RefCell<ListenerSet<T>>>,
	version: Rc<Cell<u64>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			listeners: Rc::clone(&self.listeners),
			version: Rc::clone(&self.version),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			listeners: Rc::new(RefCell::new(ListenerSet::new())),
			version: Rc::new(Cell::new(0)),
		}
	}

	/// Get the current value of the signal
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Reads the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the signal's value in place and notify subscribers once
	pub fn update<F>(&self, f: F)
	where
		T: Clone,
		F: FnOnce(&mut T),
	{
		f(&mut self.value.borrow_mut());
		self.notify();
	}

	/// Registers a listener invoked with the new value on every change.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		let id = {
			let mut set = self.listeners.borrow_mut();
			let id = ListenerId(set.next_id);
			set.next_id += 1;
			set.entries.push((id, Rc::new(listener)));
			id
		};

		let set: Rc<dyn Detach> = self.listeners.clone();
		Subscription {
			id,
			set: Rc::downgrade(&set),
		}
	}

	/// Returns the number of registered listeners.
	pub fn subscriber_count(&self) -> usize {
		self.listeners.borrow().entries.len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		let version = self.version.get().wrapping_add(1);
		self.version.set(version);

		let snapshot = self.value.borrow().clone();
		let listeners: Vec<(ListenerId, Listener<T>)> = self.listeners.borrow().entries.clone();

		for (id, listener) in listeners {
			// A listener set the signal again; that dispatch delivered the newer value.
			if self.version.get() != version {
				break;
			}
			// Skip listeners removed earlier in this dispatch.
			if !self.listeners.borrow().contains(id) {
				continue;
			}
			listener(&snapshot);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.listeners.borrow().entries.len())
			.finish()
	}
}
