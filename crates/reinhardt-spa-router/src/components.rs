//! Navigation components.
//!
//! [`Link`] describes an anchor that navigates in-app, and [`Redirect`] moves
//! the navigator as soon as it is applied. Both are host-agnostic: they
//! produce attribute lists and drive a [`Navigator`], leaving markup to the
//! rendering boundary.

use crate::error::RouterError;
use crate::navigation::{LinkEvent, Navigator};

/// A link that navigates without a full page reload.
///
/// # Example
///
/// ```
/// use reinhardt_spa_router::{Link, MemoryHistory, Navigator, SyntheticClick};
///
/// let navigator = Navigator::new(MemoryHistory::new("/"));
/// let link = Link::new("/users/42", "View User");
///
/// let click = SyntheticClick::new();
/// assert!(link.on_click(&navigator, &click).unwrap());
/// assert!(click.is_default_prevented());
/// assert_eq!(navigator.current_path(), "/users/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
	/// The destination path.
	to: String,
	/// The link text.
	label: String,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether to replace the current history entry.
	replace: bool,
	/// Whether the platform handles the link (opens in a new tab).
	external: bool,
	/// Custom attributes.
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			label: label.into(),
			class: None,
			replace: false,
			external: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Sets whether this is an external link.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns whether this is a replace navigation.
	pub fn is_replace(&self) -> bool {
		self.replace
	}

	/// Returns whether this is an external link.
	pub fn is_external(&self) -> bool {
		self.external
	}

	/// Returns whether a click on this link is handled in-app.
	pub fn is_internal(&self) -> bool {
		!self.external && self.to.starts_with('/')
	}

	/// Handles a click on the rendered anchor.
	///
	/// Internal links clicked without modifiers suppress the default action
	/// and navigate; everything else is left to the platform. Returns whether
	/// the click was handled.
	pub fn on_click<E>(&self, navigator: &Navigator, event: &E) -> Result<bool, RouterError>
	where
		E: LinkEvent + ?Sized,
	{
		if !self.is_internal() || event.is_modified() {
			return Ok(false);
		}

		if self.replace {
			event.prevent_default();
			navigator.replace(&self.to)?;
		} else {
			navigator.activate_link(&self.to, event)?;
		}
		Ok(true)
	}

	/// Returns the anchor attributes in render order.
	pub fn attributes(&self) -> Vec<(String, String)> {
		let mut attrs = vec![("href".to_string(), self.to.clone())];

		if let Some(ref class) = self.class {
			attrs.push(("class".to_string(), class.clone()));
		}

		if !self.external {
			attrs.push(("data-link".to_string(), "true".to_string()));
			if self.replace {
				attrs.push(("data-replace".to_string(), "true".to_string()));
			}
		} else {
			attrs.push(("target".to_string(), "_blank".to_string()));
			attrs.push(("rel".to_string(), "noopener noreferrer".to_string()));
		}

		attrs.extend(self.attrs.iter().cloned());
		attrs
	}
}

/// Navigates to another path as soon as it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
	/// The destination path.
	to: String,
	/// Whether to replace the current history entry.
	replace: bool,
}

impl Redirect {
	/// Creates a redirect that replaces the current entry.
	pub fn new(to: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			replace: true,
		}
	}

	/// Sets whether to use replace navigation.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Performs the redirect.
	pub fn apply(&self, navigator: &Navigator) -> Result<(), RouterError> {
		if self.replace {
			navigator.replace(&self.to)
		} else {
			navigator.navigate(&self.to)
		}
	}
}
