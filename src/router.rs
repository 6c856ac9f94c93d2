//! Client-side navigation engine
//!
//! This module provides access to reinhardt-spa-router:
//!
//! - **Matching**: depth-first resolution against a nested route tree
//! - **Composition**: layout and suspension wrapping of the matched view
//! - **Navigation**: history-backed `navigate`, link activation, back/forward
//! - **Query state**: parsed query mapping with merge-and-push updates
//!
//! ## Example
//!
//! ```
//! use reinhardt_spa::router::{MemoryHistory, Navigator};
//!
//! let navigator = Navigator::new(MemoryHistory::new("/editor"));
//! navigator.update_query_params([("mode", "preview")]).unwrap();
//! assert_eq!(navigator.location().to_url(), "/editor?mode=preview");
//! ```

// Re-export all reinhardt-spa-router functionality
pub use reinhardt_spa_router::*;
