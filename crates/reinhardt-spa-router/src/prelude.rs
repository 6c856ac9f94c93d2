//! Commonly used types for building and driving a router.
//!
//! ```
//! use reinhardt_spa_router::prelude::*;
//! ```

pub use crate::components::{Link, Redirect};
pub use crate::composer::{RenderBoundary, Rendered};
pub use crate::context::{RouteContext, use_params, use_query, use_route_context};
pub use crate::core::{Resolution, Router};
pub use crate::error::{PathError, RouterError};
#[cfg(target_arch = "wasm32")]
pub use crate::history::BrowserHistory;
pub use crate::history::{History, MemoryHistory};
pub use crate::location::Location;
pub use crate::matcher::Params;
pub use crate::navigation::{LinkEvent, Navigator, SyntheticClick};
pub use crate::query::QueryMap;
pub use crate::route::RouteNode;
pub use crate::settings::RouterSettings;
