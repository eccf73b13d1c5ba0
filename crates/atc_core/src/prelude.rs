//! Re-exports of the most commonly used items in `atc_core`.
pub use crate::error::GraphError;
pub use crate::graph::{normalize_code, Route, RouteGraph};
pub use crate::query::{PathQueryService, PathResult};
pub use crate::report::RouteListing;

pub use crate::search;
