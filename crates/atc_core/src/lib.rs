//! Crate to find the shortest route between two airports.
//!
//! # Basic usage
//! ```
//! use atc_core::prelude::*;
//!
//! // Graph with the built-in routes
//! let g = RouteGraph::with_default_routes().expect("Built-in routes are valid");
//!
//! // Query by airport code, input is trimmed and upper-cased
//! let result = PathQueryService::new(&g).query("a", "f");
//!
//! assert_eq!(
//!     result,
//!     PathResult::Found {
//!         airports: vec!["A".into(), "B".into(), "E".into(), "F".into()],
//!         total_weight: 900,
//!     }
//! );
//! println!("{result}");
//!```
//! [`RouteGraph`]: crate::graph::RouteGraph
pub mod constants;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod query;
pub mod report;
pub mod search;
pub mod statistics;
pub mod util;
