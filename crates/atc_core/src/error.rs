use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building a [`RouteGraph`](crate::graph::RouteGraph).
///
/// All of them indicate broken route data and are fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("route {from} - {to} has weight {weight}, weights must be positive")]
    ZeroWeight { from: String, to: String, weight: Weight },

    #[error("route {code} - {code} connects an airport with itself")]
    SelfLoop { code: String },

    #[error("duplicate route between {from} and {to}")]
    DuplicateRoute { from: String, to: String },

    #[error("airport code must not be empty")]
    EmptyCode,
}
