//! Human readable texts for query results and route listings.
use std::fmt;

use crate::constants::{DISTANCE_UNIT, ROUTE_SEPARATOR};
use crate::graph::Route;
use crate::query::PathResult;

impl PathResult {
    /// Short heading for the result, e.g. for a dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            PathResult::Found { .. } => "Shortest Path",
            PathResult::NotFound { .. } => "No Path",
            PathResult::UnknownAirport { .. } => "Invalid Airports",
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found {
                airports,
                total_weight,
            } => {
                let start = airports.first().map(String::as_str).unwrap_or_default();
                let end = airports.last().map(String::as_str).unwrap_or_default();
                writeln!(f, "The shortest path from {start} to {end}:")?;
                let separator = format!(" {ROUTE_SEPARATOR} ");
                writeln!(f, "{}", airports.join(separator.as_str()))?;
                write!(f, "Total Distance: {total_weight} {DISTANCE_UNIT}")
            }
            PathResult::NotFound { start, end } => {
                write!(f, "No path exists between {start} and {end}.")
            }
            PathResult::UnknownAirport { codes } => {
                let codes: Vec<&str> = codes
                    .iter()
                    .map(|code| if code.is_empty() { "<empty>" } else { code.as_str() })
                    .collect();
                write!(f, "Airport(s) not found: {}", codes.join(", "))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {ROUTE_SEPARATOR} {} : {} {DISTANCE_UNIT}",
            self.from, self.to, self.weight
        )
    }
}

/// One line per route, or a notice if there are none.
pub struct RouteListing<'a>(pub &'a [Route]);

impl RouteListing<'_> {
    pub fn title(&self) -> &'static str {
        if self.0.is_empty() {
            "No Paths"
        } else {
            "Available Routes"
        }
    }
}

impl fmt::Display for RouteListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No routes available.");
        }

        for (i, route) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{route}")?;
        }
        Ok(())
    }
}
