//! Shortest path queries by airport code.
use log::debug;

use crate::constants::Distance;
use crate::graph::{normalize_code, RouteGraph};
use crate::search::dijkstra::Dijkstra;
use crate::statistics::SearchStats;

/// Outcome of a single [`PathQueryService::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Airports from start to end, both inclusive.
    Found {
        airports: Vec<String>,
        total_weight: Distance,
    },
    /// Both airports exist but no sequence of routes connects them.
    NotFound { start: String, end: String },
    /// Codes the graph does not know, start first.
    UnknownAirport { codes: Vec<String> },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }
}

/// Answers shortest path queries on a borrowed, immutable [`RouteGraph`].
#[derive(Debug, Clone, Copy)]
pub struct PathQueryService<'a> {
    graph: &'a RouteGraph,
}

impl<'a> PathQueryService<'a> {
    pub fn new(graph: &'a RouteGraph) -> Self {
        PathQueryService { graph }
    }

    /// Shortest path from `start` to `end`.
    ///
    /// Both codes are trimmed and upper-cased first. Unknown codes are
    /// reported before any search is run.
    pub fn query(&self, start: &str, end: &str) -> PathResult {
        self.query_with_stats(start, end).0
    }

    /// Like [`query`](Self::query), also returning the stats of the search.
    /// Stats stay at their defaults if no search was run.
    pub fn query_with_stats(&self, start: &str, end: &str) -> (PathResult, SearchStats) {
        let start = normalize_code(start);
        let end = normalize_code(end);

        let mut unknown = Vec::new();
        for code in [&start, &end] {
            if !self.graph.has_airport(code) && !unknown.contains(code) {
                unknown.push(code.clone());
            }
        }

        let (Some(source), Some(target)) = (
            self.graph.airport_index(&start),
            self.graph.airport_index(&end),
        ) else {
            debug!("Unknown airport(s) in query {start} -> {end}: {unknown:?}");
            return (
                PathResult::UnknownAirport { codes: unknown },
                SearchStats::default(),
            );
        };

        let mut dijkstra = Dijkstra::new(self.graph);
        let result = match dijkstra.search(source, target) {
            Some(sp) => PathResult::Found {
                airports: sp
                    .nodes
                    .iter()
                    .map(|node| self.graph.code(*node).to_string())
                    .collect(),
                total_weight: sp.weight,
            },
            None => PathResult::NotFound { start, end },
        };
        (result, dijkstra.stats)
    }
}
