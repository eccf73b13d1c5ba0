use crate::constants::Weight;
use crate::error::GraphError;
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

/// Default integer type for node and edge indices
pub type DefaultIdx = u32;

/// The routes every [`RouteGraph::with_default_routes`] graph is seeded with.
pub const DEFAULT_ROUTES: [(&str, &str, Weight); 8] = [
    ("A", "B", 300),
    ("A", "C", 400),
    ("B", "D", 500),
    ("B", "E", 200),
    ("C", "E", 600),
    ("D", "E", 800),
    ("D", "F", 300),
    ("E", "F", 400),
];

/// Macro to create a route between two airport codes
///
/// route!("A", "B", 300)
#[macro_export]
macro_rules! route {
    ($from:expr, $to:expr, $weight:expr) => {
        $crate::graph::Route::new($from, $to, $weight)
    };
}

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Trims and upper-cases an airport code the way user input is expected.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    pub code: String,
}

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Airport { code: code.into() }
    }
}

/// Undirected route between two airports, addressed by code.
///
/// This is the shape routes are read from a route file and handed out by
/// [`RouteGraph::list_routes`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl Route {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Route {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Route stored inside the graph, addressed by node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Undirected weighted graph of airports.
///
/// The graph is immutable once built. Every edge is listed in the adjacency
/// list of both of its endpoints.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    edges_out: Vec<Vec<EdgeIndex>>,
    nodes: Vec<Airport>,
    edges: Vec<Edge>,
    node_index: FxHashMap<String, NodeIndex>,
}

impl RouteGraph {
    fn new() -> Self {
        Self {
            edges_out: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Builds a graph from a list of routes.
    ///
    /// Airport codes are normalized. Returns an error for the first route with
    /// a zero weight, identical endpoints, an empty code or an unordered pair
    /// that was already added.
    pub fn from_routes<I>(routes: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Route>,
    {
        let mut g = Self::new();
        for route in routes {
            g.add_route(&route)?;
        }
        debug!(
            "Built route graph with {} airports and {} routes",
            g.nodes.len(),
            g.edges.len()
        );
        Ok(g)
    }

    /// Graph seeded with [`DEFAULT_ROUTES`].
    pub fn with_default_routes() -> Result<Self, GraphError> {
        Self::from_routes(default_routes())
    }

    /// Reads a `from,to,weight` csv file.
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Reading routes from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Could not open route file {}", path.display()))?;

        let mut routes = Vec::new();
        for result in reader.deserialize() {
            let route: Route = result.context("Failed to parse Route")?;
            routes.push(route);
        }

        let g = Self::from_routes(routes)
            .with_context(|| format!("Invalid route data in {}", path.display()))?;

        info!(
            "Route graph has {} airports and {} routes",
            g.num_airports(),
            g.num_routes()
        );
        Ok(g)
    }

    fn add_airport(&mut self, code: &str) -> Result<NodeIndex, GraphError> {
        let code = normalize_code(code);
        if code.is_empty() {
            return Err(GraphError::EmptyCode);
        }
        if let Some(idx) = self.node_index.get(&code) {
            return Ok(*idx);
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out.push(Vec::new());
        self.node_index.insert(code.clone(), node_idx);
        self.nodes.push(Airport::new(code));

        Ok(node_idx)
    }

    fn add_route(&mut self, route: &Route) -> Result<EdgeIndex, GraphError> {
        let from = normalize_code(&route.from);
        let to = normalize_code(&route.to);

        if from.is_empty() || to.is_empty() {
            return Err(GraphError::EmptyCode);
        }
        if from == to {
            return Err(GraphError::SelfLoop { code: from });
        }
        if route.weight == 0 {
            return Err(GraphError::ZeroWeight {
                from,
                to,
                weight: route.weight,
            });
        }

        let source = self.add_airport(&from)?;
        let target = self.add_airport(&to)?;

        if self.neighbors(source).any(|edge| edge.target == target) {
            return Err(GraphError::DuplicateRoute { from, to });
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out[source.index()].push(edge_idx);
        self.edges_out[target.index()].push(edge_idx);
        self.edges.push(Edge::new(source, target, route.weight));

        Ok(edge_idx)
    }

    /// True iff `code` is the endpoint of any route.
    pub fn has_airport(&self, code: &str) -> bool {
        self.node_index.contains_key(code)
    }

    pub fn airport_index(&self, code: &str) -> Option<NodeIndex> {
        self.node_index.get(code).copied()
    }

    /// Returns the code of the airport at `node_idx`.
    ///
    /// **Panics** if the node does not exist
    pub fn code(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].code
    }

    /// Returns an iterator over all airports in the order they were first seen
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.nodes.iter()
    }

    /// Every route exactly once, in insertion order.
    pub fn list_routes(&self) -> Vec<Route> {
        self.edges
            .iter()
            .map(|edge| {
                Route::new(
                    self.code(edge.source),
                    self.code(edge.target),
                    edge.weight,
                )
            })
            .collect()
    }

    /// Edges incident to `node_idx`, each oriented so that `source == node_idx`.
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = Edge> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| {
                let edge = &self.edges[edge_idx.index()];
                if edge.source == node_idx {
                    edge.clone()
                } else {
                    edge.reverse()
                }
            })
    }

    pub fn num_airports(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_routes(&self) -> usize {
        self.edges.len()
    }

    pub fn info(&self) -> String {
        format!(
            "RouteGraph:\t#Airports: {}, #Routes: {}",
            self.num_airports(),
            self.num_routes()
        )
    }
}

/// The seed table as [`Route`]s, in seeding order.
pub fn default_routes() -> Vec<Route> {
    DEFAULT_ROUTES
        .iter()
        .map(|(from, to, weight)| route!(*from, *to, *weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn test_data(file: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join(file)
    }

    #[test]
    fn default_routes_are_seeded_in_order() {
        let g = RouteGraph::with_default_routes().unwrap();

        let routes = g.list_routes();
        assert_eq!(routes.len(), 8);
        for (route, (from, to, weight)) in routes.iter().zip(DEFAULT_ROUTES) {
            assert_eq!(route, &Route::new(from, to, weight));
        }

        assert_eq!(g.num_airports(), 6);
        assert_eq!(g.num_routes(), 8);
    }

    #[test]
    fn default_routes_have_no_duplicate_pairs() {
        let g = RouteGraph::with_default_routes().unwrap();

        let mut pairs = FxHashSet::default();
        for route in g.list_routes() {
            let pair = if route.from < route.to {
                (route.from, route.to)
            } else {
                (route.to, route.from)
            };
            assert!(pairs.insert(pair));
        }
    }

    #[test]
    fn has_airport() {
        let g = RouteGraph::with_default_routes().unwrap();

        for code in ["A", "B", "C", "D", "E", "F"] {
            assert!(g.has_airport(code));
        }
        assert!(!g.has_airport("Z"));
        assert!(!g.has_airport(""));
        assert!(!g.has_airport("a"));
    }

    #[test]
    fn routes_are_undirected() {
        let g = RouteGraph::with_default_routes().unwrap();
        let b = g.airport_index("B").unwrap();
        let e = g.airport_index("E").unwrap();

        let from_b: Vec<_> = g.neighbors(b).map(|edge| (edge.target, edge.weight)).collect();
        let from_e: Vec<_> = g.neighbors(e).map(|edge| (edge.target, edge.weight)).collect();

        assert!(from_b.contains(&(e, 200)));
        assert!(from_e.contains(&(b, 200)));
        assert!(g.neighbors(b).all(|edge| edge.source == b));
        // A, D, E
        assert_eq!(from_b.len(), 3);
    }

    #[test]
    fn codes_are_normalized() {
        let g = RouteGraph::from_routes(vec![route!(" a ", "b", 10), route!("B", "c", 5)]).unwrap();

        assert_eq!(g.num_airports(), 3);
        assert!(g.has_airport("A"));
        assert!(g.has_airport("C"));
        assert_eq!(g.list_routes()[0], Route::new("A", "B", 10));
    }

    #[test]
    fn reject_zero_weight() {
        let err = RouteGraph::from_routes(vec![route!("A", "B", 0)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::ZeroWeight {
                from: "A".into(),
                to: "B".into(),
                weight: 0
            }
        );
    }

    #[test]
    fn reject_self_loop() {
        let err = RouteGraph::from_routes(vec![route!("A", "a", 10)]).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { code: "A".into() });
    }

    #[test]
    fn reject_duplicate_routes() {
        let err =
            RouteGraph::from_routes(vec![route!("A", "B", 10), route!("B", "A", 5)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateRoute {
                from: "B".into(),
                to: "A".into()
            }
        );
    }

    #[test]
    fn reject_empty_code() {
        let err = RouteGraph::from_routes(vec![route!("  ", "B", 10)]).unwrap_err();
        assert_eq!(err, GraphError::EmptyCode);
    }

    #[test]
    fn empty_graph() {
        let g = RouteGraph::from_routes(Vec::new()).unwrap();
        assert_eq!(g.num_airports(), 0);
        assert!(g.list_routes().is_empty());
    }

    #[test]
    fn read_from_csv() {
        let g = RouteGraph::from_csv(&test_data("routes.csv")).unwrap();

        assert_eq!(g.num_airports(), 6);
        assert_eq!(g.list_routes(), default_routes());
    }

    #[test]
    fn read_invalid_csv() {
        assert!(RouteGraph::from_csv(&test_data("duplicate_routes.csv")).is_err());
        assert!(RouteGraph::from_csv(&test_data("negative_weight.csv")).is_err());
        assert!(RouteGraph::from_csv(&test_data("does_not_exist.csv")).is_err());
    }

    #[test]
    fn read_zero_weight_csv() {
        let err = RouteGraph::from_csv(&test_data("zero_weight.csv")).unwrap_err();

        let graph_err = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<GraphError>())
            .expect("expected a GraphError in the error chain");
        assert_eq!(
            graph_err,
            &GraphError::ZeroWeight {
                from: "B".into(),
                to: "C".into(),
                weight: 0
            }
        );
    }
}
