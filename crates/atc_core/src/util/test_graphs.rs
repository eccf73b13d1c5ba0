use rustc_hash::FxHashSet;

use crate::{
    constants::Distance,
    graph::{NodeIndex, RouteGraph},
    route,
};

pub fn generate_simple_graph() -> RouteGraph {
    //      G -- H -- I
    //      |         |
    // A -- F -- J    |
    // |         |  \ |
    // B -- C -- D -- E
    RouteGraph::from_routes(vec![
        route!("A", "B", 1),
        route!("B", "C", 1),
        route!("C", "D", 1),
        route!("D", "E", 20),
        route!("A", "F", 5),
        route!("F", "J", 1),
        route!("J", "E", 20),
        route!("J", "D", 20),
        route!("F", "G", 5),
        route!("G", "H", 1),
        route!("H", "I", 1),
        route!("I", "E", 1),
    ])
    .unwrap()
}

pub fn generate_disconnected_graph() -> RouteGraph {
    // A -- B -- C
    // X -- Y -- Z
    RouteGraph::from_routes(vec![
        route!("A", "B", 1),
        route!("B", "C", 1),
        route!("X", "Y", 3),
        route!("Y", "Z", 1),
    ])
    .unwrap()
}

/// Minimum weight over every simple path from `source` to `target`.
pub fn brute_force_shortest(g: &RouteGraph, source: NodeIndex, target: NodeIndex) -> Option<Distance> {
    fn visit(
        g: &RouteGraph,
        node: NodeIndex,
        target: NodeIndex,
        weight: Distance,
        visited: &mut FxHashSet<NodeIndex>,
        best: &mut Option<Distance>,
    ) {
        if node == target {
            *best = Some(best.map_or(weight, |b| b.min(weight)));
            return;
        }
        for edge in g.neighbors(node) {
            if visited.insert(edge.target) {
                visit(g, edge.target, target, weight + Distance::from(edge.weight), visited, best);
                visited.remove(&edge.target);
            }
        }
    }

    let mut best = None;
    let mut visited = FxHashSet::default();
    visited.insert(source);
    visit(g, source, target, 0, &mut visited, &mut best);
    best
}
