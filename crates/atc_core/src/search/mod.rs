use rustc_hash::FxHashMap;

use crate::constants::Distance;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor entries of `node_data` back from `target`.
///
/// Returns `None` if `target` was never reached or the chain does not end in
/// `source`.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Distance, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let (weight, mut previous) = *node_data.get(&target)?;
    let mut path = vec![target];

    while let Some(prev_node) = previous {
        path.push(prev_node);
        previous = node_data.get(&prev_node)?.1;
    }

    if path.last() != Some(&source) {
        return None;
    }
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    g: &crate::graph::RouteGraph,
    expected_path: &[&str],
    expected_weight: Distance,
    path: Option<ShortestPath>,
) {
    let path = path.expect("expected a path");
    let codes: Vec<&str> = path.nodes.iter().map(|n| g.code(*n)).collect();
    assert_eq!(expected_path, codes.as_slice());
    assert_eq!(expected_weight, path.weight);
}
