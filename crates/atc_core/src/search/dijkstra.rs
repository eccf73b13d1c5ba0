use std::collections::BinaryHeap;

use crate::constants::Distance;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest weight first,
/// ties go to the lower node index.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Distance,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Distance) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a RouteGraph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a RouteGraph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path from `source` to `target`, stopping as soon as `target`
    /// is settled.
    ///
    /// **Panics** if `source` is not a node of the graph
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Distance, Option<NodeIndex>)> =
            FxHashMap::default();
        node_data.insert(source, (0, None));

        let mut settled = FxHashSet::default();
        let mut queue = BinaryHeap::new();

        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Stale entry, node was settled with a smaller weight already
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for edge in self.g.neighbors(node_idx) {
                if settled.contains(&edge.target) {
                    continue;
                }

                let new_distance = weight + Distance::from(edge.weight);
                let improves = node_data
                    .get(&edge.target)
                    .map_or(true, |(distance, _)| new_distance < *distance);

                if improves {
                    node_data.insert(edge.target, (new_distance, Some(node_idx)));
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = if settled.contains(&target) {
            super::reconstruct_path(target, source, &node_data)
        } else {
            None
        };

        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }
}
