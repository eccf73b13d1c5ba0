use crate::{constants::Distance, graph::NodeIndex};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Distance,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Distance) -> Self {
        ShortestPath { nodes, weight }
    }
}
