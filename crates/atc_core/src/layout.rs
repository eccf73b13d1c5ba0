//! Fixed drawing positions of the default airports.
//!
//! The route graph itself has no notion of coordinates, a renderer looks the
//! positions up here by airport code.
use std::fmt;

use crate::graph::RouteGraph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

const LAYOUT: [(&str, Position); 6] = [
    ("A", Position::new(2.0, 0.0)),
    ("B", Position::new(1.0, 1.0)),
    ("C", Position::new(3.0, 1.0)),
    ("D", Position::new(0.0, 2.0)),
    ("E", Position::new(2.0, 2.0)),
    ("F", Position::new(1.0, 3.0)),
];

pub fn position(code: &str) -> Option<Position> {
    LAYOUT
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, position)| *position)
}

/// All positions in table order
pub fn positions() -> impl Iterator<Item = (&'static str, Position)> {
    LAYOUT.iter().copied()
}

/// Position of every airport of `g`, `None` for airports without a fixed spot.
pub fn graph_positions(g: &RouteGraph) -> Vec<(&str, Option<Position>)> {
    g.airports()
        .map(|airport| (airport.code.as_str(), position(&airport.code)))
        .collect()
}
