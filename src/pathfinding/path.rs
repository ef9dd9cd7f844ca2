use crate::model::position::GridPos;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Route in world space, one waypoint per tile.
pub type WorldPath = Vec<Vec2>;

/// Represents a calculated route between two tiles.
/// Contains the full sequence of tiles, start and goal included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPath {
    pub tiles: Vec<GridPos>,
}

impl GridPath {
    pub fn new(tiles: Vec<GridPos>) -> Self {
        GridPath { tiles }
    }

    /// Path of a single tile, for a search that starts on its goal.
    pub fn single(pos: GridPos) -> Self {
        GridPath { tiles: vec![pos] }
    }

    /// Number of tiles in the path (steps + 1)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn start(&self) -> Option<GridPos> {
        self.tiles.first().copied()
    }

    pub fn goal(&self) -> Option<GridPos> {
        self.tiles.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridPos> {
        self.tiles.iter()
    }

    /// Sum of step costs along the path (1 per straight step, √2 per diagonal)
    pub fn cost(&self) -> f64 {
        self.tiles
            .windows(2)
            .map(|pair| pair[0].step_cost(&pair[1]))
            .sum()
    }

    pub fn diagonal_steps(&self) -> usize {
        self.tiles
            .windows(2)
            .filter(|pair| pair[0].manhattan_distance(&pair[1]) == 2)
            .count()
    }
}

impl<'a> IntoIterator for &'a GridPath {
    type Item = &'a GridPos;
    type IntoIter = std::slice::Iter<'a, GridPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
