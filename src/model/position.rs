use crate::model::constants::{DIAGONAL_COST, NEIGHBOR_OFFSETS, ORTHOGONAL_COST};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer tile coordinates. `y` grows upwards, matching world space.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        GridPos { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance (max of x and y differences)
    pub fn distance(&self, other: &GridPos) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Manhattan distance calculation (sum of x and y differences)
    pub fn manhattan_distance(&self, other: &GridPos) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Returns true if the two positions touch, diagonals included
    pub fn is_adjacent(&self, other: &GridPos) -> bool {
        self.distance(other) == 1
    }

    /// Cost of a single step between adjacent tiles.
    /// A step whose x and y differences add up to 2 is diagonal.
    pub fn step_cost(&self, other: &GridPos) -> f64 {
        if self.manhattan_distance(other) == 2 {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    /// The 8 surrounding positions in expansion order, unbounded.
    pub fn neighbors(&self) -> impl Iterator<Item = GridPos> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        GridPos::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
