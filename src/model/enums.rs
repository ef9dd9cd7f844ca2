use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Direction a chef is drawn facing.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facing {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing along the dominant axis of a movement vector.
    /// A tie between axes resolves to the vertical facing, and a zero
    /// vertical component counts as downwards.
    pub fn from_velocity(velocity: Vec2) -> Self {
        if velocity.x.abs() > velocity.y.abs() {
            if velocity.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            }
        } else if velocity.y > 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }

    /// Unit tile offset of the cell in front.
    pub fn grid_offset(&self) -> (i32, i32) {
        match self {
            Facing::Up => (0, 1),
            Facing::Down => (0, -1),
            Facing::Left => (-1, 0),
            Facing::Right => (1, 0),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    #[default]
    Empty,
    Wall,
}
