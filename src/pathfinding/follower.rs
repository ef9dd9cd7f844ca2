use crate::model::constants::WAYPOINT_TOLERANCE;
use crate::model::enums::Facing;
use glam::Vec2;

use super::path::WorldPath;

/// Moves an actor along a world path one tick at a time.
///
/// Owned by the actor; the path and cursor are only touched from that actor's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFollower {
    path: WorldPath,
    cursor: usize,
    facing: Facing,
}

impl PathFollower {
    pub fn new(path: WorldPath) -> Self {
        PathFollower {
            path,
            ..Default::default()
        }
    }

    /// Replace the route and start again from its first waypoint.
    pub fn set_path(&mut self, path: WorldPath) {
        self.path = path;
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.set_path(WorldPath::new());
    }

    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn target(&self) -> Option<Vec2> {
        self.path.get(self.cursor).copied()
    }

    /// Waypoints not yet reached, for drawing the rest of the route.
    pub fn remaining(&self) -> &[Vec2] {
        self.path.get(self.cursor..).unwrap_or(&[])
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// Advance `position` towards the current waypoint at `speed` world units
    /// per second over `dt` seconds, and return the new position.
    ///
    /// The waypoint counts as reached only when the new position lands within
    /// the tolerance on both axes. A step of `speed * dt` larger than twice the
    /// tolerance can overshoot every tick, so the actor oscillates around the
    /// waypoint and never finishes. The position is not snapped.
    pub fn tick(&mut self, position: Vec2, speed: f32, dt: f32) -> Vec2 {
        let Some(target) = self.target() else {
            return position;
        };

        let delta = target - position;
        let angle = delta.y.atan2(delta.x);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
        self.facing = Facing::from_velocity(velocity);

        let position = position + velocity * dt;

        let offset = (target - position).abs();
        if offset.x <= WAYPOINT_TOLERANCE && offset.y <= WAYPOINT_TOLERANCE {
            self.cursor += 1;
        }

        position
    }
}
