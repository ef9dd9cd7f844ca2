use glam::Vec2;
use uuid::Uuid;

use crate::model::enums::Facing;
use crate::model::position::GridPos;
use crate::pathfinding::{CoordinateMapper, Grid, Node, PathFollower, PathService};

/// Movement speed of a chef in world units per second.
pub const DEFAULT_CHEF_SPEED: f32 = 100.0;

/// A chef that can walk a computed route across the kitchen.
#[derive(Debug, Clone)]
pub struct Chef {
    pub id: Uuid,
    pub name: String,
    pub position: Vec2,
    pub speed: f32,
    follower: PathFollower,
}

impl Chef {
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Chef {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            speed: DEFAULT_CHEF_SPEED,
            follower: PathFollower::default(),
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn facing(&self) -> Facing {
        self.follower.facing()
    }

    /// Turn on the spot, as player input does.
    pub fn set_facing(&mut self, facing: Facing) {
        self.follower.set_facing(facing);
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    pub fn is_moving(&self) -> bool {
        !self.follower.is_finished()
    }

    /// Tile the chef is currently standing on.
    pub fn grid_position(&self, mapper: &CoordinateMapper) -> GridPos {
        mapper.world_to_grid_point(self.position)
    }

    /// Plan a route from the current tile to `goal` and start walking it.
    /// Blocks until the search is done. Returns false if no route exists,
    /// in which case the chef stays put.
    pub fn navigate_to(&mut self, service: &PathService, goal: GridPos) -> bool {
        let start = self.grid_position(service.mapper());
        let start = service.grid().contains(start).then_some(start);

        let path = service.compute_path(start, Some(goal));
        if path.is_empty() {
            log::debug!("{} has no route to {goal}", self.name);
        }
        self.follower.set_path(path);
        self.is_moving()
    }

    pub fn stop(&mut self) {
        self.follower.clear();
    }

    /// Per-frame update.
    pub fn update(&mut self, dt: f32) {
        self.position = self.follower.tick(self.position, self.speed, dt);
    }

    /// The tile the chef is looking at, where stations are interacted with.
    pub fn tile_in_front<'g>(&self, grid: &'g Grid, mapper: &CoordinateMapper) -> Option<&'g Node> {
        grid.node_at_facing(self.grid_position(mapper), self.facing())
    }
}
