use crate::model::config::MapConfig;
use crate::model::position::GridPos;
use glam::Vec2;

use super::path::{GridPath, WorldPath};

/// Converts between tile indices and world-space positions.
///
/// A tile maps to its centre: `(c + camera_offset) * tile_size - (world_extent - tile_size / 2)`.
/// The reverse conversion truncates, so every point inside a tile maps back to that tile.
/// Both directions expect in-bounds coordinates; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    config: MapConfig,
}

impl CoordinateMapper {
    pub fn new(config: MapConfig) -> Self {
        CoordinateMapper { config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    fn tile_size(&self) -> f32 {
        self.config.tile_size as f32
    }

    pub fn grid_to_world(&self, coord: i32) -> f32 {
        let half_tile = self.tile_size() / 2.0;
        (coord as i64 + self.config.camera_offset as i64) as f32 * self.tile_size()
            - (self.config.world_extent - half_tile)
    }

    /// Requires a validated config (see [`MapConfig::validate`]); a zero tile size panics.
    pub fn world_to_grid(&self, world: f32) -> i32 {
        ((world + self.config.world_extent) as i32 / self.config.tile_size as i32)
            .saturating_sub(self.config.camera_offset)
    }

    pub fn grid_to_world_point(&self, pos: GridPos) -> Vec2 {
        Vec2::new(self.grid_to_world(pos.x), self.grid_to_world(pos.y))
    }

    pub fn world_to_grid_point(&self, world: Vec2) -> GridPos {
        GridPos::new(self.world_to_grid(world.x), self.world_to_grid(world.y))
    }

    /// World waypoints for every tile of a grid path, in order.
    pub fn to_world_path(&self, path: &GridPath) -> WorldPath {
        path.iter()
            .map(|&pos| self.grid_to_world_point(pos))
            .collect()
    }
}
