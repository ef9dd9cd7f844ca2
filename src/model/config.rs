use crate::error::{NavError, NavResult};
use crate::model::constants::{CAMERA_OFFSET_TILES, TILE_SIZE, WORLD_EXTENT};
use serde::{Deserialize, Serialize};

/// Map geometry needed to move between tile indices and world space.
/// Supplied by the map loader; missing fields fall back to the kitchen defaults.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Width and height of one tile in world units
    pub tile_size: u32,
    /// Camera shift, in whole tiles
    pub camera_offset: i32,
    /// World units between the world origin and the map's outer edge
    pub world_extent: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            tile_size: TILE_SIZE,
            camera_offset: CAMERA_OFFSET_TILES,
            world_extent: WORLD_EXTENT,
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reject geometry the coordinate mapper cannot divide by or offset with.
    pub fn validate(self) -> NavResult<Self> {
        if self.tile_size == 0 || i32::try_from(self.tile_size).is_err() {
            return Err(NavError::InvalidConfig(format!(
                "tile_size {} is out of range",
                self.tile_size
            )));
        }
        if !self.world_extent.is_finite() {
            return Err(NavError::InvalidConfig(format!(
                "world_extent {} is not finite",
                self.world_extent
            )));
        }
        Ok(self)
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }
}
