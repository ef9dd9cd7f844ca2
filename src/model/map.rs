use crate::error::{NavError, NavResult};
use crate::model::config::MapConfig;
use crate::model::constants::WALL_LAYER;
use serde::{Deserialize, Serialize};

/// One tile layer of an exported map. `data` holds tile ids row by row,
/// starting from the top-left corner; 0 means the cell is empty.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    #[serde(default)]
    pub data: Vec<u32>,
}

/// Static map data as exported by the Tiled editor (JSON format).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(default)]
    pub layers: Vec<TileLayer>,
}

impl MapData {
    pub fn from_json(json: &str) -> NavResult<Self> {
        let map: MapData = serde_json::from_str(json)?;
        if map.width == 0 || map.height == 0 {
            return Err(NavError::EmptyMap);
        }
        map.cell_count()?;
        MapConfig::default().with_tile_size(map.tile_width).validate()?;
        Ok(map)
    }

    /// Number of tiles, checked against the grid's `i32` coordinates and `usize` indices.
    pub fn cell_count(&self) -> NavResult<usize> {
        let too_large = || NavError::MapTooLarge {
            width: self.width,
            height: self.height,
        };
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(too_large());
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(too_large)
    }

    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// The layer whose occupied cells are walls, checked against the map size.
    pub fn wall_layer(&self) -> NavResult<&TileLayer> {
        let layer = self
            .layer(WALL_LAYER)
            .ok_or_else(|| NavError::MissingLayer(WALL_LAYER.to_string()))?;

        let expected = self.cell_count()?;
        if layer.data.len() != expected {
            return Err(NavError::LayerSize {
                layer: layer.name.clone(),
                expected,
                actual: layer.data.len(),
            });
        }

        Ok(layer)
    }

    /// Mapper configuration for this map; only the tile size comes from the file.
    pub fn config(&self) -> MapConfig {
        MapConfig::default().with_tile_size(self.tile_width)
    }
}
