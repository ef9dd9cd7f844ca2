//! Error types for map loading and the path service.
//!
//! Search failures are not errors: an unreachable goal yields `None` and an
//! incomplete request yields an empty world path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    /// Malformed map or request JSON.
    #[error("Invalid map data: {0}")]
    Json(#[from] serde_json::Error),

    /// The map has no layer with the given name.
    #[error("Map has no layer named {0:?}")]
    MissingLayer(String),

    /// A layer's cell count does not match the map dimensions.
    #[error("Layer {layer:?} has {actual} cells, expected {expected}")]
    LayerSize {
        layer: String,
        expected: usize,
        actual: usize,
    },

    /// Width or height is zero.
    #[error("Map has no cells")]
    EmptyMap,

    /// The dimensions do not fit the grid's coordinate or index range.
    #[error("Map of {width}x{height} tiles is too large")]
    MapTooLarge { width: u32, height: u32 },

    /// Mapper geometry that cannot be used for coordinate conversion.
    #[error("Invalid map config: {0}")]
    InvalidConfig(String),

    /// An ASCII map row differs in length from the first row.
    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Unknown glyph in an ASCII map.
    #[error("Unknown tile glyph {0:?}")]
    InvalidTile(char),

    /// The search worker thread could not be started.
    #[error("Failed to spawn path worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    /// The search worker went away before answering.
    #[error("Path worker disconnected")]
    WorkerDisconnected,
}

pub type NavResult<T> = std::result::Result<T, NavError>;
