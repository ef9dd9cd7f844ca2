// Kitchen map defaults. The level is 256 world units across with 32 unit tiles,
// and the camera is shifted four tiles from the map origin.
pub const TILE_SIZE: u32 = 32;
pub const CAMERA_OFFSET_TILES: i32 = 4;
pub const WORLD_EXTENT: f32 = 256.0;

/// Name of the tile layer whose occupied cells are walls.
pub const WALL_LAYER: &str = "Walls";

/// Step costs for 8-directional movement
pub const ORTHOGONAL_COST: f64 = 1.0;
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// A follower counts a waypoint as reached within this many world units on both axes.
pub const WAYPOINT_TOLERANCE: f32 = 2.0;

/// Neighbor offsets in expansion order: E, W, N, S, NE, SE, NW, SW.
/// The order decides which node wins a tie on equal f scores.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// ASCII map glyphs
pub const WALL_GLYPH: char = '#';
pub const EMPTY_GLYPH: char = '.';
