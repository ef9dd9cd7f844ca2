pub mod config;
pub mod constants;
pub mod enums;
pub mod map;
pub mod position;

pub use config::MapConfig;
pub use enums::{Facing, NodeType};
pub use map::{MapData, TileLayer};
pub use position::GridPos;
