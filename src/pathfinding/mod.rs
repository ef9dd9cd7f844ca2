pub mod astar;
pub mod coords;
pub mod follower;
pub mod grid;
pub mod node;
pub mod path;
pub mod service;

pub use astar::Pathfinder;
pub use coords::CoordinateMapper;
pub use follower::PathFollower;
pub use grid::Grid;
pub use node::{Node, NodeRecord};
pub use path::{GridPath, WorldPath};
pub use service::{PathService, PathTicket};
