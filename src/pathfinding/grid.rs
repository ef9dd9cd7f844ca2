use crate::error::{NavError, NavResult};
use crate::model::constants::{EMPTY_GLYPH, WALL_GLYPH};
use crate::model::enums::{Facing, NodeType};
use crate::model::map::MapData;
use crate::model::position::GridPos;
use crate::pathfinding::coords::CoordinateMapper;
use glam::Vec2;
use std::fmt;

use super::node::Node;

/// Fixed-size walkability grid, one node per map tile.
/// Nodes are stored row-major with y = 0 at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    nodes: Vec<Node>,
}

impl Grid {
    /// Fully open grid.
    pub fn new(width: u32, height: u32) -> Self {
        let capacity = (width as usize).checked_mul(height as usize).unwrap_or(0);
        let mut nodes = Vec::with_capacity(capacity);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                nodes.push(Node::new(x, y));
            }
        }
        Grid {
            width,
            height,
            nodes,
        }
    }

    /// Build from the map's wall layer. Any non-zero tile id is a wall.
    pub fn from_map_data(map: &MapData) -> NavResult<Self> {
        // Checks the cell count before anything is allocated
        let layer = map.wall_layer()?;
        let mut grid = Grid::new(map.width, map.height);

        for (i, &tile) in layer.data.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            // Tiled rows run top-down
            let x = (i as u32 % map.width) as i32;
            let y = (map.height - 1 - i as u32 / map.width) as i32;
            grid.set_node_type(GridPos::new(x, y), NodeType::Wall);
        }

        log::debug!(
            "Loaded {}x{} grid with {} walls",
            grid.width,
            grid.height,
            grid.wall_count()
        );
        Ok(grid)
    }

    /// Build from ASCII rows, top row first. `#` is a wall, `.` is floor.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> NavResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(NavError::EmptyMap);
        }

        let mut grid = Grid::new(width as u32, height as u32);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(NavError::RaggedRows {
                    row,
                    expected: width,
                    actual,
                });
            }

            let y = (height - 1 - row) as i32;
            for (x, glyph) in line.chars().enumerate() {
                let node_type = match glyph {
                    WALL_GLYPH => NodeType::Wall,
                    EMPTY_GLYPH => NodeType::Empty,
                    other => return Err(NavError::InvalidTile(other)),
                };
                grid.set_node_type(GridPos::new(x as i32, y), node_type);
            }
        }

        Ok(grid)
    }

    /// Random floor plan for stress maps and benchmarks.
    pub fn random(width: u32, height: u32, wall_density: f64, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut grid = Grid::new(width, height);
        for node in grid.nodes.iter_mut() {
            if rng.f64() < wall_density {
                node.node_type = NodeType::Wall;
            }
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.width as i32).contains(&pos.x) && (0..self.height as i32).contains(&pos.y)
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    pub fn node(&self, pos: GridPos) -> Option<&Node> {
        self.index_of(pos).map(|i| &self.nodes[i])
    }

    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// False for walls and for anything outside the grid.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.node(pos).is_some_and(Node::is_walkable)
    }

    pub fn set_node_type(&mut self, pos: GridPos, node_type: NodeType) {
        if let Some(i) = self.index_of(pos) {
            self.nodes[i].node_type = node_type;
        }
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_walkable()).count()
    }

    /// The tile directly in front of `pos` when looking towards `facing`.
    /// Chefs use this to find the station they are standing at.
    pub fn node_at_facing(&self, pos: GridPos, facing: Facing) -> Option<&Node> {
        if !self.contains(pos) {
            return None;
        }
        let (dx, dy) = facing.grid_offset();
        self.node(pos.offset(dx, dy))
    }

    /// Collision test for a world-space point. Points off the map collide.
    pub fn is_blocked_at(&self, mapper: &CoordinateMapper, world: Vec2) -> bool {
        !self.is_walkable(mapper.world_to_grid_point(world))
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as ASCII, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let glyph = if self.is_walkable(GridPos::new(x, y)) {
                    EMPTY_GLYPH
                } else {
                    WALL_GLYPH
                };
                write!(f, "{glyph}")?;
            }
            if y != 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
