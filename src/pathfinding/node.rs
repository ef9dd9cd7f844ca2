use crate::model::enums::NodeType;
use crate::model::position::GridPos;
use std::cmp::Ordering;

/// One tile of the grid. Created when the map loads and never changed by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub position: GridPos,
    pub node_type: NodeType,
}

impl Node {
    pub fn new(x: i32, y: i32) -> Self {
        Node {
            position: GridPos::new(x, y),
            node_type: NodeType::Empty,
        }
    }

    pub fn wall(x: i32, y: i32) -> Self {
        Node {
            position: GridPos::new(x, y),
            node_type: NodeType::Wall,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn is_walkable(&self) -> bool {
        self.node_type != NodeType::Wall
    }
}

/// Search metadata for one tile, kept in the pathfinder's scratch arena
/// and indexed like the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord {
    /// Cost from the start along the best known route
    g: f64,
    /// Heuristic estimate to the goal
    h: f64,
    /// g + h
    f: f64,
    /// Grid index of the predecessor on the best known route
    parent: Option<usize>,
    /// First time this tile entered the open set, used for tie-breaking
    order: Option<u64>,
    closed: bool,
}

impl Default for NodeRecord {
    fn default() -> Self {
        NodeRecord {
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
            parent: None,
            order: None,
            closed: false,
        }
    }
}

impl NodeRecord {
    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.f
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_g(&mut self, g: f64) {
        self.g = g;
        self.f = self.g + self.h;
    }

    pub fn set_h(&mut self, h: f64) {
        self.h = h;
        self.f = self.g + self.h;
    }

    pub fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    /// Insertion order for the open set. The first insertion sticks, so
    /// re-adding a tile keeps its original place among equal f scores.
    pub(crate) fn open_order(&mut self, next: &mut u64) -> u64 {
        *self.order.get_or_insert_with(|| {
            let order = *next;
            *next += 1;
            order
        })
    }

    /// Forget everything from the previous search.
    pub fn reset(&mut self) {
        *self = NodeRecord::default();
    }
}

/// Open set entry. Entries go stale when their tile is rescored or closed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub f: f64,
    pub order: u64,
    pub index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (lower f_score = higher priority)
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            // Tie-breaker: earlier insertion wins
            .then_with(|| other.order.cmp(&self.order))
    }
}
