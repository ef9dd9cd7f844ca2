use std::collections::BinaryHeap;

use crate::model::position::GridPos;

use super::grid::Grid;
use super::node::{NodeRecord, OpenEntry};
use super::path::GridPath;

/// A* pathfinder over a walkability grid, 8-directional movement.
///
/// Search metadata lives in a scratch arena owned by the pathfinder rather
/// than on the grid, so the grid stays immutable and can be shared. The arena
/// is reset before every search and reused between searches.
#[derive(Debug, Default)]
pub struct Pathfinder {
    records: Vec<NodeRecord>,
    open_set: BinaryHeap<OpenEntry>,
    next_order: u64,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scratch record of a tile from the most recent search.
    pub fn record(&self, index: usize) -> Option<&NodeRecord> {
        self.records.get(index)
    }

    /// Find a route from `start` to `goal`.
    ///
    /// Returns `None` when the goal is off the grid, a wall, or unreachable.
    /// A search that starts on its goal returns the single-tile path.
    pub fn find_path(&mut self, grid: &Grid, start: GridPos, goal: GridPos) -> Option<GridPath> {
        if !grid.is_walkable(goal) {
            log::debug!("Goal {goal} is off the grid or a wall");
            return None;
        }
        if start == goal {
            return Some(GridPath::single(start));
        }
        let start_index = grid.index_of(start)?;

        self.reset(grid.len());

        let start_record = &mut self.records[start_index];
        start_record.set_g(0.0);
        start_record.set_h(start.manhattan_distance(&goal) as f64);
        self.push_open(start_index);

        while let Some(entry) = self.open_set.pop() {
            let current_index = entry.index;
            let current = self.records[current_index];

            // Skip entries for tiles already expanded or rescored since
            if current.is_closed() || entry.f > current.f() {
                continue;
            }

            let Some(current_node) = grid.node_at(current_index) else {
                continue;
            };
            let current_pos = current_node.position;

            for neighbor_pos in current_pos.neighbors() {
                let Some(neighbor_index) = grid.index_of(neighbor_pos) else {
                    continue;
                };

                // Goal check happens on generation
                if neighbor_pos == goal {
                    self.records[neighbor_index].set_parent(Some(current_index));
                    let path = self.backtrack(grid, neighbor_index);
                    log::debug!(
                        "Found path {start} -> {goal} with {} tiles, cost {:.3}",
                        path.len(),
                        path.cost()
                    );
                    return Some(path);
                }

                let neighbor = &self.records[neighbor_index];
                if neighbor.is_closed() || !grid.nodes()[neighbor_index].is_walkable() {
                    continue;
                }

                let g = current.g() + current_pos.step_cost(&neighbor_pos);
                let h = neighbor_pos.manhattan_distance(&goal) as f64;
                let f = g + h;

                // Only keep the previous scores if they are strictly better
                if neighbor.f() < f {
                    continue;
                }

                let neighbor = &mut self.records[neighbor_index];
                neighbor.set_g(g);
                neighbor.set_h(h);
                neighbor.set_parent(Some(current_index));
                self.push_open(neighbor_index);
            }

            self.records[current_index].close();
        }

        log::warn!("No path from {start} to {goal}");
        None
    }

    fn reset(&mut self, size: usize) {
        self.records.resize(size, NodeRecord::default());
        self.records.iter_mut().for_each(NodeRecord::reset);
        self.open_set.clear();
        self.next_order = 0;
    }

    fn push_open(&mut self, index: usize) {
        let record = &mut self.records[index];
        let order = record.open_order(&mut self.next_order);
        self.open_set.push(OpenEntry {
            f: record.f(),
            order,
            index,
        });
    }

    /// Walk parent links back from `end` to the tile without a parent (the start).
    fn backtrack(&self, grid: &Grid, end: usize) -> GridPath {
        let mut tiles = Vec::new();
        let mut current = Some(end);

        while let Some(index) = current {
            if let Some(node) = grid.node_at(index) {
                tiles.push(node.position);
            }
            current = self.records[index].parent();
        }

        tiles.reverse();
        GridPath::new(tiles)
    }
}
