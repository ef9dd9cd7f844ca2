#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use chefnav_core::model::position::GridPos;
use chefnav_core::pathfinding::{CoordinateMapper, Grid, PathService};

pub const FRAME: f32 = 1.0 / 60.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small kitchen: counters along the middle with a gap on the right.
pub const KITCHEN: [&str; 7] = [
    "..........",
    "..........",
    "########..",
    "..........",
    "...##.....",
    "...##.....",
    "..........",
];

pub fn kitchen_service() -> PathService {
    init_logging();
    let grid = Grid::from_rows(&KITCHEN).expect("kitchen layout is valid");
    PathService::spawn(Arc::new(grid), CoordinateMapper::default()).expect("worker starts")
}

/// Tiles reachable from `start` over walkable tiles with 8-directional moves.
pub fn reachable(grid: &Grid, start: GridPos) -> Vec<GridPos> {
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    let mut out = Vec::new();

    if let Some(index) = grid.index_of(start) {
        seen[index] = true;
        queue.push_back(start);
    }

    while let Some(pos) = queue.pop_front() {
        out.push(pos);
        for next in pos.neighbors() {
            let Some(index) = grid.index_of(next) else {
                continue;
            };
            if !seen[index] && grid.is_walkable(next) {
                seen[index] = true;
                queue.push_back(next);
            }
        }
    }

    out
}

/// Cheapest 8-directional cost between two tiles on an open grid.
pub fn octile_distance(a: GridPos, b: GridPos) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    dx.min(dy) * std::f64::consts::SQRT_2 + (dx - dy).abs()
}
