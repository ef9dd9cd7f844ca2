mod common;

use chefnav_core::model::position::GridPos;
use chefnav_core::pathfinding::{Grid, Pathfinder};
use common::{init_logging, octile_distance, reachable};

#[test]
fn test_open_grid_paths_are_optimal() {
    init_logging();
    let grid = Grid::new(6, 6);
    let mut pathfinder = Pathfinder::new();

    for sx in 0..6 {
        for sy in 0..6 {
            for gx in 0..6 {
                for gy in 0..6 {
                    let start = GridPos::new(sx, sy);
                    let goal = GridPos::new(gx, gy);
                    let path = pathfinder
                        .find_path(&grid, start, goal)
                        .unwrap_or_else(|| panic!("no path {start} -> {goal}"));

                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.goal(), Some(goal));
                    assert!(
                        (path.cost() - octile_distance(start, goal)).abs() < 1e-9,
                        "{start} -> {goal} cost {} expected {}",
                        path.cost(),
                        octile_distance(start, goal)
                    );
                }
            }
        }
    }
}

#[test]
fn test_five_by_five_diagonal_scenario() {
    let grid = Grid::new(5, 5);
    let path = Pathfinder::new()
        .find_path(&grid, GridPos::new(0, 0), GridPos::new(4, 4))
        .unwrap();

    assert_eq!(path.len(), 5);
    assert_eq!(path.diagonal_steps(), 4);
    assert!((path.cost() - 4.0 * 1.4142).abs() < 0.001);
}

#[test]
fn test_wall_forces_detour() {
    let grid = Grid::from_rows(&[".....", ".....", ".#..."]).unwrap();
    let path = Pathfinder::new()
        .find_path(&grid, GridPos::new(0, 0), GridPos::new(2, 0))
        .unwrap();

    assert_eq!(
        path.tiles,
        vec![GridPos::new(0, 0), GridPos::new(1, 1), GridPos::new(2, 0)]
    );
    assert!(path.cost() > 2.0);
}

#[test]
fn test_walled_goal_never_found() {
    let grid = Grid::from_rows(&["....", ".#..", "...."]).unwrap();
    let mut pathfinder = Pathfinder::new();
    let goal = GridPos::new(1, 1);

    for start in (0..4).flat_map(|x| (0..3).map(move |y| GridPos::new(x, y))) {
        assert!(
            pathfinder.find_path(&grid, start, goal).is_none(),
            "found a path from {start} into a wall"
        );
    }
}

#[test]
fn test_trivial_path_on_every_floor_tile() {
    let grid = Grid::random(12, 9, 0.25, 11);
    let mut pathfinder = Pathfinder::new();

    for node in grid.nodes().iter().filter(|n| n.is_walkable()) {
        let path = pathfinder
            .find_path(&grid, node.position, node.position)
            .unwrap();
        assert_eq!(path.tiles, vec![node.position]);
    }
}

#[test]
fn test_random_grids_match_reachability() {
    init_logging();
    let mut pathfinder = Pathfinder::new();

    for seed in 0..20 {
        let grid = Grid::random(16, 12, 0.3, seed);
        let Some(start) = grid.nodes().iter().find(|n| n.is_walkable()).map(|n| n.position) else {
            continue;
        };
        let reachable_tiles = reachable(&grid, start);

        for node in grid.nodes().iter().filter(|n| n.is_walkable()) {
            let found = pathfinder.find_path(&grid, start, node.position);
            let expected = reachable_tiles.contains(&node.position);
            assert_eq!(
                found.is_some(),
                expected,
                "seed {seed}: {start} -> {} reachable={expected}",
                node.position
            );

            if let Some(path) = found {
                for pair in path.tiles.windows(2) {
                    assert!(pair[0].is_adjacent(&pair[1]));
                }
                for tile in &path {
                    assert!(grid.is_walkable(*tile), "seed {seed}: path crosses wall {tile}");
                }
            }
        }
    }
}

#[test]
fn test_successive_searches_are_independent() {
    let grid = Grid::from_rows(&[
        "..........",
        "....#.....",
        "....#.....",
        "....#.....",
        "..........",
    ])
    .unwrap();
    let mut reused = Pathfinder::new();

    let pairs = [
        (GridPos::new(0, 2), GridPos::new(9, 2)),
        (GridPos::new(9, 0), GridPos::new(0, 4)),
        (GridPos::new(5, 2), GridPos::new(3, 2)),
        (GridPos::new(0, 2), GridPos::new(9, 2)),
    ];

    for (start, goal) in pairs {
        let fresh = Pathfinder::new().find_path(&grid, start, goal);
        assert_eq!(reused.find_path(&grid, start, goal), fresh);
    }
}

#[test]
fn test_failed_search_does_not_poison_next() {
    let grid = Grid::from_rows(&["..#..", "..#..", "..#.."]).unwrap();
    let mut pathfinder = Pathfinder::new();

    assert!(pathfinder
        .find_path(&grid, GridPos::new(0, 0), GridPos::new(4, 0))
        .is_none());

    let path = pathfinder
        .find_path(&grid, GridPos::new(0, 0), GridPos::new(1, 2))
        .unwrap();
    assert_eq!(
        path.tiles,
        vec![GridPos::new(0, 0), GridPos::new(1, 1), GridPos::new(1, 2)]
    );
}
