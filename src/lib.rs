use pyo3::{exceptions::PyValueError, prelude::*};
use serde::Deserialize;
use serde_json::json;

use crate::model::config::MapConfig;
use crate::model::position::GridPos;
use crate::pathfinding::{CoordinateMapper, Grid, Pathfinder};

pub mod actor;
pub mod error;
pub mod model;
pub mod pathfinding;

/// JSON request accepted by [`find_path`].
#[derive(Debug, Deserialize)]
struct PathQuery {
    rows: Vec<String>,
    start: GridPos,
    goal: GridPos,
    #[serde(default)]
    config: MapConfig,
}

fn run_query(query: &str) -> error::NavResult<serde_json::Value> {
    let query: PathQuery = serde_json::from_str(query)?;
    let grid = Grid::from_rows(&query.rows)?;
    let mapper = CoordinateMapper::new(query.config.validate()?);

    let response = match Pathfinder::new().find_path(&grid, query.start, query.goal) {
        Some(path) => {
            let world: Vec<[f32; 2]> = mapper
                .to_world_path(&path)
                .into_iter()
                .map(|point| point.to_array())
                .collect();
            json!({"path": path.tiles, "world_path": world, "cost": path.cost()})
        }
        None => json!({"path": null, "world_path": [], "cost": null}),
    };
    Ok(response)
}

#[pyfunction]
fn find_path(query: &str) -> PyResult<String> {
    match run_query(query) {
        // Return a standardized JSON object: { "path": [...], "world_path": [...], "cost": ... }
        Ok(response) => match serde_json::to_string(&response) {
            Ok(s) => Ok(s),
            Err(e) => Err(PyValueError::new_err(format!("{e}"))),
        },
        Err(e) => Err(PyValueError::new_err(format!(
            "Invalid path query provided: {e}"
        ))),
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn chefnav_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let _ = env_logger::try_init();
    m.add_function(wrap_pyfunction!(find_path, m)?)?;
    Ok(())
}
