use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::{NavError, NavResult};
use crate::model::position::GridPos;

use super::astar::Pathfinder;
use super::coords::CoordinateMapper;
use super::grid::Grid;
use super::path::{GridPath, WorldPath};

struct PathRequest {
    start: GridPos,
    goal: GridPos,
    reply: Sender<Option<GridPath>>,
}

/// Runs searches for one grid on a dedicated worker thread.
///
/// Requests are queued and answered in order, so at most one search runs
/// against the grid at a time. There is no cancellation: a queued search
/// always runs to completion.
pub struct PathService {
    requests: Option<Sender<PathRequest>>,
    worker: Option<JoinHandle<()>>,
    mapper: CoordinateMapper,
    grid: Arc<Grid>,
}

impl PathService {
    pub fn spawn(grid: Arc<Grid>, mapper: CoordinateMapper) -> NavResult<Self> {
        let (requests, inbox) = mpsc::channel::<PathRequest>();
        let worker_grid = Arc::clone(&grid);

        let worker = thread::Builder::new()
            .name("path-worker".to_string())
            .spawn(move || run_worker(&worker_grid, inbox))?;

        log::info!(
            "Path worker started for {}x{} grid",
            grid.width(),
            grid.height()
        );

        Ok(PathService {
            requests: Some(requests),
            worker: Some(worker),
            mapper,
            grid,
        })
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Queue a search and return immediately.
    /// A missing start or goal gives a ticket that is already resolved to an empty path.
    pub fn request(&self, start: Option<GridPos>, goal: Option<GridPos>) -> PathTicket {
        let (Some(start), Some(goal)) = (start, goal) else {
            return PathTicket::ready(WorldPath::new());
        };

        let Some(requests) = &self.requests else {
            return PathTicket::failed();
        };

        let (reply, response) = mpsc::channel();
        if requests.send(PathRequest { start, goal, reply }).is_err() {
            log::error!("Path worker is gone, dropping request {start} -> {goal}");
            return PathTicket::failed();
        }

        PathTicket {
            state: TicketState::Pending {
                response,
                mapper: self.mapper,
            },
        }
    }

    /// Search and block until the world path is ready.
    /// Any failure comes back as an empty path, which leaves the actor standing still.
    pub fn compute_path(&self, start: Option<GridPos>, goal: Option<GridPos>) -> WorldPath {
        self.request(start, goal).wait().unwrap_or_else(|err| {
            log::error!("Path request failed: {err}");
            WorldPath::new()
        })
    }
}

impl Drop for PathService {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Path worker panicked");
            }
        }
    }
}

fn run_worker(grid: &Grid, inbox: Receiver<PathRequest>) {
    let mut pathfinder = Pathfinder::new();

    for request in inbox {
        let path = pathfinder.find_path(grid, request.start, request.goal);
        // The requester may have dropped its ticket
        let _ = request.reply.send(path);
    }

    log::info!("Path worker stopped");
}

enum TicketState {
    Ready(WorldPath),
    Pending {
        response: Receiver<Option<GridPath>>,
        mapper: CoordinateMapper,
    },
    Failed,
    Taken,
}

/// Handle to a queued search. Poll with [`PathTicket::try_take`] or block with [`PathTicket::wait`].
pub struct PathTicket {
    state: TicketState,
}

impl PathTicket {
    fn ready(path: WorldPath) -> Self {
        PathTicket {
            state: TicketState::Ready(path),
        }
    }

    fn failed() -> Self {
        PathTicket {
            state: TicketState::Failed,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, TicketState::Ready(_))
    }

    /// Block until the search finishes. An unreachable goal gives an empty path.
    pub fn wait(self) -> NavResult<WorldPath> {
        match self.state {
            TicketState::Ready(path) => Ok(path),
            TicketState::Pending { response, mapper } => {
                let path = response.recv().map_err(|_| NavError::WorkerDisconnected)?;
                Ok(to_world(&mapper, path))
            }
            TicketState::Failed | TicketState::Taken => Err(NavError::WorkerDisconnected),
        }
    }

    /// Take the result if the search has finished, without blocking.
    /// Returns `Ok(None)` while the search is still running, and after the
    /// result has been taken.
    pub fn try_take(&mut self) -> NavResult<Option<WorldPath>> {
        let state = std::mem::replace(&mut self.state, TicketState::Taken);
        match state {
            TicketState::Ready(path) => Ok(Some(path)),
            TicketState::Pending { response, mapper } => match response.try_recv() {
                Ok(path) => Ok(Some(to_world(&mapper, path))),
                Err(TryRecvError::Empty) => {
                    self.state = TicketState::Pending { response, mapper };
                    Ok(None)
                }
                Err(TryRecvError::Disconnected) => Err(NavError::WorkerDisconnected),
            },
            TicketState::Taken => Ok(None),
            TicketState::Failed => Err(NavError::WorkerDisconnected),
        }
    }
}

fn to_world(mapper: &CoordinateMapper, path: Option<GridPath>) -> WorldPath {
    path.map(|path| mapper.to_world_path(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn service(rows: &[&str]) -> PathService {
        let grid = Grid::from_rows(rows).unwrap();
        PathService::spawn(Arc::new(grid), CoordinateMapper::default()).unwrap()
    }

    #[test]
    fn test_missing_endpoints_return_empty_path() {
        let service = service(&["...", "...", "..."]);

        assert!(service.compute_path(None, Some(GridPos::new(1, 1))).is_empty());
        assert!(service.compute_path(Some(GridPos::new(1, 1)), None).is_empty());
        assert!(service.request(None, None).is_ready());
    }

    #[test]
    fn test_compute_path_returns_world_waypoints() {
        let service = service(&["...", "...", "..."]);

        let path = service.compute_path(Some(GridPos::new(0, 0)), Some(GridPos::new(2, 2)));

        assert_eq!(
            path,
            vec![
                Vec2::new(-112.0, -112.0),
                Vec2::new(-80.0, -80.0),
                Vec2::new(-48.0, -48.0),
            ]
        );
    }

    #[test]
    fn test_unreachable_goal_gives_empty_path() {
        let service = service(&["...", "...", "..#"]);

        let path = service.compute_path(Some(GridPos::new(0, 0)), Some(GridPos::new(2, 0)));

        assert!(path.is_empty());
    }

    #[test]
    fn test_ticket_poll_then_wait() {
        let service = service(&["....", "....", "....", "...."]);
        let mut ticket = service.request(Some(GridPos::new(0, 0)), Some(GridPos::new(3, 3)));

        let mut polled = None;
        for _ in 0..1000 {
            match ticket.try_take().unwrap() {
                Some(path) => {
                    polled = Some(path);
                    break;
                }
                None => std::thread::sleep(std::time::Duration::from_millis(1)),
            }
        }

        let path = polled.expect("search should finish");
        assert_eq!(path.len(), 4);
        assert_eq!(ticket.try_take().unwrap(), None);
    }

    #[test]
    fn test_requests_answered_in_order() {
        let service = service(&[".....", ".....", "....."]);

        let tickets: Vec<PathTicket> = (0..5)
            .map(|x| service.request(Some(GridPos::new(0, 0)), Some(GridPos::new(x, 2))))
            .collect();

        for (x, ticket) in tickets.into_iter().enumerate() {
            let path = ticket.wait().unwrap();
            let goal = service.mapper().grid_to_world_point(GridPos::new(x as i32, 2));
            assert_eq!(path.last(), Some(&goal));
        }
    }

    #[test]
    fn test_ticket_survives_service_drop() {
        let service = service(&["...", "...", "..."]);
        let ticket = service.request(Some(GridPos::new(0, 0)), Some(GridPos::new(1, 0)));

        drop(service);

        // The worker drains queued requests before it stops
        assert_eq!(ticket.wait().unwrap().len(), 2);
    }
}
