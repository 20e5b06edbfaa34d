//! Grid search algorithms and their visualisation hooks.
//!
//! Both searches walk the same 4-connected neighbour relation ([`Level::neighbors`]) and write
//! the cells they flag into the level's overlay. Every time a cell is flagged the search stops
//! and hands the level to a [`StepObserver`], which is how the game animates a search without the
//! search knowing anything about rendering.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::debug;

use crate::{frontier::Frontier, level::Level, types::Position};

/// A single visible change made by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The flood fill discovered a cell.
    Visited(Position),
    /// A cell of the final path was flagged.
    OnPath(Position),
}

/// Receives every [`Step`] a search makes, right after it has been applied to the level.
///
/// Observers run synchronously on the searching thread; the search resumes when `on_step`
/// returns.
pub trait StepObserver {
    /// Called with the level as it looks after `step`.
    fn on_step(&mut self, level: &Level, step: Step);
}

impl<F> StepObserver for F
where
    F: FnMut(&Level, Step),
{
    fn on_step(&mut self, level: &Level, step: Step) {
        self(level, step);
    }
}

/// Observer that ignores every step, for headless searches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _level: &Level, _step: Step) {}
}

/// Breadth-first flood fill from `start`.
///
/// Returns every walkable cell reachable from `start`, `start` included. The overlay is replaced
/// by the visited set as it grows. A start cell that is not walkable reaches nothing and yields
/// an empty set.
pub fn flood_fill<O>(level: &mut Level, start: Position, observer: &mut O) -> BTreeSet<Position>
where
    O: StepObserver + ?Sized,
{
    level.overlay.clear();

    let mut visited = BTreeSet::new();
    if !level.is_walkable(start) {
        return visited;
    }

    let _ = visited.insert(start);
    let _ = level.overlay.insert(start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let neighbors: Vec<Position> = level.neighbors(current).collect();
        for next in neighbors {
            if visited.insert(next) {
                let _ = level.overlay.insert(next);
                queue.push_back(next);
                observer.on_step(level, Step::Visited(next));
            }
        }
    }

    debug!(%start, visited = visited.len(), "flood fill finished");
    visited
}

/// A* search from `start` to `goal`.
///
/// Each step costs one and the frontier is ordered by cost so far plus the Manhattan distance
/// to the goal, with ties served first-in first-out. The returned path includes both endpoints;
/// it is empty when the goal cannot be reached. Like [`flood_fill`], a start or goal cell that is
/// not walkable yields nothing. The overlay is replaced by the final path.
pub fn find_path<O>(
    level: &mut Level,
    start: Position,
    goal: Position,
    observer: &mut O,
) -> Vec<Position>
where
    O: StepObserver + ?Sized,
{
    level.overlay.clear();

    if !level.is_walkable(start) || !level.is_walkable(goal) {
        debug!(%start, %goal, "search endpoint is not walkable");
        return Vec::new();
    }

    let mut frontier = Frontier::new();
    let mut came_from = BTreeMap::new();
    let mut cost_so_far = BTreeMap::from([(start, 0_usize)]);
    frontier.push(start, start.manhattan(goal));

    while let Some(current) = frontier.pop() {
        if current == goal {
            let path = reconstruct_path(&came_from, start, goal);
            for &cell in &path {
                let _ = level.overlay.insert(cell);
                observer.on_step(level, Step::OnPath(cell));
            }
            debug!(%start, %goal, length = path.len(), queued = frontier.len(), "path found");

            return path;
        }

        let next_cost = cost_so_far.get(&current).copied().unwrap_or_default() + 1;
        let neighbors: Vec<Position> = level.neighbors(current).collect();
        for next in neighbors {
            if cost_so_far
                .get(&next)
                .is_some_and(|&known| known <= next_cost)
            {
                continue;
            }
            let _ = cost_so_far.insert(next, next_cost);
            let _ = came_from.insert(next, current);
            frontier.push(next, next_cost.saturating_add(next.manhattan(goal)));
        }
    }

    debug!(%start, %goal, explored = cost_so_far.len(), "no path");
    Vec::new()
}

/// Walks the predecessor links back from `goal` and returns the path in walking order.
fn reconstruct_path(
    came_from: &BTreeMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&previous) = came_from.get(&current) else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();

    path
}
