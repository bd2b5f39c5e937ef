mod path;

use crate::graph::types::Path;
use crate::graph::{NeighborProvider, Vertex};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Find a path from `start` to `target` with the fewest edges.
///
/// Vertices are expanded in FIFO order. Every neighbour of an expanded vertex
/// is recorded in `visited`; the search stops the moment `target` shows up as
/// a neighbour. A vertex is enqueued at most once.
///
/// Returns `Ok(None)` when `target` is not reachable from `start`.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, target = ?target))]
pub fn breadth_first_search<V, P>(
    provider: &P,
    start: &V,
    target: &V,
) -> Result<Option<Path<V>>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
{
    let started = Instant::now();
    let mut result = Path::new();
    result.visited.insert(start.clone());

    if start == target {
        result.vertices.push(start.clone());
        return Ok(Some(result));
    }

    let mut queue: VecDeque<V> = VecDeque::new();
    let mut visited_from: HashMap<V, Option<V>> = HashMap::new();

    queue.push_back(start.clone());
    visited_from.insert(start.clone(), None);

    while let Some(current) = queue.pop_front() {
        tracing::trace!(vertex = ?current, queued = queue.len(), "bfs expand");

        for neighbor in provider.neighbors(&current)? {
            result.visited.insert(neighbor.clone());

            if neighbor == *target {
                result.vertices = path::reconstruct_path(&current, target, &visited_from);
                crate::trace_time!(started, "breadth_first_search", visited = result.visited.len());
                tracing::debug!(
                    found = true,
                    path_len = result.len(),
                    visited = result.visited.len(),
                    "bfs finished"
                );
                return Ok(Some(result));
            }

            if let Entry::Vacant(slot) = visited_from.entry(neighbor) {
                let neighbor = slot.key().clone();
                slot.insert(Some(current.clone()));
                queue.push_back(neighbor);
            }
        }
    }

    crate::trace_time!(started, "breadth_first_search", visited = result.visited.len());
    tracing::debug!(found = false, visited = result.visited.len(), "bfs finished");
    Ok(None)
}
