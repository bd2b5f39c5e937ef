use crate::graph::{NeighborProvider, Vertex};
use std::collections::HashSet;

/// Walk the sub-graph reachable from `start` in depth-first pre-order.
///
/// `visit` is called exactly once per reachable vertex, at its first
/// discovery, together with the full neighbor list the provider returned for
/// it. Frames hold the not yet tried neighbors of each vertex on the current
/// branch, so depth is bounded by heap memory rather than the call stack.
/// Returns the set of visited vertices.
pub fn preorder_walk<V, P, F>(provider: &P, start: &V, mut visit: F) -> Result<HashSet<V>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
    F: FnMut(&V, &[V]),
{
    let mut visited: HashSet<V> = HashSet::new();
    visited.insert(start.clone());

    let neighbors = provider.neighbors(start)?;
    visit(start, &neighbors);
    let mut stack = vec![neighbors.into_iter()];

    while let Some(pending) = stack.last_mut() {
        let Some(next) = pending.next() else {
            stack.pop();
            continue;
        };

        if !visited.insert(next.clone()) {
            continue;
        }

        let neighbors = provider.neighbors(&next)?;
        visit(&next, &neighbors);
        stack.push(neighbors.into_iter());
    }

    Ok(visited)
}
