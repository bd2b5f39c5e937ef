//! Path reconstruction from BFS predecessor links

use std::collections::HashMap;
use std::hash::Hash;

/// Rebuild the vertex sequence ending in `reached -> target`.
///
/// `visited_from` maps every enqueued vertex to the vertex it was first seen
/// from; the start vertex maps to `None`.
pub fn reconstruct_path<V>(reached: &V, target: &V, visited_from: &HashMap<V, Option<V>>) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut vertices = vec![target.clone()];
    let mut current = Some(reached.clone());

    while let Some(vertex) = current {
        current = visited_from.get(&vertex).cloned().flatten();
        vertices.push(vertex);
    }

    vertices.reverse();
    vertices
}
