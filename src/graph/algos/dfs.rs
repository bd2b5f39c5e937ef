use crate::graph::types::Path;
use crate::graph::{NeighborProvider, Vertex};
use std::time::Instant;

/// One vertex on the branch under exploration, with the neighbours not tried yet
struct Frame<V> {
    pending: std::vec::IntoIter<V>,
}

/// Find some path from `start` to `target` by depth-first search.
///
/// The path is not necessarily the shortest; which one is found depends on
/// the provider's neighbour order. Every vertex the search marks ends up in
/// `visited`, including those on abandoned branches. A vertex is entered at
/// most once, so cycles and self-loops terminate.
///
/// Returns `Ok(None)` when `target` is not reachable from `start`.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, target = ?target))]
pub fn depth_first_search<V, P>(
    provider: &P,
    start: &V,
    target: &V,
) -> Result<Option<Path<V>>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
{
    let started = Instant::now();
    let mut path = Path::new();

    let mut stack = match enter(provider, &mut path, start.clone(), target)? {
        Some(frame) => vec![frame],
        None => return Ok(Some(path)),
    };

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            // dead end: backtrack
            stack.pop();
            path.vertices.pop();
            continue;
        };

        if path.visited.contains(&next) {
            continue;
        }

        match enter(provider, &mut path, next, target)? {
            Some(frame) => stack.push(frame),
            None => {
                crate::trace_time!(started, "depth_first_search", visited = path.visited.len());
                tracing::debug!(
                    found = true,
                    path_len = path.len(),
                    visited = path.visited.len(),
                    "dfs finished"
                );
                return Ok(Some(path));
            }
        }
    }

    crate::trace_time!(started, "depth_first_search", visited = path.visited.len());
    tracing::debug!(found = false, visited = path.visited.len(), "dfs finished");
    Ok(None)
}

/// Mark `vertex` visited and append it to the path. Returns `None` when it is
/// the target, otherwise the frame holding its neighbours.
fn enter<V, P>(
    provider: &P,
    path: &mut Path<V>,
    vertex: V,
    target: &V,
) -> Result<Option<Frame<V>>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
{
    path.visited.insert(vertex.clone());
    let is_target = vertex == *target;
    if is_target {
        path.vertices.push(vertex);
        return Ok(None);
    }

    let pending = provider.neighbors(&vertex)?.into_iter();
    tracing::trace!(vertex = ?vertex, depth = path.vertices.len(), "dfs enter");
    path.vertices.push(vertex);
    Ok(Some(Frame { pending }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::get_all_vertices;
    use crate::graph::{from_fn, try_from_fn};
    use std::collections::HashSet;

    fn sample(v: &u32) -> Vec<u32> {
        match v {
            1 => vec![2, 3],
            2 => vec![3, 4],
            3 => vec![4],
            _ => vec![],
        }
    }

    fn set(items: &[u32]) -> HashSet<u32> {
        items.iter().copied().collect()
    }

    fn assert_chain(path: &Path<u32>, provider: impl Fn(&u32) -> Vec<u32>) {
        for pair in path.vertices().windows(2) {
            assert!(
                provider(&pair[0]).contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_dfs_finds_path() {
        let provider = from_fn(sample);
        let path = depth_first_search(&provider, &1, &4).unwrap().unwrap();

        assert_eq!(path.start(), Some(&1));
        assert_eq!(path.target(), Some(&4));
        assert_eq!(path.vertices(), &[1, 2, 3, 4]);
        assert_eq!(path.visited(), &set(&[1, 2, 3, 4]));
        assert_eq!(path.total_weight(), 0.0);
        assert_chain(&path, sample);
    }

    #[test]
    fn test_dfs_visited_limited_to_explored_part() {
        let provider = from_fn(sample);
        let path = depth_first_search(&provider, &2, &3).unwrap().unwrap();

        assert_eq!(path.vertices(), &[2, 3]);
        assert_eq!(path.visited(), &set(&[2, 3]));
    }

    #[test]
    fn test_dfs_unknown_target() {
        let provider = from_fn(sample);
        assert!(depth_first_search(&provider, &1, &5).unwrap().is_none());
    }

    #[test]
    fn test_dfs_start_is_target() {
        let provider = from_fn(|_: &u32| Vec::new());
        let path = depth_first_search(&provider, &1, &1).unwrap().unwrap();

        assert_eq!(path.vertices(), &[1]);
        assert_eq!(path.visited(), &set(&[1]));
        assert_eq!(path.total_weight(), 0.0);
    }

    #[test]
    fn test_dfs_backtracked_vertices_stay_visited() {
        // 1 tries the dead end 2 -> 5 first, then reaches 4 through 3
        let graph = |v: &u32| match v {
            1 => vec![2, 3],
            2 => vec![5],
            3 => vec![4],
            _ => vec![],
        };
        let provider = from_fn(graph);
        let path = depth_first_search(&provider, &1, &4).unwrap().unwrap();

        assert_eq!(path.vertices(), &[1, 3, 4]);
        assert_eq!(path.visited(), &set(&[1, 2, 3, 4, 5]));
        assert_chain(&path, graph);
    }

    #[test]
    fn test_dfs_self_loops_and_cycles_terminate() {
        let provider = from_fn(|v: &u32| match v {
            1 => vec![1, 2],
            2 => vec![2, 1, 3],
            3 => vec![1],
            _ => vec![],
        });

        assert!(depth_first_search(&provider, &1, &7).unwrap().is_none());
        let path = depth_first_search(&provider, &1, &3).unwrap().unwrap();
        assert_eq!(path.vertices(), &[1, 2, 3]);
    }

    #[test]
    fn test_dfs_none_iff_unreachable() {
        let provider = from_fn(sample);
        let reachable = get_all_vertices(&provider, &2).unwrap();
        for target in 0..8 {
            let found = depth_first_search(&provider, &2, &target).unwrap().is_some();
            assert_eq!(found, reachable.contains(&target), "target {}", target);
        }
    }

    #[test]
    fn test_dfs_deep_chain_does_not_overflow() {
        let provider = from_fn(|v: &u32| if *v < 100_000 { vec![*v + 1] } else { vec![] });
        let path = depth_first_search(&provider, &0, &100_000).unwrap().unwrap();
        assert_eq!(path.len(), 100_001);
    }

    #[test]
    fn test_dfs_provider_error_propagates() {
        let provider = try_from_fn(|v: &u32| {
            if *v == 2 {
                Err(format!("cannot expand {}", v))
            } else {
                Ok(sample(v))
            }
        });
        let result = depth_first_search(&provider, &1, &4);
        assert_eq!(result.unwrap_err(), "cannot expand 2");
    }
}
