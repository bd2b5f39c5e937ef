use crate::graph::algos::shared::preorder_walk;
use crate::graph::{NeighborProvider, Vertex};
use std::collections::HashSet;
use std::fmt::Display;

/// Header line of every adjacency listing
pub const ADJACENCY_HEADER: &str = "Graph adjacency list:";

/// Retrieve all vertices reachable directly or indirectly from `start`.
///
/// Only outgoing edges are followed. `start` is always part of the result.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn get_all_vertices<V, P>(provider: &P, start: &V) -> Result<HashSet<V>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
{
    let reachable = preorder_walk(provider, start, |_, _| {})?;
    tracing::debug!(reachable = reachable.len(), "reachability computed");
    Ok(reachable)
}

/// Format the adjacency list of the sub-graph reachable from `start`:
///
/// ```text
/// Graph adjacency list:
/// vertex1: [neighbour11,neighbour12,...]
/// vertex2: [neighbour21,neighbour22,...]
/// ```
///
/// Vertices are listed in pre-order of a spanning tree rooted at `start`;
/// neighbours keep the provider's order. Whitespace inside the bracketed
/// neighbour list is dropped.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn format_adjacency_list<V, P>(provider: &P, start: &V) -> Result<String, P::Error>
where
    V: Vertex + Display,
    P: NeighborProvider<V> + ?Sized,
{
    let mut out = String::from(ADJACENCY_HEADER);
    out.push('\n');

    preorder_walk(provider, start, |vertex, neighbors| {
        let mut rendered = neighbors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        rendered.retain(|c| !c.is_whitespace());

        out.push_str(&format!("{}: [{}]\n", vertex, rendered));
    })?;

    Ok(out)
}
