//! Graph traversal and path-finding operations
//!
//! Provides graph algorithms over caller-supplied adjacency:
//! - Reachability and pre-order adjacency listings
//! - DFS and BFS path-finding
//! - Dijkstra-style weighted shortest paths
//! - Neighbor provider trait for pluggable data sources

pub mod algos;
pub mod bfs;
pub mod traversal;
pub mod types;

pub use algos::{
    depth_first_search, dijkstra_shortest_path, dijkstra_shortest_path_with,
    format_adjacency_list, get_all_vertices,
};
pub use bfs::breadth_first_search;
pub use traversal::{
    from_fn, try_from_fn, FnProvider, GraphSearch, NeighborProvider, TryFnProvider, Vertex,
};
pub use types::{FrontierSelection, Path, RelaxationMode, WeightedOptions, DEFAULT_DISPLAY_CUT};
