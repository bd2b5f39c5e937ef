//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `reachability`: transitive closure and adjacency listing
//! - `dfs`: depth-first path search with backtracking
//! - `dijkstra`: weighted shortest path over a growing spanning tree
//! - `shared`: pre-order walk used by reachability and adjacency

pub mod dfs;
pub mod dijkstra;
pub mod reachability;
pub mod shared;

pub use dfs::depth_first_search;
pub use dijkstra::{dijkstra_shortest_path, dijkstra_shortest_path_with};
pub use reachability::{format_adjacency_list, get_all_vertices};
pub use shared::preorder_walk;
