//! Wayfind
//!
//! Generic graph traversal over an abstract vertex type. The graph itself is
//! never materialized: callers supply a [`NeighborProvider`] and the engines
//! compute reachability, adjacency listings, and paths found by depth-first,
//! breadth-first, and weighted (Dijkstra-style) search.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::WayfindConfig;
pub use error::{Result, WayfindError};
pub use graph::{
    from_fn, try_from_fn, FrontierSelection, GraphSearch, NeighborProvider, Path,
    RelaxationMode, Vertex, WeightedOptions,
};
