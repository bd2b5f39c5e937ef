use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::graph::types::{Path, WeightedOptions};
use crate::graph::{algos, bfs};

/// Contract every vertex type must satisfy: stable equality and hashing so it
/// can key visited sets and predecessor maps, cheap cloning into those maps,
/// and `Debug` for span fields.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// Trait for providing graph adjacency.
///
/// `neighbors` returns the vertices reachable over one outgoing edge, as a set:
/// no vertex appears twice. The order of the returned vertices is the order in
/// which the engines try them. Engines may ask for the same vertex more than
/// once, so the answer must not depend on earlier calls.
pub trait NeighborProvider<V> {
    type Error;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error>;
}

impl<V, P: NeighborProvider<V> + ?Sized> NeighborProvider<V> for &P {
    type Error = P::Error;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error> {
        (**self).neighbors(vertex)
    }
}

impl<V, S> NeighborProvider<V> for HashMap<V, HashSet<V, S>, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Error = Infallible;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error> {
        Ok(self
            .get(vertex)
            .map(|out| out.iter().cloned().collect())
            .unwrap_or_default())
    }
}

impl<V, S> NeighborProvider<V> for HashMap<V, Vec<V>, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Error = Infallible;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error> {
        Ok(self.get(vertex).cloned().unwrap_or_default())
    }
}

/// Provider backed by an infallible closure, see [`from_fn`]
pub struct FnProvider<F, I> {
    f: F,
    _neighbors: PhantomData<fn() -> I>,
}

/// Provider backed by a fallible closure, see [`try_from_fn`]
pub struct TryFnProvider<F, I, E> {
    f: F,
    _neighbors: PhantomData<fn() -> Result<I, E>>,
}

/// Wrap a closure returning any collection of neighbors
pub fn from_fn<V, F, I>(f: F) -> FnProvider<F, I>
where
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    FnProvider {
        f,
        _neighbors: PhantomData,
    }
}

/// Wrap a closure whose errors should reach the caller of a search unchanged
pub fn try_from_fn<V, F, I, E>(f: F) -> TryFnProvider<F, I, E>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator<Item = V>,
{
    TryFnProvider {
        f,
        _neighbors: PhantomData,
    }
}

impl<V, F, I> NeighborProvider<V> for FnProvider<F, I>
where
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    type Error = Infallible;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error> {
        Ok((self.f)(vertex).into_iter().collect())
    }
}

impl<V, F, I, E> NeighborProvider<V> for TryFnProvider<F, I, E>
where
    F: Fn(&V) -> Result<I, E>,
    I: IntoIterator<Item = V>,
{
    type Error = E;

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, Self::Error> {
        (self.f)(vertex).map(|out| out.into_iter().collect())
    }
}

/// Search operations available on every [`NeighborProvider`]
pub trait GraphSearch<V: Vertex>: NeighborProvider<V> {
    /// All vertices reachable from `start`, including `start` itself
    fn get_all_vertices(&self, start: &V) -> Result<HashSet<V>, Self::Error> {
        algos::get_all_vertices(self, start)
    }

    /// Pre-order adjacency listing of the sub-graph reachable from `start`
    fn format_adjacency_list(&self, start: &V) -> Result<String, Self::Error>
    where
        V: Display,
    {
        algos::format_adjacency_list(self, start)
    }

    fn depth_first_search(&self, start: &V, target: &V) -> Result<Option<Path<V>>, Self::Error> {
        algos::depth_first_search(self, start, target)
    }

    fn breadth_first_search(
        &self,
        start: &V,
        target: &V,
    ) -> Result<Option<Path<V>>, Self::Error> {
        bfs::breadth_first_search(self, start, target)
    }

    fn dijkstra_shortest_path<W>(
        &self,
        start: &V,
        target: &V,
        weight: W,
    ) -> Result<Option<Path<V>>, Self::Error>
    where
        W: Fn(&V, &V) -> f64,
    {
        algos::dijkstra_shortest_path(self, start, target, weight)
    }

    fn dijkstra_shortest_path_with<W>(
        &self,
        start: &V,
        target: &V,
        weight: W,
        opts: &WeightedOptions,
    ) -> Result<Option<Path<V>>, Self::Error>
    where
        W: Fn(&V, &V) -> f64,
    {
        algos::dijkstra_shortest_path_with(self, start, target, weight, opts)
    }
}

impl<V: Vertex, P: NeighborProvider<V> + ?Sized> GraphSearch<V> for P {}
