use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Number of leading and trailing vertices shown when a path is rendered
pub const DEFAULT_DISPLAY_CUT: usize = 10;

/// Whether weighted search updates vertices it has already discovered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelaxationMode {
    /// A vertex keeps the weight it was first discovered with. Cheaper routes
    /// found later through other vertices are ignored, so the reported weight
    /// can exceed the true minimum.
    #[default]
    Reference,
    /// Textbook Dijkstra: an unfinalized vertex is updated whenever a strictly
    /// cheaper route to it is found.
    Relaxing,
}

/// How weighted search picks the next vertex to finalize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierSelection {
    /// Linear scan over the spanning tree, O(V) per step
    #[default]
    Scan,
    /// Binary min-heap with lazy deletion of stale entries
    Heap,
}

/// Options for weighted shortest-path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedOptions {
    #[serde(default)]
    pub relaxation: RelaxationMode,
    #[serde(default)]
    pub selection: FrontierSelection,
}

/// A directed path found by one of the search engines.
///
/// Representation invariants:
/// 1. consecutive vertices are neighbours, i.e. `vertices[i]` is contained in
///    `neighbors(vertices[i - 1])`
/// 2. a one-vertex path has the same start and target
/// 3. a path without vertices has neither start nor target
///
/// `visited` records every vertex the search touched and is always a superset
/// of `vertices`.
#[derive(Debug, Clone, Serialize)]
pub struct Path<V> {
    pub(crate) vertices: Vec<V>,
    pub(crate) total_weight: f64,
    pub(crate) visited: HashSet<V>,
}

impl<V> Default for Path<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            total_weight: 0.0,
            visited: HashSet::new(),
        }
    }
}

impl<V: Eq + Hash> Path<V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Vertices from start to target, both inclusive
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Every vertex touched by the search that produced this path
    pub fn visited(&self) -> &HashSet<V> {
        &self.visited
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges along the path
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Sum `weight(from, to)` over every consecutive pair, without storing it
    pub fn weight_along<W>(&self, weight: W) -> f64
    where
        W: Fn(&V, &V) -> f64,
    {
        self.vertices
            .windows(2)
            .fold(0.0, |total, pair| total + weight(&pair[0], &pair[1]))
    }

    /// Replace the total weight with the sum of `weight` over consecutive
    /// vertex pairs and return it. The first vertex contributes nothing.
    pub fn recalculate_total_weight<W>(&mut self, weight: W) -> f64
    where
        W: Fn(&V, &V) -> f64,
    {
        self.total_weight = self.weight_along(weight);
        self.total_weight
    }
}

impl<V: fmt::Display> Path<V> {
    /// Render the path, eliding the middle once it exceeds `cut` vertices at
    /// either end.
    pub fn display_with_cut(&self, cut: usize) -> String {
        let mut out = format!(
            "Weight={:.2} Length={} visited={} (",
            self.total_weight,
            self.vertices.len(),
            self.visited.len()
        );
        let tail_cut = self.vertices.len().saturating_sub(1 + cut);
        let mut separator = "";
        for (count, vertex) in self.vertices.iter().enumerate() {
            if count < cut || count > tail_cut {
                out.push_str(separator);
                out.push_str(&vertex.to_string());
                separator = ", ";
            } else if count == cut {
                out.push_str(separator);
                out.push_str("...");
            }
        }
        out.push(')');
        out
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with_cut(DEFAULT_DISPLAY_CUT))
    }
}
