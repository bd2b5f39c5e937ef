use crate::graph::types::{FrontierSelection, Path, RelaxationMode, WeightedOptions};
use crate::graph::{NeighborProvider, Vertex};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Per-vertex record of the spanning tree built by weighted search
#[derive(Debug, Clone)]
struct SpanningNode<V> {
    vertex: V,
    /// Arena index of the predecessor on the best known path
    parent: Option<usize>,
    weight_sum_to: f64,
    finalized: bool,
}

/// Arena of spanning nodes keyed by vertex.
///
/// Arena indices double as discovery order, which breaks ties between nodes
/// of equal weight the same way for every selection strategy.
struct SpanningTree<V> {
    nodes: Vec<SpanningNode<V>>,
    index: HashMap<V, usize>,
}

impl<V: Vertex> SpanningTree<V> {
    fn seeded(start: V) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        tree.insert(start, None, 0.0);
        tree
    }

    fn insert(&mut self, vertex: V, parent: Option<usize>, weight_sum_to: f64) -> usize {
        let slot = self.nodes.len();
        self.index.insert(vertex.clone(), slot);
        self.nodes.push(SpanningNode {
            vertex,
            parent,
            weight_sum_to,
            finalized: false,
        });
        slot
    }

    /// Unfinalized node with the smallest weight, by linear scan
    fn nearest_unfinalized(&self) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.finalized)
            .min_by(|(a_slot, a), (b_slot, b)| {
                a.weight_sum_to
                    .total_cmp(&b.weight_sum_to)
                    .then_with(|| a_slot.cmp(b_slot))
            })
            .map(|(slot, _)| slot)
    }

    /// Vertices from the root down to `slot`
    fn path_to(&self, slot: usize) -> Vec<V> {
        let mut vertices = Vec::new();
        let mut current = Some(slot);
        while let Some(at) = current {
            let node = &self.nodes[at];
            vertices.push(node.vertex.clone());
            current = node.parent;
        }
        vertices.reverse();
        vertices
    }
}

/// Min-heap entry ordered by accumulated weight, then discovery order
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) slot: usize,
    pub(crate) weight_sum_to: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight_sum_to
            .total_cmp(&other.weight_sum_to)
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

/// Source of the next node to finalize
enum Frontier {
    Scan,
    Heap(BinaryHeap<Reverse<HeapEntry>>),
}

impl Frontier {
    fn new(selection: FrontierSelection) -> Self {
        match selection {
            FrontierSelection::Scan => Frontier::Scan,
            FrontierSelection::Heap => Frontier::Heap(BinaryHeap::new()),
        }
    }

    fn offer(&mut self, slot: usize, weight_sum_to: f64) {
        if let Frontier::Heap(heap) = self {
            heap.push(Reverse(HeapEntry {
                slot,
                weight_sum_to,
            }));
        }
    }

    fn next<V: Vertex>(&mut self, tree: &SpanningTree<V>) -> Option<usize> {
        match self {
            Frontier::Scan => tree.nearest_unfinalized(),
            Frontier::Heap(heap) => {
                // entries superseded by a relaxation point at finalized nodes
                while let Some(Reverse(entry)) = heap.pop() {
                    if !tree.nodes[entry.slot].finalized {
                        return Some(entry.slot);
                    }
                }
                None
            }
        }
    }
}

/// Weighted shortest path with the default [`WeightedOptions`]
pub fn dijkstra_shortest_path<V, P, W>(
    provider: &P,
    start: &V,
    target: &V,
    weight: W,
) -> Result<Option<Path<V>>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
    W: Fn(&V, &V) -> f64,
{
    dijkstra_shortest_path_with(provider, start, target, weight, &WeightedOptions::default())
}

/// Calculate the edge-weighted shortest path from `start` to `target` by
/// growing a spanning tree in Dijkstra's manner.
///
/// `weight(from, to)` must be non-negative; this is not checked. It is called
/// once for every outgoing edge of each finalized vertex. Every neighbour seen
/// is recorded in `visited`.
///
/// With [`RelaxationMode::Reference`] a vertex keeps the weight it was first
/// discovered with, so the result may be heavier than the true shortest path.
/// [`RelaxationMode::Relaxing`] gives textbook Dijkstra.
///
/// Returns `Ok(None)` when `target` is not reachable from `start`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(start = ?start, target = ?target, relaxation = ?opts.relaxation, selection = ?opts.selection)
)]
pub fn dijkstra_shortest_path_with<V, P, W>(
    provider: &P,
    start: &V,
    target: &V,
    weight: W,
    opts: &WeightedOptions,
) -> Result<Option<Path<V>>, P::Error>
where
    V: Vertex,
    P: NeighborProvider<V> + ?Sized,
    W: Fn(&V, &V) -> f64,
{
    let started = Instant::now();
    let mut path = Path::new();
    path.visited.insert(start.clone());

    let mut tree = SpanningTree::seeded(start.clone());
    let mut frontier = Frontier::new(opts.selection);
    frontier.offer(0, 0.0);

    while let Some(nearest) = frontier.next(&tree) {
        let node = &tree.nodes[nearest];
        if node.vertex == *target {
            path.total_weight = node.weight_sum_to;
            path.vertices = tree.path_to(nearest);
            crate::trace_time!(started, "dijkstra_shortest_path", visited = path.visited.len());
            tracing::debug!(
                found = true,
                path_len = path.len(),
                visited = path.visited.len(),
                total_weight = path.total_weight,
                "weighted search finished"
            );
            return Ok(Some(path));
        }

        let current = node.vertex.clone();
        let base = node.weight_sum_to;
        tracing::trace!(vertex = ?current, weight_sum_to = base, "finalizing");

        for neighbor in provider.neighbors(&current)? {
            path.visited.insert(neighbor.clone());
            let candidate = base + weight(&current, &neighbor);

            match tree.index.get(&neighbor).copied() {
                None => {
                    let slot = tree.insert(neighbor, Some(nearest), candidate);
                    frontier.offer(slot, candidate);
                }
                Some(slot) if opts.relaxation == RelaxationMode::Relaxing => {
                    let known = &mut tree.nodes[slot];
                    if !known.finalized && candidate < known.weight_sum_to {
                        known.weight_sum_to = candidate;
                        known.parent = Some(nearest);
                        frontier.offer(slot, candidate);
                    }
                }
                Some(_) => {}
            }
        }

        tree.nodes[nearest].finalized = true;
    }

    crate::trace_time!(started, "dijkstra_shortest_path", visited = path.visited.len());
    tracing::debug!(found = false, visited = path.visited.len(), "weighted search finished");
    Ok(None)
}
