//! Structural properties checked over a family of generated digraphs

use std::collections::{HashMap, HashSet};

use wayfind::{FrontierSelection, GraphSearch, NeighborProvider, RelaxationMode, WeightedOptions};

/// Small deterministic digraph; `seed` varies density and shape
fn generated(seed: u64, size: u32) -> HashMap<u32, Vec<u32>> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as u32
    };

    let mut graph = HashMap::new();
    for v in 0..size {
        let mut out: Vec<u32> = (0..next() % 4).map(|_| next() % size).collect();
        out.sort_unstable();
        out.dedup();
        graph.insert(v, out);
    }
    graph
}

fn weight(from: &u32, to: &u32) -> f64 {
    ((from * 31 + to * 17) % 9) as f64
}

#[test]
fn test_reachability_is_closed_and_contains_start() {
    for seed in 0..20 {
        let graph = generated(seed, 12);
        for start in 0..12 {
            let reachable = graph.get_all_vertices(&start).unwrap();
            assert!(reachable.contains(&start));
            for v in &reachable {
                for n in graph.neighbors(v).unwrap() {
                    assert!(reachable.contains(&n), "seed {} start {}", seed, start);
                }
            }
        }
    }
}

#[test]
fn test_adjacency_lists_each_reachable_vertex_once() {
    for seed in 0..20 {
        let graph = generated(seed, 12);
        let listing = graph.format_adjacency_list(&0).unwrap();
        let reachable = graph.get_all_vertices(&0).unwrap();

        let listed: Vec<u32> = listing
            .lines()
            .skip(1)
            .map(|line| line.split_once(": ").unwrap().0.parse().unwrap())
            .collect();
        let unique: HashSet<u32> = listed.iter().copied().collect();

        assert_eq!(listed.len(), unique.len());
        assert_eq!(unique, reachable);
        assert_eq!(listed.first(), Some(&0));
    }
}

#[test]
fn test_searches_agree_on_reachability() {
    let opts = WeightedOptions {
        relaxation: RelaxationMode::Relaxing,
        selection: FrontierSelection::Heap,
    };
    for seed in 0..20 {
        let graph = generated(seed, 10);
        for start in 0..10 {
            let reachable = graph.get_all_vertices(&start).unwrap();
            for target in 0..10 {
                let expected = reachable.contains(&target);
                let dfs = graph.depth_first_search(&start, &target).unwrap();
                let bfs = graph.breadth_first_search(&start, &target).unwrap();
                let reference = graph.dijkstra_shortest_path(&start, &target, weight).unwrap();
                let relaxed = graph
                    .dijkstra_shortest_path_with(&start, &target, weight, &opts)
                    .unwrap();

                assert_eq!(dfs.is_some(), expected);
                assert_eq!(bfs.is_some(), expected);
                assert_eq!(reference.is_some(), expected);
                assert_eq!(relaxed.is_some(), expected);

                if let (Some(dfs), Some(bfs)) = (&dfs, &bfs) {
                    assert!(bfs.edge_count() <= dfs.edge_count());
                    assert!(dfs.visited().is_superset(&dfs.vertices().iter().copied().collect()));
                    assert!(bfs.visited().is_superset(&bfs.vertices().iter().copied().collect()));
                }
                if let (Some(reference), Some(relaxed)) = (reference, relaxed) {
                    assert!(relaxed.total_weight() <= reference.total_weight());
                    let mut replay = reference.clone();
                    assert_eq!(
                        replay.recalculate_total_weight(weight),
                        reference.total_weight()
                    );
                }
            }
        }
    }
}
