//! Betweenness centrality (Brandes accumulation, unweighted)

use crate::common::{AdjacencyIndex, DenseIndex};
use crate::model::Thinker;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::debug;

/// Shortest-path betweenness for every thinker.
///
/// Runs one unweighted BFS per source followed by the Brandes dependency
/// pass. Sources fan out across the rayon pool; each source fills a private
/// partial score vector and the partials are summed element-wise at the
/// end, so no mutable state is shared mid-computation. Totals are scaled by
/// `2 / ((N-1)(N-2))` when `N > 2` and left unnormalized otherwise.
pub fn betweenness_centrality(
    thinkers: &[Thinker],
    index: &AdjacencyIndex,
) -> FxHashMap<String, f64> {
    let dense = DenseIndex::new(thinkers);
    let n = dense.len();

    if n == 0 {
        return FxHashMap::default();
    }

    let adjacency = dense.dense_neighbors(index);
    let adjacency = &adjacency;

    let mut totals: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|source| source_dependencies(adjacency, source))
        .reduce(
            || vec![0.0; n],
            |mut acc, partial| {
                for (total, value) in acc.iter_mut().zip(partial) {
                    *total += value;
                }
                acc
            },
        );

    if n > 2 {
        let scale = 2.0 / ((n - 1) as f64 * (n - 2) as f64);
        for total in &mut totals {
            *total *= scale;
        }
    }

    debug!("Betweenness accumulated over {} sources", n);

    dense
        .ids
        .iter()
        .zip(totals)
        .map(|(&id, total)| (id.to_string(), total))
        .collect()
}

/// BFS from one source plus the backward dependency pass. Returns this
/// source's dependency contribution for every node.
fn source_dependencies(adjacency: &[Vec<usize>], source: usize) -> Vec<f64> {
    let n = adjacency.len();
    // Number of shortest paths from the source
    let mut sigma = vec![0.0_f64; n];
    // Distance from the source (-1 = unvisited)
    let mut dist = vec![-1_i64; n];
    // Predecessors on shortest paths
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    // Nodes in BFS finish order
    let mut order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);

        for &w in &adjacency[v] {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0_f64; n];
    let mut contributions = vec![0.0_f64; n];

    // Walk back from the BFS frontier, pushing dependency onto predecessors
    for &w in order.iter().rev() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            contributions[w] += delta[w];
        }
    }

    contributions
}
