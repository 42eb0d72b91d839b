//! PageRank influence scoring

use crate::common::DenseIndex;
use crate::model::{Connection, Thinker};
use rustc_hash::FxHashMap;
use tracing::debug;

/// PageRank configuration
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations; a fixed budget, not a convergence target
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Power-iteration PageRank over the connection snapshot.
///
/// A mutual connection contributes an incoming edge and an outgoing count
/// in both directions. Every iteration reads only the previous iteration's
/// ranks; the new vector is swapped in after the full sweep. A thinker with
/// no outgoing connections hands its rank to nobody, so total mass is not
/// strictly conserved across iterations; that loss is accepted, not
/// corrected.
pub fn page_rank(
    thinkers: &[Thinker],
    connections: &[Connection],
    config: &PageRankConfig,
) -> FxHashMap<String, f64> {
    let dense = DenseIndex::new(thinkers);
    let n = dense.len();

    if n == 0 {
        return FxHashMap::default();
    }

    // Incoming sources and outgoing counts from the raw connection list.
    // An outgoing count rises even when the target is not a known thinker;
    // an unknown source has no rank to hand out and is skipped.
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_counts: Vec<usize> = vec![0; n];

    for conn in connections {
        let from = dense.position(&conn.from_id);
        let to = dense.position(&conn.to_id);

        if let Some(f) = from {
            out_counts[f] += 1;
        }
        if conn.bidirectional {
            if let Some(t) = to {
                out_counts[t] += 1;
            }
        }
        if let (Some(f), Some(t)) = (from, to) {
            incoming[t].push(f);
            if conn.bidirectional {
                incoming[f].push(t);
            }
        }
    }

    let d = config.damping_factor;
    let base_score = (1.0 - d) / n as f64;
    let mut scores = vec![1.0 / n as f64; n];
    let mut next_scores = vec![0.0; n];

    for _ in 0..config.iterations {
        for i in 0..n {
            let mut sum_incoming = 0.0;

            for &source in &incoming[i] {
                let out_degree = out_counts[source];
                if out_degree > 0 {
                    sum_incoming += scores[source] / out_degree as f64;
                }
            }

            next_scores[i] = base_score + d * sum_incoming;
        }

        // Swap buffers
        scores.copy_from_slice(&next_scores);
    }

    debug!(
        "PageRank ran {} iterations over {} thinkers",
        config.iterations, n
    );

    let mut result =
        FxHashMap::with_capacity_and_hasher(n, Default::default());
    for (idx, score) in scores.into_iter().enumerate() {
        result.insert(dense.ids[idx].to_string(), score);
    }
    result
}
