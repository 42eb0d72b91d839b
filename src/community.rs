//! Community detection via label propagation

use crate::common::{AdjacencyIndex, DenseIndex};
use crate::model::Thinker;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Upper bound on propagation rounds; most graphs settle well before this
const MAX_ROUNDS: usize = 10;

/// Assign every thinker a community label by synchronous label propagation.
///
/// Labels start as each thinker's position in the input list. Every round
/// visits the nodes in a freshly shuffled order and moves each node with
/// neighbors to its most frequent neighbor label, reading only the previous
/// round's labels; the round's reassignments are swapped in together. The
/// loop stops after a change-free round or after ten rounds.
///
/// Ties between equally frequent labels go to whichever label the tally
/// happens to meet first, and the visit order is randomized, so exact label
/// values are not reproducible across runs on ambiguous graphs. Structure
/// is guaranteed: exactly one entry per thinker, and a thinker with no
/// neighbors keeps its initial unique label.
pub fn detect_communities(
    thinkers: &[Thinker],
    index: &AdjacencyIndex,
) -> FxHashMap<String, usize> {
    let dense = DenseIndex::new(thinkers);
    let n = dense.len();
    let adjacency = dense.dense_neighbors(index);

    let mut labels: Vec<usize> = (0..n).collect();
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = rand::thread_rng();

    for round in 0..MAX_ROUNDS {
        order.shuffle(&mut rng);

        let mut next_labels = labels.clone();
        let mut changed = false;

        for &node in &order {
            if adjacency[node].is_empty() {
                continue;
            }

            let mut tally: FxHashMap<usize, usize> = FxHashMap::default();
            for &neighbor in &adjacency[node] {
                *tally.entry(labels[neighbor]).or_insert(0) += 1;
            }

            // First label to reach the top count wins ties
            let mut best_label = labels[node];
            let mut best_count = 0usize;
            for (&label, &count) in &tally {
                if count > best_count {
                    best_label = label;
                    best_count = count;
                }
            }

            if best_label != labels[node] {
                next_labels[node] = best_label;
                changed = true;
            }
        }

        labels = next_labels;

        if !changed {
            debug!("Label propagation settled after {} rounds", round + 1);
            break;
        }
    }

    dense
        .ids
        .iter()
        .zip(labels)
        .map(|(&id, label)| (id.to_string(), label))
        .collect()
}
