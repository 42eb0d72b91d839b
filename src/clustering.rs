//! Local clustering coefficient

use crate::common::AdjacencyIndex;

/// Triangle density of `id`'s neighborhood.
///
/// With k neighbors there are k(k-1)/2 unordered pairs; the coefficient is
/// the share of those pairs that are themselves adjacent, in either
/// direction. Nodes with fewer than two neighbors score 0.
pub fn clustering_coefficient(index: &AdjacencyIndex, id: &str) -> f64 {
    let neighbors: Vec<&str> = match index.neighbors(id) {
        Some(set) if set.len() >= 2 => set.iter().map(String::as_str).collect(),
        _ => return 0.0,
    };

    let k = neighbors.len();
    let mut triangles = 0usize;

    for i in 0..k {
        for j in (i + 1)..k {
            if index.linked(neighbors[i], neighbors[j]) {
                triangles += 1;
            }
        }
    }

    triangles as f64 / (k * (k - 1) / 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Thinker};

    fn thinkers(ids: &[&str]) -> Vec<Thinker> {
        ids.iter().map(|id| Thinker::new(*id, *id)).collect()
    }

    #[test]
    fn test_sparse_neighborhoods_score_zero() {
        let nodes = thinkers(&["a", "b", "c"]);
        let connections = vec![Connection::new("a", "b", "influenced")];
        let index = AdjacencyIndex::build(&nodes, &connections);

        // c has no neighbors, a has one
        assert_eq!(clustering_coefficient(&index, "c"), 0.0);
        assert_eq!(clustering_coefficient(&index, "a"), 0.0);
        assert_eq!(clustering_coefficient(&index, "missing"), 0.0);
    }

    #[test]
    fn test_fully_linked_neighborhood_scores_one() {
        // hub sees b, c, d; all three pairwise connected
        let nodes = thinkers(&["hub", "b", "c", "d"]);
        let connections = vec![
            Connection::new("hub", "b", "influenced"),
            Connection::new("hub", "c", "influenced"),
            Connection::new("hub", "d", "influenced"),
            Connection::new("b", "c", "influenced"),
            Connection::new("c", "d", "influenced"),
            Connection::new("d", "b", "influenced"),
        ];
        let index = AdjacencyIndex::build(&nodes, &connections);

        assert_eq!(clustering_coefficient(&index, "hub"), 1.0);
    }

    #[test]
    fn test_partial_neighborhood() {
        // hub sees b, c, d; only b-c are linked: 1 of 3 pairs
        let nodes = thinkers(&["hub", "b", "c", "d"]);
        let connections = vec![
            Connection::new("hub", "b", "influenced"),
            Connection::new("hub", "c", "influenced"),
            Connection::new("hub", "d", "influenced"),
            Connection::new("c", "b", "influenced"),
        ];
        let index = AdjacencyIndex::build(&nodes, &connections);

        let coefficient = clustering_coefficient(&index, "hub");
        assert!((coefficient - 1.0 / 3.0).abs() < 1e-9);
    }
}
