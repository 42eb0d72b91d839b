//! Shared graph views for metric computation
//!
//! `AdjacencyIndex` is the neighbor-set view every traversal-based engine
//! works from. The dense index gives the iterative engines (PageRank,
//! betweenness, community detection) contiguous usize node positions so
//! their inner loops run on flat vectors instead of string-keyed maps.

use crate::model::{Connection, Thinker};
use rustc_hash::{FxHashMap, FxHashSet};

/// Neighbor-set index over a thinker/connection snapshot, built once per
/// computation call.
///
/// Every known thinker id is a key, isolated thinkers included. A mutual
/// connection is present in both directions; a one-way connection only as
/// `from -> to`. Connection endpoints missing from the thinker list are
/// never seeded as keys but are kept as targets inside known nodes'
/// neighbor sets; referential integrity is the caller's concern and is not
/// validated here.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: FxHashMap<String, FxHashSet<String>>,
}

impl AdjacencyIndex {
    /// Build the index from a snapshot
    pub fn build(thinkers: &[Thinker], connections: &[Connection]) -> Self {
        let mut neighbors: FxHashMap<String, FxHashSet<String>> =
            FxHashMap::with_capacity_and_hasher(thinkers.len(), Default::default());

        for thinker in thinkers {
            neighbors.entry(thinker.id.clone()).or_default();
        }

        for conn in connections {
            if let Some(set) = neighbors.get_mut(&conn.from_id) {
                set.insert(conn.to_id.clone());
            }
            if conn.bidirectional {
                if let Some(set) = neighbors.get_mut(&conn.to_id) {
                    set.insert(conn.from_id.clone());
                }
            }
        }

        AdjacencyIndex { neighbors }
    }

    /// Neighbors reachable from `id` in one hop, or `None` for unknown ids
    pub fn neighbors(&self, id: &str) -> Option<&FxHashSet<String>> {
        self.neighbors.get(id)
    }

    /// Number of one-hop neighbors; 0 for unknown ids
    pub fn neighbor_count(&self, id: &str) -> usize {
        self.neighbors.get(id).map_or(0, |set| set.len())
    }

    /// Order-insensitive adjacency test: true if either direction is present
    pub fn linked(&self, a: &str, b: &str) -> bool {
        self.has_arc(a, b) || self.has_arc(b, a)
    }

    fn has_arc(&self, from: &str, to: &str) -> bool {
        self.neighbors
            .get(from)
            .map_or(false, |set| set.contains(to))
    }

    /// Known node ids, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.neighbors.keys()
    }

    /// Number of known nodes
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// True when the index holds no nodes
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Dense usize positions over the thinker list. Position order is input
/// order, which also serves as the initial community label assignment.
pub(crate) struct DenseIndex<'a> {
    /// Position -> thinker id
    pub ids: Vec<&'a str>,
    /// Thinker id -> position
    positions: FxHashMap<&'a str, usize>,
}

impl<'a> DenseIndex<'a> {
    pub fn new(thinkers: &'a [Thinker]) -> Self {
        let mut ids = Vec::with_capacity(thinkers.len());
        let mut positions =
            FxHashMap::with_capacity_and_hasher(thinkers.len(), Default::default());

        for (idx, thinker) in thinkers.iter().enumerate() {
            ids.push(thinker.id.as_str());
            positions.insert(thinker.id.as_str(), idx);
        }

        DenseIndex { ids, positions }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Adjacency lists restricted to known thinkers, as dense position
    /// vectors. Targets outside the thinker list are dropped; they carry no
    /// score of their own.
    pub fn dense_neighbors(&self, index: &AdjacencyIndex) -> Vec<Vec<usize>> {
        let mut lists = vec![Vec::new(); self.ids.len()];
        for (idx, &id) in self.ids.iter().enumerate() {
            if let Some(set) = index.neighbors(id) {
                for neighbor in set {
                    if let Some(neighbor_idx) = self.position(neighbor) {
                        lists[idx].push(neighbor_idx);
                    }
                }
            }
        }
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thinkers(ids: &[&str]) -> Vec<Thinker> {
        ids.iter().map(|id| Thinker::new(*id, *id)).collect()
    }

    #[test]
    fn test_isolated_nodes_are_seeded() {
        let nodes = thinkers(&["a", "b"]);
        let index = AdjacencyIndex::build(&nodes, &[]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.neighbor_count("a"), 0);
        assert!(index.neighbors("b").unwrap().is_empty());
    }

    #[test]
    fn test_mutual_connection_expands_both_directions() {
        let nodes = thinkers(&["a", "b", "c"]);
        let connections = vec![
            Connection::new("a", "b", "influenced").mutual(),
            Connection::new("b", "c", "influenced"),
        ];
        let index = AdjacencyIndex::build(&nodes, &connections);

        assert!(index.neighbors("a").unwrap().contains("b"));
        assert!(index.neighbors("b").unwrap().contains("a"));
        assert!(index.neighbors("b").unwrap().contains("c"));
        assert!(!index.neighbors("c").unwrap().contains("b"));
    }

    #[test]
    fn test_unknown_endpoints_tolerated() {
        let nodes = thinkers(&["a"]);
        let connections = vec![
            Connection::new("a", "ghost", "influenced"),
            Connection::new("phantom", "a", "influenced"),
        ];
        let index = AdjacencyIndex::build(&nodes, &connections);

        // Unknown ids never become keys, but a known source keeps the
        // unknown target in its set
        assert_eq!(index.len(), 1);
        assert!(index.neighbors("ghost").is_none());
        assert!(index.neighbors("phantom").is_none());
        assert!(index.neighbors("a").unwrap().contains("ghost"));
    }

    #[test]
    fn test_linked_is_order_insensitive() {
        let nodes = thinkers(&["a", "b"]);
        let connections = vec![Connection::new("a", "b", "influenced")];
        let index = AdjacencyIndex::build(&nodes, &connections);

        assert!(index.linked("a", "b"));
        assert!(index.linked("b", "a"));
        assert!(!index.linked("a", "a"));
    }

    #[test]
    fn test_dense_neighbors_drop_unknown_targets() {
        let nodes = thinkers(&["a", "b"]);
        let connections = vec![
            Connection::new("a", "b", "influenced"),
            Connection::new("a", "ghost", "influenced"),
        ];
        let index = AdjacencyIndex::build(&nodes, &connections);
        let dense = DenseIndex::new(&nodes);
        let lists = dense.dense_neighbors(&index);

        assert_eq!(lists[0], vec![1]);
        assert!(lists[1].is_empty());
    }
}
