//! Directional degree counts
//!
//! Degrees reflect the literal stored connection list: a mutual connection
//! still counts once for its `from` side and once for its `to` side, even
//! though traversal treats it as two-way. Reports show how many connections
//! a thinker actually holds, not the expanded traversal graph.

use crate::model::Connection;
use rustc_hash::FxHashMap;

/// In/out edge counts per thinker id. Unknown ids read as 0.
#[derive(Debug, Clone, Default)]
pub struct DegreeCounts {
    incoming: FxHashMap<String, usize>,
    outgoing: FxHashMap<String, usize>,
}

impl DegreeCounts {
    /// Tally the raw connection list
    pub fn from_connections(connections: &[Connection]) -> Self {
        let mut incoming: FxHashMap<String, usize> = FxHashMap::default();
        let mut outgoing: FxHashMap<String, usize> = FxHashMap::default();

        for conn in connections {
            *outgoing.entry(conn.from_id.clone()).or_insert(0) += 1;
            *incoming.entry(conn.to_id.clone()).or_insert(0) += 1;
        }

        DegreeCounts { incoming, outgoing }
    }

    /// Count of connections pointing at `id`
    pub fn in_degree(&self, id: &str) -> usize {
        self.incoming.get(id).copied().unwrap_or(0)
    }

    /// Count of connections originating at `id`
    pub fn out_degree(&self, id: &str) -> usize {
        self.outgoing.get(id).copied().unwrap_or(0)
    }

    /// In-degree plus out-degree
    pub fn total_degree(&self, id: &str) -> usize {
        self.in_degree(id) + self.out_degree(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_counts() {
        let connections = vec![
            Connection::new("a", "b", "influenced"),
            Connection::new("a", "c", "influenced"),
            Connection::new("c", "a", "critiqued"),
        ];
        let degrees = DegreeCounts::from_connections(&connections);

        assert_eq!(degrees.out_degree("a"), 2);
        assert_eq!(degrees.in_degree("a"), 1);
        assert_eq!(degrees.total_degree("a"), 3);
        assert_eq!(degrees.in_degree("b"), 1);
        assert_eq!(degrees.out_degree("b"), 0);
    }

    #[test]
    fn test_bidirectional_does_not_add_reverse_counts() {
        let connections = vec![Connection::new("a", "b", "corresponded").mutual()];
        let degrees = DegreeCounts::from_connections(&connections);

        assert_eq!(degrees.out_degree("a"), 1);
        assert_eq!(degrees.in_degree("a"), 0);
        assert_eq!(degrees.in_degree("b"), 1);
        assert_eq!(degrees.out_degree("b"), 0);
    }

    #[test]
    fn test_unknown_id_reads_zero() {
        let degrees = DegreeCounts::from_connections(&[]);
        assert_eq!(degrees.total_degree("nobody"), 0);
    }
}
