//! Network-level summary statistics

use crate::degree::DegreeCounts;
use crate::model::{Connection, Thinker};
use crate::pagerank::{page_rank, PageRankConfig};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// How many thinkers the ranked summary lists carry
const TOP_N: usize = 5;

/// A top-list entry ranked by PageRank
#[derive(Debug, Clone, Serialize)]
pub struct RankedThinker {
    pub id: String,
    pub name: String,
    pub score: f64,
}

/// A top-list entry ranked by total degree
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedThinker {
    pub id: String,
    pub name: String,
    pub degree: usize,
}

/// Whole-network summary for the overview panel
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStats {
    pub total_thinkers: usize,

    /// Raw connection count, not adjacency-expanded
    pub total_connections: usize,

    /// Mean total degree; 0 for an empty network
    pub average_degree: f64,

    /// M / (N * (N - 1)), directed with no self-loops; 0 when N <= 1
    pub network_density: f64,

    /// Top thinkers by PageRank, descending
    pub most_influential: Vec<RankedThinker>,

    /// Top thinkers by total degree, descending
    pub most_connected: Vec<ConnectedThinker>,
}

/// Aggregate degree and PageRank outputs into the summary record. Ties in
/// the top lists keep input order (stable sort).
pub fn network_stats(thinkers: &[Thinker], connections: &[Connection]) -> NetworkStats {
    let n = thinkers.len();
    let m = connections.len();

    let degrees = DegreeCounts::from_connections(connections);
    let ranks = page_rank(thinkers, connections, &PageRankConfig::default());

    let average_degree = if n == 0 {
        0.0
    } else {
        let degree_sum: usize = thinkers
            .iter()
            .map(|thinker| degrees.total_degree(&thinker.id))
            .sum();
        degree_sum as f64 / n as f64
    };

    let network_density = if n <= 1 {
        0.0
    } else {
        m as f64 / (n as f64 * (n - 1) as f64)
    };

    let mut most_influential: Vec<RankedThinker> = thinkers
        .iter()
        .map(|thinker| RankedThinker {
            id: thinker.id.clone(),
            name: thinker.name.clone(),
            score: ranks.get(thinker.id.as_str()).copied().unwrap_or(0.0),
        })
        .collect();
    most_influential.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    most_influential.truncate(TOP_N);

    let mut most_connected: Vec<ConnectedThinker> = thinkers
        .iter()
        .map(|thinker| ConnectedThinker {
            id: thinker.id.clone(),
            name: thinker.name.clone(),
            degree: degrees.total_degree(&thinker.id),
        })
        .collect();
    most_connected.sort_by(|a, b| b.degree.cmp(&a.degree));
    most_connected.truncate(TOP_N);

    debug!(
        "Network stats: {} thinkers, {} connections, density {:.4}",
        n, m, network_density
    );

    NetworkStats {
        total_thinkers: n,
        total_connections: m,
        average_degree,
        network_density,
        most_influential,
        most_connected,
    }
}
