//! Combined per-thinker metric report

use crate::betweenness::betweenness_centrality;
use crate::clustering::clustering_coefficient;
use crate::common::AdjacencyIndex;
use crate::degree::DegreeCounts;
use crate::model::{Connection, Thinker};
use crate::pagerank::{page_rank, PageRankConfig};
use serde::Serialize;
use tracing::debug;

/// Everything the detail panels show for one thinker
#[derive(Debug, Clone, Serialize)]
pub struct ThinkerMetrics {
    pub id: String,
    pub name: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub total_degree: usize,
    pub betweenness: f64,
    pub page_rank: f64,
    pub cluster_coefficient: f64,
}

/// Compute the full metric record for every thinker, in input order.
///
/// The adjacency index and degree counts are built once and shared across
/// the engines; the returned vector holds exactly one record per input
/// thinker.
pub fn calculate_all_metrics(
    thinkers: &[Thinker],
    connections: &[Connection],
) -> Vec<ThinkerMetrics> {
    debug!(
        "Computing metrics for {} thinkers and {} connections",
        thinkers.len(),
        connections.len()
    );

    let index = AdjacencyIndex::build(thinkers, connections);
    let degrees = DegreeCounts::from_connections(connections);
    let ranks = page_rank(thinkers, connections, &PageRankConfig::default());
    let betweenness = betweenness_centrality(thinkers, &index);

    thinkers
        .iter()
        .map(|thinker| {
            let id = thinker.id.as_str();
            ThinkerMetrics {
                id: thinker.id.clone(),
                name: thinker.name.clone(),
                in_degree: degrees.in_degree(id),
                out_degree: degrees.out_degree(id),
                total_degree: degrees.total_degree(id),
                betweenness: betweenness.get(id).copied().unwrap_or(0.0),
                page_rank: ranks.get(id).copied().unwrap_or(0.0),
                cluster_coefficient: clustering_coefficient(&index, id),
            }
        })
        .collect()
}
