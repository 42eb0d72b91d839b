//! Network analytics for the Noema thinker graph
//!
//! Pure, synchronous structural metrics over a snapshot of thinkers and
//! their influence connections: PageRank, betweenness centrality, local
//! clustering, shortest and bounded-length paths, label-propagation
//! communities, and whole-network summary statistics. The surrounding
//! application owns the records and calls in with fresh slices on every
//! query; nothing is cached or persisted between calls, and no function
//! performs I/O.
//!
//! ## Example Usage
//!
//! ```rust
//! use noema_graph_metrics::{
//!     calculate_all_metrics, network_stats, shortest_path,
//!     AdjacencyIndex, Connection, Thinker,
//! };
//!
//! let thinkers = vec![
//!     Thinker::new("kant", "Immanuel Kant"),
//!     Thinker::new("hegel", "G.W.F. Hegel"),
//!     Thinker::new("marx", "Karl Marx"),
//! ];
//! let connections = vec![
//!     Connection::new("kant", "hegel", "influenced"),
//!     Connection::new("hegel", "marx", "influenced"),
//! ];
//!
//! let metrics = calculate_all_metrics(&thinkers, &connections);
//! assert_eq!(metrics.len(), 3);
//!
//! let stats = network_stats(&thinkers, &connections);
//! assert_eq!(stats.total_connections, 2);
//!
//! let index = AdjacencyIndex::build(&thinkers, &connections);
//! let path = shortest_path(&thinkers, &index, "kant", "marx").unwrap();
//! assert_eq!(path.length, 2);
//! ```

#![warn(clippy::all)]

pub mod betweenness;
pub mod clustering;
pub mod common;
pub mod community;
pub mod degree;
pub mod metrics;
pub mod model;
pub mod pagerank;
pub mod pathfinding;
pub mod stats;

// Re-export the public surface for convenience
pub use betweenness::betweenness_centrality;
pub use clustering::clustering_coefficient;
pub use common::AdjacencyIndex;
pub use community::detect_communities;
pub use degree::DegreeCounts;
pub use metrics::{calculate_all_metrics, ThinkerMetrics};
pub use model::{Connection, Thinker};
pub use pagerank::{page_rank, PageRankConfig};
pub use pathfinding::{all_paths, shortest_path, AllPathsConfig, PathResult};
pub use stats::{network_stats, ConnectedThinker, NetworkStats, RankedThinker};
