//! Path queries over the adjacency index

use crate::common::AdjacencyIndex;
use crate::model::Thinker;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::VecDeque;

/// An ordered walk through the network. `length` counts edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Node ids from start to destination
    pub path: Vec<String>,
    /// Display names aligned with `path`
    pub path_names: Vec<String>,
    /// Edge count
    pub length: usize,
}

/// Bounds for exhaustive path enumeration.
///
/// `max_length` caps the edge count per path. `max_results` is an optional
/// budget on how many paths are collected before enumeration stops early;
/// the default `None` enumerates everything, so callers on dense graphs
/// should set a cap or keep `max_length` small.
#[derive(Debug, Clone)]
pub struct AllPathsConfig {
    pub max_length: usize,
    pub max_results: Option<usize>,
}

impl Default for AllPathsConfig {
    fn default() -> Self {
        Self {
            max_length: 4,
            max_results: None,
        }
    }
}

/// Single shortest path from `from` to `to` by BFS, or `None` when `to` is
/// unreachable. The first-discovered parent recorded for each node is kept,
/// which is what makes the reconstructed chain a shortest path. `from ==
/// to` is answered with the zero-length trivial path without consulting any
/// edges.
pub fn shortest_path<'a>(
    thinkers: &[Thinker],
    index: &'a AdjacencyIndex,
    from: &'a str,
    to: &str,
) -> Option<PathResult> {
    let names = display_names(thinkers);

    if from == to {
        return Some(to_result(vec![from.to_string()], &names));
    }

    let mut parents: FxHashMap<&'a str, &'a str> = FxHashMap::default();
    let mut visited: FxHashSet<&'a str> = FxHashSet::default();
    let mut queue: VecDeque<&'a str> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            // Walk the parent chain back to the start
            let mut ids = vec![current.to_string()];
            let mut cursor = current;
            while let Some(&parent) = parents.get(cursor) {
                ids.push(parent.to_string());
                cursor = parent;
            }
            ids.reverse();
            return Some(to_result(ids, &names));
        }

        if let Some(neighbors) = index.neighbors(current) {
            for next in neighbors {
                if !visited.contains(next.as_str()) {
                    visited.insert(next.as_str());
                    parents.insert(next.as_str(), current);
                    queue.push_back(next.as_str());
                }
            }
        }
    }

    None
}

/// Every simple path (no repeated node) from `from` to `to` with at least
/// one edge and at most `config.max_length` edges, sorted ascending by
/// length.
///
/// Exhaustive DFS: cost grows exponentially with branching factor, so this
/// is meant for small neighborhoods and bounded depth.
pub fn all_paths(
    thinkers: &[Thinker],
    index: &AdjacencyIndex,
    from: &str,
    to: &str,
    config: &AllPathsConfig,
) -> Vec<PathResult> {
    let names = display_names(thinkers);
    let mut results = Vec::new();

    if config.max_length == 0 || config.max_results == Some(0) {
        return results;
    }

    let mut walker = Walker {
        to,
        max_length: config.max_length,
        max_results: config.max_results,
        trail: vec![from.to_string()],
        visited: FxHashSet::default(),
        found: &mut results,
    };
    walker.visited.insert(from.to_string());
    walker.walk(index, from, &names);

    results.sort_by_key(|result| result.length);
    results
}

struct Walker<'a> {
    to: &'a str,
    max_length: usize,
    max_results: Option<usize>,
    trail: Vec<String>,
    visited: FxHashSet<String>,
    found: &'a mut Vec<PathResult>,
}

impl Walker<'_> {
    /// Depth-first extension of the current trail. Returns false once the
    /// result budget is spent, unwinding the whole search.
    fn walk(
        &mut self,
        index: &AdjacencyIndex,
        current: &str,
        names: &FxHashMap<&str, &str>,
    ) -> bool {
        let neighbors = match index.neighbors(current) {
            Some(set) => set,
            None => return true,
        };

        for next in neighbors {
            if self.visited.contains(next.as_str()) {
                continue;
            }
            // Edge count with `next` appended equals the current node count
            if self.trail.len() > self.max_length {
                continue;
            }

            if next == self.to {
                self.trail.push(next.clone());
                self.found.push(to_result(self.trail.clone(), names));
                self.trail.pop();
                if self
                    .max_results
                    .map_or(false, |cap| self.found.len() >= cap)
                {
                    return false;
                }
                continue;
            }

            self.visited.insert(next.clone());
            self.trail.push(next.clone());
            let keep_going = self.walk(index, next, names);
            self.trail.pop();
            self.visited.remove(next.as_str());

            if !keep_going {
                return false;
            }
        }

        true
    }
}

fn display_names(thinkers: &[Thinker]) -> FxHashMap<&str, &str> {
    thinkers
        .iter()
        .map(|thinker| (thinker.id.as_str(), thinker.name.as_str()))
        .collect()
}

fn to_result(ids: Vec<String>, names: &FxHashMap<&str, &str>) -> PathResult {
    let path_names = ids
        .iter()
        .map(|id| {
            names
                .get(id.as_str())
                .map_or_else(|| id.clone(), |name| (*name).to_string())
        })
        .collect();
    let length = ids.len() - 1;

    PathResult {
        path: ids,
        path_names,
        length,
    }
}
