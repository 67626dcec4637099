use std::cmp::Reverse;
use std::collections::BinaryHeap;

use partite_core::{PartiteError, ProgressConfig, ProgressExt, Vertex};
use partite_graph::ImplicitHypergraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertices returned by [`select_by_degree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected vertices in ascending order.
    pub vertices: Vec<Vertex>,
    /// Sum of the selected vertices' degrees.
    pub degree_sum: u128,
    /// Number of vertices scanned before the threshold was met.
    pub scanned: u64,
}

/// Picks `pool_size` vertices whose degrees sum to at least `threshold`.
///
/// Vertices are scanned in index order while a min-heap keeps the
/// `pool_size` largest degrees seen so far. The scan stops as soon as the heap
/// is full and its sum reaches `threshold`, so the result is a qualifying set
/// and not necessarily the true top-`pool_size`. Exhausting the domain first
/// is a precondition failure: the hypergraph is not dense enough.
pub fn select_by_degree<G: ImplicitHypergraph + ?Sized>(
    graph: &G,
    pool_size: usize,
    threshold: f64,
    progress: ProgressConfig,
) -> Result<Selection, PartiteError> {
    let domain = graph.domain();
    if pool_size == 0 {
        return Ok(Selection {
            vertices: Vec::new(),
            degree_sum: 0,
            scanned: 0,
        });
    }
    if pool_size as u64 > domain {
        return Err(PartiteError::precondition(
            "pool-exceeds-domain",
            "candidate pool is larger than the vertex domain",
        )
        .with_context("pool_size", pool_size)
        .with_context("domain", domain));
    }

    let mut heap: BinaryHeap<Reverse<(u64, Vertex)>> = BinaryHeap::with_capacity(pool_size + 1);
    let mut degree_sum: u128 = 0;
    let mut scanned = 0u64;
    for node in (0..domain).progress("degree-threshold-scan", progress) {
        scanned += 1;
        let degree = graph.degree(node);
        if heap.len() < pool_size {
            heap.push(Reverse((degree, node)));
            degree_sum += u128::from(degree);
        } else if let Some(Reverse((smallest, _))) = heap.peek().copied() {
            if degree > smallest {
                heap.pop();
                heap.push(Reverse((degree, node)));
                degree_sum = degree_sum - u128::from(smallest) + u128::from(degree);
            }
        }
        if heap.len() == pool_size && degree_sum as f64 >= threshold {
            let mut vertices: Vec<Vertex> = heap.into_iter().map(|Reverse((_, v))| v).collect();
            vertices.sort_unstable();
            debug!(pool_size, scanned, %degree_sum, threshold, "degree threshold met");
            return Ok(Selection {
                vertices,
                degree_sum,
                scanned,
            });
        }
    }

    Err(PartiteError::precondition(
        "threshold-unreachable",
        "no vertex pool reaches the cumulative degree threshold",
    )
    .with_context("pool_size", pool_size)
    .with_context("threshold", threshold)
    .with_context("best_sum", degree_sum)
    .with_hint("the hypergraph is not dense enough for the requested pool"))
}

#[cfg(test)]
mod tests {
    use partite_graph::EdgeListHypergraph;

    use super::*;

    #[test]
    fn zero_pool_is_empty() {
        let graph = EdgeListHypergraph::new(3, 2, [[0u64, 1]]).unwrap();
        let selection = select_by_degree(&graph, 0, 10.0, ProgressConfig::silent()).unwrap();
        assert!(selection.vertices.is_empty());
        assert_eq!(selection.scanned, 0);
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let graph = EdgeListHypergraph::new(3, 2, [[0u64, 1]]).unwrap();
        let err = select_by_degree(&graph, 4, 0.0, ProgressConfig::silent()).unwrap_err();
        assert_eq!(err.code(), "pool-exceeds-domain");
    }

    #[test]
    fn replaces_smaller_degrees() {
        // degrees: 0 -> 1, 1 -> 1, 2 -> 3, 3 -> 3, 4 -> 2
        let graph = EdgeListHypergraph::new(
            5,
            2,
            [[0u64, 2], [1, 3], [2, 3], [2, 4], [3, 4]],
        )
        .unwrap();
        let selection = select_by_degree(&graph, 2, 6.0, ProgressConfig::silent()).unwrap();
        assert_eq!(selection.vertices, vec![2, 3]);
        assert_eq!(selection.degree_sum, 6);
        assert_eq!(selection.scanned, 4);
    }
}
