use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use itertools::{Combinations, Itertools};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use partite_core::{ProgressConfig, ProgressExt, Vertex};
use serde::{Deserialize, Serialize};

/// Size parameters of an implicit hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Size `n` of the universe used for combinadic ranking.
    pub universe: u64,
    /// Edge arity `k`.
    pub arity: usize,
    /// Size `N` of the vertex domain used for enumeration.
    pub domain: u64,
}

impl Shape {
    /// Shape of a base hypergraph, where the ranking universe equals the domain.
    pub const fn base(domain: u64, arity: usize) -> Self {
        Self {
            universe: domain,
            arity,
            domain,
        }
    }
}

/// Contract shared by every implicit hypergraph variant.
///
/// Edge membership is computed on demand; nothing beyond per-vertex degrees
/// and aggregate counts is ever stored.
pub trait ImplicitHypergraph: Send + Sync {
    /// Returns the `(n, k, N)` parameters of the hypergraph.
    fn shape(&self) -> Shape;

    /// Returns whether `edge` is an edge.
    ///
    /// Total: tuples of the wrong length, with repeated vertices or with
    /// vertices outside the domain are rejected with `false`.
    fn is_edge(&self, edge: &[Vertex]) -> bool;

    /// Returns the aggregate edge count. Exactness depends on the variant.
    fn num_edges(&self) -> BigUint;

    /// Returns the per-instance degree memo.
    fn degree_cache(&self) -> &DegreeCache;

    /// Returns the progress reporting used by long scans over this hypergraph.
    fn progress(&self) -> ProgressConfig {
        ProgressConfig::default()
    }

    /// Returns the edge arity `k`.
    fn arity(&self) -> usize {
        self.shape().arity
    }

    /// Returns the domain size `N`.
    fn domain(&self) -> u64 {
        self.shape().domain
    }

    /// Lazily yields the `(k-1)`-tuples completing `node` to an edge.
    ///
    /// Every call returns a fresh iterator; the enumeration tests each
    /// `(k-1)`-combination of the other `N - 1` vertices against
    /// [`ImplicitHypergraph::is_edge`].
    fn neighbours(&self, node: Vertex) -> Box<dyn Iterator<Item = Vec<Vertex>> + '_> {
        Box::new(Neighbours::new(self, node))
    }

    /// Returns the number of edges containing `node`, memoized per instance.
    fn degree(&self, node: Vertex) -> u64 {
        self.degree_cache()
            .get_or_compute(node, || self.neighbours(node).count() as u64)
    }
}

/// Write-once memo of vertex degrees owned by a single hypergraph instance.
#[derive(Debug, Default)]
pub struct DegreeCache {
    degrees: Mutex<HashMap<Vertex, u64>>,
}

impl DegreeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached degree of `node`, if computed.
    pub fn get(&self, node: Vertex) -> Option<u64> {
        self.lock().get(&node).copied()
    }

    /// Returns the cached degree of `node`, computing and storing it on first access.
    pub fn get_or_compute(&self, node: Vertex, compute: impl FnOnce() -> u64) -> u64 {
        if let Some(degree) = self.get(node) {
            return degree;
        }
        // computed outside the lock: link degrees query their parent
        let degree = compute();
        *self.lock().entry(node).or_insert(degree)
    }

    /// Returns the number of vertices whose degree is cached.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether no degree has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Vertex, u64>> {
        self.degrees.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Vertices of `[0, end)` except `skip`, in ascending order.
#[derive(Debug, Clone)]
struct CoVertices {
    next: Vertex,
    end: Vertex,
    skip: Vertex,
}

impl Iterator for CoVertices {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        while self.next < self.end {
            let vertex = self.next;
            self.next += 1;
            if vertex != self.skip {
                return Some(vertex);
            }
        }
        None
    }
}

/// Iterator returned by [`ImplicitHypergraph::neighbours`].
pub struct Neighbours<'a, G: ?Sized> {
    graph: &'a G,
    node: Vertex,
    candidates: Option<Combinations<CoVertices>>,
}

impl<'a, G: ImplicitHypergraph + ?Sized> Neighbours<'a, G> {
    /// Starts a fresh enumeration of the co-edges of `node`.
    pub fn new(graph: &'a G, node: Vertex) -> Self {
        let shape = graph.shape();
        let candidates = if shape.arity == 0 || node >= shape.domain {
            None
        } else {
            let others = CoVertices {
                next: 0,
                end: shape.domain,
                skip: node,
            };
            Some(others.combinations(shape.arity - 1))
        };
        Self {
            graph,
            node,
            candidates,
        }
    }
}

impl<G: ImplicitHypergraph + ?Sized> Iterator for Neighbours<'_, G> {
    type Item = Vec<Vertex>;

    fn next(&mut self) -> Option<Vec<Vertex>> {
        let candidates = self.candidates.as_mut()?;
        for others in candidates.by_ref() {
            let slot = others.partition_point(|vertex| *vertex < self.node);
            let mut edge = Vec::with_capacity(others.len() + 1);
            edge.extend_from_slice(&others[..slot]);
            edge.push(self.node);
            edge.extend_from_slice(&others[slot..]);
            if self.graph.is_edge(&edge) {
                return Some(others);
            }
        }
        None
    }
}

/// Counts edges as `Σ degree / k` over the whole domain.
///
/// This is the empirical count used by variants without a closed form. For
/// arity zero the only candidate edge is the empty tuple.
pub fn count_edges_by_degree<G: ImplicitHypergraph + ?Sized>(graph: &G) -> BigUint {
    let shape = graph.shape();
    if shape.arity == 0 {
        return if graph.is_edge(&[]) {
            BigUint::one()
        } else {
            BigUint::zero()
        };
    }
    let total = (0..shape.domain)
        .progress("degree-sum", graph.progress())
        .fold(BigUint::zero(), |acc, node| acc + graph.degree(node));
    total / shape.arity
}
