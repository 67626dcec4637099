use std::sync::OnceLock;

use num_bigint::BigUint;
use partite_core::{Edge, PartiteError, ProgressConfig, Vertex};

use crate::implicit::{count_edges_by_degree, DegreeCache, ImplicitHypergraph, Shape};

/// Common link of a pivot set `S` in a parent hypergraph.
///
/// A `(k-1)`-set `e` disjoint from `S` is an edge iff `e ∪ {v}` is an edge of
/// the parent for every single `v ∈ S`. This is the intersection of the
/// one-vertex links, so the arity drops by exactly one whatever `|S|` is.
/// Nothing is copied: every query goes to the parent.
#[derive(Debug)]
pub struct CommonLink<'a, G: ?Sized> {
    parent: &'a G,
    pivots: Vec<Vertex>,
    shape: Shape,
    degrees: DegreeCache,
    edges: OnceLock<BigUint>,
}

impl<'a, G: ImplicitHypergraph + ?Sized> CommonLink<'a, G> {
    /// Builds the common link of `pivots` in `parent`.
    pub fn new(parent: &'a G, pivots: &[Vertex]) -> Result<Self, PartiteError> {
        let parent_shape = parent.shape();
        if parent_shape.arity == 0 {
            return Err(PartiteError::arity(
                "zero-arity",
                "the link of an arity-0 hypergraph is undefined",
            ));
        }
        if pivots.is_empty() {
            return Err(PartiteError::precondition(
                "empty-pivots",
                "a common link needs at least one pivot vertex",
            ));
        }
        let mut pivots = pivots.to_vec();
        pivots.sort_unstable();
        pivots.dedup();
        if let Some(&last) = pivots.last() {
            if last >= parent_shape.domain {
                return Err(PartiteError::arity(
                    "vertex-out-of-range",
                    "pivot vertex outside the hypergraph domain",
                )
                .with_context("vertex", last)
                .with_context("domain", parent_shape.domain));
            }
        }
        let shape = Shape {
            universe: parent_shape.universe.saturating_sub(pivots.len() as u64),
            arity: parent_shape.arity - 1,
            domain: parent_shape.domain,
        };
        Ok(Self {
            parent,
            pivots,
            shape,
            degrees: DegreeCache::new(),
            edges: OnceLock::new(),
        })
    }

    /// Returns the pivot set `S` in ascending order.
    pub fn pivots(&self) -> &[Vertex] {
        &self.pivots
    }

    /// Returns the parent hypergraph.
    pub fn parent(&self) -> &'a G {
        self.parent
    }
}

impl<G: ImplicitHypergraph + ?Sized> ImplicitHypergraph for CommonLink<'_, G> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn is_edge(&self, edge: &[Vertex]) -> bool {
        let Some(edge) = Edge::try_canonical(edge, self.shape.arity, self.shape.domain) else {
            return false;
        };
        self.pivots.iter().all(|pivot| {
            edge.with_vertex(*pivot)
                .is_some_and(|extended| self.parent.is_edge(extended.vertices()))
        })
    }

    fn num_edges(&self) -> BigUint {
        self.edges
            .get_or_init(|| count_edges_by_degree(self))
            .clone()
    }

    fn degree_cache(&self) -> &DegreeCache {
        &self.degrees
    }

    fn progress(&self) -> ProgressConfig {
        self.parent.progress()
    }
}
