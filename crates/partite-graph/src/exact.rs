use num_bigint::BigUint;
use partite_core::{binomial, Edge, PartiteError, Vertex};
use tracing::debug;

use crate::implicit::{DegreeCache, ImplicitHypergraph, Shape};
use crate::permutation::{AffinePermutation, Permutation};

/// Hypergraph with exactly `m` edges: the k-sets whose permuted rank is below `m`.
///
/// Ranks are combinadic ranks over `[0, n)`; since the permutation is a
/// bijection of `[0, C(n, k))`, exactly `m` ranks map below `m`.
#[derive(Debug)]
pub struct PermutationHypergraph<P = AffinePermutation> {
    shape: Shape,
    target: BigUint,
    permutation: P,
    degrees: DegreeCache,
}

impl PermutationHypergraph<AffinePermutation> {
    /// Builds the hypergraph with an [`AffinePermutation`] drawn from `seed`.
    pub fn with_seed(
        domain: u64,
        arity: usize,
        target: impl Into<BigUint>,
        seed: u64,
    ) -> Result<Self, PartiteError> {
        let permutation = AffinePermutation::from_seed(binomial(domain, arity as u64), seed);
        Self::new(domain, arity, target, permutation)
    }
}

impl<P: Permutation> PermutationHypergraph<P> {
    /// Builds a hypergraph over `[0, domain)` with exactly `target` edges.
    ///
    /// Fails when `target > C(domain, arity)` or when the permutation does not
    /// range over exactly `C(domain, arity)` indices.
    pub fn new(
        domain: u64,
        arity: usize,
        target: impl Into<BigUint>,
        permutation: P,
    ) -> Result<Self, PartiteError> {
        let target = target.into();
        if arity == 0 {
            return Err(PartiteError::arity(
                "zero-arity",
                "permutation hypergraphs need at least one vertex per edge",
            ));
        }
        let capacity = binomial(domain, arity as u64);
        if target > capacity {
            return Err(PartiteError::precondition(
                "target-exceeds-capacity",
                "requested edge count exceeds the number of k-subsets",
            )
            .with_context("target", &target)
            .with_context("capacity", &capacity));
        }
        if *permutation.range_size() != capacity {
            return Err(PartiteError::precondition(
                "permutation-size-mismatch",
                "permutation must range over every k-subset rank",
            )
            .with_context("permutation", permutation.range_size())
            .with_context("capacity", &capacity));
        }
        debug!(domain, arity, %target, "built permutation hypergraph");
        Ok(Self {
            shape: Shape::base(domain, arity),
            target,
            permutation,
            degrees: DegreeCache::new(),
        })
    }

    /// Returns the permutation deciding membership.
    pub fn permutation(&self) -> &P {
        &self.permutation
    }

    /// Returns the combinadic rank of a canonical edge, or `None` if `edge` is invalid.
    pub fn edge_index(&self, edge: &[Vertex]) -> Option<BigUint> {
        let edge = Edge::try_canonical(edge, self.shape.arity, self.shape.domain)?;
        Some(edge.rank(self.shape.universe))
    }
}

impl<P: Permutation> ImplicitHypergraph for PermutationHypergraph<P> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn is_edge(&self, edge: &[Vertex]) -> bool {
        match self.edge_index(edge) {
            Some(index) => self.permutation.apply(&index) < self.target,
            None => false,
        }
    }

    fn num_edges(&self) -> BigUint {
        self.target.clone()
    }

    fn degree_cache(&self) -> &DegreeCache {
        &self.degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_target_above_capacity() {
        let err = PermutationHypergraph::with_seed(10, 3, 121u32, 1).unwrap_err();
        assert!(matches!(err, PartiteError::Precondition(_)));
        assert_eq!(err.code(), "target-exceeds-capacity");
        assert!(PermutationHypergraph::with_seed(10, 3, 120u32, 1).is_ok());
    }

    #[test]
    fn rejects_mismatched_permutation() {
        let perm = AffinePermutation::from_seed(BigUint::from(100u32), 1);
        let err = PermutationHypergraph::new(10, 3, 10u32, perm).unwrap_err();
        assert_eq!(err.code(), "permutation-size-mismatch");
    }

    #[test]
    fn edge_index_is_lexicographic() {
        let graph = PermutationHypergraph::with_seed(10, 3, 60u32, 1).unwrap();
        assert_eq!(graph.permutation().range_size(), &BigUint::from(120u8));
        assert_eq!(graph.edge_index(&[0, 1, 2]), Some(BigUint::from(0u8)));
        assert_eq!(graph.edge_index(&[2, 1, 0]), Some(BigUint::from(0u8)));
        assert_eq!(graph.edge_index(&[7, 8, 9]), Some(BigUint::from(119u8)));
        assert_eq!(graph.edge_index(&[0, 1]), None);
    }
}
