use serde::{Deserialize, Serialize};

use num_bigint::BigUint;

use crate::combinadic::rank_unchecked;
use crate::errors::PartiteError;

/// A vertex of an implicit hypergraph: an index in `[0, N)`.
pub type Vertex = u64;

/// Canonical hyperedge: distinct vertices in strictly ascending order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(Box<[Vertex]>);

impl Edge {
    /// Canonicalizes `vertices` into an edge of the given arity over `[0, domain)`.
    ///
    /// Fails with an arity error on wrong length, repeated vertices or vertices
    /// outside the domain.
    pub fn canonical(vertices: &[Vertex], arity: usize, domain: u64) -> Result<Self, PartiteError> {
        if vertices.len() != arity {
            return Err(PartiteError::arity(
                "arity-mismatch",
                "edge length does not match the hypergraph arity",
            )
            .with_context("expected", arity)
            .with_context("actual", vertices.len()));
        }
        let mut sorted = vertices.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(
                PartiteError::arity("repeated-vertex", "edge repeats a vertex")
                    .with_context("vertex", pair[0]),
            );
        }
        if let Some(&last) = sorted.last() {
            if last >= domain {
                return Err(PartiteError::arity(
                    "vertex-out-of-range",
                    "edge vertex outside the hypergraph domain",
                )
                .with_context("vertex", last)
                .with_context("domain", domain));
            }
        }
        Ok(Self(sorted.into_boxed_slice()))
    }

    /// Non-failing variant of [`Edge::canonical`] used by membership predicates.
    pub fn try_canonical(vertices: &[Vertex], arity: usize, domain: u64) -> Option<Self> {
        Self::canonical(vertices, arity, domain).ok()
    }

    /// Returns the vertices in ascending order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    /// Returns the number of vertices in the edge.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Returns the edge extended by `vertex`, or `None` if it is already present.
    pub fn with_vertex(&self, vertex: Vertex) -> Option<Self> {
        let slot = self.0.binary_search(&vertex).err()?;
        let mut extended = Vec::with_capacity(self.0.len() + 1);
        extended.extend_from_slice(&self.0[..slot]);
        extended.push(vertex);
        extended.extend_from_slice(&self.0[slot..]);
        Some(Self(extended.into_boxed_slice()))
    }

    /// Returns the combinadic rank of the edge among k-subsets of `[0, n)`.
    ///
    /// Callers must ensure every vertex is below `n`; edges built against a
    /// domain no larger than `n` always are.
    pub fn rank(&self, n: u64) -> BigUint {
        rank_unchecked(&self.0, n)
    }
}

impl AsRef<[Vertex]> for Edge {
    fn as_ref(&self) -> &[Vertex] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_sorts_and_validates() {
        let edge = Edge::canonical(&[5, 1, 3], 3, 10).unwrap();
        assert_eq!(edge.vertices(), &[1, 3, 5]);
        assert_eq!(
            Edge::canonical(&[1, 3], 3, 10).unwrap_err().code(),
            "arity-mismatch"
        );
        assert_eq!(
            Edge::canonical(&[1, 3, 3], 3, 10).unwrap_err().code(),
            "repeated-vertex"
        );
        assert_eq!(
            Edge::canonical(&[1, 3, 10], 3, 10).unwrap_err().code(),
            "vertex-out-of-range"
        );
        assert!(Edge::try_canonical(&[0], 2, 10).is_none());
    }

    #[test]
    fn with_vertex_keeps_order() {
        let edge = Edge::canonical(&[2, 8], 2, 10).unwrap();
        assert_eq!(edge.with_vertex(5).unwrap().vertices(), &[2, 5, 8]);
        assert_eq!(edge.with_vertex(0).unwrap().vertices(), &[0, 2, 8]);
        assert!(edge.with_vertex(8).is_none());
    }
}
