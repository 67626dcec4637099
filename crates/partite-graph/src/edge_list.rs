use std::collections::BTreeSet;

use num_bigint::BigUint;
use partite_core::{Edge, PartiteError, Vertex};

use crate::implicit::{DegreeCache, ImplicitHypergraph, Shape};

/// Explicitly stored hypergraph for small hand-built fixtures.
#[derive(Debug)]
pub struct EdgeListHypergraph {
    shape: Shape,
    edges: BTreeSet<Edge>,
    degrees: DegreeCache,
}

impl EdgeListHypergraph {
    /// Builds the hypergraph from explicit edges; every edge must have `arity` vertices.
    pub fn new<I, E>(domain: u64, arity: usize, edges: I) -> Result<Self, PartiteError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[Vertex]>,
    {
        let edges = edges
            .into_iter()
            .map(|edge| Edge::canonical(edge.as_ref(), arity, domain))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self {
            shape: Shape::base(domain, arity),
            edges,
            degrees: DegreeCache::new(),
        })
    }
}

impl ImplicitHypergraph for EdgeListHypergraph {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn is_edge(&self, edge: &[Vertex]) -> bool {
        Edge::try_canonical(edge, self.shape.arity, self.shape.domain)
            .is_some_and(|edge| self.edges.contains(&edge))
    }

    fn num_edges(&self) -> BigUint {
        BigUint::from(self.edges.len())
    }

    fn degree_cache(&self) -> &DegreeCache {
        &self.degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_and_bad_edges_fail() {
        let graph = EdgeListHypergraph::new(5, 2, [[0u64, 1], [1, 0], [2, 4]]).unwrap();
        assert_eq!(graph.num_edges(), BigUint::from(2u8));
        assert!(graph.is_edge(&[4, 2]));
        assert!(!graph.is_edge(&[0, 2]));

        let err = EdgeListHypergraph::new(5, 2, [vec![0u64, 1, 2]]).unwrap_err();
        assert_eq!(err.code(), "arity-mismatch");
    }

    #[test]
    fn degrees_come_from_neighbours() {
        let graph = EdgeListHypergraph::new(4, 2, [[0u64, 1], [0, 2], [0, 3], [2, 3]]).unwrap();
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.degree(1), 1);
        let neighbours: Vec<_> = graph.neighbours(2).collect();
        assert_eq!(neighbours, vec![vec![0], vec![3]]);
        assert_eq!(graph.degree_cache().len(), 2);
    }
}
