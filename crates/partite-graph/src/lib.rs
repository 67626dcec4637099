#![deny(missing_docs)]
//! Implicit k-uniform hypergraphs.
//!
//! Edge membership is a predicate evaluated on demand, so hypergraphs over
//! domains of millions of vertices cost nothing to build. Degrees are found by
//! brute-force enumeration and memoized per instance.

mod edge_list;
mod exact;
mod implicit;
mod link;
mod modular;
mod oracle;
mod permutation;

pub use edge_list::EdgeListHypergraph;
pub use exact::PermutationHypergraph;
pub use implicit::{count_edges_by_degree, DegreeCache, ImplicitHypergraph, Neighbours, Shape};
pub use link::CommonLink;
pub use modular::ModularHypergraph;
pub use oracle::{OracleHypergraph, DEFAULT_ORACLE_SEED, HASH_RANGE};
pub use permutation::{AffinePermutation, Permutation};
