#![deny(missing_docs)]
//! Recursive extraction of complete partite sub-hypergraphs.
//!
//! A dense `k`-uniform hypergraph contains nested witness sets `T_1, ...,
//! T_(k-1)` and a leaf set such that every cross tuple is an edge. The
//! extractor finds them level by level through common links, reading the
//! input only through [`partite_graph::ImplicitHypergraph`].

pub mod bipartite;
mod config;
mod extractor;
mod params;
mod selector;
mod witness;

pub use bipartite::{get_2_partite, BipartiteParameters, BipartiteWitness};
pub use config::ExtractionConfig;
pub use extractor::{get_partite, PartiteExtractor};
pub use params::LevelParameters;
pub use selector::{select_by_degree, Selection};
pub use witness::{LevelReport, WitnessChain};
