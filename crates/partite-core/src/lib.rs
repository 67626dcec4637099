#![deny(missing_docs)]
//! Exact combinatorics, error taxonomy and determinism helpers shared by the
//! partite crates.
//!
//! Everything that turns vertex tuples into integers lives here: canonical
//! edges, exact binomial coefficients and the combinadic rank used by the
//! permutation-exact hypergraph.

pub mod binomial;
pub mod combinadic;
mod edge;
pub mod errors;
pub mod progress;
pub mod rng;

pub use binomial::{binomial, count_to_f64};
pub use combinadic::{rank, unrank};
pub use edge::{Edge, Vertex};
pub use errors::{ErrorInfo, PartiteError};
pub use progress::{Progress, ProgressConfig, ProgressExt};
pub use rng::{derive_substream_seed, hash_vertices, RngHandle};
