use std::sync::OnceLock;

use num_bigint::BigUint;
use partite_core::{
    binomial, count_to_f64, hash_vertices, Edge, PartiteError, ProgressConfig, Vertex,
};

use crate::implicit::{count_edges_by_degree, DegreeCache, ImplicitHypergraph, Shape};

/// Size of the range hash values are reduced into before comparing with `p`.
pub const HASH_RANGE: u64 = 100_000_000;

/// Seed used when the caller does not supply one.
pub const DEFAULT_ORACLE_SEED: u64 = 1234;

/// Random hypergraph whose edges are decided by a seeded hash.
///
/// Each k-set is an edge independently of the others with probability close
/// to `p`. The edge count is only known empirically: [`num_edges`] sums the
/// degrees, while [`expected_num_edges`] returns `p · C(N, k)`; the two differ.
///
/// [`num_edges`]: ImplicitHypergraph::num_edges
/// [`expected_num_edges`]: OracleHypergraph::expected_num_edges
#[derive(Debug)]
pub struct OracleHypergraph {
    shape: Shape,
    probability: f64,
    seed: u64,
    cutoff: f64,
    progress: ProgressConfig,
    degrees: DegreeCache,
    edges: OnceLock<BigUint>,
}

impl OracleHypergraph {
    /// Creates an oracle hypergraph with the default seed.
    pub fn new(domain: u64, arity: usize, probability: f64) -> Result<Self, PartiteError> {
        Self::with_seed(domain, arity, probability, DEFAULT_ORACLE_SEED)
    }

    /// Creates an oracle hypergraph over `[0, domain)` with edge probability `probability`.
    pub fn with_seed(
        domain: u64,
        arity: usize,
        probability: f64,
        seed: u64,
    ) -> Result<Self, PartiteError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(PartiteError::precondition(
                "probability-out-of-range",
                "edge probability must lie in [0, 1]",
            )
            .with_context("probability", probability));
        }
        if arity == 0 {
            return Err(PartiteError::arity(
                "zero-arity",
                "oracle hypergraphs need at least one vertex per edge",
            ));
        }
        Ok(Self {
            shape: Shape::base(domain, arity),
            probability,
            seed,
            cutoff: probability * HASH_RANGE as f64,
            progress: ProgressConfig::default(),
            degrees: DegreeCache::new(),
            edges: OnceLock::new(),
        })
    }

    /// Replaces the progress reporting used by the degree scan.
    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    /// Returns the target edge probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the theoretical edge count `p · C(N, k)`.
    pub fn expected_num_edges(&self) -> f64 {
        self.probability * count_to_f64(&binomial(self.shape.domain, self.shape.arity as u64))
    }
}

impl ImplicitHypergraph for OracleHypergraph {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn is_edge(&self, edge: &[Vertex]) -> bool {
        let Some(edge) = Edge::try_canonical(edge, self.shape.arity, self.shape.domain) else {
            return false;
        };
        let bucket = hash_vertices(self.seed, edge.vertices()) % HASH_RANGE;
        (bucket as f64) < self.cutoff
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
        self.progress
    }
}
