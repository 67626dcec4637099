//! Complete bipartite extraction for graphs (`k = 2`).
//!
//! This variant derives its own `(q, r, s)` parameters and is kept separate
//! from [`crate::get_partite`]; the two derivations are not interchangeable.

use std::f64::consts::E;

use itertools::Itertools;
use partite_core::{count_to_f64, PartiteError, Vertex};
use partite_graph::ImplicitHypergraph;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::selector::select_by_degree;

/// Parameters derived by [`get_2_partite`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BipartiteParameters {
    /// Edge density `m / n²`.
    pub density: f64,
    /// Side size `q = floor(ln(n/2) / ln(2e/d))`.
    pub q: usize,
    /// Candidate pool size `r = ceil(2q / d)`.
    pub r: usize,
    /// Common-neighbourhood bound `s = floor(d^q · n)`.
    pub s: u64,
}

impl BipartiteParameters {
    /// Derives `(q, r, s)` for a graph with `m` edges on `n` vertices.
    pub fn derive(n: u64, m: f64) -> Result<Self, PartiteError> {
        let nf = n as f64;
        let density = m / (nf * nf);
        let q = ((nf / 2.0).ln() / (2.0 * E / density).ln()).floor();
        if !q.is_finite() || q < 2.0 {
            return Err(PartiteError::precondition(
                "insufficient-density",
                "graph is not dense enough for a bipartite witness",
            )
            .with_context("density", density)
            .with_context("q", q));
        }
        let r = (2.0 * q / density).ceil();
        if r > nf || q > r {
            return Err(PartiteError::precondition(
                "pool-exceeds-domain",
                "candidate pool must satisfy q <= r <= n",
            )
            .with_context("q", q)
            .with_context("r", r)
            .with_context("n", n));
        }
        let s = (density.powf(q) * nf).floor();
        if s > nf - r {
            return Err(PartiteError::precondition(
                "bound-exceeds-complement",
                "common-neighbourhood bound exceeds the vertices outside the pool",
            )
            .with_context("s", s)
            .with_context("outside", nf - r));
        }
        Ok(Self {
            density,
            q: q as usize,
            r: r as usize,
            s: s as u64,
        })
    }
}

/// A complete bipartite pair `(left, right)` and the parameters that found it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BipartiteWitness {
    /// The accepted `q`-subset of the candidate pool.
    pub left: Vec<Vertex>,
    /// `q` common neighbours of `left` outside the pool, ascending.
    pub right: Vec<Vertex>,
    /// Derived parameters.
    pub parameters: BipartiteParameters,
}

/// Finds `q` vertices and `q` common neighbours forming a complete bipartite graph.
///
/// The pool `R` of `r` high-degree vertices is chosen with threshold
/// `d · r · n`; each `q`-subset of `R` in lexicographic order is then tested
/// for `q` common neighbours outside `R`.
pub fn get_2_partite(graph: &dyn ImplicitHypergraph) -> Result<BipartiteWitness, PartiteError> {
    if graph.arity() != 2 {
        return Err(PartiteError::arity(
            "arity-mismatch",
            "bipartite extraction needs a graph of arity 2",
        )
        .with_context("arity", graph.arity()));
    }
    let n = graph.domain();
    let parameters = BipartiteParameters::derive(n, count_to_f64(&graph.num_edges()))?;
    info!(
        n,
        q = parameters.q,
        r = parameters.r,
        s = parameters.s,
        "starting bipartite extraction"
    );

    let threshold = parameters.density * parameters.r as f64 * n as f64;
    let pool = select_by_degree(graph, parameters.r, threshold, graph.progress())?.vertices;

    let mut tried = 0u64;
    for left in pool.iter().copied().combinations(parameters.q) {
        tried += 1;
        let (first, rest) = match left.split_first() {
            Some(split) => split,
            None => break,
        };
        let right: Vec<Vertex> = graph
            .neighbours(*first)
            .filter_map(|others| others.first().copied())
            .filter(|v| pool.binary_search(v).is_err())
            .filter(|v| rest.iter().all(|u| graph.is_edge(&[*u, *v])))
            .take(parameters.q)
            .collect();
        if right.len() == parameters.q {
            debug!(?left, ?right, tried, "bipartite witness accepted");
            return Ok(BipartiteWitness {
                left,
                right,
                parameters,
            });
        }
    }

    Err(PartiteError::exhaustion(
        "no-witness",
        "no q-subset of the pool has q common neighbours outside it",
    )
    .with_context("q", parameters.q)
    .with_context("r", parameters.r)
    .with_context("subsets_tried", tried))
}
