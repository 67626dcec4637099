use partite_core::{ErrorInfo, PartiteError, Vertex};
use partite_graph::{CommonLink, ImplicitHypergraph};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::params::LevelParameters;

/// What happened at one level of the recursion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    /// Parameters derived for the level.
    pub parameters: LevelParameters,
    /// Vertices scanned by the degree selector (or the base-case scan).
    pub scanned: u64,
    /// Candidate witness sets tested before one was accepted.
    pub subsets_tried: u64,
}

/// Nested witness sets certifying a complete `k`-partite sub-hypergraph.
///
/// `witnesses[i]` is the set chosen at recursion depth `i` and `leaf` holds
/// the vertices found in the final arity-1 link. Every tuple taking one vertex
/// from each witness set and one from `leaf` is an edge of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessChain {
    /// Witness sets in recursion order, each ascending.
    pub witnesses: Vec<Vec<Vertex>>,
    /// Vertices of the final arity-1 link.
    pub leaf: Vec<Vertex>,
    /// One report per level, outermost first; the last one is the base case.
    pub levels: Vec<LevelReport>,
}

impl WitnessChain {
    /// Number of witness sets, `k - 1` for an arity-`k` input.
    pub fn depth(&self) -> usize {
        self.witnesses.len()
    }

    /// Returns the parts of the partite structure: the witness sets followed by the leaf.
    pub fn parts(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.witnesses
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(self.leaf.as_slice()))
    }

    /// Checks the chain against `graph` by rebuilding the common links.
    ///
    /// Returns `Ok(false)` when some leaf vertex is missing from the final
    /// link, which means some cross tuple is not an edge of `graph`.
    pub fn verify(&self, graph: &dyn ImplicitHypergraph) -> Result<bool, PartiteError> {
        if graph.arity() != self.depth() + 1 {
            return Err(PartiteError::arity(
                "chain-depth-mismatch",
                "witness chain depth does not match the hypergraph arity",
            )
            .with_context("arity", graph.arity())
            .with_context("depth", self.depth()));
        }
        verify_from(graph, &self.witnesses, &self.leaf)
    }

    /// Hex SHA-256 digest of the witness sets and leaf.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.witnesses.len() as u64).to_le_bytes());
        for part in self.parts() {
            hasher.update((part.len() as u64).to_le_bytes());
            for vertex in part {
                hasher.update(vertex.to_le_bytes());
            }
        }
        format!("{:x}", hasher.finalize())
    }

    /// Serializes the chain as JSON.
    pub fn to_json(&self) -> Result<String, PartiteError> {
        serde_json::to_string(self).map_err(|err| {
            PartiteError::Serde(
                ErrorInfo::new("chain-encode", "failed to encode witness chain")
                    .with_context("reason", err),
            )
        })
    }

    /// Parses a chain from JSON.
    pub fn from_json(input: &str) -> Result<Self, PartiteError> {
        serde_json::from_str(input).map_err(|err| {
            PartiteError::Serde(
                ErrorInfo::new("chain-decode", "failed to decode witness chain")
                    .with_context("reason", err),
            )
        })
    }
}

fn verify_from(
    graph: &dyn ImplicitHypergraph,
    witnesses: &[Vec<Vertex>],
    leaf: &[Vertex],
) -> Result<bool, PartiteError> {
    match witnesses.split_first() {
        None => Ok(leaf.iter().all(|vertex| graph.is_edge(&[*vertex]))),
        Some((pivots, rest)) => {
            let link = CommonLink::new(graph, pivots)?;
            verify_from(&link, rest, leaf)
        }
    }
}
