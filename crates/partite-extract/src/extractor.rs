use itertools::Itertools;
use partite_core::{count_to_f64, PartiteError, ProgressExt, Vertex};
use partite_graph::{CommonLink, ImplicitHypergraph};
use tracing::{debug, info, trace};

use crate::config::ExtractionConfig;
use crate::params::LevelParameters;
use crate::selector::select_by_degree;
use crate::witness::{LevelReport, WitnessChain};

/// Finds a complete `k`-partite sub-hypergraph in a dense implicit hypergraph.
///
/// Each level selects a high-degree candidate pool, accepts the first
/// lexicographic `t`-subset whose common link is dense enough and recurses
/// into that link. The search never backtracks across levels.
#[derive(Debug, Clone, Default)]
pub struct PartiteExtractor {
    config: ExtractionConfig,
}

impl PartiteExtractor {
    /// Creates an extractor with the provided configuration.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Runs the extraction on `graph`.
    ///
    /// `min_edges` defaults to `graph.num_edges()`. An arity-1 input returns
    /// its edges directly, truncated to the witness size when one is set.
    pub fn extract(&self, graph: &dyn ImplicitHypergraph) -> Result<WitnessChain, PartiteError> {
        let shape = graph.shape();
        let min_edges = match self.config.min_edges {
            Some(min_edges) => min_edges,
            None => count_to_f64(&graph.num_edges()),
        };
        info!(
            arity = shape.arity,
            domain = shape.domain,
            min_edges,
            "starting partite extraction"
        );

        let mut chain = WitnessChain {
            witnesses: Vec::with_capacity(shape.arity.saturating_sub(1)),
            leaf: Vec::new(),
            levels: Vec::with_capacity(shape.arity),
        };
        if shape.arity == 1 && self.config.witness_size.is_none() {
            let (leaf, scanned) = self.scan_leaf(graph, None)?;
            let parameters = LevelParameters::base(shape.domain, min_edges, leaf.len());
            chain.leaf = leaf;
            chain.levels.push(LevelReport {
                parameters,
                scanned,
                subsets_tried: 0,
            });
        } else {
            let top = LevelParameters::derive(
                shape.arity,
                shape.domain,
                min_edges,
                self.config.witness_size,
            )?;
            self.descend(graph, top, &mut chain)?;
        }

        info!(
            depth = chain.depth(),
            leaf = chain.leaf.len(),
            digest = %chain.digest(),
            "partite witness found"
        );
        Ok(chain)
    }

    fn descend(
        &self,
        graph: &dyn ImplicitHypergraph,
        params: LevelParameters,
        chain: &mut WitnessChain,
    ) -> Result<(), PartiteError> {
        debug!(
            arity = params.arity,
            min_density = params.min_density,
            witness_size = params.witness_size,
            pool_size = params.pool_size,
            min_link_edges = params.min_link_edges,
            "entering level"
        );
        if params.arity == 1 {
            let (leaf, scanned) = self.scan_leaf(graph, Some(params.witness_size))?;
            chain.leaf = leaf;
            chain.levels.push(LevelReport {
                parameters: params,
                scanned,
                subsets_tried: 0,
            });
            return Ok(());
        }

        let selection = select_by_degree(
            graph,
            params.pool_size,
            params.degree_threshold,
            self.config.progress,
        )?;
        let mut tried = 0u64;
        for subset in selection
            .vertices
            .iter()
            .copied()
            .combinations(params.witness_size)
        {
            tried += 1;
            let link = CommonLink::new(graph, &subset)?;
            let link_edges = count_to_f64(&link.num_edges());
            if link_edges < params.min_link_edges {
                trace!(?subset, link_edges, "witness candidate rejected");
                continue;
            }
            debug!(
                arity = params.arity,
                ?subset,
                link_edges,
                tried,
                "witness set accepted"
            );
            chain.witnesses.push(subset);
            chain.levels.push(LevelReport {
                parameters: params,
                scanned: selection.scanned,
                subsets_tried: tried,
            });
            let next = LevelParameters::derive(
                params.arity - 1,
                params.domain,
                params.min_link_edges,
                Some(params.witness_size),
            )?;
            return self.descend(&link, next, chain);
        }

        Err(PartiteError::exhaustion(
            "no-witness",
            "no candidate witness set has a dense enough common link",
        )
        .with_context("arity", params.arity)
        .with_context("pool_size", params.pool_size)
        .with_context("witness_size", params.witness_size)
        .with_context("min_link_edges", params.min_link_edges)
        .with_context("subsets_tried", tried))
    }

    /// Collects the vertices `x` with `(x,)` an edge, stopping after `limit`.
    fn scan_leaf(
        &self,
        graph: &dyn ImplicitHypergraph,
        limit: Option<usize>,
    ) -> Result<(Vec<Vertex>, u64), PartiteError> {
        let mut leaf = Vec::new();
        let mut scanned = 0u64;
        for vertex in (0..graph.domain()).progress("leaf-scan", self.config.progress) {
            if limit.is_some_and(|limit| leaf.len() >= limit) {
                break;
            }
            scanned += 1;
            if graph.is_edge(&[vertex]) {
                leaf.push(vertex);
            }
        }
        if let Some(limit) = limit {
            if leaf.len() < limit {
                return Err(PartiteError::precondition(
                    "insufficient-leaf",
                    "final link has fewer vertices than the witness size",
                )
                .with_context("found", leaf.len())
                .with_context("witness_size", limit));
            }
        }
        Ok((leaf, scanned))
    }
}

/// Extracts a partite witness chain with the default configuration.
///
/// `min_m` overrides the assumed edge count and `t` fixes the witness size.
pub fn get_partite(
    graph: &dyn ImplicitHypergraph,
    min_m: Option<f64>,
    t: Option<usize>,
) -> Result<WitnessChain, PartiteError> {
    let config = ExtractionConfig {
        min_edges: min_m,
        witness_size: t,
        ..ExtractionConfig::default()
    };
    PartiteExtractor::new(config).extract(graph)
}

#[cfg(test)]
mod tests {
    use partite_graph::ModularHypergraph;

    use super::*;

    #[test]
    fn base_case_returns_even_vertices() {
        let graph = ModularHypergraph::new(10, 1, 2).unwrap();
        let chain = get_partite(&graph, None, None).unwrap();
        assert_eq!(chain.depth(), 0);
        assert_eq!(chain.leaf, vec![0, 2, 4, 6, 8]);
        assert_eq!(chain.levels[0].scanned, 10);
    }

    #[test]
    fn base_case_truncates_to_witness_size() {
        let graph = ModularHypergraph::new(10, 1, 2).unwrap();
        for t in 1..=5 {
            let chain = get_partite(&graph, None, Some(t)).unwrap();
            let expected: Vec<u64> = (0..t as u64).map(|x| 2 * x).collect();
            assert_eq!(chain.leaf, expected);
        }
        let err = get_partite(&graph, None, Some(6)).unwrap_err();
        assert_eq!(err.code(), "insufficient-leaf");
    }

    #[test]
    fn zero_arity_is_rejected() {
        let graph = ModularHypergraph::new(10, 0, 2).unwrap();
        let err = get_partite(&graph, None, Some(2)).unwrap_err();
        assert!(matches!(err, PartiteError::Arity(_)));
    }
}
