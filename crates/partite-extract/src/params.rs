use partite_core::PartiteError;
use serde::{Deserialize, Serialize};

/// Parameters derived for one level of the partite recursion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParameters {
    /// Arity `k` of the hypergraph at this level.
    pub arity: usize,
    /// Domain size `N`.
    pub domain: u64,
    /// Assumed minimum edge count `min_m`.
    pub min_edges: f64,
    /// `min_m / N^k`.
    pub min_density: f64,
    /// Witness-set size `t`, shared by every level.
    pub witness_size: usize,
    /// Candidate pool size `w = ceil(2t / min_d)`.
    pub pool_size: usize,
    /// Minimum edge count `min_s = min_d^t · N^(k-1)` of an accepted link.
    pub min_link_edges: f64,
    /// Cumulative degree the pool must reach, `w · k · min_d · N^(k-1)`.
    pub degree_threshold: f64,
}

impl LevelParameters {
    /// Parameters of an arity-1 level, which only scans for its edges.
    pub fn base(domain: u64, min_edges: f64, witness_size: usize) -> Self {
        Self {
            arity: 1,
            domain,
            min_edges,
            min_density: min_edges / domain as f64,
            witness_size,
            pool_size: 0,
            min_link_edges: 0.0,
            degree_threshold: 0.0,
        }
    }

    /// Derives the level parameters of a `k`-uniform hypergraph on `N` vertices.
    ///
    /// When `witness_size` is `None` the size is derived from the density as
    /// `floor((ln(N / 2^(k-1)) / ln(3 / min_d))^(1/(k-1)))` and must be at
    /// least 2. Base levels (`k = 1`) only carry `t` and the density.
    pub fn derive(
        arity: usize,
        domain: u64,
        min_edges: f64,
        witness_size: Option<usize>,
    ) -> Result<Self, PartiteError> {
        if arity == 0 {
            return Err(PartiteError::arity(
                "zero-arity",
                "partite extraction needs arity at least 1",
            ));
        }
        let n = domain as f64;
        let min_density = min_edges / n.powi(arity as i32);
        if !min_density.is_finite() || min_density <= 0.0 {
            return Err(PartiteError::precondition(
                "insufficient-density",
                "edge density must be positive",
            )
            .with_context("min_edges", min_edges)
            .with_context("domain", domain));
        }

        let witness_size = match witness_size {
            Some(0) => {
                return Err(PartiteError::precondition(
                    "zero-witness-size",
                    "witness sets must be non-empty",
                ))
            }
            Some(t) => t,
            None => derive_witness_size(arity, n, min_density)?,
        };

        if arity == 1 {
            return Ok(Self::base(domain, min_edges, witness_size));
        }

        let span = n.powi(arity as i32 - 1);
        let pool = (2.0 * witness_size as f64 / min_density).ceil();
        if pool > n {
            return Err(PartiteError::precondition(
                "pool-exceeds-domain",
                "candidate pool is larger than the vertex domain",
            )
            .with_context("pool_size", pool)
            .with_context("domain", domain)
            .with_hint("the hypergraph is too sparse for this witness size"));
        }
        let pool_size = pool as usize;
        if witness_size > pool_size {
            return Err(PartiteError::precondition(
                "witness-exceeds-pool",
                "witness size is larger than the candidate pool",
            )
            .with_context("witness_size", witness_size)
            .with_context("pool_size", pool_size));
        }
        Ok(Self {
            arity,
            domain,
            min_edges,
            min_density,
            witness_size,
            pool_size,
            min_link_edges: min_density.powi(witness_size as i32) * span,
            degree_threshold: pool * arity as f64 * min_density * span,
        })
    }
}

fn derive_witness_size(arity: usize, n: f64, min_density: f64) -> Result<usize, PartiteError> {
    let insufficient = |value: f64| {
        PartiteError::precondition(
            "insufficient-density",
            "density too low to derive a witness size of at least 2",
        )
        .with_context("arity", arity)
        .with_context("domain", n)
        .with_context("min_density", min_density)
        .with_context("derived", value)
    };
    if arity < 2 {
        return Err(insufficient(f64::NAN)
            .with_hint("supply the witness size explicitly for arity 1"));
    }
    let ratio = (n / 2f64.powi(arity as i32 - 1)).ln() / (3.0 / min_density).ln();
    let derived = ratio.powf(1.0 / (arity as f64 - 1.0)).floor();
    if !derived.is_finite() || derived < 2.0 {
        return Err(insufficient(derived));
    }
    Ok(derived as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_graph_derives_two() {
        let params = LevelParameters::derive(2, 200, 17_910.0, None).unwrap();
        assert_eq!(params.witness_size, 2);
        assert_eq!(params.pool_size, 9);
        assert!((params.min_link_edges - 40.1).abs() < 0.1);
        // threshold is the pool size times the average degree
        assert!((params.degree_threshold - 9.0 * 2.0 * 17_910.0 / 200.0).abs() < 1e-6);
    }

    #[test]
    fn sparse_graph_is_insufficient() {
        let err = LevelParameters::derive(3, 50, 100.0, None).unwrap_err();
        assert_eq!(err.code(), "insufficient-density");
        let err = LevelParameters::derive(2, 50, 0.0, Some(2)).unwrap_err();
        assert_eq!(err.code(), "insufficient-density");
    }

    #[test]
    fn explicit_witness_size_is_kept() {
        let params = LevelParameters::derive(3, 180, 927_184.0, Some(2)).unwrap();
        assert_eq!(params.witness_size, 2);
        assert_eq!(params.pool_size, 26);
        assert!(params.min_link_edges > 800.0 && params.min_link_edges < 830.0);
    }

    #[test]
    fn base_level_has_no_pool() {
        let params = LevelParameters::derive(1, 10, 5.0, Some(3)).unwrap();
        assert_eq!(params.pool_size, 0);
        assert_eq!(
            LevelParameters::derive(1, 10, 5.0, None).unwrap_err().code(),
            "insufficient-density"
        );
    }

    #[test]
    fn oversized_pool_and_zero_witness_fail() {
        assert_eq!(
            LevelParameters::derive(2, 10, 5.0, Some(2)).unwrap_err().code(),
            "pool-exceeds-domain"
        );
        assert_eq!(
            LevelParameters::derive(2, 10, 45.0, Some(0)).unwrap_err().code(),
            "zero-witness-size"
        );
    }
}
