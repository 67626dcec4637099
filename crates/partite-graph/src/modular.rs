use std::collections::BTreeMap;
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use partite_core::{binomial, Edge, PartiteError, Vertex};

use crate::implicit::{DegreeCache, ImplicitHypergraph, Shape};

/// Arithmetic fixture: a k-set is an edge iff its vertex sum is divisible by `modulus`.
#[derive(Debug)]
pub struct ModularHypergraph {
    shape: Shape,
    modulus: u64,
    degrees: DegreeCache,
    edges: OnceLock<BigUint>,
}

impl ModularHypergraph {
    /// Creates the fixture over `[0, domain)`.
    pub fn new(domain: u64, arity: usize, modulus: u64) -> Result<Self, PartiteError> {
        if modulus == 0 {
            return Err(PartiteError::precondition(
                "zero-modulus",
                "modulus must be positive",
            ));
        }
        Ok(Self {
            shape: Shape::base(domain, arity),
            modulus,
            degrees: DegreeCache::new(),
            edges: OnceLock::new(),
        })
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Counts k-subsets with sum ≡ 0 (mod q) from residue class sizes.
    ///
    /// `ways[size]` maps each reachable residue to the number of subsets of the
    /// classes seen so far; each class `r` holding `c_r` vertices contributes
    /// `C(c_r, j)` ways of taking `j` of its vertices. Only reachable residues
    /// are stored, so memory is bounded by the domain and not by `q`.
    fn count_edges(&self) -> BigUint {
        let q = u128::from(self.modulus);
        let k = self.shape.arity;
        let domain = self.shape.domain;
        // sums of k >= 2 distinct vertices lie in [1, k·(N-1)]
        if k >= 2 && q > k as u128 * u128::from(domain.saturating_sub(1)) {
            return BigUint::zero();
        }
        let mut ways: Vec<BTreeMap<u64, BigUint>> = vec![BTreeMap::new(); k + 1];
        ways[0].insert(0, BigUint::one());
        for residue in 0..self.modulus.min(domain) {
            let class_size = domain / self.modulus + u64::from(residue < domain % self.modulus);
            let mut next = ways.clone();
            for taken in 1..=k.min(class_size as usize) {
                let choose = binomial(class_size, taken as u64);
                let shift = u128::from(residue) * taken as u128 % q;
                for size in 0..=k - taken {
                    for (sum, count) in &ways[size] {
                        let target = ((u128::from(*sum) + shift) % q) as u64;
                        *next[size + taken].entry(target).or_default() += count * &choose;
                    }
                }
            }
            ways = next;
        }
        ways[k].remove(&0).unwrap_or_default()
    }
}

impl ImplicitHypergraph for ModularHypergraph {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn is_edge(&self, edge: &[Vertex]) -> bool {
        let Some(edge) = Edge::try_canonical(edge, self.shape.arity, self.shape.domain) else {
            return false;
        };
        let sum: u128 = edge.vertices().iter().map(|v| u128::from(*v)).sum();
        sum % u128::from(self.modulus) == 0
    }

    fn num_edges(&self) -> BigUint {
        self.edges.get_or_init(|| self.count_edges()).clone()
    }

    fn degree_cache(&self) -> &DegreeCache {
        &self.degrees
    }
}
