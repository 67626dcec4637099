use std::fmt::Debug;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use partite_core::RngHandle;

/// Substream reserved for drawing affine permutation parameters.
const AFFINE_SUBSTREAM: u64 = 0x5045_524d;

/// Deterministic bijection over `[0, len)`.
///
/// The permutation-exact hypergraph only relies on bijectivity and
/// determinism; any pseudorandom permutation satisfying both can be plugged in.
pub trait Permutation: Send + Sync + Debug {
    /// Returns the size of the permuted range.
    fn range_size(&self) -> &BigUint;

    /// Maps `index` (which must be below [`Permutation::range_size`]) to its image.
    fn apply(&self, index: &BigUint) -> BigUint;
}

/// Affine bijection `i ↦ (a·i + b) mod len` with `gcd(a, len) = 1`.
///
/// Parameters are drawn from a seed, so two permutations built from the same
/// `(len, seed)` agree everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePermutation {
    size: BigUint,
    multiplier: BigUint,
    offset: BigUint,
}

impl AffinePermutation {
    /// Draws an affine permutation of `[0, size)` from `seed`.
    pub fn from_seed(size: BigUint, seed: u64) -> Self {
        if size <= BigUint::one() {
            return Self {
                size,
                multiplier: BigUint::one(),
                offset: BigUint::zero(),
            };
        }
        let mut rng = RngHandle::substream(seed, AFFINE_SUBSTREAM);
        let offset = rng.gen_biguint_below(&size);
        let multiplier = loop {
            let candidate = rng.gen_biguint_range(&BigUint::one(), &size);
            if candidate.gcd(&size).is_one() {
                break candidate;
            }
        };
        Self {
            size,
            multiplier,
            offset,
        }
    }

    /// Returns the multiplier `a`.
    pub fn multiplier(&self) -> &BigUint {
        &self.multiplier
    }

    /// Returns the offset `b`.
    pub fn offset(&self) -> &BigUint {
        &self.offset
    }
}

impl Permutation for AffinePermutation {
    fn range_size(&self) -> &BigUint {
        &self.size
    }

    fn apply(&self, index: &BigUint) -> BigUint {
        (&self.multiplier * index + &self.offset) % &self.size
    }
}
