//! Combinatorial number system: lexicographic ranks of k-subsets.
//!
//! A k-subset of `[0, n)` written in ascending order `c_1 < … < c_k` has rank
//!
//! ```text
//! Σ_p Σ_{j=1}^{c_p - c_{p-1} - 1} C(n - (c_{p-1} + j + 1), k - p)      (c_0 = -1)
//! ```
//!
//! i.e. for every position the number of subsets skipped by the gap before
//! `c_p`. Each inner sum is a hockey-stick sum and collapses to
//! `C(n - c_{p-1} - 1, k - p + 1) - C(n - c_p, k - p + 1)`, so ranking costs
//! `O(k)` exact binomials independent of the gap sizes.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::binomial::binomial;
use crate::errors::PartiteError;

/// Returns the lexicographic rank of `combination` among all k-subsets of `[0, n)`.
///
/// The combination must be strictly ascending with every element below `n`.
pub fn rank(combination: &[u64], n: u64) -> Result<BigUint, PartiteError> {
    validate(combination, n)?;
    Ok(rank_unchecked(combination, n))
}

/// Ranks a combination already known to be strictly ascending and below `n`.
pub(crate) fn rank_unchecked(combination: &[u64], n: u64) -> BigUint {
    let k = combination.len() as u64;
    let mut index = BigUint::zero();
    // smallest value the current position may take, i.e. c_{p-1} + 1
    let mut floor = 0u64;
    for (pos, &value) in combination.iter().enumerate() {
        let remaining = k - pos as u64;
        if value > floor {
            index += binomial(n - floor, remaining);
            index -= binomial(n - value, remaining);
        }
        floor = value + 1;
    }
    index
}

/// Returns the k-subset of `[0, n)` with the given lexicographic rank.
///
/// Inverse of [`rank`]; linear in `n`, intended for diagnostics and tests.
pub fn unrank(index: &BigUint, n: u64, k: u64) -> Result<Vec<u64>, PartiteError> {
    let total = binomial(n, k);
    if *index >= total {
        return Err(PartiteError::precondition(
            "rank-out-of-range",
            "rank exceeds the number of k-subsets",
        )
        .with_context("rank", index)
        .with_context("n", n)
        .with_context("k", k));
    }
    let mut remaining = index.clone();
    let mut combination = Vec::with_capacity(k as usize);
    let mut candidate = 0u64;
    for pos in 0..k {
        let after = k - pos - 1;
        loop {
            let block = binomial(n - candidate - 1, after);
            if remaining < block {
                break;
            }
            remaining -= block;
            candidate += 1;
        }
        combination.push(candidate);
        candidate += 1;
    }
    Ok(combination)
}

fn validate(combination: &[u64], n: u64) -> Result<(), PartiteError> {
    for pair in combination.windows(2) {
        if pair[0] >= pair[1] {
            return Err(PartiteError::arity(
                "not-canonical",
                "combination must be strictly ascending",
            )
            .with_context("left", pair[0])
            .with_context("right", pair[1]));
        }
    }
    if let Some(&last) = combination.last() {
        if last >= n {
            return Err(PartiteError::arity(
                "vertex-out-of-range",
                "combination element outside the ranking universe",
            )
            .with_context("vertex", last)
            .with_context("n", n));
        }
    }
    Ok(())
}
