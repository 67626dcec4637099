//! Exact binomial coefficients.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Returns `C(n, k)` exactly.
///
/// The product is accumulated in `u128` while it fits and promoted to
/// [`BigUint`] on the first overflow, so the result is exact for every input.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        match acc.checked_mul(u128::from(n - i)) {
            // acc * (n - i) = C(n, i + 1) * (i + 1), so the division is exact
            Some(product) => acc = product / u128::from(i + 1),
            None => return binomial_wide(BigUint::from(acc), n, i, k),
        }
    }
    BigUint::from(acc)
}

fn binomial_wide(mut acc: BigUint, n: u64, from: u64, k: u64) -> BigUint {
    for i in from..k {
        acc *= n - i;
        acc /= i + 1;
    }
    acc
}

/// Converts an exact count to `f64` for density arithmetic.
///
/// Values beyond the `f64` range saturate to infinity instead of failing.
pub fn count_to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_match_pascal() {
        for n in 0u64..30 {
            for k in 1..=n {
                let expected = binomial(n - 1, k - 1) + binomial(n - 1, k);
                assert_eq!(binomial(n, k), expected, "C({n}, {k})");
            }
        }
    }

    #[test]
    fn out_of_range_is_zero() {
        assert_eq!(binomial(3, 4), BigUint::zero());
        assert_eq!(binomial(0, 0), BigUint::from(1u8));
    }

    #[test]
    fn large_domain_is_exact() {
        // C(10^7, 3) exceeds the exact integer range of f64.
        let n: u64 = 10_000_000;
        let expected = BigUint::from(n) * (n - 1) * (n - 2) / 6u32;
        assert_eq!(binomial(n, 3), expected);
        assert_eq!(binomial(n, 3).to_string(), "166666616666670000000");
    }

    #[test]
    fn promotes_past_u128() {
        let wide = binomial(300, 150);
        assert_eq!(wide, binomial(299, 149) + binomial(299, 150));
        assert!(wide.bits() > 128);
    }
}
