//! Deterministic RNG wrapper, seed derivation and keyed hashing.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle used wherever a seed turns into parameters.
///
/// The handle is a thin wrapper around `StdRng`. Substreams are derived by
/// hashing `(master_seed, substream_id)` with SipHash-1-3 configured with
/// fixed zero keys, so the same seed produces the same hypergraph on every
/// platform.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle for a derived substream of `seed`.
    pub fn substream(seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(seed, substream))
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

/// Hashes a vertex tuple under `seed`.
///
/// Callers pass the tuple in canonical (ascending) order; the length is mixed
/// in so that tuples of different arity never collide structurally.
pub fn hash_vertices(seed: u64, vertices: &[u64]) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(seed, 0);
    hasher.write_usize(vertices.len());
    for vertex in vertices {
        hasher.write_u64(*vertex);
    }
    hasher.finish()
}
