//! Session-level RNG wrapper.
//!
//! # Seeding strategy
//!
//! A RANDOM boarding order must be able to reach every permutation of the
//! roster.  A 125-passenger roster has ~10^209 orderings, far beyond what a
//! 64-bit generator state can address, so the default source is `StdRng`
//! (ChaCha12, 256-bit seed) filled from OS entropy.
//!
//! [`SessionRng::new`] seeds from a `u64` for reproducible runs (tests,
//! recorded demos).  That narrows the reachable set to 2^64 orderings, which
//! is still indistinguishable from uniform in practice.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand::seq::SliceRandom;

/// Simulation-level RNG, owned by one boarding session.
///
/// Used only from the thread that owns the session.
pub struct SessionRng(StdRng);

impl SessionRng {
    /// Deterministic RNG: the same seed always yields the same sequence.
    pub fn new(seed: u64) -> Self {
        SessionRng(StdRng::seed_from_u64(seed))
    }

    /// Full-entropy RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SessionRng(StdRng::from_entropy())
    }

    /// `Some(seed)` → [`new`](Self::new); `None` → [`from_entropy`](Self::from_entropy).
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Uniform in-place shuffle.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
