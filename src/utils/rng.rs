use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_seeder::SipHasher;
use serde::{Deserialize, Serialize};
use std::hash::Hasher;

/// Hands out deterministic, independent RNG streams derived from one session seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Seed of the stream for a named consumer.
    ///
    /// SipHash-2-4 (zero key) over the little-endian master seed followed by the name's
    /// UTF-8 bytes, so a given pair yields the same stream on every platform and toolchain.
    pub fn stream_seed(&self, name: &str) -> u64 {
        let mut hasher = SipHasher::new();
        hasher.write(&self.master_seed.to_le_bytes());
        hasher.write(name.as_bytes());
        hasher.finish()
    }

    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.stream_seed(name))
    }
}
