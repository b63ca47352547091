use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derives a seed from the wall clock at nanosecond resolution.
///
/// Only meant to keep rapid successive runs from producing identical
/// output. It is not a source of unpredictability.
pub fn time_seed() -> u64 {
	let elapsed = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.unwrap_or_default();
	elapsed.as_secs().rotate_left(32) ^ u64::from(elapsed.subsec_nanos())
}

/// Creates the random source for one generation run.
///
/// Uses `seed` when given, otherwise [`time_seed`]. The seed actually
/// used is returned alongside the source so a run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
	let seed = seed.unwrap_or_else(time_seed);
	info!("Random seed: {}", seed);
	(ChaCha8Rng::seed_from_u64(seed), seed)
}
