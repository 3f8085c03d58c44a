//! Random sequence generation.
//!
//! The generator is always an explicit, caller-owned [`StdRng`]; nothing here
//! touches global RNG state, so a fixed seed reproduces a sequence exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::Result;
use crate::validation::validate_random_count;

/// Largest value [`generate_random`] can produce (inclusive).
pub const MAX_RANDOM_VALUE: i64 = 999;

/// Create a random number generator, optionally seeded for reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional seed value. If `None`, uses OS entropy for randomness.
///
/// # Examples
///
/// ```
/// use chunksort_lib::random::create_rng;
///
/// // Reproducible
/// let mut rng1 = create_rng(Some(42));
/// let mut rng2 = create_rng(Some(42));
///
/// // Different each run
/// let mut rng3 = create_rng(None);
/// ```
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `count` values uniformly distributed in `0..=999`.
///
/// # Errors
///
/// Returns an error if `count` is below the minimum input size of 10.
///
/// # Examples
///
/// ```
/// use chunksort_lib::random::{create_rng, generate_random};
///
/// let mut rng = create_rng(Some(7));
/// let values = generate_random(&mut rng, 25).unwrap();
/// assert_eq!(values.len(), 25);
/// assert!(values.iter().all(|v| (0..=999).contains(v)));
/// assert!(generate_random(&mut rng, 5).is_err());
/// ```
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<i64>> {
    validate_random_count(count)?;
    Ok((0..count).map(|_| rng.random_range(0..=MAX_RANDOM_VALUE)).collect())
}
