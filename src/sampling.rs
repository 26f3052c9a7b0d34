//! Uniform, Gaussian and row-index sampling.
//!
//! ⚠️ NOT CONSTANT-TIME. The Gaussian is a floating-point normal truncated
//! toward zero, not a proper discrete Gaussian sampler.

use crate::error::{LweError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Sample `len` values uniformly in [0, modulus).
pub fn sample_uniform<R: Rng>(rng: &mut R, len: usize, modulus: u64) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..modulus)).collect()
}

/// Sample `len` signed noise values from Normal(0, sigma), each truncated
/// toward zero.
pub fn sample_gaussian<R: Rng>(rng: &mut R, len: usize, sigma: f64) -> Result<Vec<i64>> {
    let normal = Normal::new(0.0, sigma)
        .map_err(|e| LweError::InvalidParams(format!("noise sigma {}: {}", sigma, e)))?;
    Ok((0..len).map(|_| normal.sample(rng).trunc() as i64).collect())
}

/// Pick `amount` distinct indices from 0..n, uniformly without replacement.
///
/// Callers must ensure `amount <= n`.
pub fn sample_distinct_rows<R: Rng>(rng: &mut R, n: usize, amount: usize) -> Vec<usize> {
    rand::seq::index::sample(rng, n, amount).into_vec()
}
