//! Scheme parameters and derived constants.

use crate::error::{LweError, Result};

/// Default secret dimension.
pub const DEFAULT_N: usize = 256;

/// The default modulus is the smallest power of two ≥ MODULUS_FACTOR · n.
pub const MODULUS_FACTOR: u64 = 50;

/// Number of distinct public-key rows summed into one bit ciphertext.
pub const ROWS_PER_BIT: usize = 3;

/// Smallest power of two ≥ 50·n, or `None` if it does not fit in a u64.
pub const fn default_modulus(n: usize) -> Option<u64> {
    match MODULUS_FACTOR.checked_mul(n as u64) {
        Some(x) => x.checked_next_power_of_two(),
        None => None,
    }
}

/// Dimension and modulus shared by key generation, encryption and decryption.
///
/// Mixing values across a key pair is not detected: decryption simply returns
/// wrong bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Secret dimension; the public matrix is n×n.
    pub n: usize,
    /// Ciphertext modulus.
    pub q: u64,
}

impl Params {
    /// Parameters for dimension `n` with the default modulus.
    ///
    /// If the default modulus overflows, q is left at 0 and `validate` fails.
    pub const fn new(n: usize) -> Self {
        let q = match default_modulus(n) {
            Some(q) => q,
            None => 0,
        };
        Self { n, q }
    }

    /// Like `new`, but reports an unrepresentable default modulus.
    pub fn try_new(n: usize) -> Result<Self> {
        let q = default_modulus(n).ok_or_else(|| {
            LweError::InvalidParams(format!("default modulus for n = {} overflows u64", n))
        })?;
        let params = Self { n, q };
        params.validate()?;
        Ok(params)
    }

    pub const fn with_modulus(n: usize, q: u64) -> Self {
        Self { n, q }
    }

    /// ⌊q/2⌋, added to the scalar part when encrypting a 1.
    pub const fn half_q(&self) -> u64 {
        self.q / 2
    }

    /// Decision threshold on the centered distance.
    pub const fn quarter_q(&self) -> u64 {
        self.q / 4
    }

    /// Standard deviation of the key-generation noise, 1/√n.
    pub fn noise_sigma(&self) -> f64 {
        1.0 / (self.n as f64).sqrt()
    }

    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(LweError::InvalidParams("dimension n must be at least 1".into()));
        }
        if self.q < 2 {
            return Err(LweError::InvalidParams(format!(
                "modulus q must be at least 2, got {}",
                self.q
            )));
        }
        Ok(())
    }

    /// Fails unless n is large enough to pick ROWS_PER_BIT distinct rows.
    pub fn check_encryptable(&self) -> Result<()> {
        if self.n < ROWS_PER_BIT {
            return Err(LweError::Dimension { n: self.n, required: ROWS_PER_BIT });
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(DEFAULT_N)
    }
}
