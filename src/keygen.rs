//! Key generation.

use crate::arith::{addmod, from_signed, inner_product};
use crate::error::Result;
use crate::params::Params;
use crate::sampling::{sample_gaussian, sample_uniform};
use rand::Rng;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key: a vector s of n residues mod q.
///
/// Zeroized on drop to prevent secret material from lingering in memory.
/// Does not implement `Debug` to prevent accidental logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub s: Vec<u64>,
}

impl SecretKey {
    /// Serialized byte size for dimension `n`.
    pub const fn bytes_len(n: usize) -> usize {
        n * 8
    }

    pub fn dim(&self) -> usize {
        self.s.len()
    }

    /// Serialize to bytes (little-endian u64 array).
    ///
    /// The returned buffer is zeroized on drop.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut buf = Vec::with_capacity(Self::bytes_len(self.s.len()));
        for &val in self.s.iter() {
            buf.extend_from_slice(&val.to_le_bytes());
        }
        Zeroizing::new(buf)
    }

    /// Deserialize from bytes.
    ///
    /// Returns `None` if `data` is not exactly `bytes_len(n)` long.
    pub fn from_bytes(data: &[u8], n: usize) -> Option<Self> {
        if data.len() != Self::bytes_len(n) {
            return None;
        }
        Some(SecretKey { s: read_u64s(data)? })
    }
}

/// Public key: (A, b = A·s + e mod q).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// n×n matrix, row-major.
    pub a: Vec<u64>,
    /// Length-n vector.
    pub b: Vec<u64>,
}

impl PublicKey {
    /// Serialized byte size for dimension `n`.
    pub const fn bytes_len(n: usize) -> usize {
        (n * n + n) * 8
    }

    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Row `i` of A.
    pub fn row(&self, i: usize) -> &[u64] {
        let n = self.dim();
        &self.a[i * n..(i + 1) * n]
    }

    /// Serialize to bytes: A row-major, then b (little-endian u64s).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::bytes_len(self.dim()));
        for arr in [&self.a, &self.b] {
            for &val in arr.iter() {
                buf.extend_from_slice(&val.to_le_bytes());
            }
        }
        buf
    }

    /// Deserialize from bytes.
    ///
    /// Returns `None` if `data` is not exactly `bytes_len(n)` long.
    pub fn from_bytes(data: &[u8], n: usize) -> Option<Self> {
        if data.len() != Self::bytes_len(n) {
            return None;
        }
        let (a_bytes, b_bytes) = data.split_at(n * n * 8);
        Some(PublicKey { a: read_u64s(a_bytes)?, b: read_u64s(b_bytes)? })
    }
}

pub(crate) fn read_u64s(data: &[u8]) -> Option<Vec<u64>> {
    data.chunks_exact(8)
        .map(|c| c.try_into().ok().map(u64::from_le_bytes))
        .collect()
}

/// Generate a keypair.
pub fn keygen<R: Rng>(rng: &mut R, params: &Params) -> Result<(SecretKey, PublicKey)> {
    params.validate()?;
    let Params { n, q } = *params;

    let a = sample_uniform(rng, n * n, q);
    let s = sample_uniform(rng, n, q);
    let e = sample_gaussian(rng, n, params.noise_sigma())?;

    // b_i = <A_i, s> + e_i
    let b = a
        .chunks_exact(n)
        .zip(&e)
        .map(|(row, &e_i)| addmod(inner_product(row, &s, q), from_signed(e_i, q), q))
        .collect();

    debug!(n, q, nonzero_noise = e.iter().filter(|&&x| x != 0).count(), "generated LWE key pair");

    Ok((SecretKey { s }, PublicKey { a, b }))
}
