//! Bit encryption by row-collapsing the public key.

use crate::arith::{add_assign, addmod};
use crate::error::{LweError, Result};
use crate::keygen::PublicKey;
use crate::params::{Params, ROWS_PER_BIT};
use crate::sampling::sample_distinct_rows;
use rand::Rng;

/// Ciphertext of a single bit: (a, b) with a ∈ Z_q^n and b ∈ Z_q.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitCiphertext {
    pub a: Vec<u64>,
    pub b: u64,
}

/// Encrypt one bit (0 or 1).
///
/// Sums ROWS_PER_BIT distinct random rows of the public key, so the
/// accumulated error is the sum of that many key-generation noise terms.
/// A 1 is embedded by adding ⌊q/2⌋ to the scalar part.
pub fn encrypt_bit<R: Rng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    bit: u8,
) -> Result<BitCiphertext> {
    if bit > 1 {
        return Err(LweError::InvalidBit(bit));
    }
    params.validate()?;
    params.check_encryptable()?;
    let Params { n, q } = *params;
    if pk.dim() != n || pk.a.len() != n * n {
        return Err(LweError::InvalidParams(format!(
            "public key has dimension {}, params expect {}",
            pk.dim(),
            n
        )));
    }

    let mut a = vec![0u64; n];
    let mut b = 0u64;
    for i in sample_distinct_rows(rng, n, ROWS_PER_BIT) {
        add_assign(&mut a, pk.row(i), q);
        b = addmod(b, pk.b[i], q);
    }

    if bit == 1 {
        b = addmod(b, params.half_q(), q);
    }

    Ok(BitCiphertext { a, b })
}
