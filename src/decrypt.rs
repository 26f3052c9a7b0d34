//! Threshold decryption of a bit ciphertext.
//!
//! b - ⟨a, s⟩ is the accumulated noise for a 0 and ⌊q/2⌋ plus noise for a 1.
//! The centered distance from 0 is compared against q/4.

use crate::arith::{centered_abs, inner_product, submod};
use crate::encrypt::BitCiphertext;
use crate::error::Result;
use crate::keygen::SecretKey;
use crate::params::Params;

/// Decrypt a single bit ciphertext.
///
/// The distance is taken the short way round the ring, min(d, q - d) with
/// d = (b - ⟨a, s⟩) mod q, rather than the plain residue d. Both give the same
/// bit whenever the noise is small; they differ for ciphertexts that do not
/// belong to `sk`, e.g. d = 3q/4 reads as 0 here.
///
/// There is no integrity check: a ciphertext built under another modulus or
/// another key decrypts to an arbitrary bit. Only invalid `params` fail.
pub fn decrypt_bit(params: &Params, sk: &SecretKey, ct: &BitCiphertext) -> Result<u8> {
    params.validate()?;
    let q = params.q;
    let m = inner_product(&ct.a, &sk.s, q);
    let d = centered_abs(submod(ct.b % q, m, q), q);
    Ok(u8::from(d > params.quarter_q()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{decrypt_string, encrypt_string};
    use crate::encrypt::encrypt_bit;
    use crate::error::LweError;
    use crate::keygen::keygen;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_threshold() {
        let params = Params::new(3);
        let q = params.q;
        let sk = SecretKey { s: vec![0, 0, 0] };
        let ct = |b: u64| BitCiphertext { a: vec![1, 2, 3], b };
        let dec = |b: u64| decrypt_bit(&params, &sk, &ct(b)).unwrap();

        assert_eq!(dec(0), 0);
        assert_eq!(dec(q / 4), 0);
        assert_eq!(dec(q / 4 + 1), 1);
        assert_eq!(dec(q / 2), 1);
        // Centered distance: 3q/4 is q/4 away from 0.
        assert_eq!(dec(q - q / 4), 0);
        // Small negative noise wraps to q - 1 and still reads as 0.
        assert_eq!(dec(q - 1), 0);
    }

    #[test]
    fn test_roundtrip_small_dimension() {
        let params = Params::new(3);
        let mut rng = StdRng::seed_from_u64(11);
        let (sk, pk) = keygen(&mut rng, &params).unwrap();
        for i in 0..2000 {
            let bit = (i % 2) as u8;
            let ct = encrypt_bit(&mut rng, &params, &pk, bit).unwrap();
            assert_eq!(decrypt_bit(&params, &sk, &ct).unwrap(), bit);
        }
    }

    #[test]
    fn test_rejects_invalid_modulus() {
        let sk = SecretKey { s: vec![1, 2, 3] };
        let ct = BitCiphertext { a: vec![4, 5, 6], b: 7 };
        for q in [0, 1] {
            assert!(matches!(
                decrypt_bit(&Params::with_modulus(3, q), &sk, &ct),
                Err(LweError::InvalidParams(_))
            ));
        }
    }

    #[test]
    fn test_wrong_key_gives_wrong_bits() {
        let params = Params::new(16);
        let mut rng = StdRng::seed_from_u64(12);
        let (sk, pk) = keygen(&mut rng, &params).unwrap();
        let (other_sk, _) = keygen(&mut rng, &params).unwrap();

        let bits: String = (0..256).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect();
        let cts = encrypt_string(&mut rng, &params, &pk, &bits).unwrap();

        assert_eq!(decrypt_string(&params, &sk, &cts).unwrap(), bits);
        assert_ne!(decrypt_string(&params, &other_sk, &cts).unwrap(), bits);
    }

    #[test]
    fn test_wrong_modulus_gives_wrong_bits() {
        let params = Params::new(16);
        let mut rng = StdRng::seed_from_u64(14);
        let (sk, pk) = keygen(&mut rng, &params).unwrap();

        let bits: String = (0..256).map(|_| if rng.gen::<bool>() { '1' } else { '0' }).collect();
        let cts = encrypt_string(&mut rng, &params, &pk, &bits).unwrap();

        let other = Params::with_modulus(16, params.q - 3);
        assert_ne!(decrypt_string(&other, &sk, &cts).unwrap(), bits);
    }
}
