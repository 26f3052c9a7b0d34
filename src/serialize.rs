//! Serialization: BitCiphertext ↔ bytes.
//!
//! Format per bit: a[n] | b
//! Each entry is a little-endian u64 (8 bytes), so one bit takes (n + 1) × 8
//! bytes. A sequence is the plain concatenation of its bits; there is no
//! header, so the reader must know n.

use crate::encrypt::BitCiphertext;
use crate::keygen::read_u64s;

/// Bytes per serialized bit ciphertext for dimension `n`.
pub const fn bit_ct_bytes(n: usize) -> usize {
    (n + 1) * 8
}

/// Serialize one bit ciphertext.
pub fn serialize_bit(ct: &BitCiphertext) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bit_ct_bytes(ct.a.len()));
    write_bit(&mut buf, ct);
    buf
}

fn write_bit(buf: &mut Vec<u8>, ct: &BitCiphertext) {
    for &val in ct.a.iter() {
        buf.extend_from_slice(&val.to_le_bytes());
    }
    buf.extend_from_slice(&ct.b.to_le_bytes());
}

/// Deserialize one bit ciphertext. Returns `None` on a length mismatch.
pub fn deserialize_bit(data: &[u8], n: usize) -> Option<BitCiphertext> {
    if data.len() != bit_ct_bytes(n) {
        return None;
    }
    let mut vals = read_u64s(data)?;
    let b = vals.pop()?;
    Some(BitCiphertext { a: vals, b })
}

/// Serialize an ordered ciphertext sequence.
pub fn serialize_ciphertexts(cts: &[BitCiphertext]) -> Vec<u8> {
    let per_bit = cts.first().map_or(0, |ct| bit_ct_bytes(ct.a.len()));
    let mut buf = Vec::with_capacity(per_bit * cts.len());
    for ct in cts {
        write_bit(&mut buf, ct);
    }
    buf
}

/// Deserialize a ciphertext sequence, preserving order.
///
/// Returns `None` if `data` is not a whole number of bit ciphertexts.
pub fn deserialize_ciphertexts(data: &[u8], n: usize) -> Option<Vec<BitCiphertext>> {
    let per_bit = bit_ct_bytes(n);
    if data.len() % per_bit != 0 {
        return None;
    }
    data.chunks_exact(per_bit)
        .map(|chunk| deserialize_bit(chunk, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ct(n: usize, seed: u64) -> BitCiphertext {
        BitCiphertext {
            a: (0..n as u64).map(|i| i * 1000 + seed).collect(),
            b: 0xDEAD_BEEF + seed,
        }
    }

    #[test]
    fn test_serialize_bit_layout() {
        let ct = sample_ct(3, 1);
        let bytes = serialize_bit(&ct);
        assert_eq!(bytes.len(), bit_ct_bytes(3));
        assert_eq!(&bytes[8..16], &1001u64.to_le_bytes());
        assert_eq!(&bytes[24..32], &(0xDEAD_BEEFu64 + 1).to_le_bytes());
        assert_eq!(deserialize_bit(&bytes, 3), Some(ct));
    }

    #[test]
    fn test_sequence_preserves_order() {
        let cts: Vec<_> = (0..5).map(|seed| sample_ct(4, seed)).collect();
        let bytes = serialize_ciphertexts(&cts);
        assert_eq!(bytes.len(), 5 * bit_ct_bytes(4));
        assert_eq!(deserialize_ciphertexts(&bytes, 4), Some(cts));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(serialize_ciphertexts(&[]).is_empty());
        assert_eq!(deserialize_ciphertexts(&[], 4), Some(vec![]));
    }

    #[test]
    fn test_bad_lengths() {
        let bytes = serialize_ciphertexts(&[sample_ct(4, 0), sample_ct(4, 1)]);
        assert!(deserialize_ciphertexts(&bytes[..bytes.len() - 1], 4).is_none());
        // Wrong dimension does not divide the buffer.
        assert!(deserialize_ciphertexts(&bytes, 6).is_none());
        assert!(deserialize_bit(&bytes, 4).is_none());
    }
}
