//! Encoding layer: bitstrings, text, integers and raw bytes on top of
//! single-bit encryption.
//!
//! Text is carried as its UTF-8 bytes, each written as exactly 8 binary
//! digits (MSB first), so `string_to_binary` and `binary_to_string` are
//! inverses. Integers use their minimal binary form.

use crate::decrypt::decrypt_bit;
use crate::encrypt::{encrypt_bit, BitCiphertext};
use crate::error::{LweError, Result};
use crate::keygen::{PublicKey, SecretKey};
use crate::params::Params;
use rand::Rng;
use tracing::debug;

/// Parse a bitstring over {'0', '1'} into bits.
fn parse_bits(bits: &str) -> Result<Vec<u8>> {
    bits.chars()
        .enumerate()
        .map(|(pos, ch)| match ch {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(LweError::Alphabet { ch, pos }),
        })
        .collect()
}

/// Encrypt a bitstring, one ciphertext per character.
///
/// The whole input is validated before anything is encrypted.
pub fn encrypt_string<R: Rng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    bits: &str,
) -> Result<Vec<BitCiphertext>> {
    let bits = parse_bits(bits)?;
    debug!(len = bits.len(), "encrypting bitstring");
    bits.into_iter()
        .map(|bit| encrypt_bit(rng, params, pk, bit))
        .collect()
}

/// Decrypt a ciphertext sequence back into a bitstring.
pub fn decrypt_string(params: &Params, sk: &SecretKey, cts: &[BitCiphertext]) -> Result<String> {
    debug!(len = cts.len(), "decrypting bitstring");
    cts.iter()
        .map(|ct| Ok(if decrypt_bit(params, sk, ct)? == 1 { '1' } else { '0' }))
        .collect()
}

/// Bytes as 8 binary digits each, MSB first.
pub fn bytes_to_binary(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{:08b}", byte)).collect()
}

/// Inverse of `bytes_to_binary`.
pub fn binary_to_bytes(bits: &str) -> Result<Vec<u8>> {
    let bits = parse_bits(bits)?;
    if bits.len() % 8 != 0 {
        return Err(LweError::Misaligned(bits.len()));
    }
    Ok(bits
        .chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |acc, &b| (acc << 1) | b))
        .collect())
}

/// Text to bitstring, 8 digits per UTF-8 byte.
pub fn string_to_binary(text: &str) -> String {
    bytes_to_binary(text.as_bytes())
}

/// Bitstring to text, reading fixed 8-bit groups from the left.
pub fn binary_to_string(bits: &str) -> Result<String> {
    Ok(String::from_utf8(binary_to_bytes(bits)?)?)
}

/// Minimal binary representation, no padding ("0" for zero).
pub fn int_to_binary(value: u64) -> String {
    format!("{:b}", value)
}

pub fn binary_to_int(bits: &str) -> Result<u64> {
    // from_str_radix accepts a leading '+', which is not a bit.
    parse_bits(bits)?;
    Ok(u64::from_str_radix(bits, 2)?)
}

pub fn encrypt_bytes<R: Rng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    data: &[u8],
) -> Result<Vec<BitCiphertext>> {
    encrypt_string(rng, params, pk, &bytes_to_binary(data))
}

pub fn decrypt_bytes(params: &Params, sk: &SecretKey, cts: &[BitCiphertext]) -> Result<Vec<u8>> {
    binary_to_bytes(&decrypt_string(params, sk, cts)?)
}

pub fn encrypt_text<R: Rng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    text: &str,
) -> Result<Vec<BitCiphertext>> {
    encrypt_string(rng, params, pk, &string_to_binary(text))
}

pub fn decrypt_text(params: &Params, sk: &SecretKey, cts: &[BitCiphertext]) -> Result<String> {
    binary_to_string(&decrypt_string(params, sk, cts)?)
}

pub fn encrypt_int<R: Rng>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    value: u64,
) -> Result<Vec<BitCiphertext>> {
    encrypt_string(rng, params, pk, &int_to_binary(value))
}

pub fn decrypt_int(params: &Params, sk: &SecretKey, cts: &[BitCiphertext]) -> Result<u64> {
    binary_to_int(&decrypt_string(params, sk, cts)?)
}
