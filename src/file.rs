//! Whole-file wrappers around byte encryption.
//!
//! Content is read and written in one piece; nothing is streamed.

use crate::encoding::{decrypt_bytes, encrypt_bytes};
use crate::encrypt::BitCiphertext;
use crate::error::Result;
use crate::keygen::{PublicKey, SecretKey};
use crate::params::Params;
use rand::Rng;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Read everything from `source` and encrypt it, 8 ciphertexts per byte.
pub fn encrypt_reader<R: Rng, S: Read>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    mut source: S,
) -> Result<Vec<BitCiphertext>> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    encrypt_bytes(rng, params, pk, &data)
}

/// Decrypt `cts` and write all recovered bytes to `sink`.
pub fn decrypt_to_writer<W: Write>(
    params: &Params,
    sk: &SecretKey,
    cts: &[BitCiphertext],
    mut sink: W,
) -> Result<()> {
    let data = decrypt_bytes(params, sk, cts)?;
    sink.write_all(&data)?;
    sink.flush()?;
    Ok(())
}

/// Encrypt the full content of the file at `path`.
pub fn encrypt_file<R: Rng, P: AsRef<Path>>(
    rng: &mut R,
    params: &Params,
    pk: &PublicKey,
    path: P,
) -> Result<Vec<BitCiphertext>> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let cts = encrypt_reader(rng, params, pk, file)?;
    debug!(path = %path.display(), bits = cts.len(), "encrypted file");
    Ok(cts)
}

/// Decrypt `cts` into the file at `path`, overwriting existing content.
pub fn decrypt_file<P: AsRef<Path>>(
    params: &Params,
    sk: &SecretKey,
    cts: &[BitCiphertext],
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    // The target is only written once decryption has succeeded.
    let mut data = Vec::new();
    decrypt_to_writer(params, sk, cts, &mut data)?;
    fs::write(path, &data)?;
    debug!(path = %path.display(), bytes = data.len(), "decrypted file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LweError;
    use crate::keygen::keygen;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn setup() -> (Params, SecretKey, PublicKey, StdRng) {
        let params = Params::new(16);
        let mut rng = StdRng::seed_from_u64(31);
        let (sk, pk) = keygen(&mut rng, &params).unwrap();
        (params, sk, pk, rng)
    }

    #[test]
    fn test_file_roundtrip_overwrites_target() {
        let (params, sk, pk, mut rng) = setup();
        let dir = tempdir().unwrap();
        let src = dir.path().join("plain.txt");
        let dst = dir.path().join("out.txt");
        fs::write(&src, "line one\nline two ✓\n").unwrap();
        fs::write(&dst, "stale content that is longer than the plaintext itself").unwrap();

        let cts = encrypt_file(&mut rng, &params, &pk, &src).unwrap();
        decrypt_file(&params, &sk, &cts, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_binary_content() {
        let (params, sk, pk, mut rng) = setup();
        let data = vec![0u8, 0xff, 0x80, 0x7f, 0xc3];
        let cts = encrypt_reader(&mut rng, &params, &pk, &data[..]).unwrap();
        let mut out = Vec::new();
        decrypt_to_writer(&params, &sk, &cts, &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_decrypt_file_rejects_invalid_modulus() {
        let (params, sk, pk, mut rng) = setup();
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.txt");
        fs::write(&dst, "keep").unwrap();

        let cts = encrypt_reader(&mut rng, &params, &pk, &b"x"[..]).unwrap();
        let err = decrypt_file(&Params::with_modulus(params.n, 0), &sk, &cts, &dst).unwrap_err();
        assert!(matches!(err, LweError::InvalidParams(_)));
        assert_eq!(fs::read_to_string(&dst).unwrap(), "keep");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let (params, _sk, pk, mut rng) = setup();
        let dir = tempdir().unwrap();
        let err = encrypt_file(&mut rng, &params, &pk, dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, LweError::Io(_)));
    }

    #[test]
    fn test_truncated_ciphertext_leaves_file_untouched() {
        let (params, sk, pk, mut rng) = setup();
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.txt");
        fs::write(&dst, "keep").unwrap();

        let cts = encrypt_reader(&mut rng, &params, &pk, &b"ab"[..]).unwrap();
        let err = decrypt_file(&params, &sk, &cts[..13], &dst).unwrap_err();
        assert!(matches!(err, LweError::Misaligned(13)));
        assert_eq!(fs::read_to_string(&dst).unwrap(), "keep");
    }
}
