//! LWE public-key encryption of single bits, with an encoding layer for
//! bitstrings, text, integers and files.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! Parameters and noise are illustrative. NOT audited, NOT constant-time,
//! NOT secure against modern attacks.

pub mod params;
pub mod error;
pub mod arith;
pub mod sampling;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;
pub mod encoding;
pub mod file;
pub mod serialize;

pub use error::{LweError, Result};
pub use params::Params;
pub use keygen::{keygen, PublicKey, SecretKey};
pub use encrypt::{encrypt_bit, BitCiphertext};
pub use decrypt::decrypt_bit;
