//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LweError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Dimension {n} too small: encryption sums {required} distinct public-key rows")]
    Dimension { n: usize, required: usize },

    #[error("Invalid bit value {0}, expected 0 or 1")]
    InvalidBit(u8),

    #[error("Invalid character {ch:?} at position {pos}, bitstrings use only '0' and '1'")]
    Alphabet { ch: char, pos: usize },

    #[error("Bitstring length {0} is not a multiple of 8")]
    Misaligned(usize),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Bitstring is not a valid integer: {0}")]
    Integer(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LweError>;
