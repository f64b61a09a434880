//! Error types for the tiny RSA library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RsaError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("Invalid character {character:?} at position {position}: only A-Z can be encoded")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid encoded message: found non-digit {character:?} at position {position}")]
    NonDigit { character: char, position: usize },

    #[error(
        "Invalid encoded message: {length} digits is not a multiple of the block width {width}"
    )]
    MisalignedBlocks { length: usize, width: usize },

    #[error("Invalid encoded message: block {block:?} is not below the modulus {n}")]
    BlockOutOfRange { block: String, n: i64 },

    #[error("Decoded block {block:?} does not map back onto the alphabet (wrong key?)")]
    UnmappableBlock { block: String },

    #[error("Invalid modulus {0}: must be positive")]
    InvalidModulus(i64),

    #[error("Modulus {0} is too small to hold a single letter block")]
    ModulusTooSmall(i64),

    #[error("Exponent {e} has no inverse modulo phi = {phi}")]
    NotInvertible { e: i64, phi: i64 },

    #[error("Modulus {0} has no divisor between 2 and n - 1")]
    NoFactorFound(i64),

    #[error("Gave up looking for {what} after {draws} random draws")]
    GenerationFailed { what: &'static str, draws: u64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RsaError {
    /// True for malformed messages handed to encode/decode, as opposed to bad
    /// keys or configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            RsaError::InvalidCharacter { .. }
                | RsaError::NonDigit { .. }
                | RsaError::MisalignedBlocks { .. }
                | RsaError::BlockOutOfRange { .. }
                | RsaError::UnmappableBlock { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(RsaError::InvalidCharacter { character: 'a', position: 0 }.is_invalid_input());
        assert!(RsaError::MisalignedBlocks { length: 7, width: 4 }.is_invalid_input());
        assert!(!RsaError::ModulusTooSmall(6).is_invalid_input());
        assert!(!RsaError::NoFactorFound(13).is_invalid_input());
    }

    #[test]
    fn test_messages() {
        let err = RsaError::MisalignedBlocks { length: 7, width: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid encoded message: 7 digits is not a multiple of the block width 4"
        );
    }
}
