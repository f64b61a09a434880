// Message decoding and signature verification
// Fixed-width encoded blocks -> block^exponent mod n -> letters

use log::debug;

use super::blocks::{compute_block_size, digit_count, letters_per_block, unpack_block};
use super::modular::mod_pow;
use crate::error::{Result, RsaError};

/// Decode a message produced by [`encode`](super::encode::encode).
///
/// Whitespace between blocks is optional. The remaining digits must split
/// evenly into blocks as wide as `n` has digits.
pub fn decode(n: i64, exponent: i64, encoded: &str) -> Result<String> {
    letters_per_block(n)?;

    let mut digits = Vec::with_capacity(encoded.len());
    for (position, character) in encoded.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !character.is_ascii_digit() {
            return Err(RsaError::NonDigit { character, position });
        }
        digits.push(character as u8 - b'0');
    }

    let width = digit_count(n);
    if digits.len() % width != 0 {
        return Err(RsaError::MisalignedBlocks {
            length: digits.len(),
            width,
        });
    }

    let block_size = compute_block_size(n);
    debug!("encoded block width: {}, block size: {}", width, block_size);

    let mut message = String::with_capacity(digits.len() / width * block_size / 2);
    for chunk in digits.chunks(width) {
        let c = chunk_value(chunk)
            .filter(|&c| c < n)
            .ok_or_else(|| RsaError::BlockOutOfRange {
                block: chunk.iter().map(|&d| char::from(b'0' + d)).collect(),
                n,
            })?;
        let m = mod_pow(c, exponent, n);
        let block = format!("{:0width$}", m, width = block_size);
        debug!("block {} -> {}", c, block);

        if block.len() != block_size {
            return Err(RsaError::UnmappableBlock { block });
        }
        message.push_str(&unpack_block(&block)?);
    }

    debug!("decoded message: {:?}", message);
    Ok(message)
}

/// Numeric value of a digit chunk, `None` if it does not fit in i64
fn chunk_value(chunk: &[u8]) -> Option<i64> {
    chunk
        .iter()
        .try_fold(0i64, |acc, &d| acc.checked_mul(10)?.checked_add(i64::from(d)))
}

/// Verify a signature with the public exponent, recovering the signed text.
pub fn verify(n: i64, e: i64, signature: &str) -> Result<String> {
    decode(n, e, signature)
}
