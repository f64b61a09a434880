// Message encoding and signing
// Letters -> numeric blocks -> block^exponent mod n, written at a fixed width

use log::debug;

use super::blocks::{digit_count, letters_per_block, pack_blocks, to_codes};
use super::modular::mod_pow;
use crate::error::Result;

/// Encode `message` (letters A-Z only) under the key (n, exponent).
///
/// Each encoded block is zero-padded to the digit count of `n` and followed
/// by one space, trailing space included.
pub fn encode(n: i64, exponent: i64, message: &str) -> Result<String> {
    let letters = letters_per_block(n)?;
    let codes = to_codes(message)?;
    let width = digit_count(n);

    debug!("message: {:?}", message);
    debug!("letter codes: {:?}", codes);
    debug!("letters per block: {}", letters);

    let blocks = pack_blocks(&codes, letters);
    debug!("blocks: {:?}", blocks);

    let mut encoded = String::with_capacity(blocks.len() * (width + 1));
    for block in blocks {
        let c = mod_pow(block, exponent, n);
        encoded.push_str(&format!("{:0width$} ", c, width = width));
    }

    debug!("encoded blocks: {:?}", encoded);
    Ok(encoded)
}

/// Sign a message with the private exponent.
/// The signature is the message encoded under d; nothing is hashed.
pub fn sign(n: i64, d: i64, message: &str) -> Result<String> {
    encode(n, d, message)
}
