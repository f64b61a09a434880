// Block layout shared by the encoder and the decoder
// Two-digit letter codes packed into blocks below n, encoded blocks as wide as n

use crate::error::{Result, RsaError};

/// The 26 letters a message may contain, in code order.
pub static ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Largest letter code.
pub const MAX_CODE: u8 = 25;

/// Code of the letter used to fill the last block (`X`).
pub const PAD_CODE: u8 = 23;

/// Number of decimal digits of a positive `n`.
pub fn digit_count(n: i64) -> usize {
    debug_assert!(n > 0);
    n.ilog10() as usize + 1
}

/// Width in digits of a plaintext block for modulus `n`.
///
/// Grows "25", "2525", "252525", … and returns the width of the last
/// value that is still ≤ n. Zero means not even one letter fits.
pub fn compute_block_size(n: i64) -> usize {
    let mut width = 0;
    let mut value: i64 = 0;

    while let Some(next) = value.checked_mul(100).and_then(|v| v.checked_add(25)) {
        if next > n {
            break;
        }
        value = next;
        width += 2;
    }

    width
}

/// Letters per plaintext block, rejecting moduli that cannot hold one.
pub fn letters_per_block(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(RsaError::InvalidModulus(n));
    }
    match compute_block_size(n) / 2 {
        0 => Err(RsaError::ModulusTooSmall(n)),
        letters => Ok(letters),
    }
}

/// Code of an uppercase letter, `None` for anything else.
pub fn letter_code(c: char) -> Option<u8> {
    ALPHABET.iter().position(|&l| l == c).map(|i| i as u8)
}

/// Letter for a code in 0..=25.
pub fn code_letter(code: u8) -> Option<char> {
    ALPHABET.get(usize::from(code)).copied()
}

/// Translate a message into letter codes.
pub fn to_codes(message: &str) -> Result<Vec<u8>> {
    message
        .chars()
        .enumerate()
        .map(|(position, character)| {
            letter_code(character).ok_or(RsaError::InvalidCharacter { character, position })
        })
        .collect()
}

/// Group codes into block values of `letters` codes each, padding the last
/// block with `X`.
pub fn pack_blocks(codes: &[u8], letters: usize) -> Vec<i64> {
    codes
        .chunks(letters)
        .map(|chunk| {
            chunk
                .iter()
                .copied()
                .chain(std::iter::repeat(PAD_CODE))
                .take(letters)
                .fold(0i64, |acc, code| acc * 100 + i64::from(code))
        })
        .collect()
}

/// Split a zero-padded block back into letters.
pub fn unpack_block(block: &str) -> Result<String> {
    let unmappable = || RsaError::UnmappableBlock {
        block: block.to_string(),
    };

    if block.len() % 2 != 0 {
        return Err(unmappable());
    }

    block
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let code = (pair[0] - b'0') * 10 + (pair[1] - b'0');
            code_letter(code).ok_or_else(unmappable)
        })
        .collect()
}
