// Modular arithmetic over i64
// Every residue handed back lies in [0, modulus) for a positive modulus

use num_integer::Integer;
use num_traits::{One, Zero};

/// Remainder of a / b with the sign of b (or zero), so a positive modulus
/// never produces a negative residue.
///
/// Panics if `b` is zero.
pub fn euclidean_mod(a: i64, b: i64) -> i64 {
    a.mod_floor(&b)
}

/// (a * b) mod modulus without overflowing the intermediate product
pub fn mul_mod(a: i64, b: i64, modulus: i64) -> i64 {
    if let Some(product) = a.checked_mul(b) {
        return euclidean_mod(product, modulus);
    }
    let product = i128::from(a) * i128::from(b);
    // |result| < |modulus|, so it fits back into i64
    product.mod_floor(&i128::from(modulus)) as i64
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply, scanning the exponent from its low bit upwards.
///
/// `modulus` must be positive. A zero exponent yields `1 mod modulus`;
/// negative exponents are treated as zero.
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> i64 {
    if modulus.is_one() {
        return i64::zero();
    }

    let mut result = i64::one();
    let mut base = euclidean_mod(base, modulus);
    let mut exp = exponent;

    while exp > 0 {
        if exp.is_odd() {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }

    result
}

/// Greatest common divisor (Euclid)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        (a, b) = (b, euclidean_mod(a, b));
    }
    a
}

/// Extended Euclidean Algorithm
/// Returns Bezout coefficients (s, t) such that a*s + b*t = gcd(a, b)
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while !r.is_zero() {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    (old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if the inverse doesn't exist
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 0 || gcd(a, m) != 1 {
        return None;
    }

    let (s, _) = extended_gcd(a, m);
    if s < 0 {
        Some(s + m)
    } else {
        Some(s)
    }
}
