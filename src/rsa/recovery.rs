// Private key recovery
// Factors n by trial division, then derives d as key generation does

use log::info;

use super::keygen::{RsaPrivateKey, RsaPublicKey};
use super::modular::mod_inverse;
use crate::error::{Result, RsaError};

/// Split n into (p, q) with p the first divisor met scanning down from n - 1.
///
/// For n = p * q with both factors prime, p ends up the larger factor.
pub fn factor_modulus(n: i64) -> Result<(i64, i64)> {
    if n <= 0 {
        return Err(RsaError::InvalidModulus(n));
    }

    let p = (2..n)
        .rev()
        .find(|i| n % i == 0)
        .ok_or(RsaError::NoFactorFound(n))?;

    Ok((p, n / p))
}

/// Derive the private exponent for the public key (n, e).
pub fn recover_private_key(n: i64, e: i64) -> Result<i64> {
    let (p, q) = factor_modulus(n)?;
    let phi = (p - 1) * (q - 1);
    let d = mod_inverse(e, phi).ok_or(RsaError::NotInvertible { e, phi })?;

    info!("factored n = {} as {} x {}, d = {}", n, p, q, d);
    Ok(d)
}

/// Recover the full private key for a public key.
pub fn recover(public_key: &RsaPublicKey) -> Result<RsaPrivateKey> {
    let d = recover_private_key(public_key.n, public_key.e)?;
    Ok(RsaPrivateKey { n: public_key.n, d })
}
