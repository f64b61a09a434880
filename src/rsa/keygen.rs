// RSA Key Generation
// Random primes below the configured limit, a coprime public exponent and its inverse

use std::fmt;

use log::{debug, info, trace};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::blocks::compute_block_size;
use super::decode::{decode, verify};
use super::encode::{encode, sign};
use super::modular::{gcd, mod_inverse};
use super::primality::is_probable_prime_with;
use crate::config::RsaConfig;
use crate::error::{Result, RsaError};

/// RSA Public Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: i64, // Modulus
    pub e: i64, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: i64, // Modulus (same as public)
    pub d: i64, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encode a message for the holder of the private key
    pub fn encode(&self, message: &str) -> Result<String> {
        encode(self.n, self.e, message)
    }

    /// Recover the text of a signature made with the matching private key
    pub fn verify(&self, signature: &str) -> Result<String> {
        verify(self.n, self.e, signature)
    }
}

impl RsaPrivateKey {
    pub fn decode(&self, encoded: &str) -> Result<String> {
        decode(self.n, self.d, encoded)
    }

    pub fn sign(&self, message: &str) -> Result<String> {
        sign(self.n, self.d, message)
    }
}

impl RsaKeyPair {
    pub fn new(n: i64, e: i64, d: i64) -> Self {
        Self {
            public_key: RsaPublicKey { n, e },
            private_key: RsaPrivateKey { n, d },
        }
    }

    /// The key as the triple (n, e, d)
    pub fn triple(&self) -> (i64, i64, i64) {
        (self.public_key.n, self.public_key.e, self.private_key.d)
    }
}

impl fmt::Display for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, e, d) = self.triple();
        write!(f, "n: {}\ne: {}\nd: {}", n, e, d)
    }
}

/// Draws primes and exponents from a cryptographically secure source
pub struct KeyGenerator<R: RngCore + CryptoRng> {
    rng: R,
    config: RsaConfig,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the operating system's RNG
    pub fn new(config: RsaConfig) -> Result<Self> {
        Self::with_rng(OsRng, config)
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    pub fn with_rng(rng: R, config: RsaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    pub fn config(&self) -> &RsaConfig {
        &self.config
    }

    /// Two random bytes read as a little-endian 16-bit number
    fn draw_u16(&mut self) -> i64 {
        let mut bytes = [0u8; 2];
        self.rng.fill_bytes(&mut bytes);
        i64::from(u16::from_le_bytes(bytes))
    }

    /// Draw until `accept` holds, giving up after `max_draws` when configured
    fn sample<F>(&mut self, what: &'static str, mut accept: F) -> Result<i64>
    where
        F: FnMut(i64) -> bool,
    {
        let mut draws: u64 = 0;
        loop {
            if let Some(max) = self.config.max_draws {
                if draws >= max {
                    return Err(RsaError::GenerationFailed { what, draws });
                }
            }
            draws += 1;

            let candidate = self.draw_u16();
            if accept(candidate) {
                debug!("found {} {} after {} draws", what, candidate, draws);
                return Ok(candidate);
            }
            trace!("rejected {} candidate {}", what, candidate);
        }
    }

    /// Random prime no larger than the configured limit
    pub fn generate_random_prime(&mut self) -> Result<i64> {
        let limit = self.config.prime_limit;
        let witnesses = self.config.witness_limit;
        self.sample("prime", |p| p <= limit && is_probable_prime_with(p, witnesses))
    }

    /// Random e with 0 < e < phi and gcd(e, phi) = 1
    pub fn generate_coprime_exponent(&mut self, phi: i64) -> Result<i64> {
        if phi < 2 {
            return Err(RsaError::InvalidParameter(format!(
                "phi must be at least 2, got {}",
                phi
            )));
        }
        self.sample("public exponent", |e| e > 0 && e < phi && gcd(e, phi) == 1)
    }

    /// Generate a key pair (n, e, d)
    ///
    /// Prime pairs whose modulus cannot hold a single letter block are
    /// redrawn, as is p == q unless the configuration allows it. Redrawn
    /// pairs count against `max_draws` like single draws do.
    pub fn generate_key_pair(&mut self) -> Result<RsaKeyPair> {
        let mut pairs: u64 = 0;
        let (p, q) = loop {
            if let Some(max) = self.config.max_draws {
                if pairs >= max {
                    return Err(RsaError::GenerationFailed {
                        what: "prime pair",
                        draws: pairs,
                    });
                }
            }
            pairs += 1;

            let p = self.generate_random_prime()?;
            let q = self.generate_random_prime()?;

            if p == q && !self.config.allow_equal_primes {
                debug!("drew p = q = {}, redrawing", p);
                continue;
            }
            if compute_block_size(p * q) == 0 {
                debug!("modulus {} too small for a letter block, redrawing", p * q);
                continue;
            }
            break (p, q);
        };

        let n = p * q;
        let phi = (p - 1) * (q - 1);
        let e = self.generate_coprime_exponent(phi)?;
        let d = mod_inverse(e, phi).ok_or(RsaError::NotInvertible { e, phi })?;

        info!("generated key n = {} ({} x {}), e = {}", n, p, q, e);
        Ok(RsaKeyPair::new(n, e, d))
    }
}

/// Generate a key pair with the default configuration and the OS RNG
pub fn generate_key_pair() -> Result<RsaKeyPair> {
    KeyGenerator::new(RsaConfig::default())?.generate_key_pair()
}
