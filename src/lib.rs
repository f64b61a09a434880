//! # Tiny RSA
//!
//! Textbook RSA on 64-bit integers, small enough to break by hand:
//! - key pairs built from primes below 54772, so n stays under three billion
//! - messages over `A-Z` packed into numeric blocks below the modulus
//! - signing as encoding with the private exponent
//! - private key recovery by factoring the modulus
//!
//! ## Example
//!
//! ```rust
//! use tiny_rsa::rsa::{decode, encode, recover_private_key};
//!
//! // p = 61, q = 53
//! let encoded = encode(3233, 17, "HELLO").unwrap();
//! assert_eq!(encoded, "0328 0474 3206 ");
//!
//! let d = recover_private_key(3233, 17).unwrap();
//! assert_eq!(decode(3233, d, &encoded).unwrap(), "HELLOX");
//! ```

pub mod config;
pub mod error;
pub mod rsa;
pub mod ui;

pub use config::RsaConfig;
pub use error::{Result, RsaError};
pub use rsa::{KeyGenerator, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
