// RSA Module - Main module file
// Exports key generation, the block codec and key recovery

pub mod blocks;
pub mod decode;
pub mod encode;
pub mod keygen;
pub mod modular;
pub mod primality;
pub mod recovery;

pub use blocks::{compute_block_size, digit_count, ALPHABET};
pub use decode::{decode, verify};
pub use encode::{encode, sign};
pub use keygen::{generate_key_pair, KeyGenerator, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use modular::{euclidean_mod, extended_gcd, gcd, mod_inverse, mod_pow};
pub use primality::{is_probable_prime, is_probable_prime_with};
pub use recovery::{factor_modulus, recover, recover_private_key};
