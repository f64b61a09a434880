// Fermat primality test
// Scans every witness below a fixed bound instead of sampling random ones

use super::modular::{gcd, mod_pow};
use crate::config::DEFAULT_WITNESS_LIMIT;

/// Fermat test with the default witness bound of one million.
///
/// Every a in [1, 1_000_000) coprime to n must satisfy a^(n-1) ≡ 1 (mod n).
/// Carmichael numbers satisfy that for all coprime witnesses and are
/// reported as prime.
pub fn is_probable_prime(n: i64) -> bool {
    is_probable_prime_with(n, DEFAULT_WITNESS_LIMIT)
}

/// Fermat test scanning witnesses a in [1, witness_limit)
pub fn is_probable_prime_with(n: i64, witness_limit: i64) -> bool {
    if n < 2 {
        return false;
    }

    for a in 1..witness_limit {
        if gcd(a, n) == 1 && mod_pow(a, n - 1, n) != 1 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is_prime = vec![true; limit];
        is_prime[0] = false;
        is_prime[1] = false;
        let mut i = 2;
        while i * i < limit {
            if is_prime[i] {
                for j in (i * i..limit).step_by(i) {
                    is_prime[j] = false;
                }
            }
            i += 1;
        }
        is_prime
    }

    #[test]
    fn test_is_probable_prime() {
        for p in [2, 3, 7, 53, 61, 54767] {
            assert!(is_probable_prime(p), "{} is prime", p);
        }
        for c in [4, 9, 15, 3233, 54771] {
            assert!(!is_probable_prime(c), "{} is composite", c);
        }
    }

    #[test]
    fn test_below_two_is_not_prime() {
        assert!(!is_probable_prime(0));
        assert!(!is_probable_prime(1));
        assert!(!is_probable_prime(-7));
    }

    #[test]
    fn test_agrees_with_sieve_apart_from_carmichael_numbers() {
        const LIMIT: usize = 3000;
        let carmichael = [561, 1105, 1729, 2465, 2821];
        let primes = sieve(LIMIT);

        for n in 2..LIMIT {
            // witnesses reach past n, so every residue class gets tried
            let verdict = is_probable_prime_with(n as i64, LIMIT as i64);
            if carmichael.contains(&n) {
                assert!(verdict, "{} is a Fermat liar for every coprime base", n);
            } else {
                assert_eq!(verdict, primes[n], "n = {}", n);
            }
        }
    }

    #[test]
    fn test_composites_with_small_factor() {
        for p in [2i64, 3, 5, 7] {
            for k in [11i64, 101, 5003] {
                assert!(!is_probable_prime_with(p * k, 1000), "{} * {}", p, k);
            }
        }
    }
}
