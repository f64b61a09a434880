// Key generation settings
// Bounds for prime search, the Fermat witness scan and rejection sampling

use crate::error::{Result, RsaError};

/// Largest prime the generator will accept: sqrt(3 * 10^9), so n = p * q
/// stays below three billion.
pub const DEFAULT_PRIME_LIMIT: i64 = 54772;

/// Witnesses scanned by the Fermat test are taken from [1, WITNESS_LIMIT).
pub const DEFAULT_WITNESS_LIMIT: i64 = 1_000_000;

/// Draws per rejection-sampling loop before key generation gives up.
pub const DEFAULT_MAX_DRAWS: u64 = 1 << 20;

/// Configuration for key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    pub prime_limit: i64,
    pub witness_limit: i64,
    /// `None` samples until success, with no upper bound.
    pub max_draws: Option<u64>,
    /// Accept p == q. The resulting modulus is a square and φ(n) is computed
    /// as if it were not, so such keys do not round-trip every message.
    pub allow_equal_primes: bool,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            prime_limit: DEFAULT_PRIME_LIMIT,
            witness_limit: DEFAULT_WITNESS_LIMIT,
            max_draws: Some(DEFAULT_MAX_DRAWS),
            allow_equal_primes: false,
        }
    }
}

impl RsaConfig {
    pub fn with_prime_limit(mut self, limit: i64) -> Self {
        self.prime_limit = limit;
        self
    }

    pub fn with_witness_limit(mut self, limit: i64) -> Self {
        self.witness_limit = limit;
        self
    }

    pub fn with_max_draws(mut self, draws: Option<u64>) -> Self {
        self.max_draws = draws;
        self
    }

    pub fn with_equal_primes(mut self, allow: bool) -> Self {
        self.allow_equal_primes = allow;
        self
    }

    /// Check the bounds before any sampling starts
    pub fn validate(&self) -> Result<()> {
        // Draws are 16 bits wide, and the smallest usable modulus needs 5 * 7.
        if self.prime_limit < 7 || self.prime_limit > i64::from(u16::MAX) {
            return Err(RsaError::InvalidParameter(format!(
                "prime limit must be in [7, {}], got {}",
                u16::MAX,
                self.prime_limit
            )));
        }
        if self.witness_limit < 2 {
            return Err(RsaError::InvalidParameter(format!(
                "witness limit must be at least 2, got {}",
                self.witness_limit
            )));
        }
        if self.max_draws == Some(0) {
            return Err(RsaError::InvalidParameter(
                "max draws must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RsaConfig::default();
        assert_eq!(config.prime_limit, 54772);
        assert_eq!(config.witness_limit, 1_000_000);
        assert!(!config.allow_equal_primes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RsaConfig::default()
            .with_prime_limit(500)
            .with_witness_limit(1000)
            .with_max_draws(None)
            .with_equal_primes(true);
        assert_eq!(config.prime_limit, 500);
        assert_eq!(config.witness_limit, 1000);
        assert_eq!(config.max_draws, None);
        assert!(config.allow_equal_primes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(RsaConfig::default().with_prime_limit(3).validate().is_err());
        assert!(RsaConfig::default().with_prime_limit(70_000).validate().is_err());
        assert!(RsaConfig::default().with_witness_limit(1).validate().is_err());
        assert!(RsaConfig::default().with_max_draws(Some(0)).validate().is_err());
    }
}
