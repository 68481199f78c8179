//! Randomness capability consumed while building polynomials.
//!
//! The crate never generates entropy itself. Anything implementing
//! [`rand_core::TryRngCore`] (and therefore every infallible `RngCore`) is a
//! [`RandomSource`]; failures of fallible sources such as `OsRng` surface as
//! [`RandomError::RandomUnavailable`].

use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{SeedableRng, TryRngCore};

use crate::error::RandomError;

/// A source of uniformly random bytes
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), RandomError>;

    /// Returns `size` fresh random bytes
    fn random(&mut self, size: usize) -> Result<Vec<u8>, RandomError> {
        let mut bytes = vec![0u8; size];
        self.fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

impl<R: TryRngCore + ?Sized> RandomSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.try_fill_bytes(dest).map_err(|err| {
            log::warn!("random source failed to produce {} bytes: {err}", dest.len());
            RandomError::RandomUnavailable(err.to_string())
        })
    }
}

/// ChaCha20 CSPRNG seeded from the operating system
pub(crate) fn seeded_rng() -> Result<ChaCha20Rng, RandomError> {
    ChaCha20Rng::try_from_rng(&mut OsRng).map_err(|err| {
        log::warn!("failed to seed ChaCha20 from the OS: {err}");
        RandomError::RandomUnavailable(err.to_string())
    })
}


#[cfg(test)]
mod tests {
    use super::testing::{FailingRng, PatternRng};
    use super::*;

    #[test]
    fn test_random_returns_requested_size() {
        let mut rng = seeded_rng().unwrap();
        assert_eq!(rng.random(0).unwrap().len(), 0);
        assert_eq!(rng.random(33).unwrap().len(), 33);
    }

    #[test]
    fn test_os_rng_is_a_source() {
        let mut buf = [0u8; 64];
        OsRng.fill_random(&mut buf).unwrap();
        // 2^-512 chance of a false failure
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_pattern_source() {
        let mut rng = PatternRng::new(&[1, 2, 3]);
        assert_eq!(rng.random(5).unwrap(), vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_failing_source_reports_unavailable() {
        let err = FailingRng.random(4).unwrap_err();
        assert_eq!(
            err,
            RandomError::RandomUnavailable("entropy exhausted".to_string())
        );
    }
}
