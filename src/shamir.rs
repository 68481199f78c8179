use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::{Config, SplitMode};
use crate::error::{CombineError, RandomError, Result, ValidationError};
use crate::finite_field::Gf256;
use crate::polynomial::Polynomial;
use crate::random::{RandomSource, seeded_rng};

/// Largest threshold or share count the 8-bit index space allows
pub const MAX_SHARE_COUNT: usize = u8::MAX as usize;

/// A share in Shamir's Secret Sharing scheme
///
/// `index` is the x-coordinate every byte polynomial was evaluated at (never
/// 0, which is where the secret itself lives). `payload[p]` is the value of
/// the polynomial protecting secret byte `p`.
///
/// Shares serialize as their textual form `"<index>-<hex payload>"`.
///
/// # Example
/// ```
/// use sss_gf256::Secret;
///
/// let secret = Secret::new(b"secret", 3, 5).unwrap();
/// let shares = secret.split().unwrap();
/// let share = &shares[0];
///
/// assert_eq!(share.index, 1);
/// assert_eq!(share.payload.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Share {
    /// Index of the share (x-coordinate in the polynomial)
    pub index: u8,
    /// One polynomial evaluation per secret byte
    pub payload: Vec<u8>,
}

impl Share {
    pub fn new(index: u8, payload: Vec<u8>) -> Self {
        Self { index, payload }
    }
}

/// Checks `1 < threshold <= share_count <= 255`
fn validate_parameters(
    threshold: usize,
    share_count: usize,
) -> std::result::Result<(u8, u8), ValidationError> {
    if threshold > MAX_SHARE_COUNT || share_count > MAX_SHARE_COUNT {
        return Err(ValidationError::UnsupportedLength {
            threshold,
            share_count,
        });
    }
    if threshold < 2 {
        return Err(ValidationError::ThresholdTooLow(threshold));
    }
    if threshold > share_count {
        return Err(ValidationError::ThresholdLargerThanShares {
            threshold,
            share_count,
        });
    }
    Ok((threshold as u8, share_count as u8))
}

/// A secret together with its validated sharing parameters
///
/// Every byte of the secret is protected by its own random polynomial of
/// degree `threshold - 1`; share `x` carries the evaluations at `x` for
/// `x` in `1..=share_count`.
///
/// # Example
/// ```
/// use sss_gf256::Secret;
///
/// let secret = Secret::new(b"my secret data", 3, 5).unwrap();
/// let shares = secret.split().unwrap();
///
/// // Any 3 shares are enough
/// let recovered = Secret::combine(&shares[1..4]).unwrap();
/// assert_eq!(recovered, b"my secret data");
/// ```
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Secret {
    /// Minimum number of shares needed for reconstruction
    threshold: u8,
    /// Total number of shares to generate
    share_count: u8,
    /// The secret bytes
    data: Vec<u8>,
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    config: Config,
}

/// Builder for [`Secret`] with a custom [`Config`]
///
/// # Example
/// ```
/// use sss_gf256::{Config, Secret, SplitMode};
///
/// let secret = Secret::builder(b"data", 3, 5)
///     .with_config(Config::new().with_mode(SplitMode::Parallel))
///     .build()
///     .unwrap();
/// assert_eq!(secret.share_count(), 5);
/// ```
#[derive(Debug)]
pub struct SecretBuilder<'a> {
    data: &'a [u8],
    threshold: usize,
    share_count: usize,
    config: Config,
}

impl<'a> SecretBuilder<'a> {
    pub fn new(data: &'a [u8], threshold: usize, share_count: usize) -> Self {
        Self {
            data,
            threshold,
            share_count,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validates parameters and configuration
    ///
    /// # Errors
    /// - [`ValidationError`] for out of range threshold / share count
    /// - `InvalidConfig` if the configuration does not validate
    pub fn build(self) -> Result<Secret> {
        let (threshold, share_count) = validate_parameters(self.threshold, self.share_count)?;
        self.config.validate()?;

        Ok(Secret {
            threshold,
            share_count,
            data: self.data.to_vec(),
            config: self.config,
        })
    }
}

impl Secret {
    /// Creates a secret with the default configuration
    ///
    /// # Errors
    /// - [`ValidationError::UnsupportedLength`] if either count exceeds 255
    /// - [`ValidationError::ThresholdTooLow`] if `threshold < 2`
    /// - [`ValidationError::ThresholdLargerThanShares`] if `threshold > share_count`
    pub fn new(
        data: &[u8],
        threshold: usize,
        share_count: usize,
    ) -> std::result::Result<Self, ValidationError> {
        let (threshold, share_count) = validate_parameters(threshold, share_count)?;
        Ok(Self {
            threshold,
            share_count,
            data: data.to_vec(),
            config: Config::default(),
        })
    }

    pub fn builder(data: &[u8], threshold: usize, share_count: usize) -> SecretBuilder<'_> {
        SecretBuilder::new(data, threshold, share_count)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn share_count(&self) -> u8 {
        self.share_count
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Splits the secret into `share_count` shares
    ///
    /// Coefficients come from a ChaCha20 generator freshly seeded from the
    /// operating system for this call.
    ///
    /// # Errors
    /// [`RandomError`] if the OS entropy source or rejection sampling fails.
    pub fn split(&self) -> std::result::Result<Vec<Share>, RandomError> {
        let mut rng = seeded_rng()?;
        self.split_with_rng(&mut rng)
    }

    /// Splits the secret drawing coefficients from `rng`
    ///
    /// Polynomials are drawn sequentially from `rng`, one per secret byte;
    /// in [`SplitMode::Parallel`] the evaluation at each share index then
    /// runs on the rayon pool.
    pub fn split_with_rng<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> std::result::Result<Vec<Share>, RandomError> {
        log::debug!(
            "splitting {} byte secret into {} shares, threshold {}",
            self.data.len(),
            self.share_count,
            self.threshold
        );

        let degree = self.threshold as usize - 1;
        let polynomials = self
            .data
            .iter()
            .map(|&byte| {
                Polynomial::random_with_limit(
                    Gf256::new(byte),
                    degree,
                    rng,
                    self.config.max_leading_draws,
                )
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let evaluate_share = |index: u8| {
            let x = Gf256::new(index);
            Share {
                index,
                payload: polynomials.iter().map(|p| p.evaluate(x).value()).collect(),
            }
        };

        let indices: Vec<u8> = (1..=self.share_count).collect();
        let shares: Vec<Share> = match self.config.mode {
            SplitMode::Sequential => indices.into_iter().map(evaluate_share).collect(),
            SplitMode::Parallel => indices.into_par_iter().map(evaluate_share).collect(),
        };

        Ok(shares)
    }

    /// Reconstructs the secret from shares by interpolating every byte at 0
    ///
    /// Neither the threshold nor the share count is needed. Supplying fewer
    /// shares than the threshold silently yields the wrong bytes.
    /// Identical copies of a share are collapsed; two different shares with
    /// the same index fail with `DivideByZero`.
    ///
    /// # Errors
    /// - [`CombineError::ShareDataLengthMismatch`] if payload lengths differ
    /// - [`CombineError::Field`] if two distinct shares share an index
    pub fn combine(shares: &[Share]) -> std::result::Result<Vec<u8>, CombineError> {
        Self::combine_with_mode(shares, SplitMode::Sequential)
    }

    /// [`Secret::combine`] with an explicit processing mode
    pub fn combine_with_mode(
        shares: &[Share],
        mode: SplitMode,
    ) -> std::result::Result<Vec<u8>, CombineError> {
        let Some(first) = shares.first() else {
            return Ok(Vec::new());
        };

        let secret_len = first.payload.len();
        if let Some(mismatched) = shares.iter().find(|s| s.payload.len() != secret_len) {
            return Err(CombineError::ShareDataLengthMismatch {
                expected: secret_len,
                found: mismatched.payload.len(),
            });
        }

        let points = distinct_shares(shares);
        log::debug!(
            "combining {} distinct shares of {} bytes",
            points.len(),
            secret_len
        );

        let xs: Vec<Gf256> = points.iter().map(|s| Gf256::new(s.index)).collect();
        let basis = Polynomial::lagrange_basis(&xs, Gf256::ZERO)?;

        let reconstruct_byte = |position: usize| {
            points
                .iter()
                .zip(&basis)
                .map(|(share, &l)| Gf256::new(share.payload[position]) * l)
                .sum::<Gf256>()
                .value()
        };

        let secret: Vec<u8> = match mode {
            SplitMode::Sequential => (0..secret_len).map(reconstruct_byte).collect(),
            SplitMode::Parallel => (0..secret_len).into_par_iter().map(reconstruct_byte).collect(),
        };

        Ok(secret)
    }
}

/// Drops exact repeats, keeping the first occurrence
fn distinct_shares(shares: &[Share]) -> Vec<&Share> {
    let mut distinct: Vec<&Share> = Vec::with_capacity(shares.len());
    for share in shares {
        if !distinct.iter().any(|&seen| seen == share) {
            distinct.push(share);
        }
    }
    if distinct.len() < shares.len() {
        log::debug!(
            "ignoring {} repeated shares",
            shares.len() - distinct.len()
        );
    }
    distinct
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("threshold", &self.threshold)
            .field("share_count", &self.share_count)
            .field("len", &self.data.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Splits `secret` into `share_count` shares, any `threshold` of which
/// recover it
///
/// # Example
/// ```
/// let shares = sss_gf256::split(b"Hello World!!!", 3, 5).unwrap();
/// assert_eq!(shares.len(), 5);
/// assert_eq!(sss_gf256::combine(&shares[2..]).unwrap(), b"Hello World!!!");
/// ```
pub fn split(secret: &[u8], threshold: usize, share_count: usize) -> Result<Vec<Share>> {
    Ok(Secret::new(secret, threshold, share_count)?.split()?)
}

/// Recovers the secret bytes from shares, see [`Secret::combine`]
pub fn combine(shares: &[Share]) -> Result<Vec<u8>> {
    Ok(Secret::combine(shares)?)
}
