//! Shamir's Secret Sharing over GF(256)
//!
//! A secret byte string is split into `N` shares so that any `K` of them
//! reconstruct it exactly while `K - 1` or fewer reveal nothing about it.
//! Every secret byte gets its own random polynomial of degree `K - 1` over
//! GF(2⁸); share `x` holds the evaluations at `x`, and reconstruction is
//! Lagrange interpolation at `x = 0`.
//!
//! # Quick Start
//!
//! ```
//! use sss_gf256::{Secret, Share};
//!
//! // 5 shares, any 3 recover the secret
//! let secret = Secret::new(b"my secret data", 3, 5).unwrap();
//! let shares = secret.split().unwrap();
//!
//! // Shares travel as text
//! let encoded: Vec<String> = shares.iter().map(Share::to_string).collect();
//!
//! let loaded: Vec<Share> = encoded[2..]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let reconstructed = Secret::combine(&loaded).unwrap();
//! assert_eq!(reconstructed, b"my secret data");
//! ```

mod codec;
mod config;
mod error;
mod finite_field;
mod polynomial;
mod random;
mod shamir;

pub use config::{Config, SplitMode};
pub use error::{
    CodecError, CombineError, FieldError, RandomError, Result, ShamirError, ValidationError,
};
pub use finite_field::Gf256;
pub use polynomial::{DEFAULT_MAX_LEADING_DRAWS, Polynomial};
pub use random::RandomSource;
pub use shamir::{MAX_SHARE_COUNT, Secret, SecretBuilder, Share, combine, split};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Config, Gf256, Polynomial, RandomSource, Result, Secret, ShamirError, Share, SplitMode,
    };
}
