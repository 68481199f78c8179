use std::fmt;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{FieldError, RandomError};
use crate::finite_field::Gf256;
use crate::random::RandomSource;

/// Default cap on redraws of a zero leading coefficient.
///
/// Each draw is zero with probability 1/256, so hitting the cap means the
/// randomness source is broken rather than unlucky.
pub const DEFAULT_MAX_LEADING_DRAWS: usize = 128;

/// A polynomial over GF(256), coefficient `i` belongs to `x^i`
///
/// Equality is structural: two polynomials are equal when their coefficient
/// sequences are.
///
/// # Example
/// ```
/// use sss_gf256::{Gf256, Polynomial};
///
/// let poly = Polynomial::from_bytes(&[0x04, 0x02, 0xa3]);
/// let x = Gf256::new(0x04);
/// let expected = Gf256::new(0x04) + Gf256::new(0x02) * x + Gf256::new(0xa3) * x * x;
/// assert_eq!(poly.evaluate(x), expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Polynomial {
    coefficients: Vec<Gf256>,
}

impl Polynomial {
    /// Builds a polynomial from its coefficients, lowest degree first.
    /// An empty coefficient list is the zero polynomial.
    pub fn new(coefficients: Vec<Gf256>) -> Self {
        if coefficients.is_empty() {
            return Self {
                coefficients: vec![Gf256::ZERO],
            };
        }
        Self { coefficients }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Gf256::new).collect())
    }

    pub fn coefficients(&self) -> &[Gf256] {
        &self.coefficients
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false, a polynomial holds at least its constant term
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    /// Random polynomial of exactly `degree` whose value at `x = 0` is `zero_at`
    ///
    /// Coefficients `1..degree` are uniform bytes from `rng`; the leading
    /// coefficient is redrawn until non-zero, at most
    /// [`DEFAULT_MAX_LEADING_DRAWS`] times.
    ///
    /// # Errors
    /// - [`RandomError::RandomUnavailable`] if `rng` fails
    /// - [`RandomError::InsufficientRandomness`] if the leading coefficient
    ///   stays zero for every draw
    pub fn random<R: RandomSource + ?Sized>(
        zero_at: Gf256,
        degree: usize,
        rng: &mut R,
    ) -> Result<Self, RandomError> {
        Self::random_with_limit(zero_at, degree, rng, DEFAULT_MAX_LEADING_DRAWS)
    }

    /// Same as [`Polynomial::random`] with an explicit redraw cap
    pub fn random_with_limit<R: RandomSource + ?Sized>(
        zero_at: Gf256,
        degree: usize,
        rng: &mut R,
        max_leading_draws: usize,
    ) -> Result<Self, RandomError> {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(zero_at);
        if degree == 0 {
            return Ok(Self { coefficients });
        }

        coefficients.extend(rng.random(degree)?.into_iter().map(Gf256::new));

        let mut draws = 1;
        while coefficients[degree] == Gf256::ZERO {
            if draws >= max_leading_draws {
                log::warn!("leading coefficient still zero after {draws} draws, giving up");
                return Err(RandomError::InsufficientRandomness { attempts: draws });
            }
            log::trace!("redrawing zero leading coefficient (draw {draws})");
            let mut byte = [0u8; 1];
            rng.fill_random(&mut byte)?;
            coefficients[degree] = Gf256::new(byte[0]);
            draws += 1;
        }

        Ok(Self { coefficients })
    }

    /// Evaluates the polynomial at `x` with Horner's method
    pub fn evaluate(&self, x: Gf256) -> Gf256 {
        self.coefficients
            .iter()
            .rev()
            .fold(Gf256::ZERO, |acc, &coefficient| acc * x + coefficient)
    }

    /// Lagrange basis values `l_i(at) = Π_{j≠i} (at - x_j) / (x_i - x_j)`
    ///
    /// Depends only on the x-coordinates, so a caller interpolating many
    /// columns over the same points can compute it once.
    ///
    /// # Errors
    /// [`FieldError::DivideByZero`] when two x-coordinates coincide.
    pub fn lagrange_basis(xs: &[Gf256], at: Gf256) -> Result<Vec<Gf256>, FieldError> {
        xs.iter()
            .enumerate()
            .map(|(i, &x_i)| {
                xs.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .try_fold(Gf256::ONE, |l, (_, &x_j)| {
                        (at - x_j).checked_div(x_i - x_j).map(|q| l * q)
                    })
            })
            .collect()
    }

    /// Value at `at` of the unique polynomial through `points`
    ///
    /// The result does not depend on the order of `points`.
    ///
    /// # Errors
    /// [`FieldError::DivideByZero`] when two points share an x-coordinate.
    ///
    /// # Example
    /// ```
    /// use sss_gf256::{Gf256, Polynomial};
    ///
    /// let points = [
    ///     (Gf256::new(1), Gf256::new(5)),
    ///     (Gf256::new(1), Gf256::new(6)),
    /// ];
    /// assert!(Polynomial::interpolate(&points, Gf256::ZERO).is_err());
    /// ```
    pub fn interpolate(points: &[(Gf256, Gf256)], at: Gf256) -> Result<Gf256, FieldError> {
        let xs: Vec<Gf256> = points.iter().map(|&(x, _)| x).collect();
        let basis = Self::lagrange_basis(&xs, at)?;
        Ok(points
            .iter()
            .zip(basis)
            .map(|(&(_, y), l)| y * l)
            .sum())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coefficient) in self.coefficients.iter().enumerate() {
            match i {
                0 => write!(f, "{coefficient}")?,
                1 => write!(f, " + {coefficient}x")?,
                _ => write!(f, " + {coefficient}x^{i}")?,
            }
        }
        Ok(())
    }
}
