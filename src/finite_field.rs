use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use once_cell::sync::Lazy;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::error::FieldError;

/// Low byte of the reducing polynomial x^8 + x^4 + x^3 + x + 1 (0x11B)
const REDUCTION: u8 = 0x1b;

/// Generator of the multiplicative group used to build the log tables
const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group
const GROUP_ORDER: usize = 255;

/// Russian peasant multiplication, only used to build the lookup tables.
fn multiply_slow(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut p: u8 = 0;
    for _ in 0..8 {
        if (b & 1) != 0 {
            p ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    p
}

/// Discrete log / antilog tables for the generator 0x03.
///
/// `exp` is stored twice over so that `log[a] + log[b]` and
/// `log[a] + 255 - log[b]` index it without a modular reduction.
struct Tables {
    log: [u8; 256],
    exp: [u8; 2 * GROUP_ORDER + 2],
}

impl Tables {
    fn generate() -> Self {
        let mut log = [0u8; 256];
        let mut exp = [0u8; 2 * GROUP_ORDER + 2];

        let mut x: u8 = 1;
        for i in 0..GROUP_ORDER {
            exp[i] = x;
            exp[i + GROUP_ORDER] = x;
            log[x as usize] = i as u8;
            x = multiply_slow(x, GENERATOR);
        }
        exp[2 * GROUP_ORDER] = exp[0];
        exp[2 * GROUP_ORDER + 1] = exp[1];

        Self { log, exp }
    }
}

static TABLES: Lazy<Tables> = Lazy::new(Tables::generate);

/// All ones when both inputs are non-zero, all zeros otherwise
#[inline]
fn nonzero_mask(a: u8, b: u8) -> u8 {
    0u8.wrapping_sub(((a != 0) & (b != 0)) as u8)
}

/// An element of GF(2⁸) over the irreducible polynomial x⁸ + x⁴ + x³ + x + 1
///
/// Addition and subtraction are XOR. Multiplication and division go through
/// precomputed log/antilog tables; division is fallible and never returns a
/// value for a zero divisor.
///
/// # Example
/// ```
/// use sss_gf256::Gf256;
///
/// let a = Gf256::new(90);
/// let b = Gf256::new(21);
/// assert_eq!(a * b, Gf256::new(254));
/// assert_eq!(a.checked_div(b).unwrap(), Gf256::new(189));
/// assert!(a.checked_div(Gf256::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "zeroize", derive(Zeroize))]
pub struct Gf256(pub u8);

impl Gf256 {
    /// Additive identity
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity
    pub const ONE: Self = Self(1);

    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw byte value of the element
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Field multiplication via log/antilog lookup.
    ///
    /// The zero case is selected with a mask rather than a branch.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        let tables = &*TABLES;
        let product =
            tables.exp[tables.log[self.0 as usize] as usize + tables.log[other.0 as usize] as usize];
        Self(product & nonzero_mask(self.0, other.0))
    }

    /// Field division, the unique `d` with `d * divisor == self`
    ///
    /// # Errors
    /// Returns [`FieldError::DivideByZero`] when `divisor` is zero.
    ///
    /// # Example
    /// ```
    /// use sss_gf256::Gf256;
    ///
    /// assert_eq!(Gf256::ZERO.checked_div(Gf256::new(21)).unwrap(), Gf256::ZERO);
    /// ```
    #[inline]
    pub fn checked_div(self, divisor: Self) -> Result<Self, FieldError> {
        if divisor.0 == 0 {
            return Err(FieldError::DivideByZero);
        }
        let tables = &*TABLES;
        let quotient = tables.exp[tables.log[self.0 as usize] as usize + GROUP_ORDER
            - tables.log[divisor.0 as usize] as usize];
        Ok(Self(quotient & nonzero_mask(self.0, divisor.0)))
    }

    /// Multiplicative inverse, `None` for zero
    #[inline]
    pub fn inverse(self) -> Option<Self> {
        Self::ONE.checked_div(self).ok()
    }

    /// Exponentiation by square-and-multiply
    ///
    /// # Example
    /// ```
    /// use sss_gf256::Gf256;
    ///
    /// let base = Gf256::new(0x03);
    /// assert_eq!(base.pow(3), base * base * base);
    /// ```
    pub fn pow(self, mut exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(base);
            }
            base = base.multiply(base);
            exp >>= 1;
        }
        result
    }
}

impl From<u8> for Gf256 {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    #[inline]
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addition in GF(2⁸) is XOR
impl Add for Gf256 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        #[allow(clippy::suspicious_arithmetic_impl)]
        let result = self.0 ^ other.0;
        Self(result)
    }
}

/// Subtraction is the same operation as addition
impl Sub for Gf256 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        #[allow(clippy::suspicious_arithmetic_impl)]
        let result = self + other;
        result
    }
}

impl Mul for Gf256 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl AddAssign for Gf256 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Gf256 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign for Gf256 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl Sum for Gf256 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for Gf256 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(Gf256(0xb6) * Gf256(0x53), Gf256(0x36));
        assert_eq!(Gf256(90) * Gf256(21), Gf256(254));
        assert_eq!(Gf256(7) * Gf256(11), Gf256(49));
        assert_eq!(Gf256(90).checked_div(Gf256(21)), Ok(Gf256(189)));
    }

    #[test]
    fn test_zero_products() {
        assert_eq!(Gf256(90) * Gf256(0), Gf256::ZERO);
        assert_eq!(Gf256(0) * Gf256(21), Gf256::ZERO);
        assert_eq!(Gf256(0) * Gf256(0), Gf256::ZERO);
        assert_eq!(Gf256(0).checked_div(Gf256(21)), Ok(Gf256::ZERO));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Gf256(164).checked_div(Gf256::ZERO),
            Err(FieldError::DivideByZero)
        );
        assert_eq!(Gf256::ZERO.checked_div(Gf256::ZERO), Err(FieldError::DivideByZero));
    }

    #[test]
    fn test_addition() {
        let a = Gf256::new(0x53);
        let b = Gf256::new(0xCA);
        assert_eq!((a + b).0, 0x99);
        assert_eq!(a - b, a + b);
        assert_eq!(a + a, Gf256::ZERO);
    }

    #[test]
    fn test_tables_match_slow_multiplication() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(
                    (Gf256(a) * Gf256(b)).0,
                    multiply_slow(a, b),
                    "mismatch for {a} * {b}"
                );
            }
        }
    }

    #[test]
    fn test_division_inverts_multiplication() {
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                let product = Gf256(a) * Gf256(b);
                assert_eq!(product.checked_div(Gf256(b)), Ok(Gf256(a)));
            }
        }
    }

    #[test]
    fn test_all_inverses() {
        for i in 1..=255 {
            let a = Gf256::new(i);
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, Gf256::ONE);
        }
        assert_eq!(Gf256::ZERO.inverse(), None);
    }

    #[test]
    fn test_specific_inverses() {
        let test_values = [(0x53, 0xCA), (0x7B, 0x06), (0xA4, 0x8F), (0xE1, 0x0D)];

        for &(a, expected_inv) in &test_values {
            let inv = Gf256::new(a).inverse().unwrap();
            assert_eq!(inv.0, expected_inv, "Inverse mismatch for 0x{:02X}", a);
        }
    }

    #[test]
    fn test_commutativity_and_associativity() {
        let samples = [0x00, 0x01, 0x02, 0x53, 0x7B, 0x8F, 0xCA, 0xFF];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(Gf256(a) * Gf256(b), Gf256(b) * Gf256(a));
                for &c in &samples {
                    let (a, b, c) = (Gf256(a), Gf256(b), Gf256(c));
                    assert_eq!((a * b) * c, a * (b * c));
                    assert_eq!(a * (b + c), (a * b) + (a * c));
                }
            }
        }
    }

    #[test]
    fn test_pow() {
        let g = Gf256::new(GENERATOR);
        assert_eq!(g.pow(0), Gf256::ONE);
        assert_eq!(g.pow(255), Gf256::ONE);
        assert_eq!(Gf256::new(0x53).pow(254), Gf256::new(0x53).inverse().unwrap());
    }

    #[test]
    fn test_sum_and_product() {
        let values = [Gf256(1), Gf256(2), Gf256(4)];
        assert_eq!(values.iter().copied().sum::<Gf256>(), Gf256(7));
        assert_eq!(values.iter().copied().product::<Gf256>(), Gf256(8));
    }

    #[test]
    fn test_assign_ops() {
        let mut x = Gf256(7);
        x *= Gf256(11);
        assert_eq!(x, Gf256(49));
        x += Gf256(49);
        assert_eq!(x, Gf256::ZERO);
        x -= Gf256(3);
        assert_eq!(x, Gf256(3));
    }
}
