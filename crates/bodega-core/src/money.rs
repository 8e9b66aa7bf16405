//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                    │
//! │                                                                │
//! │  In floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                  │
//! │                                                                │
//! │  OUR SOLUTION: Integer Centavos                                │
//! │    ₱12.50 is stored as 1250                                    │
//! │    Subtotals, payments and change are exact i64 sums           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(1250); // ₱12.50
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // ₱17.50
//! let tripled = price * 3;                    // ₱37.50
//!
//! // Parse operator input
//! let tendered: Money = "20.00".parse().unwrap();
//! assert_eq!(tendered.cents(), 2000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: change calculations subtract, intermediate values
///   may dip negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for seed files and receipts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // Represents ₱12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (pesos and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let price = Money::from_major_minor(12, 50); // ₱12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -₱5.50, not -₱4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pesos) portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // ₱2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // ₱8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Errors from parsing an operator-entered amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// The input was empty after trimming.
    #[error("amount is empty")]
    Empty,

    /// A character other than digits, one decimal point, or a leading
    /// sign/peso mark was found.
    #[error("amount contains invalid characters")]
    InvalidCharacter,

    /// The fractional part must be exactly two digits when present.
    #[error("centavo part must be exactly two digits")]
    BadMinorPart,

    /// The amount does not fit in 64-bit centavos.
    #[error("amount is out of range")]
    Overflow,
}

/// Parses amounts the way an operator types them: `"150"`, `"12.50"`,
/// `"₱20.00"`. A bare major amount means zero centavos; a fractional part
/// must be exactly two digits (no guessing what `"1.5"` meant).
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.trim();
        if let Some(rest) = s.strip_prefix('₱') {
            s = rest.trim_start();
        }

        let negative = if let Some(rest) = s.strip_prefix('-') {
            s = rest;
            true
        } else {
            false
        };

        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (major_str, minor_str) = match s.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (s, None),
        };

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::InvalidCharacter);
        }
        let major: i64 = major_str
            .parse()
            .map_err(|_| ParseMoneyError::Overflow)?;

        let minor: i64 = match minor_str {
            None => 0,
            Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.parse().map_err(|_| ParseMoneyError::BadMinorPart)?
            }
            Some(_) => return Err(ParseMoneyError::BadMinorPart),
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in receipt format (`₱12.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
