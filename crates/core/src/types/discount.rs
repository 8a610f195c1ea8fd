//! Percentage discount type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Discount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage is below zero.
    #[error("discount cannot be negative (got {0})")]
    Negative(Decimal),
    /// The percentage is above one hundred.
    #[error("discount must be at most 100 (got {0})")]
    TooLarge(Decimal),
}

/// A discount percentage in the range 0–100.
///
/// Discounts only affect the price shown in listings. Cart totals always use
/// the full unit price.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shop_chain_core::Discount;
///
/// let ten = Discount::new(Decimal::TEN).unwrap();
/// assert_eq!(ten.apply(Decimal::new(1200, 0)), Decimal::new(1080, 0));
///
/// assert!(Discount::new(Decimal::new(101, 0)).is_err());
/// assert!(Discount::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Discount(Decimal);

impl Discount {
    /// No discount.
    pub const NONE: Self = Self(Decimal::ZERO);

    /// Create a discount from a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage is outside 0–100.
    pub fn new(percent: Decimal) -> Result<Self, DiscountError> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return Err(DiscountError::Negative(percent));
        }
        if percent > Decimal::ONE_HUNDRED {
            return Err(DiscountError::TooLarge(percent));
        }
        Ok(Self(percent))
    }

    /// The percentage value.
    #[must_use]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Whether any discount applies.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.0.is_zero()
    }

    /// Apply the discount to an amount: `amount × (1 − percent/100)`.
    #[must_use]
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * ((Decimal::ONE_HUNDRED - self.0) / Decimal::ONE_HUNDRED)
    }
}

impl TryFrom<Decimal> for Discount {
    type Error = DiscountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Discount> for Decimal {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
