//! # Money Module
//!
//! Provides the `Money` type for menu prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price kept as f64:                                                   │
//! │    10.50 * 0.8 = 8.400000000000000355  → prints as 8.4, compares ≠     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1050 cents at 20% off = 840 cents, exact and comparable             │
//! │    Rounding happens once, explicitly, when a discount is applied       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use menu_core::money::Money;
//!
//! let price = Money::from_cents(1050); // $10.50
//! let discounted = price.apply_percentage_discount(20.0);
//! assert_eq!(discounted.cents(), 840);  // $8.40
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// FoodItem.price_cents ──► OfferEngine::get_discounted_price ──► response
///                     └──► FoodItem::basic_info ("Pizza - $10.50")
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use menu_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Applies a percentage discount and returns the remaining amount.
    ///
    /// ## Formula
    /// `price * (1 - percentage / 100)`, computed over cents and rounded
    /// half away from zero to the nearest cent.
    ///
    /// ## Arguments
    /// * `percentage` - Discount on the 0-100 scale (20.0 = 20% off)
    ///
    /// ```rust
    /// use menu_core::money::Money;
    ///
    /// let price = Money::from_cents(10000); // $100.00
    /// assert_eq!(price.apply_percentage_discount(12.5).cents(), 8750);
    /// assert_eq!(price.apply_percentage_discount(100.0).cents(), 0);
    /// ```
    pub fn apply_percentage_discount(&self, percentage: f64) -> Money {
        let remaining = self.0 as f64 * (100.0 - percentage) / 100.0;
        Money(remaining.round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.50`. For logs and descriptions, not localized UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1050);
        assert_eq!(money.cents(), 1050);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_percentage_discount() {
        let price = Money::from_cents(1050);
        assert_eq!(price.apply_percentage_discount(20.0).cents(), 840);
        assert_eq!(price.apply_percentage_discount(100.0).cents(), 0);
    }

    #[test]
    fn test_percentage_discount_rounds_to_nearest_cent() {
        // 999 * 0.9 = 899.1 → 899
        assert_eq!(Money::from_cents(999).apply_percentage_discount(10.0).cents(), 899);
        // 5 * 0.5 = 2.5 → 3 (half away from zero)
        assert_eq!(Money::from_cents(5).apply_percentage_discount(50.0).cents(), 3);
    }

    #[test]
    fn test_percentage_discount_is_monotonic() {
        let price = Money::from_cents(12_345);
        let mut previous = price;
        for step in 1..=1000 {
            let pct = step as f64 / 10.0;
            let discounted = price.apply_percentage_discount(pct);
            assert!(discounted <= previous, "discount at {pct}% increased the price");
            previous = discounted;
        }
    }
}
