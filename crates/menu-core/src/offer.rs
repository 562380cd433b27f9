//! # Offer Rules
//!
//! When an offer is in effect, and what it does to a price.
//!
//! ## "Currently Active"
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  is_active flag ──┐                                                     │
//! │                   ├── AND ──► currently active                         │
//! │  start ≤ today ≤ end                                                    │
//! │                                                                         │
//! │       start                      end                                    │
//! │  ───────[=========================]───────► calendar                    │
//! │    no     yes (both ends inclusive)   no                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `today` is always supplied by the caller. This crate never reads the
//! clock; the engine injects one.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::Offer;

impl Offer {
    /// True iff the flag is set and `today` falls inside the window.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use menu_core::Offer;
    ///
    /// let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    /// let offer = Offer::new(1, 10.0, None, d(3, 1), d(3, 31));
    ///
    /// assert!(offer.is_currently_active(d(3, 1)));
    /// assert!(offer.is_currently_active(d(3, 31)));
    /// assert!(!offer.is_currently_active(d(4, 1)));
    /// ```
    pub fn is_currently_active(&self, today: NaiveDate) -> bool {
        self.is_active && self.start_date <= today && today <= self.end_date
    }

    /// `original * (1 - discount_percentage / 100)`, rounded to the cent.
    pub fn calculate_discounted_price(&self, original: Money) -> Money {
        original.apply_percentage_discount(self.discount_percentage)
    }
}

/// Returns the offers in effect on `today`, keeping their order.
pub fn currently_active<'a>(
    offers: impl IntoIterator<Item = &'a Offer>,
    today: NaiveDate,
) -> impl Iterator<Item = &'a Offer> {
    offers
        .into_iter()
        .filter(move |offer| offer.is_currently_active(today))
}

/// Prices `original` against the first offer for `food_item_id` that is in
/// effect on `today`.
///
/// ## Tie-break
/// First match in iteration order wins. Callers pass offers ordered by id
/// ascending, so the oldest matching offer applies. Overlapping offers are
/// never combined and never ranked by size.
///
/// Returns `original` unchanged when nothing matches.
pub fn first_match_price<'a>(
    offers: impl IntoIterator<Item = &'a Offer>,
    food_item_id: i64,
    original: Money,
    today: NaiveDate,
) -> Money {
    currently_active(offers, today)
        .find(|offer| offer.food_item_id == food_item_id)
        .map(|offer| offer.calculate_discounted_price(original))
        .unwrap_or(original)
}

// =============================================================================
// Unit Tests
// =============================================================================
