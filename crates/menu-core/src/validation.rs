//! # Validation Module
//!
//! Input validation for food items and offers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP route (menu-api)                                        │
//! │  ├── Type validation (deserialization, path ids)                       │
//! │  └── ISO date parsing                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine (menu-engine) calls THIS MODULE                       │
//! │  ├── Field rules (price > 0, 0 < pct ≤ 100, start ≤ end)               │
//! │  └── Runs before any store call                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key offers.food_item_id → food_items.id                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{FoodItem, Offer};
use crate::{MAX_DISCOUNT_PERCENTAGE, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects an empty or whitespace-only value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the name of a new food item.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters, ignoring surrounding whitespace
///
/// ```rust
/// use menu_core::validation::validate_food_name;
///
/// assert!(validate_food_name("Margherita").is_ok());
/// assert!(validate_food_name("  ").is_err());
/// ```
pub fn validate_food_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    let name = name.trim();
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Free items are not allowed: `cents > 0`.
///
/// ```rust
/// use menu_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1050).is_ok());
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a store id supplied by a caller (`id > 0`).
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage: `0 < pct <= 100`.
///
/// NaN is rejected. The check runs on the raw value, so `100.0001` fails.
///
/// ```rust
/// use menu_core::validation::validate_discount_percentage;
///
/// assert!(validate_discount_percentage(100.0).is_ok());
/// assert!(validate_discount_percentage(0.0001).is_ok());
/// assert!(validate_discount_percentage(0.0).is_err());
/// assert!(validate_discount_percentage(100.0001).is_err());
/// ```
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<()> {
    if !(pct > 0.0 && pct <= MAX_DISCOUNT_PERCENTAGE) {
        return Err(ValidationError::PercentageOutOfRange {
            field: "discount_percentage".to_string(),
            value: pct,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates an inclusive window: `end >= start`.
pub fn validate_date_window(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end < start {
        return Err(ValidationError::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// ```rust
/// use menu_core::validation::parse_iso_date;
///
/// assert!(parse_iso_date("start_date", "2024-01-31").is_ok());
/// assert!(parse_iso_date("start_date", "31/01/2024").is_err());
/// ```
pub fn parse_iso_date(field: &str, text: &str) -> ValidationResult<NaiveDate> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("expected YYYY-MM-DD ({})", e),
    })
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a food item before it is stored.
///
/// ## Rules
/// `price > 0` and a non-empty name.
pub fn validate_food_item(item: &FoodItem) -> ValidationResult<()> {
    validate_food_name(&item.name)?;
    validate_price_cents(item.price_cents)?;
    Ok(())
}

/// Validates every offer invariant.
///
/// ## Rules
/// ```text
/// 0 < discount_percentage ≤ 100
/// end_date ≥ start_date
/// food_item_id > 0
/// ```
/// Dates cannot be null in this representation. The description is free text.
pub fn validate_offer(offer: &Offer) -> ValidationResult<()> {
    validate_discount_percentage(offer.discount_percentage)?;
    validate_date_window(offer.start_date, offer.end_date)?;
    validate_id("food_item_id", offer.food_item_id)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_offer() -> Offer {
        Offer::new(1, 20.0, None, date(2024, 1, 1), date(2024, 12, 31))
    }

    #[test]
    fn test_validate_food_name() {
        assert!(validate_food_name("Pizza").is_ok());
        assert!(validate_food_name("").is_err());
        assert!(validate_food_name("   ").is_err());
        assert!(validate_food_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "x").is_ok());
        assert_eq!(
            validate_required("name", " \t"),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_food_item() {
        assert!(validate_food_item(&FoodItem::meal("Pizza", Money::from_cents(1050))).is_ok());
        assert_eq!(
            validate_food_item(&FoodItem::meal("Pizza", Money::from_cents(0))),
            Err(ValidationError::MustBePositive {
                field: "price".to_string()
            })
        );
        assert!(validate_food_item(&FoodItem::drink("", Money::from_cents(100))).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("id", 1).is_ok());
        assert!(validate_id("id", 0).is_err());
        assert!(validate_id("id", -3).is_err());
    }

    #[test]
    fn test_discount_boundaries() {
        assert!(validate_discount_percentage(100.0).is_ok());
        assert!(validate_discount_percentage(f64::MIN_POSITIVE).is_ok());
        assert!(validate_discount_percentage(0.0).is_err());
        assert!(validate_discount_percentage(-5.0).is_err());
        assert!(validate_discount_percentage(100.0001).is_err());
        assert!(validate_discount_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_offer() {
        assert!(validate_offer(&valid_offer()).is_ok());

        let mut same_day = valid_offer();
        same_day.end_date = same_day.start_date;
        assert!(validate_offer(&same_day).is_ok());

        let mut backwards = valid_offer();
        backwards.end_date = date(2023, 12, 31);
        assert!(matches!(
            validate_offer(&backwards),
            Err(ValidationError::EndBeforeStart { .. })
        ));

        let mut orphan = valid_offer();
        orphan.food_item_id = 0;
        assert!(validate_offer(&orphan).is_err());

        let mut wordy = valid_offer();
        wordy.description = Some("x".repeat(600));
        assert!(validate_offer(&wordy).is_ok());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("d", "2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_iso_date("d", "2023-02-29").is_err());
        assert!(matches!(
            parse_iso_date("d", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_iso_date("d", "tomorrow"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
