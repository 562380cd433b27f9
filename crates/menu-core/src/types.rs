//! # Domain Types
//!
//! Core domain types of the menu catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────┐                 │
//! │  │    FoodItem     │ 1     n  │        Offer         │                 │
//! │  │  ─────────────  │◄─────────│  ──────────────────  │                 │
//! │  │  id (i64)       │          │  id (i64)            │                 │
//! │  │  name           │          │  food_item_id (FK)   │                 │
//! │  │  price_cents    │          │  discount_percentage │                 │
//! │  │  kind ─────┐    │          │  start/end (dates)   │                 │
//! │  └────────────┼────┘          │  is_active           │                 │
//! │               ▼               └──────────────────────┘                 │
//! │  ┌─────────────────────────┐                                           │
//! │  │        FoodKind         │  ┌──────────────────────┐                 │
//! │  │  Meal { calories }      │  │     OfferPatch       │                 │
//! │  │  Drink { volume_ml }    │  │  partial edit of an  │                 │
//! │  └─────────────────────────┘  │  offer, all Option   │                 │
//! │                               └──────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are assigned by the store. An `id` of `0` means "not yet persisted".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Food Kind
// =============================================================================

/// What sort of food item this is.
///
/// The variants differ only in how the item is described, so there is one
/// formatting function ([`FoodItem::description`]) matching on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FoodKind {
    Meal { calories: Option<i32> },
    Drink { volume_ml: Option<i32> },
}

impl FoodKind {
    /// Storage tag: `"meal"` or `"drink"`.
    pub const fn tag(&self) -> &'static str {
        match self {
            FoodKind::Meal { .. } => "meal",
            FoodKind::Drink { .. } => "drink",
        }
    }

    /// Rebuilds a kind from its storage tag and optional attributes.
    ///
    /// Returns `None` for an unknown tag.
    pub fn from_parts(tag: &str, calories: Option<i32>, volume_ml: Option<i32>) -> Option<Self> {
        match tag {
            "meal" => Some(FoodKind::Meal { calories }),
            "drink" => Some(FoodKind::Drink { volume_ml }),
            _ => None,
        }
    }

    pub const fn calories(&self) -> Option<i32> {
        match self {
            FoodKind::Meal { calories } => *calories,
            FoodKind::Drink { .. } => None,
        }
    }

    pub const fn volume_ml(&self) -> Option<i32> {
        match self {
            FoodKind::Drink { volume_ml } => *volume_ml,
            FoodKind::Meal { .. } => None,
        }
    }
}

// =============================================================================
// Food Item
// =============================================================================

/// A purchasable item on the menu.
///
/// ## Invariant
/// `price_cents > 0` and `name` is non-empty. Checked by
/// [`crate::validation::validate_food_item`] before every insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FoodItem {
    /// Store-assigned id, `0` before persistence.
    pub id: i64,

    /// Display name; also the key for price updates and deletes by name.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    pub kind: FoodKind,
}

impl FoodItem {
    /// An unsaved meal.
    pub fn meal(name: impl Into<String>, price: Money) -> Self {
        FoodItem {
            id: 0,
            name: name.into(),
            price_cents: price.cents(),
            kind: FoodKind::Meal { calories: None },
        }
    }

    /// An unsaved drink.
    pub fn drink(name: impl Into<String>, price: Money) -> Self {
        FoodItem {
            id: 0,
            name: name.into(),
            price_cents: price.cents(),
            kind: FoodKind::Drink { volume_ml: None },
        }
    }

    /// Replaces the kind, keeping name and price.
    pub fn with_kind(mut self, kind: FoodKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Human-readable description.
    ///
    /// ```rust
    /// use menu_core::{FoodItem, FoodKind, Money};
    ///
    /// let pizza = FoodItem::meal("Pizza", Money::from_cents(1050))
    ///     .with_kind(FoodKind::Meal { calories: Some(800) });
    /// assert_eq!(pizza.description(), "Meal: Pizza (800 cal)");
    ///
    /// let cola = FoodItem::drink("Cola", Money::from_cents(250));
    /// assert_eq!(cola.description(), "Drink: Cola");
    /// ```
    pub fn description(&self) -> String {
        match self.kind {
            FoodKind::Meal { calories } => match calories {
                Some(cal) => format!("Meal: {} ({} cal)", self.name, cal),
                None => format!("Meal: {}", self.name),
            },
            FoodKind::Drink { volume_ml } => match volume_ml {
                Some(ml) => format!("Drink: {} ({} ml)", self.name, ml),
                None => format!("Drink: {}", self.name),
            },
        }
    }

    /// Name and price, e.g. `"Pizza - $10.50"`.
    pub fn basic_info(&self) -> String {
        format!("{} - {}", self.name, self.price())
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A percentage discount on one food item over an inclusive date window.
///
/// `is_active` is a manual switch independent of the window. An offer is
/// only *in effect* when both agree, see [`Offer::is_currently_active`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Offer {
    /// Store-assigned id, `0` before persistence.
    pub id: i64,

    /// The food item this offer discounts.
    pub food_item_id: i64,

    /// Discount on the 0-100 scale, `0 < x <= 100`.
    pub discount_percentage: f64,

    pub description: Option<String>,

    /// First day the offer applies (inclusive).
    #[ts(as = "String")]
    pub start_date: NaiveDate,

    /// Last day the offer applies (inclusive).
    #[ts(as = "String")]
    pub end_date: NaiveDate,

    pub is_active: bool,
}

impl Offer {
    /// An unsaved, active offer.
    pub fn new(
        food_item_id: i64,
        discount_percentage: f64,
        description: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Offer {
            id: 0,
            food_item_id,
            discount_percentage,
            description,
            start_date,
            end_date,
            is_active: true,
        }
    }
}

// =============================================================================
// Offer Patch
// =============================================================================

/// A partial edit of an offer. `None` keeps the stored value.
///
/// ## User Workflow
/// ```text
/// Editor shows offer #3 ──► user changes only the percentage
///      │
///      ▼
/// OfferPatch { discount_percentage: Some(25.0), ..Default::default() }
///      │
///      ▼
/// patch.apply_to(&stored) ──► full Offer ──► update_offer (full validation)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OfferPatch {
    pub food_item_id: Option<i64>,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
}

impl OfferPatch {
    /// Resolves the patch into a full offer. Id and active flag always come
    /// from `existing`.
    pub fn apply_to(&self, existing: &Offer) -> Offer {
        Offer {
            id: existing.id,
            food_item_id: self.food_item_id.unwrap_or(existing.food_item_id),
            discount_percentage: self
                .discount_percentage
                .unwrap_or(existing.discount_percentage),
            description: self
                .description
                .clone()
                .or_else(|| existing.description.clone()),
            start_date: self.start_date.unwrap_or(existing.start_date),
            end_date: self.end_date.unwrap_or(existing.end_date),
            is_active: existing.is_active,
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.food_item_id.is_none()
            && self.discount_percentage.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
