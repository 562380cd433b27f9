//! # menu-core: Pure Business Logic for the Menu Catalog
//!
//! This crate holds the domain rules of the catalog: what a food item is,
//! what makes an offer valid, when an offer is in effect and how much it
//! takes off a price. Everything here is a pure function of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    menu-api (axum routes)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         menu-engine (OfferEngine, CatalogService, cache)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ menu-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   offer   │  │ validation│  │   │
//! │  │   │ FoodItem  │  │   Money   │  │  window   │  │   rules   │  │   │
//! │  │   │  Offer    │  │ discount  │  │  pricing  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    menu-db (Database Layer)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (FoodItem, Offer, OfferPatch)
//! - [`money`] - Money type with integer cents
//! - [`offer`] - Offer window and discount rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use menu_core::{Money, Offer};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let offer = Offer::new(1, 20.0, None, start, end);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert!(offer.is_currently_active(today));
//! assert_eq!(
//!     offer.calculate_discounted_price(Money::from_cents(1050)).cents(),
//!     840
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod offer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a food item name.
pub const MAX_NAME_LEN: usize = 200;

/// Upper bound (inclusive) for an offer's discount percentage.
pub const MAX_DISCOUNT_PERCENTAGE: f64 = 100.0;
