//! # Domain Types
//!
//! Core domain types used throughout Bodega POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                            │
//! │                                                                │
//! │  ┌─────────────────┐        ┌─────────────────┐                │
//! │  │    Product      │        │  ProductDraft   │                │
//! │  │  ─────────────  │ ◄───── │  ─────────────  │                │
//! │  │  id (UUID)      │  add/  │  name           │                │
//! │  │  name           │  edit  │  quantity       │                │
//! │  │  quantity       │        │  price_cents    │                │
//! │  │  price_cents    │        └─────────────────┘                │
//! │  │  created_at     │                                           │
//! │  │  updated_at     │        Draft = operator input, validated  │
//! │  └─────────────────┘        before it touches the catalog      │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every product gets an immutable UUID v4 at creation. The 1-based catalog
//! position the operator types is a presentation concern: the catalog
//! resolves it to the product, and cart snapshots carry the UUID so a later
//! edit or delete cannot be confused with the purchased item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name, validate_stock_quantity};

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned when the product is added.
    pub id: Uuid,

    /// Display name shown in listings and on the receipt.
    pub name: String,

    /// Units currently in stock. Never negative; zero means out of stock.
    pub quantity: i64,

    /// Unit price in centavos (smallest currency unit). Always positive.
    pub price_cents: i64,

    /// When the product was added to the catalog.
    pub created_at: DateTime<Utc>,

    /// When the product was last edited or restocked.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether at least one unit is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_fill(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.quantity
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Operator input for Add and Edit, validated before it touches the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product display name.
    pub name: String,

    /// Initial (or replacement) stock level. Zero is allowed: a product may
    /// be listed while sold out.
    pub quantity: i64,

    /// Unit price in centavos. Must be positive.
    pub price_cents: i64,
}

impl ProductDraft {
    /// Creates a draft from a name, stock level and unit price.
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        ProductDraft {
            name: name.into(),
            quantity,
            price_cents: price.cents(),
        }
    }

    /// Runs the business-rule checks for a draft.
    ///
    /// ## Rules
    /// - name: non-empty after trimming, at most 200 characters
    /// - quantity: not negative (zero allowed)
    /// - price: strictly positive
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_stock_quantity(self.quantity)?;
        validate_price_cents(self.price_cents)?;
        Ok(())
    }

    /// Returns the draft's price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(quantity: i64, price_cents: i64) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: "Ballpen".to_string(),
            quantity,
            price_cents,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_product_price_as_money() {
        let product = test_product(10, 1250);
        assert_eq!(product.price(), Money::from_cents(1250));
    }

    #[test]
    fn test_in_stock() {
        assert!(test_product(1, 100).in_stock());
        assert!(!test_product(0, 100).in_stock());
    }

    #[test]
    fn test_can_fill() {
        let product = test_product(5, 100);
        assert!(product.can_fill(1));
        assert!(product.can_fill(5));
        assert!(!product.can_fill(6));
        assert!(!product.can_fill(0));
        assert!(!product.can_fill(-1));
    }

    #[test]
    fn test_draft_validate() {
        assert!(ProductDraft::new("Ballpen", 10, Money::from_cents(500))
            .validate()
            .is_ok());
        // zero stock is a listable state
        assert!(ProductDraft::new("Ballpen", 0, Money::from_cents(500))
            .validate()
            .is_ok());

        assert!(ProductDraft::new("", 10, Money::from_cents(500))
            .validate()
            .is_err());
        assert!(ProductDraft::new("Ballpen", -1, Money::from_cents(500))
            .validate()
            .is_err());
        assert!(ProductDraft::new("Ballpen", 10, Money::zero())
            .validate()
            .is_err());
        assert!(ProductDraft::new("Ballpen", 10, Money::from_cents(-500))
            .validate()
            .is_err());
    }
}
