//! # Validation Module
//!
//! Business-rule validation for operator input.
//!
//! ## Validation Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                          │
//! │                                                                │
//! │  Layer 1: Terminal prompts (apps/terminal)                     │
//! │  ├── Parse failures (not a number, bad amount format)          │
//! │  └── Reported and re-prompted on the spot                      │
//! │           │                                                    │
//! │           ▼                                                    │
//! │  Layer 2: THIS MODULE - business rules                         │
//! │  ├── Name present and bounded                                  │
//! │  ├── Stock never negative                                      │
//! │  └── Price strictly positive                                   │
//! │           │                                                    │
//! │           ▼                                                    │
//! │  Layer 3: Catalog/checkout structural checks                   │
//! │  ├── Capacity bounds                                           │
//! │  └── Index ranges, stock availability                          │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Non-positive prices and negative stock are rejected here. The catalog
//! never stores a product that fails these rules, so every listing and
//! receipt line renders a sane amount.

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Sardinas 155g").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity for Add/Edit.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (a product may be listed while sold out)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::NegativeNotAllowed {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in centavos.
///
/// ## Rules
/// - Must be positive (> 0); free or negative listings are rejected
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1250).is_ok());  // ₱12.50
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

/// Validates a requested purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0); availability is checked by the catalog
pub fn validate_purchase_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "purchase quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a tendered payment amount in centavos.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (it settles a zero subtotal, nothing else)
pub fn validate_payment_amount(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativeNotAllowed {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Sardinas 155g").is_ok());
        assert!(validate_product_name("  padded  ").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(100).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(1250).is_ok());

        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(0).is_ok());
        assert!(validate_payment_amount(2000).is_ok());
        assert!(validate_payment_amount(-1).is_err());
    }
}
