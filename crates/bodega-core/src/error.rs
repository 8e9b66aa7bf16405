//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Error Types                             │
//! │                                                                │
//! │  bodega-core errors (this file)                                │
//! │  ├── CatalogError     - catalog store rejections               │
//! │  ├── CheckoutError    - checkout session rejections            │
//! │  └── ValidationError  - input validation failures              │
//! │                                                                │
//! │  Flow: ValidationError → CatalogError → CheckoutError → UI     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable by retry at the presentation boundary:
//! the core reports the rejection and leaves all state unchanged. Nothing
//! in this crate terminates the process.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, name, amounts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog store rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog is at capacity and cannot take another product.
    #[error("Catalog is full: cannot hold more than {max} products")]
    CapacityExceeded { max: usize },

    /// A 1-based index fell outside `[1, len]`.
    ///
    /// ## When This Occurs
    /// - Edit/Delete with a stale product number after a deletion
    /// - Any index on an empty catalog
    #[error("Product number {index} is out of range (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A stock decrement asked for more units than are on hand.
    ///
    /// ## Operator Workflow
    /// ```text
    /// Purchase "Ballpen" qty 5
    ///      │
    ///      ▼
    /// Check stock: available = 3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Ballpen", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Insufficient stock for Ballpen"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A stock decrement with a non-positive amount.
    #[error("Stock decrement must be positive (got {requested})")]
    InvalidQuantity { requested: i64 },

    /// Input validation failure on Add/Edit (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout session rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The selected product number does not address a catalog entry.
    #[error("Invalid selection: product number {index} is out of range (catalog has {len})")]
    InvalidSelection { index: usize, len: usize },

    /// The selected product has zero units on hand.
    #[error("Sorry, {name} is out of stock")]
    OutOfStock { name: String },

    /// The requested purchase quantity is not positive.
    #[error("Purchase quantity must be positive (got {requested})")]
    InvalidQuantity { requested: i64 },

    /// Completing the purchase would push the cart past its unit capacity.
    #[error("Cart cannot hold more than {max} units")]
    CartFull { max: usize },

    /// The tendered amount does not cover the receipt subtotal.
    ///
    /// The sale is NOT final: the caller must keep the cart and may retry
    /// settlement with a new amount.
    #[error("Insufficient payment: subtotal {subtotal_cents} centavos, tendered {tendered_cents}")]
    InsufficientPayment {
        subtotal_cents: i64,
        tendered_cents: i64,
    },

    /// Catalog-side rejection surfaced during a purchase (stock decrement).
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a product draft or an entered amount doesn't meet
/// requirements. Used for early validation before catalog mutation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (zero is allowed).
    #[error("{field} must not be negative")]
    NegativeNotAllowed { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for catalog store results.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience alias for checkout session results.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
