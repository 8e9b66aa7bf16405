//! # bodega-core: Pure Business Logic for Bodega POS
//!
//! This crate is the **heart** of Bodega POS. It contains the catalog store
//! and the checkout session as pure data structures with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Bodega POS Architecture                    │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                 apps/terminal (console UI)               │  │
//! │  │    Menus ──► Prompts ──► Receipt rendering               │  │
//! │  └─────────────────────────────┬────────────────────────────┘  │
//! │                                │ plain function calls          │
//! │  ┌─────────────────────────────▼────────────────────────────┐  │
//! │  │             ★ bodega-core (THIS CRATE) ★                 │  │
//! │  │                                                          │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐    │  │
//! │  │  │ catalog │ │checkout │ │  money   │ │ validation │    │  │
//! │  │  │ Catalog │ │ Session │ │  Money   │ │   rules    │    │  │
//! │  │  │ Product │ │ Receipt │ │ FromStr  │ │   checks   │    │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘    │  │
//! │  │                                                          │  │
//! │  │  NO I/O • NO CONSOLE • NO FILES • PURE FUNCTIONS         │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - bounded product list with add/view/edit/delete and the
//!   guarded stock decrement
//! - [`checkout`] - session cart, receipt building, payment settlement
//! - [`money`] - integer-centavo money type (no floating point!)
//! - [`types`] - domain types ([`Product`], [`ProductDraft`])
//! - [`error`] - typed domain errors
//! - [`validation`] - business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: no hidden state, same input = same output
//! 2. **No I/O**: console, file system, network access is FORBIDDEN here
//! 3. **Integer money**: all monetary values are centavos (i64)
//! 4. **Explicit errors**: typed, never strings, never panics
//! 5. **No partial mutation**: every rejected operation leaves state unchanged
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{Catalog, CheckoutSession, Money, ProductDraft};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add(ProductDraft::new("Ballpen", 10, Money::from_cents(500)))
//!     .unwrap();
//!
//! let mut session = CheckoutSession::new();
//! session.select_and_purchase(&mut catalog, 1, 3).unwrap();
//!
//! let receipt = session.build_receipt();
//! assert_eq!(receipt.subtotal().cents(), 1500);
//!
//! let settlement = CheckoutSession::settle_payment(
//!     receipt.subtotal(),
//!     Money::from_cents(2000),
//! )
//! .unwrap();
//! assert_eq!(settlement.change.cents(), 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Catalog` instead of
// `use bodega_core::catalog::Catalog`

pub use catalog::Catalog;
pub use checkout::{CartUnit, CheckoutSession, Receipt, ReceiptLine, Settlement};
pub use error::{CatalogError, CheckoutError, ValidationError};
pub use money::Money;
pub use types::{Product, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum products the catalog holds.
///
/// ## Business Reason
/// A bodega counter lists at most a hundred items; the bound keeps the
/// 1-based menu numbering readable and every operation O(100) at worst.
pub const MAX_CATALOG_PRODUCTS: usize = 100;

/// Maximum purchased units in one checkout session's cart.
///
/// Each purchased unit is its own cart entry (buying 3 pens appends 3
/// entries), so this bounds total units, not distinct products.
pub const MAX_CART_UNITS: usize = 100;
