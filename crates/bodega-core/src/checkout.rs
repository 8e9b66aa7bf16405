//! # Checkout Session
//!
//! Drives purchase selections against the catalog, accumulates a cart of
//! per-unit snapshots, and computes the receipt and change.
//!
//! ## Session Lifecycle
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   Checkout Session Lifecycle                   │
//! │                                                                │
//! │  ┌──────────┐    ┌───────────┐    ┌──────────┐    ┌─────────┐  │
//! │  │ Selecting│───►│ Purchased │───►│ Receipt  │───►│ Settled │  │
//! │  │          │◄───│ /Rejected │    │  Built   │    │         │  │
//! │  └──────────┘    └───────────┘    └────┬─────┘    └─────────┘  │
//! │       ▲                                │                       │
//! │       │ repeat until operator stops    │ InsufficientPayment   │
//! │       │ or the cart fills              ▼                       │
//! │       │                          ┌───────────┐                 │
//! │       └──────────────────────────│ Awaiting  │ (retry with a   │
//! │                                  │ Payment   │  new amount)    │
//! │                                  └───────────┘                 │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Model
//! One cart entry per purchased UNIT: buying 3 ballpens appends the ballpen
//! snapshot three times. The receipt iterates units, not lines, and the
//! subtotal is the plain sum of per-unit prices. Snapshots are copies taken
//! before the stock decrement, so a later edit or delete of the product
//! never rewrites what the customer bought.
//!
//! The session owns its cart: it is created empty per checkout and dropped
//! with the session, and its 100-unit capacity applies per session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_payment_amount;
use crate::MAX_CART_UNITS;

// =============================================================================
// Cart Unit
// =============================================================================

/// A single purchased unit: a frozen copy of the product at purchase time.
///
/// ## Price Freezing
/// Name and price are captured when the unit enters the cart. If the
/// product is edited or deleted afterwards, this entry keeps the values
/// the customer was charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUnit {
    /// Stable identity of the purchased product.
    pub product_id: Uuid,

    /// Product name at purchase time (frozen).
    pub name: String,

    /// Unit price in centavos at purchase time (frozen).
    pub unit_price_cents: i64,
}

impl CartUnit {
    /// Snapshots one unit of a product.
    fn from_product(product: &Product) -> Self {
        CartUnit {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One printed receipt line; the receipt has one line per purchased unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub price_cents: i64,
}

impl ReceiptLine {
    /// Returns the line price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// The receipt for a session: per-unit lines plus their subtotal.
///
/// Built as a pure function of the cart; building it mutates nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal_cents: i64,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Checks whether the receipt has no lines (nothing was purchased).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Settlement
// =============================================================================

/// A completed payment: what was owed, what was tendered, what came back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub subtotal: Money,
    pub tendered: Money,
    /// Never negative: the insufficient-payment guard runs first.
    pub change: Money,
}

// =============================================================================
// Checkout Session
// =============================================================================

/// One point-of-sale checkout: selection loop, cart, receipt, settlement.
///
/// ## Invariants
/// - cart length never exceeds the session capacity ([`MAX_CART_UNITS`])
/// - stock is deducted if and only if the matching units entered the cart
///   (each `select_and_purchase` call is atomic: all checks run before the
///   decrement, and the append cannot fail afterwards)
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    cart: Vec<CartUnit>,
    capacity: usize,
}

impl CheckoutSession {
    /// Creates an empty session with the default cart capacity (100 units).
    pub fn new() -> Self {
        Self::with_capacity(MAX_CART_UNITS)
    }

    /// Creates an empty session with an explicit cart capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        CheckoutSession {
            cart: Vec::new(),
            capacity,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Purchases `quantity` units of the product at 1-based `index`.
    ///
    /// ## Check Order
    /// ```text
    /// 1. index within [1, catalog len]      else InvalidSelection
    /// 2. product has stock on hand          else OutOfStock
    /// 3. quantity > 0                       else InvalidQuantity
    /// 4. cart has room for quantity units   else CartFull
    /// 5. quantity <= available              else InsufficientStock
    ///    (enforced by Catalog::decrement_stock, the sole deduction path)
    /// ```
    /// The snapshot is taken before the decrement; on success exactly
    /// `quantity` copies are appended and the appended slice is returned.
    /// On any rejection neither the catalog nor the cart changes.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::{Catalog, CheckoutSession, Money, ProductDraft};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog
    ///     .add(ProductDraft::new("Ballpen", 10, Money::from_cents(500)))
    ///     .unwrap();
    ///
    /// let mut session = CheckoutSession::new();
    /// let added = session.select_and_purchase(&mut catalog, 1, 3).unwrap();
    /// assert_eq!(added.len(), 3);
    /// assert_eq!(catalog.get(1).unwrap().quantity, 7);
    /// ```
    pub fn select_and_purchase(
        &mut self,
        catalog: &mut Catalog,
        index: usize,
        quantity: i64,
    ) -> CheckoutResult<&[CartUnit]> {
        let product = catalog
            .get(index)
            .map_err(|_| CheckoutError::InvalidSelection {
                index,
                len: catalog.len(),
            })?;

        if !product.in_stock() {
            return Err(CheckoutError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity {
                requested: quantity,
            });
        }

        // capacity gate BEFORE the decrement: stock must never be deducted
        // without the matching cart entries
        let units = quantity as usize;
        if self.cart.len() + units > self.capacity {
            return Err(CheckoutError::CartFull { max: self.capacity });
        }

        // pre-decrement snapshot; the decrement may still reject on
        // availability, in which case nothing was appended either
        let snapshot = CartUnit::from_product(product);
        catalog.decrement_stock(index, quantity)?;

        let start = self.cart.len();
        self.cart
            .extend(std::iter::repeat_with(|| snapshot.clone()).take(units));

        Ok(&self.cart[start..])
    }

    // -------------------------------------------------------------------------
    // Receipt
    // -------------------------------------------------------------------------

    /// Builds the receipt for everything purchased in this session.
    ///
    /// Pure function of the cart: one line per unit, subtotal = sum of
    /// per-unit prices. Calling it twice yields the same lines.
    pub fn build_receipt(&self) -> Receipt {
        let lines: Vec<ReceiptLine> = self
            .cart
            .iter()
            .map(|unit| ReceiptLine {
                name: unit.name.clone(),
                price_cents: unit.unit_price_cents,
            })
            .collect();
        let subtotal_cents = lines.iter().map(|line| line.price_cents).sum();

        Receipt {
            lines,
            subtotal_cents,
            issued_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Settlement
    // -------------------------------------------------------------------------

    /// Settles a payment against a subtotal.
    ///
    /// ## Behavior
    /// - negative tendered amounts are rejected as `InsufficientPayment`
    ///   (one rejection surface for the operator)
    /// - `tendered < subtotal` is `InsufficientPayment`; the sale is not
    ///   final and the caller keeps the cart and may retry with a new amount
    /// - otherwise change = tendered − subtotal (zero change is a valid,
    ///   exact payment)
    pub fn settle_payment(subtotal: Money, tendered: Money) -> CheckoutResult<Settlement> {
        if validate_payment_amount(tendered.cents()).is_err() || tendered < subtotal {
            return Err(CheckoutError::InsufficientPayment {
                subtotal_cents: subtotal.cents(),
                tendered_cents: tendered.cents(),
            });
        }

        Ok(Settlement {
            subtotal,
            tendered,
            change: tendered - subtotal,
        })
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// The purchased units, in purchase order.
    #[inline]
    pub fn units(&self) -> &[CartUnit] {
        &self.cart
    }

    /// Number of purchased units in the cart.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.cart.len()
    }

    /// How many more units this session's cart can take.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.cart.len())
    }

    /// Checks whether nothing has been purchased yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Checks whether the cart is at its unit capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cart.len() >= self.capacity
    }

    /// Running subtotal of the cart.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.cart.iter().map(|u| u.unit_price_cents).sum())
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::types::ProductDraft;

    fn stocked_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add(ProductDraft::new("Pen", 10, Money::from_cents(500)))
            .unwrap();
        catalog
            .add(ProductDraft::new("Notebook", 2, Money::from_cents(2500)))
            .unwrap();
        catalog
            .add(ProductDraft::new("Eraser", 0, Money::from_cents(300)))
            .unwrap();
        catalog
    }

    #[test]
    fn test_purchase_deducts_stock_and_fills_cart() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        let added = session.select_and_purchase(&mut catalog, 1, 3).unwrap();
        assert_eq!(added.len(), 3);
        assert!(added.iter().all(|u| u.name == "Pen"));
        assert!(added.iter().all(|u| u.unit_price_cents == 500));

        assert_eq!(catalog.get(1).unwrap().quantity, 7);
        assert_eq!(session.unit_count(), 3);
    }

    #[test]
    fn test_invalid_selection() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        let err = session.select_and_purchase(&mut catalog, 9, 1).unwrap_err();
        assert_eq!(err, CheckoutError::InvalidSelection { index: 9, len: 3 });
        assert!(session.is_empty());
    }

    #[test]
    fn test_out_of_stock_product() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        let err = session.select_and_purchase(&mut catalog, 3, 1).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::OutOfStock {
                name: "Eraser".to_string()
            }
        );
        assert!(session.is_empty());
    }

    #[test]
    fn test_zero_quantity_appends_nothing() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        let err = session.select_and_purchase(&mut catalog, 1, 0).unwrap_err();
        assert_eq!(err, CheckoutError::InvalidQuantity { requested: 0 });
        assert!(session.is_empty());
        assert_eq!(catalog.get(1).unwrap().quantity, 10);
    }

    #[test]
    fn test_insufficient_stock_leaves_everything_unchanged() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        let err = session.select_and_purchase(&mut catalog, 2, 5).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Catalog(CatalogError::InsufficientStock {
                name: "Notebook".to_string(),
                available: 2,
                requested: 5,
            })
        );
        assert!(session.is_empty());
        assert_eq!(catalog.get(2).unwrap().quantity, 2);
    }

    #[test]
    fn test_cart_capacity_blocks_before_decrement() {
        let mut catalog = Catalog::new();
        catalog
            .add(ProductDraft::new("Pen", 50, Money::from_cents(500)))
            .unwrap();
        let mut session = CheckoutSession::with_capacity(5);

        session.select_and_purchase(&mut catalog, 1, 4).unwrap();
        let err = session.select_and_purchase(&mut catalog, 1, 2).unwrap_err();

        assert_eq!(err, CheckoutError::CartFull { max: 5 });
        // stock was NOT deducted for the rejected purchase
        assert_eq!(catalog.get(1).unwrap().quantity, 46);
        assert_eq!(session.unit_count(), 4);
        assert_eq!(session.remaining_capacity(), 1);
    }

    #[test]
    fn test_snapshots_survive_later_catalog_mutation() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        session.select_and_purchase(&mut catalog, 1, 2).unwrap();
        catalog
            .edit(1, ProductDraft::new("Gel Pen", 99, Money::from_cents(900)))
            .unwrap();
        catalog.delete(2).unwrap();

        // cart entries keep the purchase-time name and price
        assert!(session.units().iter().all(|u| u.name == "Pen"));
        assert!(session.units().iter().all(|u| u.unit_price_cents == 500));
    }

    #[test]
    fn test_receipt_iterates_units() {
        let mut catalog = stocked_catalog();
        let mut session = CheckoutSession::new();

        session.select_and_purchase(&mut catalog, 1, 3).unwrap();
        session.select_and_purchase(&mut catalog, 2, 1).unwrap();

        let receipt = session.build_receipt();
        assert_eq!(receipt.lines.len(), 4);
        assert_eq!(receipt.lines[0].name, "Pen");
        assert_eq!(receipt.lines[3].name, "Notebook");
        // subtotal is the per-unit sum: 3 × ₱5.00 + 1 × ₱25.00
        assert_eq!(receipt.subtotal(), Money::from_cents(4000));
        assert_eq!(session.subtotal(), receipt.subtotal());
    }

    #[test]
    fn test_receipt_of_empty_session() {
        let session = CheckoutSession::new();
        let receipt = session.build_receipt();
        assert!(receipt.is_empty());
        assert_eq!(receipt.subtotal(), Money::zero());
    }

    #[test]
    fn test_settle_payment_change() {
        let settlement =
            CheckoutSession::settle_payment(Money::from_cents(1500), Money::from_cents(2000))
                .unwrap();
        assert_eq!(settlement.change, Money::from_cents(500));

        // exact payment yields zero change
        let exact =
            CheckoutSession::settle_payment(Money::from_cents(1500), Money::from_cents(1500))
                .unwrap();
        assert_eq!(exact.change, Money::zero());
    }

    #[test]
    fn test_settle_payment_insufficient() {
        let err =
            CheckoutSession::settle_payment(Money::from_cents(1500), Money::from_cents(1000))
                .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientPayment {
                subtotal_cents: 1500,
                tendered_cents: 1000,
            }
        );
    }

    #[test]
    fn test_settle_payment_rejects_negative_tender() {
        let err = CheckoutSession::settle_payment(Money::zero(), Money::from_cents(-100))
            .unwrap_err();
        assert!(matches!(err, CheckoutError::InsufficientPayment { .. }));
    }

    /// The worked scenario: Pen ₱5.00 × 3 → subtotal ₱15.00, pay ₱20.00,
    /// change ₱5.00; paying ₱10.00 is rejected and retried.
    #[test]
    fn test_full_checkout_flow() {
        let mut catalog = Catalog::new();
        catalog
            .add(ProductDraft::new("Pen", 10, Money::from_cents(500)))
            .unwrap();
        let mut session = CheckoutSession::new();

        session.select_and_purchase(&mut catalog, 1, 3).unwrap();
        assert_eq!(catalog.get(1).unwrap().quantity, 7);

        let receipt = session.build_receipt();
        assert_eq!(receipt.subtotal(), Money::from_cents(1500));

        // first attempt under-pays; the session is still settleable
        assert!(
            CheckoutSession::settle_payment(receipt.subtotal(), Money::from_cents(1000)).is_err()
        );
        let settlement =
            CheckoutSession::settle_payment(receipt.subtotal(), Money::from_cents(2000)).unwrap();
        assert_eq!(settlement.change, Money::from_cents(500));
    }
}
