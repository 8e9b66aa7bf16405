//! # Catalog Store
//!
//! The bounded product list and its mutation operations.
//!
//! ## Operations
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                       Catalog Store                            │
//! │                                                                │
//! │  add(draft) ──────────► validate ──► capacity gate ──► append  │
//! │  products() ──────────► read-only slice, 1-based on display    │
//! │  get/edit/delete(n) ──► bounds gate on the 1-based number      │
//! │  decrement_stock(n,q) ► the ONLY path that deducts stock       │
//! │                                                                │
//! │  Every rejected call leaves the catalog byte-for-byte as it    │
//! │  was. Delete shifts trailing entries one slot left, so the     │
//! │  remaining 1-based numbering stays contiguous.                 │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexing
//! All public operations take the 1-based product number the operator sees
//! in listings. Internally the catalog is a `Vec`; the number is resolved
//! once, up front, and an out-of-range number is a typed rejection, never
//! a panic.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Product, ProductDraft};
use crate::MAX_CATALOG_PRODUCTS;

// =============================================================================
// Catalog
// =============================================================================

/// The bounded, insertion-ordered product list.
///
/// ## Invariants
/// - `0 <= len <= capacity` (capacity defaults to [`MAX_CATALOG_PRODUCTS`])
/// - every stored product passed [`ProductDraft::validate`]
/// - stock is deducted only through [`Catalog::decrement_stock`]
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    capacity: usize,
}

impl Catalog {
    /// Creates an empty catalog with the default capacity (100 products).
    pub fn new() -> Self {
        Self::with_capacity(MAX_CATALOG_PRODUCTS)
    }

    /// Creates an empty catalog with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Catalog {
            products: Vec::new(),
            capacity,
        }
    }

    // -------------------------------------------------------------------------
    // Add
    // -------------------------------------------------------------------------

    /// Adds a new product at the end of the catalog.
    ///
    /// ## Behavior
    /// - Validates the draft (name/quantity/price rules) before anything else
    /// - Rejects with `CapacityExceeded` when the catalog is full
    /// - On success assigns a fresh UUID and timestamps and returns the
    ///   stored product
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::{Catalog, Money, ProductDraft};
    ///
    /// let mut catalog = Catalog::new();
    /// let product = catalog
    ///     .add(ProductDraft::new("Ballpen", 10, Money::from_cents(500)))
    ///     .unwrap();
    /// assert_eq!(product.quantity, 10);
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn add(&mut self, draft: ProductDraft) -> CatalogResult<&Product> {
        draft.validate()?;

        if self.products.len() >= self.capacity {
            return Err(CatalogError::CapacityExceeded { max: self.capacity });
        }

        let now = Utc::now();
        self.products.push(Product {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            price_cents: draft.price_cents,
            created_at: now,
            updated_at: now,
        });

        Ok(self.products.last().expect("push succeeded"))
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Returns the current product list in insertion order.
    ///
    /// Read-only; the 1-based product number is the slice position plus one.
    /// An empty slice is a valid, displayable state.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Resolves a 1-based product number to the product.
    pub fn get(&self, index: usize) -> CatalogResult<&Product> {
        let slot = self.resolve(index)?;
        Ok(&self.products[slot])
    }

    // -------------------------------------------------------------------------
    // Edit
    // -------------------------------------------------------------------------

    /// Replaces the name, quantity and price of the addressed product.
    ///
    /// ## Behavior
    /// - The draft is validated before the catalog is touched
    /// - `id`, `created_at` and the product's position are preserved;
    ///   `updated_at` is bumped
    /// - Earlier cart snapshots are unaffected (they are copies)
    pub fn edit(&mut self, index: usize, draft: ProductDraft) -> CatalogResult<&Product> {
        draft.validate()?;
        let slot = self.resolve(index)?;

        let product = &mut self.products[slot];
        product.name = draft.name.trim().to_string();
        product.quantity = draft.quantity;
        product.price_cents = draft.price_cents;
        product.updated_at = Utc::now();

        Ok(&self.products[slot])
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Removes the addressed product and returns it.
    ///
    /// Trailing entries shift one position left, so the remaining products
    /// keep contiguous 1-based numbering. O(n) in the trailing entries,
    /// acceptable under the 100-product bound.
    pub fn delete(&mut self, index: usize) -> CatalogResult<Product> {
        let slot = self.resolve(index)?;
        Ok(self.products.remove(slot))
    }

    // -------------------------------------------------------------------------
    // Stock
    // -------------------------------------------------------------------------

    /// Deducts `amount` units from the addressed product's stock.
    ///
    /// This is the SOLE guarded stock-mutation path: checkout never touches
    /// `quantity` directly, so stock can never be oversold.
    ///
    /// ## Behavior
    /// - `amount` must be positive, else `InvalidQuantity`
    /// - `amount` must not exceed the units on hand, else
    ///   `InsufficientStock` (stock unchanged)
    /// - On success subtracts in place and bumps `updated_at`
    pub fn decrement_stock(&mut self, index: usize, amount: i64) -> CatalogResult<()> {
        let slot = self.resolve(index)?;

        if amount <= 0 {
            return Err(CatalogError::InvalidQuantity { requested: amount });
        }

        let product = &mut self.products[slot];
        if amount > product.quantity {
            return Err(CatalogError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: amount,
            });
        }

        product.quantity -= amount;
        product.updated_at = Utc::now();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// Number of products currently listed.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog has no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Checks whether the catalog is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.products.len() >= self.capacity
    }

    /// Maximum number of products this catalog holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maps a 1-based product number to its Vec slot.
    fn resolve(&self, index: usize) -> CatalogResult<usize> {
        if index == 0 || index > self.products.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.products.len(),
            });
        }
        Ok(index - 1)
    }
}

impl Default for Catalog {
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
    use crate::money::Money;

    fn draft(name: &str, quantity: i64, price_cents: i64) -> ProductDraft {
        ProductDraft::new(name, quantity, Money::from_cents(price_cents))
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.products().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();
        catalog.add(draft("Notebook", 5, 2500)).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(names(&catalog), vec!["Ballpen", "Notebook"]);
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut catalog = Catalog::new();
        let a = catalog.add(draft("Ballpen", 10, 500)).unwrap().id;
        let b = catalog.add(draft("Ballpen", 10, 500)).unwrap().id;
        // duplicate names are allowed; identity is the UUID
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.add(draft("", 10, 500)),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            catalog.add(draft("Ballpen", -1, 500)),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            catalog.add(draft("Ballpen", 10, 0)),
            Err(CatalogError::Validation(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_capacity_bound() {
        let mut catalog = Catalog::with_capacity(100);
        for i in 0..100 {
            catalog.add(draft(&format!("Item {i}"), 1, 100)).unwrap();
        }
        assert_eq!(catalog.len(), 100);
        assert!(catalog.is_full());

        // the 101st add is rejected and the length stays 100
        let err = catalog.add(draft("Overflow", 1, 100)).unwrap_err();
        assert_eq!(err, CatalogError::CapacityExceeded { max: 100 });
        assert_eq!(catalog.len(), 100);
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();

        let first: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        let second: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_view_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_get_one_based() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();

        assert_eq!(catalog.get(1).unwrap().name, "Ballpen");
        assert!(matches!(
            catalog.get(0),
            Err(CatalogError::IndexOutOfRange { index: 0, len: 1 })
        ));
        assert!(matches!(
            catalog.get(2),
            Err(CatalogError::IndexOutOfRange { index: 2, len: 1 })
        ));
    }

    #[test]
    fn test_edit_replaces_fields_in_place() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();
        catalog.add(draft("Notebook", 5, 2500)).unwrap();
        let original_id = catalog.get(1).unwrap().id;

        catalog.edit(1, draft("Sign Pen", 8, 1500)).unwrap();

        let edited = catalog.get(1).unwrap();
        assert_eq!(edited.name, "Sign Pen");
        assert_eq!(edited.quantity, 8);
        assert_eq!(edited.price_cents, 1500);
        assert_eq!(edited.id, original_id);
        // position preserved
        assert_eq!(names(&catalog), vec!["Sign Pen", "Notebook"]);
    }

    #[test]
    fn test_edit_invalid_index_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();

        assert!(catalog.edit(5, draft("Sign Pen", 8, 1500)).is_err());
        assert_eq!(catalog.get(1).unwrap().name, "Ballpen");
    }

    #[test]
    fn test_edit_invalid_draft_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();

        assert!(catalog.edit(1, draft("Ballpen", 10, -5)).is_err());
        assert_eq!(catalog.get(1).unwrap().price_cents, 500);
    }

    #[test]
    fn test_delete_shifts_trailing_entries() {
        let mut catalog = Catalog::new();
        for name in ["A", "B", "C", "D"] {
            catalog.add(draft(name, 1, 100)).unwrap();
        }

        let removed = catalog.delete(2).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(catalog.len(), 3);
        // entries after position 2 shifted one position earlier, in order
        assert_eq!(names(&catalog), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_delete_invalid_index() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();

        assert!(matches!(
            catalog.delete(2),
            Err(CatalogError::IndexOutOfRange { index: 2, len: 1 })
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_decrement_stock_success() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 10, 500)).unwrap();
        catalog.add(draft("Notebook", 5, 2500)).unwrap();

        catalog.decrement_stock(1, 3).unwrap();

        assert_eq!(catalog.get(1).unwrap().quantity, 7);
        // no other entry changes
        assert_eq!(catalog.get(2).unwrap().quantity, 5);
    }

    #[test]
    fn test_decrement_stock_insufficient_leaves_quantity_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 3, 500)).unwrap();

        let err = catalog.decrement_stock(1, 5).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InsufficientStock {
                name: "Ballpen".to_string(),
                available: 3,
                requested: 5,
            }
        );
        assert_eq!(catalog.get(1).unwrap().quantity, 3);
    }

    #[test]
    fn test_decrement_stock_rejects_non_positive_amount() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 3, 500)).unwrap();

        assert!(matches!(
            catalog.decrement_stock(1, 0),
            Err(CatalogError::InvalidQuantity { requested: 0 })
        ));
        assert!(matches!(
            catalog.decrement_stock(1, -2),
            Err(CatalogError::InvalidQuantity { requested: -2 })
        ));
        assert_eq!(catalog.get(1).unwrap().quantity, 3);
    }

    #[test]
    fn test_decrement_stock_to_zero() {
        let mut catalog = Catalog::new();
        catalog.add(draft("Ballpen", 3, 500)).unwrap();

        catalog.decrement_stock(1, 3).unwrap();
        assert_eq!(catalog.get(1).unwrap().quantity, 0);
        assert!(!catalog.get(1).unwrap().in_stock());
    }
}
