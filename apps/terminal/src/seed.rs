//! # Seed Loading
//!
//! Populates the catalog with demo products from a JSON file at startup.
//!
//! ## File Format
//! ```json
//! [
//!   { "name": "Ballpen", "quantity": 10, "price": "5.00" },
//!   { "name": "Sardinas 155g", "quantity": 24, "price": "28.50" }
//! ]
//! ```
//!
//! Prices are decimal strings parsed through [`Money`]'s `FromStr` -- the
//! same parser the payment prompt uses, so the seed file cannot smuggle in
//! an amount the terminal would not accept.
//!
//! Every entry goes through [`Catalog::add`], so validation and the
//! capacity bound apply exactly as they do for operator input. Rejected
//! entries are logged and skipped; they do not abort startup.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use bodega_core::{Catalog, Money, ProductDraft};

use crate::error::AppError;

/// One product entry in the seed file.
#[derive(Debug, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub quantity: i64,
    /// Decimal string, e.g. "12.50".
    pub price: String,
}

/// Loads a seed file and adds its products to the catalog.
///
/// Returns the number of products actually added. Entries with an
/// unparseable price or a draft the catalog rejects are skipped with a
/// warning; an unreadable or malformed file is fatal.
pub fn load_into(catalog: &mut Catalog, path: &Path) -> Result<usize, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<SeedProduct> =
        serde_json::from_str(&raw).map_err(|source| AppError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut added = 0;
    for entry in entries {
        let price: Money = match entry.price.parse() {
            Ok(price) => price,
            Err(err) => {
                warn!(name = %entry.name, price = %entry.price, %err, "Seed entry skipped");
                continue;
            }
        };

        match catalog.add(ProductDraft::new(&entry.name, entry.quantity, price)) {
            Ok(product) => {
                debug!(name = %product.name, id = %product.id, "Seed product added");
                added += 1;
            }
            Err(err) => warn!(name = %entry.name, %err, "Seed entry rejected"),
        }
    }

    Ok(added)
}

// =============================================================================
// Unit Tests
// =============================================================================
