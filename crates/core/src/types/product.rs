//! Product and stock domain types.
//!
//! [`Product`] is a cart entry: catalog metadata plus the quantity currently
//! in the cart. [`ProductInfo`] is the same metadata without a quantity, as
//! served by the catalog endpoint. [`StockLevel`] is the authoritative
//! available quantity owned by the stock service - cart code never writes it.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product entry in a cart.
///
/// `amount` is the quantity of this product in the cart, not the stock
/// level. Any `Product` held in a cart has `amount >= 1`; an entry that
/// would drop to 0 is removed instead of being retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    /// Quantity in the cart.
    pub amount: u32,
}

/// Catalog metadata for a product, without a cart quantity.
///
/// This is the shape returned by `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
}

impl ProductInfo {
    /// Turn catalog metadata into a cart entry with the given quantity.
    #[must_use]
    pub fn into_product(self, amount: u32) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            amount,
        }
    }
}

/// Available stock for a product, as reported by the stock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: ProductId,
    /// Units available for sale.
    pub amount: u32,
}
