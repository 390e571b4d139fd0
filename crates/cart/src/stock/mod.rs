//! Stock service port and the shipped REST adapter.
//!
//! The stock service is the authority on product availability and catalog
//! metadata. Cart code only ever reads from it; nothing here mutates stock.

mod http;

pub use http::HttpStockClient;

use async_trait::async_trait;
use thiserror::Error;

use shopcart_core::{ProductId, ProductInfo, StockLevel};

/// Errors that can occur when querying the stock service.
#[derive(Debug, Error)]
pub enum StockError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No product exists with the given id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Failed to parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read-only access to stock levels and catalog metadata.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Current available quantity for a product.
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, StockError>;

    /// Catalog metadata for a product (everything but the cart quantity).
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, StockError>;
}
