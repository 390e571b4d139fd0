//! REST client for the stock/catalog API.
//!
//! Endpoints:
//! - `GET {base}/stock/{id}` -> `{ "amount": n }`
//! - `GET {base}/products/{id}` -> product metadata (no cart quantity)
//!
//! Product metadata is cached with a 5-minute TTL. Stock levels are never
//! cached: availability is mutable state and every cart mutation must see
//! the current value.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use shopcart_core::{CurrencyCode, Price, ProductId, ProductInfo, StockLevel};

use crate::config::StockApiConfig;

use super::{StockError, StockService};

/// Client for the stock/catalog REST API.
#[derive(Clone)]
pub struct HttpStockClient {
    client: reqwest::Client,
    base_url: Url,
    product_cache: Cache<ProductId, ProductInfo>,
}

impl HttpStockClient {
    /// Create a new stock API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the configured
    /// token is not a valid header value.
    pub fn new(config: &StockApiConfig) -> Result<Self, StockError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.api_token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            headers.insert(
                "Authorization",
                HeaderValue::from_str(&auth_value)
                    .map_err(|e| StockError::Parse(format!("Invalid token format: {e}")))?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let product_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            product_cache,
        })
    }

    /// Fetch and decode a JSON document from a path under the base URL.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        product_id: ProductId,
    ) -> Result<T, StockError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| StockError::Parse(format!("Invalid URL path {path}: {e}")))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StockError::ProductNotFound(product_id));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StockError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StockError::Parse(e.to_string()))
    }
}

#[async_trait]
impl StockService for HttpStockClient {
    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, StockError> {
        let payload: StockPayload = self
            .fetch_json(&format!("stock/{product_id}"), product_id)
            .await?;

        Ok(StockLevel {
            product_id,
            amount: payload.amount,
        })
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn product(&self, product_id: ProductId) -> Result<ProductInfo, StockError> {
        // Check cache
        if let Some(info) = self.product_cache.get(&product_id).await {
            debug!("Cache hit for product");
            return Ok(info);
        }

        let payload: ProductPayload = self
            .fetch_json(&format!("products/{product_id}"), product_id)
            .await?;

        let info = ProductInfo::from(payload);

        // Cache the result
        self.product_cache.insert(product_id, info.clone()).await;

        Ok(info)
    }
}

/// Wire shape of `GET stock/{id}`.
#[derive(Debug, Deserialize)]
struct StockPayload {
    amount: u32,
}

/// Wire shape of `GET products/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    id: ProductId,
    name: String,
    price: Decimal,
    image_url: String,
}

impl From<ProductPayload> for ProductInfo {
    fn from(payload: ProductPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            // The catalog API serves bare decimal amounts; currency is fixed
            // per deployment.
            price: Price::new(payload.price, CurrencyCode::default()),
            image_url: payload.image_url,
        }
    }
}
