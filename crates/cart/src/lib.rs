//! Shopcart Cart - In-memory cart with durable snapshots and stock validation.
//!
//! The centerpiece is [`CartStore`]: it owns the in-memory cart, exposes the
//! mutation operations (`add_product`, `remove_product`,
//! `update_product_amount`), and keeps a serialized snapshot in durable
//! storage in sync with every committed change.
//!
//! # Architecture
//!
//! The store depends on three injected collaborators, each behind a trait so
//! tests and alternate deployments can swap implementations:
//!
//! - [`StockService`](stock::StockService) - authoritative stock levels and
//!   product metadata. [`HttpStockClient`](stock::HttpStockClient) is the
//!   shipped REST adapter.
//! - [`SnapshotStore`](snapshot::SnapshotStore) - durable key-value storage
//!   for the serialized cart. [`FileSnapshotStore`](snapshot::FileSnapshotStore)
//!   persists one JSON document per key;
//!   [`MemorySnapshotStore`](snapshot::MemorySnapshotStore) backs tests and
//!   local development.
//! - [`Notifier`](notify::Notifier) - fire-and-forget channel for
//!   human-readable error messages. [`TracingNotifier`](notify::TracingNotifier)
//!   forwards to the log.
//!
//! Operations never return errors to the caller: every failure is absorbed
//! at the operation boundary, surfaced through the notifier, and reported as
//! a typed [`CartOutcome`] so calling code can still branch on what happened.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopcart_cart::{CartConfig, CartStore};
//! use shopcart_cart::notify::TracingNotifier;
//! use shopcart_cart::snapshot::FileSnapshotStore;
//! use shopcart_cart::stock::HttpStockClient;
//!
//! let config = CartConfig::from_env()?;
//! let store = CartStore::load(
//!     Arc::new(HttpStockClient::new(&config.stock)?),
//!     Arc::new(TracingNotifier),
//!     Arc::new(FileSnapshotStore::new(&config.data_dir)),
//!     &config.cart_key,
//! )
//! .await;
//!
//! store.add_product(ProductId::new(7)).await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod notify;
pub mod snapshot;
pub mod stock;
mod store;

pub use config::{CartConfig, ConfigError, StockApiConfig};
pub use store::{CartOutcome, CartStore};
