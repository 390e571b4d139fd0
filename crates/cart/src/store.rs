//! The cart store.
//!
//! `CartStore` owns the in-memory cart and is the only writer of the durable
//! snapshot. Mutations validate against the stock service before committing;
//! every failure is absorbed here and surfaced through the notifier plus a
//! typed [`CartOutcome`] - operations never return `Err` and never panic.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::instrument;

use shopcart_core::{Product, ProductId};

use crate::notify::Notifier;
use crate::snapshot::SnapshotStore;
use crate::stock::{StockError, StockService};

/// Message shown when a requested quantity exceeds availability.
const OUT_OF_STOCK_MSG: &str = "Requested quantity is out of stock";
/// Message shown when adding a product fails for any other reason.
const ADD_FAILED_MSG: &str = "Failed to add product to cart";
/// Message shown when removing a product fails.
const REMOVE_FAILED_MSG: &str = "Failed to remove product from cart";
/// Message shown when changing a product quantity fails.
const UPDATE_FAILED_MSG: &str = "Failed to change product quantity";

/// What a cart operation did.
///
/// Operations are total: they always return one of these instead of raising.
/// Any outcome other than `Committed` or `Noop` has already fired exactly one
/// notifier message by the time it is returned.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart changed and the new state was committed and persisted.
    Committed,
    /// The requested quantity exceeds available stock; cart unchanged.
    OutOfStock,
    /// The targeted product is not in the cart; cart unchanged.
    NotFound,
    /// An unexpected fault (network error, missing product, malformed
    /// response); cart unchanged.
    Failed,
    /// The request was silently ignored (non-positive target amount).
    Noop,
}

/// In-memory cart synchronized with durable storage and validated against a
/// remote stock service.
///
/// Cheaply cloneable via `Arc`; clones share the same cart state.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    cart: RwLock<Vec<Product>>,
    stock: Arc<dyn StockService>,
    notifier: Arc<dyn Notifier>,
    snapshots: Arc<dyn SnapshotStore>,
    cart_key: String,
}

impl CartStore {
    /// Create a store, rehydrating the cart from durable storage.
    ///
    /// A missing snapshot yields an empty cart. An unreadable or unparsable
    /// snapshot also yields an empty cart, with a warning logged - corrupt
    /// state is discarded rather than turned into a hard failure.
    pub async fn load(
        stock: Arc<dyn StockService>,
        notifier: Arc<dyn Notifier>,
        snapshots: Arc<dyn SnapshotStore>,
        cart_key: impl Into<String>,
    ) -> Self {
        let cart_key = cart_key.into();

        let cart = match snapshots.get(&cart_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unparsable cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read cart snapshot");
                Vec::new()
            }
        };

        Self {
            inner: Arc::new(CartStoreInner {
                cart: RwLock::new(cart),
                stock,
                notifier,
                snapshots,
                cart_key,
            }),
        }
    }

    /// Owned snapshot of the current cart contents.
    #[must_use]
    pub fn cart(&self) -> Vec<Product> {
        self.inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product is already in the cart its quantity grows by one,
    /// otherwise catalog metadata is fetched and a new entry with quantity 1
    /// is appended. The desired quantity is checked against current stock
    /// first; an insufficient stock level aborts without mutating anything.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> CartOutcome {
        match self.try_add(product_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Failed to add product to cart");
                self.inner.notifier.error(ADD_FAILED_MSG);
                CartOutcome::Failed
            }
        }
    }

    async fn try_add(&self, product_id: ProductId) -> Result<CartOutcome, StockError> {
        let mut updated = self.cart();

        let current_amount = updated
            .iter()
            .find(|p| p.id == product_id)
            .map_or(0, |p| p.amount);
        let desired_amount = current_amount.saturating_add(1);

        let stock = self.inner.stock.stock_level(product_id).await?;
        if desired_amount > stock.amount {
            self.inner.notifier.error(OUT_OF_STOCK_MSG);
            return Ok(CartOutcome::OutOfStock);
        }

        if let Some(entry) = updated.iter_mut().find(|p| p.id == product_id) {
            entry.amount = desired_amount;
        } else {
            let info = self.inner.stock.product(product_id).await?;
            updated.push(info.into_product(1));
        }

        self.commit(updated).await;
        Ok(CartOutcome::Committed)
    }

    /// Remove a product from the cart entirely.
    ///
    /// Targeting a product that is not in the cart is a failure condition:
    /// the cart is left unchanged and a notification fires.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> CartOutcome {
        let mut updated = self.cart();

        let Some(index) = updated.iter().position(|p| p.id == product_id) else {
            tracing::error!("Product not in cart");
            self.inner.notifier.error(REMOVE_FAILED_MSG);
            return CartOutcome::NotFound;
        };

        updated.remove(index);
        self.commit(updated).await;
        CartOutcome::Committed
    }

    /// Set a product's quantity to an absolute value.
    ///
    /// A non-positive `amount` is silently ignored - decrementing to zero is
    /// not removal; callers use [`remove_product`](Self::remove_product) for
    /// that. The target quantity is checked against current stock before any
    /// mutation.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) -> CartOutcome {
        if amount <= 0 {
            return CartOutcome::Noop;
        }
        let target = u32::try_from(amount).unwrap_or(u32::MAX);

        match self.try_update(product_id, target).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Failed to change product quantity");
                self.inner.notifier.error(UPDATE_FAILED_MSG);
                CartOutcome::Failed
            }
        }
    }

    async fn try_update(
        &self,
        product_id: ProductId,
        target: u32,
    ) -> Result<CartOutcome, StockError> {
        let stock = self.inner.stock.stock_level(product_id).await?;
        if target > stock.amount {
            self.inner.notifier.error(OUT_OF_STOCK_MSG);
            return Ok(CartOutcome::OutOfStock);
        }

        let mut updated = self.cart();
        match updated.iter_mut().find(|p| p.id == product_id) {
            Some(entry) => {
                entry.amount = target;
                self.commit(updated).await;
                Ok(CartOutcome::Committed)
            }
            None => {
                tracing::error!("Product not in cart");
                self.inner.notifier.error(UPDATE_FAILED_MSG);
                Ok(CartOutcome::NotFound)
            }
        }
    }

    /// Swap in the new cart state and persist it.
    ///
    /// The in-memory swap happens first; concurrent operations that started
    /// earlier see the cart as of their own invocation (last commit wins).
    /// A failed snapshot write does not roll the commit back - it is logged
    /// and the in-memory state stands.
    async fn commit(&self, updated: Vec<Product>) {
        let serialized = serde_json::to_string(&updated);

        *self
            .inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner) = updated;

        match serialized {
            Ok(serialized) => {
                if let Err(e) = self
                    .inner
                    .snapshots
                    .set(&self.inner.cart_key, &serialized)
                    .await
                {
                    tracing::error!(error = %e, "Failed to persist cart snapshot");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize cart snapshot");
            }
        }
    }
}
