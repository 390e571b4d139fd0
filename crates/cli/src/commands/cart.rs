//! Cart commands.
//!
//! Every command wires the real adapters (HTTP stock client, file snapshot
//! store, log-backed notifier) into a `CartStore`, applies one operation,
//! and prints the resulting cart.

use std::sync::Arc;

use shopcart_cart::notify::TracingNotifier;
use shopcart_cart::snapshot::FileSnapshotStore;
use shopcart_cart::stock::HttpStockClient;
use shopcart_cart::{CartConfig, CartStore};
use shopcart_core::{Product, ProductId};

/// Build a store from environment configuration and the snapshot on disk.
async fn open_store() -> Result<CartStore, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;

    let stock = Arc::new(HttpStockClient::new(&config.stock)?);
    let snapshots = Arc::new(FileSnapshotStore::new(&config.data_dir));

    Ok(CartStore::load(stock, Arc::new(TracingNotifier), snapshots, &config.cart_key).await)
}

/// Add one unit of a product to the cart.
pub async fn add(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;

    let outcome = store.add_product(ProductId::new(id)).await;
    tracing::info!(?outcome, product_id = id, "add finished");

    render_cart(&store.cart());
    Ok(())
}

/// Remove a product from the cart entirely.
pub async fn remove(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;

    let outcome = store.remove_product(ProductId::new(id)).await;
    tracing::info!(?outcome, product_id = id, "remove finished");

    render_cart(&store.cart());
    Ok(())
}

/// Set a product's quantity to an absolute value.
pub async fn set_amount(id: i32, amount: i64) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;

    let outcome = store.update_product_amount(ProductId::new(id), amount).await;
    tracing::info!(?outcome, product_id = id, amount, "set-amount finished");

    render_cart(&store.cart());
    Ok(())
}

/// Print the current cart.
pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;
    render_cart(&store.cart());
    Ok(())
}

#[allow(clippy::print_stdout)] // terminal output is this command's purpose
fn render_cart(cart: &[Product]) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for product in cart {
        println!(
            "{:>6}  {:<30} {:>8}  x{}",
            product.id,
            product.name,
            product.price.display(),
            product.amount
        );
    }
}
