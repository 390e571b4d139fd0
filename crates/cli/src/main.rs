//! Shopcart CLI - drive a cart against a live stock API.
//!
//! Each invocation rehydrates the cart from the snapshot file, applies one
//! operation, and persists the result, so a sequence of commands behaves
//! like one long-lived cart session.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 7
//! shopcart add 7
//!
//! # Set product 7's quantity to 3
//! shopcart set-amount 7 3
//!
//! # Remove product 7 entirely
//! shopcart remove 7
//!
//! # Print the current cart
//! shopcart show
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPCART_STOCK_URL` - Base URL of the stock/catalog API (required)
//! - `SHOPCART_STOCK_TOKEN` - Bearer token for the stock API
//! - `SHOPCART_DATA_DIR` - Snapshot directory (default: .shopcart)
//! - `SHOPCART_CART_KEY` - Snapshot key (default: shopcart:cart)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about = "Shopcart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product from the cart entirely
    Remove {
        /// Product id
        id: i32,
    },
    /// Set a product's quantity to an absolute value
    SetAmount {
        /// Product id
        id: i32,

        /// Target quantity (non-positive values are ignored)
        amount: i64,
    },
    /// Print the current cart
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add { id } => commands::cart::add(id).await?,
        Commands::Remove { id } => commands::cart::remove(id).await?,
        Commands::SetAmount { id, amount } => commands::cart::set_amount(id, amount).await?,
        Commands::Show => commands::cart::show().await?,
    }
    Ok(())
}
