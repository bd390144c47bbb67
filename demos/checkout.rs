//! Checkout Demo
//!
//! Fills a cart from the sample catalog, submits a checkout form and prints
//! the resulting ticket.
//!
//! Use `-n` to limit how many catalog products go into the cart
//! Use `-q` to set the quantity added of each product
//! Use `-s` to persist the cart snapshot under a directory

use std::io;

use anyhow::Result;
use clap::Parser;
use till::{
    cart::{
        CartStore,
        storage::{CartStorage, JsonFileStorage},
    },
    checkout::{CheckoutForm, submit},
    fixtures::sample_catalog,
    pricing::PricingPolicy,
    utils::DemoCheckoutArgs,
};

/// Checkout Demo
#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    let args = DemoCheckoutArgs::parse();

    match args.snapshot_dir.as_deref() {
        Some(dir) => run(CartStore::with_storage(JsonFileStorage::in_dir(dir)), &args).await,
        None => run(CartStore::new(), &args).await,
    }
}

#[expect(clippy::print_stdout, reason = "Example code")]
async fn run<S: CartStorage>(mut cart: CartStore<S>, args: &DemoCheckoutArgs) -> Result<()> {
    let catalog = sample_catalog()?;
    let take = args.n.unwrap_or(catalog.len());

    for product in catalog.iter().take(take) {
        cart.add_with_quantity(product, args.quantity);
        println!("added {} x{}", product.name, args.quantity);
    }

    println!("cart badge: {}", cart.total_quantity());
    println!("subtotal: {}", cart.subtotal());

    let mut form = CheckoutForm::new();
    form.set_name("María");
    form.set_surname("García");
    form.set_email("maria@example.com");
    form.set_street("Av. Central 123");
    form.set_city("Puebla");
    form.set_postal_code("72000");
    form.set_card_number("1234 5678 9012 3456");
    form.set_expiry_month("8");
    form.set_expiry_year("2030");
    form.set_cvv("123");

    let ticket = submit(&form, &cart.snapshot(), &PricingPolicy::default()).await?;

    cart.clear();

    ticket.write_to(io::stdout())?;

    Ok(())
}
