//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoCheckoutArgs {
    /// Number of catalog products to add to the cart
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Quantity to add of each product
    #[clap(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Directory for the persisted cart snapshot; in-memory when omitted
    #[clap(short, long)]
    pub snapshot_dir: Option<String>,
}
