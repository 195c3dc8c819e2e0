//! Utils

use clap::Parser;

/// Arguments for the basket comparison demo
#[derive(Debug, Parser)]
pub struct DemoBasketArgs {
    /// Number of catalog items to put in the cart (defaults to all)
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalog, stores and prices
    #[clap(short, long, default_value = "market")]
    pub fixture: String,

    /// Include inactive stores in the comparison
    #[clap(short, long)]
    pub all_stores: bool,
}
