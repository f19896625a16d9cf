//! Utils

use clap::Parser;

/// Arguments for the quick-view examples
#[derive(Debug, Parser)]
pub struct ExampleQuickViewArgs {
    /// Product identifier to open the quick view for
    #[clap(short, long, default_value_t = 2)]
    pub id: u32,

    /// Endpoint template as the server renders it
    #[clap(short, long, default_value = "/add-to-cart/0")]
    pub template: String,
}
