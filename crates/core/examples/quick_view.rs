//! Quick View Example
//!
//! Opens the quick view for a product from the storefront fixture and prints
//! the resulting modal state as a table.
//!
//! Use `-i` to pick the product identifier (unknown ids fall back to product 1)
//! Use `-t` to override the endpoint template

use std::io;

use anyhow::Result;
use clap::Parser;

use vitrine::{
    catalog::ProductId, fixtures::load_catalog, presenter::QuickViewPresenter, preview,
    routes::RouteTemplate, utils::ExampleQuickViewArgs,
};

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/storefront.yml");

/// Quick View Example
pub fn main() -> Result<()> {
    let args = ExampleQuickViewArgs::parse();

    let catalog = load_catalog(PRODUCTS_FIXTURE_YAML)?;
    let route = RouteTemplate::parse(&args.template)?;
    let presenter = QuickViewPresenter::new(catalog, route);

    let state = presenter.open(ProductId(args.id))?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    preview::write_modal(handle, &state)?;

    Ok(())
}
