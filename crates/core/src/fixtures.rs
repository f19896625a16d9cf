//! Fixtures
//!
//! YAML product fixtures and the catalog loader built on them. Prices are
//! written as `"12.99 USD"`; a fixture set must stick to a single currency.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, Product, ProductId};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<ProductId, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "12.99 USD")
    pub price: String,

    /// Product description
    pub description: String,

    /// Image file name or full URL
    pub image: String,

    /// Category the product is shelved under
    pub category: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
            description: fixture.description,
            image: fixture.image,
            category: fixture.category,
        })
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Build a [`Catalog`] from fixture YAML.
///
/// # Errors
///
/// Returns an error when the YAML does not parse, a price is invalid, a
/// currency code is unknown, or two products disagree on currency.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut catalog = Catalog::new();
    let mut currency: Option<&'static Currency> = None;

    for (id, product_fixture) in fixture.products {
        let (_minor_units, parsed_currency) = parse_price(&product_fixture.price)?;

        if let Some(existing_currency) = currency
            && existing_currency != parsed_currency
        {
            return Err(FixtureError::CurrencyMismatch(
                existing_currency.iso_alpha_code.to_string(),
                parsed_currency.iso_alpha_code.to_string(),
            ));
        }

        currency = Some(parsed_currency);

        catalog.insert(id, product_fixture.try_into()?);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_usd_and_eur() -> TestResult {
        let (usd_minor, usd) = parse_price("1.00 USD")?;
        let (eur_minor, eur) = parse_price("2.50 EUR")?;

        assert_eq!(usd_minor, 100);
        assert_eq!(usd, USD);
        assert_eq!(eur_minor, 250);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn load_catalog_builds_products_keyed_by_integer_id() -> TestResult {
        let yaml = r#"
products:
  1:
    name: "CONFO BALM"
    price: "12.99 USD"
    description: "Herbal extract balm."
    image: "CUNFU5.jpg"
    category: "health"
  2:
    name: "CANFOR Essential Oil"
    price: "18.50 USD"
    description: "Pure essential oil."
    image: "CUNFU6.jpg"
    category: "health"
"#;

        let catalog = load_catalog(yaml)?;

        assert_eq!(catalog.len(), 2);

        let balm = catalog.get(ProductId(1));

        assert!(matches!(balm, Some(product) if product.name == "CONFO BALM"));
        assert!(matches!(balm, Some(product) if product.price.to_minor_units() == 12_99));

        Ok(())
    }

    #[test]
    fn load_catalog_rejects_currency_mismatch() {
        let yaml = r#"
products:
  1:
    name: "Balm"
    price: "12.99 USD"
    description: "d"
    image: "a.jpg"
    category: "health"
  2:
    name: "Oil"
    price: "18.50 GBP"
    description: "d"
    image: "b.jpg"
    category: "health"
"#;

        let result = load_catalog(yaml);

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn load_catalog_rejects_invalid_prices() {
        let yaml = r#"
products:
  1:
    name: "Balm"
    price: "free"
    description: "d"
    image: "a.jpg"
    category: "health"
"#;

        let result = load_catalog(yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn load_catalog_rejects_malformed_yaml() {
        let result = load_catalog("products: [[[");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn load_catalog_accepts_an_empty_product_map() -> TestResult {
        let catalog = load_catalog("products: {}\n")?;

        assert!(catalog.is_empty());

        Ok(())
    }
}
