//! Routes
//!
//! Typed substitution into the server-rendered add-to-cart endpoint template.
//!
//! The server renders the endpoint with a literal placeholder product id of
//! `0` (e.g. `/add-to-cart/0`). Rather than a plain string replace, the
//! template is parsed into path segments once and the placeholder is
//! substituted as a whole segment, so a `0` embedded in another segment is
//! never touched.

use std::fmt;

use thiserror::Error;

use crate::catalog::ProductId;

/// Literal segment value the server renders where the product id belongs.
pub const PRODUCT_ID_PLACEHOLDER: &str = "0";

/// Errors that can occur while parsing a route template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The template contains no placeholder segment to substitute into.
    #[error("Route template has no `{PRODUCT_ID_PLACEHOLDER}` placeholder segment: {0}")]
    MissingPlaceholder(String),
}

/// A parsed endpoint template with a single product-id placeholder segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    segments: Vec<String>,
    placeholder_idx: usize,
}

impl RouteTemplate {
    /// Parse an endpoint template of the shape `/add-to-cart/0`.
    ///
    /// When several segments equal the placeholder, the first one is used,
    /// matching the first-match behaviour of the string substitution this
    /// replaces.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingPlaceholder`] if no path segment equals
    /// [`PRODUCT_ID_PLACEHOLDER`].
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        let segments: Vec<String> = template.split('/').map(str::to_string).collect();

        let placeholder_idx = segments
            .iter()
            .position(|segment| segment == PRODUCT_ID_PLACEHOLDER)
            .ok_or_else(|| RouteError::MissingPlaceholder(template.to_string()))?;

        Ok(Self {
            segments,
            placeholder_idx,
        })
    }

    /// The form action for a product: the template with the placeholder
    /// segment replaced by the id.
    #[must_use]
    pub fn action_for(&self, id: ProductId) -> String {
        self.segments
            .iter()
            .enumerate()
            .map(|(idx, segment)| {
                if idx == self.placeholder_idx {
                    id.to_string()
                } else {
                    segment.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn substitutes_the_placeholder_segment() -> TestResult {
        let route = RouteTemplate::parse("/add-to-cart/0")?;

        assert_eq!(route.action_for(ProductId(3)), "/add-to-cart/3");
        assert_eq!(route.action_for(ProductId(99)), "/add-to-cart/99");

        Ok(())
    }

    #[test]
    fn rejects_templates_without_a_placeholder() {
        let result = RouteTemplate::parse("/add-to-cart");

        assert!(matches!(result, Err(RouteError::MissingPlaceholder(_))));
    }

    #[test]
    fn ignores_zeroes_embedded_in_other_segments() -> TestResult {
        let route = RouteTemplate::parse("/shop-v0/add-to-cart/0")?;

        assert_eq!(route.action_for(ProductId(7)), "/shop-v0/add-to-cart/7");

        Ok(())
    }

    #[test]
    fn first_placeholder_wins_when_several_exist() -> TestResult {
        let route = RouteTemplate::parse("/0/add-to-cart/0")?;

        assert_eq!(route.action_for(ProductId(5)), "/5/add-to-cart/0");

        Ok(())
    }

    #[test]
    fn preserves_trailing_slashes() -> TestResult {
        let route = RouteTemplate::parse("/add-to-cart/0/")?;

        assert_eq!(route.action_for(ProductId(2)), "/add-to-cart/2/");

        Ok(())
    }

    #[test]
    fn displays_the_original_template() -> TestResult {
        let route = RouteTemplate::parse("/add-to-cart/0")?;

        assert_eq!(route.to_string(), "/add-to-cart/0");

        Ok(())
    }
}
