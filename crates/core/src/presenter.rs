//! Presenter
//!
//! Resolves a product into the quick-view modal's display state and wires the
//! add-to-cart form to the per-product endpoint.

use thiserror::Error;

use crate::{
    catalog::{Catalog, ProductId, ProductSummary},
    routes::RouteTemplate,
    view::{ModalDisplay, ModalViewState},
};

/// The designated fallback entry shown when a requested product is unknown.
pub const DEFAULT_FALLBACK_ID: ProductId = ProductId(1);

/// A source of product display data, fetched by identifier.
///
/// [`Catalog`] implements this over its in-memory table; a deployment that
/// fetches product details from a server can supply its own implementation
/// without changing the presenter's contract. The trait is synchronous
/// because the presenter runs inside a synchronous UI event handler; an async
/// data layer would resolve ahead of time and hand the presenter a snapshot.
pub trait ProductSource {
    /// Fetch the display summary for a product, or `None` if it is unknown.
    fn find(&self, id: ProductId) -> Option<ProductSummary>;
}

impl ProductSource for Catalog {
    fn find(&self, id: ProductId) -> Option<ProductSummary> {
        self.summary(id)
    }
}

/// Errors that can occur while opening a quick view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuickViewError {
    /// Neither the requested product nor the fallback entry exists in the
    /// product source.
    #[error("Product {requested} is not available and neither is fallback {fallback}")]
    ProductUnavailable {
        /// The identifier that was asked for.
        requested: ProductId,
        /// The configured fallback identifier.
        fallback: ProductId,
    },
}

/// Fills the quick-view modal for a product.
///
/// Holds the injected [`ProductSource`], the parsed add-to-cart
/// [`RouteTemplate`], and the fallback identifier used when a requested
/// product is unknown.
#[derive(Debug, Clone)]
pub struct QuickViewPresenter<S> {
    source: S,
    route: RouteTemplate,
    fallback: ProductId,
}

impl<S: ProductSource> QuickViewPresenter<S> {
    /// Create a presenter with the default fallback entry
    /// ([`DEFAULT_FALLBACK_ID`]).
    pub fn new(source: S, route: RouteTemplate) -> Self {
        Self {
            source,
            route,
            fallback: DEFAULT_FALLBACK_ID,
        }
    }

    /// Use a different fallback entry for unknown identifiers.
    #[must_use]
    pub fn with_fallback(mut self, fallback: ProductId) -> Self {
        self.fallback = fallback;
        self
    }

    /// Open the quick view for a product.
    ///
    /// Unknown identifiers silently resolve to the fallback entry's display
    /// data. The form action always carries the *requested* identifier, so an
    /// unknown id still posts to its own add-to-cart endpoint. The returned
    /// state is marked visible.
    ///
    /// # Errors
    ///
    /// Returns [`QuickViewError::ProductUnavailable`] only when the source
    /// has neither the requested product nor the fallback entry.
    pub fn open(&self, id: ProductId) -> Result<ModalViewState, QuickViewError> {
        let summary = self
            .source
            .find(id)
            .or_else(|| self.source.find(self.fallback))
            .ok_or(QuickViewError::ProductUnavailable {
                requested: id,
                fallback: self.fallback,
            })?;

        Ok(ModalViewState {
            image_src: summary.image_url,
            name: summary.name,
            price: summary.price,
            description: summary.description,
            form_action: self.route.action_for(id),
            display: ModalDisplay::Visible,
        })
    }
}
