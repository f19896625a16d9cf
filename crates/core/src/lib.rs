//! Vitrine
//!
//! Vitrine is a small, UI-agnostic quick-view presentation library for e-commerce
//! storefronts written in Rust.
//!
//! Given a product identifier, the [`presenter::QuickViewPresenter`] resolves the
//! product's display data from an injected [`presenter::ProductSource`] (falling
//! back to a designated default entry when the identifier is unknown), fills a
//! [`view::ModalViewState`] with the image, name, price and description to show,
//! points the modal's add-to-cart form at the per-product endpoint derived from a
//! [`routes::RouteTemplate`], and marks the modal visible. The state it produces
//! is plain data, so any UI layer can bind it to its own widgets.

pub mod catalog;
pub mod fixtures;
pub mod presenter;
pub mod preview;
pub mod prices;
pub mod routes;
pub mod utils;
pub mod view;
