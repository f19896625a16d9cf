use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{
    catalog::{Catalog, ProductId},
    presenter::QuickViewPresenter,
};

use crate::{announce, modal};

/// UI model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListItem {
    /// Catalog identifier, also used for the card's add-to-cart endpoint.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Formatted price.
    pub price: String,

    /// Resolved image URL.
    pub image_url: String,

    /// Category the card is filed under.
    pub category: String,
}

/// Project a catalog into product cards, ordered by identifier.
pub fn product_list(catalog: &Catalog) -> Vec<ProductListItem> {
    let mut products: Vec<ProductListItem> = catalog
        .iter()
        .map(|(id, product)| {
            let summary = product.summary();

            ProductListItem {
                id,
                name: summary.name,
                price: summary.price,
                image_url: summary.image_url,
                category: product.category.clone(),
            }
        })
        .collect();

    products.sort_by_key(|item| item.id);

    products
}

/// Select the cards shown under a category filter; `None` shows everything.
pub fn filtered_products(
    products: &[ProductListItem],
    selected_category: Option<&str>,
) -> Vec<ProductListItem> {
    products
        .iter()
        .filter(|item| selected_category.is_none_or(|category| item.category == category))
        .cloned()
        .collect()
}

#[component]
fn FilterButton(
    label: String,
    category: Option<String>,
    selected_category: RwSignal<Option<String>>,
) -> impl IntoView {
    let category_for_class = category.clone();

    view! {
        <button
            type="button"
            class=move || {
                if selected_category.with(|selected| *selected == category_for_class) {
                    "category-filter-button category-filter-button-active"
                } else {
                    "category-filter-button"
                }
            }
            on:click=move |_| selected_category.set(category.clone())
        >
            {label}
        </button>
    }
}

#[component]
fn CategoryFilter(
    categories: Vec<String>,
    selected_category: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="category-filter" role="group" aria-label="Filter products by category">
            <FilterButton
                label="All".to_string()
                category=None
                selected_category=selected_category
            />
            {categories
                .into_iter()
                .map(|category| {
                    view! {
                        <FilterButton
                            label=category.clone()
                            category=Some(category)
                            selected_category=selected_category
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(
    product: ProductListItem,
    presenter: Arc<QuickViewPresenter<Catalog>>,
    modal_fields: modal::ModalFields,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let product_id = product.id;
    let announce_name = product.name.clone();
    let quick_view_label = format!("Quick view of {}", product.name);

    view! {
        <li class="product-card">
            <img class="product-card-image" src=product.image_url alt=product.name.clone() />
            <p class="product-card-name">{product.name}</p>
            <p class="product-card-price">{product.price}</p>
            <button
                type="button"
                class="product-card-quick-view"
                aria-label=quick_view_label
                on:click=move |_| {
                    match presenter.open(product_id) {
                        Ok(state) => {
                            modal::open_quick_view(modal_fields, state);
                            announce(
                                live_message,
                                format!("Opened quick view for {announce_name}."),
                            );
                        }
                        Err(error) => {
                            announce(live_message, format!("Quick view unavailable: {error}"));
                        }
                    }
                }
            >
                "Quick view"
            </button>
        </li>
    }
}

/// Products panel component.
#[component]
pub fn ProductsPanel(
    /// Product cards rendered in the panel.
    products: Arc<Vec<ProductListItem>>,
    /// Categories offered by the filter row.
    categories: Arc<Vec<String>>,
    /// Currently selected category filter.
    selected_category: RwSignal<Option<String>>,
    /// Presenter that resolves quick-view requests.
    presenter: Arc<QuickViewPresenter<Catalog>>,
    /// Signals backing the quick-view modal.
    modal_fields: modal::ModalFields,
    /// Screen-reader live region message.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let products = Arc::unwrap_or_clone(products);
    let categories = Arc::unwrap_or_clone(categories);

    view! {
        <section class="products-panel">
            <div class="panel-header">
                <h2 class="panel-title">"Featured Products"</h2>
            </div>
            <CategoryFilter categories=categories selected_category=selected_category />
            <ul class="products-list">
                {move || {
                    let selected = selected_category.get();

                    filtered_products(&products, selected.as_deref())
                        .into_iter()
                        .map(|product| {
                            view! {
                                <ProductCard
                                    product=product
                                    presenter=Arc::clone(&presenter)
                                    modal_fields=modal_fields
                                    live_message=live_message
                                />
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
