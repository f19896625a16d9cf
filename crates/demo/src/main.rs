//! Leptos Vitrine Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{
    catalog::Catalog, fixtures::load_catalog, presenter::QuickViewPresenter, routes::RouteTemplate,
};

mod modal;
mod products;

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/storefront.yml");

const ADD_TO_CART_ROUTE_TEMPLATE: &str = "/add-to-cart/0";

/// Parsed application fixtures/state used by the UI.
#[derive(Debug)]
struct AppData {
    /// Product cards shown in the products panel.
    products: Arc<Vec<products::ProductListItem>>,

    /// Categories offered by the filter row.
    categories: Arc<Vec<String>>,

    /// Presenter that resolves quick-view requests against the catalog.
    presenter: Arc<QuickViewPresenter<Catalog>>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = load_catalog(PRODUCTS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load products fixture: {error}"))?;

        let route = RouteTemplate::parse(ADD_TO_CART_ROUTE_TEMPLATE)
            .map_err(|error| format!("Invalid add-to-cart route template: {error}"))?;

        let products = products::product_list(&catalog);
        let categories = catalog.categories();

        Ok(Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
            presenter: Arc::new(QuickViewPresenter::new(catalog, route)),
        })
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let modal_fields = modal::ModalFields::new();
            let selected_category = RwSignal::new(None::<String>);
            let live_message = RwSignal::new((0_u64, String::new()));

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <div class="mx-auto mb-6 max-w-5xl">
                        <h1 class="text-2xl font-semibold tracking-tight">"Vitrine Storefront"</h1>
                    </div>
                    <div class="mx-auto max-w-5xl">
                        <products::ProductsPanel
                            products=app_data.products
                            categories=app_data.categories
                            selected_category=selected_category
                            presenter=app_data.presenter
                            modal_fields=modal_fields
                            live_message=live_message
                        />
                    </div>
                    <modal::QuickViewModal fields=modal_fields />
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Vitrine Storefront"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Demo entrypoint.
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
