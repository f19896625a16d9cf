use leptos::prelude::*;

use vitrine::view::{ModalDisplay, ModalViewState};

/// Signals backing the quick-view modal, one per rendered field.
///
/// Opening a quick view writes a fresh [`ModalViewState`] into these signals
/// so the dialog updates in place.
#[derive(Debug, Clone, Copy)]
pub struct ModalFields {
    /// Product image URL.
    pub image_src: RwSignal<String>,

    /// Product name heading.
    pub name: RwSignal<String>,

    /// Formatted price line.
    pub price: RwSignal<String>,

    /// Product description body.
    pub description: RwSignal<String>,

    /// Add-to-cart form action URL.
    pub form_action: RwSignal<String>,

    /// Overlay visibility.
    pub display: RwSignal<ModalDisplay>,
}

impl ModalFields {
    /// Create the field signals for a closed, empty modal.
    pub fn new() -> Self {
        Self {
            image_src: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            form_action: RwSignal::new(String::new()),
            display: RwSignal::new(ModalDisplay::Hidden),
        }
    }
}

impl Default for ModalFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a presenter result into the modal fields, revealing the dialog.
pub fn open_quick_view(fields: ModalFields, state: ModalViewState) {
    fields.image_src.set(state.image_src);
    fields.name.set(state.name);
    fields.price.set(state.price);
    fields.description.set(state.description);
    fields.form_action.set(state.form_action);
    fields.display.set(state.display);
}

/// Hide the dialog, leaving the last-shown content in place.
pub fn close_quick_view(fields: ModalFields) {
    fields.display.set(ModalDisplay::Hidden);
}

/// Inline overlay style toggling between hidden and flex layout.
pub fn overlay_style(display: ModalDisplay) -> String {
    format!("display:{}", display.css_value())
}

/// Quick-view modal dialog component.
#[component]
pub fn QuickViewModal(
    /// Signals the dialog renders from.
    fields: ModalFields,
) -> impl IntoView {
    view! {
        <div
            class="quick-view-overlay"
            style=move || overlay_style(fields.display.get())
            on:click=move |_| close_quick_view(fields)
        >
            <div
                class="quick-view-dialog"
                role="dialog"
                aria-modal="true"
                aria-label="Product quick view"
                on:click=|event| event.stop_propagation()
            >
                <button
                    type="button"
                    class="quick-view-close"
                    aria-label="Close quick view"
                    on:click=move |_| close_quick_view(fields)
                >
                    "\u{d7}"
                </button>
                <img
                    class="quick-view-image"
                    src=move || fields.image_src.get()
                    alt=move || fields.name.get()
                />
                <h3 class="quick-view-name">{move || fields.name.get()}</h3>
                <p class="quick-view-price">{move || fields.price.get()}</p>
                <p class="quick-view-description">{move || fields.description.get()}</p>
                <form class="quick-view-form" method="post" action=move || fields.form_action.get()>
                    <button type="submit" class="quick-view-add-button">
                        "Add to Cart"
                    </button>
                </form>
            </div>
        </div>
    }
}
