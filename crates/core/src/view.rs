//! View
//!
//! The modal's bound display state, as plain data. A UI layer owns the actual
//! widgets and copies these fields into them; nothing here touches a DOM.

/// Visibility of the quick-view modal.
///
/// The modal lays out as a flex container when shown, so the visible CSS
/// `display` value is `flex`, not `block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalDisplay {
    /// Modal is not shown.
    #[default]
    Hidden,

    /// Modal is shown as a flex overlay.
    Visible,
}

impl ModalDisplay {
    /// The CSS `display` property value for this state.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "flex",
        }
    }

    /// Whether the modal is currently shown.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// The five DOM-bound fields of the quick-view modal, plus its visibility.
///
/// Produced by [`crate::presenter::QuickViewPresenter::open`] and applied
/// wholesale by the UI layer; no other component writes these fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalViewState {
    /// Image element source URL
    pub image_src: String,

    /// Name text
    pub name: String,

    /// Formatted price text
    pub price: String,

    /// Description text
    pub description: String,

    /// Submission target of the embedded add-to-cart form
    pub form_action: String,

    /// Current visibility
    pub display: ModalDisplay,
}

impl ModalViewState {
    /// The initial state: every field empty and the modal hidden.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_values_match_the_page_stylesheet() {
        assert_eq!(ModalDisplay::Hidden.css_value(), "none");
        assert_eq!(ModalDisplay::Visible.css_value(), "flex");
    }

    #[test]
    fn hidden_state_is_empty_and_not_visible() {
        let state = ModalViewState::hidden();

        assert!(state.name.is_empty());
        assert!(state.form_action.is_empty());
        assert!(!state.display.is_visible());
    }
}
