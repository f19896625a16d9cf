//! Preview
//!
//! Terminal rendering of a modal state, for inspecting presenter output from
//! example binaries and development tooling.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Color, Style, Theme, object::Rows},
};
use thiserror::Error;

use crate::view::ModalViewState;

/// Errors that can occur when writing a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Write the modal state as a two-column field/value table.
///
/// # Errors
///
/// Returns [`PreviewError::IO`] if the table cannot be written to `out`.
pub fn write_modal(mut out: impl io::Write, state: &ModalViewState) -> Result<(), PreviewError> {
    let mut builder = Builder::default();

    builder.push_record(["Field", "Value"]);
    builder.push_record(["Name", state.name.as_str()]);
    builder.push_record(["Price", state.price.as_str()]);
    builder.push_record(["Description", state.description.as_str()]);
    builder.push_record(["Image", state.image_src.as_str()]);
    builder.push_record(["Form action", state.form_action.as_str()]);
    builder.push_record(["Display", state.display.css_value()]);

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}").map_err(|_err| PreviewError::IO)
}
