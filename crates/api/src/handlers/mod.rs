//! HTTP handlers, one module per resource.

pub mod action;
pub mod project;

/// True when a required string field is absent or empty.
pub(crate) fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
