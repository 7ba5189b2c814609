//! Errors raised while wiring widgets to a UI tree.

/// Structural role of an element a widget needs at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ElementRole {
    Root,
    List,
    Name,
    Description,
}

/// Widget construction errors.
///
/// These are configuration errors: the UI tree does not contain the layout
/// the widget was built for, so construction aborts instead of producing a
/// visible but dead menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Missing {role} element (marker `{marker}`)")]
    MissingElement { role: ElementRole, marker: String },

    #[error("{role} element (marker `{marker}`) is the same node as the {other} element")]
    SharedElement {
        role: ElementRole,
        other: ElementRole,
        marker: String,
    },
}

impl MenuError {
    pub fn missing(role: ElementRole, marker: impl Into<String>) -> Self {
        Self::MissingElement {
            role,
            marker: marker.into(),
        }
    }
}
