//! Modal feedback shown over the current screen.

use stockdesk_core::{DomainError, ProductId};

/// At most one dialog is open at a time; it must be dismissed before the
/// screens underneath accept input again.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Success { message: String },
    Error { title: String, message: String },
    ConfirmDelete { id: ProductId },
}

impl Dialog {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    /// Wrap a recovered domain failure for display.
    pub fn error(title: impl Into<String>, err: &DomainError) -> Self {
        Self::Error {
            title: title.into(),
            message: err.to_string(),
        }
    }

    pub fn confirm_delete(id: ProductId) -> Self {
        Self::ConfirmDelete { id }
    }
}
