//! Errors raised while assembling a model.

use thiserror::Error;

/// Error returned by model registration methods.
///
/// No registration check exists yet, so nothing returns this today. The
/// fallible signatures on [`Diagram`](crate::diagram::Diagram) keep room for
/// one without breaking callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("Unsupported model operation: {0}")]
    Unsupported(String),
}
