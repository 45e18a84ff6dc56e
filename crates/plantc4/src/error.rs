//! Error types for plantc4 operations.
//!
//! This module provides the main error type [`Plantc4Error`] which wraps
//! the error conditions that can occur while loading and rendering diagrams.

use std::io;

use thiserror::Error;

use crate::{description, export};

/// The main error type for plantc4 operations.
///
/// # Diagnostic Variants
///
/// The `Description` variant keeps the source text next to the error so a
/// front end can point at the offending bytes.
#[derive(Debug, Error)]
pub enum Plantc4Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Description {
        err: description::Error,
        src: String,
    },

    /// The renderer met an element kind it has no macro for.
    #[error("cannot create plantuml: unsupported element kind `{kind}`")]
    UnsupportedElement { kind: String },

    /// Two elements share an identifier and identifier checking is enabled.
    #[error("duplicate element identifier `{id}`")]
    DuplicateIdentifier { id: String },

    #[error("Model error: {0}")]
    Model(#[from] plantc4_core::ModelError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<export::Error> for Plantc4Error {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::UnsupportedElement { kind } => Self::UnsupportedElement { kind },
            export::Error::DuplicateIdentifier { id } => Self::DuplicateIdentifier { id },
            export::Error::Io(err) => Self::Io(err),
            other @ export::Error::Fmt(_) => Self::Export(Box::new(other)),
        }
    }
}

impl Plantc4Error {
    /// Create a new `Description` error with the associated source text.
    pub fn new_description_error(err: description::Error, src: impl Into<String>) -> Self {
        Self::Description {
            err,
            src: src.into(),
        }
    }
}
