//! Export functionality for plantc4 diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a [`Diagram`] into an output document.
//!
//! # Available Backends
//!
//! - [`plantuml`] - C4-PlantUML text via [`plantuml::PlantUmlBuilder`] and
//!   [`plantuml::PlantUml`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into
//! [`Plantc4Error`](crate::Plantc4Error) at the crate boundary.

/// C4-PlantUML export backend.
pub mod plantuml;

use std::{fmt, io};

use thiserror::Error;

use plantc4_core::diagram::Diagram;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a complete diagram to the backend's output.
    ///
    /// Either the whole document reaches the output or nothing does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedElement`] when the diagram holds an element
    /// kind the backend cannot express, [`Error::DuplicateIdentifier`] when
    /// identifier checking is enabled and fails, or [`Error::Io`] if writing
    /// the output fails.
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug, Error)]
pub enum Error {
    /// The element kind has no mapping in the backend.
    #[error("cannot create plantuml: unsupported element kind `{kind}`")]
    UnsupportedElement { kind: String },

    /// Two elements share an identifier.
    #[error("duplicate element identifier `{id}`")]
    DuplicateIdentifier { id: String },

    /// Formatting into the in-memory document failed.
    #[error("Format error: {0}")]
    Fmt(#[from] fmt::Error),

    /// Writing the finished document failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
