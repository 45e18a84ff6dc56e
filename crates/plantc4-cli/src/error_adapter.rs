//! Error adapter for converting Plantc4Error to miette diagnostics.
//!
//! This module bridges the library's error types and miette's diagnostic
//! formatting used in the CLI. Description errors point at the offending
//! bytes of the input file; everything else is reported as plain text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use plantc4::{Plantc4Error, description};

/// Adapter for an error found while reading a description.
pub struct DescriptionAdapter<'a> {
    err: &'a description::Error,
    src: &'a str,
}

impl<'a> DescriptionAdapter<'a> {
    /// Create a new description adapter.
    pub fn new(err: &'a description::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DescriptionAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptionAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DescriptionAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for DescriptionAdapter<'_> {}

impl MietteDiagnostic for DescriptionAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            description::Error::Syntax { .. } => "plantc4::description::syntax",
            description::Error::UnsupportedElement { .. } => "plantc4::description::kind",
            description::Error::Model(_) => "plantc4::model",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`Plantc4Error`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a Plantc4Error);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            Plantc4Error::Io(_) => "plantc4::io",
            Plantc4Error::Description { .. } => return None,
            Plantc4Error::UnsupportedElement { .. } => "plantc4::export::unsupported",
            Plantc4Error::DuplicateIdentifier { .. } => "plantc4::export::duplicate",
            Plantc4Error::Model(_) => "plantc4::model",
            Plantc4Error::Export(_) => "plantc4::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            Plantc4Error::DuplicateIdentifier { .. } => Some(Box::new(
                "every element needs its own identifier while `check_unique_ids` is enabled",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A description error with source location information.
    Description(DescriptionAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Description(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Description(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Description(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Description(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Description(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Description(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`Plantc4Error`] into a list of reportable errors.
pub fn to_reportables(err: &Plantc4Error) -> Vec<Reportable<'_>> {
    match err {
        Plantc4Error::Description { err, src } => {
            vec![Reportable::Description(DescriptionAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_is_labelled() {
        let source = "kind = \"widget\"";
        let err = Plantc4Error::new_description_error(
            description::Error::UnsupportedElement {
                kind: "widget".to_string(),
                span: 7..15,
            },
            source,
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Description(d) => {
                assert_eq!(d.to_string(), "unsupported element kind `widget`");
                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert_eq!(labels[0].offset(), 7);
                assert_eq!(labels[0].len(), 8);
                assert!(labels[0].primary());
            }
            Reportable::Error(_) => panic!("Expected Description"),
        }
    }

    #[test]
    fn test_syntax_error_without_span_has_no_labels() {
        let err = Plantc4Error::new_description_error(
            description::Error::Syntax {
                message: "expected a table".to_string(),
                span: None,
            },
            "",
        );

        let reportables = to_reportables(&err);
        match &reportables[0] {
            Reportable::Description(d) => assert!(d.labels().is_none()),
            Reportable::Error(_) => panic!("Expected Description"),
        }
    }

    #[test]
    fn test_non_description_error() {
        let err = Plantc4Error::DuplicateIdentifier {
            id: "api".to_string(),
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "duplicate element identifier `api`");
                assert!(e.help().is_some());
            }
            Reportable::Description(_) => panic!("Expected Error"),
        }
    }
}
