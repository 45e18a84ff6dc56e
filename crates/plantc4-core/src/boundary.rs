//! Boundaries that visually group other elements.
//!
//! A [`Boundary`] is drawn as a labelled frame around its children; it never
//! appears as a shape of its own. Boundaries may contain further boundaries
//! and deployment nodes, so nesting depth is unbounded.

use std::fmt;

use crate::{element::Element, identifier::Id};

/// The flavor of a [`Boundary`], selecting the macro used to open its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Obtained from [`System::boundary`](crate::element::System::boundary).
    System,
    /// Obtained from [`Container::boundary`](crate::element::Container::boundary).
    Container,
    /// Constructed directly with [`Boundary::enterprise`].
    Enterprise,
}

impl From<BoundaryKind> for &'static str {
    fn from(val: BoundaryKind) -> Self {
        match val {
            BoundaryKind::System => "system_boundary",
            BoundaryKind::Container => "container_boundary",
            BoundaryKind::Enterprise => "enterprise_boundary",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Parameters for an enterprise boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnterpriseBoundaryArgs {
    /// Human-readable name of the enterprise.
    pub name: String,
}

/// A composite element holding an ordered list of children.
///
/// # Examples
///
/// ```
/// use plantc4_core::boundary::{Boundary, EnterpriseBoundaryArgs};
/// use plantc4_core::element::{Person, PersonArgs};
///
/// let mut bank = Boundary::enterprise(
///     "bank",
///     EnterpriseBoundaryArgs { name: "Big Bank plc".to_string() },
/// );
/// bank.add_element(Person::new("staff", PersonArgs::default()));
/// assert_eq!(bank.elements().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    kind: BoundaryKind,
    id: Id,
    name: String,
    elements: Vec<Element>,
}

impl Boundary {
    pub(crate) fn system(id: Id, name: String) -> Self {
        Self::with_kind(BoundaryKind::System, id, name)
    }

    pub(crate) fn container(id: Id, name: String) -> Self {
        Self::with_kind(BoundaryKind::Container, id, name)
    }

    /// Create a new, empty enterprise boundary.
    pub fn enterprise(id: impl Into<Id>, args: EnterpriseBoundaryArgs) -> Self {
        Self::with_kind(BoundaryKind::Enterprise, id.into(), args.name)
    }

    fn with_kind(kind: BoundaryKind, id: Id, name: String) -> Self {
        Self {
            kind,
            id,
            name,
            elements: Vec::new(),
        }
    }

    /// Append a child element.
    ///
    /// No back-reference is recorded on the child, and the same element may be
    /// added to several boundaries; each copy is rendered.
    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Builder form of [`Boundary::add_element`].
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.add_element(element);
        self
    }

    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
