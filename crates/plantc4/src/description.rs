//! Declarative diagram descriptions.
//!
//! A description is a TOML document mirroring the model one to one. It lets
//! a diagram be kept as data instead of code:
//!
//! ```toml
//! title = "System Context"
//! legend = true
//!
//! [[elements]]
//! kind = "person"
//! id = "customer"
//! name = "Customer"
//! description = "A customer of the bank"
//!
//! [[elements]]
//! kind = "system_boundary"
//! id = "bank"
//! name = "Internet Banking"
//!
//! [[elements.elements]]
//! kind = "container"
//! id = "web"
//! name = "Web Application"
//! technologies = ["Java", "Spring MVC"]
//!
//! [[relations]]
//! source = "customer"
//! destination = "web"
//! description = "Uses"
//! technologies = ["HTTPS"]
//! direction = "Down"
//! ```
//!
//! Element `kind`s are matched against the closed set of model kinds; any
//! other value fails with [`Error::UnsupportedElement`], carrying the byte
//! span of the offending value.

use std::ops::Range;

use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use plantc4_core::{
    boundary::{Boundary, EnterpriseBoundaryArgs},
    deployment::{DeploymentNode, DeploymentNodeArgs, Property},
    diagram::{Diagram, Layout},
    element::{
        Component, ComponentArgs, Container, ContainerArgs, Database, DatabaseArgs, Element,
        Person, PersonArgs, Queue, QueueArgs, System, SystemArgs,
    },
    relation::{Direction, Relation, Step},
    theme::Theme,
};

/// Errors produced while reading a description.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is not valid TOML or does not match the schema.
    #[error("{message}")]
    Syntax {
        message: String,
        span: Option<Range<usize>>,
    },

    /// An element declares a kind outside the supported set.
    #[error("unsupported element kind `{kind}`")]
    UnsupportedElement { kind: String, span: Range<usize> },

    /// The model rejected a relation or step.
    #[error(transparent)]
    Model(#[from] plantc4_core::ModelError),
}

impl Error {
    /// Byte range in the source the error points at, if known.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Syntax { span, .. } => span.clone(),
            Self::UnsupportedElement { span, .. } => Some(span.clone()),
            Self::Model(_) => None,
        }
    }

    /// Additional guidance for the user, if any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedElement { .. } => Some(
                "expected one of: person, system, container, database, queue, component, \
                 system_boundary, container_boundary, enterprise_boundary, deployment_node",
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Syntax {
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiagramDescription {
    title: String,
    #[serde(default)]
    layout: Layout,
    #[serde(default)]
    sketch: bool,
    #[serde(default)]
    legend: bool,
    #[serde(default)]
    hide_element_types: bool,
    #[serde(default)]
    theme: Option<Theme>,
    #[serde(default)]
    elements: Vec<ElementDescription>,
    #[serde(default)]
    relations: Vec<EdgeDescription>,
    #[serde(default)]
    steps: Vec<EdgeDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementDescription {
    kind: Spanned<String>,
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default)]
    external: bool,
    #[serde(default)]
    node_type: String,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    elements: Vec<ElementDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeDescription {
    source: String,
    destination: String,
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default)]
    direction: Option<Direction>,
}

/// Parse a TOML description into a [`Diagram`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed TOML or unknown fields, and
/// [`Error::UnsupportedElement`] for an unknown element kind.
pub fn parse(source: &str) -> Result<Diagram, Error> {
    let description: DiagramDescription = toml::from_str(source)?;
    debug!(
        title = description.title,
        elements = description.elements.len();
        "Description read"
    );
    description.into_diagram()
}

impl DiagramDescription {
    fn into_diagram(self) -> Result<Diagram, Error> {
        let mut diagram = Diagram::new(self.title).with_layout(self.layout);
        if let Some(theme) = self.theme {
            diagram.set_theme(theme);
        }
        diagram.set_sketch(self.sketch);
        diagram.set_legend(self.legend);
        diagram.set_hide_element_types(self.hide_element_types);

        for element in self.elements {
            diagram.add_element(element.into_element()?);
        }
        for relation in self.relations {
            diagram.add_relation(relation.into_relation())?;
        }
        diagram.add_steps(self.steps.into_iter().map(|step| Step::from(step.into_relation())))?;

        Ok(diagram)
    }
}

impl ElementDescription {
    fn into_element(self) -> Result<Element, Error> {
        let span = self.kind.span();
        let kind = self.kind.into_inner();
        trace!(kind = kind, id = self.id; "Converting element");

        let element: Element = match kind.as_str() {
            "person" => Person::new(
                self.id.as_str(),
                PersonArgs {
                    name: self.name,
                    description: self.description,
                    external: self.external,
                },
            )
            .into(),
            "system" => System::new(
                self.id.as_str(),
                SystemArgs {
                    name: self.name,
                    description: self.description,
                    external: self.external,
                },
            )
            .into(),
            "container" => Container::new(
                self.id.as_str(),
                ContainerArgs {
                    name: self.name,
                    description: self.description,
                    technologies: self.technologies,
                    external: self.external,
                },
            )
            .into(),
            "database" => Database::new(
                self.id.as_str(),
                DatabaseArgs {
                    name: self.name,
                    description: self.description,
                    technologies: self.technologies,
                    external: self.external,
                },
            )
            .into(),
            "queue" => Queue::new(
                self.id.as_str(),
                QueueArgs {
                    name: self.name,
                    description: self.description,
                    technologies: self.technologies,
                    external: self.external,
                },
            )
            .into(),
            "component" => Component::new(
                self.id.as_str(),
                ComponentArgs {
                    name: self.name,
                    description: self.description,
                    technologies: self.technologies,
                    external: self.external,
                },
            )
            .into(),
            "system_boundary" => {
                let owner = System::new(
                    self.id.as_str(),
                    SystemArgs {
                        name: self.name,
                        ..Default::default()
                    },
                );
                fill_boundary(owner.boundary(), self.elements)?.into()
            }
            "container_boundary" => {
                let owner = Container::new(
                    self.id.as_str(),
                    ContainerArgs {
                        name: self.name,
                        ..Default::default()
                    },
                );
                fill_boundary(owner.boundary(), self.elements)?.into()
            }
            "enterprise_boundary" => {
                let boundary =
                    Boundary::enterprise(self.id.as_str(), EnterpriseBoundaryArgs { name: self.name });
                fill_boundary(boundary, self.elements)?.into()
            }
            "deployment_node" => {
                let elements = self
                    .elements
                    .into_iter()
                    .map(ElementDescription::into_element)
                    .collect::<Result<Vec<_>, _>>()?;
                DeploymentNode::new(
                    self.id.as_str(),
                    DeploymentNodeArgs {
                        name: self.name,
                        node_type: self.node_type,
                        description: self.description,
                        properties: self.properties,
                        elements,
                    },
                )
                .into()
            }
            _ => {
                return Err(Error::UnsupportedElement { kind, span });
            }
        };
        Ok(element)
    }
}

fn fill_boundary(
    mut boundary: Boundary,
    children: Vec<ElementDescription>,
) -> Result<Boundary, Error> {
    for child in children {
        boundary.add_element(child.into_element()?);
    }
    Ok(boundary)
}

impl EdgeDescription {
    fn into_relation(self) -> Relation {
        let relation = Relation::new(self.source, self.destination, self.description)
            .with_technologies(self.technologies);
        match self.direction {
            Some(direction) => relation.with_direction(direction),
            None => relation,
        }
    }
}
