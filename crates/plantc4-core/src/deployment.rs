//! Deployment nodes: infrastructure that hosts containers.

use serde::{Deserialize, Serialize};

use crate::{element::Element, identifier::Id};

/// A name/value pair describing an aspect of a deployment node, e.g.
/// `Java Version = 8`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parameters for a [`DeploymentNode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentNodeArgs {
    /// Human-readable name of the node.
    pub name: String,
    /// Kind of infrastructure, e.g. `Ubuntu 16.04 LTS` or `Apache Tomcat 8.x`.
    pub node_type: String,
    pub description: String,
    /// Properties rendered ahead of the node, in order.
    pub properties: Vec<Property>,
    /// Initial children, in order.
    pub elements: Vec<Element>,
}

/// Where an instance of a system or container runs: a server, a virtual
/// machine, a runtime, a browser.
///
/// Nodes nest, so a node may host another node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentNode {
    id: Id,
    name: String,
    node_type: String,
    description: String,
    properties: Vec<Property>,
    elements: Vec<Element>,
}

impl DeploymentNode {
    /// Create a new deployment node.
    pub fn new(id: impl Into<Id>, args: DeploymentNodeArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            node_type: args.node_type,
            description: args.description,
            properties: args.properties,
            elements: args.elements,
        }
    }

    /// Append a child element. Same semantics as
    /// [`Boundary::add_element`](crate::boundary::Boundary::add_element).
    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Append a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Builder form of [`DeploymentNode::add_element`].
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.add_element(element);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
