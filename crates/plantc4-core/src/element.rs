//! Element kinds that can be placed on a diagram.
//!
//! Every element is built from an identifier and a kind-specific argument
//! record. Construction never fails and the resulting value is immutable,
//! apart from the child lists of [`Boundary`] and [`DeploymentNode`].
//!
//! # Overview
//!
//! - Leaf kinds: [`Person`], [`System`], [`Container`], [`Database`],
//!   [`Queue`], [`Component`].
//! - Composite kinds: [`Boundary`] (system, container, enterprise) and
//!   [`DeploymentNode`].
//! - [`Element`]: the closed sum type over all of the above.

use crate::{boundary::Boundary, deployment::DeploymentNode, identifier::Id};

/// Parameters for a [`Person`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonArgs {
    /// Human-readable name of the person or role.
    pub name: String,
    /// What the person does in relation to the modelled system.
    pub description: String,
    /// Enables the alternate styling reserved for external elements.
    pub external: bool,
}

/// A user of the system, e.g. a customer or an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: Id,
    name: String,
    description: String,
    external: bool,
}

impl Person {
    /// Create a new person.
    pub fn new(id: impl Into<Id>, args: PersonArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            external: args.external,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Parameters for a [`System`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemArgs {
    /// Human-readable name of the system.
    pub name: String,
    /// General description of the purpose of the system.
    pub description: String,
    /// Enables the alternate styling reserved for external elements.
    pub external: bool,
}

/// A software system, the highest level of abstraction in the C4 model.
///
/// A system delivers value to its users; it may be the system being modelled
/// or one of its dependencies. Systems have no technology list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    id: Id,
    name: String,
    description: String,
    external: bool,
}

impl System {
    /// Create a new system.
    pub fn new(id: impl Into<Id>, args: SystemArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            external: args.external,
        }
    }

    /// Returns a system boundary sharing this system's identifier and name.
    ///
    /// The boundary starts empty. The system itself is not rendered through
    /// the boundary, only the children added to it are.
    pub fn boundary(&self) -> Boundary {
        Boundary::system(self.id, self.name.clone())
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Parameters for a [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerArgs {
    /// Human-readable name of the container.
    pub name: String,
    /// General description of the purpose of the container.
    pub description: String,
    /// Technologies the container is built with, e.g. `Java`, `Spring MVC`.
    pub technologies: Vec<String>,
    /// Enables the alternate styling reserved for external elements.
    pub external: bool,
}

/// A separately deployable unit of a system: an application or data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: Id,
    name: String,
    description: String,
    technologies: Vec<String>,
    external: bool,
}

impl Container {
    /// Create a new container.
    pub fn new(id: impl Into<Id>, args: ContainerArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            technologies: args.technologies,
            external: args.external,
        }
    }

    /// Returns a container boundary sharing this container's identifier and
    /// name, used to group the container's components.
    pub fn boundary(&self) -> Boundary {
        Boundary::container(self.id, self.name.clone())
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Parameters for a [`Database`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseArgs {
    pub name: String,
    pub description: String,
    /// Storage technologies, e.g. `Relational Database Schema`.
    pub technologies: Vec<String>,
    pub external: bool,
}

/// A container that stores data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    id: Id,
    name: String,
    description: String,
    technologies: Vec<String>,
    external: bool,
}

impl Database {
    /// Create a new database.
    pub fn new(id: impl Into<Id>, args: DatabaseArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            technologies: args.technologies,
            external: args.external,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Parameters for a [`Queue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueArgs {
    pub name: String,
    pub description: String,
    /// Messaging technologies, e.g. `Kafka`.
    pub technologies: Vec<String>,
    pub external: bool,
}

/// A container that carries messages between other containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    id: Id,
    name: String,
    description: String,
    technologies: Vec<String>,
    external: bool,
}

impl Queue {
    /// Create a new queue.
    pub fn new(id: impl Into<Id>, args: QueueArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            technologies: args.technologies,
            external: args.external,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Parameters for a [`Component`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentArgs {
    /// Human-readable name of the component.
    pub name: String,
    /// General description of the purpose of the component.
    pub description: String,
    /// Technologies describing the component, e.g. `Spring Bean`.
    pub technologies: Vec<String>,
    pub external: bool,
}

/// A constituent piece of a container, such as a controller or a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: Id,
    name: String,
    description: String,
    technologies: Vec<String>,
    external: bool,
}

impl Component {
    /// Create a new component.
    pub fn new(id: impl Into<Id>, args: ComponentArgs) -> Self {
        Self {
            id: id.into(),
            name: args.name,
            description: args.description,
            technologies: args.technologies,
            external: args.external,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn is_external(&self) -> bool {
        self.external
    }
}

/// Any element that can be placed on a diagram or inside a composite.
///
/// The set of kinds is closed. The enum is `#[non_exhaustive]` so that
/// consumers outside this crate keep a fall-through arm when dispatching on
/// it; a kind added here without being wired into a renderer is reported
/// there instead of being silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Element {
    Person(Person),
    System(System),
    Container(Container),
    Database(Database),
    Queue(Queue),
    Component(Component),
    DeploymentNode(DeploymentNode),
    Boundary(Boundary),
}

impl Element {
    /// Returns the identifier of the element.
    pub fn id(&self) -> Id {
        match self {
            Element::Person(person) => person.id(),
            Element::System(system) => system.id(),
            Element::Container(container) => container.id(),
            Element::Database(database) => database.id(),
            Element::Queue(queue) => queue.id(),
            Element::Component(component) => component.id(),
            Element::DeploymentNode(node) => node.id(),
            Element::Boundary(boundary) => boundary.id(),
        }
    }

    /// Returns the display name of the element.
    pub fn name(&self) -> &str {
        match self {
            Element::Person(person) => person.name(),
            Element::System(system) => system.name(),
            Element::Container(container) => container.name(),
            Element::Database(database) => database.name(),
            Element::Queue(queue) => queue.name(),
            Element::Component(component) => component.name(),
            Element::DeploymentNode(node) => node.name(),
            Element::Boundary(boundary) => boundary.name(),
        }
    }

    /// Returns a stable, human-readable name of the element's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Person(_) => "person",
            Element::System(_) => "system",
            Element::Container(_) => "container",
            Element::Database(_) => "database",
            Element::Queue(_) => "queue",
            Element::Component(_) => "component",
            Element::DeploymentNode(_) => "deployment_node",
            Element::Boundary(boundary) => boundary.kind().into(),
        }
    }

    /// Returns the children of composite elements, or an empty slice for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::DeploymentNode(node) => node.elements(),
            Element::Boundary(boundary) => boundary.elements(),
            _ => &[],
        }
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Element {
                fn from(value: $kind) -> Self {
                    Element::$kind(value)
                }
            }
        )*
    };
}

impl_from_kind!(
    Person,
    System,
    Container,
    Database,
    Queue,
    Component,
    DeploymentNode,
    Boundary,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;

    fn technologies(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_container_keeps_technology_order() {
        let api = Container::new(
            "api",
            ContainerArgs {
                name: "API Application".to_string(),
                technologies: technologies(&["Java", "Spring MVC"]),
                ..Default::default()
            },
        );

        assert_eq!(api.id(), "api");
        assert_eq!(api.technologies(), ["Java", "Spring MVC"]);
        assert!(!api.is_external());
    }

    #[test]
    fn test_database_and_queue_keep_technologies() {
        let db = Database::new(
            "db",
            DatabaseArgs {
                name: "Database".to_string(),
                technologies: technologies(&["Relational Database Schema"]),
                ..Default::default()
            },
        );
        let queue = Queue::new(
            "events",
            QueueArgs {
                name: "Events".to_string(),
                technologies: technologies(&["Kafka"]),
                external: true,
                ..Default::default()
            },
        );

        assert_eq!(db.technologies(), ["Relational Database Schema"]);
        assert_eq!(queue.technologies(), ["Kafka"]);
        assert!(queue.is_external());
    }

    #[test]
    fn test_system_boundary_shares_identity() {
        let system = System::new(
            "banking",
            SystemArgs {
                name: "Internet Banking".to_string(),
                ..Default::default()
            },
        );
        let boundary = system.boundary();

        assert_eq!(boundary.id(), system.id());
        assert_eq!(boundary.name(), "Internet Banking");
        assert_eq!(boundary.kind(), BoundaryKind::System);
        assert!(boundary.elements().is_empty());
    }

    #[test]
    fn test_container_boundary_shares_identity() {
        let container = Container::new(
            "b",
            ContainerArgs {
                name: "API Application".to_string(),
                ..Default::default()
            },
        );
        let boundary = container.boundary();

        assert_eq!(boundary.id(), "b");
        assert_eq!(boundary.kind(), BoundaryKind::Container);
    }

    #[test]
    fn test_element_accessors() {
        let person: Element = Person::new(
            "alice",
            PersonArgs {
                name: "Alice".to_string(),
                description: "A customer".to_string(),
                external: false,
            },
        )
        .into();

        assert_eq!(person.id(), "alice");
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.kind_name(), "person");
        assert!(person.children().is_empty());
    }

    #[test]
    fn test_kind_names_of_boundaries() {
        let system = System::new("s", SystemArgs::default()).boundary();
        let container = Container::new("c", ContainerArgs::default()).boundary();

        assert_eq!(Element::from(system).kind_name(), "system_boundary");
        assert_eq!(Element::from(container).kind_name(), "container_boundary");
    }
}
