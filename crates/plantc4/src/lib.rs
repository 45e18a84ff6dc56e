//! Plantc4 - C4 architecture models rendered as C4-PlantUML text.
//!
//! A diagram is either assembled in code from the model types re-exported
//! here, or loaded from a TOML description. Rendering is deterministic: the
//! same model always produces the same bytes.

pub mod config;
pub mod description;
pub mod export;

mod error;

pub use plantc4_core::{boundary, deployment, diagram, element, identifier, relation, theme};

pub use error::Plantc4Error;

use std::io;

use log::{debug, info, trace};

use config::AppConfig;
use diagram::Diagram;
use export::{Exporter, plantuml::PlantUmlBuilder};

/// Builder for loading and rendering C4 diagrams.
///
/// # Examples
///
/// ```rust
/// use plantc4::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     title = "Context"
///
///     [[elements]]
///     kind = "person"
///     id = "user"
///     name = "User"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let text = builder.render(&diagram).expect("Failed to render");
///
/// assert!(text.contains("Person(user, \"User\", \"\")"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML description into a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`Plantc4Error::Description`] carrying the source text when the
    /// description is malformed or names an unsupported element kind.
    pub fn parse(&self, source: &str) -> Result<Diagram, Plantc4Error> {
        info!("Parsing diagram description");

        let diagram = description::parse(source)
            .map_err(|err| Plantc4Error::new_description_error(err, source))?;

        debug!(title = diagram.title(); "Diagram description parsed");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a diagram to a C4-PlantUML document.
    ///
    /// # Errors
    ///
    /// Returns [`Plantc4Error::UnsupportedElement`] for element kinds the
    /// renderer has no macro for, and [`Plantc4Error::DuplicateIdentifier`]
    /// when identifier checking is enabled and two elements collide.
    pub fn render(&self, diagram: &Diagram) -> Result<String, Plantc4Error> {
        let mut buffer = Vec::new();
        self.render_to(diagram, &mut buffer)?;

        String::from_utf8(buffer).map_err(|err| Plantc4Error::Export(Box::new(err)))
    }

    /// Render a diagram straight into `writer`.
    ///
    /// Nothing is written when rendering fails.
    pub fn render_to<W: io::Write>(&self, diagram: &Diagram, writer: W) -> Result<(), Plantc4Error> {
        let mut exporter = PlantUmlBuilder::new(writer)
            .with_config(self.config.render())
            .build();

        exporter.export_diagram(diagram)?;

        info!("Diagram rendered successfully");
        Ok(())
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    use proptest::prelude::*;

    use crate::{
        element::{Container, ContainerArgs, Person, PersonArgs},
        relation::Relation,
    };

    // ===================
    // Strategies
    // ===================

    fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,8}"
    }

    fn arb_label() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ]{0,16}"
    }

    fn arb_diagram() -> impl Strategy<Value = Diagram> {
        (
            arb_label(),
            prop::collection::vec((arb_identifier(), arb_label(), any::<bool>()), 0..8),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(title, nodes, legend, sketch)| {
                let mut diagram = Diagram::new(title);
                diagram.set_legend(legend);
                diagram.set_sketch(sketch);
                for (index, (id, name, is_person)) in nodes.iter().enumerate() {
                    let id = format!("{id}_{index}");
                    if *is_person {
                        diagram.add_element(Person::new(
                            id.as_str(),
                            PersonArgs {
                                name: name.clone(),
                                ..Default::default()
                            },
                        ));
                    } else {
                        diagram.add_element(Container::new(
                            id.as_str(),
                            ContainerArgs {
                                name: name.clone(),
                                technologies: vec!["Rust".to_string()],
                                ..Default::default()
                            },
                        ));
                    }
                }
                diagram
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_render_is_deterministic(diagram: &Diagram) -> Result<(), TestCaseError> {
        let builder = DiagramBuilder::default();
        let first = builder.render(diagram).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = builder.render(diagram).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first, second);
        Ok(())
    }

    fn check_document_frame(diagram: &Diagram) -> Result<(), TestCaseError> {
        let text = DiagramBuilder::default()
            .render(diagram)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let expected_start = format!("@startuml {}\n", diagram.title());
        prop_assert!(text.starts_with(&expected_start));
        prop_assert!(text.ends_with("@enduml\n"));
        Ok(())
    }

    fn check_elements_in_insertion_order(diagram: &Diagram) -> Result<(), TestCaseError> {
        let text = DiagramBuilder::default()
            .render(diagram)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut cursor = 0;
        for element in diagram.elements() {
            let needle = format!("({}, ", element.id());
            let found = text[cursor..].find(&needle);
            prop_assert!(found.is_some(), "missing element {}", element.id());
            cursor += found.unwrap_or_default() + needle.len();
        }
        Ok(())
    }

    fn check_relations_follow_elements(diagram: &Diagram) -> Result<(), TestCaseError> {
        let mut diagram = diagram.clone();
        let ids: Vec<_> = diagram.elements().iter().map(|e| e.id()).collect();
        for pair in ids.windows(2) {
            diagram
                .add_relation(Relation::new(pair[0], pair[1], "calls"))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
        }
        let text = DiagramBuilder::default()
            .render(&diagram)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let lines: Vec<&str> = text.lines().collect();
        let last_element = lines
            .iter()
            .rposition(|line| line.starts_with("Person(") || line.starts_with("Container("));
        let first_relation = lines.iter().position(|line| line.starts_with("Rel("));
        if let (Some(element), Some(relation)) = (last_element, first_relation) {
            prop_assert!(element < relation);
        }
        prop_assert_eq!(
            lines.iter().filter(|line| line.starts_with("Rel(")).count(),
            ids.len().saturating_sub(1)
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn render_is_deterministic(diagram in arb_diagram()) {
            check_render_is_deterministic(&diagram)?;
        }

        #[test]
        fn document_frame(diagram in arb_diagram()) {
            check_document_frame(&diagram)?;
        }

        #[test]
        fn elements_in_insertion_order(diagram in arb_diagram()) {
            check_elements_in_insertion_order(&diagram)?;
        }

        #[test]
        fn relations_follow_elements(diagram in arb_diagram()) {
            check_relations_follow_elements(&diagram)?;
        }
    }
}
