//! plantc4 Core Types and Definitions
//!
//! This crate provides the model used to describe a software architecture
//! with the C4 vocabulary. It includes:
//!
//! - **Identifiers**: String-interned element identifiers ([`identifier::Id`])
//! - **Elements**: People, systems, containers, databases, queues and
//!   components ([`element`] module)
//! - **Composites**: Boundaries ([`boundary`]) and deployment nodes ([`deployment`])
//! - **Edges**: Relations and steps ([`relation`] module)
//! - **Theme**: Per-category colors ([`theme`] module)
//! - **Diagram**: The aggregate handed to a renderer ([`diagram`] module)

pub mod boundary;
pub mod deployment;
pub mod diagram;
pub mod element;
pub mod identifier;
pub mod relation;
pub mod theme;

mod error;

pub use error::ModelError;

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use crate::{
        boundary::{Boundary, EnterpriseBoundaryArgs},
        diagram::Diagram,
        element::{Container, ContainerArgs},
        relation::Relation,
    };

    // ===================
    // Strategies
    // ===================

    fn ident_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9_]{0,12}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Elements added to a boundary come back in the same order.
    fn check_boundary_order(ids: Vec<String>) -> Result<(), TestCaseError> {
        let mut boundary = Boundary::enterprise("e", EnterpriseBoundaryArgs::default());
        for id in &ids {
            boundary.add_element(Container::new(id.as_str(), ContainerArgs::default()));
        }

        let seen: Vec<String> = boundary
            .elements()
            .iter()
            .map(|el| el.id().to_string())
            .collect();
        prop_assert_eq!(seen, ids);
        Ok(())
    }

    /// Relations registered on a diagram come back in the same order.
    fn check_relation_order(descriptions: Vec<String>) -> Result<(), TestCaseError> {
        let mut diagram = Diagram::new("order");
        for description in &descriptions {
            diagram
                .add_relation(Relation::new("a", "b", description.as_str()))
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
        }

        let seen: Vec<&str> = diagram.relations().iter().map(|r| r.description()).collect();
        prop_assert_eq!(seen, descriptions.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn boundary_preserves_order(ids in prop::collection::vec(ident_strategy(), 0..16)) {
            check_boundary_order(ids)?;
        }

        #[test]
        fn diagram_preserves_relation_order(descriptions in prop::collection::vec(".{0,20}", 0..16)) {
            check_relation_order(descriptions)?;
        }
    }
}
