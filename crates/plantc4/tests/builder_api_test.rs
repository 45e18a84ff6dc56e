//! Integration tests for the DiagramBuilder API
//!
//! These tests exercise the public API the way a library user would.

use plantc4::{
    DiagramBuilder, Plantc4Error,
    boundary::EnterpriseBoundaryArgs,
    config::{AppConfig, IndentStyle, RenderConfig},
    diagram::{Diagram, Layout},
    element::{Container, ContainerArgs, Person, PersonArgs, System, SystemArgs},
    relation::{Direction, Relation},
};

const CONTEXT: &str = r#"
title = "Context"
legend = true

[[elements]]
kind = "person"
id = "P"
name = "Customer"
description = "Buys things"

[[elements]]
kind = "system"
id = "S"
name = "Shop"
description = "Sells things"

[[relations]]
source = "P"
destination = "S"
description = "Places orders using"
technologies = ["HTTPS"]
direction = "down"
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_simple_description() {
    let builder = DiagramBuilder::default();
    let result = builder.parse(CONTEXT);
    assert!(
        result.is_ok(),
        "Should parse valid description: {:?}",
        result.err()
    );

    let diagram = result.unwrap();
    assert_eq!(diagram.title(), "Context");
    assert_eq!(diagram.elements().len(), 2);
    assert_eq!(diagram.relations().len(), 1);
    assert!(diagram.has_legend());
}

#[test]
fn test_render_simple_description() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(CONTEXT).expect("Failed to parse description");
    let text = builder.render(&diagram).expect("Failed to render");

    assert!(text.starts_with("@startuml Context\n"));
    assert!(text.contains("Person(P, \"Customer\", \"Buys things\")\n"));
    assert!(text.contains("System(S, \"Shop\", \"Sells things\")\n"));
    assert!(text.contains("Rel_Down(P, S, \"Places orders using\", \"HTTPS\")\n"));
    assert!(text.ends_with("SHOW_LEGEND($hideStereotype=false)\n\n@enduml\n"));
}

#[test]
fn test_parse_and_model_agree() {
    let builder = DiagramBuilder::default();
    let parsed = builder.parse(CONTEXT).expect("Failed to parse description");

    let mut built = Diagram::new("Context").with_legend();
    built.add_element(Person::new(
        "P",
        PersonArgs {
            name: "Customer".to_string(),
            description: "Buys things".to_string(),
            ..Default::default()
        },
    ));
    built.add_element(System::new(
        "S",
        SystemArgs {
            name: "Shop".to_string(),
            description: "Sells things".to_string(),
            ..Default::default()
        },
    ));
    built
        .add_relation(
            Relation::new("P", "S", "Places orders using")
                .with_technologies(["HTTPS"])
                .with_direction(Direction::Down),
        )
        .unwrap();

    assert_eq!(
        builder.render(&parsed).unwrap(),
        builder.render(&built).unwrap()
    );
}

#[test]
fn test_render_to_writer() {
    let builder = DiagramBuilder::default();
    let diagram = Diagram::new("Writer").with_layout(Layout::LeftRight);

    let mut out = Vec::new();
    builder
        .render_to(&diagram, &mut out)
        .expect("Failed to render into writer");

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("LAYOUT_LEFT_RIGHT()\n"));
    assert_eq!(text, builder.render(&diagram).unwrap());
}

#[test]
fn test_nested_indent_config() {
    let config = AppConfig::new(RenderConfig::new(IndentStyle::Nested, false));
    let builder = DiagramBuilder::new(config);

    let system = System::new(
        "shop",
        SystemArgs {
            name: "Shop".to_string(),
            ..Default::default()
        },
    );
    let container = Container::new(
        "api",
        ContainerArgs {
            name: "API".to_string(),
            technologies: vec!["Rust".to_string()],
            ..Default::default()
        },
    );
    let inner = container.boundary().with_element(container.clone());
    let outer = system.boundary().with_element(inner);

    let mut diagram = Diagram::new("Nested");
    diagram.add_element(outer);

    let text = builder.render(&diagram).unwrap();
    assert!(text.contains(
        "System_Boundary(shop, \"Shop\") {\n\
         \tContainer_Boundary(api, \"API\") {\n\
         \t\tContainer(api, \"API\", \"Rust\", \"\")\n\
         \t}\n\
         }\n"
    ));
}

#[test]
fn test_duplicate_identifiers_rejected_when_enabled() {
    let config = AppConfig::new(RenderConfig::new(IndentStyle::Tab, true));
    let builder = DiagramBuilder::new(config);

    let mut diagram = Diagram::new("Duplicates");
    let enterprise = plantc4::boundary::Boundary::enterprise(
        "corp",
        EnterpriseBoundaryArgs {
            name: "Corp".to_string(),
        },
    )
    .with_element(Person::new("corp", PersonArgs::default()));
    diagram.add_element(enterprise);

    let mut out = Vec::new();
    let err = builder.render_to(&diagram, &mut out).unwrap_err();
    assert!(matches!(err, Plantc4Error::DuplicateIdentifier { ref id } if id == "corp"));
    assert!(out.is_empty(), "Nothing should be written on failure");

    // The default configuration renders the same diagram.
    assert!(DiagramBuilder::default().render(&diagram).is_ok());
}

#[test]
fn test_parse_invalid_description_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("this is not a description");
    assert!(matches!(result, Err(Plantc4Error::Description { .. })));
}

#[test]
fn test_parse_unsupported_kind_keeps_source() {
    let source = r#"
title = "Bad"

[[elements]]
kind = "widget"
id = "w"
"#;

    let builder = DiagramBuilder::default();
    match builder.parse(source) {
        Err(Plantc4Error::Description { err, src }) => {
            assert_eq!(src, source);
            let span = err.span().expect("unsupported kind carries a span");
            assert!(src[span].contains("widget"));
        }
        other => panic!("Expected description error, got {other:?}"),
    }
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder
        .render(&Diagram::new("First"))
        .expect("Failed to render first");
    let second = builder
        .render(&Diagram::new("Second"))
        .expect("Failed to render second");

    assert!(first.starts_with("@startuml First\n"));
    assert!(second.starts_with("@startuml Second\n"));
}
