//! Example: Building a container diagram from the model
//!
//! This example assembles a diagram in code, without a description file,
//! and prints the C4-PlantUML document to stdout.

use plantc4::{
    DiagramBuilder,
    diagram::{Diagram, Layout},
    element::{
        Container, ContainerArgs, Database, DatabaseArgs, Person, PersonArgs, System, SystemArgs,
    },
    relation::{Direction, Relation},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let customer = Person::new(
        "customer",
        PersonArgs {
            name: "Customer".to_string(),
            description: "A customer of the shop".to_string(),
            ..Default::default()
        },
    );

    let shop = System::new(
        "shop",
        SystemArgs {
            name: "Online Shop".to_string(),
            description: "Sells things on the internet".to_string(),
            ..Default::default()
        },
    );

    let web = Container::new(
        "web",
        ContainerArgs {
            name: "Web Application".to_string(),
            description: "Serves the storefront".to_string(),
            technologies: vec!["Rust".to_string(), "axum".to_string()],
            ..Default::default()
        },
    );

    let db = Database::new(
        "db",
        DatabaseArgs {
            name: "Orders".to_string(),
            description: "Stores orders".to_string(),
            technologies: vec!["PostgreSQL".to_string()],
            ..Default::default()
        },
    );

    // Containers live inside the boundary derived from their system
    let boundary = shop.boundary().with_element(web).with_element(db);

    let mut diagram = Diagram::new("Online Shop Containers")
        .with_layout(Layout::LeftRight)
        .with_legend();
    diagram.add_element(customer);
    diagram.add_element(boundary);

    diagram.add_relation(
        Relation::new("customer", "web", "Browses")
            .with_technologies(["HTTPS"])
            .with_direction(Direction::Right),
    )?;
    diagram.add_relation(
        Relation::new("web", "db", "Reads and writes")
            .with_technologies(["SQL", "TCP"])
            .with_direction(Direction::Down),
    )?;

    let builder = DiagramBuilder::default();
    let text = builder.render(&diagram)?;
    print!("{text}");

    Ok(())
}
