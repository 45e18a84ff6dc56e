//! C4-PlantUML rendering.
//!
//! The document is assembled in memory in a single pass over the diagram and
//! handed to the output only once it is complete:
//!
//! ```text
//! @startuml <title>
//! !include ...C4_Container.puml / C4_Component.puml / C4_Deployment.puml
//! WithoutPropertyHeader()
//! <layout>() [LAYOUT_AS_SKETCH()]
//! UpdateElementStyle(...)        one per themed category
//! <elements>                     insertion order, boundaries recursively
//! <relations>                    insertion order
//! <steps>                        insertion order
//! [HIDE_STEREOTYPE()] [SHOW_LEGEND(...)]
//! @enduml
//! ```

use std::{
    collections::HashSet,
    fmt::Write as _,
    io::Write,
};

use log::{debug, info, trace};

use plantc4_core::{
    boundary::{Boundary, BoundaryKind},
    deployment::DeploymentNode,
    diagram::Diagram,
    element::Element,
    identifier::Id,
    relation::Relation,
    theme::Palette,
};

use super::{Error, Exporter};
use crate::config::{IndentStyle, RenderConfig};

const INCLUDES: [&str; 3] = [
    "https://raw.githubusercontent.com/plantuml-stdlib/C4-PlantUML/master/C4_Container.puml",
    "https://raw.githubusercontent.com/plantuml-stdlib/C4-PlantUML/master/C4_Component.puml",
    "https://raw.githubusercontent.com/plantuml-stdlib/C4-PlantUML/master/C4_Deployment.puml",
];

/// Joins element technologies.
const ELEMENT_TECHNOLOGY_SEPARATOR: &str = ", ";

/// Joins relation and step technologies.
const EDGE_TECHNOLOGY_SEPARATOR: &str = ",";

/// Builder for a [`PlantUml`] exporter.
pub struct PlantUmlBuilder<W> {
    writer: W,
    config: RenderConfig,
}

impl<W: Write> PlantUmlBuilder<W> {
    /// Start building an exporter that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: RenderConfig::default(),
        }
    }

    /// Use the given render configuration.
    pub fn with_config(mut self, config: &RenderConfig) -> Self {
        self.config = *config;
        self
    }

    pub fn build(self) -> PlantUml<W> {
        PlantUml {
            writer: self.writer,
            config: self.config,
        }
    }
}

/// Exporter producing a C4-PlantUML document.
///
/// # Examples
///
/// ```
/// use plantc4::export::{Exporter, plantuml::PlantUmlBuilder};
/// use plantc4::diagram::Diagram;
///
/// let mut out = Vec::new();
/// let mut exporter = PlantUmlBuilder::new(&mut out).build();
/// exporter.export_diagram(&Diagram::new("Empty")).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("@startuml Empty\n"));
/// assert!(text.ends_with("@enduml\n"));
/// ```
pub struct PlantUml<W> {
    writer: W,
    config: RenderConfig,
}

impl<W> PlantUml<W> {
    /// Consume the exporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for PlantUml<W> {
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), Error> {
        info!(
            title = diagram.title(),
            elements = diagram.elements().len(),
            relations = diagram.relations().len(),
            steps = diagram.steps().len();
            "Rendering diagram"
        );

        if self.config.check_unique_ids() {
            check_unique_ids(diagram.elements())?;
            debug!("Identifier check passed");
        }

        let document = render_document(diagram, self.config.indent())?;

        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;

        debug!(bytes = document.len(); "Document written");
        Ok(())
    }
}

/// Render a whole diagram to a string.
pub(crate) fn render_document(diagram: &Diagram, indent: IndentStyle) -> Result<String, Error> {
    let mut document = Document::new(indent);

    document.preamble(diagram)?;
    for element in diagram.elements() {
        document.element(element, 0)?;
    }
    for relation in diagram.relations() {
        document.edge(relation)?;
    }
    for step in diagram.steps() {
        document.edge(step.edge())?;
    }
    document.epilogue(diagram)?;

    Ok(document.out)
}

/// Fails on the first identifier seen twice, searching depth first in
/// document order.
fn check_unique_ids(elements: &[Element]) -> Result<(), Error> {
    fn visit(elements: &[Element], seen: &mut HashSet<Id>) -> Result<(), Error> {
        for element in elements {
            let id = element.id();
            if !seen.insert(id) {
                return Err(Error::DuplicateIdentifier { id: id.to_string() });
            }
            visit(element.children(), seen)?;
        }
        Ok(())
    }

    visit(elements, &mut HashSet::new())
}

struct Document {
    out: String,
    indent: IndentStyle,
}

impl Document {
    fn new(indent: IndentStyle) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    fn preamble(&mut self, diagram: &Diagram) -> Result<(), Error> {
        writeln!(self.out, "@startuml {}", diagram.title())?;
        for include in INCLUDES {
            writeln!(self.out, "!include {include}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "WithoutPropertyHeader()")?;
        writeln!(self.out)?;
        writeln!(self.out, "{}()", diagram.layout().macro_name())?;
        if diagram.is_sketch() {
            writeln!(self.out, "LAYOUT_AS_SKETCH()")?;
        }
        writeln!(self.out)?;

        let theme = diagram.theme();
        let categories = [
            ("system", theme.system()),
            ("container", theme.container()),
            ("component", theme.component()),
            ("person", theme.person()),
        ];
        for (category, palette) in categories {
            match palette {
                Some(palette) => self.element_style(category, palette)?,
                None => trace!(category; "No style override"),
            }
        }
        Ok(())
    }

    fn element_style(&mut self, category: &str, palette: &Palette) -> Result<(), Error> {
        writeln!(
            self.out,
            r#"UpdateElementStyle({category}, $bgColor="{}", $fontColor="{}")"#,
            palette.background_color, palette.font_color
        )?;
        Ok(())
    }

    fn epilogue(&mut self, diagram: &Diagram) -> Result<(), Error> {
        if diagram.hides_element_types() {
            writeln!(self.out, "HIDE_STEREOTYPE()")?;
            writeln!(self.out)?;
        }
        if diagram.has_legend() {
            // Stereotypes stay visible in the legend; hiding them is the job
            // of the separate hide-element-types flag.
            writeln!(self.out, "SHOW_LEGEND($hideStereotype=false)")?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "@enduml")?;
        Ok(())
    }

    /// Starts a line belonging to an element at `depth`.
    fn line_start(&mut self, depth: usize) {
        if self.indent == IndentStyle::Nested {
            for _ in 0..depth {
                self.out.push('\t');
            }
        }
    }

    fn element(&mut self, element: &Element, depth: usize) -> Result<(), Error> {
        match element {
            Element::Person(person) => {
                self.line_start(depth);
                writeln!(
                    self.out,
                    r#"{}({}, "{}", "{}")"#,
                    macro_name("Person", person.is_external()),
                    person.id(),
                    person.name(),
                    person.description()
                )?;
            }
            Element::System(system) => {
                self.line_start(depth);
                writeln!(
                    self.out,
                    r#"{}({}, "{}", "{}")"#,
                    macro_name("System", system.is_external()),
                    system.id(),
                    system.name(),
                    system.description()
                )?;
            }
            Element::Container(container) => self.technology_element(
                macro_name("Container", container.is_external()),
                element,
                container.technologies(),
                container.description(),
                depth,
            )?,
            Element::Database(database) => self.technology_element(
                macro_name("ContainerDb", database.is_external()),
                element,
                database.technologies(),
                database.description(),
                depth,
            )?,
            Element::Queue(queue) => self.technology_element(
                macro_name("ContainerQueue", queue.is_external()),
                element,
                queue.technologies(),
                queue.description(),
                depth,
            )?,
            Element::Component(component) => self.technology_element(
                macro_name("Component", component.is_external()),
                element,
                component.technologies(),
                component.description(),
                depth,
            )?,
            Element::Boundary(boundary) => self.boundary(boundary, depth)?,
            Element::DeploymentNode(node) => self.deployment_node(node, depth)?,
            other => {
                return Err(Error::UnsupportedElement {
                    kind: other.kind_name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn technology_element(
        &mut self,
        name: String,
        element: &Element,
        technologies: &[String],
        description: &str,
        depth: usize,
    ) -> Result<(), Error> {
        self.line_start(depth);
        writeln!(
            self.out,
            r#"{name}({}, "{}", "{}", "{description}")"#,
            element.id(),
            element.name(),
            technologies.join(ELEMENT_TECHNOLOGY_SEPARATOR),
        )?;
        Ok(())
    }

    fn boundary(&mut self, boundary: &Boundary, depth: usize) -> Result<(), Error> {
        let name = match boundary.kind() {
            BoundaryKind::System => "System_Boundary",
            BoundaryKind::Container => "Container_Boundary",
            BoundaryKind::Enterprise => "Enterprise_Boundary",
        };

        self.line_start(depth);
        writeln!(self.out, r#"{name}({}, "{}") {{"#, boundary.id(), boundary.name())?;
        self.children(boundary.elements(), depth)?;
        self.line_start(depth);
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn deployment_node(&mut self, node: &DeploymentNode, depth: usize) -> Result<(), Error> {
        for property in node.properties() {
            self.line_start(depth);
            writeln!(
                self.out,
                r#"AddProperty("{}", "{}")"#,
                property.name, property.value
            )?;
        }

        self.line_start(depth);
        writeln!(
            self.out,
            r#"Deployment_Node({}, "{}", "{}", "{}") {{"#,
            node.id(),
            node.name(),
            node.node_type(),
            node.description()
        )?;
        self.children(node.elements(), depth)?;
        self.line_start(depth);
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn children(&mut self, elements: &[Element], depth: usize) -> Result<(), Error> {
        for child in elements {
            if self.indent == IndentStyle::Tab {
                self.out.push('\t');
            }
            self.element(child, depth + 1)?;
        }
        Ok(())
    }

    fn edge(&mut self, edge: &Relation) -> Result<(), Error> {
        let name = match edge.direction() {
            Some(direction) => format!("Rel_{direction}"),
            None => "Rel".to_string(),
        };

        writeln!(
            self.out,
            r#"{name}({}, {}, "{}", "{}")"#,
            edge.source(),
            edge.destination(),
            edge.description(),
            edge.technologies().join(EDGE_TECHNOLOGY_SEPARATOR)
        )?;
        Ok(())
    }
}

/// Base macro name, with the `_Ext` suffix for external elements.
fn macro_name(base: &str, external: bool) -> String {
    if external {
        format!("{base}_Ext")
    } else {
        base.to_string()
    }
}
