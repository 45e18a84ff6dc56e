//! The diagram aggregate.
//!
//! A [`Diagram`] owns the top-level elements, the relations and the steps of
//! one document together with its title, layout, theme and display flags.
//! Every sequence is append-only and keeps insertion order, which is also the
//! render order.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    element::Element,
    error::ModelError,
    relation::{Relation, Step},
    theme::Theme,
};

/// Overall layout flow of the rendered diagram.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Top to bottom flow (default).
    #[default]
    TopDown,
    /// Left to right flow.
    ///
    /// PlantUML implements this by rotating the whole diagram, which also
    /// rotates relation directions. Prefer [`Layout::Landscape`] when explicit
    /// directions are used.
    LeftRight,
    /// Left to right flow that keeps relation directions intact.
    Landscape,
}

impl Layout {
    /// Returns the name of the layout macro.
    pub fn macro_name(self) -> &'static str {
        match self {
            Self::TopDown => "LAYOUT_TOP_DOWN",
            Self::LeftRight => "LAYOUT_LEFT_RIGHT",
            Self::Landscape => "LAYOUT_LANDSCAPE",
        }
    }
}

impl FromStr for Layout {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_down" | "portrait" => Ok(Self::TopDown),
            "left_right" => Ok(Self::LeftRight),
            "landscape" => Ok(Self::Landscape),
            _ => Err("Unsupported layout"),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_name())
    }
}

/// Root of the model: everything needed to render one document.
///
/// # Examples
///
/// ```
/// use plantc4_core::{
///     diagram::Diagram,
///     element::{Person, PersonArgs, System, SystemArgs},
///     relation::{Direction, Relation},
/// };
///
/// let alice = Person::new("alice", PersonArgs {
///     name: "Alice".to_string(),
///     description: "A customer".to_string(),
///     ..Default::default()
/// });
/// let orders = System::new("orders", SystemArgs {
///     name: "Orders".to_string(),
///     description: "Order management".to_string(),
///     ..Default::default()
/// });
///
/// let mut diagram = Diagram::new("Context").with_legend();
/// diagram
///     .add_relation(
///         Relation::new(alice.id(), orders.id(), "Places orders using")
///             .with_technologies(["HTTPS"])
///             .with_direction(Direction::Down),
///     )
///     .unwrap();
/// diagram.add_element(alice);
/// diagram.add_element(orders);
///
/// assert_eq!(diagram.elements().len(), 2);
/// assert_eq!(diagram.relations().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    title: String,
    layout: Layout,
    theme: Option<Theme>,
    sketch: bool,
    legend: bool,
    hide_element_types: bool,
    elements: Vec<Element>,
    relations: Vec<Relation>,
    steps: Vec<Step>,
}

impl Diagram {
    /// Create an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the layout flow.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the built-in theme. See [`Theme`] for how unset categories
    /// are handled.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Render in a hand-drawn style, marking the diagram as a draft.
    pub fn as_sketch(mut self) -> Self {
        self.sketch = true;
        self
    }

    /// Show a legend mapping colors to element kinds.
    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Hide the type line drawn at the top of every element. Independent of
    /// [`Diagram::with_legend`].
    pub fn hide_element_types(mut self) -> Self {
        self.hide_element_types = true;
        self
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    pub fn set_sketch(&mut self, sketch: bool) {
        self.sketch = sketch;
    }

    pub fn set_legend(&mut self, legend: bool) {
        self.legend = legend;
    }

    pub fn set_hide_element_types(&mut self, hide: bool) {
        self.hide_element_types = hide;
    }

    /// Append a top-level element.
    pub fn add_element(&mut self, element: impl Into<Element>) {
        let element = element.into();
        trace!(id:% = element.id(), kind = element.kind_name(); "Adding element");
        self.elements.push(element);
    }

    /// Append a relation.
    ///
    /// Endpoints do not need to be registered on this diagram. If they are
    /// not, the relation refers to shapes that are never drawn.
    ///
    /// # Errors
    ///
    /// Registration cannot fail today; the `Result` is kept so that checks
    /// can be introduced without breaking callers.
    pub fn add_relation(&mut self, relation: Relation) -> Result<(), ModelError> {
        self.relations.push(relation);
        Ok(())
    }

    /// Append steps, keeping their order.
    ///
    /// # Errors
    ///
    /// As for [`Diagram::add_relation`].
    pub fn add_steps(&mut self, steps: impl IntoIterator<Item = Step>) -> Result<(), ModelError> {
        self.steps.extend(steps);
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the explicit theme, if one was set.
    pub fn explicit_theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Returns the effective theme: the explicit one, or the built-in palette.
    pub fn theme(&self) -> Theme {
        self.theme.clone().unwrap_or_default()
    }

    pub fn is_sketch(&self) -> bool {
        self.sketch
    }

    pub fn has_legend(&self) -> bool {
        self.legend
    }

    pub fn hides_element_types(&self) -> bool {
        self.hide_element_types
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        element::{Person, PersonArgs},
        theme::Palette,
    };

    #[test]
    fn test_defaults() {
        let diagram = Diagram::new("Empty");

        assert_eq!(diagram.title(), "Empty");
        assert_eq!(diagram.layout(), Layout::TopDown);
        assert!(diagram.explicit_theme().is_none());
        assert_eq!(diagram.theme(), Theme::default());
        assert!(!diagram.is_sketch());
        assert!(!diagram.has_legend());
        assert!(!diagram.hides_element_types());
        assert!(diagram.elements().is_empty());
    }

    #[test]
    fn test_builder_flags() {
        let theme = Theme::empty().with_system(Palette::new("red", "white"));
        let diagram = Diagram::new("Flags")
            .with_layout(Layout::Landscape)
            .with_theme(theme.clone())
            .as_sketch()
            .with_legend()
            .hide_element_types();

        assert_eq!(diagram.layout(), Layout::Landscape);
        assert_eq!(diagram.theme(), theme);
        assert!(diagram.is_sketch());
        assert!(diagram.has_legend());
        assert!(diagram.hides_element_types());
    }

    #[test]
    fn test_sequences_keep_insertion_order() {
        let mut diagram = Diagram::new("Order");
        diagram.add_element(Person::new("first", PersonArgs::default()));
        diagram.add_element(Person::new("second", PersonArgs::default()));
        diagram.add_relation(Relation::new("first", "second", "r1")).unwrap();
        diagram.add_relation(Relation::new("second", "first", "r2")).unwrap();
        diagram
            .add_steps([
                Step::new("first", "second", "s1"),
                Step::new("second", "first", "s2"),
            ])
            .unwrap();

        assert_eq!(diagram.elements()[0].id(), "first");
        assert_eq!(diagram.elements()[1].id(), "second");
        assert_eq!(diagram.relations()[1].description(), "r2");
        assert_eq!(diagram.steps()[0].edge().description(), "s1");
    }

    #[test]
    fn test_dangling_relation_is_accepted() {
        let mut diagram = Diagram::new("Dangling");
        assert!(
            diagram
                .add_relation(Relation::new("ghost", "phantom", "Haunts"))
                .is_ok()
        );
        assert!(diagram.elements().is_empty());
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(Layout::TopDown.to_string(), "LAYOUT_TOP_DOWN");
        assert_eq!(Layout::LeftRight.to_string(), "LAYOUT_LEFT_RIGHT");
        assert_eq!("landscape".parse::<Layout>(), Ok(Layout::Landscape));
        assert_eq!("portrait".parse::<Layout>(), Ok(Layout::TopDown));
        assert!("sideways".parse::<Layout>().is_err());
    }
}
