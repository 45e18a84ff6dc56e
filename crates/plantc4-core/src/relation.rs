//! Directed edges between elements.
//!
//! [`Relation`]s describe static dependencies; [`Step`]s describe the
//! numbered interactions of a dynamic diagram. Both carry the same data and
//! are rendered the same way, but a diagram keeps them in separate sequences.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// The "arrow key" direction of an edge, used by the renderer as a layout
/// hint.
///
/// Only the four named directions are understood by C4-PlantUML. Any other
/// token is kept as [`Direction::Custom`] and passed through to the output
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Unrecognized token, emitted verbatim as the macro suffix.
    Custom(String),
}

impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = match s.to_ascii_lowercase().as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Custom(s.to_string()),
        };
        Ok(direction)
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(direction) => direction,
            Err(never) => match never {},
        }
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.to_string()
    }
}

impl Direction {
    /// Returns `true` for a custom token that is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Custom(token) if token.trim().is_empty())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token: &str = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Custom(token) => token,
        };
        f.write_str(token)
    }
}

/// A directed, described edge between two elements.
///
/// Endpoints are held by identifier. Nothing checks that they refer to
/// elements registered on the same diagram, or that they differ; such edges
/// render literally.
///
/// # Examples
///
/// ```
/// use plantc4_core::relation::{Direction, Relation};
///
/// let rel = Relation::new("alice", "orders", "Places orders using")
///     .with_technologies(["HTTPS"])
///     .with_direction(Direction::Down);
/// assert_eq!(rel.source(), "alice");
/// assert_eq!(rel.direction(), Some(&Direction::Down));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    source: Id,
    destination: Id,
    description: String,
    technologies: Vec<String>,
    direction: Option<Direction>,
}

impl Relation {
    /// Create a new relation.
    ///
    /// # Arguments
    ///
    /// * `source` - The subject, e.g. the `Src` in "Src uses Dst".
    /// * `destination` - The object of the relation.
    /// * `description` - The verb, in the indicative tense from the source's
    ///   perspective ("uses", not "is used by").
    pub fn new(
        source: impl Into<Id>,
        destination: impl Into<Id>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            description: description.into(),
            technologies: Vec::new(),
            direction: None,
        }
    }

    /// Set the technologies describing the interaction, e.g. `JSON/HTTPS`.
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// Set an explicit layout direction.
    ///
    /// A blank token means no direction, so the edge keeps the default
    /// layout-driven routing.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = (!direction.is_blank()).then_some(direction);
        self
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn destination(&self) -> Id {
        self.destination
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn direction(&self) -> Option<&Direction> {
        self.direction.as_ref()
    }
}

/// One interaction in the ordered narrative of a dynamic diagram.
///
/// A step has the same shape as a [`Relation`]; the order in which steps are
/// added to a diagram is the order in which they are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step(Relation);

impl Step {
    /// Create a new step. Arguments as for [`Relation::new`].
    pub fn new(
        source: impl Into<Id>,
        destination: impl Into<Id>,
        description: impl Into<String>,
    ) -> Self {
        Self(Relation::new(source, destination, description))
    }

    pub fn with_technologies<I, S>(self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(self.0.with_technologies(technologies))
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self(self.0.with_direction(direction))
    }

    /// Borrow the edge data of this step.
    pub fn edge(&self) -> &Relation {
        &self.0
    }
}

impl From<Relation> for Step {
    fn from(relation: Relation) -> Self {
        Self(relation)
    }
}
