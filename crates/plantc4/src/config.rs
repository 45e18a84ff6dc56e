//! Configuration types for plantc4 rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are written out. All types implement [`serde::Deserialize`] for loading
//! from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Controls indentation and the optional identifier check.
//! - [`IndentStyle`] - How nested elements are indented.
//!
//! # Example
//!
//! ```
//! # use plantc4::config::{AppConfig, IndentStyle};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().indent(), IndentStyle::Tab);
//! assert!(!config.render().check_unique_ids());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// Top-level application configuration.
///
/// Unknown sections and keys are rejected so that a misspelled option does
/// not silently fall back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// How the children of boundaries and deployment nodes are indented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    /// The first line of every child gets exactly one tab, whatever its depth.
    ///
    /// Produces the same bytes as existing C4-PlantUML generators built on
    /// this layout.
    #[default]
    Tab,
    /// Every line is indented by one tab per nesting level.
    Nested,
}

impl FromStr for IndentStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(Self::Tab),
            "nested" => Ok(Self::Nested),
            _ => Err("Unsupported indent style"),
        }
    }
}

impl Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => write!(f, "tab"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// Rendering options that do not belong to an individual diagram.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation of nested elements.
    #[serde(default)]
    indent: IndentStyle,

    /// Reject diagrams in which two elements share an identifier.
    #[serde(default)]
    check_unique_ids: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent` - Indentation of nested elements.
    /// * `check_unique_ids` - Whether duplicate identifiers fail the render.
    pub fn new(indent: IndentStyle, check_unique_ids: bool) -> Self {
        Self {
            indent,
            check_unique_ids,
        }
    }

    /// Returns the [`IndentStyle`].
    pub fn indent(&self) -> IndentStyle {
        self.indent
    }

    /// Returns whether duplicate identifiers are rejected.
    pub fn check_unique_ids(&self) -> bool {
        self.check_unique_ids
    }
}
