//! Per-category color configuration.
//!
//! A [`Theme`] maps the four styleable element categories to a [`Palette`].
//! Themes are pure configuration: they are read once, when the document
//! preamble is written.

use serde::{Deserialize, Serialize};

/// Background and font color of one element category.
///
/// Colors are passed to the renderer verbatim, so any value understood by
/// PlantUML (`#4E668A`, `white`, ...) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    pub background_color: String,
    pub font_color: String,
}

impl Palette {
    pub fn new(background_color: impl Into<String>, font_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            font_color: font_color.into(),
        }
    }
}

/// Styles for each element category.
///
/// A category left unset produces no style override, so the renderer's own
/// defaults apply to it. A theme supplied to a diagram replaces the built-in
/// theme as a whole; to change a single category start from
/// [`Theme::default`]:
///
/// ```
/// use plantc4_core::theme::{Palette, Theme};
///
/// let theme = Theme::default().with_system(Palette::new("#1168BD", "#FFFFFF"));
/// assert_eq!(theme.container(), Theme::default().container());
/// ```
///
/// When read from TOML, categories missing from the input take the built-in
/// palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    system: Option<Palette>,
    container: Option<Palette>,
    component: Option<Palette>,
    person: Option<Palette>,
}

impl Default for Theme {
    /// The palette used by diagrams without an explicit theme.
    fn default() -> Self {
        Self {
            system: Some(Palette::new("#4E668A", "#F5F5F5")),
            container: Some(Palette::new("#6C8EBF", "#262626")),
            component: Some(Palette::new("#94B3E0", "#262626")),
            person: Some(Palette::new("#455A7A", "#ffffff")),
        }
    }
}

impl Theme {
    /// A theme with no category set.
    pub fn empty() -> Self {
        Self {
            system: None,
            container: None,
            component: None,
            person: None,
        }
    }

    pub fn with_system(mut self, palette: Palette) -> Self {
        self.system = Some(palette);
        self
    }

    pub fn with_container(mut self, palette: Palette) -> Self {
        self.container = Some(palette);
        self
    }

    pub fn with_component(mut self, palette: Palette) -> Self {
        self.component = Some(palette);
        self
    }

    pub fn with_person(mut self, palette: Palette) -> Self {
        self.person = Some(palette);
        self
    }

    pub fn system(&self) -> Option<&Palette> {
        self.system.as_ref()
    }

    pub fn container(&self) -> Option<&Palette> {
        self.container.as_ref()
    }

    pub fn component(&self) -> Option<&Palette> {
        self.component.as_ref()
    }

    pub fn person(&self) -> Option<&Palette> {
        self.person.as_ref()
    }
}
