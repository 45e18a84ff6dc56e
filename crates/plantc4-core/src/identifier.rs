//! Element identifiers backed by a global string interner.
//!
//! Identifiers are supplied by the caller and end up verbatim in the rendered
//! document as macro aliases. They are never validated here; two elements may
//! carry the same [`Id`] and will then collide in the rendered diagram.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for element identifiers.
///
/// # Thread Safety
///
/// Access is serialized through a `Mutex`. A poisoned lock is recovered since
/// the interner is append-only and cannot be observed half-updated.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of a diagram element.
///
/// `Id` is `Copy`, so relations and steps can hold the identifiers of their
/// endpoints without borrowing the elements themselves.
///
/// # Examples
///
/// ```
/// use plantc4_core::identifier::Id;
///
/// let api = Id::new("api");
/// assert_eq!(api, "api");
/// assert_eq!(api.to_string(), "api");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its textual form.
    ///
    /// # Arguments
    ///
    /// * `name` - The caller supplied identifier, e.g. `"webApp"`.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns an owned copy of the identifier text.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let text = interner.resolve(self.0).unwrap_or_default();
        f.write_str(text)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for Id {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
