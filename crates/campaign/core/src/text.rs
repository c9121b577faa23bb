//! Keyed, templated user-facing text.
//!
//! All strings surfaced to the user carry a localization key, a fallback
//! rendering, and named substitution variables. Rendering belongs to the host
//! localization layer; this crate only supplies keys and variables.

use std::collections::BTreeMap;

/// A localizable text value with named substitution variables.
///
/// Variables are referenced in the fallback text as `{NAME}` placeholders and
/// resolved by the host, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTemplate {
    key: String,
    fallback: String,
    variables: BTreeMap<String, String>,
}

impl TextTemplate {
    /// Creates a keyed template with a fallback rendering.
    pub fn new(key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fallback: fallback.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Creates an unkeyed template that only carries literal display text.
    ///
    /// Used for strings sourced from content data that is already in display
    /// form (e.g. role descriptions).
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    /// Sets a named substitution variable (builder form).
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Sets a named substitution variable.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Localization key; empty for literal text.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Untranslated fallback rendering with `{NAME}` placeholders intact.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Named substitution variables, ordered by name.
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Looks up a single substitution variable.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}
