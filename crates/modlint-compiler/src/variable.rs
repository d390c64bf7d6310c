//! Variable names and binding maps.
//!
//! Names are normalized once at the boundary: runs of `_` and `-` collapse
//! into a single `_` and letters are lower-cased, so `My-Var`, `my_var` and
//! `my__var` all denote the same binding key. Every declaration and
//! reference site goes through [`VariableName::parse`], which is what makes
//! the equivalence hold across a whole rule.

use indexmap::IndexMap;

use crate::error::SegmentError;

/// A normalized variable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableName(String);

impl VariableName {
    /// Validate a raw name against `[A-Za-z0-9_-]+` and normalize it.
    pub fn parse(raw: &str) -> Result<Self, SegmentError> {
        if raw.is_empty() || !raw.chars().all(is_name_char) {
            return Err(SegmentError::InvalidVariableName(raw.to_string()));
        }
        Ok(Self(normalize(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for c in raw.chars() {
        if c == '_' || c == '-' {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            out.push('_');
            pending_separator = false;
        }
        out.push(c.to_ascii_lowercase());
    }
    if pending_separator {
        out.push('_');
    }
    out
}

/// Variable values captured by one defining-pattern match.
///
/// Created fresh per match attempt and discarded with the edge; it carries
/// no state across edges or rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(IndexMap<VariableName, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: VariableName, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: &VariableName) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableName, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl FromIterator<(VariableName, String)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (VariableName, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
