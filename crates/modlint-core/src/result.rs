//! Structured outcome of a conformance check.

use serde::Serialize;

/// One import edge that no rule permitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    pub importer: String,
    pub imported: String,
}

impl Violation {
    pub fn new(importer: impl Into<String>, imported: impl Into<String>) -> Self {
        Self {
            importer: importer.into(),
            imported: imported.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.importer, self.imported)
    }
}

/// Verdict plus detail. `kept` is true iff `violations` is empty; the list
/// is always present so callers can render detail without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub kept: bool,
    pub violations: Vec<Violation>,
}

impl CheckResult {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            kept: violations.is_empty(),
            violations,
        }
    }

    pub fn passed() -> Self {
        Self::new(Vec::new())
    }
}
