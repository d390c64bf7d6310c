//! The contract facade: a rule set scoped to a root package, checked
//! against a dependency graph.

use modlint_compiler::{ExpressionError, ImportRule, ResolveError};
use modlint_core::{CheckResult, ImportGraph, Violation};

/// An ordered set of import rules.
///
/// Order matters only for short-circuit cost: rules are independently
/// sufficient, so permuting them never changes a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<ImportRule>,
}

impl RuleSet {
    /// Parse one rule per line, failing fast on the first malformed one.
    pub fn parse<I, S>(lines: I) -> Result<Self, ExpressionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = lines
            .into_iter()
            .map(|line| ImportRule::parse(line.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ImportRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<ImportRule>> for RuleSet {
    fn from(rules: Vec<ImportRule>) -> Self {
        Self { rules }
    }
}

/// Error while evaluating a rule set against a graph.
///
/// Rule sets built through [`RuleSet::parse`] validate references eagerly,
/// so this is a propagation policy more than an expected path: if a
/// resolution error does occur, the whole check aborts rather than letting
/// a misconfigured rule silently mask violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("rule '{rule}' failed to resolve: {source}")]
    Resolve {
        rule: String,
        #[source]
        source: ResolveError,
    },
}

/// Requires every import edge inside the root package to conform to at
/// least one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    root_package: String,
    rules: RuleSet,
}

impl Contract {
    pub fn new(root_package: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            root_package: root_package.into(),
            rules,
        }
    }

    /// Convenience constructor from textual rule lines.
    pub fn parse<I, S>(root_package: impl Into<String>, lines: I) -> Result<Self, ExpressionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(root_package, RuleSet::parse(lines)?))
    }

    pub fn root_package(&self) -> &str {
        &self.root_package
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check every in-scope edge of `graph`.
    ///
    /// In-scope: the imported module lies under the root package, and the
    /// importer's path is textually prefixed by it. Modules and importers
    /// are visited in sorted order, so the violation list is deterministic
    /// regardless of how the collaborator iterates.
    pub fn check(&self, graph: &impl ImportGraph) -> Result<CheckResult, CheckError> {
        let mut modules = graph.modules_under(&self.root_package);
        modules.sort_unstable();

        let mut violations = Vec::new();
        for imported in &modules {
            let mut importers: Vec<String> = graph
                .direct_importers_of(imported)
                .into_iter()
                .filter(|importer| importer.starts_with(&self.root_package))
                .collect();
            importers.sort_unstable();

            for importer in importers {
                if !self.edge_permitted(&importer, imported)? {
                    violations.push(Violation::new(importer, imported.clone()));
                }
            }
        }
        Ok(CheckResult::new(violations))
    }

    /// First-rule-wins scan over the rule set for one edge.
    fn edge_permitted(&self, importer: &str, imported: &str) -> Result<bool, CheckError> {
        for rule in self.rules.rules() {
            let permitted =
                rule.permits(importer, imported)
                    .map_err(|source| CheckError::Resolve {
                        rule: rule.to_string(),
                        source,
                    })?;
            if permitted {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
