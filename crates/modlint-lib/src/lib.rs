//! Required-import conformance checking for module dependency graphs.
//!
//! A [`Contract`] pairs a root package with an ordered [`RuleSet`] of
//! import rules. Each rule is two module-path patterns joined by a
//! directional arrow; the defining side binds named variables and the
//! using side references them, so a single line can express constraints
//! like "a module may import siblings under its own package":
//!
//! ```
//! use modlint_lib::{Contract, InMemoryImportGraph};
//!
//! let contract = Contract::parse("root", ["[**parent].* -> [parent].**"]).unwrap();
//!
//! let mut graph = InMemoryImportGraph::new();
//! graph.add_import("root.foo.a", "root.foo.b");
//! graph.add_import("root.foo.a", "root.bar.c");
//!
//! let result = contract.check(&graph).unwrap();
//! assert!(!result.kept);
//! assert_eq!(result.violations[0].to_string(), "root.foo.a -> root.bar.c");
//! ```
//!
//! Pattern compilation lives in `modlint-compiler`, graph access and result
//! types in `modlint-core`; both are re-exported here.

mod contract;

#[cfg(test)]
mod contract_tests;

pub use contract::{CheckError, Contract, RuleSet};

pub use modlint_compiler::{
    Bindings, ChainMode, DefiningPattern, Direction, ExpressionError, ImportRule, ResolveError,
    ResolvedPattern, UsingTemplate, VariableName,
};
pub use modlint_core::{CheckResult, ImportGraph, InMemoryImportGraph, Violation};
