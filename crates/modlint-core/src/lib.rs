//! Core data structures for modlint.
//!
//! Two halves:
//! - **Graph access**: the [`ImportGraph`] trait the checker queries, plus
//!   [`InMemoryImportGraph`] for tests and programmatic construction
//! - **Results**: [`CheckResult`] and [`Violation`], the structured outcome
//!   of a conformance check
//!
//! Nothing here knows about rule syntax; pattern compilation lives in
//! `modlint-compiler` and the checker itself in `modlint-lib`.

mod graph;
mod result;


pub use graph::{ImportGraph, InMemoryImportGraph};
pub use result::{CheckResult, Violation};
