//! Compiler for modlint import expressions.
//!
//! A rule line is two module-path expressions joined by a directional
//! arrow. This crate turns that text into value objects:
//! - `segment` - the per-segment grammar (wildcards, captures, references)
//! - `defining` - [`DefiningPattern`], the immediately matchable side that
//!   binds named variables
//! - `using` - [`UsingTemplate`], matchable only after [`UsingTemplate::resolve`]
//! - `rule` - [`ImportRule`], the directional pair plus the binding protocol
//! - `variable` - name normalization and per-match binding maps
//!
//! Compilation is pure: the same text always yields structurally equal
//! values, and nothing here touches a graph.

mod defining;
mod error;
mod matcher;
mod rule;
mod segment;
mod using;
mod variable;

#[cfg(test)]
mod segment_tests;

pub use defining::DefiningPattern;
pub use error::{ExpressionError, ResolveError, SegmentError};
pub use rule::{Direction, ImportRule};
pub use segment::{ChainMode, DefiningPiece, DefiningSegment, UsingPiece, UsingSegment};
pub use using::{ResolvedPattern, UsingTemplate};
pub use variable::{Bindings, VariableName};
