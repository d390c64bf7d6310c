//! Using module expressions: templates resolved against captured bindings.
//!
//! A template is deliberately not matchable. [`UsingTemplate::resolve`] is
//! the only way to obtain a matcher from one, which keeps the two stages
//! (reference-carrying template vs concrete pattern) apart in the type
//! system.

use indexmap::IndexSet;
use regex_automata::meta::Regex;

use crate::error::{ExpressionError, ResolveError};
use crate::matcher::compile_anchored;
use crate::segment::{self, UsingSegment};
use crate::variable::{Bindings, VariableName};

/// A parsed using module expression, with unresolved variable references.
#[derive(Debug, Clone)]
pub struct UsingTemplate {
    source: String,
    segments: Vec<UsingSegment>,
    references: IndexSet<VariableName>,
}

impl UsingTemplate {
    /// Parse one using module expression.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let source = text.trim().to_string();

        let mut segments = Vec::new();
        for raw in source.split('.') {
            let parsed = segment::parse_using_segment(raw).map_err(|e| {
                ExpressionError::Segment {
                    expression: source.clone(),
                    segment: raw.to_string(),
                    source: e,
                }
            })?;
            segments.push(parsed);
        }

        let references = segments
            .iter()
            .flat_map(|segment| segment.references())
            .cloned()
            .collect();

        Ok(Self {
            source,
            segments,
            references,
        })
    }

    /// The variable names this template references, in source order.
    pub fn references(&self) -> &IndexSet<VariableName> {
        &self.references
    }

    /// Substitute every reference with its escaped bound value and compile
    /// the result into a matchable pattern.
    pub fn resolve(&self, bindings: &Bindings) -> Result<ResolvedPattern, ResolveError> {
        let mut body = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                body.push_str(r"\.");
            }
            segment.append_resolved(bindings, &mut body)?;
        }

        let regex = compile_anchored(&body).map_err(|message| ResolveError::PatternBuild {
            pattern: body.clone(),
            message,
        })?;
        Ok(ResolvedPattern { pattern: body, regex })
    }
}

impl PartialEq for UsingTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for UsingTemplate {}

impl std::fmt::Display for UsingTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// A using template after binding resolution: a matchable, anchored pattern.
#[derive(Debug, Clone)]
pub struct ResolvedPattern {
    pattern: String,
    regex: Regex,
}

impl ResolvedPattern {
    /// Anchored full-string match.
    pub fn is_match(&self, module: &str) -> bool {
        self.regex.is_match(module)
    }

    /// The unanchored regex body, for diagnostics.
    pub fn as_regex_str(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for ResolvedPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ResolvedPattern {}

impl std::fmt::Display for ResolvedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
