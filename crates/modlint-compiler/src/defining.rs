//! Defining module expressions: the variable-binding side of a rule.

use indexmap::IndexSet;
use regex_automata::meta::Regex;

use crate::error::ExpressionError;
use crate::matcher::compile_anchored;
use crate::segment::{self, DefiningSegment};
use crate::variable::{Bindings, VariableName};

/// A compiled defining module expression.
///
/// Immediately matchable; a successful fullmatch yields the bindings for
/// every variable the expression declares. Equality is structural over the
/// segment representation.
#[derive(Debug, Clone)]
pub struct DefiningPattern {
    source: String,
    segments: Vec<DefiningSegment>,
    variables: IndexSet<VariableName>,
    regex_body: String,
    regex: Regex,
}

impl DefiningPattern {
    /// Compile one defining module expression.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let source = text.trim().to_string();

        let mut segments = Vec::new();
        for raw in source.split('.') {
            let parsed = segment::parse_defining_segment(raw).map_err(|e| {
                ExpressionError::Segment {
                    expression: source.clone(),
                    segment: raw.to_string(),
                    source: e,
                }
            })?;
            segments.push(parsed);
        }

        let mut variables = IndexSet::new();
        for segment in &segments {
            for name in segment.variables() {
                if !variables.insert(name.clone()) {
                    return Err(ExpressionError::DuplicateVariable {
                        expression: source,
                        name: name.clone(),
                    });
                }
            }
        }

        let mut regex_body = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                regex_body.push_str(r"\.");
            }
            segment.append_regex(&mut regex_body);
        }

        let regex = compile_anchored(&regex_body).map_err(|message| {
            ExpressionError::PatternBuild {
                pattern: regex_body.clone(),
                message,
            }
        })?;

        Ok(Self {
            source,
            segments,
            variables,
            regex_body,
            regex,
        })
    }

    /// The variable names this pattern can bind, in declaration order.
    pub fn variables(&self) -> &IndexSet<VariableName> {
        &self.variables
    }

    /// The unanchored regex body, for diagnostics.
    pub fn as_regex_str(&self) -> &str {
        &self.regex_body
    }

    /// Anchored match without binding extraction.
    pub fn is_match(&self, module: &str) -> bool {
        self.regex.is_match(module)
    }

    /// Fullmatch `module` and extract the captured bindings.
    ///
    /// Returns `None` when the pattern does not match; on a match, every
    /// declared variable is bound (the grammar has no optional captures).
    pub fn capture(&self, module: &str) -> Option<Bindings> {
        let mut caps = self.regex.create_captures();
        self.regex.captures(module, &mut caps);
        if !caps.is_match() {
            return None;
        }

        let mut bindings = Bindings::new();
        for name in &self.variables {
            if let Some(span) = caps.get_group_by_name(name.as_str()) {
                bindings.insert(name.clone(), &module[span.range()]);
            }
        }
        Some(bindings)
    }
}

impl PartialEq for DefiningPattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for DefiningPattern {}

impl std::fmt::Display for DefiningPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
