//! Error types for expression compilation and template resolution.
//!
//! Two distinct lifecycles:
//! - [`ExpressionError`] happens while compiling rule text, before any edge
//!   is looked at; callers should fail fast on it
//! - [`ResolveError`] happens while resolving a using template against the
//!   bindings of one concrete match

use crate::variable::VariableName;

/// Why a single dot-separated segment failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// Text outside `[...]` markers contains a character outside `[A-Za-z0-9_-]`.
    #[error("text outside brackets must match [A-Za-z0-9_-]*")]
    InvalidText,

    /// A variable name violates the `[A-Za-z0-9_-]+` charset.
    #[error("invalid variable name '{0}': expected [A-Za-z0-9_-]+")]
    InvalidVariableName(String),

    /// A `[` without a matching `]`.
    #[error("unterminated '['")]
    UnterminatedBracket,

    /// `[**name]` / `[**?name]` in a using expression; captures only occur
    /// in defining position.
    #[error("named chain captures are not allowed in a using expression")]
    CaptureNotAllowed,
}

/// Error while compiling a module expression or a whole rule line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("malformed segment '{segment}' in module expression '{expression}': {source}")]
    Segment {
        expression: String,
        segment: String,
        #[source]
        source: SegmentError,
    },

    /// The same variable is captured twice in one defining expression.
    #[error("variable '{name}' is captured more than once in '{expression}'")]
    DuplicateVariable { expression: String, name: VariableName },

    #[error("import expression '{expression}' must contain a direction arrow ('->' or '<-')")]
    MissingArrow { expression: String },

    #[error("import expression '{expression}' contains {count} direction arrows, expected exactly one")]
    MultipleArrows { expression: String, count: usize },

    /// Using side references a variable the defining side never binds.
    /// Checked eagerly at rule parse time so a misconfigured rule fails
    /// before any edge evaluation.
    #[error("using expression references variable '{name}', which the defining expression does not bind")]
    UnboundReference { name: VariableName },

    /// The regex engine rejected the compiled pattern.
    #[error("cannot build matcher for '{pattern}': {message}")]
    PatternBuild { pattern: String, message: String },
}

/// Error while resolving a using template with concrete bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The template references a variable absent from the binding map.
    #[error("no binding for variable '{0}'")]
    MissingBinding(VariableName),

    /// The regex engine rejected the resolved pattern. Substituted values
    /// are escaped, so this is not reachable through normal rule evaluation.
    #[error("cannot build matcher for resolved pattern '{pattern}': {message}")]
    PatternBuild { pattern: String, message: String },
}
