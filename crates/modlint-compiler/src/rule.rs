//! Import rules: a defining pattern and a using template joined by a
//! directional arrow.

use crate::defining::DefiningPattern;
use crate::error::{ExpressionError, ResolveError};
use crate::using::UsingTemplate;

/// Which edge endpoint plays the defining role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `A -> B`: the importer matches `A` and defines variables; the
    /// imported module must match resolved `B`.
    Importing,
    /// `A <- B`: the imported module matches `A` and defines variables; the
    /// importer must match resolved `B`.
    Imported,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Importing => "->",
            Direction::Imported => "<-",
        }
    }
}

/// One parsed import rule.
///
/// In both arrow forms the left-hand side compiles as defining and the
/// right-hand side as using; the arrow only selects which edge endpoint the
/// defining side is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRule {
    direction: Direction,
    defining: DefiningPattern,
    using: UsingTemplate,
}

impl ImportRule {
    /// Parse one rule line, e.g. `[**parent].* -> [parent].**`.
    ///
    /// The line must contain exactly one arrow, counting both `->` and
    /// `<-`. References on the using side are validated against the
    /// defining side's variable set here, so an unsatisfiable rule fails at
    /// parse time instead of on whichever edge first triggers it.
    pub fn parse(line: &str) -> Result<Self, ExpressionError> {
        let arrows = line.matches("->").count() + line.matches("<-").count();
        if arrows > 1 {
            return Err(ExpressionError::MultipleArrows {
                expression: line.trim().to_string(),
                count: arrows,
            });
        }

        let (direction, (lhs, rhs)) = match line.split_once("->") {
            Some(sides) => (Direction::Importing, sides),
            None => match line.split_once("<-") {
                Some(sides) => (Direction::Imported, sides),
                None => {
                    return Err(ExpressionError::MissingArrow {
                        expression: line.trim().to_string(),
                    });
                }
            },
        };

        let defining = DefiningPattern::parse(lhs)?;
        let using = UsingTemplate::parse(rhs)?;

        for name in using.references() {
            if !defining.variables().contains(name) {
                return Err(ExpressionError::UnboundReference { name: name.clone() });
            }
        }

        Ok(Self {
            direction,
            defining,
            using,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn defining(&self) -> &DefiningPattern {
        &self.defining
    }

    pub fn using(&self) -> &UsingTemplate {
        &self.using
    }

    /// Evaluate the binding protocol for one edge.
    ///
    /// Matches the defining pattern against the endpoint the direction
    /// designates, resolves the using template with the captured bindings,
    /// and fullmatches the other endpoint. `Ok(false)` covers both a
    /// defining side that does not match and a resolved using side the
    /// other endpoint fails.
    pub fn permits(&self, importer: &str, imported: &str) -> Result<bool, ResolveError> {
        let (definer, user) = match self.direction {
            Direction::Importing => (importer, imported),
            Direction::Imported => (imported, importer),
        };

        let Some(bindings) = self.defining.capture(definer) else {
            return Ok(false);
        };
        Ok(self.using.resolve(&bindings)?.is_match(user))
    }
}

impl std::fmt::Display for ImportRule {
    /// Diagnostic rendering. The `<-` form prints using side first,
    /// mirroring how the reversed arrow reads.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Importing => write!(f, "{} -> {}", self.defining, self.using),
            Direction::Imported => write!(f, "{} <- {}", self.using, self.defining),
        }
    }
}
