//! The per-segment grammar of module expressions.
//!
//! A module expression is a dot-joined sequence of segments. Each segment
//! parses into a tagged token, never directly into regex text; the regex
//! fragment is derived from the token afterwards. Defining and using roles
//! share the wildcard forms but diverge on brackets: `[name]` captures in a
//! defining segment and references in a using segment, and the chain
//! captures `[**name]` / `[**?name]` exist only in defining position.

use crate::error::{ResolveError, SegmentError};
use crate::variable::{Bindings, VariableName};

/// One dot-free path component.
pub(crate) const ANY_PACKAGE: &str = r"[^\.]+";
/// One-or-more components, maximal span.
pub(crate) const ANY_CHAIN_GREEDY: &str = r"[^\.]+(?:\.[^\.]+)*";
/// One-or-more components, minimal span.
pub(crate) const ANY_CHAIN_LAZY: &str = r"[^\.]+(?:\.[^\.]+)*?";

/// Span selection for a chain wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainMode {
    Greedy,
    Lazy,
}

impl ChainMode {
    pub(crate) fn chain_regex(self) -> &'static str {
        match self {
            ChainMode::Greedy => ANY_CHAIN_GREEDY,
            ChainMode::Lazy => ANY_CHAIN_LAZY,
        }
    }
}

/// A segment of a defining module expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefiningSegment {
    /// `*`
    SingleWildcard,
    /// `**` / `**?`
    Chain(ChainMode),
    /// `[name]` as the whole segment; binds one component.
    NamedSingle(VariableName),
    /// `[**name]` / `[**?name]`; binds a multi-component span.
    NamedChain { name: VariableName, mode: ChainMode },
    /// Literal text, optionally interleaved with embedded captures,
    /// e.g. `port_[name]` or `[foo]_some_[bar]`.
    Literal(Vec<DefiningPiece>),
}

/// Piece of a literal defining segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefiningPiece {
    Text(String),
    /// Binds a maximal dot-free run.
    Capture(VariableName),
}

/// A segment of a using module expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsingSegment {
    /// `*`
    SingleWildcard,
    /// `**` / `**?`
    Chain(ChainMode),
    /// Literal text, optionally interleaved with variable references.
    Literal(Vec<UsingPiece>),
}

/// Piece of a literal using segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsingPiece {
    Text(String),
    /// Placeholder resolved only once concrete bindings are supplied.
    Reference(VariableName),
}

pub(crate) fn parse_defining_segment(segment: &str) -> Result<DefiningSegment, SegmentError> {
    match segment {
        "*" => return Ok(DefiningSegment::SingleWildcard),
        "**" => return Ok(DefiningSegment::Chain(ChainMode::Greedy)),
        "**?" => return Ok(DefiningSegment::Chain(ChainMode::Lazy)),
        _ => {}
    }

    if let Some(rest) = segment.strip_prefix("[**") {
        let (mode, rest) = match rest.strip_prefix('?') {
            Some(rest) => (ChainMode::Lazy, rest),
            None => (ChainMode::Greedy, rest),
        };
        let raw = rest
            .strip_suffix(']')
            .ok_or(SegmentError::UnterminatedBracket)?;
        let name = VariableName::parse(raw)?;
        return Ok(DefiningSegment::NamedChain { name, mode });
    }

    let pieces = scan_pieces(segment)?;
    if let [RawPiece::Bracket(raw)] = pieces.as_slice() {
        return Ok(DefiningSegment::NamedSingle(VariableName::parse(raw)?));
    }

    let pieces = pieces
        .into_iter()
        .map(|piece| match piece {
            RawPiece::Text(text) => Ok(DefiningPiece::Text(text)),
            RawPiece::Bracket(raw) => Ok(DefiningPiece::Capture(VariableName::parse(&raw)?)),
        })
        .collect::<Result<_, SegmentError>>()?;
    Ok(DefiningSegment::Literal(pieces))
}

pub(crate) fn parse_using_segment(segment: &str) -> Result<UsingSegment, SegmentError> {
    match segment {
        "*" => return Ok(UsingSegment::SingleWildcard),
        "**" => return Ok(UsingSegment::Chain(ChainMode::Greedy)),
        "**?" => return Ok(UsingSegment::Chain(ChainMode::Lazy)),
        _ => {}
    }

    if segment.starts_with("[**") {
        return Err(SegmentError::CaptureNotAllowed);
    }

    let pieces = scan_pieces(segment)?
        .into_iter()
        .map(|piece| match piece {
            RawPiece::Text(text) => Ok(UsingPiece::Text(text)),
            RawPiece::Bracket(raw) => Ok(UsingPiece::Reference(VariableName::parse(&raw)?)),
        })
        .collect::<Result<_, SegmentError>>()?;
    Ok(UsingSegment::Literal(pieces))
}

/// Role-agnostic scan of a literal segment into text runs and `[...]` spans.
enum RawPiece {
    Text(String),
    Bracket(String),
}

fn scan_pieces(segment: &str) -> Result<Vec<RawPiece>, SegmentError> {
    let mut pieces = Vec::new();
    let mut text = String::new();
    let mut rest = segment;

    while let Some(c) = rest.chars().next() {
        match c {
            '[' => {
                let close = rest.find(']').ok_or(SegmentError::UnterminatedBracket)?;
                if !text.is_empty() {
                    pieces.push(RawPiece::Text(std::mem::take(&mut text)));
                }
                pieces.push(RawPiece::Bracket(rest[1..close].to_string()));
                rest = &rest[close + 1..];
            }
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
            _ => return Err(SegmentError::InvalidText),
        }
    }
    if !text.is_empty() {
        pieces.push(RawPiece::Text(text));
    }
    Ok(pieces)
}

impl DefiningSegment {
    /// Append this segment's regex fragment, with named capture groups for
    /// every variable it binds.
    pub(crate) fn append_regex(&self, out: &mut String) {
        match self {
            DefiningSegment::SingleWildcard => out.push_str(ANY_PACKAGE),
            DefiningSegment::Chain(mode) => out.push_str(mode.chain_regex()),
            DefiningSegment::NamedSingle(name) => named_group(out, name, ANY_PACKAGE),
            DefiningSegment::NamedChain { name, mode } => {
                named_group(out, name, mode.chain_regex());
            }
            DefiningSegment::Literal(pieces) => {
                for piece in pieces {
                    match piece {
                        DefiningPiece::Text(text) => regex_syntax::escape_into(text, out),
                        DefiningPiece::Capture(name) => named_group(out, name, ANY_PACKAGE),
                    }
                }
            }
        }
    }

    /// Variables this segment binds, in source order.
    pub(crate) fn variables(&self) -> Vec<&VariableName> {
        match self {
            DefiningSegment::SingleWildcard | DefiningSegment::Chain(_) => Vec::new(),
            DefiningSegment::NamedSingle(name) => vec![name],
            DefiningSegment::NamedChain { name, .. } => vec![name],
            DefiningSegment::Literal(pieces) => pieces
                .iter()
                .filter_map(|piece| match piece {
                    DefiningPiece::Capture(name) => Some(name),
                    DefiningPiece::Text(_) => None,
                })
                .collect(),
        }
    }
}

impl UsingSegment {
    /// Append this segment's regex fragment with every reference replaced by
    /// the escaped bound value.
    pub(crate) fn append_resolved(
        &self,
        bindings: &Bindings,
        out: &mut String,
    ) -> Result<(), ResolveError> {
        match self {
            UsingSegment::SingleWildcard => out.push_str(ANY_PACKAGE),
            UsingSegment::Chain(mode) => out.push_str(mode.chain_regex()),
            UsingSegment::Literal(pieces) => {
                for piece in pieces {
                    match piece {
                        UsingPiece::Text(text) => regex_syntax::escape_into(text, out),
                        UsingPiece::Reference(name) => {
                            let value = bindings
                                .get(name)
                                .ok_or_else(|| ResolveError::MissingBinding(name.clone()))?;
                            regex_syntax::escape_into(value, out);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Variables this segment references, in source order.
    pub(crate) fn references(&self) -> Vec<&VariableName> {
        match self {
            UsingSegment::SingleWildcard | UsingSegment::Chain(_) => Vec::new(),
            UsingSegment::Literal(pieces) => pieces
                .iter()
                .filter_map(|piece| match piece {
                    UsingPiece::Reference(name) => Some(name),
                    UsingPiece::Text(_) => None,
                })
                .collect(),
        }
    }
}

fn named_group(out: &mut String, name: &VariableName, body: &str) {
    out.push_str("(?P<");
    out.push_str(name.as_str());
    out.push('>');
    out.push_str(body);
    out.push(')');
}
