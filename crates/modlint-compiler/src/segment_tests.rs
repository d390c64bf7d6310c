use crate::error::SegmentError;
use crate::segment::{
    ChainMode, DefiningPiece, DefiningSegment, UsingPiece, UsingSegment, parse_defining_segment,
    parse_using_segment,
};
use crate::variable::VariableName;

fn var(name: &str) -> VariableName {
    VariableName::parse(name).unwrap()
}

#[test]
fn wildcards_parse_in_both_roles() {
    assert_eq!(
        parse_defining_segment("*").unwrap(),
        DefiningSegment::SingleWildcard
    );
    assert_eq!(
        parse_defining_segment("**").unwrap(),
        DefiningSegment::Chain(ChainMode::Greedy)
    );
    assert_eq!(
        parse_defining_segment("**?").unwrap(),
        DefiningSegment::Chain(ChainMode::Lazy)
    );
    assert_eq!(
        parse_using_segment("*").unwrap(),
        UsingSegment::SingleWildcard
    );
    assert_eq!(
        parse_using_segment("**?").unwrap(),
        UsingSegment::Chain(ChainMode::Lazy)
    );
}

#[test]
fn whole_bracket_segment_is_capture_or_reference() {
    assert_eq!(
        parse_defining_segment("[name]").unwrap(),
        DefiningSegment::NamedSingle(var("name"))
    );
    assert_eq!(
        parse_using_segment("[name]").unwrap(),
        UsingSegment::Literal(vec![UsingPiece::Reference(var("name"))])
    );
}

#[test]
fn named_chain_captures_are_defining_only() {
    assert_eq!(
        parse_defining_segment("[**parent]").unwrap(),
        DefiningSegment::NamedChain {
            name: var("parent"),
            mode: ChainMode::Greedy,
        }
    );
    assert_eq!(
        parse_defining_segment("[**?parent]").unwrap(),
        DefiningSegment::NamedChain {
            name: var("parent"),
            mode: ChainMode::Lazy,
        }
    );
    assert_eq!(
        parse_using_segment("[**parent]"),
        Err(SegmentError::CaptureNotAllowed)
    );
    assert_eq!(
        parse_using_segment("[**?parent]"),
        Err(SegmentError::CaptureNotAllowed)
    );
}

#[test]
fn literal_segment_with_embedded_pieces() {
    assert_eq!(
        parse_defining_segment("port_[name]").unwrap(),
        DefiningSegment::Literal(vec![
            DefiningPiece::Text("port_".to_string()),
            DefiningPiece::Capture(var("name")),
        ])
    );
    assert_eq!(
        parse_defining_segment("[foo]_some_[bar]").unwrap(),
        DefiningSegment::Literal(vec![
            DefiningPiece::Capture(var("foo")),
            DefiningPiece::Text("_some_".to_string()),
            DefiningPiece::Capture(var("bar")),
        ])
    );
    assert_eq!(
        parse_using_segment("[name]_port").unwrap(),
        UsingSegment::Literal(vec![
            UsingPiece::Reference(var("name")),
            UsingPiece::Text("_port".to_string()),
        ])
    );
}

#[test]
fn plain_literal_segment() {
    assert_eq!(
        parse_defining_segment("foo-bar_2").unwrap(),
        DefiningSegment::Literal(vec![DefiningPiece::Text("foo-bar_2".to_string())])
    );
}

#[test]
fn empty_segment_is_a_valid_empty_literal() {
    // The text charset is zero-or-more; an empty component can never match
    // a real module path but is not a syntax error.
    assert_eq!(
        parse_defining_segment("").unwrap(),
        DefiningSegment::Literal(vec![])
    );
}

#[test]
fn invalid_text_rejected() {
    assert_eq!(
        parse_defining_segment("foo bar"),
        Err(SegmentError::InvalidText)
    );
    assert_eq!(parse_using_segment("foo!"), Err(SegmentError::InvalidText));
    // A stray closing bracket is plain invalid text.
    assert_eq!(parse_defining_segment("fo]o"), Err(SegmentError::InvalidText));
}

#[test]
fn unterminated_bracket_rejected() {
    assert_eq!(
        parse_defining_segment("port_[name"),
        Err(SegmentError::UnterminatedBracket)
    );
    assert_eq!(
        parse_defining_segment("[**name"),
        Err(SegmentError::UnterminatedBracket)
    );
}

#[test]
fn invalid_variable_names_rejected_in_brackets() {
    assert_eq!(
        parse_defining_segment("[my.var]"),
        Err(SegmentError::InvalidVariableName("my.var".to_string()))
    );
    // An embedded chain marker is not a valid name either.
    assert_eq!(
        parse_defining_segment("a[**x]"),
        Err(SegmentError::InvalidVariableName("**x".to_string()))
    );
    assert_eq!(
        parse_using_segment("[my.var]"),
        Err(SegmentError::InvalidVariableName("my.var".to_string()))
    );
}
