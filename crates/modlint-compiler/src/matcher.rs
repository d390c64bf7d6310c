//! Anchored matcher construction on top of the regex-automata meta engine.
//!
//! Module expressions always fullmatch: the body is wrapped in `\A(?:…)\z`
//! so a partial match can never pass, and lazy chains are still forced to
//! extend to the end of the haystack.

use regex_automata::meta::Regex;

/// Compile a regex body into a full-string matcher.
pub(crate) fn compile_anchored(body: &str) -> Result<Regex, String> {
    Regex::new(&format!(r"\A(?:{body})\z")).map_err(|e| e.to_string())
}
