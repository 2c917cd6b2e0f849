/// Regex patterns for line classification
///
/// All patterns are compiled once at startup using `LazyLock`.
///
/// Patterns are matched against lines with leading and trailing
/// whitespace already stripped, so they anchor at both ends.
use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are compile-time constants that are verified by tests.
/// The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// ===== BLOCK HEADERS =====

/// Namespace-style block header with the opening brace on the same line:
/// `namespace foo {`, `namespace foo::bar {`, or the anonymous `namespace {`
pub static NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(r"^namespace(\s+[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*)?\s*\{$")
});

/// Else continuation joining two adjacent brace blocks: `} else {`
/// (with arbitrary whitespace between the three tokens)
pub static ELSE_CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^\}\s*else\s*\{$"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_re() {
        assert!(NAMESPACE_RE.is_match("namespace foo {"));
        assert!(NAMESPACE_RE.is_match("namespace foo::bar {"));
        assert!(NAMESPACE_RE.is_match("namespace {"));
        assert!(NAMESPACE_RE.is_match("namespace foo{"));
        assert!(!NAMESPACE_RE.is_match("namespace foo"));
        assert!(!NAMESPACE_RE.is_match("using namespace foo;"));
        // No brace-on-next-line form: the header must carry the brace
        assert!(!NAMESPACE_RE.is_match("namespace foo bar {"));
    }

    #[test]
    fn test_else_continuation_re() {
        assert!(ELSE_CONTINUATION_RE.is_match("} else {"));
        assert!(ELSE_CONTINUATION_RE.is_match("}else{"));
        assert!(ELSE_CONTINUATION_RE.is_match("}  else  {"));
        assert!(!ELSE_CONTINUATION_RE.is_match("} else if (x) {"));
        assert!(!ELSE_CONTINUATION_RE.is_match("else {"));
        assert!(!ELSE_CONTINUATION_RE.is_match("} else"));
    }
}
