//! Per-line classification.
//!
//! Each physical line is assigned exactly one [`LineCategory`] using
//! ordered pattern tests; the first matching rule wins and anything
//! unrecognized falls through to [`LineCategory::Plain`], so
//! classification is total and never fails.

use crate::parser::patterns::{ELSE_CONTINUATION_RE, NAMESPACE_RE};

/// Category of one physical line, as seen with surrounding whitespace
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCategory {
    /// Namespace-style block header carrying its opening brace.
    /// Deliberately exempt from the indentation model: the block's
    /// contents are not re-indented relative to the header.
    NamespaceOpen,
    /// `} else {` joining two adjacent brace blocks
    ElseContinuation,
    /// The line is exactly an opening brace
    LoneOpenBrace,
    /// Content ending in an opening brace; the captured text is the
    /// content with the brace and trailing whitespace removed
    TrailingOpenBrace {
        /// Statement text preceding the brace
        prefix_text: String,
    },
    /// The line is exactly a closing brace
    LoneCloseBrace,
    /// Anything else, re-emitted at the current indent unchanged
    Plain,
}

/// Classify one line. `stripped` must already have leading and trailing
/// whitespace removed.
///
/// Rules are tested in fixed priority order:
/// 1. namespace header with brace
/// 2. `} else {`
/// 3. lone `{`
/// 4. trailing `{` after content
/// 5. lone `}`
/// 6. plain text (fallback)
#[must_use]
pub fn classify_line(stripped: &str) -> LineCategory {
    if NAMESPACE_RE.is_match(stripped) {
        return LineCategory::NamespaceOpen;
    }
    if ELSE_CONTINUATION_RE.is_match(stripped) {
        return LineCategory::ElseContinuation;
    }
    if stripped == "{" {
        return LineCategory::LoneOpenBrace;
    }
    if let Some(head) = stripped.strip_suffix('{') {
        let prefix_text = head.trim_end();
        if !prefix_text.is_empty() {
            return LineCategory::TrailingOpenBrace {
                prefix_text: prefix_text.to_string(),
            };
        }
    }
    if stripped == "}" {
        return LineCategory::LoneCloseBrace;
    }
    LineCategory::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_open() {
        assert_eq!(
            classify_line("namespace core {"),
            LineCategory::NamespaceOpen
        );
        assert_eq!(classify_line("namespace {"), LineCategory::NamespaceOpen);
    }

    #[test]
    fn test_namespace_wins_over_trailing_brace() {
        // Both rules 1 and 4 match; rule 1 has priority
        let category = classify_line("namespace util {");
        assert_eq!(category, LineCategory::NamespaceOpen);
    }

    #[test]
    fn test_else_continuation() {
        assert_eq!(classify_line("} else {"), LineCategory::ElseContinuation);
        assert_eq!(classify_line("}else{"), LineCategory::ElseContinuation);
    }

    #[test]
    fn test_else_continuation_wins_over_trailing_brace() {
        // "} else {" also ends in '{'; rule 2 has priority over rule 4
        assert_eq!(classify_line("} else {"), LineCategory::ElseContinuation);
    }

    #[test]
    fn test_lone_open_brace() {
        assert_eq!(classify_line("{"), LineCategory::LoneOpenBrace);
    }

    #[test]
    fn test_trailing_open_brace_captures_content() {
        assert_eq!(
            classify_line("if (x > 0) {"),
            LineCategory::TrailingOpenBrace {
                prefix_text: "if (x > 0)".to_string()
            }
        );
        // Trailing whitespace before the brace is not part of the capture
        assert_eq!(
            classify_line("while (true)   {"),
            LineCategory::TrailingOpenBrace {
                prefix_text: "while (true)".to_string()
            }
        );
    }

    #[test]
    fn test_lone_close_brace() {
        assert_eq!(classify_line("}"), LineCategory::LoneCloseBrace);
    }

    #[test]
    fn test_plain_fallback() {
        assert_eq!(classify_line("x = 1;"), LineCategory::Plain);
        assert_eq!(classify_line(""), LineCategory::Plain);
        // Shapes the shallow rules do not recognize stay plain
        assert_eq!(classify_line("};"), LineCategory::Plain);
        assert_eq!(classify_line("} while (x);"), LineCategory::Plain);
        assert_eq!(classify_line("int a[] = { 1, 2 };"), LineCategory::Plain);
    }
}
