//! Brace style options.
//!
//! [`BraceStyle`] is the immutable set of options that drives the
//! reindentation pass. It is constructed once per run (from the outer
//! [`crate::config::Config`]) and shared read-only by every file job.

/// Style options for brace placement and indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceStyle {
    /// The string written once per nesting level (e.g. `"  "` or `"\t"`)
    pub indent_unit: String,

    /// Print closing braces at the same indentation as the statements
    /// inside the block they close, rather than aligned with the
    /// statement that opened the block
    pub flush_braces: bool,

    /// Move every opening brace onto its own line
    pub open_brace_on_separate_line: bool,
}

impl Default for BraceStyle {
    fn default() -> Self {
        BraceStyle {
            indent_unit: "  ".to_string(),
            flush_braces: false,
            open_brace_on_separate_line: true,
        }
    }
}

impl BraceStyle {
    /// Create a style with the given indent unit and default brace placement
    #[must_use]
    pub fn with_indent_unit(indent_unit: &str) -> Self {
        BraceStyle {
            indent_unit: indent_unit.to_string(),
            ..Default::default()
        }
    }
}
