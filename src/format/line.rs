//! Per-line reformatting.
//!
//! [`LineFormatter`] turns one classified input line into one or more
//! output lines and keeps the [`IndentState`] bookkeeping in step. The
//! placement policy is encoded in where each rule recomputes the indent
//! prefix relative to the level transition:
//!
//! - recompute *after* an increment/decrement aligns the text with the
//!   new level (flush placement)
//! - keeping the prefix computed at entry aligns it with the old level
//!
//! Every rule below states which of the two it uses.

use crate::format::indent::IndentState;
use crate::format::style::BraceStyle;
use crate::parser::{classify_line, LineCategory};

/// Formats a stream of lines for one file.
///
/// Holds the indent state for the file; create a fresh formatter per
/// file so every file starts at level 0.
pub struct LineFormatter<'a> {
    style: &'a BraceStyle,
    state: IndentState,
}

impl<'a> LineFormatter<'a> {
    /// Create a formatter at nesting level 0
    #[must_use]
    pub fn new(style: &'a BraceStyle) -> Self {
        LineFormatter {
            style,
            state: IndentState::new(),
        }
    }

    /// Current nesting level (for tests and diagnostics)
    #[must_use]
    pub fn level(&self) -> usize {
        self.state.level()
    }

    /// Format one raw input line into its output lines.
    ///
    /// Returns the physical output lines for this input line, in order.
    /// The caller owns separator placement between physical lines.
    /// Never fails: unrecognized input is re-emitted as plain text at
    /// the current indent.
    pub fn format_line(&mut self, raw: &str) -> Vec<String> {
        let unit = &self.style.indent_unit;

        // Prefix for the level as it is on entry. This is the prefix
        // used for flush placement of closing braces, since it still
        // reflects the level before any decrement.
        self.state.recompute(unit);
        let entry_prefix = self.state.prefix().to_string();

        let stripped = raw.trim();

        match classify_line(stripped) {
            LineCategory::NamespaceOpen => {
                // Exempt from the indentation model: no level change,
                // entry prefix, line text unchanged.
                vec![format!("{entry_prefix}{stripped}")]
            }

            LineCategory::ElseContinuation => self.format_else_continuation(&entry_prefix),

            LineCategory::LoneOpenBrace => {
                self.state.increment();
                if self.style.open_brace_on_separate_line {
                    // Flush: recompute at the incremented level.
                    // Otherwise: keep the entry prefix.
                    let prefix = if self.style.flush_braces {
                        self.state.recompute(unit);
                        self.state.prefix()
                    } else {
                        entry_prefix.as_str()
                    };
                    vec![format!("{prefix}{{")]
                } else {
                    // Attached-brace style has no statement on this line
                    // to attach to, so the brace comes out bare with its
                    // separating space and no indent prefix. Known quirk
                    // of line-local processing, preserved as-is.
                    vec![" {".to_string()]
                }
            }

            LineCategory::TrailingOpenBrace { prefix_text } => {
                self.state.increment();
                if self.style.open_brace_on_separate_line {
                    let head = format!("{entry_prefix}{prefix_text}");
                    // Flush: brace at the incremented level.
                    // Otherwise: brace at the entry prefix.
                    let brace_prefix = if self.style.flush_braces {
                        self.state.recompute(unit);
                        self.state.prefix()
                    } else {
                        entry_prefix.as_str()
                    };
                    vec![head, format!("{brace_prefix}{{")]
                } else {
                    vec![format!("{entry_prefix}{prefix_text} {{")]
                }
            }

            LineCategory::LoneCloseBrace => {
                self.state.decrement();
                // Flush: keep the entry prefix (the pre-decrement level),
                // aligning the brace with the block contents it closes.
                // Otherwise: recompute at the decremented level, aligning
                // it with the statement that opened the block.
                let prefix = if self.style.flush_braces {
                    entry_prefix.as_str()
                } else {
                    self.state.recompute(unit);
                    self.state.prefix()
                };
                vec![format!("{prefix}}}")]
            }

            LineCategory::Plain => {
                // Blank lines stay blank rather than carrying an indent
                // prefix as trailing whitespace.
                if stripped.is_empty() {
                    vec![String::new()]
                } else {
                    vec![format!("{entry_prefix}{stripped}")]
                }
            }
        }
    }

    /// Expand `} else {`: close one block, reopen another.
    ///
    /// Net level change is zero except at level 0, where the clamped
    /// decrement absorbs the unmatched `}` and the `{` still opens a
    /// block.
    fn format_else_continuation(&mut self, entry_prefix: &str) -> Vec<String> {
        let unit = &self.style.indent_unit;

        if self.style.open_brace_on_separate_line {
            if self.style.flush_braces {
                // `}` flush with the closed block's contents (entry
                // prefix), `else` at the decremented level, `{` flush
                // with the reopened block's contents.
                let close = format!("{entry_prefix}}}");
                self.state.decrement();
                self.state.recompute(unit);
                let else_line = format!("{}else", self.state.prefix());
                self.state.increment();
                self.state.recompute(unit);
                let open = format!("{}{{", self.state.prefix());
                vec![close, else_line, open]
            } else {
                // All three tokens at the decremented prefix, one
                // recompute; the prefix stays stale after the increment
                // until the next line's entry recompute.
                self.state.decrement();
                self.state.recompute(unit);
                let prefix = self.state.prefix().to_string();
                self.state.increment();
                vec![
                    format!("{prefix}}}"),
                    format!("{prefix}else"),
                    format!("{prefix}{{"),
                ]
            }
        } else {
            // Single joined line at the decremented prefix.
            self.state.decrement();
            self.state.recompute(unit);
            let prefix = self.state.prefix().to_string();
            self.state.increment();
            vec![format!("{prefix}}} else {{")]
        }
    }
}
