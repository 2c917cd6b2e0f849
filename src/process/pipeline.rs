//! Single-pass formatting pipeline.
//!
//! Drives the [`LineFormatter`] over one file's lines in order. Each
//! input line is fully consumed before the next one is read; the only
//! state carried between lines is the formatter's indent bookkeeping.

use std::io::{BufRead, Write};

use crate::format::{BraceStyle, LineFormatter};
use crate::Result;

/// Format one file from `input` to `output`.
///
/// A fresh formatter (nesting level 0) is created per call, so the pass
/// never carries state across files. A separator newline is written
/// between any two emitted physical lines but not before the first or
/// after the last, so an empty input produces zero output bytes and the
/// output carries no trailing newline.
pub fn format_file<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    style: &BraceStyle,
) -> Result<()> {
    let mut formatter = LineFormatter::new(style);
    let mut line_start = "";

    for line in input.lines() {
        let line = line?;
        for formatted in formatter.format_line(&line) {
            output.write_all(line_start.as_bytes())?;
            output.write_all(formatted.as_bytes())?;
            line_start = "\n";
        }
    }

    Ok(())
}

/// Format a complete in-memory source string.
///
/// Convenience wrapper over [`format_file`] for callers that already
/// hold the file contents.
pub fn format_str(input: &str, style: &BraceStyle) -> Result<String> {
    let mut output = Vec::new();
    format_file(input.as_bytes(), &mut output, style)?;
    // The formatter only ever writes valid UTF-8
    Ok(String::from_utf8(output)?)
}
