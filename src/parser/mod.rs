//! Line classification.
//!
//! This module provides the shallow, pattern-based view of the source:
//! - [`classify`]: Assigns each physical line one of six categories
//! - [`patterns`]: Precompiled regex patterns for the header shapes
//!
//! There is no lexer and no AST. Lines are classified in isolation with
//! whole-line and end-of-line tests only, which keeps the pass simple
//! and predictable at the cost of not understanding strings, comments,
//! or statements spanning several lines.

pub mod classify;
pub mod patterns;

pub use classify::{classify_line, LineCategory};
