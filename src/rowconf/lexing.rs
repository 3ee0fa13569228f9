//! Lexing
//!
//! Turns raw rowconf text into the flat sequence of logical lines that the builder walks.
//! A `;` ends a statement exactly like a newline does, so `a=1;b=2` yields two lines.
//! Every line is trimmed; empty lines are kept so line numbers stay meaningful.

pub mod line_classification;

pub use line_classification::{classify_line, LineType};

/// Character treated as an alternative line break
pub const STATEMENT_SEPARATOR: char = ';';

/// Split `source` into trimmed logical lines.
pub fn normalize_lines(source: &str) -> Vec<&str> {
    source
        .split(|c| c == '\n' || c == STATEMENT_SEPARATOR)
        .map(str::trim)
        .collect()
}
