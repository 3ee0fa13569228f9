//! Output formats
//!
//! Presentation only: both formats read a [`Document`](crate::Document) and never feed back
//! into parsing.
//!
//! - [`table`]: column-aligned `(section, attribute, value)` rows, optionally striped with ANSI
//!   attributes
//! - [`json`]: the `<cfg: description>` banner followed by the sections as indented JSON

pub mod json;
pub mod table;
