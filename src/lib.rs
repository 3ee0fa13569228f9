//! # rowconf
//!
//! A parser for the rowconf format: a small, human-edited configuration text made of a
//! header line, bracketed sections and `key=value` rows.
//!
//! ```text
//! #? config: demo
//! [server]
//! host=$HOST
//! ports=80,443
//! opts=a:1,b:2
//! ```
//!
//! Values are resolved while parsing: trailing comments are stripped, `$NAME` placeholders
//! are taken from the environment, a leading `%` pulls in the contents of a file, and
//! comma-separated values become lists or mappings.
//!
//! The entry points are [`Config`] for application code and [`parse_str`] / [`Parser`] when
//! only the [`Document`] is needed.

pub mod rowconf;

pub use rowconf::building::{parse_str, Parser};
pub use rowconf::config::Config;
pub use rowconf::document::{Document, Section, Value, DESCRIPTION_KEY};
pub use rowconf::env::{Environment, ParseOptions};
pub use rowconf::error::{ConfigError, Result};
pub use rowconf::formats::table::TableOptions;
