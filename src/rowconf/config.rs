//! Config facade
//!
//! Thin owner of a parsed [`Document`] for application code: construction from a file or a
//! string, enumeration, and the table / JSON renderings.

use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

use crate::rowconf::building::Parser;
use crate::rowconf::document::{Document, Value};
use crate::rowconf::env::ParseOptions;
use crate::rowconf::error::{ConfigError, Result};
use crate::rowconf::formats::{json, table};
use crate::rowconf::formats::table::TableOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    document: Document,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, ParseOptions::default())
    }

    pub fn from_file_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let document = Parser::with_options(options).parse_file(path)?;
        Ok(Self { document })
    }

    pub fn parse_str(source: &str) -> Result<Self> {
        Self::parse_str_with(source, ParseOptions::default())
    }

    pub fn parse_str_with(source: &str, options: ParseOptions) -> Result<Self> {
        let document = Parser::with_options(options).parse(source)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Section names in creation order; the description is not a section.
    pub fn sections(&self) -> Vec<&str> {
        self.document.section_names().collect()
    }

    /// Every `(section, attribute, value)` triple, section-then-attribute order
    pub fn attributes(&self) -> Vec<(&str, &str, &Value)> {
        self.document.iter().collect()
    }

    pub fn as_table(&self, options: &TableOptions) -> String {
        table::render_table(&self.document, options)
    }
}

impl Deref for Config {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for Config {
    fn from(document: Document) -> Self {
        Self { document }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        json::write_document(f, &self.document)
    }
}
