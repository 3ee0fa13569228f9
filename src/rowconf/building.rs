//! Document building
//!
//! Walks the normalised lines once, threading a [`BuildState`] through a fold. The state
//! carries the document under construction and the name of the section that named rows
//! currently target.
//!
//! Per line:
//! - a section marker opens the section (creating it empty on first sight) and makes it
//!   current; repeating a marker later resumes the same section
//! - blank, comment and unrecognised lines are skipped
//! - a named row is resolved and stored in the current section, replacing any earlier
//!   value under the same name
//!
//! A named row before the first marker has no target and aborts the parse.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::rowconf::document::{Document, Value, DESCRIPTION_KEY};
use crate::rowconf::env::ParseOptions;
use crate::rowconf::error::{ConfigError, Result};
use crate::rowconf::lexing::line_classification::match_header;
use crate::rowconf::lexing::{classify_line, normalize_lines, LineType};
use crate::rowconf::resolving::resolve_value;

/// Parse `source` with default options (process environment, working-directory includes).
pub fn parse_str(source: &str) -> Result<Document> {
    Parser::default().parse(source)
}

/// Reusable parser; each call is independent of the previous ones.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, source: &str) -> Result<Document> {
        let lines = normalize_lines(source);
        let description = lines
            .first()
            .and_then(|line| match_header(line))
            .ok_or(ConfigError::MalformedHeader)?;

        let state = lines
            .iter()
            .enumerate()
            .try_fold(BuildState::new(description), |state, (idx, line)| {
                self.step(state, idx + 1, line)
            })?;

        Ok(state.document)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&source)
    }

    fn step(&self, mut state: BuildState, line_no: usize, line: &str) -> Result<BuildState> {
        match classify_line(line) {
            LineType::SectionMarker(name) => state.enter_section(name, line_no)?,
            LineType::NamedRow { name, value } => {
                let value = resolve_value(value, line_no, &self.options)?;
                state.store(name, value, line_no)?;
            }
            LineType::Unrecognized => trace!("line {}: ignoring {:?}", line_no, line),
            LineType::Blank | LineType::Comment => {}
        }
        Ok(state)
    }
}

/// Accumulator threaded through the line fold
#[derive(Debug)]
struct BuildState {
    document: Document,
    current: Option<String>,
}

impl BuildState {
    fn new(description: &str) -> Self {
        Self {
            document: Document::new(description),
            current: None,
        }
    }

    fn enter_section(&mut self, name: &str, line_no: usize) -> Result<()> {
        if name == DESCRIPTION_KEY {
            return Err(ConfigError::DuplicateDescriptionKey { line: line_no });
        }
        if self.current.as_deref() == Some(name) {
            return Ok(());
        }

        if self.document.contains_section(name) {
            debug!("line {}: resuming section [{}]", line_no, name);
        } else {
            debug!("line {}: opening section [{}]", line_no, name);
        }
        self.document.open_section(name);
        self.current = Some(name.to_string());
        Ok(())
    }

    fn store(&mut self, name: &str, value: Value, line_no: usize) -> Result<()> {
        let malformed = |reason: String| ConfigError::MalformedConfig {
            line: line_no,
            reason,
        };

        let section_name = self
            .current
            .as_deref()
            .ok_or_else(|| malformed(format!("attribute `{}` appears before any section", name)))?;
        let section = self
            .document
            .section_mut(section_name)
            .ok_or_else(|| malformed(format!("section [{}] was never opened", section_name)))?;

        trace!("line {}: [{}] {} = {}", line_no, section_name, name, value);
        section.insert(name.to_string(), value);
        Ok(())
    }
}
