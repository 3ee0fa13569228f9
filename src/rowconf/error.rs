//! Errors produced while building a document
//!
//! Every error aborts the parse call that raised it. There is no partially built document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The first line is missing or is not a `#? config:` header.
    #[error("missing or malformed header, expected `#? config: <description>` as the first line")]
    MalformedHeader,

    /// A structural violation, such as a named row outside of any section.
    #[error("malformed config at line {line}: {reason}")]
    MalformedConfig { line: usize, reason: String },

    /// A `$NAME` placeholder has no environment entry.
    #[error("environment variable `{name}` referenced at line {line} is not set")]
    MissingEnvironmentVariable { name: String, line: usize },

    /// A `%path` include could not be read.
    #[error("failed to read included file {}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A section is named after the reserved description key.
    #[error("section at line {line} uses the reserved name `__description__`")]
    DuplicateDescriptionKey { line: usize },

    /// The configuration file itself could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
