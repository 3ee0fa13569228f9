//! Parser options and the placeholder variable source

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where `$NAME` placeholders are looked up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The process environment, read at parse time. Non-UTF-8 values are converted lossily.
    #[default]
    Process,
    /// A fixed set of variables; the process environment is never consulted
    Fixed(HashMap<String, String>),
}

impl Environment {
    pub fn lookup(&self, name: &str) -> Option<String> {
        match self {
            Environment::Process => {
                std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
            }
            Environment::Fixed(vars) => vars.get(name).cloned(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Environment::Fixed(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Knobs for a single parse
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub env: Environment,
    /// Base directory for relative `%path` includes. `None` means the working directory.
    pub include_root: Option<PathBuf>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Shorthand for a fixed environment built from key/value pairs
    pub fn with_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_env(vars.into_iter().collect())
    }

    pub fn with_include_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.include_root = Some(root.into());
        self
    }

    /// Resolve an include path against `include_root` when it is relative.
    pub fn include_path(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        match &self.include_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}
