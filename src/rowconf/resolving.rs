//! Value resolution
//!
//! Turns the raw payload of a named row into a [`Value`]. The steps run in a fixed order:
//!
//! 1. Comment strip: everything from the first `#` is dropped, then the rest is trimmed.
//!    There is no escaping, so a `#` inside a list still truncates.
//! 2. Placeholder substitution: each `$NAME` is replaced from the environment in a single
//!    left-to-right pass. Substituted text is never rescanned.
//! 3. File dereference: a value starting with `%` is replaced by the trimmed contents of
//!    the file named by the remainder.
//! 4. Classification: no comma gives a scalar. Otherwise the first comma-separated part
//!    decides: with a `:` the value is a mapping, without one it is a list. Either way a
//!    part of the wrong shape is dropped.

use std::fs;

use indexmap::IndexMap;
use log::debug;

use crate::rowconf::document::Value;
use crate::rowconf::env::ParseOptions;
use crate::rowconf::error::{ConfigError, Result};
use crate::rowconf::lexing::line_classification::PLACEHOLDER_REGEX;

const COMMENT_MARKER: char = '#';
const INCLUDE_MARKER: char = '%';
const ITEM_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';

/// Resolve a raw payload. `line` is only used for error reporting.
pub fn resolve_value(raw: &str, line: usize, options: &ParseOptions) -> Result<Value> {
    let value = strip_comment(raw);
    let value = substitute_placeholders(value, line, options)?;
    let value = dereference_file(value, options)?;
    Ok(classify_value(&value))
}

pub fn strip_comment(raw: &str) -> &str {
    raw.split(COMMENT_MARKER).next().unwrap_or_default().trim()
}

pub fn substitute_placeholders(value: &str, line: usize, options: &ParseOptions) -> Result<String> {
    let mut result = String::with_capacity(value.len());
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(value) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let replacement =
            options
                .env
                .lookup(name.as_str())
                .ok_or_else(|| ConfigError::MissingEnvironmentVariable {
                    name: name.as_str().to_string(),
                    line,
                })?;

        result.push_str(&value[last..token.start()]);
        result.push_str(&replacement);
        last = token.end();
    }

    result.push_str(&value[last..]);
    Ok(result)
}

/// Replace `%path` by the trimmed file contents; other values pass through.
pub fn dereference_file(value: String, options: &ParseOptions) -> Result<String> {
    let Some(raw_path) = value.strip_prefix(INCLUDE_MARKER) else {
        return Ok(value);
    };

    let path = options.include_path(raw_path);
    debug!("including value from {}", path.display());
    let contents =
        fs::read_to_string(&path).map_err(|source| ConfigError::FileReadError { path, source })?;
    Ok(contents.trim().to_string())
}

pub fn classify_value(value: &str) -> Value {
    let parts: Vec<&str> = value.split(ITEM_SEPARATOR).collect();

    match parts.as_slice() {
        [single] => Value::Scalar(single.to_string()),
        [first, ..] if first.contains(PAIR_SEPARATOR) => {
            // Parts without a separator are dropped.
            let map: IndexMap<String, String> = parts
                .iter()
                .filter_map(|part| part.split_once(PAIR_SEPARATOR))
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .collect();
            Value::Mapping(map)
        }
        // Parts carrying a separator belong to no list and are dropped.
        _ => Value::List(
            parts
                .iter()
                .filter(|part| !part.contains(PAIR_SEPARATOR))
                .map(|part| part.trim().to_string())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options() -> ParseOptions {
        ParseOptions::new().with_vars([("FOO", "bar"), ("HOST", "localhost"), ("NEST", "$FOO")])
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment(" v # comment"), "v");
        assert_eq!(strip_comment("a,b#c,d"), "a,b");
        assert_eq!(strip_comment("#only"), "");
        assert_eq!(strip_comment("plain"), "plain");
    }

    #[test]
    fn test_substitute_placeholders() {
        let opts = options();
        assert_eq!(substitute_placeholders("$FOO", 1, &opts).unwrap(), "bar");
        assert_eq!(
            substitute_placeholders("http://$HOST:8080/$FOO", 1, &opts).unwrap(),
            "http://localhost:8080/bar"
        );
        assert_eq!(substitute_placeholders("no vars", 1, &opts).unwrap(), "no vars");
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        assert_eq!(substitute_placeholders("$NEST", 1, &options()).unwrap(), "$FOO");
    }

    #[test]
    fn test_longest_name_wins() {
        let opts = ParseOptions::new().with_vars([("FOO", "short"), ("FOOBAR", "long")]);
        assert_eq!(substitute_placeholders("$FOOBAR", 1, &opts).unwrap(), "long");
    }

    #[test]
    fn test_missing_variable() {
        let err = substitute_placeholders("$NOPE", 7, &options()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingEnvironmentVariable { ref name, line: 7 } if name == "NOPE"
        ));
    }

    #[test]
    fn test_dereference_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  hello  \n").unwrap();
        let value = format!("%{}", file.path().display());

        assert_eq!(dereference_file(value, &options()).unwrap(), "hello");
        assert_eq!(
            dereference_file("plain".to_string(), &options()).unwrap(),
            "plain"
        );
    }

    #[test]
    fn test_dereference_missing_file() {
        let err = dereference_file("%/definitely/not/here.txt".to_string(), &options());
        assert!(matches!(err, Err(ConfigError::FileReadError { .. })));
    }

    #[test]
    fn test_classify_scalar() {
        assert_eq!(classify_value("v"), Value::from("v"));
        assert_eq!(classify_value(""), Value::from(""));
        assert_eq!(classify_value("a:1"), Value::from("a:1"));
    }

    #[test]
    fn test_classify_list() {
        assert_eq!(
            classify_value("a, b ,c"),
            Value::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(
            classify_value("a,,"),
            Value::List(vec!["a".into(), "".into(), "".into()])
        );
    }

    #[test]
    fn test_list_drops_parts_with_colon() {
        assert_eq!(
            classify_value("a,b:1,c"),
            Value::List(vec!["a".into(), "c".into()])
        );
        assert_eq!(classify_value("a,b:1"), Value::List(vec!["a".into()]));
    }

    #[test]
    fn test_classify_mapping() {
        let value = classify_value("x:1, y : 2,dropped,url:http://h");
        let map = value.as_mapping().unwrap();
        assert_eq!(
            map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>(),
            [("x", "1"), ("y", "2"), ("url", "http://h")]
        );
    }

    #[test]
    fn test_resolve_value_pipeline() {
        assert_eq!(
            resolve_value(" $FOO,$HOST # trailing", 1, &options()).unwrap(),
            Value::List(vec!["bar".into(), "localhost".into()])
        );
    }
}
