//! Document model
//!
//! A [`Document`] is the read-only result of one parse: the header description plus an
//! ordered map of [`Section`]s. Each section maps attribute names to resolved [`Value`]s in
//! first-occurrence order.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Reserved key holding the header description. No section may use this name.
pub const DESCRIPTION_KEY: &str = "__description__";

/// The resolved shape of an attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
    Mapping(IndexMap<String, String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in assertion messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "Scalar",
            Value::List(_) => "List",
            Value::Mapping(_) => "Mapping",
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<IndexMap<String, String>> for Value {
    fn from(value: IndexMap<String, String>) -> Self {
        Value::Mapping(value)
    }
}

/// Cell text for table output: lists as `['a', 'b']`, mappings as `{'a': '1'}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}'", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}': '{}'", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Named group of attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    attributes: IndexMap<String, Value>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names in first-occurrence order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Store a value. A repeated name keeps its original position and takes the new value.
    pub(crate) fn insert(&mut self, name: String, value: Value) -> Option<Value> {
        self.attributes.insert(name, value)
    }
}

/// The parse result: header description plus sections in creation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(rename = "__description__")]
    description: String,
    #[serde(flatten)]
    sections: IndexMap<String, Section>,
}

impl Document {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            sections: IndexMap::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn attribute(&self, section: &str, name: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(name))
    }

    /// Section names in creation order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// `(name, section)` pairs in creation order
    pub fn section_entries(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattened `(section, attribute, value)` triples, section-then-attribute order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.sections
            .iter()
            .flat_map(|(sec, s)| s.iter().map(move |(name, v)| (sec.as_str(), name, v)))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Open a section, creating it empty on first reference.
    pub(crate) fn open_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Sections alone, without the description entry
    pub(crate) fn section_map(&self) -> &IndexMap<String, Section> {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new("demo");
        let server = doc.open_section("server");
        server.insert("host".to_string(), "localhost".into());
        server.insert(
            "ports".to_string(),
            vec!["80".to_string(), "443".to_string()].into(),
        );
        doc.open_section("empty");
        doc
    }

    #[test]
    fn test_open_section_is_idempotent() {
        let mut doc = sample();
        doc.open_section("server");
        assert_eq!(doc.section("server").map(Section::len), Some(2));
        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["server", "empty"]);
    }

    #[test]
    fn test_section_entries() {
        let doc = sample();
        let sizes: Vec<_> = doc
            .section_entries()
            .map(|(name, section)| (name, section.len()))
            .collect();
        assert_eq!(sizes, [("server", 2), ("empty", 0)]);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut section = Section::new();
        section.insert("a".to_string(), "1".into());
        section.insert("b".to_string(), "2".into());
        let previous = section.insert("a".to_string(), "3".into());

        assert_eq!(previous, Some(Value::from("1")));
        assert_eq!(section.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(section.get("a"), Some(&Value::from("3")));
    }

    #[test]
    fn test_flattened_iteration_order() {
        let doc = sample();
        let triples: Vec<_> = doc.iter().map(|(s, a, _)| (s, a)).collect();
        assert_eq!(triples, [("server", "host"), ("server", "ports")]);
    }

    #[test]
    fn test_value_display() {
        let list = Value::from(vec!["80".to_string(), "443".to_string()]);
        let mut map = IndexMap::new();
        map.insert("a".to_string(), "1".to_string());
        map.insert("b".to_string(), "2".to_string());

        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(list.to_string(), "['80', '443']");
        assert_eq!(Value::from(map).to_string(), "{'a': '1', 'b': '2'}");
        assert_eq!(Value::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_serialize_untagged() {
        let doc = sample();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "__description__": "demo",
                "server": {"host": "localhost", "ports": ["80", "443"]},
                "empty": {}
            })
        );
    }
}
