//! Fluent assertions for parsed documents
//!
//! Tests that walk a [`Document`] by hand end up as long chains of `unwrap`s and `match`es
//! that say little about what went wrong. These helpers keep the expected shape readable and
//! report the section and attribute path on failure.
//!
//! ```rust,ignore
//! use rowconf::rowconf::testing::assert_document;
//!
//! assert_document(&doc)
//!     .description("demo")
//!     .sections(&["server"])
//!     .section("server", |s| {
//!         s.scalar("host", "localhost")
//!             .list("ports", &["80", "443"])
//!             .mapping("opts", &[("a", "1"), ("b", "2")]);
//!     });
//! ```

use crate::rowconf::document::{Document, Section, Value};

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn description(self, expected: &str) -> Self {
        assert_eq!(self.doc.description(), expected, "document description");
        self
    }

    /// Exact section names, in creation order
    pub fn sections(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.section_names().collect();
        assert_eq!(actual, expected, "document sections");
        self
    }

    pub fn section<F>(self, name: &str, check: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let section = self.doc.section(name).unwrap_or_else(|| {
            panic!(
                "section [{}] not found, document has {:?}",
                name,
                self.doc.section_names().collect::<Vec<_>>()
            )
        });
        check(SectionAssertion {
            section,
            context: format!("[{}]", name),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl SectionAssertion<'_> {
    fn value(&self, name: &str) -> &Value {
        self.section.get(name).unwrap_or_else(|| {
            panic!(
                "{}: attribute `{}` not found, section has {:?}",
                self.context,
                name,
                self.section.names().collect::<Vec<_>>()
            )
        })
    }

    /// Exact attribute names, in first-occurrence order
    pub fn names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.section.names().collect();
        assert_eq!(actual, expected, "{}: attribute names", self.context);
        self
    }

    pub fn is_empty(self) -> Self {
        assert!(
            self.section.is_empty(),
            "{}: expected no attributes, found {:?}",
            self.context,
            self.section.names().collect::<Vec<_>>()
        );
        self
    }

    pub fn scalar(self, name: &str, expected: &str) -> Self {
        match self.value(name) {
            Value::Scalar(s) => assert_eq!(s, expected, "{}.{}", self.context, name),
            other => panic!(
                "{}.{}: expected Scalar, found {}",
                self.context,
                name,
                other.kind()
            ),
        }
        self
    }

    pub fn list(self, name: &str, expected: &[&str]) -> Self {
        match self.value(name) {
            Value::List(items) => assert_eq!(items, expected, "{}.{}", self.context, name),
            other => panic!(
                "{}.{}: expected List, found {}",
                self.context,
                name,
                other.kind()
            ),
        }
        self
    }

    /// Exact mapping entries, in insertion order
    pub fn mapping(self, name: &str, expected: &[(&str, &str)]) -> Self {
        match self.value(name) {
            Value::Mapping(map) => {
                let actual: Vec<(&str, &str)> =
                    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                assert_eq!(actual, expected, "{}.{}", self.context, name);
            }
            other => panic!(
                "{}.{}: expected Mapping, found {}",
                self.context,
                name,
                other.kind()
            ),
        }
        self
    }
}
