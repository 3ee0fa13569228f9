//! JSON dump used by `Display for Config`

use std::fmt;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::rowconf::document::Document;

const INDENT: &[u8] = b"        ";

/// Sections as JSON indented by eight spaces; the description is left out.
pub fn sections_json(doc: &Document) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    doc.section_map().serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// `<cfg: DESCRIPTION>` followed directly by [`sections_json`].
pub fn write_document(f: &mut fmt::Formatter<'_>, doc: &Document) -> fmt::Result {
    let json = sections_json(doc).map_err(|_| fmt::Error)?;
    write!(f, "<cfg: {}>{}", doc.description(), json)
}
