//! Table rendering
//!
//! Lays out every `(section, attribute, value)` triple in three left-aligned columns, each
//! as wide as its widest cell:
//!
//! ```text
//!   # demo
//!  ==============================
//!    server  host   localhost
//!    server  ports  ['80', '443']
//!  ==============================
//! ```
//!
//! With colours on, even rows are bold and reversed, odd rows bold. With `sec_indent` a
//! blank separator is inserted whenever the section changes.

use std::fmt::{self, Write};

use crossterm::style::{Attribute, SetAttribute};
use crossterm::Command;

use crate::rowconf::document::Document;

/// Columns plus the single spaces around and between them
const FRAME_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Stripe rows with ANSI attributes
    pub colors: bool,
    /// Separate sections with blank lines
    pub sec_indent: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            colors: true,
            sec_indent: false,
        }
    }
}

impl TableOptions {
    pub fn plain() -> Self {
        Self {
            colors: false,
            sec_indent: false,
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_sec_indent(mut self, sec_indent: bool) -> Self {
        self.sec_indent = sec_indent;
        self
    }
}

pub fn render_table(doc: &Document, options: &TableOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, doc, options);
    out
}

pub fn write_table<W: Write>(out: &mut W, doc: &Document, options: &TableOptions) -> fmt::Result {
    let rows: Vec<(&str, &str, String)> = doc
        .iter()
        .map(|(section, name, value)| (section, name, value.to_string()))
        .collect();

    let widths = rows.iter().fold([0usize; 3], |w, (s, a, v)| {
        [
            w[0].max(s.chars().count()),
            w[1].max(a.chars().count()),
            w[2].max(v.chars().count()),
        ]
    });
    let rule_width = widths.iter().sum::<usize>() + FRAME_WIDTH;
    let rule = "=".repeat(rule_width);

    write!(out, "  # {}\n {}\n", doc.description(), rule)?;

    let mut last_section: Option<&str> = None;
    for (i, (section, name, value)) in rows.iter().enumerate() {
        if options.sec_indent && last_section.is_some_and(|last| last != *section) {
            write!(out, " {}\n\n\n", " ".repeat(rule_width))?;
        }
        last_section = Some(*section);

        out.write_char(' ')?;
        if options.colors {
            row_style(i, out)?;
        }
        write!(
            out,
            " {:<w0$}  {:<w1$}  {:<w2$} ",
            section,
            name,
            value,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )?;
        if options.colors {
            SetAttribute(Attribute::Reset).write_ansi(out)?;
        }
        out.write_char('\n')?;
    }

    writeln!(out, " {}", rule)
}

fn row_style<W: Write>(index: usize, out: &mut W) -> fmt::Result {
    SetAttribute(Attribute::Bold).write_ansi(out)?;
    if index % 2 == 0 {
        SetAttribute(Attribute::Reverse).write_ansi(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rowconf::building::Parser;

    fn doc() -> Document {
        Parser::new()
            .parse("#? config: demo\n[server]\nhost=localhost\nports=80,443\n[db]\nname=main\n")
            .unwrap()
    }

    #[test]
    fn test_plain_table() {
        let table = render_table(&doc(), &TableOptions::plain());
        let expected = concat!(
            "  # demo\n",
            " ==============================\n",
            "  server  host   localhost     \n",
            "  server  ports  ['80', '443'] \n",
            "  db      name   main          \n",
            " ==============================\n",
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_section_separator() {
        let table = render_table(&doc(), &TableOptions::plain().with_sec_indent(true));
        let separator = format!(" {}\n\n\n", " ".repeat(30));
        assert_eq!(table.matches(&separator).count(), 1);
        assert!(table.contains(&format!("['80', '443'] \n{}  db", separator)));
    }

    #[test]
    fn test_colored_rows_alternate() {
        let table = render_table(&doc(), &TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[2].starts_with(" \u{1b}[1m\u{1b}[7m "));
        assert!(lines[3].starts_with(" \u{1b}[1m "));
        assert!(lines[4].starts_with(" \u{1b}[1m\u{1b}[7m "));
        assert!(lines[2].ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_empty_document() {
        let doc = Parser::new().parse("#? config: nothing\n").unwrap();
        assert_eq!(
            render_table(&doc, &TableOptions::default()),
            "  # nothing\n ======\n ======\n"
        );
    }
}
