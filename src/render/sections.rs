//! Section renderers for the numpydoc-style target dialect.
//!
//! Each renderer returns a fragment, or `""` when the document has nothing
//! for that section.

use crate::metadata;
use crate::model::{EntityKind, StructuredDocument, TaggedEntry};
use crate::parser::LINE_BREAK;

/// Heading underline. Always ten dashes, whatever the heading length.
pub const UNDERLINE: &str = "----------";

const INDENT: &str = "    ";

/// `\r\n<title>\r\n----------\r\n`
fn heading(title: &str) -> String {
    format!("{LINE_BREAK}{title}{LINE_BREAK}{UNDERLINE}{LINE_BREAK}")
}

/// Summary line, then the merged extended description if any.
pub fn summary(doc: &StructuredDocument, kind: &EntityKind) -> String {
    let mut out = format!("{}{LINE_BREAK}", doc.summary);
    let block = metadata::merged_description(doc, kind);
    if !block.is_empty() {
        out.push_str(LINE_BREAK);
        out.push_str(&block);
        out.push_str(LINE_BREAK);
    }
    out
}

pub fn parameters(doc: &StructuredDocument) -> String {
    let entries = doc.entries_for("param");
    if entries.is_empty() {
        return String::new();
    }
    let mut out = heading("Parameters");
    for entry in entries {
        out.push_str(&format!("{} : {}{LINE_BREAK}", entry.name(), entry.ty()));
        let default = entry.default_value();
        if default.is_empty() && entry.description.is_empty() {
            continue;
        }
        out.push_str(INDENT);
        if !default.is_empty() {
            out.push_str(&format!("default={default}, "));
        }
        out.push_str(&entry.description);
        out.push_str(LINE_BREAK);
    }
    out
}

pub fn returns(doc: &StructuredDocument) -> String {
    typed_section("Returns", doc.entries_for("returns"))
}

pub fn raises(doc: &StructuredDocument) -> String {
    typed_section("Raises", doc.entries_for("throws"))
}

pub fn methods(doc: &StructuredDocument) -> String {
    typed_section("Methods", doc.entries_for("function"))
}

pub fn see_also(doc: &StructuredDocument) -> String {
    listing("See Also", doc.entries_for("see"), verbatim)
}

pub fn references(doc: &StructuredDocument) -> String {
    listing("References", doc.entries_for("tutorial"), verbatim)
}

pub fn example(doc: &StructuredDocument) -> String {
    listing("Example", doc.entries_for("example"), str::trim)
}

/// `type` then the indented description, per entry.
fn typed_section(title: &str, entries: &[TaggedEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = heading(title);
    for entry in entries {
        out.push_str(&format!(
            "{}{LINE_BREAK}{INDENT}{}{LINE_BREAK}",
            entry.ty(),
            entry.description
        ));
    }
    out
}

fn verbatim(text: &str) -> &str {
    text
}

/// One description per line.
fn listing(title: &str, entries: &[TaggedEntry], shape: fn(&str) -> &str) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = heading(title);
    for entry in entries {
        out.push_str(shape(&entry.description));
        out.push_str(LINE_BREAK);
    }
    out
}
