//! Metadata tags rendered as sentences in the extended description.
//!
//! The target dialect has no sections for tags like `@since` or `@author`, so
//! their first occurrence becomes a sentence such as `method is added since 1.2`.

use crate::model::{EntityKind, StructuredDocument};
use crate::parser::{LINE_BREAK, PARAGRAPH_BREAK};

/// Metadata tags in output order, with the text placed between the entity
/// kind and the tag's description.
const METADATA_SENTENCES: &[(&str, &str)] = &[
    ("api", " is api : "),
    ("deprecated", " is deprecated: "),
    ("since", " is added since "),
    ("version", " version is "),
    ("requires", " requires: "),
    ("author", " author is "),
    ("license", " license is "),
    ("copyright", " copyright "),
    ("todo", " will do this later: "),
];

/// Sentences for every metadata tag present, each terminated by a line break.
pub fn synthesize(doc: &StructuredDocument, kind: &EntityKind) -> String {
    let mut out = String::new();
    for (tag, infix) in METADATA_SENTENCES {
        if let Some(entry) = doc.first(tag) {
            out.push_str(kind.label());
            out.push_str(infix);
            out.push_str(&entry.description);
            out.push_str(LINE_BREAK);
        }
    }
    out
}

/// The explicit description followed by the synthesized sentences, separated
/// by a paragraph break when both exist.
pub fn merged_description(doc: &StructuredDocument, kind: &EntityKind) -> String {
    let synthesized = synthesize(doc, kind);
    match (doc.description.is_empty(), synthesized.is_empty()) {
        (true, _) => synthesized,
        (false, true) => doc.description.clone(),
        (false, false) => format!("{}{}{}", doc.description, PARAGRAPH_BREAK, synthesized),
    }
}
