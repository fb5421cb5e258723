//! Data model for parsed docstrings — format-agnostic.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Line boundaries recognized when splitting a docstring block.
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Tags seeded into every document so renderers can look them up directly.
pub const WELL_KNOWN_TAGS: &[&str] = &[
    "param", "returns", "throws", "example", "see", "tutorial", "function",
];

/// Tag that suppresses rendering of the whole docstring.
pub const IGNORE_TAG: &str = "ignore";

/// A docstring as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocstring {
    lines: Vec<String>,
    /// Input text as received, returned verbatim on passthrough.
    original: String,
}

impl RawDocstring {
    /// Split a text block on line boundaries. A trailing terminator does not
    /// produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = RE_LINE_BREAK.split(text).map(str::to_string).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self {
            lines,
            original: text.to_string(),
        }
    }

    /// Wrap lines that were already split by the caller.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let original = lines.join("\n");
        Self { lines, original }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

impl From<&str> for RawDocstring {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for RawDocstring {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl From<Vec<String>> for RawDocstring {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<&[&str]> for RawDocstring {
    fn from(lines: &[&str]) -> Self {
        Self::from_lines(lines.iter().copied())
    }
}

/// What the docstring documents. Supplied by the caller, never inferred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum EntityKind {
    Module,
    Class,
    Method,
    Object,
    /// Any other label; such docstrings pass through unconverted.
    Other(String),
}

impl EntityKind {
    /// Lower-case label, as used in synthesized sentences.
    pub fn label(&self) -> &str {
        match self {
            EntityKind::Module => "module",
            EntityKind::Class => "class",
            EntityKind::Method => "method",
            EntityKind::Object => "object",
            EntityKind::Other(label) => label,
        }
    }
}

impl From<&str> for EntityKind {
    fn from(label: &str) -> Self {
        match label {
            "module" => EntityKind::Module,
            "class" => EntityKind::Class,
            "method" => EntityKind::Method,
            "object" => EntityKind::Object,
            other => EntityKind::Other(other.to_string()),
        }
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.label().to_string()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag-specific fields of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// `{type} name[=default] - description`
    Param {
        #[serde(rename = "type")]
        ty: String,
        name: String,
        default: String,
    },
    /// `{type} - description`
    Result {
        #[serde(rename = "type")]
        ty: String,
    },
    /// Description only.
    Plain,
}

/// One `@tag` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedEntry {
    pub tag: String,
    #[serde(flatten)]
    pub shape: Shape,
    /// Free text; continuation lines are joined by a blank line.
    pub description: String,
}

impl TaggedEntry {
    /// Declared type, or `""` for plain entries.
    pub fn ty(&self) -> &str {
        match &self.shape {
            Shape::Param { ty, .. } | Shape::Result { ty } => ty,
            Shape::Plain => "",
        }
    }

    /// Parameter name, or `""` for non-parameter entries.
    pub fn name(&self) -> &str {
        match &self.shape {
            Shape::Param { name, .. } => name,
            _ => "",
        }
    }

    /// Default value, or `""` when absent.
    pub fn default_value(&self) -> &str {
        match &self.shape {
            Shape::Param { default, .. } => default,
            _ => "",
        }
    }
}

/// Parsed intermediate form of one docstring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredDocument {
    /// First non-blank line.
    pub summary: String,
    /// Extended description between the summary and the tag region.
    pub description: String,
    /// Entries per tag name, in first-seen order.
    pub entries: IndexMap<String, Vec<TaggedEntry>>,
}

impl Default for StructuredDocument {
    fn default() -> Self {
        let entries = WELL_KNOWN_TAGS
            .iter()
            .map(|tag| ((*tag).to_string(), Vec::new()))
            .collect();
        Self {
            summary: String::new(),
            description: String::new(),
            entries,
        }
    }
}

impl StructuredDocument {
    /// Entries recorded under `tag`; empty when the tag never occurred.
    pub fn entries_for(&self, tag: &str) -> &[TaggedEntry] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `tag` was seen at least once (or is a seeded tag).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// First entry recorded under `tag`.
    pub fn first(&self, tag: &str) -> Option<&TaggedEntry> {
        self.entries_for(tag).first()
    }

    pub fn is_ignored(&self) -> bool {
        self.has_tag(IGNORE_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_text_on_mixed_line_endings() {
        let raw = RawDocstring::from_text("a\r\nb\nc\rd");
        assert_eq!(raw.lines(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn split_text_trailing_newline() {
        let raw = RawDocstring::from_text("a\n\nb\n");
        assert_eq!(raw.lines(), ["a", "", "b"]);
    }

    #[test]
    fn split_text_leading_newline() {
        let raw = RawDocstring::from_text("\nsummary");
        assert_eq!(raw.lines(), ["", "summary"]);
    }

    #[test]
    fn split_empty_text() {
        assert!(RawDocstring::from_text("").lines().is_empty());
    }

    #[test]
    fn from_lines_keeps_lines() {
        let raw = RawDocstring::from_lines(["a", "", "b"]);
        assert_eq!(raw.lines(), ["a", "", "b"]);
        assert_eq!(raw.original(), "a\n\nb");
    }

    #[test]
    fn original_text_preserved() {
        let raw = RawDocstring::from("x\r\n@see y\r\n");
        assert_eq!(raw.original(), "x\r\n@see y\r\n");
    }

    #[test]
    fn entity_kind_from_label() {
        assert_eq!(EntityKind::from("module"), EntityKind::Module);
        assert_eq!(EntityKind::from("class"), EntityKind::Class);
        assert_eq!(EntityKind::from("method"), EntityKind::Method);
        assert_eq!(EntityKind::from("object"), EntityKind::Object);
        assert_eq!(
            EntityKind::from("function"),
            EntityKind::Other("function".to_string())
        );
        assert_eq!(EntityKind::from("attribute").label(), "attribute");
    }

    #[test]
    fn document_seeds_well_known_tags() {
        let doc = StructuredDocument::default();
        let keys: Vec<&str> = doc.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, WELL_KNOWN_TAGS);
        assert!(!doc.is_ignored());
        assert!(doc.entries_for("author").is_empty());
    }

    #[test]
    fn entry_accessors() {
        let entry = TaggedEntry {
            tag: "param".to_string(),
            shape: Shape::Param {
                ty: "int".to_string(),
                name: "n".to_string(),
                default: "0".to_string(),
            },
            description: String::new(),
        };
        assert_eq!(entry.ty(), "int");
        assert_eq!(entry.name(), "n");
        assert_eq!(entry.default_value(), "0");
    }
}
