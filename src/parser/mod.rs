//! `@tag` docstring parser — line-by-line state machine.
//!
//! A docstring is read as a summary line, an optional extended description,
//! then a region of `@tag` lines whose descriptions may continue over the
//! following lines:
//!
//! ```text
//! Return the text for a language
//!
//! @param {string} msg_id - message id
//! @returns {string} - translated text
//! ```

pub mod shape;

use crate::model::{RawDocstring, StructuredDocument};

/// Separator between paragraphs of continuation text.
pub const PARAGRAPH_BREAK: &str = "\r\n\r\n";

/// Separator between lines of the extended description.
pub const LINE_BREAK: &str = "\r\n";

/// Example continuation lines lose this much leading indentation.
const EXAMPLE_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    SeekingSummary,
    InDescription,
    InTags,
}

#[derive(Default)]
struct ParserState {
    doc: StructuredDocument,
    phase: Phase,
    /// Most recently opened entry, as (tag, index into `entries[tag]`).
    open: Option<(String, usize)>,
}

/// Parse a docstring into its structured form.
pub fn parse(raw: &RawDocstring) -> StructuredDocument {
    let mut state = ParserState::default();

    for line in raw.lines() {
        process_line(&mut state, line);
    }

    tracing::debug!(
        lines = raw.lines().len(),
        tags = state.doc.entries.len(),
        entries = state.doc.entries.values().map(Vec::len).sum::<usize>(),
        "Parsed docstring"
    );
    state.doc
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line: &str) {
    match s.phase {
        Phase::SeekingSummary => {
            if !is_blank(line) {
                s.doc.summary = line.to_string();
                s.phase = Phase::InDescription;
            }
        }
        Phase::InDescription => {
            if is_blank(line) {
                s.phase = Phase::InTags;
            } else if is_tag_line(line) {
                s.phase = Phase::InTags;
                open_entry(s, line);
            } else {
                join_onto(&mut s.doc.description, LINE_BREAK, line);
            }
        }
        Phase::InTags => {
            if is_blank(line) {
                return;
            }
            if is_tag_line(line) {
                open_entry(s, line);
            } else {
                continue_entry(s, line);
            }
        }
    }
}

/// Start a new entry from an `@tag body` line.
fn open_entry(s: &mut ParserState, line: &str) {
    let (tag, body) = shape::split_tag_line(line);
    let entry = shape::parse_entry(tag, body);
    let list = s.doc.entries.entry(tag.to_string()).or_default();
    list.push(entry);
    s.open = Some((tag.to_string(), list.len() - 1));
}

/// Append a continuation line to the open entry, or to the document
/// description when no entry is open yet.
fn continue_entry(s: &mut ParserState, line: &str) {
    let Some((tag, index)) = s.open.as_ref() else {
        join_onto(&mut s.doc.description, PARAGRAPH_BREAK, line);
        return;
    };

    let text = if tag == "example" {
        line.strip_prefix(EXAMPLE_INDENT).unwrap_or(line)
    } else {
        line
    };

    if let Some(entry) = s
        .doc
        .entries
        .get_mut(tag)
        .and_then(|list| list.get_mut(*index))
    {
        entry.description.push_str(PARAGRAPH_BREAK);
        entry.description.push_str(text);
    }
}

// -- Helpers ------------------------------------------------------------------

/// Only a truly empty line is blank; whitespace-only lines carry content.
fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Only a `@` in the very first column starts a tag.
fn is_tag_line(line: &str) -> bool {
    line.starts_with('@')
}

/// Join `text` onto `dest` with `sep`, without a leading separator.
fn join_onto(dest: &mut String, sep: &str, text: &str) {
    if !dest.is_empty() {
        dest.push_str(sep);
    }
    dest.push_str(text);
}
