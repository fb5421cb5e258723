//! Tag-line decomposition and per-shape body parsers.
//!
//! Tag bodies come in three shapes:
//!
//! - parameter-like: `{type} name[=default] - description`
//! - result-like: `{type} - description`
//! - plain: the whole body is the description

use crate::model::{Shape, TaggedEntry};

/// Tags whose body is `{type} name[=default] - description`.
pub const PARAM_LIKE_TAGS: &[&str] = &["param", "typedef"];

/// Tags whose body is `{type} - description`.
pub const RESULT_LIKE_TAGS: &[&str] = &["returns", "throws", "function"];

/// Split `line` at the first `sep` into a head and a trimmed remainder.
///
/// Without `sep` the whole line is the head and the remainder is empty.
pub fn split_head<'a>(line: &'a str, sep: &str) -> (&'a str, &'a str) {
    match line.find(sep) {
        Some(pos) => (&line[..pos], line[pos + sep.len()..].trim()),
        None => (line, ""),
    }
}

/// Split an `@tag body` line into the tag name (without `@`) and its body.
pub fn split_tag_line(line: &str) -> (&str, &str) {
    let (head, body) = split_head(line, " ");
    (head.strip_prefix('@').unwrap_or(head), body)
}

/// Build the entry for `tag` from its body, dispatching on the tag's shape.
pub fn parse_entry(tag: &str, body: &str) -> TaggedEntry {
    if PARAM_LIKE_TAGS.contains(&tag) {
        parse_param_like(tag, body)
    } else if RESULT_LIKE_TAGS.contains(&tag) {
        parse_result_like(tag, body)
    } else {
        parse_plain(tag, body)
    }
}

/// `{string} lang=None - description text`
pub fn parse_param_like(tag: &str, body: &str) -> TaggedEntry {
    let (ty, rest) = split_head(body, " ");
    let mut name = "";
    let mut default = "";
    let mut description = "";
    if !rest.is_empty() {
        let (name_default, desc) = split_head(rest.trim(), " - ");
        description = desc;
        let (n, d) = split_head(name_default, "=");
        name = n.trim();
        default = d;
    }
    TaggedEntry {
        tag: tag.to_string(),
        shape: Shape::Param {
            ty: strip_braces(ty),
            name: name.to_string(),
            default: default.to_string(),
        },
        description: description.to_string(),
    }
}

/// `{string} - description text`
pub fn parse_result_like(tag: &str, body: &str) -> TaggedEntry {
    let (ty, description) = split_head(body, " - ");
    TaggedEntry {
        tag: tag.to_string(),
        shape: Shape::Result {
            ty: strip_braces(ty),
        },
        description: description.to_string(),
    }
}

pub fn parse_plain(tag: &str, body: &str) -> TaggedEntry {
    TaggedEntry {
        tag: tag.to_string(),
        shape: Shape::Plain,
        description: body.to_string(),
    }
}

fn strip_braces(ty: &str) -> String {
    ty.trim().replace(['{', '}'], "")
}
