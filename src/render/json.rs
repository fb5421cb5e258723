//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the parsed document instead of the target dialect, so custom
//! pipelines can do their own layout.

use crate::model::{EntityKind, RawDocstring, StructuredDocument};
use crate::parser;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    kind: &'a EntityKind,
    ignored: bool,
    #[serde(flatten)]
    document: &'a StructuredDocument,
}

impl Renderer for JsonRenderer {
    fn render(&self, raw: &RawDocstring, kind: &EntityKind) -> Result<String> {
        let document = parser::parse(raw);
        let json = JsonDocument {
            kind,
            ignored: document.is_ignored(),
            document: &document,
        };
        let mut out =
            serde_json::to_string_pretty(&json).context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
