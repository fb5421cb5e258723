//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod numpy;
pub mod sections;

use crate::model::{EntityKind, RawDocstring};
use anyhow::{anyhow, Result};

/// Trait for rendering a docstring into a specific output format.
pub trait Renderer {
    fn render(&self, raw: &RawDocstring, kind: &EntityKind) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "numpy" | "napoleon" => Ok(Box::new(numpy::NumpyRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use numpy or json", format)),
    }
}
