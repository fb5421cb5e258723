//! numpydoc-style renderer: picks the sections for an entity kind and
//! assembles them in order.

use crate::model::{EntityKind, RawDocstring, StructuredDocument};
use crate::parser::{self, LINE_BREAK};
use crate::render::sections;
use crate::render::Renderer;
use anyhow::Result;

pub struct NumpyRenderer;

impl Renderer for NumpyRenderer {
    fn render(&self, raw: &RawDocstring, kind: &EntityKind) -> Result<String> {
        Ok(convert(raw, kind).into_string())
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

/// Result of converting one docstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Target-dialect text.
    Converted(String),
    /// An `@ignore` tag was present; nothing is rendered.
    Suppressed,
    /// The entity kind has no conversion; the input is returned untouched.
    Passthrough(String),
}

impl Conversion {
    pub fn into_string(self) -> String {
        match self {
            Conversion::Converted(text) | Conversion::Passthrough(text) => text,
            Conversion::Suppressed => String::new(),
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            Conversion::Converted(_) => "converted",
            Conversion::Suppressed => "suppressed",
            Conversion::Passthrough(_) => "passthrough",
        }
    }
}

/// Parse and render a docstring for the given entity kind.
pub fn convert(raw: &RawDocstring, kind: &EntityKind) -> Conversion {
    let doc = parser::parse(raw);
    let conversion = if doc.is_ignored() {
        Conversion::Suppressed
    } else {
        match render_sections(&doc, kind) {
            Some(text) => Conversion::Converted(text),
            None => Conversion::Passthrough(raw.original().to_string()),
        }
    };
    tracing::debug!(kind = %kind, outcome = conversion.outcome(), "Converted docstring");
    conversion
}

/// Sections for `kind` joined in order; `None` for kinds without a layout.
fn render_sections(doc: &StructuredDocument, kind: &EntityKind) -> Option<String> {
    let mut parts = vec![sections::summary(doc, kind)];

    match kind {
        EntityKind::Class => {
            parts.push(sections::parameters(doc));
            parts.push(sections::raises(doc));
            parts.push(sections::methods(doc));
        }
        EntityKind::Method => {
            parts.push(sections::parameters(doc));
            parts.push(sections::returns(doc));
            parts.push(sections::raises(doc));
        }
        EntityKind::Module | EntityKind::Object => {}
        EntityKind::Other(_) => return None,
    }

    parts.push(sections::see_also(doc));
    parts.push(sections::references(doc));
    parts.push(sections::example(doc));
    parts.push(LINE_BREAK.to_string());

    Some(parts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODULE_DOC: &str =
        "国际化文本处理模块\n\n@module simple_i18n\n@file simple_i18n.py\n@author <name>";

    const METHOD_DOC: &str = "返回指定语言的文本\n\n\
        @param {string} msg_id - 要翻译的语言ID标识\n\
        @param {tuple} replace_para=() - 进行占位符替换的变量\n\
        @returns {string} - 国际化转换后的字符串";

    const FULL_DOC: &str = "Summary\n\n\
        @param {int} n - count\n\
        @returns {int} - doubled\n\
        @throws {ValueError} - negative n\n\
        @function {reset} - clears state\n\
        @see other\n\
        @tutorial guide\n\
        @example\n    double(2)";

    fn render(input: &str, kind: EntityKind) -> String {
        convert(&RawDocstring::from_text(input), &kind).into_string()
    }

    #[test]
    fn module_renders_summary_and_metadata() {
        assert_eq!(
            render(MODULE_DOC, EntityKind::Module),
            "国际化文本处理模块\r\n\r\nmodule author is <name>\r\n\r\n\r\n"
        );
    }

    #[test]
    fn method_renders_parameters_and_returns() {
        assert_eq!(
            render(METHOD_DOC, EntityKind::Method),
            "返回指定语言的文本\r\n\
             \r\nParameters\r\n----------\r\n\
             msg_id : string\r\n    要翻译的语言ID标识\r\n\
             replace_para : tuple\r\n    default=(), 进行占位符替换的变量\r\n\
             \r\nReturns\r\n----------\r\n\
             string\r\n    国际化转换后的字符串\r\n\
             \r\n"
        );
    }

    #[test]
    fn method_section_order() {
        let out = render(FULL_DOC, EntityKind::Method);
        let order: Vec<usize> = ["Parameters", "Returns", "Raises", "See Also", "References", "Example"]
            .iter()
            .map(|h| out.find(&format!("\r\n{h}\r\n")).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{out}");
        assert!(!out.contains("Methods"));
    }

    #[test]
    fn class_section_order() {
        let out = render(FULL_DOC, EntityKind::Class);
        let order: Vec<usize> = ["Parameters", "Raises", "Methods", "See Also", "References", "Example"]
            .iter()
            .map(|h| out.find(&format!("\r\n{h}\r\n")).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{out}");
        assert!(!out.contains("Returns"));
    }

    #[test]
    fn object_renders_summary_and_listings_only() {
        let out = render(FULL_DOC, EntityKind::Object);
        assert_eq!(
            out,
            "Summary\r\n\
             \r\nSee Also\r\n----------\r\nother\r\n\
             \r\nReferences\r\n----------\r\nguide\r\n\
             \r\nExample\r\n----------\r\ndouble(2)\r\n\
             \r\n"
        );
    }

    #[test]
    fn method_without_params_has_no_parameters_section() {
        let out = render("Summary\n\n@returns {int} - value", EntityKind::Method);
        assert!(!out.contains("Parameters"));
        assert!(out.contains("\r\nReturns\r\n----------\r\nint\r\n    value\r\n"));
    }

    #[test]
    fn ignore_suppresses_every_kind() {
        let input = "Summary\n\n@param {int} n - count\n@ignore";
        for kind in ["module", "class", "method", "object", "function"] {
            let conversion = convert(&RawDocstring::from_text(input), &EntityKind::from(kind));
            assert_eq!(conversion, Conversion::Suppressed, "kind {kind}");
            assert_eq!(conversion.into_string(), "");
        }
    }

    #[test]
    fn unknown_kind_passes_through() {
        let raw = RawDocstring::from_text(METHOD_DOC);
        let conversion = convert(&raw, &EntityKind::from("function"));
        assert_eq!(conversion, Conversion::Passthrough(METHOD_DOC.to_string()));
    }

    #[test]
    fn passthrough_of_presplit_lines() {
        let raw = RawDocstring::from_lines(["Summary", "", "@see x"]);
        assert_eq!(
            convert(&raw, &EntityKind::from("attribute")).into_string(),
            "Summary\n\n@see x"
        );
    }

    #[test]
    fn example_keeps_indented_empty_lines() {
        assert_eq!(
            render("Summary\n\n@example\n    a = 1\n    \n    print(a)", EntityKind::Module),
            "Summary\r\n\
             \r\nExample\r\n----------\r\n\
             a = 1\r\n\r\n\r\n\r\nprint(a)\r\n\
             \r\n"
        );
    }

    #[test]
    fn empty_docstring() {
        assert_eq!(render("", EntityKind::Method), "\r\n\r\n");
    }

    #[test]
    fn renderer_trait() {
        let out = NumpyRenderer
            .render(&RawDocstring::from_text("Summary"), &EntityKind::Module)
            .unwrap();
        assert_eq!(out, "Summary\r\n\r\n");
        assert_eq!(NumpyRenderer.file_extension(), "txt");
    }
}
