//! tagdoc — convert `@tag`-annotated docstrings into numpydoc-style
//! section docstrings.
//!
//! ```text
//! Return the text for a language          Return the text for a language
//!                                    →
//! @param {string} lang=None - language    Parameters
//! @returns {string} - translated text     ----------
//!                                         lang : string
//!                                             default=None, language
//!                                         ...
//! ```
//!
//! The output is plain text meant to be handed to a numpydoc-aware renderer
//! (for example Sphinx napoleon). Lines end in `\r\n`.

pub mod metadata;
pub mod model;
pub mod parser;
pub mod render;

pub use model::{EntityKind, RawDocstring, Shape, StructuredDocument, TaggedEntry};
pub use render::numpy::{convert, Conversion};

/// Convert a docstring for the given entity kind.
///
/// Returns `""` when the docstring carries `@ignore`, and the input untouched
/// for kinds other than module, class, method and object.
pub fn transpile(docstring: impl Into<RawDocstring>, kind: &EntityKind) -> String {
    convert(&docstring.into(), kind).into_string()
}
