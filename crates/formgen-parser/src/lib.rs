//! Parser for C++ style-configuration headers.
//!
//! This crate turns header text into the [`HeaderFile`] AST from
//! `formgen-core`. Built on `nom` for the lexer and a small recursive-descent
//! walk for declarations.

mod grammar;
mod lexer;

pub use grammar::parse;

use formgen_core::{ClassDecl, HeaderFile, ParseError};

/// Parse a header from source text.
///
/// # Example
///
/// ```ignore
/// use formgen_parser::parse_header;
///
/// let source = r#"
/// struct FormatStyle {
///   bool SortIncludes;
/// };
/// "#;
///
/// let header = parse_header(source)?;
/// ```
pub fn parse_header(source: &str) -> Result<HeaderFile, ParseError> {
    parse(source)
}

/// Parse a header and return the top-level class or struct called `name`.
pub fn extract_class(source: &str, name: &str) -> Result<ClassDecl, ParseError> {
    let mut header = parse(source)?;
    tracing::debug!(classes = header.classes.len(), "parsed header");

    let index = header
        .classes
        .iter()
        .position(|c| c.name == name)
        .ok_or_else(|| ParseError::ClassNotFound {
            name: name.to_string(),
        })?;

    Ok(header.classes.swap_remove(index))
}
