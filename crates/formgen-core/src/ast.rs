//! Abstract Syntax Tree types for a parsed C++ header.
//!
//! Only the parts of a header that matter for settings-panel generation are
//! modelled: class and struct definitions, their public enums, public nested
//! types and public instance fields. Everything else is dropped by the parser.

use std::fmt;

/// Doc comment marker that flags a field as deprecated.
pub const DEPRECATED_MARKER: &str = "**deprecated**";

/// A parsed header file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderFile {
    /// Top-level classes and structs, in declaration order.
    pub classes: Vec<ClassDecl>,
}

impl HeaderFile {
    /// Find a top-level class or struct by name.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|c| c.name == name)
    }
}

/// A class or struct definition.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub name: String,
    /// Public enums declared inside this class.
    pub enums: Vec<EnumDecl>,
    /// Public nested classes and structs.
    pub nested: Vec<ClassDecl>,
    /// Public instance fields.
    pub fields: Vec<FieldDecl>,
    /// Source span for error reporting
    pub span: Span,
}

impl ClassDecl {
    /// Find a public enum declared directly in this class.
    pub fn enum_named(&self, name: &str) -> Option<&EnumDecl> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Find a public nested class or struct declared directly in this class.
    pub fn nested_named(&self, name: &str) -> Option<&ClassDecl> {
        self.nested.iter().find(|c| c.name == name)
    }
}

/// An enum definition.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDecl {
    pub name: String,
    /// Enumerators in declaration order.
    pub values: Vec<EnumValue>,
    /// `enum class` / `enum struct`.
    pub scoped: bool,
    pub span: Span,
}

/// One enumerator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValue {
    pub name: String,
    pub doc: Option<String>,
}

/// A public instance field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeName,
    /// Doc comment text attached to the declaration, if any.
    pub doc: Option<String>,
    pub span: Span,
}

impl FieldDecl {
    /// Whether the doc comment carries the deprecation marker.
    pub fn is_deprecated(&self) -> bool {
        self.doc
            .as_deref()
            .is_some_and(|doc| doc.contains(DEPRECATED_MARKER))
    }
}

/// A declared type, normalised so that equivalent spellings compare equal.
///
/// Tokens are separated by single spaces except around `::`, `<`, `>`, `,`,
/// `*` and `&`, which never carry surrounding whitespace. So
/// `std::vector< std::string >` becomes `std::vector<std::string>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName(pub String);

impl TypeName {
    /// Build a type name from its source tokens.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = String::new();
        let mut prev_glue = true;

        for token in tokens {
            let glue = matches!(token, "::" | "<" | ">" | "," | "*" | "&" | "&&");
            if !out.is_empty() && !glue && !prev_glue {
                out.push(' ');
            }
            out.push_str(token);
            prev_glue = glue;
        }

        Self(out)
    }

    /// Normalise a free-form type spelling.
    pub fn parse(text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = text.trim();

        while !rest.is_empty() {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            let len = if rest.starts_with("::") || rest.starts_with("&&") {
                2
            } else {
                let first = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                if rest.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
                    rest.find(|c: char| !(c.is_alphanumeric() || c == '_'))
                        .unwrap_or(rest.len())
                } else {
                    first
                }
            };
            tokens.push(&rest[..len]);
            rest = &rest[len..];
        }

        Self::from_tokens(tokens)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source location span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// 1-based line number.
    pub line: u32,
}
