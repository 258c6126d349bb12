//! Classified style model.
//!
//! [`StyleModel::from_class`] walks a parsed class once and resolves every
//! public field into a [`FieldKind`]. Code generators match on the kind and
//! never look at type spellings again.

use crate::ast::{ClassDecl, EnumDecl, FieldDecl};
use indexmap::IndexMap;

/// The style configuration model for one class.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleModel {
    /// Name of the class the model was built from.
    pub class_name: String,
    /// Root fields in declaration order.
    pub fields: Vec<StyleField>,
    /// Fields that were left out, in traversal order.
    pub skipped: Vec<SkippedField>,
}

/// A classified field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleField {
    pub name: String,
    pub kind: FieldKind,
}

/// Category of a field, which decides the control it maps to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// `bool`.
    Bool,
    /// A public enum of the class.
    Enum {
        name: String,
        /// Display labels in declaration order.
        labels: Vec<String>,
    },
    /// `std::string`, `int` or `unsigned`.
    Scalar(ScalarType),
    /// `std::vector<std::string>`.
    StringList,
    /// A public nested struct, with its own classified fields.
    Struct {
        name: String,
        fields: Vec<StyleField>,
    },
}

/// Scalar field types edited through a line edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarType {
    String,
    Int,
    Unsigned,
}

impl ScalarType {
    fn from_type(ty: &str) -> Option<Self> {
        match ty {
            "std::string" => Some(Self::String),
            "int" => Some(Self::Int),
            "unsigned" => Some(Self::Unsigned),
            _ => None,
        }
    }
}

const STRING_LIST_TYPE: &str = "std::vector<std::string>";

/// A field left out of the model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedField {
    /// Dotted path from the root, e.g. `BraceWrapping.AfterClass`.
    pub path: String,
    pub reason: SkipReason,
}

/// Why a field was left out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    Deprecated,
    UnrecognizedType(String),
    /// The field's struct type is already being expanded on the current path.
    RecursiveStruct(String),
}

impl StyleModel {
    /// Build the model for `class`.
    pub fn from_class(class: &ClassDecl) -> Self {
        let mut enums = IndexMap::new();
        collect_enums(class, &mut enums);

        let mut structs = IndexMap::new();
        collect_structs(class, &mut structs);

        let mut classifier = Classifier {
            enums,
            structs,
            active: Vec::new(),
            skipped: Vec::new(),
        };
        let fields = classifier.classify_fields(&class.fields, "");

        Self {
            class_name: class.name.clone(),
            fields,
            skipped: classifier.skipped,
        }
    }

    /// Fields that were skipped because their type was not recognised.
    pub fn unrecognized(&self) -> impl Iterator<Item = &SkippedField> {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::UnrecognizedType(_)))
    }

    /// Visit every field depth-first, with its nesting depth.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a StyleField, usize)) {
        fn go<'a>(
            fields: &'a [StyleField],
            depth: usize,
            visit: &mut impl FnMut(&'a StyleField, usize),
        ) {
            for field in fields {
                visit(field, depth);
                if let FieldKind::Struct { fields, .. } = &field.kind {
                    go(fields, depth + 1, visit);
                }
            }
        }
        go(&self.fields, 0, &mut visit);
    }
}

/// Display label for an enumerator: the name with its first `_`-delimited
/// segment removed. Names without `_` are kept whole.
pub fn enum_label(value: &str) -> &str {
    value.split_once('_').map_or(value, |(_, rest)| rest)
}

fn collect_enums<'a>(class: &'a ClassDecl, out: &mut IndexMap<&'a str, &'a EnumDecl>) {
    for e in &class.enums {
        out.entry(e.name.as_str()).or_insert(e);
    }
    for nested in &class.nested {
        collect_enums(nested, out);
    }
}

fn collect_structs<'a>(class: &'a ClassDecl, out: &mut IndexMap<&'a str, &'a ClassDecl>) {
    for nested in &class.nested {
        out.entry(nested.name.as_str()).or_insert(nested);
        collect_structs(nested, out);
    }
}

struct Classifier<'a> {
    enums: IndexMap<&'a str, &'a EnumDecl>,
    structs: IndexMap<&'a str, &'a ClassDecl>,
    active: Vec<&'a str>,
    skipped: Vec<SkippedField>,
}

impl<'a> Classifier<'a> {
    fn classify_fields(&mut self, fields: &'a [FieldDecl], prefix: &str) -> Vec<StyleField> {
        let mut out = Vec::with_capacity(fields.len());

        for field in fields {
            let path = if prefix.is_empty() {
                field.name.clone()
            } else {
                format!("{}.{}", prefix, field.name)
            };

            if field.is_deprecated() {
                tracing::debug!(field = %path, "skipping deprecated field");
                self.skipped.push(SkippedField {
                    path,
                    reason: SkipReason::Deprecated,
                });
                continue;
            }

            match self.classify(field, &path) {
                Ok(kind) => out.push(StyleField {
                    name: field.name.clone(),
                    kind,
                }),
                Err(reason) => self.skipped.push(SkippedField { path, reason }),
            }
        }

        out
    }

    fn classify(&mut self, field: &'a FieldDecl, path: &str) -> Result<FieldKind, SkipReason> {
        let ty = field.ty.as_str();

        if let Some(decl) = self.enums.get(ty) {
            let labels = decl
                .values
                .iter()
                .map(|v| enum_label(&v.name).to_string())
                .collect();
            return Ok(FieldKind::Enum {
                name: decl.name.clone(),
                labels,
            });
        }

        if let Some(decl) = self.structs.get(ty).copied() {
            if self.active.contains(&ty) {
                tracing::warn!(field = %path, ty, "struct contains itself, skipping field");
                return Err(SkipReason::RecursiveStruct(ty.to_string()));
            }
            self.active.push(decl.name.as_str());
            let fields = self.classify_fields(&decl.fields, path);
            self.active.pop();
            return Ok(FieldKind::Struct {
                name: decl.name.clone(),
                fields,
            });
        }

        if let Some(scalar) = ScalarType::from_type(ty) {
            return Ok(FieldKind::Scalar(scalar));
        }

        if ty == STRING_LIST_TYPE {
            return Ok(FieldKind::StringList);
        }

        if ty == "bool" {
            return Ok(FieldKind::Bool);
        }

        tracing::warn!(field = %path, ty, "unrecognized field type, no control generated");
        Err(SkipReason::UnrecognizedType(ty.to_string()))
    }
}
