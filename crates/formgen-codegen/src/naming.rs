//! Widget identifier naming and uniqueness.
//!
//! Nested structs only group controls visually, so every generated widget
//! lives in one flat namespace. Two fields with the same name in different
//! structs would otherwise produce colliding members.

use std::collections::HashMap;

use crate::error::{CodegenError, Result};
use crate::options::GeneratorOptions;
use formgen_core::{FieldKind, StyleField, StyleModel};

/// Name of the commit control that applies an edited value of `field`.
pub fn commit_control_name(field: &str) -> String {
    format!("set{}", field)
}

/// Identifiers generated for one field. Structs produce none of their own.
pub fn field_identifiers(field: &StyleField) -> Vec<String> {
    match field.kind {
        FieldKind::Bool | FieldKind::Enum { .. } => vec![field.name.clone()],
        FieldKind::Scalar(_) | FieldKind::StringList => {
            vec![field.name.clone(), commit_control_name(&field.name)]
        }
        FieldKind::Struct { .. } => Vec::new(),
    }
}

/// Fail if two controls in the generated class would share an identifier.
pub fn check_unique_identifiers(model: &StyleModel, options: &GeneratorOptions) -> Result<()> {
    let mut seen: HashMap<String, String> = HashMap::new();
    seen.insert(
        options.preset_control.clone(),
        format!("<{}>", options.preset_control),
    );
    claim_fields(&model.fields, "", &mut seen)
}

fn claim_fields(
    fields: &[StyleField],
    prefix: &str,
    seen: &mut HashMap<String, String>,
) -> Result<()> {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.clone()
        } else {
            format!("{}.{}", prefix, field.name)
        };

        for identifier in field_identifiers(field) {
            if let Some(first) = seen.get(&identifier) {
                return Err(CodegenError::DuplicateIdentifier {
                    identifier,
                    first: first.clone(),
                    second: path,
                });
            }
            seen.insert(identifier, path.clone());
        }

        if let FieldKind::Struct { fields, .. } = &field.kind {
            claim_fields(fields, &path, seen)?;
        }
    }
    Ok(())
}
