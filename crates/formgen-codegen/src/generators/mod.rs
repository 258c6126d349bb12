//! Settings-panel generators for widget toolkits.

#[cfg(feature = "qt")]
mod qt;
mod templates;

#[cfg(feature = "qt")]
pub use qt::{emit_model, QtGenerator};
pub use templates::TemplateEngine;

use crate::error::Result;
use crate::naming::check_unique_identifiers;
use crate::options::GeneratorOptions;
use formgen_core::StyleModel;

/// Common trait for settings-panel generators.
pub trait FormGenerator {
    /// Target toolkit name.
    fn toolkit_name(&self) -> &'static str;

    /// Options the generator was built with.
    fn options(&self) -> &GeneratorOptions;

    /// Emit code fragments for every control of `model`.
    fn emit(&self, model: &StyleModel) -> Fragments;

    /// Place fragments into the header and source templates.
    fn render(&self, fragments: &Fragments) -> Result<GeneratedFiles>;

    /// Check identifiers, emit and render.
    fn generate(&self, model: &StyleModel) -> Result<GeneratedFiles> {
        check_unique_identifiers(model, self.options())?;
        let fragments = self.emit(model);
        tracing::debug!(
            toolkit = self.toolkit_name(),
            declarations = fragments.declaration.lines().count(),
            "emitted fragments"
        );
        self.render(&fragments)
    }
}

/// Code accumulated for the three insertion points of the templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    /// Member declarations for the class header.
    pub declaration: String,
    /// Widget construction statements for the constructor body.
    pub construction: String,
    /// Entries of the form layout.
    pub layout: String,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `other` after the fragments already collected.
    pub fn extend(&mut self, other: Fragments) {
        self.declaration.push_str(&other.declaration);
        self.construction.push_str(&other.construction);
        self.layout.push_str(&other.layout);
    }

    pub fn is_empty(&self) -> bool {
        self.declaration.is_empty() && self.construction.is_empty() && self.layout.is_empty()
    }
}

/// Rendered header and source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub header: String,
    pub source: String,
}
