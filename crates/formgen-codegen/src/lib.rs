//! Code generation from classified style models to settings-panel widgets.
//!
//! This crate takes a [`StyleModel`](formgen_core::StyleModel) and produces
//! the widget class that edits it: a header declaring one control per field
//! and a source file that builds the controls and lays them out in a form.
//!
//! # Features
//!
//! - `qt` - Generate Qt Widgets code using the Layouting form builder
//!
//! # Example
//!
//! ```ignore
//! use formgen_codegen::{generate, write_outputs, GeneratorOptions, OutputPaths};
//!
//! let options = GeneratorOptions::default();
//! let files = generate(&model, &options)?;
//! write_outputs(&files, &OutputPaths::in_dir("src/plugins/clangformat", &options))?;
//! ```

pub mod error;
pub mod generators;
pub mod naming;
pub mod options;
pub mod output;

pub use error::{CodegenError, Result};
pub use generators::{Fragments, FormGenerator, GeneratedFiles, TemplateEngine};
pub use naming::check_unique_identifiers;
pub use options::GeneratorOptions;
pub use output::{write_outputs, OutputPaths};

#[cfg(feature = "qt")]
pub use generators::{emit_model, QtGenerator};

/// Generate the widget header and source for `model` with the Qt generator.
#[cfg(feature = "qt")]
pub fn generate(
    model: &formgen_core::StyleModel,
    options: &GeneratorOptions,
) -> Result<GeneratedFiles> {
    QtGenerator::new(options.clone())?.generate(model)
}
