//! Core types for the formgen settings-panel generator.
//!
//! This crate provides the foundational types shared by the other formgen crates:
//! - AST node types for a parsed C++ header (classes, enums, fields)
//! - The classified style model that drives code generation
//! - Error types

pub mod ast;
pub mod errors;
pub mod model;

pub use ast::*;
pub use errors::*;
pub use model::*;
