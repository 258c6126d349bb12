//! Template engine for code generation.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Output is C++, so HTML escaping is off. Strict mode turns a missing
/// context value into an error instead of an empty string.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "class {{name}};")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "QLabel"})).unwrap();
        assert_eq!(result, "class QLabel;");
    }

    #[test]
    fn test_no_html_escaping() {
        let mut engine = TemplateEngine::new();
        engine.register_template("layout", "{{code}}").unwrap();
        let result = engine
            .render(
                "layout",
                &json!({"code": "new QLabel(\"a<b>\"), Row {m_X, m_setX}, br,"}),
            )
            .unwrap();
        assert_eq!(result, "new QLabel(\"a<b>\"), Row {m_X, m_setX}, br,");
    }

    #[test]
    fn test_strict_mode_rejects_missing_values() {
        let mut engine = TemplateEngine::new();
        engine.register_template("strict", "{{missing}}").unwrap();
        let err = engine
            .render("strict", &json!({"present": 1}))
            .unwrap_err();
        assert!(matches!(err, CodegenError::TemplateError(_)));
    }

    #[test]
    fn test_invalid_template() {
        let mut engine = TemplateEngine::new();
        let err = engine.register_template("bad", "{{#if x}}").unwrap_err();
        assert!(matches!(err, CodegenError::InvalidTemplate(_)));
    }
}
