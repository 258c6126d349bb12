//! Qt Widgets generator using the Layouting form builder.

use super::templates::TemplateEngine;
use super::{Fragments, FormGenerator, GeneratedFiles};
use crate::error::Result;
use crate::naming::commit_control_name;
use crate::options::GeneratorOptions;
use formgen_core::{FieldKind, StyleField, StyleModel};
use serde::Serialize;

const HEADER_TEMPLATE: &str = r#"{{license}}

// THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT!

#pragma once

#include <QWidget>

QT_BEGIN_NAMESPACE
class QCheckBox;
class QComboBox;
class QLabel;
class QLineEdit;
class QPlainTextEdit;
class QPushButton;
class QWidget;
QT_END_NAMESPACE

namespace {{namespace}} {

class {{widget_class}} : public QWidget
{
    Q_OBJECT
public:
    {{widget_class}}(QWidget *parent = nullptr);

private:
{{declarations}}
};

} //{{namespace}}
"#;

const SOURCE_TEMPLATE: &str = r#"{{license}}

// THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT!

#include "{{header_file}}"

#include <utils/layoutbuilder.h>

#include <QCheckBox>
#include <QComboBox>
#include <QLabel>
#include <QLineEdit>
#include <QPlainTextEdit>
#include <QPushButton>
#include <QWidget>

using namespace Utils;

using namespace {{namespace}};

{{widget_class}}::{{widget_class}}(QWidget *parent)
    : QWidget(parent)
{
{{construction}}
    using namespace Layouting;

    Form {
{{layout}}    }.attachTo(this);
}
"#;

const BOOL_ITEMS: [&str; 3] = ["Default", "true", "false"];

/// Indentation added to a label per nesting level.
const LABEL_INDENT: &str = "  ";

#[derive(Serialize)]
struct HeaderContext<'a> {
    license: &'a str,
    namespace: &'a str,
    widget_class: &'a str,
    declarations: &'a str,
}

#[derive(Serialize)]
struct SourceContext<'a> {
    license: &'a str,
    namespace: &'a str,
    widget_class: &'a str,
    header_file: &'a str,
    construction: &'a str,
    layout: &'a str,
}

/// Qt Widgets settings-panel generator.
pub struct QtGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl<'a> QtGenerator<'a> {
    /// Create a generator with the Qt header and source templates registered.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("header", HEADER_TEMPLATE)?;
        engine.register_template("source", SOURCE_TEMPLATE)?;
        Ok(Self { engine, options })
    }
}

impl<'a> FormGenerator for QtGenerator<'a> {
    fn toolkit_name(&self) -> &'static str {
        "Qt Widgets"
    }

    fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn emit(&self, model: &StyleModel) -> Fragments {
        emit_model(model, &self.options)
    }

    fn render(&self, fragments: &Fragments) -> Result<GeneratedFiles> {
        let options = &self.options;

        let header = self.engine.render(
            "header",
            &HeaderContext {
                license: &options.license_header,
                namespace: &options.namespace,
                widget_class: &options.widget_class,
                declarations: &fragments.declaration,
            },
        )?;

        let header_file = options.header_file_name();
        let source = self.engine.render(
            "source",
            &SourceContext {
                license: &options.license_header,
                namespace: &options.namespace,
                widget_class: &options.widget_class,
                header_file: &header_file,
                construction: &fragments.construction,
                layout: &fragments.layout,
            },
        )?;

        Ok(GeneratedFiles { header, source })
    }
}

/// Emit fragments for every control of `model`, the preset control first.
pub fn emit_model(model: &StyleModel, options: &GeneratorOptions) -> Fragments {
    let mut out = Fragments::new();
    combobox(
        &mut out,
        &options.preset_control,
        options.style_presets.iter().map(String::as_str),
        0,
    );
    emit_fields(&mut out, &model.fields, 0);
    out
}

fn emit_fields(out: &mut Fragments, fields: &[StyleField], depth: usize) {
    for field in fields {
        emit_field(out, field, depth);
    }
}

fn emit_field(out: &mut Fragments, field: &StyleField, depth: usize) {
    let name = field.name.as_str();
    match &field.kind {
        FieldKind::Bool => combobox(out, name, BOOL_ITEMS.iter().copied(), depth),
        FieldKind::Enum { labels, .. } => {
            combobox(out, name, labels.iter().map(String::as_str), depth)
        }
        FieldKind::Scalar(_) => editor(out, name, "QLineEdit", depth),
        FieldKind::StringList => editor(out, name, "QPlainTextEdit", depth),
        FieldKind::Struct { fields, .. } => {
            out.layout.push_str(&format!(
                "        new QLabel(\"{}{}\"), br,\n",
                indent(depth),
                name
            ));
            emit_fields(out, fields, depth + 1);
        }
    }
}

fn combobox<'s>(
    out: &mut Fragments,
    name: &str,
    items: impl IntoIterator<Item = &'s str>,
    depth: usize,
) {
    let items: String = items
        .into_iter()
        .map(|item| format!("\"{}\",", item))
        .collect();

    out.declaration
        .push_str(&format!("    QComboBox *m_{} = nullptr;\n", name));

    out.construction
        .push_str(&format!("    m_{name} = new QComboBox(this);\n"));
    out.construction
        .push_str(&format!("    m_{name}->addItems({{{items}}});\n"));
    out.construction
        .push_str(&format!("    m_{name}->setObjectName(\"{name}\");\n\n"));

    out.layout.push_str(&format!(
        "        new QLabel(\"{}{name}\"), m_{name}, br,\n",
        indent(depth)
    ));
}

/// A text editor with a "Set" button that commits its value.
fn editor(out: &mut Fragments, name: &str, widget: &str, depth: usize) {
    let commit = commit_control_name(name);

    out.declaration
        .push_str(&format!("    {widget} *m_{name} = nullptr;\n"));
    out.declaration
        .push_str(&format!("    QPushButton *m_{commit} = nullptr;\n"));

    out.construction
        .push_str(&format!("    m_{name} = new {widget}(this);\n"));
    out.construction
        .push_str(&format!("    m_{name}->setObjectName(\"{name}\");\n"));
    if widget == "QPlainTextEdit" {
        out.construction
            .push_str(&format!("    m_{name}->setFixedHeight(100);\n"));
    }
    out.construction
        .push_str(&format!("    m_{commit} = new QPushButton(\"Set\", this);\n\n"));
    out.construction
        .push_str(&format!("    m_{commit}->setObjectName(\"{commit}\");\n"));

    out.layout.push_str(&format!(
        "        new QLabel(\"{}{name}\"), Row {{m_{name}, m_{commit}}}, br,\n",
        indent(depth)
    ));
}

fn indent(depth: usize) -> String {
    LABEL_INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_core::ScalarType;
    use proptest::prelude::*;

    fn field(name: &str, kind: FieldKind) -> StyleField {
        StyleField {
            name: name.to_string(),
            kind,
        }
    }

    fn model(fields: Vec<StyleField>) -> StyleModel {
        StyleModel {
            class_name: "FormatStyle".to_string(),
            fields,
            skipped: Vec::new(),
        }
    }

    fn layout_lines(fragments: &Fragments) -> Vec<&str> {
        fragments.layout.lines().collect()
    }

    #[test]
    fn test_preset_control_is_first() {
        let fragments = emit_model(&model(vec![]), &GeneratorOptions::default());
        assert_eq!(
            fragments.declaration,
            "    QComboBox *m_BasedOnStyle = nullptr;\n"
        );
        assert!(fragments.construction.contains(
            "m_BasedOnStyle->addItems({\"LLVM\",\"Google\",\"Chromium\",\"Mozilla\",\"WebKit\",\"Microsoft\",\"GNU\",});"
        ));
        assert_eq!(
            layout_lines(&fragments),
            ["        new QLabel(\"BasedOnStyle\"), m_BasedOnStyle, br,"]
        );
    }

    #[test]
    fn test_bool_items() {
        let fragments = emit_model(
            &model(vec![field("Foo", FieldKind::Bool)]),
            &GeneratorOptions::default(),
        );
        assert!(fragments
            .construction
            .contains("    m_Foo->addItems({\"Default\",\"true\",\"false\",});\n"));
        assert!(fragments
            .construction
            .contains("    m_Foo->setObjectName(\"Foo\");\n"));
    }

    #[test]
    fn test_enum_labels_in_order() {
        let kind = FieldKind::Enum {
            name: "BraceStyle".to_string(),
            labels: vec!["X".to_string(), "Y".to_string()],
        };
        let fragments = emit_model(&model(vec![field("Bar", kind)]), &GeneratorOptions::default());
        assert!(fragments.construction.contains("m_Bar->addItems({\"X\",\"Y\",});"));
        assert!(fragments
            .declaration
            .contains("    QComboBox *m_Bar = nullptr;\n"));
    }

    #[test]
    fn test_scalar_gets_line_edit_and_commit_button() {
        let fragments = emit_model(
            &model(vec![field("ColumnLimit", FieldKind::Scalar(ScalarType::Unsigned))]),
            &GeneratorOptions::default(),
        );
        assert!(fragments
            .declaration
            .contains("    QLineEdit *m_ColumnLimit = nullptr;\n    QPushButton *m_setColumnLimit = nullptr;\n"));
        assert!(fragments.construction.ends_with(
            "    m_ColumnLimit = new QLineEdit(this);\n\
             \x20   m_ColumnLimit->setObjectName(\"ColumnLimit\");\n\
             \x20   m_setColumnLimit = new QPushButton(\"Set\", this);\n\
             \n\
             \x20   m_setColumnLimit->setObjectName(\"setColumnLimit\");\n"
        ));
        assert!(!fragments.construction.contains("setFixedHeight"));
        assert_eq!(
            layout_lines(&fragments)[1],
            "        new QLabel(\"ColumnLimit\"), Row {m_ColumnLimit, m_setColumnLimit}, br,"
        );
    }

    #[test]
    fn test_string_list_gets_plain_text_edit() {
        let fragments = emit_model(
            &model(vec![field("Macros", FieldKind::StringList)]),
            &GeneratorOptions::default(),
        );
        assert!(fragments
            .declaration
            .contains("    QPlainTextEdit *m_Macros = nullptr;\n"));
        assert!(fragments
            .construction
            .contains("    m_Macros->setFixedHeight(100);\n"));
    }

    #[test]
    fn test_struct_section_and_indentation() {
        let inner = field(
            "Deep",
            FieldKind::Struct {
                name: "DeepOptions".to_string(),
                fields: vec![field("Leaf", FieldKind::Bool)],
            },
        );
        let outer = field(
            "Baz",
            FieldKind::Struct {
                name: "BazOptions".to_string(),
                fields: vec![field("Inner", FieldKind::Scalar(ScalarType::Int)), inner],
            },
        );
        let fragments = emit_model(&model(vec![outer]), &GeneratorOptions::default());

        assert_eq!(
            layout_lines(&fragments)[1..],
            [
                "        new QLabel(\"Baz\"), br,",
                "        new QLabel(\"  Inner\"), Row {m_Inner, m_setInner}, br,",
                "        new QLabel(\"  Deep\"), br,",
                "        new QLabel(\"    Leaf\"), m_Leaf, br,",
            ]
        );
        assert!(!fragments.declaration.contains("m_Baz"));
        assert!(!fragments.declaration.contains("m_Deep"));
    }

    #[test]
    fn test_render_uses_options() {
        let options = GeneratorOptions::default()
            .with_namespace("Styles")
            .with_widget_class("StyleChecks")
            .with_file_stem("stylechecks")
            .with_license_header("// License");
        let generator = QtGenerator::new(options).unwrap();
        let files = generator
            .generate(&model(vec![field("Foo", FieldKind::Bool)]))
            .unwrap();

        assert!(files.header.starts_with("// License\n\n// THIS FILE IS AUTOMATICALLY GENERATED. DO NOT EDIT!\n"));
        assert!(files.header.contains("namespace Styles {\n"));
        assert!(files.header.contains("class StyleChecks : public QWidget\n"));
        assert!(files.header.contains("    StyleChecks(QWidget *parent = nullptr);\n"));
        assert!(files.header.ends_with("} //Styles\n"));

        assert!(files.source.contains("#include \"stylechecks.h\"\n"));
        assert!(files.source.contains("StyleChecks::StyleChecks(QWidget *parent)\n"));
        assert!(files.source.contains(
            "    Form {\n        new QLabel(\"BasedOnStyle\"), m_BasedOnStyle, br,\n"
        ));
        assert!(files.source.ends_with("    }.attachTo(this);\n}\n"));
    }

    #[test]
    fn test_toolkit_name() {
        let generator = QtGenerator::new(GeneratorOptions::default()).unwrap();
        assert_eq!(generator.toolkit_name(), "Qt Widgets");
    }

    proptest! {
        #[test]
        fn prop_one_label_per_leaf(names in proptest::collection::btree_set("[A-Z][a-z]{2,8}", 0..12)) {
            let fields: Vec<_> = names.iter().map(|n| field(n, FieldKind::Bool)).collect();
            let fragments = emit_model(&model(fields), &GeneratorOptions::default());
            prop_assert_eq!(fragments.layout.lines().count(), names.len() + 1);
            prop_assert_eq!(fragments.declaration.lines().count(), names.len() + 1);
        }
    }
}
