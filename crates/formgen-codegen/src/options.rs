//! Generator configuration.

/// License header written at the top of every generated file.
pub const DEFAULT_LICENSE_HEADER: &str = "// Copyright (C) 2022 The Qt Company Ltd.\n\
// SPDX-License-Identifier: LicenseRef-Qt-Commercial OR GPL-3.0+ OR GPL-3.0 WITH Qt-GPL-exception-1.0";

/// Presets offered by the synthetic base-style control, in display order.
pub const DEFAULT_STYLE_PRESETS: [&str; 7] = [
    "LLVM",
    "Google",
    "Chromium",
    "Mozilla",
    "WebKit",
    "Microsoft",
    "GNU",
];

/// Options for settings-panel generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Header class whose fields become controls.
    pub class_name: String,
    /// Namespace of the generated widget class.
    pub namespace: String,
    /// Name of the generated widget class.
    pub widget_class: String,
    /// File name stem of the generated `.h`/`.cpp` pair.
    pub file_stem: String,
    /// Name of the synthetic base-style control prepended at the root.
    pub preset_control: String,
    /// Entries of the base-style control.
    pub style_presets: Vec<String>,
    /// License comment placed at the top of both files.
    pub license_header: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            class_name: "FormatStyle".to_string(),
            namespace: "ClangFormat".to_string(),
            widget_class: "ClangFormatChecks".to_string(),
            file_stem: "clangformatchecks".to_string(),
            preset_control: "BasedOnStyle".to_string(),
            style_presets: DEFAULT_STYLE_PRESETS.iter().map(|s| s.to_string()).collect(),
            license_header: DEFAULT_LICENSE_HEADER.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with the default clang-format settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_widget_class(mut self, name: impl Into<String>) -> Self {
        self.widget_class = name.into();
        self
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn with_style_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_presets = presets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_license_header(mut self, header: impl Into<String>) -> Self {
        self.license_header = header.into();
        self
    }

    /// File name of the generated header.
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.file_stem)
    }

    /// File name of the generated source.
    pub fn source_file_name(&self) -> String {
        format!("{}.cpp", self.file_stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.class_name, "FormatStyle");
        assert_eq!(options.header_file_name(), "clangformatchecks.h");
        assert_eq!(options.source_file_name(), "clangformatchecks.cpp");
        assert_eq!(options.style_presets.len(), 7);
        assert_eq!(options.style_presets[0], "LLVM");
        assert!(options.license_header.starts_with("// Copyright"));
        assert!(options.license_header.contains("\n// SPDX-License-Identifier"));
    }

    #[test]
    fn test_builder_setters() {
        let options = GeneratorOptions::new()
            .with_widget_class("StyleChecks")
            .with_file_stem("stylechecks")
            .with_style_presets(["A", "B"]);
        assert_eq!(options.widget_class, "StyleChecks");
        assert_eq!(options.header_file_name(), "stylechecks.h");
        assert_eq!(options.style_presets, vec!["A".to_string(), "B".to_string()]);
    }
}
