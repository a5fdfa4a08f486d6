//! `unityped.toml`: output layout and pipeline settings.
//!
//! ```toml
//! [output]
//! dir = "Assets/Generated"
//! indent = 4
//! extension = ".g.cs"
//!
//! [views]
//! generated_namespace = "UniTyped.Generated"
//! runtime_namespace = "UniTyped.Editor"
//! runtime_support = true
//!
//! [reflection]
//! enabled = true
//! required_assembly = "UniTyped"
//! settings = "ProjectSettings/TagManager.asset"
//! namespace = "UniTyped.Reflection"
//! ```
//!
//! Every key is optional.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use unityped_codegen::ViewOptions;
use unityped_codegen::builder::Indent;
use unityped_core::is_valid_identifier;
use unityped_reflection::ReflectionOptions;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "unityped.toml";

/// Where and how generated files are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub indent: Indent,
    /// Suffix replacing `.g.cs` on every file name.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("Generated"),
            indent: Indent::CSHARP,
            extension: ".g.cs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub views: ViewOptions,
    pub reflection: ReflectionOptions,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// View options with the configured indentation applied.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            indent: self.output.indent,
            ..self.views.clone()
        }
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let namespaces = [
            ("views.generated_namespace", &self.views.generated_namespace),
            ("views.runtime_namespace", &self.views.runtime_namespace),
            ("reflection.namespace", &self.reflection.namespace),
        ];
        for (key, namespace) in namespaces {
            if !is_namespace(namespace) {
                return Err(Error::validation(
                    format!("`{key}` is not a valid C# namespace: `{namespace}`"),
                    namespace,
                    src,
                    filename,
                ));
            }
        }

        if !self.output.extension.starts_with('.') {
            return Err(Error::validation(
                format!(
                    "`output.extension` must start with a dot: `{}`",
                    self.output.extension
                ),
                &self.output.extension,
                src,
                filename,
            ));
        }
        Ok(())
    }
}

fn is_namespace(name: &str) -> bool {
    name.split('.').all(is_valid_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.views.generated_namespace, "UniTyped.Generated");
        assert_eq!(config.reflection.required_assembly, "UniTyped");
        assert_eq!(
            config.reflection.settings,
            PathBuf::from("ProjectSettings/TagManager.asset")
        );
    }

    #[test]
    fn test_sections() {
        let config: Config = r#"
            [output]
            dir = "Assets/Generated"
            indent = "tab"
            extension = ".cs"

            [views]
            runtime_support = false

            [reflection]
            enabled = false
            anchor = "Packages/com.ruccho.unityped/Runtime/Scripts/ProjectAnchor.cs"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.output.dir, PathBuf::from("Assets/Generated"));
        assert_eq!(config.output.extension, ".cs");
        assert!(!config.views.runtime_support);
        assert_eq!(config.views.runtime_namespace, "UniTyped.Editor");
        assert!(!config.reflection.enabled);
        assert!(config.reflection.anchor.is_some());
        assert_eq!(config.view_options().indent, Indent::Tab);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Config::from_str("[output]\nindent = [1]\n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_namespace() {
        let err = Config::from_str("[views]\ngenerated_namespace = \"My Views\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`views.generated_namespace` is not a valid C# namespace: `My Views`"
        );
        match *err {
            Error::Validation { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extension_needs_dot() {
        let err = Config::from_str("[output]\nextension = \"cs\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[reflection]\nnamespace = \"Game.Meta\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.reflection.namespace, "Game.Meta");

        let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
