use serde::Deserialize;

use crate::builder::Indent;

/// Settings of the view pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Namespace prefix of generated views.
    pub generated_namespace: String,
    /// Namespace of the runtime support types.
    pub runtime_namespace: String,
    /// Emit the runtime support units alongside the views.
    pub runtime_support: bool,
    #[serde(skip)]
    pub indent: Indent,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            generated_namespace: "UniTyped.Generated".to_string(),
            runtime_namespace: "UniTyped.Editor".to_string(),
            runtime_support: true,
            indent: Indent::CSHARP,
        }
    }
}

impl ViewOptions {
    /// `global::` qualified name of a runtime support type.
    pub fn runtime_type(&self, name: &str) -> String {
        format!("global::{}.{name}", self.runtime_namespace)
    }

    /// The accessor interface every view implements.
    pub fn view_interface(&self) -> String {
        self.runtime_type("ISerializedPropertyView")
    }

    /// Namespace of the view generated for a type in `namespace`.
    pub fn generated_namespace_for(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            self.generated_namespace.clone()
        } else {
            format!("{}.{namespace}", self.generated_namespace)
        }
    }
}
