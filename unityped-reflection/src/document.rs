//! Reading tags, layers and sorting layers out of `TagManager.asset`.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};

/// A named layer at its declared slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Position in the layer list, counting empty slots.
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingLayer {
    pub id: u32,
    pub name: String,
}

/// Project-wide names declared in the Unity project settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub tags: Vec<String>,
    pub layers: Vec<Layer>,
    pub sorting_layers: Vec<SortingLayer>,
}

impl ProjectMetadata {
    /// Load and parse the settings document at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml_str(&src, &path.display().to_string())
    }

    /// Parse a (possibly multi-document) settings document.
    ///
    /// Every document with a `TagManager` root key contributes. Sections
    /// that are missing or not shaped as expected are skipped on their own.
    pub fn from_yaml_str(src: &str, filename: &str) -> Result<Self> {
        let mut metadata = ProjectMetadata::default();

        for document in serde_yaml::Deserializer::from_str(src) {
            let value =
                Value::deserialize(document).map_err(|e| Error::parse(e, src, filename))?;
            let Some(manager) = untagged(&value).get("TagManager").map(untagged) else {
                continue;
            };
            if !manager.is_mapping() {
                tracing::debug!("TagManager is not a mapping, skipping document");
                continue;
            }

            metadata.read_tags(manager);
            metadata.read_layers(manager);
            metadata.read_sorting_layers(manager);
        }

        tracing::debug!(
            tags = metadata.tags.len(),
            layers = metadata.layers.len(),
            sorting_layers = metadata.sorting_layers.len(),
            "read project metadata"
        );
        Ok(metadata)
    }

    fn read_tags(&mut self, manager: &Value) {
        let Some(tags) = section(manager, "tags") else {
            return;
        };
        self.tags.extend(
            tags.iter()
                .filter_map(scalar)
                .filter(|name| !name.is_empty()),
        );
    }

    fn read_layers(&mut self, manager: &Value) {
        let Some(layers) = section(manager, "layers") else {
            return;
        };
        for (index, entry) in layers.iter().enumerate() {
            let Some(name) = scalar(entry) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            self.layers.push(Layer { index, name });
        }
    }

    fn read_sorting_layers(&mut self, manager: &Value) {
        let Some(entries) = section(manager, "m_SortingLayers") else {
            return;
        };
        for entry in entries {
            let entry = untagged(entry);
            let name = entry.get("name").and_then(scalar).unwrap_or_default();
            let id = entry.get("uniqueID").and_then(scalar).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            match id.parse::<u32>() {
                Ok(id) => self.sorting_layers.push(SortingLayer { id, name }),
                Err(_) => {
                    tracing::debug!(%name, %id, "skipping sorting layer without a valid id");
                }
            }
        }
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

fn section<'a>(manager: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    let seq = manager.get(key).map(untagged)?.as_sequence();
    if seq.is_none() {
        tracing::debug!(section = key, "section is not a sequence, skipping");
    }
    seq
}

/// Text of a scalar node; `~` and empty entries read as "".
fn scalar(value: &Value) -> Option<String> {
    match untagged(value) {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
