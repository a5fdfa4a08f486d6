//! Indentation configuration for code generation.

use serde::{Deserialize, Deserializer, de::Error};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C# default).
    pub const CSHARP: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

/// Accepts `indent = 4` or `indent = "tab"` in configuration files.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Spaces(u8),
            Named(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Spaces(width) => Ok(Self::Spaces(width)),
            Raw::Named(name) if name == "tab" => Ok(Self::Tab),
            Raw::Named(name) => Err(D::Error::custom(format!(
                "expected \"tab\" or a number of spaces, got \"{name}\""
            ))),
        }
    }
}
